//! Composite configuration
//!
//! Configuration loaded from `.composite.toml`. Every field has a default so a
//! partial (or missing) file is fine.

use anyhow::{Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Composite configuration loaded from `.composite.toml`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CompositeConfig {
    /// Display name of the local participant
    #[serde(default)]
    pub display_name: String,

    /// Log level (`error`, `warn`, `info`, `debug`, `trace`); `RUST_LOG` wins
    #[serde(default)]
    pub log_level: Option<String>,

    #[serde(default)]
    pub calling: CallingOptions,

    #[serde(default)]
    pub chat: ChatOptions,
}

/// Options of the calling composite
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CallingOptions {
    /// Window in which repeated user intents (camera toggle, end call) are dropped
    pub action_throttle_ms: u64,
    /// Minimum spacing between participant list updates coming from the service
    pub participant_update_throttle_ms: u64,
    /// Pause after starting the local video stream before reporting success
    pub camera_settle_delay_ms: u64,
    /// Turn the camera on during setup when permission allows
    pub camera_on_by_default: bool,
    /// Join unmuted
    pub microphone_on_by_default: bool,
    /// Host overrides for the control bar buttons
    pub buttons: ButtonOptions,
}

/// Initial enabled and visible flags of one control bar button
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct ButtonOption {
    pub enabled: bool,
    pub visible: bool,
}

impl Default for ButtonOption {
    fn default() -> Self {
        Self {
            enabled: true,
            visible: true,
        }
    }
}

/// Buttons the host wants to control, per screen
///
/// A button left out keeps the composite's own behavior and cannot be
/// updated later.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ButtonOptions {
    pub setup_camera: Option<ButtonOption>,
    pub setup_microphone: Option<ButtonOption>,
    pub setup_audio_device: Option<ButtonOption>,
    pub call_camera: Option<ButtonOption>,
    pub call_microphone: Option<ButtonOption>,
    pub call_audio_device: Option<ButtonOption>,
}

impl Default for CallingOptions {
    fn default() -> Self {
        Self {
            action_throttle_ms: 500,
            participant_update_throttle_ms: 1250,
            camera_settle_delay_ms: 1000,
            camera_on_by_default: false,
            microphone_on_by_default: false,
            buttons: ButtonOptions::default(),
        }
    }
}

impl CallingOptions {
    pub fn action_throttle(&self) -> Duration {
        Duration::from_millis(self.action_throttle_ms)
    }

    pub fn participant_update_throttle(&self) -> Duration {
        Duration::from_millis(self.participant_update_throttle_ms)
    }

    pub fn camera_settle_delay(&self) -> Duration {
        Duration::from_millis(self.camera_settle_delay_ms)
    }
}

/// Options of the chat composite
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ChatOptions {
    /// Thread to join
    pub thread_id: Option<String>,
    /// How long a typing indicator stays visible without a refresh
    pub typing_indicator_timeout_secs: u64,
    /// Number of messages requested per page of history
    pub page_size: u32,
}

impl Default for ChatOptions {
    fn default() -> Self {
        Self {
            thread_id: None,
            typing_indicator_timeout_secs: 8,
            page_size: 50,
        }
    }
}

impl ChatOptions {
    pub fn typing_indicator_timeout(&self) -> Duration {
        Duration::from_secs(self.typing_indicator_timeout_secs)
    }
}

impl Default for CompositeConfig {
    fn default() -> Self {
        Self {
            display_name: String::new(),
            log_level: None,
            calling: CallingOptions::default(),
            chat: ChatOptions::default(),
        }
    }
}

impl CompositeConfig {
    /// Load config from CWD first, then the config directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match Self::from_toml_str(&content) {
                Ok(config) => {
                    log::info!("Loaded composite config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {:#}", e);
                }
            }
        }

        log::debug!("Using default composite config");
        Self::default()
    }

    /// Parse a config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid composite config")
    }

    /// Effective log level: `RUST_LOG`, then `log_level`, then `Debug`
    pub fn log_level(&self) -> LevelFilter {
        let from_env = std::env::var("RUST_LOG").ok();
        Self::parse_level(from_env.as_deref().or(self.log_level.as_deref()))
    }

    fn parse_level(value: Option<&str>) -> LevelFilter {
        value
            .and_then(|v| v.trim().parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::Debug)
    }
}

//! Configuration and file management for the composites
//!
//! This crate provides:
//! - Platform directories for config and log files
//! - Configuration file discovery (TOML)
//! - Composite configuration (`CompositeConfig`)

pub mod composite_config;
pub mod config_file;
pub mod paths;

pub use composite_config::{
    ButtonOption, ButtonOptions, CallingOptions, ChatOptions, CompositeConfig,
};
pub use config_file::load_config_file;
pub use paths::{config_dir, log_dir, log_file_path};

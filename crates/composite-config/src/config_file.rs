use std::path::Path;

const CONFIG_FILE: &str = ".composite.toml";

/// Load config file content from CWD first, then the platform config directory
///
/// Searches for:
/// 1. `.composite.toml` in the current working directory
/// 2. `config.toml` in the platform config directory (see [`crate::paths`])
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    if let Some(content) = read_if_present(Path::new(CONFIG_FILE)) {
        return Some(content);
    }

    match crate::paths::global_config_path() {
        Ok(path) => read_if_present(&path),
        Err(e) => {
            log::debug!("No global config location: {:#}", e);
            None
        }
    }
}

fn read_if_present(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            log::debug!("Loaded config from {}", path.display());
            Some(content)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => {
            log::warn!("Failed to read config file {}: {}", path.display(), e);
            None
        }
    }
}

//! Standard locations for tickline configuration

use std::path::PathBuf;

/// File name of the engine tuning config
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Per-user config directory
///
/// Returns: `<config_dir>/tickline` (e.g. `~/.config/tickline` on Linux),
/// falling back to the home directory and then the working directory.
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tickline")
}

/// Returns: `<config_dir>/tickline/config.yaml`
pub fn default_config_path() -> PathBuf {
    default_config_dir().join(CONFIG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir_ends_with_app_name() {
        assert!(default_config_dir().ends_with("tickline"));
    }

    #[test]
    fn test_config_path_includes_filename() {
        let path = default_config_path();
        assert!(path.ends_with("tickline/config.yaml"));
    }
}

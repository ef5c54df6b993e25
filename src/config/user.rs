//! User configuration loading for semtrack.
//!
//! User config location: $XDG_CONFIG_HOME/semtrack/semtrack.toml
//! Fallback: the platform config directory (e.g. ~/.config/semtrack/semtrack.toml)

use std::path::PathBuf;

use super::load_settings_file;
use super::settings::TrackerSettings;
use crate::error::TrackerResult;

pub const CONFIG_DIR_NAME: &str = "semtrack";
pub const CONFIG_FILE_NAME: &str = "semtrack.toml";

/// Returns the path to the user configuration file.
///
/// The path is determined by:
/// 1. If $XDG_CONFIG_HOME is set: $XDG_CONFIG_HOME/semtrack/semtrack.toml
/// 2. Otherwise: `dirs::config_dir()`/semtrack/semtrack.toml
///
/// Returns None if neither location can be determined.
pub fn user_config_path() -> Option<PathBuf> {
    let base = match std::env::var_os("XDG_CONFIG_HOME") {
        Some(xdg_config) if !xdg_config.is_empty() => PathBuf::from(xdg_config),
        _ => dirs::config_dir()?,
    };
    Some(base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Loads the user configuration file.
///
/// A missing file is not an error: it yields `Ok(None)`.
pub fn load_user_config() -> TrackerResult<Option<TrackerSettings>> {
    let Some(path) = user_config_path() else {
        return Ok(None);
    };
    if !path.exists() {
        return Ok(None);
    }
    load_settings_file(&path).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;
    use std::fs;
    use tempfile::TempDir;

    /// Runs `f` with XDG_CONFIG_HOME set to `value`, restoring it afterwards.
    fn with_xdg_config_home<R>(value: &std::path::Path, f: impl FnOnce() -> R) -> R {
        let original = env::var_os("XDG_CONFIG_HOME");
        // SAFETY: callers are #[serial(xdg_env)], so no other test touches the
        // environment concurrently.
        unsafe {
            env::set_var("XDG_CONFIG_HOME", value);
        }

        let result = f();

        // SAFETY: Same as above - restoring original env state
        unsafe {
            match original {
                Some(val) => env::set_var("XDG_CONFIG_HOME", val),
                None => env::remove_var("XDG_CONFIG_HOME"),
            }
        }
        result
    }

    #[test]
    #[serial(xdg_env)]
    fn test_user_config_path_uses_xdg_config_home_when_set() {
        let path = with_xdg_config_home(std::path::Path::new("/custom/config"), user_config_path);

        assert_eq!(
            path,
            Some(PathBuf::from("/custom/config/semtrack/semtrack.toml")),
            "should use XDG_CONFIG_HOME/semtrack/semtrack.toml"
        );
    }

    #[test]
    #[serial(xdg_env)]
    fn test_missing_user_config_is_none() {
        let dir = TempDir::new().unwrap();
        let loaded = with_xdg_config_home(dir.path(), load_user_config).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    #[serial(xdg_env)]
    fn test_loads_user_config_from_xdg_dir() {
        let dir = TempDir::new().unwrap();
        let config_dir = dir.path().join(CONFIG_DIR_NAME);
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(config_dir.join(CONFIG_FILE_NAME), "repaintDelayMs = 20\n").unwrap();

        let loaded = with_xdg_config_home(dir.path(), load_user_config)
            .unwrap()
            .unwrap();
        assert_eq!(loaded.repaint_delay_ms, Some(20));
    }

    #[test]
    #[serial(xdg_env)]
    fn test_malformed_user_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        let config_dir = dir.path().join(CONFIG_DIR_NAME);
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(config_dir.join(CONFIG_FILE_NAME), "repaintDelayMs = \"soon\"\n").unwrap();

        assert!(with_xdg_config_home(dir.path(), load_user_config).is_err());
    }
}

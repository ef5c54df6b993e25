pub mod defaults;
pub mod settings;
pub mod user;

pub use settings::{ThemeSettings, TrackerSettings};
pub use user::{load_user_config, user_config_path};

use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::{TrackerError, TrackerResult};
use crate::refresh::DEFAULT_REPAINT_DELAY;
use crate::render::Theme;
use defaults::default_settings;

const LOG_TARGET: &str = "semtrack::config";

/// Settings resolved into the values the tracker runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    pub repaint_delay: Duration,
    pub filter_while_pending: bool,
    pub theme: Theme,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig::from(default_settings())
    }
}

impl From<TrackerSettings> for TrackerConfig {
    fn from(settings: TrackerSettings) -> Self {
        Self {
            repaint_delay: settings
                .repaint_delay_ms
                .map_or(DEFAULT_REPAINT_DELAY, Duration::from_millis),
            filter_while_pending: settings.filter_while_pending.unwrap_or(true),
            theme: Theme::new(settings.theme.into_iter().collect()),
        }
    }
}

/// Merge a sequence of optional settings, later entries taking precedence.
pub fn merge_all(configs: &[Option<TrackerSettings>]) -> Option<TrackerSettings> {
    configs.iter().cloned().reduce(merge_settings).flatten()
}

/// Merge two TrackerSettings, preferring values from `primary` over `fallback`
pub fn merge_settings(
    fallback: Option<TrackerSettings>,
    primary: Option<TrackerSettings>,
) -> Option<TrackerSettings> {
    match (fallback, primary) {
        (None, None) => None,
        (Some(settings), None) => Some(settings),
        (None, Some(settings)) => Some(settings),
        (Some(fallback), Some(primary)) => Some(TrackerSettings {
            repaint_delay_ms: primary.repaint_delay_ms.or(fallback.repaint_delay_ms),
            filter_while_pending: primary.filter_while_pending.or(fallback.filter_while_pending),
            theme: merge_theme(fallback.theme, primary.theme),
        }),
    }
}

fn merge_theme(mut fallback: ThemeSettings, primary: ThemeSettings) -> ThemeSettings {
    for (key, entry) in primary {
        let merged = match fallback.remove(&key) {
            Some(existing) => existing.merged_with(entry),
            None => entry,
        };
        fallback.insert(key, merged);
    }
    fallback
}

/// Reads and parses one settings file.
pub fn load_settings_file(path: &Path) -> TrackerResult<TrackerSettings> {
    let contents = fs::read_to_string(path)?;
    toml::from_str(&contents).map_err(|err| {
        TrackerError::config(format!("failed to parse {}: {}", path.display(), err))
    })
}

/// Loads the layered configuration: defaults < user config < `explicit`.
///
/// A broken user config is reported and skipped. A broken explicit file is an
/// error, since the caller asked for it by name.
pub fn load_settings(explicit: Option<&Path>) -> TrackerResult<TrackerSettings> {
    let defaults = Some(default_settings());

    let user_config = match load_user_config() {
        Ok(Some(settings)) => {
            log::info!(target: LOG_TARGET, "Loaded user config from XDG_CONFIG_HOME");
            Some(settings)
        }
        Ok(None) => None,
        Err(err) => {
            log::warn!(target: LOG_TARGET, "Failed to load user config: {}", err);
            None
        }
    };

    let explicit_settings = match explicit {
        Some(path) => {
            let settings = load_settings_file(path)?;
            log::info!(target: LOG_TARGET, "Loaded config file: {}", path.display());
            Some(settings)
        }
        None => None,
    };

    Ok(merge_all(&[defaults, user_config, explicit_settings]).unwrap_or_default())
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::render::ThemeEntry;

/// Theme table keyed by [`Category::theme_key`](crate::highlight::Category::theme_key).
pub type ThemeSettings = BTreeMap<String, ThemeEntry>;

/// Contents of a `semtrack.toml` file. Every key is optional so that layers
/// can be merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repaint_delay_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_while_pending: Option<bool>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub theme: ThemeSettings,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Rgb;

    #[test]
    fn test_parses_camel_case_keys() {
        let settings: TrackerSettings = toml::from_str(
            r##"
            repaintDelayMs = 12
            filterWhilePending = false

            [theme.class]
            color = "#0000c0"
            bold = true
            "##,
        )
        .unwrap();

        assert_eq!(settings.repaint_delay_ms, Some(12));
        assert_eq!(settings.filter_while_pending, Some(false));
        assert_eq!(
            settings.theme.get("class"),
            Some(&ThemeEntry::color(Rgb::new(0, 0, 0xc0)).bold())
        );
    }

    #[test]
    fn test_empty_file_is_all_unset() {
        let settings: TrackerSettings = toml::from_str("").unwrap();
        assert_eq!(settings, TrackerSettings::default());
    }

    #[test]
    fn test_rejects_malformed_color() {
        let result = toml::from_str::<TrackerSettings>(
            r#"
            [theme.class]
            color = "blue"
            "#,
        );
        assert!(result.is_err());
    }
}

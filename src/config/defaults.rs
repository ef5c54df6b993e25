//! Default configuration values for semtrack.
//!
//! These are the lowest configuration layer and also what `config init`
//! prints as a starting template.

use super::settings::{ThemeSettings, TrackerSettings};
use crate::highlight::theme_keys;
use crate::refresh::DEFAULT_REPAINT_DELAY;
use crate::render::{Rgb, ThemeEntry};

/// Returns the default TrackerSettings.
pub fn default_settings() -> TrackerSettings {
    TrackerSettings {
        repaint_delay_ms: Some(DEFAULT_REPAINT_DELAY.as_millis() as u64),
        filter_while_pending: Some(true),
        theme: default_theme(),
    }
}

/// Returns the default theme table, one entry per theme key.
pub fn default_theme() -> ThemeSettings {
    const PURPLE: Rgb = Rgb::new(0x7f, 0x00, 0x55);
    const NAVY: Rgb = Rgb::new(0x00, 0x00, 0xc0);
    const TEAL: Rgb = Rgb::new(0x00, 0x50, 0x50);
    const OLIVE: Rgb = Rgb::new(0x64, 0x64, 0x00);
    const GREEN: Rgb = Rgb::new(0x00, 0x80, 0x40);
    const BROWN: Rgb = Rgb::new(0x80, 0x40, 0x00);
    const GRAY: Rgb = Rgb::new(0x64, 0x64, 0x64);
    const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);
    const STRING: Rgb = Rgb::new(0x2a, 0x00, 0xff);
    const NUMBER: Rgb = Rgb::new(0x12, 0x50, 0x9c);

    let entries = [
        (theme_keys::ANNOTATION, ThemeEntry::color(GRAY)),
        (theme_keys::BUILTIN, ThemeEntry::color(PURPLE).bold()),
        (theme_keys::CLASS, ThemeEntry::color(TEAL)),
        (theme_keys::CONSTRUCTOR, ThemeEntry::color(TEAL)),
        (theme_keys::DYNAMIC_TYPE, ThemeEntry::color(TEAL).italic()),
        (theme_keys::ENUM, ThemeEntry::color(TEAL)),
        (theme_keys::ENUM_CONSTANT, ThemeEntry::color(NAVY).italic()),
        (theme_keys::FIELD, ThemeEntry::color(NAVY)),
        (theme_keys::FUNCTION, ThemeEntry::color(BLACK)),
        (theme_keys::FUNCTION_TYPE_ALIAS, ThemeEntry::color(TEAL)),
        (theme_keys::GETTER_DECLARATION, ThemeEntry::color(BLACK).bold()),
        (theme_keys::IMPORT_PREFIX, ThemeEntry::color(BROWN)),
        (theme_keys::LABEL, ThemeEntry::color(GRAY)),
        (theme_keys::LOCAL_VARIABLE, ThemeEntry::color(BLACK)),
        (
            theme_keys::LOCAL_VARIABLE_DECLARATION,
            ThemeEntry::color(BLACK).bold(),
        ),
        (theme_keys::METHOD, ThemeEntry::color(BLACK)),
        (
            theme_keys::METHOD_DECLARATION_NAME,
            ThemeEntry::color(BLACK).bold(),
        ),
        (theme_keys::NUMBER, ThemeEntry::color(NUMBER)),
        (theme_keys::PARAMETER_VARIABLE, ThemeEntry::color(OLIVE)),
        (theme_keys::SETTER_DECLARATION, ThemeEntry::color(BLACK).bold()),
        (theme_keys::STATIC_FIELD, ThemeEntry::color(NAVY).italic()),
        (theme_keys::STATIC_METHOD, ThemeEntry::color(BLACK).italic()),
        (
            theme_keys::STATIC_METHOD_DECLARATION_NAME,
            ThemeEntry::color(BLACK).bold().italic(),
        ),
        (theme_keys::STRING, ThemeEntry::color(STRING)),
        (theme_keys::TYPE_PARAMETER, ThemeEntry::color(GREEN).bold()),
    ];

    entries
        .into_iter()
        .map(|(key, entry)| (key.to_string(), entry))
        .collect()
}

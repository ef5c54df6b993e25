//! Category → style lookup.
//!
//! The tracker never decides how a category is drawn; it asks a
//! [`ThemeLookup`]. [`Theme`] is the table-driven implementation backed by
//! configuration, and [`LiveTheme`] lets a reloaded table take effect on the
//! next paint.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use arc_swap::ArcSwap;
use serde::{Deserialize, Serialize};

use crate::error::TrackerError;
use crate::highlight::Category;

/// 24-bit color, written as `#rrggbb` in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for Rgb {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TrackerError::config(format!("invalid color {s:?}, expected #rrggbb"));
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = TrackerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(rgb: Rgb) -> Self {
        rgb.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Resolved foreground color. `Unset` means the theme names the category
/// but gives it no color; such ranges are not painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Unset,
    Rgb(Rgb),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Style {
    pub foreground: Color,
    pub bold: bool,
    pub italic: bool,
}

/// Pure lookup from a highlight category to its style.
pub trait ThemeLookup: Send + Sync {
    /// `None` when the category is not styled at all.
    fn style_for(&self, category: Category) -> Option<Style>;
}

/// One theme table entry, keyed by [`Category::theme_key`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgb>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
}

impl ThemeEntry {
    pub fn color(color: Rgb) -> Self {
        Self {
            color: Some(color),
            ..Self::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = Some(true);
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = Some(true);
        self
    }

    /// Overlays `primary` on top of `self`, field by field.
    pub fn merged_with(self, primary: ThemeEntry) -> ThemeEntry {
        ThemeEntry {
            color: primary.color.or(self.color),
            bold: primary.bold.or(self.bold),
            italic: primary.italic.or(self.italic),
        }
    }
}

/// Table-driven theme.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Theme {
    entries: HashMap<String, ThemeEntry>,
}

impl Theme {
    pub fn new(entries: HashMap<String, ThemeEntry>) -> Self {
        Self { entries }
    }

    pub fn entry(&self, key: &str) -> Option<&ThemeEntry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ThemeLookup for Theme {
    fn style_for(&self, category: Category) -> Option<Style> {
        let entry = self.entries.get(category.theme_key()?)?;
        Some(Style {
            foreground: entry.color.map_or(Color::Unset, Color::Rgb),
            bold: entry.bold.unwrap_or(false),
            italic: entry.italic.unwrap_or(false),
        })
    }
}

/// A [`Theme`] that can be swapped while painters are reading it.
pub struct LiveTheme {
    current: ArcSwap<Theme>,
}

impl LiveTheme {
    pub fn new(theme: Theme) -> Self {
        Self {
            current: ArcSwap::from_pointee(theme),
        }
    }

    /// Replaces the theme; the next lookup sees the new table.
    pub fn store(&self, theme: Theme) {
        self.current.store(Arc::new(theme));
    }

    pub fn load(&self) -> Arc<Theme> {
        self.current.load_full()
    }
}

impl fmt::Debug for LiveTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiveTheme")
            .field("current", &"ArcSwap<Theme>")
            .finish()
    }
}

impl ThemeLookup for LiveTheme {
    fn style_for(&self, category: Category) -> Option<Style> {
        self.current.load().style_for(category)
    }
}

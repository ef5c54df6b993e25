//! Deciding which tracked ranges to paint and how.

mod filter;
pub mod theme;

pub use filter::{RenderFilter, StyledRange};
pub use theme::{Color, LiveTheme, Rgb, Style, Theme, ThemeEntry, ThemeLookup};

use std::ops::Range;

use serde::Serialize;

use crate::highlight::Category;
use crate::tracking::RangeSet;

use super::theme::{Color, Style, ThemeLookup};

/// A tracked range selected for painting, with its resolved style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyledRange {
    pub offset: usize,
    pub length: usize,
    pub category: Category,
    pub style: Style,
}

/// Picks the tracked ranges to paint for one damaged region.
pub struct RenderFilter<'a> {
    theme: &'a dyn ThemeLookup,
}

impl<'a> RenderFilter<'a> {
    pub fn new(theme: &'a dyn ThemeLookup) -> Self {
        Self { theme }
    }

    /// Styles for every range lying wholly inside `damaged`.
    ///
    /// Ranges straddling the region boundary are left for a later pass whose
    /// region covers them. Zero-length markers have nothing to paint. Ranges
    /// whose category has no style, or resolves to [`Color::Unset`], are
    /// skipped.
    pub fn styles_for(&self, set: &RangeSet, damaged: Range<usize>) -> Vec<StyledRange> {
        set.ranges()
            .iter()
            .filter(|range| !range.is_empty())
            .filter(|range| range.offset >= damaged.start && range.end() <= damaged.end)
            .filter_map(|range| {
                let style = self.theme.style_for(range.category)?;
                if style.foreground == Color::Unset {
                    return None;
                }
                Some(StyledRange {
                    offset: range.offset,
                    length: range.length,
                    category: range.category,
                    style,
                })
            })
            .collect()
    }
}

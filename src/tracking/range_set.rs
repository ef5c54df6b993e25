use serde::Serialize;

use crate::highlight::{Category, HighlightRange};

/// Mutable position of one highlight, adjusted as edits arrive.
///
/// A range that loses all of its text is kept as a zero-length marker rather
/// than removed, so typing at that point can grow it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrackedRange {
    pub category: Category,
    pub offset: usize,
    pub length: usize,
}

impl TrackedRange {
    pub fn new(category: Category, offset: usize, length: usize) -> Self {
        Self {
            category,
            offset,
            length,
        }
    }

    /// Exclusive end offset.
    pub fn end(&self) -> usize {
        self.offset + self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub(crate) fn update(&mut self, offset: usize, length: usize) {
        self.offset = offset;
        self.length = length;
    }
}

impl From<&HighlightRange> for TrackedRange {
    fn from(highlight: &HighlightRange) -> Self {
        Self::new(highlight.category, highlight.offset, highlight.length)
    }
}

/// All highlight positions currently believed valid for one document.
///
/// Besides the live ranges, the set remembers the analyzer delivery it was
/// built from and the document text at that moment. The text is only a cache
/// key: if an edit brings the buffer back to it, the delivery is reinstated
/// as-is.
#[derive(Debug, Default)]
pub struct RangeSet {
    ranges: Vec<TrackedRange>,
    last_highlights: Vec<HighlightRange>,
    last_text: Option<String>,
}

impl RangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swaps in a new analyzer delivery and the document text it applies to.
    ///
    /// Ranges keep the analyzer's emission order.
    pub fn replace(&mut self, highlights: Vec<HighlightRange>, document_text: String) {
        self.ranges = highlights.iter().map(TrackedRange::from).collect();
        self.last_highlights = highlights;
        self.last_text = Some(document_text);
    }

    /// Text captured by the last [`replace`](Self::replace), if any.
    pub fn snapshot_text(&self) -> Option<&str> {
        self.last_text.as_deref()
    }

    /// True once the analyzer has delivered at least one highlight set.
    pub fn is_populated(&self) -> bool {
        self.last_text.is_some()
    }

    pub fn ranges(&self) -> &[TrackedRange] {
        &self.ranges
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Drops every range and the remembered delivery.
    pub fn clear(&mut self) {
        self.ranges.clear();
        self.last_highlights.clear();
        self.last_text = None;
    }

    pub(crate) fn ranges_mut(&mut self) -> &mut [TrackedRange] {
        &mut self.ranges
    }

    /// Rebuilds the live ranges from the remembered delivery.
    pub(crate) fn reinstate_snapshot(&mut self) {
        self.ranges = self.last_highlights.iter().map(TrackedRange::from).collect();
    }

    /// First range that does not fit a document of `document_length` bytes.
    pub(crate) fn first_out_of_bounds(&self, document_length: usize) -> Option<&TrackedRange> {
        self.ranges.iter().find(|r| r.end() > document_length)
    }
}

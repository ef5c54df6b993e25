use crate::text::TextEdit;

use super::TrackedRange;

/// How an edit's replaced span sits relative to a tracked range.
///
/// Named from the edit's point of view: `Precedes` means the edit comes
/// before the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditRelation {
    /// Edit ends before the range starts.
    Precedes,
    /// Edit starts after the range ends.
    Succeeds,
    /// Edit lies within the range, boundaries included.
    Includes,
    /// Edit swallows the range entirely.
    IncludedBy,
    /// Edit starts before the range and ends inside it.
    OverlapsStart,
    /// Edit starts inside the range and ends past it.
    OverlapsEnd,
}

/// Classifies `range` against the span `edit` replaces.
///
/// The checks run in a fixed priority order, so every pair maps to exactly one
/// relation. An edit touching either boundary of a range (inserting right
/// before its first byte or right after its last) is `Includes`.
pub fn classify(range: &TrackedRange, edit: &TextEdit) -> EditRelation {
    let edit_offset = edit.offset;
    let edit_end = edit.end();
    let offset = range.offset;
    let end = range.end();

    if offset > edit_end {
        EditRelation::Precedes
    } else if end < edit_offset {
        EditRelation::Succeeds
    } else if offset <= edit_offset && end >= edit_end {
        EditRelation::Includes
    } else if offset <= edit_offset {
        EditRelation::OverlapsEnd
    } else if end >= edit_end {
        EditRelation::OverlapsStart
    } else {
        EditRelation::IncludedBy
    }
}

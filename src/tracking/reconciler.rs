//! Keeps a [`RangeSet`] valid across one buffer edit.
//!
//! Called once per edit, after the edit has been applied to the document and
//! with the range-set lock held for the whole call. Edits must arrive exactly
//! once and in order; a lost or duplicated edit leaves the set stale and is
//! not detected here beyond the bounds check at the end.

use crate::text::{TextEdit, leading_word_len, trailing_word_len};

use super::{EditRelation, RangeSet, TrackedRange, classify};

const LOG_TARGET: &str = "semtrack::reconcile";

/// What [`apply`] did with an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// No highlights delivered yet; nothing to track.
    Inactive,
    /// The document returned to the text of the last delivery, whose ranges
    /// were reinstated verbatim.
    Reinstated,
    /// The edit replaced the whole document with same-length text and was
    /// treated as a re-apply of the same content.
    WholeDocumentReplaced,
    /// Every range was adjusted individually.
    Updated,
}

/// Adjusts every range in `set` for `edit`.
///
/// `document_text` is the full document content after the edit.
pub fn apply(set: &mut RangeSet, edit: &TextEdit, document_text: &str) -> ReconcileOutcome {
    if !set.is_populated() {
        return ReconcileOutcome::Inactive;
    }

    if set.snapshot_text() == Some(document_text) {
        log::debug!(
            target: LOG_TARGET,
            "Document matches last highlighted text, reinstating {} ranges",
            set.len()
        );
        set.reinstate_snapshot();
        return ReconcileOutcome::Reinstated;
    }

    // Editors report reloads and branch switches as a full replacement. The
    // content is assumed unchanged; it is not compared.
    let prior_length = edit.prior_length(document_text.len());
    if edit.offset == 0
        && edit.deleted_length == prior_length
        && edit.inserted_len() == prior_length
    {
        log::debug!(
            target: LOG_TARGET,
            "Whole-document replacement of {} bytes, keeping ranges",
            edit.inserted_len()
        );
        return ReconcileOutcome::WholeDocumentReplaced;
    }

    for range in set.ranges_mut() {
        let relation = classify(range, edit);
        update_range(range, relation, edit);
    }

    log::trace!(
        target: LOG_TARGET,
        "Reconciled {} ranges for edit at {} ({:+} bytes)",
        set.len(),
        edit.offset,
        edit.delta()
    );

    if let Some(range) = set.first_out_of_bounds(document_text.len()) {
        log::error!(
            target: LOG_TARGET,
            "Tracked range {:?} exceeds document length {}; an edit notification was lost or duplicated",
            range,
            document_text.len()
        );
        debug_assert!(
            false,
            "tracked range {:?} exceeds document length {}",
            range,
            document_text.len()
        );
    }

    ReconcileOutcome::Updated
}

fn update_range(range: &mut TrackedRange, relation: EditRelation, edit: &TextEdit) {
    let inserted = edit.inserted_len();
    match relation {
        EditRelation::Precedes => {
            range.offset = range.offset + inserted - edit.deleted_length;
        }
        EditRelation::Succeeds => {}
        EditRelation::Includes => {
            range.length = range.length + inserted - edit.deleted_length;
        }
        EditRelation::IncludedBy => {
            range.update(edit.offset, 0);
        }
        EditRelation::OverlapsEnd => {
            // Keep the typed continuation of the identifier, drop the rest.
            let kept = leading_word_len(&edit.inserted_text);
            range.length = edit.offset - range.offset + kept;
        }
        EditRelation::OverlapsStart => {
            let kept = trailing_word_len(&edit.inserted_text);
            let excluded = inserted - kept;
            let deleted = edit.end() - range.offset;
            range.update(edit.offset + excluded, range.length - deleted + kept);
        }
    }
}

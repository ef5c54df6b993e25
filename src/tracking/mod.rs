//! Live highlight positions kept consistent with an editable buffer.
//!
//! ```text
//! analyzer ──► RangeSet::replace(highlights, text)
//!                   │
//! edit ──────► reconciler::apply(set, edit, text)   (one edit, lock held)
//!                   │
//! paint ─────► RenderFilter::styles_for(set, damaged)
//! ```

mod range_set;
pub mod reconciler;
mod relation;

pub use range_set::{RangeSet, TrackedRange};
pub use reconciler::ReconcileOutcome;
pub use relation::{EditRelation, classify};

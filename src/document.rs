//! The document collaborator.
//!
//! The editor owns the authoritative text. The tracker only needs to read it
//! under the document lock and to hear about every edit, in order, while that
//! lock is still held.
//!
//! Lock order is document first, then the tracker's range set, on every path.
//! `on_edit` is called with the document lock held, so a listener must never
//! call back into [`Document::read_text`] from it.

mod shared;

pub use shared::SharedDocument;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::text::TextEdit;

/// Handle returned by a subscription, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        ListenerId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Receives every buffer mutation.
pub trait EditListener: Send + Sync {
    /// Called after `edit` has been applied, with the document lock held.
    /// `document_text` is the full content after the edit.
    fn on_edit(&self, edit: &TextEdit, document_text: &str);
}

/// Read access and edit notifications for one open document.
pub trait Document: Send + Sync {
    /// Runs `reader` on the current content with the document lock held.
    fn read_text(&self, reader: &mut dyn FnMut(&str));

    fn add_edit_listener(&self, listener: Arc<dyn EditListener>) -> ListenerId;

    /// Returns false if `id` was not subscribed.
    fn remove_edit_listener(&self, id: ListenerId) -> bool;
}

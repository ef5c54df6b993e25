//! The analyzer side: highlight deliveries and content-sync status.
//!
//! The analyzer computes highlights on its own timeline and pushes them to
//! every subscriber of the file they belong to. Deliveries may arrive on any
//! thread.

use std::sync::Arc;

use dashmap::DashMap;

use crate::document::ListenerId;
use crate::highlight::HighlightRange;

const LOG_TARGET: &str = "semtrack::feed";

/// Receives highlight sets computed for one file.
pub trait HighlightsListener: Send + Sync {
    fn computed_highlights(&self, file: &str, highlights: &[HighlightRange]);
}

/// Whether the buffer holds changes the analyzer has not yet seen.
///
/// Highlights delivered while this is true were computed against older
/// content than the buffer shows.
pub trait ContentSyncStatus: Send + Sync {
    fn has_pending_content_changes(&self) -> bool;
}

type Subscribers = Vec<(ListenerId, Arc<dyn HighlightsListener>)>;

/// Per-file fan-out of highlight deliveries.
///
/// # Thread Safety
///
/// Uses `DashMap` so publishers and subscribers on different threads do not
/// contend on a single lock. Listeners are called after the map entry is
/// released, so a listener may unsubscribe itself.
#[derive(Default)]
pub struct HighlightFeed {
    subscribers: DashMap<String, Subscribers>,
}

impl HighlightFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, file: &str, listener: Arc<dyn HighlightsListener>) -> ListenerId {
        let id = ListenerId::next();
        self.subscribers
            .entry(file.to_string())
            .or_default()
            .push((id, listener));
        log::debug!(target: LOG_TARGET, "Subscribed {:?} to {}", id, file);
        id
    }

    /// Returns false if `id` was not subscribed to `file`.
    pub fn unsubscribe(&self, file: &str, id: ListenerId) -> bool {
        let Some(mut subscribers) = self.subscribers.get_mut(file) else {
            return false;
        };
        let before = subscribers.len();
        subscribers.retain(|(existing, _)| *existing != id);
        let removed = subscribers.len() != before;
        let now_empty = subscribers.is_empty();
        drop(subscribers);

        if now_empty {
            self.subscribers.remove_if(file, |_, subs| subs.is_empty());
        }
        if removed {
            log::debug!(target: LOG_TARGET, "Unsubscribed {:?} from {}", id, file);
        }
        removed
    }

    /// Delivers `highlights` to every subscriber of `file`.
    ///
    /// Returns the number of subscribers reached.
    pub fn publish(&self, file: &str, highlights: &[HighlightRange]) -> usize {
        let listeners: Vec<Arc<dyn HighlightsListener>> = match self.subscribers.get(file) {
            Some(subscribers) => subscribers
                .iter()
                .map(|(_, listener)| Arc::clone(listener))
                .collect(),
            None => Vec::new(),
        };

        log::trace!(
            target: LOG_TARGET,
            "Publishing {} highlights for {} to {} subscribers",
            highlights.len(),
            file,
            listeners.len()
        );
        for listener in &listeners {
            listener.computed_highlights(file, highlights);
        }
        listeners.len()
    }

    pub fn subscriber_count(&self, file: &str) -> usize {
        self.subscribers.get(file).map_or(0, |subs| subs.len())
    }
}

//! Per-document highlight tracking.
//!
//! [`HighlightTracker`] joins the two event streams that touch one document:
//!
//! ```text
//! analyzer ──publish──► HighlightFeed ──► on_highlights_computed ─┐
//!                                                                  ├─► RangeSet ─► styles_for ─► widget
//! editor ──apply_edit─► Document ───────► on_edit (reconcile) ────┘        │
//!                                                                          └─► RefreshScheduler
//! ```
//!
//! Both paths take the document lock before the range-set lock. Edits arrive
//! with the document lock already held; deliveries take it through
//! [`Document::read_text`].

use std::ops::Range;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use crate::analysis::{ContentSyncStatus, HighlightFeed, HighlightsListener};
use crate::config::TrackerConfig;
use crate::document::{Document, EditListener, ListenerId};
use crate::error::LockResultExt;
use crate::highlight::HighlightRange;
use crate::refresh::RefreshScheduler;
use crate::render::{RenderFilter, StyledRange, ThemeLookup};
use crate::text::TextEdit;
use crate::tracking::{RangeSet, ReconcileOutcome, TrackedRange, reconciler};

const LOG_TARGET: &str = "semtrack::tracker";

#[derive(Debug, Clone, Copy)]
struct Subscriptions {
    edits: ListenerId,
    highlights: ListenerId,
}

/// Keeps the analyzer's highlights aligned with one document as it is edited.
///
/// The tracker is registered with both the document and the feed, which hold
/// strong references to it. Call [`dispose`](Self::dispose) when the document
/// closes to detach it and release its state.
pub struct HighlightTracker {
    file: String,
    document: Arc<dyn Document>,
    feed: Arc<HighlightFeed>,
    theme: Arc<dyn ThemeLookup>,
    scheduler: RefreshScheduler,
    filter_while_pending: bool,
    sync_status: RwLock<Option<Arc<dyn ContentSyncStatus>>>,
    ranges: RwLock<RangeSet>,
    subscriptions: Mutex<Option<Subscriptions>>,
    disposed: AtomicBool,
}

impl HighlightTracker {
    /// Creates a tracker for `file` and subscribes it to edits of `document`
    /// and to highlight deliveries for `file`.
    ///
    /// `theme` and `scheduler` are usually built from the same `config`; only
    /// the delivery filter flag is read from it here.
    pub fn attach(
        file: impl Into<String>,
        document: Arc<dyn Document>,
        feed: Arc<HighlightFeed>,
        theme: Arc<dyn ThemeLookup>,
        scheduler: RefreshScheduler,
        config: &TrackerConfig,
    ) -> Arc<Self> {
        let tracker = Arc::new(Self {
            file: file.into(),
            document,
            feed,
            theme,
            scheduler,
            filter_while_pending: config.filter_while_pending,
            sync_status: RwLock::new(None),
            ranges: RwLock::new(RangeSet::new()),
            subscriptions: Mutex::new(None),
            disposed: AtomicBool::new(false),
        });

        let edits = tracker.document.add_edit_listener(tracker.clone());
        let highlights = tracker.feed.subscribe(&tracker.file, tracker.clone());
        *tracker
            .subscriptions
            .lock()
            .recover_poison("HighlightTracker::attach") = Some(Subscriptions { edits, highlights });

        log::debug!(target: LOG_TARGET, "Attached tracker to {}", tracker.file);
        tracker
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    /// Installs the collaborator consulted before accepting a delivery.
    ///
    /// Has no effect on deliveries unless the tracker was configured with
    /// `filter_while_pending`.
    pub fn set_content_sync_status(&self, status: Arc<dyn ContentSyncStatus>) {
        *self
            .sync_status
            .write()
            .recover_poison("HighlightTracker::set_content_sync_status") = Some(status);
    }

    /// Replaces the tracked ranges with a fresh analyzer result.
    ///
    /// The delivery is dropped when the buffer has changes the analyzer has
    /// not seen yet, since its offsets would describe older content.
    pub fn on_highlights_computed(&self, highlights: &[HighlightRange]) {
        if self.is_disposed() {
            return;
        }
        if self.delivery_is_stale() {
            log::warn!(
                target: LOG_TARGET,
                "Dropping {} highlights for {}: content changes pending",
                highlights.len(),
                self.file
            );
            return;
        }

        let mut accepted = false;
        self.document.read_text(&mut |text: &str| {
            let mut ranges = self
                .ranges
                .write()
                .recover_poison("HighlightTracker::on_highlights_computed");
            // dispose() may have run since the check above.
            if self.is_disposed() {
                return;
            }
            ranges.replace(highlights.to_vec(), text.to_string());
            // Requested under the range-set lock so a concurrent dispose()
            // cancels it.
            self.scheduler.request_repaint();
            accepted = true;
        });

        if accepted {
            log::debug!(
                target: LOG_TARGET,
                "Tracking {} highlights for {}",
                highlights.len(),
                self.file
            );
        }
    }

    /// Styles for the tracked ranges lying wholly inside `damaged`.
    pub fn styles_for(&self, damaged: Range<usize>) -> Vec<StyledRange> {
        let ranges = self
            .ranges
            .read()
            .recover_poison("HighlightTracker::styles_for");
        RenderFilter::new(self.theme.as_ref()).styles_for(&ranges, damaged)
    }

    /// Copy of the current tracked ranges, in emission order.
    pub fn tracked_ranges(&self) -> Vec<TrackedRange> {
        self.ranges
            .read()
            .recover_poison("HighlightTracker::tracked_ranges")
            .ranges()
            .to_vec()
    }

    /// Text of the document when the last delivery was accepted.
    pub fn snapshot_text(&self) -> Option<String> {
        self.ranges
            .read()
            .recover_poison("HighlightTracker::snapshot_text")
            .snapshot_text()
            .map(str::to_string)
    }

    /// True while a repaint is scheduled but has not fired.
    pub fn repaint_pending(&self) -> bool {
        self.scheduler.has_pending()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }

    /// Detaches from the document and the feed, cancels a pending repaint and
    /// drops all tracked state. Calling it again does nothing.
    pub fn dispose(&self) {
        if self.disposed.swap(true, Ordering::AcqRel) {
            return;
        }

        let subscriptions = self
            .subscriptions
            .lock()
            .recover_poison("HighlightTracker::dispose")
            .take();
        if let Some(subscriptions) = subscriptions {
            self.document.remove_edit_listener(subscriptions.edits);
            self.feed.unsubscribe(&self.file, subscriptions.highlights);
        }

        // Clearing waits out any delivery or edit holding the range-set lock,
        // so a repaint it requested is already scheduled and gets cancelled.
        self.ranges
            .write()
            .recover_poison("HighlightTracker::dispose")
            .clear();
        self.scheduler.cancel();
        self.sync_status
            .write()
            .recover_poison("HighlightTracker::dispose")
            .take();

        log::debug!(target: LOG_TARGET, "Disposed tracker for {}", self.file);
    }

    fn delivery_is_stale(&self) -> bool {
        if !self.filter_while_pending {
            return false;
        }
        self.sync_status
            .read()
            .recover_poison("HighlightTracker::delivery_is_stale")
            .as_ref()
            .is_some_and(|status| status.has_pending_content_changes())
    }
}

impl EditListener for HighlightTracker {
    fn on_edit(&self, edit: &TextEdit, document_text: &str) {
        if self.is_disposed() {
            return;
        }

        let mut ranges = self
            .ranges
            .write()
            .recover_poison("HighlightTracker::on_edit");
        if self.is_disposed() {
            return;
        }
        let outcome = reconciler::apply(&mut ranges, edit, document_text);
        if outcome != ReconcileOutcome::Inactive && !edit.is_noop() {
            self.scheduler.request_repaint();
        }
        drop(ranges);

        log::trace!(target: LOG_TARGET, "Edit in {}: {:?}", self.file, outcome);
    }
}

impl HighlightsListener for HighlightTracker {
    fn computed_highlights(&self, file: &str, highlights: &[HighlightRange]) {
        if file != self.file {
            log::debug!(
                target: LOG_TARGET,
                "Ignoring highlights for {} in tracker for {}",
                file,
                self.file
            );
            return;
        }
        self.on_highlights_computed(highlights);
    }
}

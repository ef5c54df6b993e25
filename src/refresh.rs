//! Debounced repaint requests.
//!
//! A burst of analyzer deliveries or edits should cost one redraw, not one per
//! event. Each request cancels the one still waiting and starts a fresh short
//! timer; when a timer fires, the widget repaints from whatever state the
//! tracker holds at that moment.
//!
//! ```text
//! request_repaint()
//!       │
//!       ├─► Abort pending timer (if any)
//!       │
//!       └─► Spawn timer task
//!               │
//!               ├─► Wait repaint delay (5ms default)
//!               │
//!               └─► RepaintTarget::invalidate_presentation()
//! ```
//!
//! The delay also lets an overlay requested in the same instant (a completion
//! popup, say) show up before the highlight repaint.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::AbortHandle;

use crate::error::LockResultExt;

/// Default delay between the last request and the repaint (5ms).
pub const DEFAULT_REPAINT_DELAY: Duration = Duration::from_millis(5);

const LOG_TARGET: &str = "semtrack::refresh";

/// The widget whose presentation gets invalidated.
pub trait RepaintTarget: Send + Sync {
    /// Marks the current presentation stale so the widget repaints.
    fn invalidate_presentation(&self);
}

/// Coalesces repaint requests into one delayed repaint.
pub struct RefreshScheduler {
    runtime: Handle,
    target: Arc<dyn RepaintTarget>,
    delay: Duration,
    /// Timer of the repaint not yet fired, if any.
    pending: Mutex<Option<AbortHandle>>,
}

impl RefreshScheduler {
    /// Create a scheduler with the default delay.
    pub fn new(runtime: Handle, target: Arc<dyn RepaintTarget>) -> Self {
        Self::with_delay(runtime, target, DEFAULT_REPAINT_DELAY)
    }

    /// Create a scheduler with a custom delay.
    pub fn with_delay(runtime: Handle, target: Arc<dyn RepaintTarget>, delay: Duration) -> Self {
        Self {
            runtime,
            target,
            delay,
            pending: Mutex::new(None),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Requests a repaint.
    ///
    /// A request still waiting is dropped in favour of this one, so any number
    /// of calls within the delay produce a single repaint.
    pub fn request_repaint(&self) {
        let mut pending = self
            .pending
            .lock()
            .recover_poison("RefreshScheduler::request_repaint");

        if let Some(previous) = pending.take()
            && !previous.is_finished()
        {
            previous.abort();
            log::trace!(target: LOG_TARGET, "Superseded pending repaint");
        }

        let target = Arc::clone(&self.target);
        let delay = self.delay;
        let task = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            log::trace!(target: LOG_TARGET, "Repaint timer expired");
            target.invalidate_presentation();
        });

        *pending = Some(task.abort_handle());
    }

    /// Drops the pending repaint, if any.
    pub fn cancel(&self) {
        if let Some(handle) = self
            .pending
            .lock()
            .recover_poison("RefreshScheduler::cancel")
            .take()
        {
            handle.abort();
            log::trace!(target: LOG_TARGET, "Cancelled pending repaint");
        }
    }

    /// True while a repaint is scheduled but has not fired.
    pub fn has_pending(&self) -> bool {
        self.pending
            .lock()
            .recover_poison("RefreshScheduler::has_pending")
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

//! Replay sessions: a recorded document, one analyzer delivery and the edits
//! that followed, driven through a real tracker.
//!
//! ```json
//! {
//!   "file": "lib/main.dart",
//!   "text": "class A {}",
//!   "highlights": [{ "category": "CLASS", "offset": 6, "length": 1 }],
//!   "edits": [{ "offset": 7, "insertedText": "BC" }],
//!   "damaged": [0, 12]
//! }
//! ```

use std::fs;
use std::ops::Range;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::runtime::Handle;

use crate::analysis::HighlightFeed;
use crate::config::TrackerConfig;
use crate::document::SharedDocument;
use crate::error::TrackerResult;
use crate::highlight::HighlightRange;
use crate::refresh::{RefreshScheduler, RepaintTarget};
use crate::render::{LiveTheme, StyledRange};
use crate::text::TextEdit;
use crate::tracker::HighlightTracker;
use crate::tracking::TrackedRange;

const LOG_TARGET: &str = "semtrack::session";

fn default_file() -> String {
    "untitled".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default = "default_file")]
    pub file: String,
    pub text: String,
    #[serde(default)]
    pub highlights: Vec<HighlightRange>,
    #[serde(default)]
    pub edits: Vec<TextEdit>,
    /// `[start, end)` of the region to compute styles for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damaged: Option<[usize; 2]>,
}

impl Session {
    pub fn load(path: &Path) -> TrackerResult<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn damaged_region(&self) -> Option<Range<usize>> {
        self.damaged.map(|[start, end]| start..end)
    }
}

/// Final state after replaying a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayReport {
    pub text: String,
    pub ranges: Vec<TrackedRange>,
    pub damaged: [usize; 2],
    pub styles: Vec<StyledRange>,
}

struct LoggedRepaint;

impl RepaintTarget for LoggedRepaint {
    fn invalidate_presentation(&self) {
        log::debug!(target: LOG_TARGET, "Repaint requested");
    }
}

/// Replays `session` against a fresh document and tracker.
///
/// `damaged` overrides the session's own region; without either, styles are
/// computed for the whole final document. An edit that does not fit the
/// document aborts the replay.
pub fn replay(
    session: &Session,
    config: &TrackerConfig,
    damaged: Option<Range<usize>>,
    runtime: Handle,
) -> TrackerResult<ReplayReport> {
    let document = Arc::new(SharedDocument::new(session.text.as_str()));
    let feed = Arc::new(HighlightFeed::new());
    let theme = Arc::new(LiveTheme::new(config.theme.clone()));
    let scheduler =
        RefreshScheduler::with_delay(runtime, Arc::new(LoggedRepaint), config.repaint_delay);

    let tracker = HighlightTracker::attach(
        session.file.as_str(),
        document.clone(),
        feed.clone(),
        theme,
        scheduler,
        config,
    );

    feed.publish(&session.file, &session.highlights);
    let replayed = session
        .edits
        .iter()
        .try_for_each(|edit| document.apply_edit(edit));

    let report = replayed.map(|()| {
        let text = document.text();
        let damaged = damaged
            .or_else(|| session.damaged_region())
            .unwrap_or(0..text.len());
        ReplayReport {
            ranges: tracker.tracked_ranges(),
            styles: tracker.styles_for(damaged.clone()),
            damaged: [damaged.start, damaged.end],
            text,
        }
    });

    tracker.dispose();
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrackerError;
    use crate::highlight::Category;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CLASS_SESSION: &str = r#"{
        "file": "lib/main.dart",
        "text": "class A {}",
        "highlights": [{ "category": "CLASS", "offset": 6, "length": 1 }],
        "edits": [{ "offset": 7, "insertedText": "BC" }]
    }"#;

    #[test]
    fn test_load_session() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(CLASS_SESSION.as_bytes()).unwrap();

        let session = Session::load(file.path()).unwrap();
        assert_eq!(session.file, "lib/main.dart");
        assert_eq!(session.edits, vec![TextEdit::insert(7, "BC")]);
        assert_eq!(session.damaged_region(), None);
    }

    #[test]
    fn test_session_logs_under_its_own_target() {
        assert_eq!(LOG_TARGET, "semtrack::session");
    }

    #[test]
    fn test_load_invalid_session() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{\"highlights\": []}").unwrap();

        let err = Session::load(file.path()).unwrap_err();
        assert!(matches!(err, TrackerError::Session(_)));
    }

    #[tokio::test]
    async fn test_replay_class_scenario() {
        let session: Session = serde_json::from_str(CLASS_SESSION).unwrap();
        let report = replay(
            &session,
            &TrackerConfig::default(),
            None,
            Handle::current(),
        )
        .unwrap();

        assert_eq!(report.text, "class ABC {}");
        assert_eq!(report.ranges, vec![TrackedRange::new(Category::Class, 6, 3)]);
        assert_eq!(report.damaged, [0, 12]);
        assert_eq!(report.styles.len(), 1);
        assert_eq!(report.styles[0].offset, 6);
        assert_eq!(report.styles[0].length, 3);
    }

    #[tokio::test]
    async fn test_replay_damaged_override() {
        let mut session: Session = serde_json::from_str(CLASS_SESSION).unwrap();
        session.damaged = Some([0, 12]);

        let report = replay(
            &session,
            &TrackerConfig::default(),
            Some(0..7),
            Handle::current(),
        )
        .unwrap();
        assert_eq!(report.damaged, [0, 7]);
        assert!(report.styles.is_empty());
    }

    #[tokio::test]
    async fn test_replay_rejects_out_of_bounds_edit() {
        let session = Session {
            file: default_file(),
            text: "abc".to_string(),
            highlights: vec![],
            edits: vec![TextEdit::delete(2, 9)],
            damaged: None,
        };

        let err = replay(
            &session,
            &TrackerConfig::default(),
            None,
            Handle::current(),
        )
        .unwrap_err();
        assert!(matches!(err, TrackerError::EditOutOfBounds { .. }));
    }
}

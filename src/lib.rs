pub mod analysis;
pub mod config;
pub mod document;
pub mod error;
pub mod highlight;
pub mod refresh;
pub mod render;
pub mod session;
pub mod text;
pub mod tracker;
pub mod tracking;

pub use analysis::{ContentSyncStatus, HighlightFeed, HighlightsListener};
pub use config::{TrackerConfig, TrackerSettings};
pub use document::{Document, EditListener, ListenerId, SharedDocument};
pub use error::{TrackerError, TrackerResult};
pub use highlight::{Category, HighlightRange};
pub use refresh::{RefreshScheduler, RepaintTarget};
pub use render::{RenderFilter, StyledRange, ThemeLookup};
pub use text::TextEdit;
pub use tracker::HighlightTracker;
pub use tracking::{RangeSet, TrackedRange};

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Process-unique track identifier
pub type TrackId = u64;

/// Backing counter for id allocation; atomic because tests may run threaded
static NEXT_TRACK_ID: AtomicU64 = AtomicU64::new(1);

/// A single playable item with identity, metadata, and duration
#[derive(Debug, Clone)]
pub struct Track {
    /// Unique id, assigned at creation, monotonically increasing across the process
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Track duration in whole seconds
    pub duration_secs: u32,

    /// Creation instant (monotonic clock), used for recency ordering
    pub added_at: Instant,
}

impl Track {
    /// Create a track with a freshly allocated id and the current instant
    pub fn new(title: &str, artist: &str, duration_secs: u32) -> Self {
        Self {
            id: NEXT_TRACK_ID.fetch_add(1, Ordering::Relaxed),
            title: title.to_string(),
            artist: artist.to_string(),
            duration_secs,
            added_at: Instant::now(),
        }
    }

    /// Duration as `m:ss` with zero-padded seconds (354 -> "5:54")
    pub fn format_duration(&self) -> String {
        format!("{}:{:02}", self.duration_secs / 60, self.duration_secs % 60)
    }
}

/// Equality is identity: two values describe the same track iff the ids
/// match. Title ordering for sorted views lives in the sorter.
impl PartialEq for Track {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Track {}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} by {} ({})",
            self.title,
            self.artist,
            self.format_duration()
        )
    }
}

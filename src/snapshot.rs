//! Read-only summary across all core components
//!
//! One entry point reduces the playlist, history and both indexes into
//! a [`Snapshot`] value. Rendering via `Display` is deterministic for a
//! given component state, so the text can be written to a file verbatim.

use crate::engine::PlaylistEngine;
use crate::history::PlayHistory;
use crate::index::{RatingIndex, TrackLookup};
use crate::model::Track;
use std::collections::BTreeMap;
use std::fmt;

/// Longest-track entries included in a snapshot
const TOP_LONGEST_COUNT: usize = 5;

/// Recent plays included in a snapshot
const RECENT_PLAYED_COUNT: usize = 5;

/// Point-in-time summary of the playlist system
///
/// Derived on demand and never stored; every field is a copy.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Longest playlist tracks, descending duration, ties in playlist order
    pub top_longest: Vec<Track>,

    /// Most recent plays, newest first
    pub recently_played: Vec<Track>,

    /// Track count per rating, only for ratings in use
    pub rating_histogram: BTreeMap<u8, usize>,

    /// Tracks currently in the playlist
    pub playlist_total: usize,

    /// Titles currently in the lookup index
    pub lookup_total: usize,

    /// Plays recorded in the history
    pub played_total: usize,
}

/// Reduce the four components into a [`Snapshot`]
///
/// Pure reader; safe to call repeatedly, no component is mutated.
pub fn export_snapshot(
    engine: &PlaylistEngine,
    history: &PlayHistory,
    ratings: &RatingIndex,
    lookup: &TrackLookup,
) -> Snapshot {
    log::debug!("Computing system snapshot");

    let mut longest = engine.songs();
    longest.sort_by(|a, b| b.duration_secs.cmp(&a.duration_secs));
    longest.truncate(TOP_LONGEST_COUNT);

    let rating_histogram: BTreeMap<u8, usize> =
        ratings.song_count_by_rating().into_iter().collect();

    Snapshot {
        top_longest: longest,
        recently_played: history.recently_played(RECENT_PLAYED_COUNT),
        rating_histogram,
        playlist_total: engine.len(),
        lookup_total: lookup.len(),
        played_total: history.len(),
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Playdeck Snapshot ===")?;
        writeln!(f)?;

        writeln!(f, "Totals:")?;
        writeln!(f, "- Songs in playlist: {}", self.playlist_total)?;
        writeln!(f, "- Songs in lookup index: {}", self.lookup_total)?;
        writeln!(f, "- Songs played: {}", self.played_total)?;
        writeln!(f)?;

        writeln!(f, "Top {} Longest Songs:", TOP_LONGEST_COUNT)?;
        if self.top_longest.is_empty() {
            writeln!(f, "(none)")?;
        } else {
            for (i, track) in self.top_longest.iter().enumerate() {
                writeln!(f, "{}. {}", i + 1, track)?;
            }
        }
        writeln!(f)?;

        writeln!(f, "Recently Played:")?;
        if self.recently_played.is_empty() {
            writeln!(f, "(none)")?;
        } else {
            for (i, track) in self.recently_played.iter().enumerate() {
                writeln!(f, "{}. {} by {}", i + 1, track.title, track.artist)?;
            }
        }
        writeln!(f)?;

        writeln!(f, "Song Count by Rating:")?;
        if self.rating_histogram.is_empty() {
            writeln!(f, "(none)")?;
        } else {
            for (rating, count) in &self.rating_histogram {
                writeln!(f, "- {} stars: {} songs", rating, count)?;
            }
        }

        Ok(())
    }
}

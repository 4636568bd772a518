//! Caller-side wiring of the core components
//!
//! A [`Session`] owns one playlist engine, play history, rating index
//! and lookup index, and routes each operation to the right component.
//! Adds go to the playlist and the lookup; ratings and plays copy the
//! engine's track into their component. Deletions do NOT fan out: a
//! track deleted from the playlist stays in the indexes until removed
//! there explicitly.

pub mod script;
pub mod seed;

use crate::engine::PlaylistEngine;
use crate::history::PlayHistory;
use crate::index::{RatingIndex, TrackLookup};
use crate::model::{Track, TrackId};
use crate::snapshot::{export_snapshot, Snapshot};

/// One playlist session: the four core components and their wiring
#[derive(Debug)]
pub struct Session {
    engine: PlaylistEngine,
    history: PlayHistory,
    ratings: RatingIndex,
    lookup: TrackLookup,
}

impl Session {
    /// Create a session with empty components
    pub fn new() -> Self {
        Self {
            engine: PlaylistEngine::new(),
            history: PlayHistory::new(),
            ratings: RatingIndex::new(),
            lookup: TrackLookup::new(),
        }
    }

    /// Append a track to the playlist and index it for lookup
    pub fn add_track(&mut self, title: &str, artist: &str, duration_secs: u32) -> Track {
        let track = self.engine.add_song(title, artist, duration_secs);
        self.lookup.add_song(track.clone());
        track
    }

    /// Remove the track at a playlist position
    ///
    /// The lookup and rating indexes keep their copies.
    pub fn delete(&mut self, index: usize) {
        self.engine.delete_song(index);
    }

    /// Move a track between playlist positions
    pub fn move_track(&mut self, from: usize, to: usize) {
        self.engine.move_song(from, to);
    }

    /// Reverse the playlist
    pub fn reverse(&mut self) {
        self.engine.reverse();
    }

    /// Shuffle the playlist, avoiding adjacent same-artist tracks
    pub fn shuffle(&mut self) {
        self.engine.shuffle_with_constraints();
    }

    /// Undo up to `count` playlist edits
    pub fn undo(&mut self, count: usize) {
        self.engine.undo_last_edits(count);
    }

    /// Record a play of the track at a playlist position
    pub fn play(&mut self, index: usize) {
        match self.engine.get(index) {
            Some(track) => self.history.add_played_song(track.clone()),
            None => log::warn!(
                "Cannot play index {}: playlist has {} songs",
                index,
                self.engine.len()
            ),
        }
    }

    /// Take back the most recent play
    pub fn unplay(&mut self) -> Option<Track> {
        self.history.undo_last_play()
    }

    /// Rate the first playlist track with a matching title
    pub fn rate(&mut self, title: &str, stars: u8) {
        let songs = self.engine.songs();
        match songs.into_iter().find(|t| t.title == title) {
            Some(track) => self.ratings.insert_song(track, stars),
            None => log::warn!("Cannot rate '{}': not in the playlist", title),
        }
    }

    /// Remove a title from the rating index
    pub fn unrate(&mut self, title: &str) {
        self.ratings.delete_song(title);
    }

    /// Remove a title from the lookup index
    pub fn forget(&mut self, title: &str) {
        self.lookup.delete_song(title);
    }

    /// Look a track up by exact title
    pub fn find_by_title(&self, title: &str) -> Option<&Track> {
        self.lookup.search_by_title(title)
    }

    /// Look a track up by id
    pub fn find_by_id(&self, id: TrackId) -> Option<&Track> {
        self.lookup.search_by_id(id)
    }

    /// Current playlist contents, front to back
    pub fn songs(&self) -> Vec<Track> {
        self.engine.songs()
    }

    /// Summarize the whole session
    pub fn snapshot(&self) -> Snapshot {
        export_snapshot(&self.engine, &self.history, &self.ratings, &self.lookup)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_reaches_playlist_and_lookup() {
        let mut session = Session::new();
        let track = session.add_track("One", "A", 60);

        assert_eq!(session.songs().len(), 1);
        assert_eq!(session.find_by_title("One").map(|t| t.id), Some(track.id));
        assert_eq!(session.find_by_id(track.id).map(|t| &t.title[..]), Some("One"));
    }

    #[test]
    fn test_playlist_delete_leaves_lookup_entry() {
        let mut session = Session::new();
        session.add_track("Orphan", "A", 60);

        session.delete(0);

        assert!(session.songs().is_empty());
        assert!(session.find_by_title("Orphan").is_some());
    }

    #[test]
    fn test_playlist_delete_leaves_rating_entry() {
        let mut session = Session::new();
        session.add_track("Rated", "A", 60);
        session.rate("Rated", 5);

        session.delete(0);

        let snapshot = session.snapshot();
        assert_eq!(snapshot.playlist_total, 0);
        assert_eq!(snapshot.rating_histogram.get(&5), Some(&1));
    }

    #[test]
    fn test_play_copies_engine_track_into_history() {
        let mut session = Session::new();
        let track = session.add_track("Played", "A", 60);

        session.play(0);
        session.delete(0);

        let snapshot = session.snapshot();
        assert_eq!(snapshot.played_total, 1);
        assert_eq!(snapshot.recently_played[0].id, track.id);
    }

    #[test]
    fn test_play_out_of_range_records_nothing() {
        let mut session = Session::new();
        session.add_track("Only", "A", 60);

        session.play(3);

        assert_eq!(session.snapshot().played_total, 0);
    }

    #[test]
    fn test_rate_unknown_title_records_nothing() {
        let mut session = Session::new();
        session.add_track("Known", "A", 60);

        session.rate("Unknown", 4);

        assert!(session.snapshot().rating_histogram.is_empty());
    }

    #[test]
    fn test_unplay_returns_the_undone_track() {
        let mut session = Session::new();
        session.add_track("One", "A", 60);
        session.add_track("Two", "B", 70);
        session.play(0);
        session.play(1);

        let undone = session.unplay().unwrap();

        assert_eq!(undone.title, "Two");
        assert_eq!(session.snapshot().played_total, 1);
    }

    #[test]
    fn test_forget_only_touches_the_lookup() {
        let mut session = Session::new();
        session.add_track("Kept", "A", 60);

        session.forget("Kept");

        assert!(session.find_by_title("Kept").is_none());
        assert_eq!(session.songs().len(), 1);
    }

    #[test]
    fn test_unrate_only_touches_the_rating_index() {
        let mut session = Session::new();
        session.add_track("Starred", "A", 60);
        session.rate("Starred", 3);

        session.unrate("Starred");

        assert!(session.snapshot().rating_histogram.is_empty());
        assert_eq!(session.songs().len(), 1);
        assert!(session.find_by_title("Starred").is_some());
    }
}

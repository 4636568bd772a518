//! LIFO record of played tracks
//!
//! The most recent play sits on top; undoing a play pops it. One vector
//! serves as both the stack and the front-to-back display order, since
//! it pushes, pops and enumerates at the same end.

use crate::model::Track;

/// Playback history with undo of the most recent play
#[derive(Debug)]
pub struct PlayHistory {
    plays: Vec<Track>,
}

impl PlayHistory {
    /// Create a new empty history
    pub fn new() -> Self {
        Self { plays: Vec::new() }
    }

    /// Record a play. O(1)
    pub fn add_played_song(&mut self, track: Track) {
        log::debug!("Played '{}' by {}", track.title, track.artist);
        self.plays.push(track);
    }

    /// Take back the most recent play
    ///
    /// Returns the track that was undone, or `None` on an empty history.
    pub fn undo_last_play(&mut self) -> Option<Track> {
        let undone = self.plays.pop();
        match &undone {
            Some(track) => log::debug!("Undid play of '{}'", track.title),
            None => log::debug!("No plays to undo"),
        }
        undone
    }

    /// The last `count` plays, most recent first
    pub fn recently_played(&self, count: usize) -> Vec<Track> {
        self.plays.iter().rev().take(count).cloned().collect()
    }

    /// Number of recorded plays
    pub fn len(&self) -> usize {
        self.plays.len()
    }

    /// Whether nothing has been played
    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }
}

impl Default for PlayHistory {
    fn default() -> Self {
        Self::new()
    }
}

use super::list::TrackList;
use crate::model::Track;
use rand::{rng, seq::SliceRandom};

/// Random permutations drawn before a constraint-violating order is accepted
const SHUFFLE_ATTEMPTS: usize = 100;

/// One structural edit, recorded with enough data to reverse it
#[derive(Debug, Clone)]
enum EditAction {
    /// A track was appended; `index` is where it landed
    Add { track: Track, index: usize },

    /// A track was removed from `index`
    Delete { track: Track, index: usize },

    /// The track at `from` was repositioned to `to`
    Move { from: usize, to: usize },
}

/// Ordered playlist with positional edits and an undo log
///
/// Tracks live in a doubly-linked arena list. Every add, delete and move
/// pushes an [`EditAction`] onto the undo stack; reversal and shuffling
/// deliberately bypass the log and cannot be undone.
#[derive(Debug)]
pub struct PlaylistEngine {
    list: TrackList,
    undo_stack: Vec<EditAction>,
}

impl PlaylistEngine {
    /// Create a new empty playlist
    pub fn new() -> Self {
        Self {
            list: TrackList::new(),
            undo_stack: Vec::new(),
        }
    }

    /// Create a track and append it at the tail
    ///
    /// Returns a copy of the created track so the caller can feed the
    /// same track into the lookup and rating indexes.
    pub fn add_song(&mut self, title: &str, artist: &str, duration_secs: u32) -> Track {
        let track = Track::new(title, artist, duration_secs);
        log::debug!(
            "Adding '{}' by {} at index {}",
            track.title,
            track.artist,
            self.list.len()
        );

        self.list.push_back(track.clone());
        self.undo_stack.push(EditAction::Add {
            track: track.clone(),
            index: self.list.len() - 1,
        });

        track
    }

    /// Remove the track at `index`
    ///
    /// Out-of-range indices are reported and leave the playlist unchanged.
    pub fn delete_song(&mut self, index: usize) {
        if index >= self.list.len() {
            log::warn!(
                "Cannot delete index {}: playlist has {} songs",
                index,
                self.list.len()
            );
            return;
        }

        if let Some(track) = self.list.remove_at(index) {
            log::debug!("Deleted '{}' from index {}", track.title, index);
            self.undo_stack.push(EditAction::Delete { track, index });
        }
    }

    /// Reposition the track at `from` so it ends up at `to`
    ///
    /// The track is unlinked first, so `to` addresses a position in the
    /// shrunk sequence. Invalid indices are reported and nothing moves;
    /// `from == to` is a silent no-op.
    pub fn move_song(&mut self, from: usize, to: usize) {
        let len = self.list.len();
        if from >= len || to >= len {
            log::warn!("Cannot move {} -> {}: playlist has {} songs", from, to, len);
            return;
        }
        if from == to {
            return;
        }

        self.undo_stack.push(EditAction::Move { from, to });

        if let Some(track) = self.list.remove_at(from) {
            log::debug!("Moved '{}' from {} to {}", track.title, from, to);
            self.list.insert_at(to, track);
        }
    }

    /// Reverse the playlist in place
    ///
    /// Pure link surgery on the arena list. Not recorded on the undo
    /// stack.
    pub fn reverse(&mut self) {
        if self.list.len() <= 1 {
            return;
        }
        log::debug!("Reversing playlist of {} songs", self.list.len());
        self.list.reverse();
    }

    /// Shuffle so that no two adjacent tracks share an artist
    ///
    /// Draws up to [`SHUFFLE_ATTEMPTS`] uniform permutations; if none
    /// satisfies the constraint the last one is accepted as-is. The list
    /// is rebuilt from the accepted permutation. Not recorded on the
    /// undo stack.
    pub fn shuffle_with_constraints(&mut self) {
        if self.list.len() <= 1 {
            return;
        }

        let mut songs = self.songs();
        let mut rng = rng();
        let mut satisfied = false;

        for attempt in 1..=SHUFFLE_ATTEMPTS {
            songs.shuffle(&mut rng);
            satisfied = songs
                .windows(2)
                .all(|pair| pair[0].artist != pair[1].artist);
            if satisfied {
                log::debug!("Shuffle satisfied the artist constraint after {} attempt(s)", attempt);
                break;
            }
        }

        if !satisfied {
            log::warn!(
                "Shuffle gave up after {} attempts; adjacent tracks may share an artist",
                SHUFFLE_ATTEMPTS
            );
        }

        self.list.clear();
        for song in songs {
            self.list.push_back(song);
        }
    }

    /// Undo up to `n` recorded edits, most recent first
    ///
    /// An Add is reversed by deleting at its recorded index and a Move by
    /// moving back, both of which go through the public operations and
    /// therefore record their own undo entries. A Delete is reversed by
    /// re-inserting the saved track directly, without recording. Records
    /// whose positions were invalidated by later edits are reported and
    /// skipped.
    pub fn undo_last_edits(&mut self, n: usize) {
        let count = n.min(self.undo_stack.len());

        for _ in 0..count {
            let action = match self.undo_stack.pop() {
                Some(action) => action,
                None => break,
            };

            match action {
                EditAction::Add { track, index } => {
                    log::debug!("Undoing add of '{}' at index {}", track.title, index);
                    self.delete_song(index);
                }
                EditAction::Delete { track, index } => {
                    log::debug!("Undoing delete of '{}' at index {}", track.title, index);
                    self.list.insert_at(index, track);
                }
                EditAction::Move { from, to } => {
                    log::debug!("Undoing move {} -> {}", from, to);
                    self.move_song(to, from);
                }
            }
        }
    }

    /// Track at a playlist position, or `None` when out of range
    pub fn get(&self, index: usize) -> Option<&Track> {
        self.list.get(index)
    }

    /// All tracks in playlist order. O(n) copy
    pub fn songs(&self) -> Vec<Track> {
        self.list.iter().cloned().collect()
    }

    /// Number of tracks in the playlist
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Whether the playlist is empty
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl Default for PlaylistEngine {
    fn default() -> Self {
        Self::new()
    }
}

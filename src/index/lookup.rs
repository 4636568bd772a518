use crate::model::{Track, TrackId};
use std::collections::HashMap;

/// Constant-time title and id lookups over one logical track set
///
/// Two hash maps over independent copies of the same tracks. The maps
/// stay pairwise consistent only through this component's own add and
/// delete operations; a duplicate title overwrites the previous title
/// entry (last write wins).
#[derive(Debug)]
pub struct TrackLookup {
    /// Title-keyed copies
    by_title: HashMap<String, Track>,

    /// Id-keyed copies
    by_id: HashMap<TrackId, Track>,
}

impl TrackLookup {
    /// Create a new empty lookup index
    pub fn new() -> Self {
        Self {
            by_title: HashMap::new(),
            by_id: HashMap::new(),
        }
    }

    /// Insert a track into both maps, overwriting any same-title entry
    pub fn add_song(&mut self, track: Track) {
        log::debug!("Indexing '{}' (id {})", track.title, track.id);
        self.by_title.insert(track.title.clone(), track.clone());
        self.by_id.insert(track.id, track);
    }

    /// Track with this exact title, if indexed. O(1) expected
    pub fn search_by_title(&self, title: &str) -> Option<&Track> {
        self.by_title.get(title)
    }

    /// Track with this id, if indexed. O(1) expected
    pub fn search_by_id(&self, id: TrackId) -> Option<&Track> {
        self.by_id.get(&id)
    }

    /// Remove a track from both maps, resolved through its title entry
    ///
    /// Absent titles are a no-op.
    pub fn delete_song(&mut self, title: &str) {
        if let Some(track) = self.by_title.remove(title) {
            log::debug!("Unindexing '{}' (id {})", track.title, track.id);
            self.by_id.remove(&track.id);
        }
    }

    /// All indexed tracks, in map iteration order (not stable)
    pub fn all_songs(&self) -> Vec<Track> {
        self.by_title.values().cloned().collect()
    }

    /// Number of indexed titles
    pub fn len(&self) -> usize {
        self.by_title.len()
    }

    /// Whether nothing is indexed
    pub fn is_empty(&self) -> bool {
        self.by_title.is_empty()
    }
}

impl Default for TrackLookup {
    fn default() -> Self {
        Self::new()
    }
}

use crate::model::Track;

/// One BST node: a rating value and every track rated at it
#[derive(Debug)]
struct RatingNode {
    rating: u8,
    songs: Vec<Track>,
    left: Option<Box<RatingNode>>,
    right: Option<Box<RatingNode>>,
}

impl RatingNode {
    fn new(rating: u8) -> Self {
        Self {
            rating,
            songs: Vec::new(),
            left: None,
            right: None,
        }
    }
}

/// Binary search tree bucketing tracks by star rating
///
/// Keyed by rating 1 to 5, so the tree never holds more than five
/// nodes; each node owns its children and its bucket of tracks in
/// insertion order. A rating appears as at most one node, and a node
/// whose bucket empties during deletion is removed from the tree.
#[derive(Debug)]
pub struct RatingIndex {
    root: Option<Box<RatingNode>>,
}

impl RatingIndex {
    /// Create a new empty rating index
    pub fn new() -> Self {
        Self { root: None }
    }

    /// File a track under `rating`
    ///
    /// Ratings outside 1..=5 are reported and leave the tree unchanged.
    pub fn insert_song(&mut self, track: Track, rating: u8) {
        if !(1..=5).contains(&rating) {
            log::warn!(
                "Invalid rating {} for '{}': must be between 1 and 5",
                rating,
                track.title
            );
            return;
        }

        log::debug!("Rating '{}' at {} stars", track.title, rating);
        Self::bucket_mut(&mut self.root, rating).push(track);
    }

    /// Descend to the bucket for `rating`, creating its node on the way
    /// down if absent
    fn bucket_mut(node: &mut Option<Box<RatingNode>>, rating: u8) -> &mut Vec<Track> {
        let n = node.get_or_insert_with(|| Box::new(RatingNode::new(rating)));
        if rating < n.rating {
            Self::bucket_mut(&mut n.left, rating)
        } else if rating > n.rating {
            Self::bucket_mut(&mut n.right, rating)
        } else {
            &mut n.songs
        }
    }

    /// Tracks rated exactly `rating`, in insertion order
    ///
    /// Out-of-range or unused ratings yield an empty vec.
    pub fn search_by_rating(&self, rating: u8) -> Vec<Track> {
        if !(1..=5).contains(&rating) {
            return Vec::new();
        }
        match Self::find(&self.root, rating) {
            Some(node) => node.songs.clone(),
            None => Vec::new(),
        }
    }

    fn find(node: &Option<Box<RatingNode>>, rating: u8) -> Option<&RatingNode> {
        let n = node.as_deref()?;
        if rating < n.rating {
            Self::find(&n.left, rating)
        } else if rating > n.rating {
            Self::find(&n.right, rating)
        } else {
            Some(n)
        }
    }

    /// Remove the first track (in ascending rating order) whose title
    /// matches
    ///
    /// If the track was the last one in its bucket, the bucket's node is
    /// deleted from the tree as well.
    pub fn delete_song(&mut self, title: &str) {
        match Self::remove_first_match(&mut self.root, title) {
            Some((rating, emptied)) => {
                log::debug!("Removed '{}' from the {}-star bucket", title, rating);
                if emptied {
                    Self::remove_node(&mut self.root, rating);
                }
            }
            None => {
                log::debug!("No rated song titled '{}'", title);
            }
        }
    }

    /// Inorder walk; removes the first title match from its bucket and
    /// reports the bucket's rating and whether it is now empty
    fn remove_first_match(node: &mut Option<Box<RatingNode>>, title: &str) -> Option<(u8, bool)> {
        let n = node.as_deref_mut()?;

        if let Some(found) = Self::remove_first_match(&mut n.left, title) {
            return Some(found);
        }
        if let Some(pos) = n.songs.iter().position(|song| song.title == title) {
            n.songs.remove(pos);
            return Some((n.rating, n.songs.is_empty()));
        }
        Self::remove_first_match(&mut n.right, title)
    }

    /// Standard BST deletion of the node keyed `rating`
    ///
    /// Leaf and one-child cases splice the subtree up; the two-child
    /// case pulls up the in-order successor's key and bucket.
    fn remove_node(node: &mut Option<Box<RatingNode>>, rating: u8) {
        let mut n = match node.take() {
            Some(n) => n,
            None => return,
        };

        if rating < n.rating {
            Self::remove_node(&mut n.left, rating);
            *node = Some(n);
        } else if rating > n.rating {
            Self::remove_node(&mut n.right, rating);
            *node = Some(n);
        } else if n.left.is_none() {
            *node = n.right.take();
        } else if n.right.is_none() {
            *node = n.left.take();
        } else {
            if let Some(successor) = Self::detach_min(&mut n.right) {
                n.rating = successor.rating;
                n.songs = successor.songs;
            }
            *node = Some(n);
        }
    }

    /// Unlink and return the minimum node of a subtree
    ///
    /// The minimum has no left child, so its right child takes its
    /// place.
    fn detach_min(node: &mut Option<Box<RatingNode>>) -> Option<Box<RatingNode>> {
        match node {
            Some(n) if n.left.is_some() => Self::detach_min(&mut n.left),
            Some(_) => {
                let mut min = node.take()?;
                *node = min.right.take();
                Some(min)
            }
            None => None,
        }
    }

    /// Per-rating track counts, ascending by rating
    pub fn song_count_by_rating(&self) -> Vec<(u8, usize)> {
        let mut counts = Vec::new();
        Self::inorder_counts(&self.root, &mut counts);
        counts
    }

    fn inorder_counts(node: &Option<Box<RatingNode>>, out: &mut Vec<(u8, usize)>) {
        if let Some(n) = node {
            Self::inorder_counts(&n.left, out);
            out.push((n.rating, n.songs.len()));
            Self::inorder_counts(&n.right, out);
        }
    }
}

impl Default for RatingIndex {
    fn default() -> Self {
        Self::new()
    }
}

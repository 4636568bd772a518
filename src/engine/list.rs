use crate::model::Track;

/// One link in the chain
///
/// Nodes live in the arena and refer to their neighbors by slot index
/// instead of by pointer.
#[derive(Debug)]
struct Node {
    track: Track,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Doubly-linked track sequence backed by a slot arena
///
/// Every node occupies a slot in `slots`; `prev`/`next` links are slot
/// indices, so relinking is plain integer bookkeeping. Slots vacated by
/// removals go onto a free list and are reused by later inserts.
#[derive(Debug)]
pub struct TrackList {
    /// Node storage; `None` marks a vacated slot
    slots: Vec<Option<Node>>,

    /// Vacated slot indices available for reuse
    free: Vec<usize>,

    /// Slot of the first node, if any
    head: Option<usize>,

    /// Slot of the last node, if any
    tail: Option<usize>,

    /// Number of linked nodes
    len: usize,
}

impl TrackList {
    /// Create a new empty list
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Number of tracks in the list
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no tracks
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn alloc(&mut self, node: Node) -> usize {
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(node);
                slot
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    fn node(&self, slot: usize) -> Option<&Node> {
        self.slots.get(slot).and_then(|s| s.as_ref())
    }

    fn node_mut(&mut self, slot: usize) -> Option<&mut Node> {
        self.slots.get_mut(slot).and_then(|s| s.as_mut())
    }

    /// Slot of the node at a list position, walking from the head
    fn slot_at(&self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }
        let mut current = self.head?;
        for _ in 0..index {
            current = self.node(current)?.next?;
        }
        Some(current)
    }

    /// Append a track at the tail. O(1)
    pub fn push_back(&mut self, track: Track) {
        let slot = self.alloc(Node {
            track,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => {
                if let Some(node) = self.node_mut(tail) {
                    node.next = Some(slot);
                }
            }
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.len += 1;
    }

    /// Insert a track so it ends up at `index`
    ///
    /// `index == len` appends; anything past that is ignored.
    pub fn insert_at(&mut self, index: usize, track: Track) {
        if index > self.len {
            return;
        }
        if index == self.len {
            self.push_back(track);
            return;
        }

        // A node currently occupies the target position; splice before it.
        let at = match self.slot_at(index) {
            Some(at) => at,
            None => return,
        };
        let before = self.node(at).and_then(|n| n.prev);
        let slot = self.alloc(Node {
            track,
            prev: before,
            next: Some(at),
        });
        if let Some(node) = self.node_mut(at) {
            node.prev = Some(slot);
        }
        match before {
            Some(prev) => {
                if let Some(node) = self.node_mut(prev) {
                    node.next = Some(slot);
                }
            }
            None => self.head = Some(slot),
        }
        self.len += 1;
    }

    /// Unlink and return the track at `index`, or `None` if out of range
    pub fn remove_at(&mut self, index: usize) -> Option<Track> {
        let slot = self.slot_at(index)?;
        let node = self.slots.get_mut(slot)?.take()?;

        match node.prev {
            Some(prev) => {
                if let Some(p) = self.node_mut(prev) {
                    p.next = node.next;
                }
            }
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => {
                if let Some(n) = self.node_mut(next) {
                    n.prev = node.prev;
                }
            }
            None => self.tail = node.prev,
        }

        self.free.push(slot);
        self.len -= 1;
        Some(node.track)
    }

    /// Track at `index`, or `None` if out of range
    pub fn get(&self, index: usize) -> Option<&Track> {
        let slot = self.slot_at(index)?;
        self.node(slot).map(|n| &n.track)
    }

    /// Reverse the list in place
    ///
    /// Swaps every node's `prev`/`next` links, then swaps head and tail.
    /// No node is moved or reallocated.
    pub fn reverse(&mut self) {
        let mut current = self.head;
        while let Some(slot) = current {
            match self.node_mut(slot) {
                Some(node) => {
                    std::mem::swap(&mut node.prev, &mut node.next);
                    // After the swap, `prev` holds the old `next`.
                    current = node.prev;
                }
                None => break,
            }
        }
        std::mem::swap(&mut self.head, &mut self.tail);
    }

    /// Drop every node and reset the arena
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Iterate front to back
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            current: self.head,
        }
    }
}

impl Default for TrackList {
    fn default() -> Self {
        Self::new()
    }
}

/// Front-to-back iterator over a [`TrackList`]
pub struct Iter<'a> {
    list: &'a TrackList,
    current: Option<usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Track;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.current?;
        let node = self.list.node(slot)?;
        self.current = node.next;
        Some(&node.track)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(title: &str) -> Track {
        Track::new(title, "Artist", 60)
    }

    fn titles(list: &TrackList) -> Vec<String> {
        list.iter().map(|t| t.title.clone()).collect()
    }

    #[test]
    fn test_push_back_keeps_order() {
        let mut list = TrackList::new();
        list.push_back(track("a"));
        list.push_back(track("b"));
        list.push_back(track("c"));

        assert_eq!(list.len(), 3);
        assert_eq!(titles(&list), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_insert_at_front_middle_and_end() {
        let mut list = TrackList::new();
        list.push_back(track("b"));
        list.insert_at(0, track("a"));
        list.insert_at(2, track("d"));
        list.insert_at(2, track("c"));

        assert_eq!(titles(&list), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_insert_past_end_is_ignored() {
        let mut list = TrackList::new();
        list.push_back(track("a"));
        list.insert_at(5, track("x"));

        assert_eq!(list.len(), 1);
        assert_eq!(titles(&list), vec!["a"]);
    }

    #[test]
    fn test_remove_at_relinks_neighbors() {
        let mut list = TrackList::new();
        for name in ["a", "b", "c"] {
            list.push_back(track(name));
        }

        let removed = list.remove_at(1).unwrap();
        assert_eq!(removed.title, "b");
        assert_eq!(titles(&list), vec!["a", "c"]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_remove_at_head_and_tail() {
        let mut list = TrackList::new();
        for name in ["a", "b", "c"] {
            list.push_back(track(name));
        }

        assert_eq!(list.remove_at(0).unwrap().title, "a");
        assert_eq!(list.remove_at(1).unwrap().title, "c");
        assert_eq!(titles(&list), vec!["b"]);
    }

    #[test]
    fn test_remove_at_out_of_range_returns_none() {
        let mut list = TrackList::new();
        list.push_back(track("a"));

        assert!(list.remove_at(1).is_none());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_freed_slots_are_reused() {
        let mut list = TrackList::new();
        list.push_back(track("a"));
        list.push_back(track("b"));
        list.remove_at(0);
        list.push_back(track("c"));

        // The arena should not have grown past its high-water mark.
        assert_eq!(list.slots.len(), 2);
        assert_eq!(titles(&list), vec!["b", "c"]);
    }

    #[test]
    fn test_reverse_reverses_order() {
        let mut list = TrackList::new();
        for name in ["a", "b", "c", "d"] {
            list.push_back(track(name));
        }

        list.reverse();
        assert_eq!(titles(&list), vec!["d", "c", "b", "a"]);
    }

    #[test]
    fn test_reverse_twice_is_identity() {
        let mut list = TrackList::new();
        for name in ["a", "b", "c"] {
            list.push_back(track(name));
        }

        list.reverse();
        list.reverse();
        assert_eq!(titles(&list), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_get_walks_to_position() {
        let mut list = TrackList::new();
        for name in ["a", "b", "c"] {
            list.push_back(track(name));
        }

        assert_eq!(list.get(1).unwrap().title, "b");
        assert!(list.get(3).is_none());
    }

    #[test]
    fn test_clear_empties_everything() {
        let mut list = TrackList::new();
        list.push_back(track("a"));
        list.clear();

        assert!(list.is_empty());
        assert!(list.get(0).is_none());
        assert_eq!(titles(&list), Vec::<String>::new());
    }
}

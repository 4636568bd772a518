//! Playdeck - in-memory playlist core
//!
//! An ordered playlist with undo, play history, rating and lookup
//! indexes, comparison sorts and a snapshot aggregator. Front ends are
//! plain callers; the `session` module carries the wiring they share.

pub mod engine;
pub mod history;
pub mod index;
pub mod model;
pub mod session;
pub mod snapshot;
pub mod sort;

pub use engine::PlaylistEngine;
pub use history::PlayHistory;
pub use index::{RatingIndex, TrackLookup};
pub use model::{Track, TrackId};
pub use session::Session;
pub use snapshot::{export_snapshot, Snapshot};

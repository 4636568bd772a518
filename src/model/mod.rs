//! Data model for the playlist core
//!
//! This module defines the track value type that every other
//! component (engine, indexes, history, snapshot) operates on.

mod track;

pub use track::{Track, TrackId};

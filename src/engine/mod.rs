//! Ordered playlist with undo
//!
//! A doubly-linked track sequence (arena-backed, integer handles instead
//! of pointers) plus the edit operations and undo log on top of it.

mod list;
mod playlist;

pub use playlist::PlaylistEngine;

//! Auxiliary track indexes
//!
//! Point lookups by title or id, and a rating tree bucketing tracks by
//! star value. Both hold their own copies of the tracks fed to them and
//! are not kept in sync with the playlist engine.

mod lookup;
mod rating;

pub use lookup::TrackLookup;
pub use rating::RatingIndex;

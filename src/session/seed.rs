//! TOML seed files
//!
//! A seed file pre-populates a session before any script runs:
//!
//! ```toml
//! [[tracks]]
//! title = "Echoes"
//! artist = "Pink Floyd"
//! duration_secs = 1412
//! rating = 5        # optional, 1-5
//! played = true     # optional
//! ```

use super::Session;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    tracks: Vec<SeedTrack>,
}

/// One seeded track record
#[derive(Debug, Deserialize)]
struct SeedTrack {
    title: String,
    artist: String,
    duration_secs: u32,

    /// Optional star rating applied after the add
    rating: Option<u8>,

    /// Record an initial play of this track
    #[serde(default)]
    played: bool,
}

/// Load a seed file into the session
///
/// Every track is added through the session, so it reaches the playlist
/// and the lookup index the same way interactive adds do. Empty titles
/// or artists fail the whole load; the core never sees them.
pub fn load(path: &Path, session: &mut Session) -> Result<usize> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {:?}", path))?;
    let seed: SeedFile = toml::from_str(&text)
        .with_context(|| format!("Failed to parse seed file {:?}", path))?;

    for (i, entry) in seed.tracks.iter().enumerate() {
        if entry.title.trim().is_empty() || entry.artist.trim().is_empty() {
            bail!("Seed track {} has an empty title or artist", i + 1);
        }
    }

    let count = seed.tracks.len();
    for entry in seed.tracks {
        let track = session.add_track(&entry.title, &entry.artist, entry.duration_secs);

        if let Some(rating) = entry.rating {
            session.rate(&track.title, rating);
        }
        if entry.played {
            let tail = session.songs().len().saturating_sub(1);
            session.play(tail);
        }
    }

    log::info!("Seeded {} tracks from {:?}", count, path);
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_seed(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("seed.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_load_adds_tracks_to_playlist_and_lookup() {
        let (_dir, path) = write_seed(
            r#"
[[tracks]]
title = "One"
artist = "A"
duration_secs = 60

[[tracks]]
title = "Two"
artist = "B"
duration_secs = 120
"#,
        );

        let mut session = Session::new();
        let count = load(&path, &mut session).unwrap();

        assert_eq!(count, 2);
        assert_eq!(session.songs().len(), 2);
        assert!(session.find_by_title("Two").is_some());
    }

    #[test]
    fn test_load_applies_rating_and_played_flags() {
        let (_dir, path) = write_seed(
            r#"
[[tracks]]
title = "Starred"
artist = "A"
duration_secs = 90
rating = 4
played = true
"#,
        );

        let mut session = Session::new();
        load(&path, &mut session).unwrap();

        let snapshot = session.snapshot();
        assert_eq!(snapshot.played_total, 1);
        assert_eq!(snapshot.rating_histogram.get(&4), Some(&1));
    }

    #[test]
    fn test_load_rejects_empty_title() {
        let (_dir, path) = write_seed(
            r#"
[[tracks]]
title = "  "
artist = "A"
duration_secs = 10
"#,
        );

        let mut session = Session::new();
        assert!(load(&path, &mut session).is_err());
        assert!(session.songs().is_empty());
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let (_dir, path) = write_seed("tracks = not valid toml [");

        let mut session = Session::new();
        assert!(load(&path, &mut session).is_err());
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut session = Session::new();

        assert!(load(&dir.path().join("absent.toml"), &mut session).is_err());
    }

    #[test]
    fn test_empty_seed_is_fine() {
        let (_dir, path) = write_seed("");

        let mut session = Session::new();
        assert_eq!(load(&path, &mut session).unwrap(), 0);
    }
}

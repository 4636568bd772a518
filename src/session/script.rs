//! Line-oriented session scripts
//!
//! One command per line; `#` starts a comment and blank lines are
//! skipped. Parsing is the only fallible step. Applying a parsed
//! command never fails: invalid indexes, ratings and titles are
//! reported by the core and leave state unchanged.

use super::Session;
use crate::model::TrackId;
use crate::sort;
use std::fmt;
use std::path::Path;
use std::time::Instant;
use thiserror::Error;

/// Script parse errors
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read script: {0}")]
    Io(#[from] std::io::Error),

    #[error("Line {line}: malformed command '{text}'")]
    Malformed { line: usize, text: String },

    #[error("Line {line}: unknown command '{name}'")]
    UnknownCommand { line: usize, name: String },
}

/// Sort orders a script can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    DurationAsc,
    DurationDesc,
    RecentlyAdded,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SortKey::Title => "title",
            SortKey::DurationAsc => "duration (ascending)",
            SortKey::DurationDesc => "duration (descending)",
            SortKey::RecentlyAdded => "recently added",
        };
        f.write_str(label)
    }
}

/// One parsed script command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `add title|artist|secs`
    Add {
        title: String,
        artist: String,
        duration_secs: u32,
    },

    /// `delete i`
    Delete { index: usize },

    /// `move from to`
    Move { from: usize, to: usize },

    /// `reverse`
    Reverse,

    /// `shuffle`
    Shuffle,

    /// `undo n`
    Undo { count: usize },

    /// `play i`
    Play { index: usize },

    /// `unplay`
    Unplay,

    /// `rate title|stars`
    Rate { title: String, stars: u8 },

    /// `unrate title`
    Unrate { title: String },

    /// `forget title`
    Forget { title: String },

    /// `find title`
    Find { title: String },

    /// `find-id id`
    FindId { id: TrackId },

    /// `sort title|duration-asc|duration-desc|recent`
    Sort { key: SortKey },
}

/// Read and parse a script file
pub fn load(path: &Path) -> Result<Vec<Command>, ScriptError> {
    let source = std::fs::read_to_string(path)?;
    parse(&source)
}

/// Parse script source into commands
pub fn parse(source: &str) -> Result<Vec<Command>, ScriptError> {
    let mut commands = Vec::new();

    for (number, raw) in source.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        commands.push(parse_line(line, number + 1)?);
    }

    Ok(commands)
}

fn parse_line(line: &str, number: usize) -> Result<Command, ScriptError> {
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let malformed = || ScriptError::Malformed {
        line: number,
        text: line.to_string(),
    };

    match word {
        "add" => {
            let mut fields = rest.splitn(3, '|').map(str::trim);
            match (fields.next(), fields.next(), fields.next()) {
                (Some(title), Some(artist), Some(secs)) if !title.is_empty() && !artist.is_empty() => {
                    Ok(Command::Add {
                        title: title.to_string(),
                        artist: artist.to_string(),
                        duration_secs: secs.parse().map_err(|_| malformed())?,
                    })
                }
                _ => Err(malformed()),
            }
        }
        "delete" => Ok(Command::Delete {
            index: rest.parse().map_err(|_| malformed())?,
        }),
        "move" => {
            let mut fields = rest.split_whitespace();
            match (fields.next(), fields.next(), fields.next()) {
                (Some(from), Some(to), None) => Ok(Command::Move {
                    from: from.parse().map_err(|_| malformed())?,
                    to: to.parse().map_err(|_| malformed())?,
                }),
                _ => Err(malformed()),
            }
        }
        "reverse" => Ok(Command::Reverse),
        "shuffle" => Ok(Command::Shuffle),
        "undo" => Ok(Command::Undo {
            count: rest.parse().map_err(|_| malformed())?,
        }),
        "play" => Ok(Command::Play {
            index: rest.parse().map_err(|_| malformed())?,
        }),
        "unplay" => Ok(Command::Unplay),
        "rate" => match rest.split_once('|') {
            Some((title, stars)) if !title.trim().is_empty() => Ok(Command::Rate {
                title: title.trim().to_string(),
                stars: stars.trim().parse().map_err(|_| malformed())?,
            }),
            _ => Err(malformed()),
        },
        "unrate" if !rest.is_empty() => Ok(Command::Unrate {
            title: rest.to_string(),
        }),
        "forget" if !rest.is_empty() => Ok(Command::Forget {
            title: rest.to_string(),
        }),
        "find" if !rest.is_empty() => Ok(Command::Find {
            title: rest.to_string(),
        }),
        "find-id" => Ok(Command::FindId {
            id: rest.parse().map_err(|_| malformed())?,
        }),
        "sort" => {
            let key = match rest {
                "title" => SortKey::Title,
                "duration-asc" => SortKey::DurationAsc,
                "duration-desc" => SortKey::DurationDesc,
                "recent" => SortKey::RecentlyAdded,
                _ => return Err(malformed()),
            };
            Ok(Command::Sort { key })
        }
        "unrate" | "forget" | "find" => Err(malformed()),
        _ => Err(ScriptError::UnknownCommand {
            line: number,
            name: word.to_string(),
        }),
    }
}

/// Execute one command against a session
///
/// Sort commands work on a copy of the playlist; the sort call itself
/// is timed and the ordered copy is reported, the playlist is left
/// untouched.
pub fn apply(session: &mut Session, command: &Command) {
    match command {
        Command::Add {
            title,
            artist,
            duration_secs,
        } => {
            let track = session.add_track(title, artist, *duration_secs);
            log::info!("Added '{}' (id {})", track.title, track.id);
        }
        Command::Delete { index } => session.delete(*index),
        Command::Move { from, to } => session.move_track(*from, *to),
        Command::Reverse => session.reverse(),
        Command::Shuffle => session.shuffle(),
        Command::Undo { count } => session.undo(*count),
        Command::Play { index } => session.play(*index),
        Command::Unplay => match session.unplay() {
            Some(track) => log::info!("Undid play of '{}'", track.title),
            None => log::info!("No plays to undo"),
        },
        Command::Rate { title, stars } => session.rate(title, *stars),
        Command::Unrate { title } => session.unrate(title),
        Command::Forget { title } => session.forget(title),
        Command::Find { title } => match session.find_by_title(title) {
            Some(track) => log::info!("Found: {} (id {})", track, track.id),
            None => log::info!("No track titled '{}'", title),
        },
        Command::FindId { id } => match session.find_by_id(*id) {
            Some(track) => log::info!("Found: {} (id {})", track, track.id),
            None => log::info!("No track with id {}", id),
        },
        Command::Sort { key } => {
            let songs = session.songs();

            let started = Instant::now();
            let sorted = match key {
                SortKey::Title => sort::by_title(&songs),
                SortKey::DurationAsc => sort::by_duration(&songs, true),
                SortKey::DurationDesc => sort::by_duration(&songs, false),
                SortKey::RecentlyAdded => sort::by_recently_added(&songs),
            };
            let elapsed = started.elapsed();

            log::info!("Sorted {} songs by {} in {:?}", sorted.len(), key, elapsed);
            for (i, track) in sorted.iter().enumerate() {
                log::info!("  {}. {}", i + 1, track);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let source = "# seed edits\n\nadd One|A|60\n   \nreverse\n";
        let commands = parse(source).unwrap();

        assert_eq!(commands.len(), 2);
        assert_eq!(
            commands[0],
            Command::Add {
                title: "One".to_string(),
                artist: "A".to_string(),
                duration_secs: 60,
            }
        );
        assert_eq!(commands[1], Command::Reverse);
    }

    #[test]
    fn test_parse_add_requires_three_fields() {
        let err = parse("add OnlyTitle|60").unwrap_err();

        match err {
            ScriptError::Malformed { line, .. } => assert_eq!(line, 1),
            other => panic!("expected Malformed, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_empty_add_title() {
        assert!(parse("add  |Queen|354").is_err());
    }

    #[test]
    fn test_parse_reports_line_numbers() {
        let err = parse("reverse\nshuffle\nmove 1\n").unwrap_err();

        match err {
            ScriptError::Malformed { line, .. } => assert_eq!(line, 3),
            other => panic!("expected Malformed, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_unknown_command() {
        let err = parse("explode 3").unwrap_err();

        match err {
            ScriptError::UnknownCommand { name, .. } => assert_eq!(name, "explode"),
            other => panic!("expected UnknownCommand, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rate_splits_on_pipe() {
        let commands = parse("rate My Song|4").unwrap();

        assert_eq!(
            commands[0],
            Command::Rate {
                title: "My Song".to_string(),
                stars: 4,
            }
        );
    }

    #[test]
    fn test_parse_titles_keep_inner_spaces() {
        let commands = parse("find Shine On You Crazy Diamond").unwrap();

        assert_eq!(
            commands[0],
            Command::Find {
                title: "Shine On You Crazy Diamond".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_sort_keys() {
        let commands = parse("sort title\nsort duration-asc\nsort duration-desc\nsort recent").unwrap();

        let keys: Vec<SortKey> = commands
            .into_iter()
            .map(|c| match c {
                Command::Sort { key } => key,
                other => panic!("expected Sort, got {:?}", other),
            })
            .collect();

        assert_eq!(
            keys,
            vec![
                SortKey::Title,
                SortKey::DurationAsc,
                SortKey::DurationDesc,
                SortKey::RecentlyAdded,
            ]
        );
    }

    #[test]
    fn test_parse_sort_rejects_unknown_key() {
        assert!(parse("sort rating").is_err());
    }

    #[test]
    fn test_apply_add_then_delete_round_trip() {
        let mut session = Session::new();

        apply(
            &mut session,
            &Command::Add {
                title: "One".to_string(),
                artist: "A".to_string(),
                duration_secs: 60,
            },
        );
        assert_eq!(session.songs().len(), 1);

        apply(&mut session, &Command::Delete { index: 0 });
        assert!(session.songs().is_empty());
    }

    #[test]
    fn test_apply_never_panics_on_invalid_positions() {
        let mut session = Session::new();

        apply(&mut session, &Command::Delete { index: 9 });
        apply(&mut session, &Command::Move { from: 3, to: 1 });
        apply(&mut session, &Command::Play { index: 2 });
        apply(&mut session, &Command::Unplay);
        apply(
            &mut session,
            &Command::Rate {
                title: "ghost".to_string(),
                stars: 3,
            },
        );

        assert!(session.songs().is_empty());
    }
}

use anyhow::{Context, Result};
use clap::Parser;
use playdeck::session::{script, seed};
use playdeck::Session;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "playdeck")]
#[command(about = "In-memory playlist with undo, indexes and snapshots", long_about = None)]
struct Args {
    /// TOML seed file loaded before the script runs
    #[arg(short = 's', long)]
    seed: Option<PathBuf>,

    /// Command script to run against the session
    #[arg(long)]
    script: Option<PathBuf>,

    /// Write the final snapshot to a file (dated default when no path given)
    #[arg(short = 'e', long, value_name = "PATH", num_args = 0..=1)]
    export: Option<Option<PathBuf>>,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut session = Session::new();

    if let Some(seed_path) = &args.seed {
        log::info!("Loading seed file...");
        seed::load(seed_path, &mut session)?;
    }

    if let Some(script_path) = &args.script {
        log::info!("Running script {:?}...", script_path);
        let commands = script::load(script_path)
            .with_context(|| format!("Failed to load script {:?}", script_path))?;

        for command in &commands {
            script::apply(&mut session, command);
        }
        log::info!("Script finished: {} commands applied", commands.len());
    }

    print_playlist(&session);

    let snapshot = session.snapshot();
    println!();
    print!("{}", snapshot);

    if let Some(target) = args.export {
        let path = match target {
            Some(path) => path,
            None => PathBuf::from(format!(
                "playdeck_snapshot_{}.txt",
                chrono::Local::now().format("%Y%m%d_%H%M%S")
            )),
        };

        std::fs::write(&path, snapshot.to_string())
            .with_context(|| format!("Failed to write snapshot to {:?}", path))?;
        log::info!("Snapshot exported to {:?}", path);
    }

    Ok(())
}

fn print_playlist(session: &Session) {
    let songs = session.songs();
    if songs.is_empty() {
        println!("Playlist is empty!");
        return;
    }

    println!("=== Current Playlist ===");
    for (i, track) in songs.iter().enumerate() {
        println!("{}. {}", i + 1, track);
    }
    println!("Total songs: {}", songs.len());
}

//! nexttrack — link lookup CLI
//!
//! Resolve YouTube and preview links for a song from the command line.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use nexttrack::cache::{YOUTUBE_NAMESPACE, cache_key};
use nexttrack::pitch::{midi_to_spn, spn_to_midi};
use nexttrack::{Config, MediaLinks, NextTrackBuilder, VocalRange};

/// nexttrack CLI
#[derive(Parser)]
#[command(name = "nexttrack")]
#[command(version = nexttrack::PKG_VERSION)]
#[command(about = "Song link lookups (YouTube, preview clips)")]
struct Args {
    /// Config file (default: ~/.nexttrack/config.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// YouTube Data API key (overrides config)
    #[arg(long, env = "YOUTUBE_API_KEY", hide_env_values = true)]
    youtube_api_key: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a YouTube link for a song
    Youtube {
        /// Search term, e.g. "Radiohead Creep"
        term: String,
        /// Print only the video id (empty line when none)
        #[arg(long)]
        id: bool,
    },

    /// Resolve preview clip and YouTube links for a song
    Preview {
        /// Search term, e.g. "Radiohead Creep"
        term: String,
    },

    /// Search the Deezer catalogue
    Tracks {
        /// Search term
        term: String,
        /// Maximum number of results
        #[arg(short, long, default_value_t = 5)]
        limit: u32,
    },

    /// Show the cache key a term normalizes to
    Key {
        term: String,
    },

    /// Convert between MIDI numbers and pitch names, or check a range
    Note {
        /// A MIDI number (60), a pitch name (C4) or a range (A2-E4)
        value: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialise tracing (default: warn for CLI; override with RUST_LOG).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Command::Key { term } => println!("{}", cache_key(YOUTUBE_NAMESPACE, &term)),
        Command::Note { value } => print_note(&value)?,
        Command::Youtube { term, id } => {
            let links = build_links(args.config, args.youtube_api_key)?;
            if !links.youtube_configured() {
                eprintln!("warning: no YouTube API key configured, falling back to a search link");
            }
            if id {
                println!("{}", links.youtube_id(&term).await.unwrap_or_default());
            } else {
                println!("{}", links.youtube_url(&term).await);
            }
        }
        Command::Preview { term } => {
            let links = build_links(args.config, args.youtube_api_key)?;
            let preview = links.preview(&term).await;
            println!(
                "preview: {}",
                preview.preview_url.as_deref().unwrap_or("(none)")
            );
            println!("youtube: {}", preview.youtube_url);
        }
        Command::Tracks { term, limit } => {
            let links = build_links(args.config, args.youtube_api_key)?;
            let tracks = links.search_tracks(&term, limit).await?;
            if tracks.is_empty() {
                println!("No tracks found");
            }
            for track in tracks {
                println!(
                    "{:>10}  {} - {} ({})",
                    track.id, track.artist, track.title, track.album
                );
                if let Some(preview) = track.preview_url {
                    println!("{:>10}  preview: {preview}", "");
                }
            }
        }
    }

    Ok(())
}

fn build_links(
    config: Option<PathBuf>,
    youtube_api_key: Option<String>,
) -> nexttrack::Result<MediaLinks> {
    let config = Config::load(config.as_deref())?;
    let mut builder = NextTrackBuilder::from_config(&config);
    if let Some(key) = youtube_api_key {
        builder = builder.youtube_api_key(key);
    }
    builder.build()
}

fn print_note(value: &str) -> nexttrack::Result<()> {
    let value = value.trim();
    if let Ok(midi) = value.parse::<u8>() {
        println!("{}", midi_to_spn(midi)?);
    } else if let Ok(range) = value.parse::<VocalRange>() {
        println!(
            "{range} ({}-{}, {} semitones)",
            range.low(),
            range.high(),
            range.span()
        );
    } else {
        println!("{}", spn_to_midi(value)?);
    }
    Ok(())
}

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{info, level_filters::LevelFilter, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use playlist_matcher::catalog::Track;
use playlist_matcher::config::{AppConfig, CliConfig, FileConfig, OutputFormat};
use playlist_matcher::intent::Intent;
use playlist_matcher::playlist::{dedupe_pool, Playlist};
use playlist_matcher::preferences::LearnedPreferences;

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    if path_buf.is_absolute() {
        return Ok(path_buf);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(path_buf))
}

#[derive(Parser, Debug)]
#[clap(about = "Rank candidate tracks against a playlist intent")]
struct CliArgs {
    /// Path to the intent JSON, as returned by the intent extractor.
    #[clap(long, value_parser = parse_path)]
    pub intent: PathBuf,

    /// Path to a JSON array of candidate tracks.
    #[clap(long, value_parser = parse_path)]
    pub tracks: PathBuf,

    /// The original playlist request text.
    #[clap(long, default_value = "")]
    pub prompt: String,

    /// Path to a TOML config file. Values in the file override CLI arguments.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// Minimum overall score (0-100) a track needs to be kept.
    #[clap(long)]
    pub min_score: Option<u8>,

    /// Maximum number of tracks when the intent does not ask for a count.
    #[clap(long)]
    pub limit: Option<usize>,

    #[clap(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Also print the tracks turned away by the hard filters.
    #[clap(long)]
    pub show_rejected: bool,

    /// Path to a learned-preferences JSON file to update with this playlist.
    #[clap(long, value_parser = parse_path)]
    pub learn: Option<PathBuf>,
}

fn load_intent(path: &Path) -> Result<Intent> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read intent file: {:?}", path))?;
    Intent::from_llm_response(&content)
        .with_context(|| format!("Failed to parse intent file: {:?}", path))
}

fn load_tracks(path: &Path) -> Result<Vec<Track>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read tracks file: {:?}", path))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse tracks file: {:?}", path))
}

fn print_table(playlist: &Playlist, show_rejected: bool) {
    println!("{}", playlist.title);
    println!("{}", playlist.description);
    println!(
        "{} of {} tracks (min score {})",
        playlist.len(),
        playlist.considered,
        playlist.min_score
    );
    println!();

    for (position, score) in playlist.tracks.iter().enumerate() {
        println!(
            "{:>3}. [{:>3}] {} - {} ({})",
            position + 1,
            score.overall_score,
            score.track.artist_credit(),
            score.track.name,
            score.match_reason
        );
    }

    if show_rejected && !playlist.rejected.is_empty() {
        println!();
        println!("Rejected:");
        for rejected in &playlist.rejected {
            println!(
                "     [{:>3}] {} - {}: {}",
                rejected.score.overall_score,
                rejected.score.track.artist_credit(),
                rejected.score.track.name,
                rejected.rejection
            );
        }
    }
}

fn print_json(playlist: &Playlist, show_rejected: bool) -> Result<()> {
    let mut value = serde_json::to_value(playlist)?;
    if !show_rejected {
        if let Some(object) = value.as_object_mut() {
            object.remove("rejected");
        }
    }
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()?;

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config from {:?}", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };
    let cli_config = CliConfig {
        min_score: cli_args.min_score,
        max_tracks: cli_args.limit,
        format: cli_args.format,
    };
    let config = AppConfig::resolve(&cli_config, file_config)?;
    let assembler = config.assembler()?;

    let intent = load_intent(&cli_args.intent)?;
    let pool = dedupe_pool(load_tracks(&cli_args.tracks)?);
    info!("Loaded {} candidate tracks from {:?}", pool.len(), cli_args.tracks);
    if pool.is_empty() {
        warn!("Track pool is empty");
    }

    let playlist = assembler.assemble(&pool, &intent, &cli_args.prompt, None);
    info!(
        "Built \"{}\" with {} tracks, {} rejected",
        playlist.title,
        playlist.len(),
        playlist.rejected.len()
    );

    match config.format {
        OutputFormat::Table => print_table(&playlist, cli_args.show_rejected),
        OutputFormat::Json => print_json(&playlist, cli_args.show_rejected)?,
    }

    if let Some(path) = &cli_args.learn {
        let mut preferences = LearnedPreferences::load(path)?;
        preferences.learn_from_playlist(&intent, playlist.len());
        preferences.save(path)?;
        info!(
            "Updated preferences at {:?}: top genres {:?}, top moods {:?}",
            path,
            preferences.top_genres(5),
            preferences.top_moods(3)
        );
    }

    Ok(())
}

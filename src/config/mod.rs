mod file_config;

pub use file_config::{FileConfig, GateFileConfig, PlaylistFileConfig};

use anyhow::{bail, Context, Result};
use clap::ValueEnum;

use crate::matcher::{GateConfig, MatcherConfig, TrackMatcher, DEFAULT_MIN_SCORE};
use crate::playlist::{PlaylistAssembler, PlaylistSettings, DEFAULT_MAX_TRACKS};

/// How the binary prints a playlist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Applies to requests with and without confirmed artists.
    pub min_score: Option<u8>,
    pub max_tracks: Option<usize>,
    pub format: OutputFormat,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub format: OutputFormat,
    pub matcher: MatcherConfig,
    pub playlist: PlaylistSettings,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let format = match file.format {
            Some(s) => match parse_output_format(&s) {
                Some(format) => format,
                None => bail!("Unknown output format in config file: {:?}", s),
            },
            None => cli.format,
        };

        let weights = file.weights.unwrap_or_default();
        weights.validate().context("Invalid [weights] section")?;

        let gate_file = file.gate.unwrap_or_default();
        let defaults = GateConfig::default();
        let artist_escape_threshold = gate_file
            .artist_escape_threshold
            .unwrap_or(defaults.artist_escape_threshold);
        let genre_floor = gate_file.genre_floor.unwrap_or(defaults.genre_floor);
        check_percent("artist_escape_threshold", artist_escape_threshold)?;
        check_percent("genre_floor", genre_floor)?;

        let playlist_file = file.playlist.unwrap_or_default();
        let min_score = playlist_file
            .min_score
            .or(cli.min_score)
            .unwrap_or(DEFAULT_MIN_SCORE);
        let artist_min_score = playlist_file
            .artist_min_score
            .or(cli.min_score)
            .unwrap_or(DEFAULT_MIN_SCORE);
        if min_score > 100 {
            bail!("min_score must be at most 100, got {}", min_score);
        }
        if artist_min_score > 100 {
            bail!("artist_min_score must be at most 100, got {}", artist_min_score);
        }

        let max_tracks = playlist_file
            .max_tracks
            .or(cli.max_tracks)
            .unwrap_or(DEFAULT_MAX_TRACKS);
        if max_tracks == 0 {
            bail!("max_tracks must be at least 1");
        }

        let matcher_defaults = MatcherConfig::default();
        let matcher = MatcherConfig {
            weights,
            gate: GateConfig {
                min_score,
                artist_escape_threshold,
                genre_floor,
            },
            reference_year: file
                .reference_year
                .unwrap_or(matcher_defaults.reference_year),
            parallel_threshold: file
                .parallel_threshold
                .unwrap_or(matcher_defaults.parallel_threshold),
        };

        Ok(Self {
            format,
            matcher,
            playlist: PlaylistSettings {
                min_score,
                artist_min_score,
                max_tracks,
                relevance: file.relevance.unwrap_or_default(),
            },
        })
    }

    pub fn assembler(&self) -> Result<PlaylistAssembler> {
        let matcher = TrackMatcher::new(self.matcher)?;
        Ok(PlaylistAssembler::new(matcher, self.playlist))
    }
}

fn check_percent(name: &str, value: f64) -> Result<()> {
    if !(0.0..=100.0).contains(&value) {
        bail!("{} must be between 0 and 100, got {}", name, value);
    }
    Ok(())
}

/// Parses an output format string into OutputFormat.
/// Uses clap's ValueEnum trait for parsing.
fn parse_output_format(s: &str) -> Option<OutputFormat> {
    OutputFormat::from_str(s, true).ok()
}

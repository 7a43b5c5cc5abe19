use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::matcher::CategoryWeights;
use crate::playlist::RelevanceCut;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    // Core settings (can override CLI)
    pub format: Option<String>,
    pub reference_year: Option<i32>,
    pub parallel_threshold: Option<usize>,

    // Sections
    /// A full weight table. Missing categories take their default weight.
    pub weights: Option<CategoryWeights>,
    pub gate: Option<GateFileConfig>,
    pub playlist: Option<PlaylistFileConfig>,
    pub relevance: Option<RelevanceCut>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct GateFileConfig {
    pub artist_escape_threshold: Option<f64>,
    pub genre_floor: Option<f64>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct PlaylistFileConfig {
    pub min_score: Option<u8>,
    pub artist_min_score: Option<u8>,
    pub max_tracks: Option<usize>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}

//! Preferences learned from previously generated playlists.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::intent::Intent;

/// Artists remembered from a single playlist.
pub const ARTISTS_PER_PLAYLIST: usize = 5;
/// Upper bound on remembered artists.
pub const MAX_FAVORITE_ARTISTS: usize = 50;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearnedPreferences {
    pub genre_counts: BTreeMap<String, u32>,
    pub mood_counts: BTreeMap<String, u32>,
    /// Most recently learned first.
    pub favorite_artists: Vec<String>,
    pub average_playlist_length: u32,
    pub playlists_learned: u32,
}

impl LearnedPreferences {
    /// Fold one generated playlist into the counters.
    pub fn learn_from_playlist(&mut self, intent: &Intent, track_count: usize) {
        for genre in &intent.genres {
            *self.genre_counts.entry(genre.to_lowercase()).or_default() += 1;
        }
        for mood in &intent.moods {
            *self.mood_counts.entry(mood.to_lowercase()).or_default() += 1;
        }

        for artist in intent
            .requested_artists()
            .take(ARTISTS_PER_PLAYLIST)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
        {
            self.favorite_artists
                .retain(|known| !known.eq_ignore_ascii_case(artist));
            self.favorite_artists.insert(0, artist.to_string());
        }
        self.favorite_artists.truncate(MAX_FAVORITE_ARTISTS);

        let count = u32::try_from(track_count).unwrap_or(u32::MAX);
        self.average_playlist_length = if self.playlists_learned == 0 {
            count
        } else {
            // Two-point moving average, rounded half up.
            ((u64::from(self.average_playlist_length) + u64::from(count) + 1) / 2) as u32
        };
        self.playlists_learned = self.playlists_learned.saturating_add(1);

        debug!(
            "Learned from playlist: {} genres, {} moods, {} tracks",
            intent.genres.len(),
            intent.moods.len(),
            track_count
        );
    }

    pub fn top_genres(&self, limit: usize) -> Vec<&str> {
        top_entries(&self.genre_counts, limit)
    }

    pub fn top_moods(&self, limit: usize) -> Vec<&str> {
        top_entries(&self.mood_counts, limit)
    }

    /// Load from a JSON file; a missing file yields empty preferences.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read preferences file: {:?}", path))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse preferences file: {:?}", path))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write preferences file: {:?}", path))
    }
}

/// Keys by count descending, ties broken by name.
fn top_entries(counts: &BTreeMap<String, u32>, limit: usize) -> Vec<&str> {
    let mut entries: Vec<(&String, &u32)> = counts.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    entries
        .into_iter()
        .take(limit)
        .map(|(key, _)| key.as_str())
        .collect()
}

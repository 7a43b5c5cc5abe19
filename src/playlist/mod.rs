//! Playlist assembly on top of the matcher.
//!
//! Takes a discovered track pool, picks the minimum score for the request,
//! ranks the pool, applies the relevance cut and truncates to the playlist
//! length.

pub mod dedup;
mod relevance;

pub use dedup::{new_songs_only, normalize_song_name, song_signatures, SongSignatures};
pub use relevance::RelevanceCut;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::Track;
use crate::intent::Intent;
use crate::matcher::{MatchScore, RejectedTrack, TrackMatcher, DEFAULT_MIN_SCORE};

/// Upper bound on playlist length when the user did not ask for one.
pub const DEFAULT_MAX_TRACKS: usize = 200;

const DEFAULT_TITLE: &str = "My Playlist";
const MAX_TITLE_CHARS: usize = 60;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaylistSettings {
    /// Minimum overall score when no artist was requested.
    pub min_score: u8,
    /// Minimum overall score when the intent confirms artists.
    pub artist_min_score: u8,
    pub max_tracks: usize,
    pub relevance: RelevanceCut,
}

impl Default for PlaylistSettings {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
            artist_min_score: DEFAULT_MIN_SCORE,
            max_tracks: DEFAULT_MAX_TRACKS,
            relevance: RelevanceCut::None,
        }
    }
}

/// A finished playlist: the chosen tracks best first, plus what was left out.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist<'a> {
    pub title: String,
    pub description: String,
    pub tracks: Vec<MatchScore<'a>>,
    pub min_score: u8,
    /// Number of tracks scored.
    pub considered: usize,
    pub rejected: Vec<RejectedTrack<'a>>,
}

impl Playlist<'_> {
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

/// Keep the first track for each id and drop tracks without one.
pub fn dedupe_pool(tracks: Vec<Track>) -> Vec<Track> {
    let total = tracks.len();
    let mut seen = HashSet::with_capacity(total);
    let pool: Vec<Track> = tracks
        .into_iter()
        .filter(|t| !t.id.trim().is_empty() && seen.insert(t.id.clone()))
        .collect();
    if pool.len() < total {
        warn!(
            "Dropped {} duplicate or unidentified tracks from the pool",
            total - pool.len()
        );
    }
    pool
}

#[derive(Clone, Debug, Default)]
pub struct PlaylistAssembler {
    matcher: TrackMatcher,
    settings: PlaylistSettings,
}

impl PlaylistAssembler {
    pub fn new(matcher: TrackMatcher, settings: PlaylistSettings) -> Self {
        Self { matcher, settings }
    }

    pub fn matcher(&self) -> &TrackMatcher {
        &self.matcher
    }

    pub fn settings(&self) -> &PlaylistSettings {
        &self.settings
    }

    pub fn min_score_for(&self, intent: &Intent) -> u8 {
        if intent.has_requested_artists() {
            self.settings.artist_min_score
        } else {
            self.settings.min_score
        }
    }

    pub fn track_limit_for(&self, intent: &Intent) -> usize {
        intent.track_limit.unwrap_or(self.settings.max_tracks)
    }

    /// Rank `pool` for the request and build the playlist.
    ///
    /// `min_score` overrides the score chosen by [`Self::min_score_for`].
    pub fn assemble<'t>(
        &self,
        pool: &'t [Track],
        intent: &Intent,
        prompt: &str,
        min_score: Option<u8>,
    ) -> Playlist<'t> {
        let min_score = min_score.unwrap_or_else(|| self.min_score_for(intent));
        let limit = self.track_limit_for(intent);

        let without_features = pool.iter().filter(|t| t.audio_features.is_none()).count();
        if without_features > 0 {
            warn!(
                "{} of {} tracks have no audio features; feature checks will fail for them",
                without_features,
                pool.len()
            );
        }

        let outcome = self.matcher.rank_with_report(pool, intent, prompt, min_score);
        let relevant = self.settings.relevance.apply(outcome.ranked);
        let mut tracks = SongSignatures::new().filter_new(relevant, |s| s.track);
        tracks.truncate(limit);

        debug!(
            "Assembled playlist with {} tracks (limit {}, min score {})",
            tracks.len(),
            limit,
            min_score
        );

        Playlist {
            title: playlist_title(intent, prompt),
            description: playlist_description(intent, prompt),
            tracks,
            min_score,
            considered: pool.len(),
            rejected: outcome.rejected,
        }
    }
}

fn playlist_title(intent: &Intent, prompt: &str) -> String {
    if let Some(title) = intent.playlist_title.as_deref().map(str::trim) {
        if !title.is_empty() {
            return title.to_string();
        }
    }
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return DEFAULT_TITLE.to_string();
    }
    let mut chars = prompt.chars();
    let title: String = chars.by_ref().take(MAX_TITLE_CHARS).collect();
    let mut title = match title.chars().next() {
        Some(first) => first.to_uppercase().chain(title.chars().skip(1)).collect(),
        None => title,
    };
    if chars.next().is_some() {
        title.push_str("...");
    }
    title
}

fn playlist_description(intent: &Intent, prompt: &str) -> String {
    match intent.playlist_description.as_deref().map(str::trim) {
        Some(description) if !description.is_empty() => description.to_string(),
        _ => format!("Generated from: \"{}\"", prompt.trim()),
    }
}

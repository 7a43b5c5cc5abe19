//! Song-level de-duplication.
//!
//! The same recording often exists under several ids (single, album,
//! remaster, "feat." credit variants). Tracks are compared by a small set of
//! signatures built from their artists and a normalised title.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::catalog::Track;

lazy_static! {
    static ref PARENTHESIZED: Regex = Regex::new(r"\s*\(.*?\)\s*").expect("valid regex");
    static ref BRACKETED: Regex = Regex::new(r"\s*\[.*?\]\s*").expect("valid regex");
    static ref PUNCTUATION: Regex = Regex::new(r"[^\w\s]").expect("valid regex");
    static ref WHITESPACE: Regex = Regex::new(r"\s+").expect("valid regex");
}

/// Lower-case a title and strip `(...)`/`[...]` suffixes and punctuation.
pub fn normalize_song_name(name: &str) -> String {
    let lower = name.to_lowercase();
    let stripped = PARENTHESIZED.replace_all(&lower, " ");
    let stripped = BRACKETED.replace_all(&stripped, " ");
    let stripped = PUNCTUATION.replace_all(&stripped, "");
    WHITESPACE.replace_all(&stripped, " ").trim().to_string()
}

/// The keys under which a track is considered "the same song".
pub fn song_signatures(track: &Track) -> [String; 3] {
    let primary = track
        .primary_artist()
        .map(|a| a.name.trim().to_lowercase())
        .unwrap_or_default();
    let mut all: Vec<String> = track
        .artists
        .iter()
        .map(|a| a.name.trim().to_lowercase())
        .collect();
    all.sort();
    let all = all.join(", ");
    let normalized = normalize_song_name(&track.name);

    [
        format!("{} - {}", primary, normalized),
        format!("{} - {}", all, normalized),
        format!("{} - {}", all, track.name.trim().to_lowercase()),
    ]
}

/// Ids and signatures of the songs already in a playlist.
#[derive(Debug, Default, Clone)]
pub struct SongSignatures {
    ids: HashSet<String>,
    keys: HashSet<String>,
}

impl SongSignatures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tracks<'a>(tracks: impl IntoIterator<Item = &'a Track>) -> Self {
        let mut signatures = Self::new();
        for track in tracks {
            signatures.insert(track);
        }
        signatures
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, track: &Track) -> bool {
        self.ids.contains(&track.id) || song_signatures(track).iter().any(|k| self.keys.contains(k))
    }

    /// Record a track. Returns `false` if it duplicates one already recorded.
    pub fn insert(&mut self, track: &Track) -> bool {
        if self.contains(track) {
            return false;
        }
        self.ids.insert(track.id.clone());
        self.keys.extend(song_signatures(track));
        true
    }

    /// Keep the candidates that are new, recording each one kept so that
    /// candidates are also de-duplicated against each other.
    pub fn filter_new<T, F>(&mut self, candidates: Vec<T>, track_of: F) -> Vec<T>
    where
        F: Fn(&T) -> &Track,
    {
        let total = candidates.len();
        let kept: Vec<T> = candidates
            .into_iter()
            .filter(|candidate| self.insert(track_of(candidate)))
            .collect();
        if kept.len() < total {
            debug!("Dropped {} duplicate songs", total - kept.len());
        }
        kept
    }
}

/// Tracks from `additions` that are not already in `existing` and not
/// repeated among themselves.
pub fn new_songs_only(existing: &[Track], additions: Vec<Track>) -> Vec<Track> {
    SongSignatures::from_tracks(existing).filter_new(additions, |t| t)
}

//! Playlist Matcher Library
//!
//! Scores and ranks candidate tracks against a structured playlist intent.

pub mod catalog;
pub mod config;
pub mod intent;
pub mod matcher;
pub mod playlist;
pub mod preferences;

// Re-export commonly used types for convenience
pub use catalog::{AudioFeatures, Track};
pub use intent::{Intent, IntentError};
pub use matcher::{
    rank_tracks_by_match, score_track_match, MatchScore, MatcherConfig, TrackMatcher,
};
pub use playlist::{Playlist, PlaylistAssembler, PlaylistSettings};

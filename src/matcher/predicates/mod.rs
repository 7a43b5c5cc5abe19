//! Checklist predicates, one module per category.
//!
//! Every predicate follows the same convention: a facet the user never asked
//! for is [`Evaluation::NotApplicable`]; a requested facet is `Satisfied` or
//! `Failed`. A requested facet that needs audio features fails when the track
//! has none, since it cannot be verified.

pub mod audio;
pub mod context;
pub mod era;
pub mod genre;
pub mod identity;
pub mod language;
pub mod mood;
pub mod popularity;
pub mod sound;

use super::Evaluation;
use crate::catalog::{AudioFeatures, Track};

/// Trigger words for a facet and the audio profile a track needs to satisfy it.
pub(crate) struct Profile {
    pub terms: &'static [&'static str],
    pub check: fn(&AudioFeatures) -> bool,
}

/// Verify a requested facet against the track's audio features.
pub(crate) fn check_features(
    track: &Track,
    check: impl FnOnce(&AudioFeatures) -> bool,
) -> Evaluation {
    match track.audio_features.as_ref() {
        Some(features) => Evaluation::from_check(check(features)),
        None => Evaluation::Failed,
    }
}

/// Evaluate a table of profiles: not applicable when nothing triggered,
/// satisfied when the track fits any triggered profile.
pub(crate) fn evaluate_profiles(
    track: &Track,
    profiles: &[Profile],
    triggered: impl Fn(&Profile) -> bool,
) -> Evaluation {
    let requested: Vec<&Profile> = profiles.iter().filter(|p| triggered(p)).collect();
    if requested.is_empty() {
        return Evaluation::NotApplicable;
    }
    check_features(track, |features| {
        requested.iter().any(|profile| (profile.check)(features))
    })
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::catalog::{Album, Artist, AudioFeatures, Mode, Track};

    pub fn features() -> AudioFeatures {
        AudioFeatures {
            tempo: 110.0,
            energy: 0.5,
            danceability: 0.5,
            valence: 0.5,
            acousticness: 0.2,
            instrumentalness: 0.0,
            speechiness: 0.05,
            liveness: 0.1,
            mode: Mode::Major,
            key: 0,
        }
    }

    pub fn track_with(features: Option<AudioFeatures>) -> Track {
        Track {
            id: "track".to_string(),
            name: "Some Song".to_string(),
            artists: vec![Artist {
                name: "Some Artist".to_string(),
            }],
            album: Album {
                name: "Some Album".to_string(),
                release_date: Some("2015-06-01".to_string()),
            },
            popularity: 50,
            explicit: None,
            uri: None,
            genres: vec![],
            audio_features: features,
        }
    }
}

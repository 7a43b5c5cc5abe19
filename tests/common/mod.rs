//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use playlist_matcher::catalog::{Album, Artist, AudioFeatures, Mode, Track};
use playlist_matcher::intent::{EnergyLevel, Intent};
use playlist_matcher::matcher::{MatcherConfig, TrackMatcher};

pub const REFERENCE_YEAR: i32 = 2024;

/// A matcher with a fixed "now" so era checks do not depend on the clock.
pub fn matcher() -> TrackMatcher {
    TrackMatcher::new(MatcherConfig {
        reference_year: REFERENCE_YEAR,
        ..Default::default()
    })
    .unwrap()
}

/// Mid-range features that trip no threshold on their own.
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

pub struct TrackBuilder {
    track: Track,
}

impl TrackBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            track: Track {
                id: id.to_string(),
                name: format!("Track {}", id),
                artists: vec![Artist {
                    name: "Session Band".to_string(),
                }],
                album: Album {
                    name: "Collection".to_string(),
                    release_date: Some("2019-03-01".to_string()),
                },
                popularity: 50,
                explicit: Some(false),
                uri: None,
                genres: vec![],
                audio_features: Some(features()),
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.track.name = name.to_string();
        self
    }

    pub fn artists(mut self, names: &[&str]) -> Self {
        self.track.artists = names
            .iter()
            .map(|n| Artist {
                name: n.to_string(),
            })
            .collect();
        self
    }

    pub fn genres(mut self, genres: &[&str]) -> Self {
        self.track.genres = genres.iter().map(|g| g.to_string()).collect();
        self
    }

    pub fn released(mut self, date: &str) -> Self {
        self.track.album.release_date = Some(date.to_string());
        self
    }

    pub fn popularity(mut self, popularity: u8) -> Self {
        self.track.popularity = popularity;
        self
    }

    pub fn features(mut self, edit: impl FnOnce(&mut AudioFeatures)) -> Self {
        let mut features = self.track.audio_features.take().unwrap_or_else(features);
        edit(&mut features);
        self.track.audio_features = Some(features);
        self
    }

    pub fn without_features(mut self) -> Self {
        self.track.audio_features = None;
        self
    }

    pub fn build(self) -> Track {
        self.track
    }
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// `{energy_level: "high", genres: ["pop"]}`.
pub fn high_energy_pop() -> Intent {
    Intent {
        genres: strings(&["pop"]),
        energy_level: Some(EnergyLevel::High),
        ..Default::default()
    }
}

/// Energy 0.73, 171 BPM, popularity 95; every other field at its neutral default.
pub fn workout_track() -> Track {
    TrackBuilder::new("workout")
        .popularity(95)
        .features(|f| {
            f.energy = 0.73;
            f.tempo = 171.0;
        })
        .build()
}

pub fn classical_track() -> Track {
    TrackBuilder::new("classical")
        .name("Clair de Lune")
        .artists(&["Claude Debussy"])
        .genres(&["classical", "impressionism"])
        .popularity(70)
        .features(|f| {
            f.energy = 0.18;
            f.tempo = 72.5;
            f.acousticness = 0.99;
            f.instrumentalness = 0.95;
            f.danceability = 0.2;
            f.valence = 0.1;
            f.mode = Mode::Minor;
        })
        .build()
}

pub fn ids(tracks: &[playlist_matcher::MatchScore]) -> Vec<String> {
    tracks.iter().map(|s| s.track.id.clone()).collect()
}

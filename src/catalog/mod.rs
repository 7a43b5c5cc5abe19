//! Candidate track models.
//!
//! These mirror the track objects returned by the music catalog's search and
//! audio-analysis endpoints. They are read-only inputs for the matcher.

use serde::{Deserialize, Serialize};

// =============================================================================
// Enumerations
// =============================================================================

/// Musical mode of a track, as reported by the audio-analysis service (0/1).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Mode {
    Minor,
    Major,
}

impl TryFrom<u8> for Mode {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Mode::Minor),
            1 => Ok(Mode::Major),
            other => Err(format!("mode must be 0 or 1, got {}", other)),
        }
    }
}

impl From<Mode> for u8 {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Minor => 0,
            Mode::Major => 1,
        }
    }
}

// =============================================================================
// Core Entities
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub name: String,
    /// Release date as reported by the catalog: `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
}

/// Perceptual descriptors computed by the catalog's analysis service.
///
/// All ratios are normalized to 0.0-1.0; tempo is in BPM.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AudioFeatures {
    pub tempo: f64,
    pub energy: f64,
    pub danceability: f64,
    pub valence: f64,
    pub acousticness: f64,
    pub instrumentalness: f64,
    pub speechiness: f64,
    pub liveness: f64,
    pub mode: Mode,
    /// Pitch class, 0-11.
    pub key: u8,
}

/// A candidate track, optionally enriched with audio features.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    /// Ordered credits, primary artist first.
    pub artists: Vec<Artist>,
    pub album: Album,
    /// Catalog popularity, 0-100.
    pub popularity: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explicit: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    /// Genre tags of the track's artists, when the discovery step fetched them.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub genres: Vec<String>,
    #[serde(
        default,
        rename = "audioFeatures",
        alias = "audio_features",
        skip_serializing_if = "Option::is_none"
    )]
    pub audio_features: Option<AudioFeatures>,
}

impl Track {
    /// Year parsed from the album release date, if present and well formed.
    pub fn release_year(&self) -> Option<i32> {
        let date = self.album.release_date.as_deref()?.trim();
        let year = date.get(..4)?;
        if !year.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        year.parse().ok()
    }

    /// Popularity clamped to the documented 0-100 range.
    pub fn popularity(&self) -> u8 {
        self.popularity.min(100)
    }

    pub fn primary_artist(&self) -> Option<&Artist> {
        self.artists.first()
    }

    /// Lower-cased artist names in credit order.
    pub fn artist_names_lower(&self) -> Vec<String> {
        self.artists.iter().map(|a| a.name.to_lowercase()).collect()
    }

    /// Comma-separated artist credit, as shown in playlist listings.
    pub fn artist_credit(&self) -> String {
        self.artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_track(release_date: Option<&str>) -> Track {
        Track {
            id: "t1".to_string(),
            name: "Song".to_string(),
            artists: vec![
                Artist {
                    name: "Main".to_string(),
                },
                Artist {
                    name: "Guest".to_string(),
                },
            ],
            album: Album {
                name: "Album".to_string(),
                release_date: release_date.map(str::to_string),
            },
            popularity: 120,
            explicit: None,
            uri: None,
            genres: vec![],
            audio_features: None,
        }
    }

    #[test]
    fn test_release_year_parsing() {
        assert_eq!(make_track(Some("1987-05-01")).release_year(), Some(1987));
        assert_eq!(make_track(Some("2003")).release_year(), Some(2003));
        assert_eq!(make_track(Some("2011-04")).release_year(), Some(2011));
        assert_eq!(make_track(Some("n/a")).release_year(), None);
        assert_eq!(make_track(Some("19")).release_year(), None);
        assert_eq!(make_track(None).release_year(), None);
    }

    #[test]
    fn test_popularity_is_clamped() {
        assert_eq!(make_track(None).popularity(), 100);
    }

    #[test]
    fn test_artist_helpers() {
        let track = make_track(None);
        assert_eq!(track.primary_artist().unwrap().name, "Main");
        assert_eq!(track.artist_names_lower(), vec!["main", "guest"]);
        assert_eq!(track.artist_credit(), "Main, Guest");
    }

    #[test]
    fn test_deserialize_catalog_json() {
        let json = r#"{
            "id": "abc",
            "name": "Blinding Lights",
            "artists": [{"name": "The Weeknd"}],
            "album": {"name": "After Hours", "release_date": "2020-03-20", "images": []},
            "popularity": 95,
            "uri": "spotify:track:abc",
            "audioFeatures": {
                "tempo": 171.0, "energy": 0.73, "danceability": 0.51, "valence": 0.33,
                "acousticness": 0.001, "instrumentalness": 0.0, "speechiness": 0.06,
                "liveness": 0.08, "mode": 1, "key": 1, "loudness": -5.9
            }
        }"#;

        let track: Track = serde_json::from_str(json).unwrap();
        assert_eq!(track.release_year(), Some(2020));
        let features = track.audio_features.unwrap();
        assert_eq!(features.mode, Mode::Major);
        assert_eq!(features.key, 1);
        assert!(track.genres.is_empty());
    }

    #[test]
    fn test_invalid_mode_is_rejected() {
        let json = r#"{"tempo": 1.0, "energy": 0.1, "danceability": 0.1, "valence": 0.1,
            "acousticness": 0.1, "instrumentalness": 0.1, "speechiness": 0.1,
            "liveness": 0.1, "mode": 3, "key": 0}"#;
        assert!(serde_json::from_str::<AudioFeatures>(json).is_err());
    }
}

use serde::{Deserialize, Serialize};
use tabled::Tabled;

// Wire types for the Spotify Web API.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistSearchResponse {
    pub artists: Page<ArtistObject>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistObject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumObject {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackObject {
    pub id: Option<String>,
    pub name: String,
}

// Domain records.

/// An artist as the catalog knows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistRecord {
    pub name: String,
    pub catalog_id: String,
    pub genres: Vec<String>,
}

impl From<ArtistObject> for ArtistRecord {
    fn from(artist: ArtistObject) -> Self {
        ArtistRecord {
            name: artist.name,
            catalog_id: artist.id,
            genres: artist.genres,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub name: String,
    pub track_id: String,
}

impl Track {
    pub fn new(name: impl Into<String>, track_id: impl Into<String>) -> Self {
        Track {
            name: name.into(),
            track_id: track_id.into(),
        }
    }
}

/// The one track chosen for playback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionResult {
    pub artist_name: String,
    pub track: Track,
}

/// Outcome of a single catalog lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
    Failed(String),
}

impl<T> Lookup<T> {
    pub fn found(&self) -> Option<&T> {
        match self {
            Lookup::Found(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            _ => None,
        }
    }
}

#[derive(Tabled)]
pub struct MoodTableRow {
    pub mood: String,
    pub genres: String,
}

#[derive(Tabled)]
pub struct ReportTableRow {
    pub query: String,
    pub status: String,
    pub catalog_name: String,
    pub genres: String,
    pub matches: String,
    pub tracks: String,
}

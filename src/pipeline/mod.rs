//! # Recommendation Pipeline
//!
//! Turns a mood and a list of artist names into one track to play.
//!
//! ```text
//! names ──resolve──> name → Option<ArtistRecord>
//!       ──filter───> name → ArtistRecord          (mood::filter_artists)
//!       ──expand───> name → [Track]
//!       ──select───> SelectionResult
//! ```
//!
//! Each stage only consumes the output of the one before it. Individual
//! lookups that miss or fail never abort the run; they are recorded as
//! [`Fault`]s in the [`RunReport`] so callers can show or inspect what went
//! wrong. The only failure left at the end is an empty selection pool.

mod expand;
mod resolve;
mod select;

use std::{collections::BTreeMap, fmt};

use rand::Rng;

pub use expand::{Expansion, expand_catalog};
pub use resolve::{Resolution, resolve_artists};
pub use select::select_random_track;

use crate::{
    error::Res,
    mood::{self, MoodGenreTable},
    spotify::Catalog,
    types::{ArtistRecord, Lookup, ReportTableRow, SelectionResult, Track},
    utils,
};

/// A per-item miss or failure recorded during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fault {
    ArtistNotFound { query: String },
    ArtistLookupFailed { query: String, reason: String },
    AlbumsFailed { artist: String, reason: String },
    TracksFailed { artist: String, album_id: String, reason: String },
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fault::ArtistNotFound { query } => {
                write!(f, "No artist with the name '{}' exists", query)
            }
            Fault::ArtistLookupFailed { query, reason } => {
                write!(f, "Failed to look up artist '{}': {}", query, reason)
            }
            Fault::AlbumsFailed { artist, reason } => {
                write!(f, "Failed to get albums for artist {}: {}", artist, reason)
            }
            Fault::TracksFailed {
                artist,
                album_id,
                reason,
            } => write!(
                f,
                "Failed to get tracks for album {} of {}: {}",
                album_id, artist, reason
            ),
        }
    }
}

/// Everything one run produced, stage by stage.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub mood: String,
    pub resolutions: Vec<Resolution>,
    pub matched: BTreeMap<String, ArtistRecord>,
    pub tracks: BTreeMap<String, Vec<Track>>,
    pub faults: Vec<Fault>,
}

impl RunReport {
    pub fn new(
        mood: &str,
        resolutions: Vec<Resolution>,
        matched: BTreeMap<String, ArtistRecord>,
        expansion: Expansion,
    ) -> Self {
        let mut faults: Vec<Fault> = resolutions
            .iter()
            .filter_map(|r| match &r.outcome {
                Lookup::Found(_) => None,
                Lookup::NotFound => Some(Fault::ArtistNotFound {
                    query: r.query.clone(),
                }),
                Lookup::Failed(reason) => Some(Fault::ArtistLookupFailed {
                    query: r.query.clone(),
                    reason: reason.clone(),
                }),
            })
            .collect();
        faults.extend(expansion.faults);

        RunReport {
            mood: mood.to_string(),
            resolutions,
            matched,
            tracks: expansion.tracks,
            faults,
        }
    }

    /// Picks the track to play from the gathered tracks.
    pub fn select<R>(&self, rng: &mut R) -> Res<SelectionResult>
    where
        R: Rng + ?Sized,
    {
        select_random_track(&self.tracks, rng)
    }

    pub fn playable_artists(&self) -> usize {
        self.tracks.values().filter(|t| !t.is_empty()).count()
    }

    /// One row per query, in input order.
    pub fn rows(&self, table: &MoodGenreTable) -> Vec<ReportTableRow> {
        let mood_genres = table.genres_for(&self.mood);

        self.resolutions
            .iter()
            .map(|r| {
                let (status, catalog_name, genres, matches) = match &r.outcome {
                    Lookup::Found(record) => (
                        if self.matched.contains_key(&r.query) {
                            "matched"
                        } else {
                            "filtered out"
                        },
                        record.name.clone(),
                        utils::join_genres(&record.genres, 3),
                        mood::match_count(mood_genres, &record.genres).to_string(),
                    ),
                    Lookup::NotFound => ("not found", String::new(), String::new(), "-".into()),
                    Lookup::Failed(_) => ("lookup failed", String::new(), String::new(), "-".into()),
                };

                ReportTableRow {
                    query: r.query.clone(),
                    status: status.to_string(),
                    catalog_name,
                    genres,
                    matches,
                    tracks: self
                        .tracks
                        .get(&r.query)
                        .map(|t| t.len().to_string())
                        .unwrap_or_else(|| "-".into()),
                }
            })
            .collect()
    }
}

/// Runs resolve, filter and expand in one go.
///
/// # Example
///
/// ```
/// let report = gather(&client, &names, "Sad", MoodGenreTable::builtin(), 5).await;
/// let selection = report.select(&mut rand::rng())?;
/// ```
pub async fn gather<C: Catalog>(
    catalog: &C,
    names: &[String],
    mood: &str,
    table: &MoodGenreTable,
    album_limit: u32,
) -> RunReport {
    let resolutions = resolve_artists(catalog, names).await;
    let matched = mood::filter_artists(&Resolution::resolved_map(&resolutions), mood, table);
    let expansion = expand_catalog(catalog, &matched, album_limit).await;

    RunReport::new(mood, resolutions, matched, expansion)
}

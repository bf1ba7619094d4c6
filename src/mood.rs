//! # Mood Module
//!
//! Maps a listener's mood to the genres that suit it and filters resolved
//! artists against that list.
//!
//! The built-in table is created once on first use and never changes. Lookups
//! are by exact label (`"Sad"`, `"Happy"`, ...). An unknown label behaves like a
//! mood without genres: nothing matches, and that is not an error.
//!
//! ## Matching
//!
//! Every genre of the mood counts at most once: it matches when any of the
//! artist's genres is equal to it ignoring case and separator style
//! (`Hip-Hop`, `hip hop` and `hip_hop` are the same genre). An artist is kept
//! when at least one mood genre matches.
//!
//! ```text
//! mood "Happy" -> [Pop, Hip-Hop, Dance, Electronic, Filmi]
//! artist genres  [pop, rock]   -> 1 match  -> kept
//! artist genres  [classical]   -> 0 matches -> dropped
//! ```

use std::{collections::BTreeMap, fmt, sync::LazyLock};

use clap::ValueEnum;

use crate::types::ArtistRecord;

const BUILTIN_MOODS: &[(&str, &[&str])] = &[
    ("Sad", &["R&B", "Indie", "Folk", "Blues", "Pop", "Hip-Hop", "Filmi"]),
    ("Happy", &["Pop", "Hip-Hop", "Dance", "Electronic", "Filmi"]),
    ("Angry", &["Rock", "Metal", "Punk", "Rap"]),
    ("Nervous", &["Electronic", "Ambient", "Classical", "Filmi"]),
    ("Frustrated", &["Hip-Hop", "Rock", "Alternative"]),
    (
        "Bored",
        &["Electronic", "Chill", "Ambient", "Pop", "Hip-Hop", "Rap", "Filmi"],
    ),
    ("Depressed", &["Soul", "Blues", "Folk", "Pop", "Hip-Hop", "Filmi"]),
    ("Motivated", &["Pop", "Hip-Hop", "Rock", "Rap", "Jazz"]),
];

static BUILTIN: LazyLock<MoodGenreTable> = LazyLock::new(|| {
    MoodGenreTable::new(
        BUILTIN_MOODS
            .iter()
            .map(|(mood, genres)| (*mood, genres.iter().copied())),
    )
});

/// The moods a listener can pick on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mood {
    Sad,
    Happy,
    Angry,
    Nervous,
    Frustrated,
    Bored,
    Depressed,
    Motivated,
}

impl Mood {
    /// Key of this mood in the built-in table.
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Sad => "Sad",
            Mood::Happy => "Happy",
            Mood::Angry => "Angry",
            Mood::Nervous => "Nervous",
            Mood::Frustrated => "Frustrated",
            Mood::Bored => "Bored",
            Mood::Depressed => "Depressed",
            Mood::Motivated => "Motivated",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Immutable mapping from mood label to an ordered list of genres.
#[derive(Debug, Clone, Default)]
pub struct MoodGenreTable {
    entries: Vec<(String, Vec<String>)>,
}

impl MoodGenreTable {
    pub fn new<I, K, G, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, G)>,
        K: Into<String>,
        G: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MoodGenreTable {
            entries: entries
                .into_iter()
                .map(|(mood, genres)| (mood.into(), genres.into_iter().map(Into::into).collect()))
                .collect(),
        }
    }

    /// The table shipped with vibebox.
    pub fn builtin() -> &'static MoodGenreTable {
        &BUILTIN
    }

    /// Genres for `mood`, empty when the label is unknown.
    pub fn genres_for(&self, mood: &str) -> &[String] {
        self.entries
            .iter()
            .find(|(label, _)| label == mood)
            .map(|(_, genres)| genres.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, mood: &str) -> bool {
        self.entries.iter().any(|(label, _)| label == mood)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(label, genres)| (label.as_str(), genres.as_slice()))
    }
}

/// Folds a genre tag for comparison: lowercase, with hyphens, underscores and
/// whitespace runs collapsed to a single space, so `Hip-Hop` equals `hip hop`.
pub fn normalize_genre(genre: &str) -> String {
    genre
        .to_lowercase()
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Number of mood genres that have an equal counterpart (see
/// [`normalize_genre`]) among the artist's genres.
pub fn match_count(mood_genres: &[String], artist_genres: &[String]) -> usize {
    let artist_genres: Vec<String> = artist_genres.iter().map(|g| normalize_genre(g)).collect();

    mood_genres
        .iter()
        .filter(|mood_genre| {
            let mood_genre = normalize_genre(mood_genre);
            artist_genres.iter().any(|g| *g == mood_genre)
        })
        .count()
}

/// Keeps the resolved artists whose genres fit `mood`.
///
/// Absent artists are skipped. Retained records are returned unchanged under
/// their original key.
///
/// # Example
///
/// ```
/// let kept = filter_artists(&resolved, "Happy", MoodGenreTable::builtin());
/// ```
pub fn filter_artists(
    resolved: &BTreeMap<String, Option<ArtistRecord>>,
    mood: &str,
    table: &MoodGenreTable,
) -> BTreeMap<String, ArtistRecord> {
    let mood_genres = table.genres_for(mood);

    resolved
        .iter()
        .filter_map(|(name, record)| record.as_ref().map(|r| (name, r)))
        .filter(|(_, record)| match_count(mood_genres, &record.genres) >= 1)
        .map(|(name, record)| (name.clone(), record.clone()))
        .collect()
}

use std::collections::BTreeMap;

use rand::{Rng, seq::IndexedRandom};

use crate::{
    error::{Res, VibeError},
    types::{SelectionResult, Track},
};

/// Picks one track: first a random track per artist, then a random artist.
///
/// Only artists with at least one track take part, and each of them is
/// equally likely regardless of how many tracks it has.
///
/// # Errors
///
/// [`VibeError::EmptySelectionPool`] when no artist has a track.
pub fn select_random_track<R>(
    tracks_by_artist: &BTreeMap<String, Vec<Track>>,
    rng: &mut R,
) -> Res<SelectionResult>
where
    R: Rng + ?Sized,
{
    let candidates: Vec<(&String, &Track)> = tracks_by_artist
        .iter()
        .filter_map(|(artist, tracks)| tracks.choose(rng).map(|track| (artist, track)))
        .collect();

    let (artist, track) = candidates
        .choose(rng)
        .ok_or(VibeError::EmptySelectionPool)?;

    Ok(SelectionResult {
        artist_name: artist.to_string(),
        track: (*track).clone(),
    })
}

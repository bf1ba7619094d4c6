use std::collections::BTreeMap;

use futures::future::join_all;

use crate::{
    spotify::Catalog,
    types::{ArtistRecord, Track},
};

use super::Fault;

/// Tracks gathered per artist, plus everything that went wrong on the way.
#[derive(Debug, Clone, Default)]
pub struct Expansion {
    pub tracks: BTreeMap<String, Vec<Track>>,
    pub faults: Vec<Fault>,
}

/// Fetches albums and then tracks for every artist.
///
/// Each artist gets up to `album_limit` albums; each album contributes its
/// tracks in catalog order, so an artist's sequence is album-then-track
/// ordered. Artists are expanded concurrently, albums of one artist one after
/// the other.
///
/// Failures stay local:
/// - the album listing fails: the artist ends up with no tracks
/// - one album's track listing fails: only that album is missing
///
/// Every input key is present in [`Expansion::tracks`], possibly with an empty
/// sequence.
pub async fn expand_catalog<C: Catalog>(
    catalog: &C,
    artists: &BTreeMap<String, ArtistRecord>,
    album_limit: u32,
) -> Expansion {
    let per_artist = artists
        .iter()
        .map(|(name, record)| expand_artist(catalog, name, record, album_limit));

    let mut expansion = Expansion::default();
    for (name, tracks, faults) in join_all(per_artist).await {
        expansion.tracks.insert(name, tracks);
        expansion.faults.extend(faults);
    }

    expansion
}

async fn expand_artist<C: Catalog>(
    catalog: &C,
    name: &str,
    record: &ArtistRecord,
    album_limit: u32,
) -> (String, Vec<Track>, Vec<Fault>) {
    let mut faults = Vec::new();

    let album_ids = match catalog.artist_albums(&record.catalog_id, album_limit).await {
        Ok(ids) => ids,
        Err(e) => {
            tracing::warn!(artist = %name, error = %e, "failed to get albums");
            faults.push(Fault::AlbumsFailed {
                artist: name.to_string(),
                reason: e.to_string(),
            });
            Vec::new()
        }
    };

    let mut tracks = Vec::new();
    for album_id in album_ids {
        match catalog.album_tracks(&album_id).await {
            Ok(album_tracks) => tracks.extend(album_tracks),
            Err(e) => {
                tracing::warn!(artist = %name, album = %album_id, error = %e, "failed to get tracks");
                faults.push(Fault::TracksFailed {
                    artist: name.to_string(),
                    album_id,
                    reason: e.to_string(),
                });
            }
        }
    }

    (name.to_string(), tracks, faults)
}

use crate::{
    error::Res,
    types::{AlbumObject, Page, Track, TrackObject},
};

use super::SpotifyClient;

/// Retrieves the first `limit` album ids of an artist.
///
/// Calls `/artists/{id}/albums` once; no further pages are requested. The ids
/// keep the order the catalog returns them in.
///
/// # Arguments
///
/// * `client` - Authenticated Spotify client
/// * `artist_id` - Catalog id of the artist
/// * `limit` - Maximum number of albums (1-50)
///
/// # Returns
///
/// - `Ok(Vec<String>)` - Album ids, possibly empty
/// - `Err(VibeError::Http)` - Network error, non-2xx status, or a body without
///   an `items` list
///
/// # Example
///
/// ```
/// let album_ids = artist_albums(&client, "3TVXtAsR1Inumwj472S9r4", 5).await?;
/// println!("Found {} albums", album_ids.len());
/// ```
pub async fn artist_albums(client: &SpotifyClient, artist_id: &str, limit: u32) -> Res<Vec<String>> {
    let response = client
        .get(&format!("/artists/{id}/albums", id = artist_id))
        .query(&[("limit", limit)])
        .send()
        .await?
        .error_for_status()?;

    let json = response.json::<Page<AlbumObject>>().await?;

    Ok(json.items.into_iter().map(|album| album.id).collect())
}

/// Retrieves the tracks of an album.
///
/// Only the first page of `/albums/{id}/tracks` is read, which holds up to 20
/// tracks with Spotify's default page size. Tracks without an id (local files
/// or unavailable tracks) are skipped because they cannot be played.
///
/// # Returns
///
/// - `Ok(Vec<Track>)` - Name and id of each playable track, in album order
/// - `Err(VibeError::Http)` - Network error, non-2xx status or malformed body
pub async fn album_tracks(client: &SpotifyClient, album_id: &str) -> Res<Vec<Track>> {
    let response = client
        .get(&format!("/albums/{id}/tracks", id = album_id))
        .send()
        .await?
        .error_for_status()?;

    let json = response.json::<Page<TrackObject>>().await?;

    Ok(json
        .items
        .into_iter()
        .filter_map(|track| track.id.map(|id| Track::new(track.name, id)))
        .collect())
}

use crate::{
    error::Res,
    types::{ArtistRecord, ArtistSearchResponse},
};

use super::SpotifyClient;

/// Looks up the single best catalog match for an artist name.
///
/// Uses the search endpoint restricted to artists with a result limit of one,
/// so only the top hit is considered. The query is sent as-is; Spotify's
/// search is already forgiving about case and spacing.
///
/// # Arguments
///
/// * `client` - Authenticated Spotify client
/// * `name` - Free-text artist name as typed by the user
///
/// # Returns
///
/// - `Ok(Some(ArtistRecord))` - Id, display name and genre tags of the top hit
/// - `Ok(None)` - The search returned no artists
/// - `Err(VibeError::Http)` - Network error, non-2xx status or malformed body
pub async fn search_artist(client: &SpotifyClient, name: &str) -> Res<Option<ArtistRecord>> {
    let response = client
        .get("/search")
        .query(&[("q", name), ("type", "artist"), ("limit", "1")])
        .send()
        .await?
        .error_for_status()?;

    let json = response.json::<ArtistSearchResponse>().await?;

    Ok(json.artists.items.into_iter().next().map(ArtistRecord::from))
}

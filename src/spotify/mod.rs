//! # Spotify Integration Module
//!
//! This module is the only place vibebox talks to the Spotify Web API. It
//! exchanges the application credentials for a bearer token and implements the
//! three read-only catalog calls the recommendation pipeline needs.
//!
//! ## Architecture
//!
//! ```text
//! Pipeline (resolve, expand, select)
//!          ↓
//! Catalog trait
//!          ↓
//! SpotifyClient
//!     ├── Credential exchange (client credentials grant)
//!     ├── Artist search
//!     └── Albums and album tracks
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! The pipeline only sees the [`Catalog`] trait, which keeps it independent of
//! HTTP and lets tests drive it with an in-memory catalog.
//!
//! ## Authentication
//!
//! [`SpotifyClient::connect`] performs one client-credentials exchange and keeps
//! the token for the lifetime of the client. Tokens are not cached on disk and
//! not refreshed; a run is far shorter than a token's lifetime.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - Client credentials exchange
//! - `GET /search?type=artist&limit=1` - Artist lookup by name
//! - `GET /artists/{id}/albums?limit={n}` - First albums of an artist
//! - `GET /albums/{id}/tracks` - Tracks of an album (first page only)
//!
//! ## Error Types
//!
//! - [`VibeError::Auth`](crate::VibeError::Auth) - The credential exchange failed
//! - [`VibeError::Http`](crate::VibeError::Http) - A catalog call failed in
//!   transport, returned a non-2xx status or an unexpected body
//!
//! Catalog calls are attempted once. Retrying is left to the user.

use std::future::Future;

use reqwest::{Client, RequestBuilder};

use crate::{
    config::Config,
    error::Res,
    types::{ArtistRecord, Track},
};

pub mod albums;
pub mod artists;
pub mod auth;

/// Read-only view of a music catalog.
pub trait Catalog {
    /// Best match for `name`, or `None` when the catalog knows no such artist.
    fn search_artist(&self, name: &str) -> impl Future<Output = Res<Option<ArtistRecord>>> + Send;

    /// Up to `limit` album ids of the artist, in catalog order.
    fn artist_albums(&self, artist_id: &str, limit: u32) -> impl Future<Output = Res<Vec<String>>> + Send;

    /// All tracks of the album, in catalog order.
    fn album_tracks(&self, album_id: &str) -> impl Future<Output = Res<Vec<Track>>> + Send;
}

/// Spotify Web API client holding one bearer token.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    access_token: String,
}

impl SpotifyClient {
    /// Exchanges the configured credentials for a token and returns a ready
    /// client.
    ///
    /// # Errors
    ///
    /// Returns [`VibeError::Auth`](crate::VibeError::Auth) if the token
    /// endpoint cannot be reached, answers with a non-2xx status, or returns no
    /// access token.
    ///
    /// # Example
    ///
    /// ```
    /// let config = Config::from_env()?;
    /// let client = SpotifyClient::connect(&config).await?;
    /// let drake = client.search_artist("Drake").await?;
    /// ```
    pub async fn connect(config: &Config) -> Res<Self> {
        let http = Client::new();
        let token = auth::request_token(
            &http,
            &config.token_url,
            &config.client_id,
            &config.client_secret,
        )
        .await?;

        Ok(Self::with_token(http, &config.api_url, token.access_token))
    }

    pub fn with_token(http: Client, api_url: &str, access_token: String) -> Self {
        SpotifyClient {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
            access_token,
        }
    }

    fn get(&self, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.api_url, path);
        tracing::debug!(%url, "catalog request");
        self.http.get(url).bearer_auth(&self.access_token)
    }
}

impl Catalog for SpotifyClient {
    async fn search_artist(&self, name: &str) -> Res<Option<ArtistRecord>> {
        artists::search_artist(self, name).await
    }

    async fn artist_albums(&self, artist_id: &str, limit: u32) -> Res<Vec<String>> {
        albums::artist_albums(self, artist_id, limit).await
    }

    async fn album_tracks(&self, album_id: &str) -> Res<Vec<Track>> {
        albums::album_tracks(self, album_id).await
    }
}

#![allow(dead_code)]

use std::{
    collections::{HashMap, HashSet},
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use axum::{
    Form, Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use vibebox::{
    Res, VibeError,
    config::Config,
    spotify::{Catalog, auth::basic_auth_header},
    types::{ArtistRecord, Track},
};

pub const CLIENT_ID: &str = "test-client";
pub const CLIENT_SECRET: &str = "test-secret";
pub const ACCESS_TOKEN: &str = "test-token";

/// In-memory catalog shared by the HTTP mock and the fake `Catalog`.
#[derive(Debug, Default)]
pub struct MockCatalog {
    /// lowercase query -> artist
    pub artists: HashMap<String, ArtistRecord>,
    /// artist id -> album ids
    pub albums: HashMap<String, Vec<String>>,
    /// album id -> tracks
    pub tracks: HashMap<String, Vec<Track>>,
    /// artist ids whose album listing answers 500
    pub failing_artists: HashSet<String>,
    /// album ids whose track listing answers 500
    pub failing_albums: HashSet<String>,
    /// every request path seen, in order
    pub requests: Mutex<Vec<String>>,
}

impl MockCatalog {
    pub fn with_artist(mut self, query: &str, id: &str, genres: &[&str]) -> Self {
        self.artists.insert(
            query.to_lowercase(),
            ArtistRecord {
                name: query.to_string(),
                catalog_id: id.to_string(),
                genres: genres.iter().map(|g| g.to_string()).collect(),
            },
        );
        self
    }

    pub fn with_album(mut self, artist_id: &str, album_id: &str, tracks: &[(&str, &str)]) -> Self {
        self.albums
            .entry(artist_id.to_string())
            .or_default()
            .push(album_id.to_string());
        self.tracks.insert(
            album_id.to_string(),
            tracks.iter().map(|(name, id)| Track::new(*name, *id)).collect(),
        );
        self
    }

    pub fn failing_albums_for(mut self, artist_id: &str) -> Self {
        self.failing_artists.insert(artist_id.to_string());
        self
    }

    pub fn failing_tracks_for(mut self, album_id: &str) -> Self {
        self.failing_albums.insert(album_id.to_string());
        self
    }

    fn record(&self, path: String) {
        self.requests.lock().unwrap().push(path);
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

fn catalog_error(status: StatusCode) -> VibeError {
    VibeError::Server(format!("catalog answered {}", status))
}

/// Direct `Catalog` implementation, no HTTP involved.
impl Catalog for MockCatalog {
    async fn search_artist(&self, name: &str) -> Res<Option<ArtistRecord>> {
        self.record(format!("search:{}", name));
        Ok(self.artists.get(&name.to_lowercase()).cloned())
    }

    async fn artist_albums(&self, artist_id: &str, limit: u32) -> Res<Vec<String>> {
        self.record(format!("albums:{}", artist_id));
        if self.failing_artists.contains(artist_id) {
            return Err(catalog_error(StatusCode::INTERNAL_SERVER_ERROR));
        }
        Ok(self
            .albums
            .get(artist_id)
            .map(|ids| ids.iter().take(limit as usize).cloned().collect())
            .unwrap_or_default())
    }

    async fn album_tracks(&self, album_id: &str) -> Res<Vec<Track>> {
        self.record(format!("tracks:{}", album_id));
        if self.failing_albums.contains(album_id) {
            return Err(catalog_error(StatusCode::INTERNAL_SERVER_ERROR));
        }
        Ok(self.tracks.get(album_id).cloned().unwrap_or_default())
    }
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {}", ACCESS_TOKEN))
        .unwrap_or(false)
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": { "status": 401, "message": "Invalid access token" } })),
    )
        .into_response()
}

fn server_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": { "status": 500, "message": "Server error" } })),
    )
        .into_response()
}

async fn token(
    State(catalog): State<Arc<MockCatalog>>,
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    catalog.record("token".to_string());
    let expected = basic_auth_header(CLIENT_ID, CLIENT_SECRET);
    let basic_ok = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|v| v == expected)
        .unwrap_or(false);
    let grant_ok = form.get("grant_type").map(String::as_str) == Some("client_credentials");

    if !basic_ok || !grant_ok {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "invalid_client" })),
        )
            .into_response();
    }

    Json(json!({
        "access_token": ACCESS_TOKEN,
        "token_type": "Bearer",
        "expires_in": 3600
    }))
    .into_response()
}

async fn search(
    State(catalog): State<Arc<MockCatalog>>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    let q = params.get("q").cloned().unwrap_or_default();
    catalog.record(format!("search:{}", q));

    if params.get("type").map(String::as_str) != Some("artist")
        || params.get("limit").map(String::as_str) != Some("1")
    {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": "bad query" }))).into_response();
    }

    let items: Vec<Value> = catalog
        .artists
        .get(&q.to_lowercase())
        .map(|a| {
            vec![json!({
                "id": a.catalog_id,
                "name": a.name,
                "genres": a.genres,
                "type": "artist"
            })]
        })
        .unwrap_or_default();

    Json(json!({ "artists": { "items": items, "limit": 1, "offset": 0 } })).into_response()
}

async fn albums(
    State(catalog): State<Arc<MockCatalog>>,
    headers: HeaderMap,
    Path(artist_id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    let limit: usize = params
        .get("limit")
        .and_then(|l| l.parse().ok())
        .unwrap_or(20);
    catalog.record(format!("albums:{}:{}", artist_id, limit));

    if catalog.failing_artists.contains(&artist_id) {
        return server_error();
    }

    let items: Vec<Value> = catalog
        .albums
        .get(&artist_id)
        .map(|ids| {
            ids.iter()
                .take(limit)
                .map(|id| json!({ "id": id, "name": format!("Album {}", id) }))
                .collect()
        })
        .unwrap_or_default();

    Json(json!({ "items": items })).into_response()
}

async fn tracks(
    State(catalog): State<Arc<MockCatalog>>,
    headers: HeaderMap,
    Path(album_id): Path<String>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    catalog.record(format!("tracks:{}", album_id));

    if catalog.failing_albums.contains(&album_id) {
        return server_error();
    }

    let items: Vec<Value> = catalog
        .tracks
        .get(&album_id)
        .map(|tracks| {
            tracks
                .iter()
                .map(|t| json!({ "id": t.track_id, "name": t.name }))
                .collect()
        })
        .unwrap_or_default();

    Json(json!({ "items": items })).into_response()
}

pub fn router(catalog: Arc<MockCatalog>) -> Router {
    Router::new()
        .route("/api/token", post(token))
        .route("/v1/search", get(search))
        .route("/v1/artists/{id}/albums", get(albums))
        .route("/v1/albums/{id}/tracks", get(tracks))
        .with_state(catalog)
}

/// Serves `app` on an ephemeral local port.
pub async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

pub fn config_for(addr: SocketAddr) -> Config {
    config_with_secret(addr, CLIENT_SECRET)
}

pub fn config_with_secret(addr: SocketAddr, secret: &str) -> Config {
    let api_url = format!("http://{}/v1", addr);
    let token_url = format!("http://{}/api/token", addr);
    let vars: HashMap<&str, String> = HashMap::from([
        ("SPOTIFY_CLIENT_ID", CLIENT_ID.to_string()),
        ("SPOTIFY_CLIENT_SECRET", secret.to_string()),
        ("SPOTIFY_API_URL", api_url),
        ("SPOTIFY_API_TOKEN_URL", token_url),
    ]);
    Config::from_lookup(|key| vars.get(key).cloned()).unwrap()
}

/// Drake / Adele / Beethoven catalog used across tests.
pub fn sample_catalog() -> MockCatalog {
    MockCatalog::default()
        .with_artist("Drake", "drake-id", &["canadian hip hop", "hip hop", "rap"])
        .with_artist("Adele", "adele-id", &["british soul", "pop", "soul"])
        .with_artist("Beethoven", "beethoven-id", &["classical", "early romantic era"])
        .with_album("drake-id", "views", &[("One Dance", "t-one-dance"), ("Hotline Bling", "t-hotline")])
        .with_album("drake-id", "scorpion", &[("God's Plan", "t-gods-plan")])
        .with_album("adele-id", "25", &[("Hello", "t-hello"), ("When We Were Young", "t-young")])
        .with_album("adele-id", "30", &[("Easy On Me", "t-easy")])
        .with_album("beethoven-id", "symphonies", &[("Symphony No. 5", "t-fifth")])
}

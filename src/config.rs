//! Configuration management for vibebox.
//!
//! This module loads `.env` files and turns environment variables into a typed
//! [`Config`]. Values are resolved in this order:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the current working directory
//! 4. Application defaults (where applicable)
//!
//! The Spotify client id and secret have no default. A missing or empty value
//! is a [`VibeError::Configuration`] raised before any network call is made.

use std::{env, io::ErrorKind, net::SocketAddr, path::PathBuf};

use crate::error::{Res, VibeError};

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8686";
pub const DEFAULT_ALBUM_LIMIT: u32 = 5;

/// Loads environment variables from `.env` files.
///
/// Looks in the platform-specific local data directory first:
/// - Linux: `~/.local/share/vibebox/.env`
/// - macOS: `~/Library/Application Support/vibebox/.env`
/// - Windows: `%LOCALAPPDATA%/vibebox/.env`
///
/// and then in the current working directory. Variables that are already set
/// are never overwritten. A missing file is fine; a malformed one is not.
///
/// # Errors
///
/// Returns [`VibeError::Configuration`] if the data directory cannot be created
/// or a `.env` file exists but cannot be parsed.
///
/// # Example
///
/// ```
/// use vibebox::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Res<()> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| VibeError::Configuration(e.to_string()))?;
    }

    tolerate_missing(dotenv::from_path(&path).map(|_| ()))?;
    tolerate_missing(dotenv::dotenv().map(|_| ()))
}

fn tolerate_missing(result: Result<(), dotenv::Error>) -> Res<()> {
    match result {
        Ok(()) => Ok(()),
        Err(dotenv::Error::Io(e)) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(VibeError::Configuration(format!(
            "cannot read .env file: {}",
            e
        ))),
    }
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("vibebox/.env");
    path
}

/// Runtime settings for one invocation.
#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    /// Base URL of the Web API, without trailing slash
    pub api_url: String,
    pub token_url: String,
    /// Where `vibebox play --serve` binds the player page
    pub server_addr: SocketAddr,
    /// Albums fetched per artist
    pub album_limit: u32,
}

impl Config {
    /// Builds the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Fails with [`VibeError::Configuration`] when `SPOTIFY_CLIENT_ID` or
    /// `SPOTIFY_CLIENT_SECRET` is missing or blank, or when an optional value
    /// cannot be parsed.
    pub fn from_env() -> Res<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// [`Config::from_env`] is this function over `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> Res<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let required = |key: &str| {
            value(key).ok_or_else(|| VibeError::Configuration(format!("{} must be set", key)))
        };

        let client_id = required("SPOTIFY_CLIENT_ID")?;
        let client_secret = required("SPOTIFY_CLIENT_SECRET")?;

        let api_url = value("SPOTIFY_API_URL")
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let token_url = value("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string());

        let server_addr = value("SERVER_ADDRESS")
            .unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| VibeError::Configuration(format!("SERVER_ADDRESS is invalid: {}", e)))?;

        let album_limit = match value("VIBEBOX_ALBUM_LIMIT") {
            Some(raw) => parse_album_limit(&raw)?,
            None => DEFAULT_ALBUM_LIMIT,
        };

        Ok(Config {
            client_id,
            client_secret,
            api_url,
            token_url,
            server_addr,
            album_limit,
        })
    }
}

/// Spotify accepts between 1 and 50 albums per page.
pub fn parse_album_limit(raw: &str) -> Res<u32> {
    match raw.trim().parse::<u32>() {
        Ok(n) if (1..=50).contains(&n) => Ok(n),
        _ => Err(VibeError::Configuration(format!(
            "album limit must be a number between 1 and 50, got '{}'",
            raw
        ))),
    }
}

//! vibebox Library
//!
//! Picks a single Spotify track that fits the listener's mood. The user names a
//! mood and a handful of favourite artists; the library resolves the artists in
//! the Spotify catalog, keeps the ones whose genres fit the mood, walks their
//! albums and tracks, and chooses one track at random.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the local player page
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error taxonomy shared by every layer
//! - `mood` - Mood labels, the mood to genre table and the genre filter
//! - `pipeline` - Artist resolution, catalog expansion and track selection
//! - `player` - Embed URLs and HTML rendering for the chosen track
//! - `server` - Local HTTP server for the player page
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Input parsing helpers
//!
//! # Example
//!
//! ```
//! use vibebox::{config, mood, pipeline, spotify::SpotifyClient};
//!
//! #[tokio::main]
//! async fn main() -> vibebox::Res<()> {
//!     config::load_env().await?;
//!     let config = config::Config::from_env()?;
//!     let client = SpotifyClient::connect(&config).await?;
//!     let names = vibebox::utils::split_artist_names("Drake, Adele");
//!     let resolutions = pipeline::resolve_artists(&client, &names).await;
//!     // filter, expand and select...
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod mood;
pub mod pipeline;
pub mod player;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::{Res, VibeError};

/// Prints an informational message with a blue bullet point.
///
/// Used for general progress and status updates such as "Searching...".
///
/// # Example
///
/// ```
/// info!("Searching...");
/// info!("Resolved {} artists", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Now playing {}", track);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for fatal errors: configuration problems, a failed credential
/// exchange, or an empty selection pool at the end of a run. Code after this
/// macro does not execute.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// For recoverable issues the user should notice, like an artist that could
/// not be found.
///
/// # Example
///
/// ```
/// warning!("No artist named '{}' exists", name);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

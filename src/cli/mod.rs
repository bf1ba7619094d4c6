//! # CLI Module
//!
//! User-facing commands of vibebox. Each command wires configuration, the
//! Spotify client and the recommendation pipeline together and takes care of
//! progress feedback and output formatting.
//!
//! ## Commands
//!
//! - [`play`] - Resolve the given artists, keep the ones matching the mood,
//!   gather their tracks and present one random pick
//! - [`moods`] - Show the built-in mood to genre table
//!
//! ## Data Flow
//!
//! ```text
//! play --mood Sad --artists "Drake, Adele, Bon Iver"
//!     ↓ Config::from_env            (fails fast without credentials)
//!     ↓ SpotifyClient::connect      (fails fast without a token)
//!     ↓ "Searching..."              resolve_artists + filter_artists
//!     ↓ "Generating tracks..."      expand_catalog
//!     ↓ "Playing soon..."           select + present
//! ```
//!
//! ## Error Handling
//!
//! Missing configuration, a failed credential exchange and an empty selection
//! pool end the program with a red message and exit code 1. Artists, albums
//! or tracks that cannot be fetched only produce yellow warnings, or rows in
//! the `--report` table.

mod moods;
mod play;

pub use moods::moods;
pub use play::Presentation;
pub use play::play;

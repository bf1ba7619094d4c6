use thiserror::Error;

/// Errors raised anywhere in vibebox.
///
/// Only [`VibeError::Configuration`] and [`VibeError::Auth`] abort a run. HTTP
/// failures of single lookups are turned into per-item faults by the pipeline,
/// and [`VibeError::EmptySelectionPool`] is reported to the user as a plain
/// "nothing matched" message.
#[derive(Error, Debug)]
pub enum VibeError {
    /// Missing credentials or unusable settings
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Credential exchange failed or returned no token
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// A single catalog call failed (transport, status or body)
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// No artist had a single track left after filtering and expansion
    #[error("No results matched your mood. Try different artists or another mood.")]
    EmptySelectionPool,

    /// Local player server failure
    #[error("Player server error: {0}")]
    Server(String),
}

/// A convenient Result type alias used throughout the crate.
pub type Res<T> = std::result::Result<T, VibeError>;

//! # API Module
//!
//! HTTP handlers for the local player page started by `vibebox play --serve`.
//!
//! ## Endpoints
//!
//! - [`player`] - `GET /` returns the HTML page embedding the chosen track
//! - [`health`] - `GET /health` returns status, version and the track id
//!
//! Both handlers read the rendered [`PlayerPage`] from an axum `Extension`
//! layer; the page is built once before the server starts and never changes.
//!
//! ```rust,ignore
//! use axum::{Extension, Router, routing::get};
//! use vibebox::api::{health, player};
//!
//! let app = Router::new()
//!     .route("/", get(player))
//!     .route("/health", get(health))
//!     .layer(Extension(page));
//! ```

mod health;
mod player;

pub use health::health;
pub use player::{PlayerPage, player};

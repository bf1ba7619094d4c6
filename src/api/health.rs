use std::sync::Arc;

use axum::{Extension, response::Json};
use serde_json::{Value, json};

use super::PlayerPage;

pub async fn health(Extension(page): Extension<Arc<PlayerPage>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "track_id": page.selection.track.track_id,
    }))
}

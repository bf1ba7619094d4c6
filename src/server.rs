use std::{net::SocketAddr, sync::Arc};

use axum::{Extension, Router, routing::get};
use tokio::net::TcpListener;

use crate::{
    api::{self, PlayerPage},
    error::{Res, VibeError},
};

pub fn player_router(page: PlayerPage) -> Router {
    Router::new()
        .route("/", get(api::player))
        .route("/health", get(api::health))
        .layer(Extension(Arc::new(page)))
}

pub async fn bind(addr: SocketAddr) -> Res<TcpListener> {
    TcpListener::bind(&addr)
        .await
        .map_err(|e| VibeError::Server(format!("cannot bind {}: {}", addr, e)))
}

/// Serves the player page on `listener` until Ctrl-C is pressed.
pub async fn serve_player(listener: TcpListener, page: PlayerPage) -> Res<()> {
    axum::serve(listener, player_router(page))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .map_err(|e| VibeError::Server(e.to_string()))
}

use std::sync::Arc;

use axum::{Extension, response::Html};

use crate::types::SelectionResult;

/// Rendered page for the current selection.
#[derive(Debug, Clone)]
pub struct PlayerPage {
    pub selection: SelectionResult,
    pub html: String,
}

pub async fn player(Extension(page): Extension<Arc<PlayerPage>>) -> Html<String> {
    Html(page.html.clone())
}

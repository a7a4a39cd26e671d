use crate::db::DbActorHandle;
use crate::error::status_text;
use crate::server::access_log::access_log;
use crate::server::routes::snippets;

use axum::{Router, http::StatusCode, middleware, response::IntoResponse};
use std::{path::PathBuf, sync::Arc};
use tower_http::services::ServeDir;

/// Dependencies shared by every handler.
#[derive(Clone)]
pub struct SnippetboxState {
    pub snippets: DbActorHandle,
    pub static_dir: Arc<PathBuf>,
}

impl SnippetboxState {
    pub fn new(snippets: DbActorHandle, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            snippets,
            static_dir: Arc::new(static_dir.into()),
        }
    }
}

async fn not_found_handler() -> impl IntoResponse {
    status_text(StatusCode::NOT_FOUND)
}

pub fn snippetbox_router(state: SnippetboxState) -> Router {
    let static_files = ServeDir::new(state.static_dir.as_path());

    Router::new()
        .merge(snippets::router())
        .nest_service("/static", static_files)
        .fallback(not_found_handler)
        .with_state(state)
        .layer(middleware::from_fn(access_log))
}

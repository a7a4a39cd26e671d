use crate::server::router::SnippetboxState;
use axum::{Router, routing::get};

pub mod extract;
pub mod form;
pub mod handlers;

pub fn router() -> Router<SnippetboxState> {
    Router::new()
        .route("/", get(handlers::home))
        .route("/snippet/view", get(handlers::snippet_view))
        .route(
            "/snippet/create",
            get(handlers::snippet_create_form).post(handlers::snippet_create),
        )
}

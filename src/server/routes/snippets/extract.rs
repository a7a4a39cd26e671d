use crate::error::status_text;
use axum::{
    extract::{FromRequestParts, Query},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct ViewParams {
    id: Option<String>,
}

/// The `id` query parameter of `/snippet/view`, guaranteed to be a positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnippetId(pub i64);

impl SnippetId {
    pub fn parse(raw: &str) -> Option<Self> {
        raw.parse::<i64>().ok().filter(|id| *id >= 1).map(SnippetId)
    }
}

/// Rejection for a missing or malformed id; rendered as a plain 404.
#[derive(Debug)]
pub struct InvalidSnippetId;

impl IntoResponse for InvalidSnippetId {
    fn into_response(self) -> Response {
        status_text(StatusCode::NOT_FOUND).into_response()
    }
}

impl<S> FromRequestParts<S> for SnippetId
where
    S: Send + Sync,
{
    type Rejection = InvalidSnippetId;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Ok(Query(params)) = Query::<ViewParams>::try_from_uri(&parts.uri) else {
            return Err(InvalidSnippetId);
        };
        let raw = params.id.unwrap_or_default();
        SnippetId::parse(&raw).ok_or_else(|| {
            debug!(id = %raw, "[Snippets] rejected snippet id");
            InvalidSnippetId
        })
    }
}

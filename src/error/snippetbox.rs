use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum SnippetboxError {
    /// No live snippet matches the requested id (never existed or expired).
    #[error("no matching record found")]
    NoRecord,

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Ractor error: {0}")]
    RactorError(String),

    #[error("expiry of {0} days is out of range")]
    ExpiryOutOfRange(u32),

    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl SnippetboxError {
    pub fn status(&self) -> StatusCode {
        match self {
            SnippetboxError::NoRecord => StatusCode::NOT_FOUND,
            SnippetboxError::DatabaseError(_)
            | SnippetboxError::RactorError(_)
            | SnippetboxError::ExpiryOutOfRange(_)
            | SnippetboxError::Config(_)
            | SnippetboxError::IoError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<figment::Error> for SnippetboxError {
    fn from(e: figment::Error) -> Self {
        SnippetboxError::Config(Box::new(e))
    }
}

impl IntoResponse for SnippetboxError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            // The client only ever sees the status text.
            error!(error = %self, "request failed");
        }
        status_text(status).into_response()
    }
}

/// Plain-text response carrying only the canonical reason phrase.
pub fn status_text(status: StatusCode) -> (StatusCode, &'static str) {
    (status, status.canonical_reason().unwrap_or("Unknown Status"))
}

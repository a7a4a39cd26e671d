//! SQL DDL for initializing the database schema.

/// SQLite schema includes:
/// - `snippets` table (one snippet per row, never updated or deleted)
///
/// `created` and `expires` hold RFC3339 UTC text written by the store, so
/// lexical comparison against a bound `now` orders correctly.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS snippets (
    id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    created TEXT NOT NULL, -- RFC3339
    expires TEXT NOT NULL -- RFC3339
);

CREATE INDEX IF NOT EXISTS idx_snippets_expires ON snippets(expires);
"#;

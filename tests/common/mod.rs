#![allow(dead_code)]

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::{
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

/// A SQLite file under the temp dir, removed (with its WAL sidecars) on drop.
pub struct TempDb {
    pub path: PathBuf,
    pub url: String,
}

impl TempDb {
    pub fn new(tag: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before UNIX_EPOCH")
            .as_nanos();

        let mut path = std::env::temp_dir();
        path.push(format!(
            "snippetbox-{tag}-{}-{}.sqlite",
            std::process::id(),
            nanos
        ));
        let url = format!("sqlite:{}", path.display());
        Self { path, url }
    }

    /// Opens a second pool on the same file, bypassing the store.
    pub async fn raw_pool(&self) -> SqlitePool {
        SqlitePool::connect(&self.url)
            .await
            .expect("failed to open raw pool")
    }

    /// Writes a row directly, with caller-chosen timestamps.
    pub async fn insert_raw(
        &self,
        title: &str,
        created: DateTime<Utc>,
        expires: DateTime<Utc>,
    ) -> i64 {
        let pool = self.raw_pool().await;
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO snippets (title, content, created, expires) VALUES (?, ?, ?, ?) RETURNING id",
        )
        .bind(title)
        .bind("raw content")
        .bind(created)
        .bind(expires)
        .fetch_one(&pool)
        .await
        .expect("raw insert failed");
        pool.close().await;
        id
    }
}

impl Drop for TempDb {
    fn drop(&mut self) {
        let wal_path = PathBuf::from(format!("{}-wal", self.path.to_string_lossy()));
        let shm_path = PathBuf::from(format!("{}-shm", self.path.to_string_lossy()));
        let _ = std::fs::remove_file(&wal_path);
        let _ = std::fs::remove_file(&shm_path);
        let _ = std::fs::remove_file(&self.path);
    }
}

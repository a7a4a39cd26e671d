use crate::db::models::{NewSnippet, Snippet};
use crate::db::schema::SQLITE_INIT;
use crate::error::SnippetboxError;
use chrono::{TimeDelta, Utc};
use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::{str::FromStr, time::Duration};

/// Maximum number of snippets returned by [`DbActorHandle::latest`].
pub const LATEST_LIMIT: i64 = 10;

#[derive(Debug)]
pub enum DbActorMessage {
    /// Insert a snippet and return its id.
    Insert(NewSnippet, RpcReplyPort<Result<i64, SnippetboxError>>),

    /// Get a live snippet by id.
    Get(i64, RpcReplyPort<Result<Snippet, SnippetboxError>>),

    /// List the most recent live snippets, newest first.
    Latest(RpcReplyPort<Result<Vec<Snippet>, SnippetboxError>>),
}

#[derive(Clone)]
pub struct DbActorHandle {
    actor: ActorRef<DbActorMessage>,
}

impl DbActorHandle {
    pub async fn insert(&self, snippet: NewSnippet) -> Result<i64, SnippetboxError> {
        ractor::call!(self.actor, DbActorMessage::Insert, snippet)
            .map_err(|e| SnippetboxError::RactorError(format!("DbActor Insert RPC failed: {e}")))?
    }

    pub async fn get(&self, id: i64) -> Result<Snippet, SnippetboxError> {
        ractor::call!(self.actor, DbActorMessage::Get, id)
            .map_err(|e| SnippetboxError::RactorError(format!("DbActor Get RPC failed: {e}")))?
    }

    pub async fn latest(&self) -> Result<Vec<Snippet>, SnippetboxError> {
        ractor::call!(self.actor, DbActorMessage::Latest)
            .map_err(|e| SnippetboxError::RactorError(format!("DbActor Latest RPC failed: {e}")))?
    }
}

struct DbActorState {
    pool: SqlitePool,
}

struct DbActor;

#[ractor::async_trait]
impl Actor for DbActor {
    type Msg = DbActorMessage;
    type State = DbActorState;
    type Arguments = String;

    async fn pre_start(
        &self,
        _myself: ActorRef<Self::Msg>,
        database_url: Self::Arguments,
    ) -> Result<Self::State, ActorProcessingErr> {
        let connect_opts = SqliteConnectOptions::from_str(database_url.as_str())
            .map_err(|e| ActorProcessingErr::from(format!("invalid database url: {e}")))?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(5))
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .connect_with(connect_opts)
            .await
            .map_err(|e| ActorProcessingErr::from(format!("db connect failed: {e}")))?;

        apply_schema(&pool)
            .await
            .map_err(|e| ActorProcessingErr::from(format!("db schema init failed: {e}")))?;

        Ok(DbActorState { pool })
    }

    async fn handle(
        &self,
        _myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        match message {
            DbActorMessage::Insert(snippet, reply) => {
                let res = self.insert(&state.pool, snippet).await;
                let _ = reply.send(res);
            }
            DbActorMessage::Get(id, reply) => {
                let res = self.get(&state.pool, id).await;
                let _ = reply.send(res);
            }
            DbActorMessage::Latest(reply) => {
                let res = self.latest(&state.pool).await;
                let _ = reply.send(res);
            }
        }
        Ok(())
    }

    async fn post_stop(
        &self,
        _myself: ActorRef<Self::Msg>,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        state.pool.close().await;
        Ok(())
    }
}

impl DbActor {
    async fn insert(&self, pool: &SqlitePool, snippet: NewSnippet) -> Result<i64, SnippetboxError> {
        let created = Utc::now();
        let expires = TimeDelta::try_days(i64::from(snippet.expires_in_days))
            .and_then(|ttl| created.checked_add_signed(ttl))
            .ok_or(SnippetboxError::ExpiryOutOfRange(snippet.expires_in_days))?;

        let id: i64 = sqlx::query_scalar(
            r#"
        INSERT INTO snippets (title, content, created, expires)
        VALUES (?, ?, ?, ?)
        RETURNING id
        "#,
        )
        .bind(snippet.title)
        .bind(snippet.content)
        .bind(created)
        .bind(expires)
        .fetch_one(pool)
        .await?;

        Ok(id)
    }

    async fn get(&self, pool: &SqlitePool, id: i64) -> Result<Snippet, SnippetboxError> {
        let row = sqlx::query_as::<_, Snippet>(
            r#"
        SELECT id, title, content, created, expires
        FROM snippets
        WHERE expires > ? AND id = ?
        "#,
        )
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(pool)
        .await?;

        row.ok_or(SnippetboxError::NoRecord)
    }

    async fn latest(&self, pool: &SqlitePool) -> Result<Vec<Snippet>, SnippetboxError> {
        let rows = sqlx::query_as::<_, Snippet>(
            r#"
        SELECT id, title, content, created, expires
        FROM snippets
        WHERE expires > ?
        ORDER BY id DESC
        LIMIT ?
        "#,
        )
        .bind(Utc::now())
        .bind(LATEST_LIMIT)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }
}

/// Spawn the database actor and return a cloneable handle.
///
/// Fails if the database cannot be opened or the schema cannot be applied.
pub async fn spawn(database_url: &str) -> Result<DbActorHandle, SnippetboxError> {
    let (actor, _jh) = ractor::Actor::spawn(None, DbActor, database_url.to_string())
        .await
        .map_err(|e| SnippetboxError::RactorError(format!("failed to spawn DbActor: {e}")))?;

    Ok(DbActorHandle { actor })
}

async fn apply_schema(pool: &SqlitePool) -> Result<(), SnippetboxError> {
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}

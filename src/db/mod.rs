//! Database module: the snippet store.
//!
//! Layout:
//! - `actor.rs`: the actor owning the SQLite pool, plus its cloneable handle
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database

pub mod actor;
pub mod models;
pub mod schema;

pub use models::{NewSnippet, Snippet};
pub use schema::SQLITE_INIT;

pub use actor::{DbActorHandle, LATEST_LIMIT, spawn};

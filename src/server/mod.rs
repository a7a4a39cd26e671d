pub mod access_log;
pub mod router;
pub mod routes;
pub mod views;

pub use router::{SnippetboxState, snippetbox_router};

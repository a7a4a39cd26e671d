mod snippetbox;

pub use snippetbox::{SnippetboxError, status_text};

//! Command implementations for the notes CLI

pub mod migrate;
pub mod serve;

pub use migrate::run_migrate;
pub use serve::run_serve;

use anyhow::{Context, Result};
use notes_server::NotesConfig;

/// Database URL from the flag/env value, falling back to the config file.
pub(crate) fn resolve_database_url(arg: Option<String>, config: &NotesConfig) -> Result<String> {
    arg.or_else(|| config.database.url.clone()).context(
        "DATABASE_URL not set. Set via --database-url, DATABASE_URL env, .env, \
         or [database].url in ~/.notes/config.toml",
    )
}

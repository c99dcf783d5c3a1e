//! HTTP server command

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use notes_server::db::{create_pool_with_options, migrations};
use notes_server::{run_server, AppState, MemoryNoteStore, NoteRepo, NoteStore, NotesConfig};

use super::resolve_database_url;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:3030)
    #[arg(long, short = 'b', env = "NOTES_BIND")]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (overrides config file)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long)]
    pub max_connections: Option<u32>,

    /// Skip creating the notes table on startup
    #[arg(long)]
    pub skip_migrations: bool,

    /// Keep notes in process memory instead of PostgreSQL (lost on exit)
    #[arg(long)]
    pub in_memory: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, config: NotesConfig) -> Result<()> {
    let mut server_config = config.server_config();
    if let Some(bind) = args.bind {
        server_config.bind_addr = bind;
    }
    server_config.cors_permissive |= args.cors_permissive;

    let store: Arc<dyn NoteStore> = if args.in_memory {
        tracing::warn!("Using in-memory store - notes are lost on shutdown");
        Arc::new(MemoryNoteStore::new())
    } else {
        let database_url = resolve_database_url(args.database_url, &config)?;
        let max_connections = args
            .max_connections
            .unwrap_or(config.database.max_connections);

        let pool = create_pool_with_options(&database_url, max_connections)
            .await
            .context("Failed to create database pool")?;

        if !args.skip_migrations {
            migrations::run(&pool)
                .await
                .context("Failed to run migrations")?;
        }

        Arc::new(NoteRepo::new(pool))
    };

    tracing::info!("Starting notes server on {}", server_config.bind_addr);

    run_server(AppState::from_shared(store), server_config)
        .await
        .context("Server error")?;

    Ok(())
}

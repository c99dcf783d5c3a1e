//! Schema setup command

use anyhow::{Context, Result};
use clap::Parser;
use notes_server::db::{create_pool, migrations};
use notes_server::NotesConfig;

use super::resolve_database_url;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (overrides config file)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,
}

/// Create the notes table if it is missing
pub async fn run_migrate(args: MigrateArgs, config: NotesConfig) -> Result<()> {
    let database_url = resolve_database_url(args.database_url, &config)?;

    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    pool.close().await;
    Ok(())
}

//! Schema setup for the notes table

use sqlx::PgPool;

use super::DbError;

/// Create the notes table if it does not exist yet.
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Running notes migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS notes (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            lastname TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Notes migrations complete");
    Ok(())
}

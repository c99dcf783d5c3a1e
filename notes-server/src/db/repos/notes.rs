//! Note repository
//!
//! - find_many: full table scan in primary-key order, no limit
//! - create: single INSERT ... RETURNING, NULLs left to the NOT NULL constraint

use async_trait::async_trait;
use sqlx::PgPool;

use crate::db::{DbError, NoteStore};
use crate::models::{NewRecord, Record};

/// PostgreSQL-backed note store
#[derive(Clone)]
pub struct NoteRepo {
    pool: PgPool,
}

impl NoteRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl NoteStore for NoteRepo {
    async fn find_many(&self) -> Result<Vec<Record>, DbError> {
        let notes = sqlx::query_as::<_, Record>(
            r#"
            SELECT id, name, lastname
            FROM notes
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(notes)
    }

    async fn create(&self, data: NewRecord) -> Result<Record, DbError> {
        let note = sqlx::query_as::<_, Record>(
            r#"
            INSERT INTO notes (name, lastname)
            VALUES ($1, $2)
            RETURNING id, name, lastname
            "#,
        )
        .bind(data.name)
        .bind(data.lastname)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id = note.id, "note created");
        Ok(note)
    }

    async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations};

    // Integration tests - run with DATABASE_URL set
    // cargo test -p notes-server -- --ignored

    async fn repo() -> NoteRepo {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");
        NoteRepo::new(pool)
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn created_note_is_listed() {
        let repo = repo().await;

        let created = repo
            .create(NewRecord::new("Ada", "Lovelace"))
            .await
            .expect("create failed");
        assert_eq!(created.name, "Ada");
        assert_eq!(created.lastname, "Lovelace");

        let notes = repo.find_many().await.expect("list failed");
        assert!(notes.contains(&created));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn missing_lastname_violates_not_null() {
        let repo = repo().await;

        let data = NewRecord {
            name: Some("Ada".into()),
            lastname: None,
        };
        let err = repo.create(data).await.unwrap_err();
        assert!(matches!(err, DbError::Sqlx(sqlx::Error::Database(_))));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn ping_reaches_database() {
        repo().await.ping().await.expect("ping failed");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn listing_is_ordered_by_id() {
        let repo = repo().await;
        repo.create(NewRecord::new("Grace", "Hopper")).await.unwrap();
        repo.create(NewRecord::new("Alan", "Turing")).await.unwrap();

        let notes = repo.find_many().await.unwrap();
        assert!(notes.windows(2).all(|w| w[0].id < w[1].id));
    }
}

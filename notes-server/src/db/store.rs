//! Persistence contract used by the HTTP handlers

use async_trait::async_trait;

use crate::models::{NewRecord, Record};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("null value in column \"{column}\" violates not-null constraint")]
    NotNull { column: &'static str },

    #[error("nextval: reached maximum value of sequence \"{sequence}\"")]
    SequenceExhausted { sequence: &'static str },
}

/// Record store behind `/notes`.
///
/// Implementations own identifier assignment and ordering; callers
/// forward request data without inspecting it.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Every record, in primary-key order.
    async fn find_many(&self) -> Result<Vec<Record>, DbError>;

    /// Insert one record and return it with its assigned id.
    async fn create(&self, data: NewRecord) -> Result<Record, DbError>;

    /// Check that the store can serve requests.
    async fn ping(&self) -> Result<(), DbError>;
}

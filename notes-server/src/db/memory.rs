//! In-process note store
//!
//! Same observable behavior as [`NoteRepo`](super::NoteRepo): ids count
//! up from 1 (a rejected insert still uses one up), listing is in id
//! order, and NULL fields are rejected the way the table's NOT NULL
//! constraints reject them.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::db::{DbError, NoteStore};
use crate::models::{NewRecord, Record};

#[derive(Default)]
struct Inner {
    last_id: i32,
    notes: Vec<Record>,
}

/// Note store held in memory, for tests and `serve --in-memory`.
#[derive(Default)]
pub struct MemoryNoteStore {
    inner: RwLock<Inner>,
}

impl MemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored notes
    pub async fn len(&self) -> usize {
        self.inner.read().await.notes.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl NoteStore for MemoryNoteStore {
    async fn find_many(&self) -> Result<Vec<Record>, DbError> {
        Ok(self.inner.read().await.notes.clone())
    }

    async fn create(&self, data: NewRecord) -> Result<Record, DbError> {
        let mut inner = self.inner.write().await;
        // SERIAL draws the next value before constraints are checked
        inner.last_id = inner
            .last_id
            .checked_add(1)
            .ok_or(DbError::SequenceExhausted {
                sequence: "notes_id_seq",
            })?;

        let name = data.name.ok_or(DbError::NotNull { column: "name" })?;
        let lastname = data.lastname.ok_or(DbError::NotNull { column: "lastname" })?;

        let note = Record {
            id: inner.last_id,
            name,
            lastname,
        };
        inner.notes.push(note.clone());

        Ok(note)
    }

    async fn ping(&self) -> Result<(), DbError> {
        Ok(())
    }
}

//! Database layer - connection pool, schema and record stores
//!
//! Handlers talk to a [`NoteStore`]; the PostgreSQL implementation is
//! [`NoteRepo`], and [`MemoryNoteStore`] mirrors its behavior in-process.

pub mod memory;
pub mod migrations;
pub mod pool;
pub mod repos;
pub mod store;

pub use memory::MemoryNoteStore;
pub use pool::{create_pool, create_pool_with_options};
pub use repos::NoteRepo;
pub use store::{DbError, NoteStore};

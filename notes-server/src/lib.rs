//! notes-server: HTTP server for the notes resource
//!
//! Exposes `GET /notes` and `POST /notes` over a PostgreSQL-backed
//! record store. Handlers pass requests straight to the store and
//! serialize whatever comes back.

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod state;

pub use config::{ConfigError, NotesConfig};
pub use db::{DbError, MemoryNoteStore, NoteRepo, NoteStore};
pub use http::{build_router, run_server, ApiError, ServerConfig};
pub use models::{CreatedRecord, NewRecord, Record};
pub use state::AppState;

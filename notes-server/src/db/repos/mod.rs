//! Repository implementations for database access

pub mod notes;

pub use notes::NoteRepo;

//! Domain model for persisted notes.
//!
//! # Responsibility
//! - Define the note record and its write-side draft.
//! - Own model-level validation and display helpers.
//!
//! # Invariants
//! - Every stored note is identified by a store-assigned `NoteId`.
//! - Deletion is a hard delete; there are no tombstones.

pub mod note;

//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define note data access contracts.
//! - Isolate SQLite query details from the store service.
//!
//! # Invariants
//! - Repository writes must enforce `NoteDraft::validate()` before persistence.
//! - Not-found is a normal outcome (`None` / `false`), never an error.

pub mod note_repo;

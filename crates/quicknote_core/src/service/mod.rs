//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into store-level APIs.
//! - Keep presentation layers decoupled from storage details.

pub mod note_store;

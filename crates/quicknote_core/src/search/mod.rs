//! Note search entry points.
//!
//! # Responsibility
//! - Normalize user query text into a match predicate.
//! - Keep search semantics (case folding, blank handling) inside core.

pub mod substring;

//! Domain model for the project showcase.
//!
//! # Responsibility
//! - Define the canonical `Project` record shared by every backend.
//! - Keep the wire shape identical for remote and mock storage.
//!
//! # Invariants
//! - Every project is identified by a store-assigned `ProjectId`.
//! - `id` never changes after creation.

pub mod project;

//! Core use-case services.
//!
//! # Responsibility
//! - Wrap backend calls into use-case level APIs.
//! - Keep UI layers decoupled from the chosen backend.

pub mod project_service;

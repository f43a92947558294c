//! Project domain model.
//!
//! # Responsibility
//! - Define the persisted/wire record and its create-time input shape.
//! - Provide store-side id generation.
//!
//! # Invariants
//! - Serialized field names are exactly `id`, `name`, `description`.
//! - Ids produced by `generate_project_id` are non-empty UUID v4 strings.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier assigned by the store.
///
/// Kept as a string because remote backends may issue non-UUID ids.
pub type ProjectId = String;

/// Canonical project record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
}

/// Project input without an id, used as the create payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProject {
    pub name: String,
    pub description: String,
}

impl NewProject {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Attaches a store-assigned id, producing the persisted record.
    pub fn into_project(self, id: ProjectId) -> Project {
        Project {
            id,
            name: self.name,
            description: self.description,
        }
    }
}

impl Project {
    pub fn new(
        id: impl Into<ProjectId>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Generates a fresh random project id.
pub fn generate_project_id() -> ProjectId {
    Uuid::new_v4().to_string()
}

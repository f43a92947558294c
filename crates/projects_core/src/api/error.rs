//! Backend error surface.
//!
//! Every failure displays as the fixed human-readable message of the
//! operation that failed. Causes are kept as fields/sources for logs only.

use crate::model::project::ProjectId;
use crate::storage::StorageError;
use reqwest::StatusCode;
use std::fmt::{Display, Formatter};
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// CRUD verb an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
    Get,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Get => "get",
        }
    }

    /// Message shown when a remote call fails for any reason.
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::List => "Failed to fetch projects",
            Self::Create => "Failed to create project",
            Self::Update => "Failed to update project",
            Self::Delete => "Failed to delete project",
            Self::Get => "Failed to fetch project",
        }
    }

    /// Message shown when the mock store has no entry for the id.
    pub fn not_found_message(self) -> &'static str {
        match self {
            Self::Update => "Mock update failed: project not found",
            Self::Delete => "Mock delete failed: project not found",
            Self::List | Self::Create | Self::Get => "Mock fetch failed: project not found",
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{}", .operation.failure_message())]
    Transport {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },
    #[error("{}", .operation.failure_message())]
    Status {
        operation: Operation,
        status: StatusCode,
    },
    #[error("{}", .operation.failure_message())]
    Decode {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },
    #[error("{}", .operation.not_found_message())]
    NotFound { operation: Operation, id: ProjectId },
    #[error("Mock storage failed: {0}")]
    Storage(#[from] StorageError),
    #[error("invalid base url `{0}`")]
    InvalidBaseUrl(String),
}

impl ApiError {
    /// Operation that produced the error, when it is tied to one.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Self::Transport { operation, .. }
            | Self::Status { operation, .. }
            | Self::Decode { operation, .. }
            | Self::NotFound { operation, .. } => Some(*operation),
            Self::Storage(_) | Self::InvalidBaseUrl(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Short machine-friendly code for log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Transport { .. } => "transport",
            Self::Status { .. } => "http_status",
            Self::Decode { .. } => "decode",
            Self::NotFound { .. } => "not_found",
            Self::Storage(_) => "storage",
            Self::InvalidBaseUrl(_) => "invalid_base_url",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiError, Operation};
    use reqwest::StatusCode;

    #[test]
    fn status_errors_collapse_to_fixed_messages() {
        let cases = [
            (Operation::List, "Failed to fetch projects"),
            (Operation::Create, "Failed to create project"),
            (Operation::Update, "Failed to update project"),
            (Operation::Delete, "Failed to delete project"),
            (Operation::Get, "Failed to fetch project"),
        ];
        for (operation, expected) in cases {
            let err = ApiError::Status {
                operation,
                status: StatusCode::INTERNAL_SERVER_ERROR,
            };
            assert_eq!(err.to_string(), expected);
            assert_eq!(err.operation(), Some(operation));
        }
    }

    #[test]
    fn not_found_messages_name_the_mock_operation() {
        let err = ApiError::NotFound {
            operation: Operation::Delete,
            id: "missing".to_string(),
        };
        assert_eq!(err.to_string(), "Mock delete failed: project not found");
        assert!(err.is_not_found());
        assert_eq!(err.code(), "not_found");
    }
}

//! CRUD contract over `Project` and its backends.
//!
//! # Responsibility
//! - Define the backend-agnostic async contract used by services and UI.
//! - Host the remote HTTP client and the storage-backed mock.
//!
//! # Invariants
//! - Every failure is an `ApiError` whose display text is the fixed message
//!   of the failing operation.
//! - Backends never retry.

use crate::model::project::{NewProject, Project};
use async_trait::async_trait;

pub mod error;
pub mod mock;
pub mod remote;

pub use error::{ApiError, ApiResult, Operation};

/// Four-verb (+ get-by-id) project contract.
#[async_trait]
pub trait ProjectApi: Send + Sync {
    async fn list_projects(&self) -> ApiResult<Vec<Project>>;
    async fn create_project(&self, project: &NewProject) -> ApiResult<Project>;
    async fn update_project(&self, project: &Project) -> ApiResult<Project>;
    async fn delete_project(&self, id: &str) -> ApiResult<()>;
    async fn get_project(&self, id: &str) -> ApiResult<Project>;
}

#[async_trait]
impl<A: ProjectApi + ?Sized> ProjectApi for Box<A> {
    async fn list_projects(&self) -> ApiResult<Vec<Project>> {
        (**self).list_projects().await
    }

    async fn create_project(&self, project: &NewProject) -> ApiResult<Project> {
        (**self).create_project(project).await
    }

    async fn update_project(&self, project: &Project) -> ApiResult<Project> {
        (**self).update_project(project).await
    }

    async fn delete_project(&self, id: &str) -> ApiResult<()> {
        (**self).delete_project(id).await
    }

    async fn get_project(&self, id: &str) -> ApiResult<Project> {
        (**self).get_project(id).await
    }
}

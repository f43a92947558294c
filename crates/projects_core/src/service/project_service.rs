//! Project use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for UI callers.
//! - Emit metadata-only log events around every backend call.
//!
//! # Invariants
//! - Service APIs never bypass the backend contract.
//! - Errors are returned unchanged.
//! - Project names and descriptions are never logged.

use crate::api::{ApiResult, Operation, ProjectApi};
use crate::model::project::{NewProject, Project};
use log::{debug, info, warn};
use std::time::Instant;

/// Use-case service wrapper for project CRUD operations.
pub struct ProjectService<A: ProjectApi> {
    api: A,
}

impl<A: ProjectApi> ProjectService<A> {
    /// Creates a service using the provided backend implementation.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Lists every project.
    pub async fn list_projects(&self) -> ApiResult<Vec<Project>> {
        let started_at = log_start(Operation::List);
        let result = self.api.list_projects().await;
        log_finish(Operation::List, started_at, &result);
        result
    }

    /// Creates a project and returns it with its assigned id.
    pub async fn create_project(&self, project: &NewProject) -> ApiResult<Project> {
        let started_at = log_start(Operation::Create);
        let result = self.api.create_project(project).await;
        log_finish(Operation::Create, started_at, &result);
        result
    }

    /// Replaces an existing project by id.
    pub async fn update_project(&self, project: &Project) -> ApiResult<Project> {
        let started_at = log_start(Operation::Update);
        let result = self.api.update_project(project).await;
        log_finish(Operation::Update, started_at, &result);
        result
    }

    pub async fn delete_project(&self, id: &str) -> ApiResult<()> {
        let started_at = log_start(Operation::Delete);
        let result = self.api.delete_project(id).await;
        log_finish(Operation::Delete, started_at, &result);
        result
    }

    pub async fn get_project(&self, id: &str) -> ApiResult<Project> {
        let started_at = log_start(Operation::Get);
        let result = self.api.get_project(id).await;
        log_finish(Operation::Get, started_at, &result);
        result
    }
}

fn log_start(operation: Operation) -> Instant {
    debug!("event=project_{operation} module=service status=start");
    Instant::now()
}

fn log_finish<T>(operation: Operation, started_at: Instant, result: &ApiResult<T>) {
    let duration_ms = started_at.elapsed().as_millis();
    match result {
        Ok(_) => info!(
            "event=project_{operation} module=service status=ok duration_ms={duration_ms}"
        ),
        Err(err) => warn!(
            "event=project_{operation} module=service status=error duration_ms={duration_ms} error_code={}",
            err.code()
        ),
    }
}

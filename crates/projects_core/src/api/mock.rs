//! Storage-backed stand-in for the remote projects API.
//!
//! # Responsibility
//! - Persist the whole project collection as one JSON array under one key.
//! - Simulate network latency with a fixed delay.
//!
//! # Invariants
//! - Project ids are unique within the persisted collection.
//! - The in-memory collection is rebuilt from storage on every call.
//! - Failed lookups never write to storage.
//! - There is no locking across read-modify-write; concurrent calls may race.

use super::{ApiError, ApiResult, Operation, ProjectApi};
use crate::config::MockStoreConfig;
use crate::model::project::{generate_project_id, NewProject, Project, ProjectId};
use crate::storage::{KeyValueStore, StorageError};
use async_trait::async_trait;
use log::{debug, warn};

const SEED_PROJECT_NAME: &str = "Demo Project (mock)";
const SEED_PROJECT_DESCRIPTION: &str = "Demo project stored in localStorage (mock)";

/// Mock backend persisting into an injected key/value store.
pub struct MockProjectStore<S: KeyValueStore> {
    storage: S,
    config: MockStoreConfig,
}

impl<S: KeyValueStore> MockProjectStore<S> {
    /// Creates a store with default key and delay.
    pub fn new(storage: S) -> Self {
        Self::with_config(storage, MockStoreConfig::default())
    }

    pub fn with_config(storage: S, config: MockStoreConfig) -> Self {
        Self { storage, config }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn config(&self) -> &MockStoreConfig {
        &self.config
    }

    /// Drops the persisted collection entirely.
    pub fn clear(&self) -> ApiResult<()> {
        self.storage.remove_item(&self.config.storage_key)?;
        debug!(
            "event=mock_clear module=mock status=ok key={}",
            self.config.storage_key
        );
        Ok(())
    }

    fn read_projects(&self) -> ApiResult<Vec<Project>> {
        let raw = self.storage.get_item(&self.config.storage_key)?;
        let raw = match raw {
            Some(raw) if !raw.is_empty() => raw,
            _ => return self.seed_projects(),
        };

        match serde_json::from_str::<Vec<Project>>(&raw) {
            Ok(projects) => Ok(projects),
            Err(err) => {
                warn!(
                    "event=mock_read module=mock status=error key={} error_code=decode_failed error={}",
                    self.config.storage_key, err
                );
                Ok(Vec::new())
            }
        }
    }

    fn seed_projects(&self) -> ApiResult<Vec<Project>> {
        if !self.config.seed_demo {
            return Ok(Vec::new());
        }

        let seed = vec![Project::new(
            generate_project_id(),
            SEED_PROJECT_NAME,
            SEED_PROJECT_DESCRIPTION,
        )];
        self.write_projects(&seed)?;
        debug!(
            "event=mock_seed module=mock status=ok key={}",
            self.config.storage_key
        );
        Ok(seed)
    }

    fn write_projects(&self, projects: &[Project]) -> ApiResult<()> {
        let raw = serde_json::to_string(projects).map_err(StorageError::from)?;
        self.storage.set_item(&self.config.storage_key, &raw)?;
        Ok(())
    }

    async fn pause(&self) {
        if !self.config.delay.is_zero() {
            tokio::time::sleep(self.config.delay).await;
        }
    }
}

#[async_trait]
impl<S: KeyValueStore> ProjectApi for MockProjectStore<S> {
    async fn list_projects(&self) -> ApiResult<Vec<Project>> {
        self.pause().await;
        self.read_projects()
    }

    async fn create_project(&self, project: &NewProject) -> ApiResult<Project> {
        let mut projects = self.read_projects()?;
        let created = project.clone().into_project(unique_project_id(&projects));
        projects.push(created.clone());
        self.write_projects(&projects)?;
        self.pause().await;
        Ok(created)
    }

    async fn update_project(&self, project: &Project) -> ApiResult<Project> {
        let mut projects = self.read_projects()?;
        let index = find_index(&projects, &project.id)
            .ok_or_else(|| not_found(Operation::Update, &project.id))?;
        projects[index] = project.clone();
        self.write_projects(&projects)?;
        self.pause().await;
        Ok(project.clone())
    }

    async fn delete_project(&self, id: &str) -> ApiResult<()> {
        let mut projects = self.read_projects()?;
        let index = find_index(&projects, id).ok_or_else(|| not_found(Operation::Delete, id))?;
        projects.remove(index);
        self.write_projects(&projects)?;
        self.pause().await;
        Ok(())
    }

    async fn get_project(&self, id: &str) -> ApiResult<Project> {
        self.pause().await;
        let projects = self.read_projects()?;
        projects
            .into_iter()
            .find(|project| project.id == id)
            .ok_or_else(|| not_found(Operation::Get, id))
    }
}

fn find_index(projects: &[Project], id: &str) -> Option<usize> {
    projects.iter().position(|project| project.id == id)
}

fn unique_project_id(existing: &[Project]) -> ProjectId {
    loop {
        let candidate = generate_project_id();
        if find_index(existing, &candidate).is_none() {
            return candidate;
        }
    }
}

fn not_found(operation: Operation, id: &str) -> ApiError {
    ApiError::NotFound {
        operation,
        id: id.to_string(),
    }
}

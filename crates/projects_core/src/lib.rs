//! Core logic for the projects showcase.
//!
//! Two interchangeable backends (remote HTTP and storage-backed mock) sit
//! behind one async CRUD contract, wrapped by a service and driven by an
//! action controller.

pub mod api;
pub mod config;
pub mod controller;
pub mod db;
pub mod logging;
pub mod model;
pub mod service;
pub mod storage;

pub use api::mock::MockProjectStore;
pub use api::remote::RemoteProjectClient;
pub use api::{ApiError, ApiResult, Operation, ProjectApi};
pub use config::{MockStoreConfig, RemoteClientConfig};
pub use controller::{Action, ActionRequest, Controller, Outcome, UnknownAction, UpdateFormState};
pub use logging::{init_logging, init_stderr_logging, logging_status, LogTarget};
pub use model::project::{generate_project_id, NewProject, Project, ProjectId};
pub use service::project_service::ProjectService;
pub use storage::{KeyValueStore, MemoryStorage, SqliteStorage, StorageError, StorageResult};

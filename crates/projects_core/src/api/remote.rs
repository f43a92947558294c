//! HTTP client for the remote projects API.
//!
//! # Responsibility
//! - Map each CRUD verb to one request under `{base_url}/api/projects`.
//! - Collapse transport, status and decode failures into `ApiError`.
//!
//! # Invariants
//! - Exactly one request per call; no retries, no custom timeouts.
//! - Id path segments are percent-encoded.

use super::{ApiError, ApiResult, Operation, ProjectApi};
use crate::config::RemoteClientConfig;
use crate::model::project::{NewProject, Project};
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Instant;

const PROJECTS_PATH: &str = "api/projects";

/// Remote backend over the conventional REST path scheme.
#[derive(Debug, Clone)]
pub struct RemoteProjectClient {
    http: Client,
    projects_url: Url,
}

impl RemoteProjectClient {
    /// Builds a client with a default `reqwest::Client`.
    ///
    /// # Errors
    /// - `ApiError::InvalidBaseUrl` when `base_url` does not parse or cannot
    ///   carry path segments.
    pub fn new(config: &RemoteClientConfig) -> ApiResult<Self> {
        Self::with_http_client(config, Client::new())
    }

    pub fn with_http_client(config: &RemoteClientConfig, http: Client) -> ApiResult<Self> {
        Ok(Self {
            http,
            projects_url: projects_url(&config.base_url)?,
        })
    }

    /// Collection endpoint, e.g. `http://localhost:8080/api/projects`.
    pub fn projects_url(&self) -> &Url {
        &self.projects_url
    }

    fn project_url(&self, id: &str) -> ApiResult<Url> {
        let mut url = self.projects_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl(self.projects_url.to_string()))?
            .push(id);
        Ok(url)
    }

    async fn send(&self, operation: Operation, request: RequestBuilder) -> ApiResult<Response> {
        let started_at = Instant::now();
        let response = request.send().await.map_err(|source| {
            warn!(
                "event=remote_request module=remote status=error op={} duration_ms={} error_code=transport error={}",
                operation,
                started_at.elapsed().as_millis(),
                source
            );
            ApiError::Transport { operation, source }
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                "event=remote_request module=remote status=error op={} duration_ms={} error_code=http_status http_status={}",
                operation,
                started_at.elapsed().as_millis(),
                status.as_u16()
            );
            return Err(ApiError::Status { operation, status });
        }

        debug!(
            "event=remote_request module=remote status=ok op={} duration_ms={} http_status={}",
            operation,
            started_at.elapsed().as_millis(),
            status.as_u16()
        );
        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        operation: Operation,
        request: RequestBuilder,
    ) -> ApiResult<T> {
        let response = self.send(operation, request).await?;
        response
            .json::<T>()
            .await
            .map_err(|source| ApiError::Decode { operation, source })
    }
}

#[async_trait]
impl ProjectApi for RemoteProjectClient {
    async fn list_projects(&self) -> ApiResult<Vec<Project>> {
        let request = self.http.get(self.projects_url.clone());
        self.send_json(Operation::List, request).await
    }

    async fn create_project(&self, project: &NewProject) -> ApiResult<Project> {
        let request = self.http.post(self.projects_url.clone()).json(project);
        self.send_json(Operation::Create, request).await
    }

    async fn update_project(&self, project: &Project) -> ApiResult<Project> {
        let request = self.http.put(self.project_url(&project.id)?).json(project);
        self.send_json(Operation::Update, request).await
    }

    async fn delete_project(&self, id: &str) -> ApiResult<()> {
        let request = self.http.delete(self.project_url(id)?);
        self.send(Operation::Delete, request).await?;
        Ok(())
    }

    async fn get_project(&self, id: &str) -> ApiResult<Project> {
        let request = self.http.get(self.project_url(id)?);
        self.send_json(Operation::Get, request).await
    }
}

fn projects_url(base_url: &str) -> ApiResult<Url> {
    let trimmed = base_url.trim();
    let mut base = Url::parse(trimmed).map_err(|_| ApiError::InvalidBaseUrl(trimmed.to_string()))?;
    if base.cannot_be_a_base() {
        return Err(ApiError::InvalidBaseUrl(trimmed.to_string()));
    }
    // `join` replaces the last segment unless the base path ends with `/`.
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(PROJECTS_PATH)
        .map_err(|_| ApiError::InvalidBaseUrl(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::RemoteProjectClient;
    use crate::api::ApiError;
    use crate::config::RemoteClientConfig;

    fn client(base_url: &str) -> RemoteProjectClient {
        RemoteProjectClient::new(&RemoteClientConfig::new(base_url)).unwrap()
    }

    #[test]
    fn projects_url_is_rooted_at_origin() {
        let client = client("http://localhost:8080");
        assert_eq!(
            client.projects_url().as_str(),
            "http://localhost:8080/api/projects"
        );
    }

    #[test]
    fn projects_url_keeps_base_path_prefix() {
        let client = client("https://example.test/backend");
        assert_eq!(
            client.projects_url().as_str(),
            "https://example.test/backend/api/projects"
        );
    }

    #[test]
    fn project_url_percent_encodes_id() {
        let client = client("http://localhost:8080/");
        let url = client.project_url("a b/c").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/projects/a%20b%2Fc");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = RemoteProjectClient::new(&RemoteClientConfig::new("not a url")).unwrap_err();
        assert!(matches!(err, ApiError::InvalidBaseUrl(_)));

        let err = RemoteProjectClient::new(&RemoteClientConfig::new("mailto:me@example.test"))
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidBaseUrl(_)));
    }
}

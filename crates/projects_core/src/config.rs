//! Backend configuration.
//!
//! # Responsibility
//! - Hold the storage key, delay and seeding switch of the mock store.
//! - Hold the remote API origin.

use std::time::Duration;

/// Storage slot holding the mock project collection.
pub const DEFAULT_STORAGE_KEY: &str = "projects_v1_mock";
/// Simulated latency applied by every mock operation.
pub const DEFAULT_MOCK_DELAY: Duration = Duration::from_millis(120);
/// Remote API origin used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Mock store settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockStoreConfig {
    /// Key of the slot holding the JSON array.
    pub storage_key: String,
    /// Fixed artificial delay. `Duration::ZERO` disables sleeping.
    pub delay: Duration,
    /// Seeds one demo project when the slot is empty.
    pub seed_demo: bool,
}

impl Default for MockStoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            delay: DEFAULT_MOCK_DELAY,
            seed_demo: false,
        }
    }
}

impl MockStoreConfig {
    pub fn with_storage_key(mut self, storage_key: impl Into<String>) -> Self {
        self.storage_key = storage_key.into();
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_seed_demo(mut self, seed_demo: bool) -> Self {
        self.seed_demo = seed_demo;
        self
    }
}

/// Remote client settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteClientConfig {
    /// Origin (optionally with a path prefix) that `/api/projects` hangs off.
    pub base_url: String,
}

impl Default for RemoteClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl RemoteClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

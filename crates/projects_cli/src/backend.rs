//! Backend construction from CLI flags.

use crate::cli::{BackendArgs, BackendKind};
use anyhow::{bail, Context, Result};
use log::info;
use projects_core::{
    KeyValueStore, MemoryStorage, MockProjectStore, MockStoreConfig, ProjectApi,
    RemoteClientConfig, RemoteProjectClient, SqliteStorage,
};
use std::time::Duration;

pub type DynMockStore = MockProjectStore<Box<dyn KeyValueStore>>;

/// Builds the backend selected by `--backend`.
pub fn build_backend(args: &BackendArgs) -> Result<Box<dyn ProjectApi>> {
    match args.backend {
        BackendKind::Mock => Ok(Box::new(build_mock_store(args)?)),
        BackendKind::Remote => {
            let client = RemoteProjectClient::new(&RemoteClientConfig::new(&args.base_url))
                .with_context(|| format!("cannot use base url `{}`", args.base_url))?;
            info!(
                "event=backend_ready module=cli status=ok backend=remote url={}",
                client.projects_url()
            );
            Ok(Box::new(client))
        }
    }
}

/// Builds the mock store on the `--store` SQLite file, or in memory with
/// `--in-memory`.
pub fn build_mock_store(args: &BackendArgs) -> Result<DynMockStore> {
    let storage: Box<dyn KeyValueStore> = if args.in_memory {
        Box::new(MemoryStorage::new())
    } else {
        Box::new(
            SqliteStorage::open(&args.store)
                .with_context(|| format!("cannot open store `{}`", args.store.display()))?,
        )
    };
    let config = MockStoreConfig::default()
        .with_storage_key(args.storage_key.clone())
        .with_delay(Duration::from_millis(args.delay_ms))
        .with_seed_demo(args.seed_demo);
    info!(
        "event=backend_ready module=cli status=ok backend=mock persistent={} key={}",
        !args.in_memory,
        config.storage_key
    );
    Ok(MockProjectStore::with_config(storage, config))
}

/// Persistent mock store for `reset`.
pub fn require_mock_store(args: &BackendArgs) -> Result<DynMockStore> {
    if args.backend != BackendKind::Mock {
        bail!("reset is only available for the mock backend");
    }
    if args.in_memory {
        bail!("reset needs a persistent store; drop --in-memory");
    }
    build_mock_store(args)
}

#[cfg(test)]
mod tests {
    use super::{build_mock_store, require_mock_store};
    use crate::cli::Cli;
    use clap::Parser;
    use projects_core::{NewProject, ProjectApi};

    #[tokio::test]
    async fn file_store_persists_between_builds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projects.db");
        let path = path.to_str().unwrap();
        let cli =
            Cli::try_parse_from(["projects", "read", "--store", path, "--delay-ms", "0"]).unwrap();

        let first = build_mock_store(&cli.backend).unwrap();
        let created = first
            .create_project(&NewProject::new("A", "a"))
            .await
            .unwrap();
        drop(first);

        let second = build_mock_store(&cli.backend).unwrap();
        assert_eq!(second.list_projects().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn default_store_persists_between_builds() {
        let dir = tempfile::tempdir().unwrap();
        let previous_dir = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir.path()).unwrap();

        let cli = Cli::try_parse_from(["projects", "read", "--delay-ms", "0"]).unwrap();
        let created = build_mock_store(&cli.backend)
            .unwrap()
            .create_project(&NewProject::new("A", "d"))
            .await
            .unwrap();
        let listed = build_mock_store(&cli.backend)
            .unwrap()
            .list_projects()
            .await
            .unwrap();
        let file_exists = dir.path().join("projects.db").exists();

        std::env::set_current_dir(previous_dir).unwrap();
        assert_eq!(listed, vec![created]);
        assert!(file_exists);
    }

    #[tokio::test]
    async fn in_memory_store_starts_empty_each_build() {
        let cli =
            Cli::try_parse_from(["projects", "read", "--in-memory", "--delay-ms", "0"]).unwrap();
        build_mock_store(&cli.backend)
            .unwrap()
            .create_project(&NewProject::new("A", "d"))
            .await
            .unwrap();
        let listed = build_mock_store(&cli.backend)
            .unwrap()
            .list_projects()
            .await
            .unwrap();
        assert!(listed.is_empty());
    }

    #[test]
    fn reset_refuses_in_memory_store() {
        let cli = Cli::try_parse_from(["projects", "reset", "--in-memory"]).unwrap();
        let err = require_mock_store(&cli.backend).err().unwrap();
        assert!(err.to_string().contains("persistent store"));
    }

    #[test]
    fn reset_refuses_remote_backend() {
        let cli = Cli::try_parse_from(["projects", "reset", "--backend", "remote"]).unwrap();
        let err = require_mock_store(&cli.backend).err().unwrap();
        assert!(err.to_string().contains("mock backend"));
    }
}

//! Command-line surface.
//!
//! Global flags pick the backend and logging; each subcommand maps to one
//! controller action.

use clap::{Args, Parser, Subcommand, ValueEnum};
use projects_core::config::{DEFAULT_BASE_URL, DEFAULT_MOCK_DELAY, DEFAULT_STORAGE_KEY};
use projects_core::ActionRequest;
use std::path::PathBuf;

/// Mock store file, relative to the working directory.
pub const DEFAULT_STORE_PATH: &str = "projects.db";

#[derive(Debug, Parser)]
#[command(
    name = "projects",
    version,
    about = "Create, read, update and delete projects against a mock or remote backend"
)]
pub struct Cli {
    #[command(flatten)]
    pub backend: BackendArgs,

    /// trace|debug|info|warn|error
    #[arg(long, env = "PROJECTS_LOG_LEVEL", default_value = "warn", global = true)]
    pub log_level: String,

    /// Absolute directory for rolling log files; logs go to stderr when unset.
    #[arg(long, env = "PROJECTS_LOG_DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendKind {
    Mock,
    Remote,
}

#[derive(Debug, Args)]
pub struct BackendArgs {
    #[arg(
        long,
        value_enum,
        env = "PROJECTS_BACKEND",
        default_value_t = BackendKind::Mock,
        global = true
    )]
    pub backend: BackendKind,

    /// Origin of the remote API.
    #[arg(long, env = "PROJECTS_API_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    /// SQLite file holding the mock collection.
    #[arg(long, env = "PROJECTS_STORE_PATH", default_value = DEFAULT_STORE_PATH, global = true)]
    pub store: PathBuf,

    /// Keep the mock collection in memory only; it is lost on exit.
    #[arg(long, global = true)]
    pub in_memory: bool,

    #[arg(long, default_value = DEFAULT_STORAGE_KEY, global = true)]
    pub storage_key: String,

    /// Simulated mock latency in milliseconds.
    #[arg(long, default_value_t = DEFAULT_MOCK_DELAY.as_millis() as u64, global = true)]
    pub delay_ms: u64,

    /// Seed one demo project into an empty mock collection.
    #[arg(long, global = true)]
    pub seed_demo: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a project.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// List every project.
    Read,
    /// Show update choices, preselecting `--id` or the first project.
    UpdateForm {
        #[arg(long)]
        id: Option<String>,
    },
    /// Replace a project's name and description.
    Update {
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Delete a project by id.
    Delete {
        #[arg(long)]
        id: String,
    },
    /// Show one project by id.
    ReadById {
        #[arg(long)]
        id: String,
    },
    /// Remove the persisted mock collection.
    Reset,
    /// Prompt for actions and form fields until `quit`.
    Interactive,
}

impl Command {
    /// Controller request for one-shot commands; `None` for the rest.
    pub fn into_request(self) -> Option<ActionRequest> {
        match self {
            Self::Create { name, description } => Some(ActionRequest::Create { name, description }),
            Self::Read => Some(ActionRequest::Read),
            Self::UpdateForm { id } => Some(ActionRequest::UpdateForm { id }),
            Self::Update {
                id,
                name,
                description,
            } => Some(ActionRequest::Update {
                id,
                name,
                description,
            }),
            Self::Delete { id } => Some(ActionRequest::Delete { id }),
            Self::ReadById { id } => Some(ActionRequest::ReadById { id }),
            Self::Reset | Self::Interactive => None,
        }
    }
}

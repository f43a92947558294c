//! Action-driven view controller.
//!
//! # Responsibility
//! - Map an action keyword plus submitted form fields to one service call.
//! - Turn the call result into a displayable `Outcome`.
//!
//! # Invariants
//! - The controller keeps no state between requests.
//! - Form fields are trimmed before use.
//! - Every backend failure becomes `Outcome::Failure` carrying the error text.

use crate::api::{ApiResult, ProjectApi};
use crate::model::project::{NewProject, Project};
use crate::service::project_service::ProjectService;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

const NO_PROJECTS_MESSAGE: &str = "No projects found.";
const NAME_REQUIRED_MESSAGE: &str = "Project name is required";
const ID_REQUIRED_MESSAGE: &str = "Project id is required";

/// User-selectable view action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
    ReadById,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::Create,
        Action::Read,
        Action::Update,
        Action::Delete,
        Action::ReadById,
    ];

    /// Canonical keyword for this action.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::ReadById => "readById",
        }
    }

    /// Human label used in menus.
    pub fn label(self) -> &'static str {
        match self {
            Self::ReadById => "read by id",
            other => other.keyword(),
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown action `{0}`; expected create|read|update|delete|readById")]
pub struct UnknownAction(pub String);

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "create" => Ok(Self::Create),
            "read" => Ok(Self::Read),
            "update" => Ok(Self::Update),
            "delete" => Ok(Self::Delete),
            "readbyid" | "read-by-id" | "read_by_id" | "read by id" => Ok(Self::ReadById),
            _ => Err(UnknownAction(value.trim().to_string())),
        }
    }
}

/// One submitted form, tagged by action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionRequest {
    Create { name: String, description: String },
    Read,
    /// Loads the update form: choices plus the preselected project.
    UpdateForm { id: Option<String> },
    Update {
        id: String,
        name: String,
        description: String,
    },
    Delete { id: String },
    ReadById { id: String },
}

impl ActionRequest {
    pub fn action(&self) -> Action {
        match self {
            Self::Create { .. } => Action::Create,
            Self::Read => Action::Read,
            Self::UpdateForm { .. } | Self::Update { .. } => Action::Update,
            Self::Delete { .. } => Action::Delete,
            Self::ReadById { .. } => Action::ReadById,
        }
    }
}

/// State of the update form after loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateFormState {
    pub choices: Vec<Project>,
    /// Project whose fields prefill the form.
    pub selected: Option<Project>,
}

/// Displayable result of one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(String),
    Failure(String),
    Listing(Vec<Project>),
    Details(Project),
    UpdateForm(UpdateFormState),
}

impl Outcome {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Renders the outcome as plain text.
    pub fn render(&self) -> String {
        match self {
            Self::Success(message) | Self::Failure(message) => message.clone(),
            Self::Listing(projects) => render_listing(projects),
            Self::Details(project) => render_details(project),
            Self::UpdateForm(state) => render_update_form(state),
        }
    }
}

/// Stateless view controller over a project service.
pub struct Controller<A: ProjectApi> {
    service: ProjectService<A>,
}

impl<A: ProjectApi> Controller<A> {
    pub fn new(service: ProjectService<A>) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &ProjectService<A> {
        &self.service
    }

    /// Runs one submitted action and reports its outcome.
    pub async fn run(&self, request: ActionRequest) -> Outcome {
        match request {
            ActionRequest::Create { name, description } => {
                self.create(name.trim(), description.trim()).await
            }
            ActionRequest::Read => self.read().await,
            ActionRequest::UpdateForm { id } => {
                let id = id.as_deref().map(str::trim).filter(|id| !id.is_empty());
                self.update_form(id).await
            }
            ActionRequest::Update {
                id,
                name,
                description,
            } => self.update(id.trim(), name.trim(), description.trim()).await,
            ActionRequest::Delete { id } => self.delete(id.trim()).await,
            ActionRequest::ReadById { id } => self.read_by_id(id.trim()).await,
        }
    }

    async fn create(&self, name: &str, description: &str) -> Outcome {
        if name.is_empty() {
            return Outcome::Failure(NAME_REQUIRED_MESSAGE.to_string());
        }
        let request = NewProject::new(name, description);
        match self.service.create_project(&request).await {
            Ok(created) => Outcome::Success(format!(
                "Created project: {} - {}",
                created.id, created.name
            )),
            Err(err) => Outcome::Failure(err.to_string()),
        }
    }

    async fn read(&self) -> Outcome {
        match self.service.list_projects().await {
            Ok(projects) if projects.is_empty() => {
                Outcome::Success(NO_PROJECTS_MESSAGE.to_string())
            }
            Ok(projects) => Outcome::Listing(projects),
            Err(err) => Outcome::Failure(err.to_string()),
        }
    }

    async fn update_form(&self, id: Option<&str>) -> Outcome {
        match self.load_update_form(id).await {
            Ok(state) => Outcome::UpdateForm(state),
            Err(err) => Outcome::Failure(err.to_string()),
        }
    }

    async fn load_update_form(&self, id: Option<&str>) -> ApiResult<UpdateFormState> {
        let choices = self.service.list_projects().await?;
        let selected = match id {
            Some(id) => Some(self.service.get_project(id).await?),
            None => choices.first().cloned(),
        };
        Ok(UpdateFormState { choices, selected })
    }

    async fn update(&self, id: &str, name: &str, description: &str) -> Outcome {
        if id.is_empty() {
            return Outcome::Failure(ID_REQUIRED_MESSAGE.to_string());
        }
        if name.is_empty() {
            return Outcome::Failure(NAME_REQUIRED_MESSAGE.to_string());
        }
        let project = Project::new(id, name, description);
        match self.service.update_project(&project).await {
            Ok(updated) => Outcome::Success(format!(
                "Updated project: {} - {}",
                updated.id, updated.name
            )),
            Err(err) => Outcome::Failure(err.to_string()),
        }
    }

    async fn delete(&self, id: &str) -> Outcome {
        if id.is_empty() {
            return Outcome::Failure(ID_REQUIRED_MESSAGE.to_string());
        }
        match self.service.delete_project(id).await {
            Ok(()) => Outcome::Success(format!("Deleted project {id}")),
            Err(err) => Outcome::Failure(err.to_string()),
        }
    }

    async fn read_by_id(&self, id: &str) -> Outcome {
        if id.is_empty() {
            return Outcome::Failure(ID_REQUIRED_MESSAGE.to_string());
        }
        match self.service.get_project(id).await {
            Ok(project) => Outcome::Details(project),
            Err(err) => Outcome::Failure(err.to_string()),
        }
    }
}

fn render_listing(projects: &[Project]) -> String {
    if projects.is_empty() {
        return NO_PROJECTS_MESSAGE.to_string();
    }
    projects
        .iter()
        .map(|project| {
            format!(
                "- {} ({})\n    {}",
                single_line(&project.name),
                project.id,
                single_line(&project.description)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_details(project: &Project) -> String {
    format!(
        "id: {}\nname: {}\ndescription: {}",
        project.id,
        single_line(&project.name),
        single_line(&project.description)
    )
}

fn render_update_form(state: &UpdateFormState) -> String {
    if state.choices.is_empty() {
        return NO_PROJECTS_MESSAGE.to_string();
    }
    let selected_id = state.selected.as_ref().map(|project| project.id.as_str());
    let mut lines = vec!["Select project:".to_string()];
    for choice in &state.choices {
        let marker = if Some(choice.id.as_str()) == selected_id {
            "*"
        } else {
            " "
        };
        lines.push(format!(
            "  [{marker}] {} ({})",
            single_line(&choice.name),
            choice.id
        ));
    }
    if let Some(selected) = &state.selected {
        lines.push(format!("Name: {}", single_line(&selected.name)));
        lines.push(format!("Description: {}", single_line(&selected.description)));
    }
    lines.join("\n")
}

// User text must not break the line-oriented layout.
fn single_line(value: &str) -> String {
    value.replace(['\n', '\r'], " ")
}

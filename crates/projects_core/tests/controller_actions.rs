use projects_core::{
    ActionRequest, Controller, MemoryStorage, MockProjectStore, MockStoreConfig, Outcome,
    ProjectService, UpdateFormState,
};
use std::time::Duration;

fn controller(seed_demo: bool) -> Controller<MockProjectStore<MemoryStorage>> {
    let store = MockProjectStore::with_config(
        MemoryStorage::new(),
        MockStoreConfig::default()
            .with_delay(Duration::ZERO)
            .with_seed_demo(seed_demo),
    );
    Controller::new(ProjectService::new(store))
}

fn create(name: &str, description: &str) -> ActionRequest {
    ActionRequest::Create {
        name: name.to_string(),
        description: description.to_string(),
    }
}

#[tokio::test]
async fn create_reports_id_and_trimmed_name() {
    let controller = controller(false);

    let outcome = controller.run(create("  Alpha  ", " first ")).await;

    let projects = controller.service().list_projects().await.unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].name, "Alpha");
    assert_eq!(projects[0].description, "first");
    assert_eq!(
        outcome,
        Outcome::Success(format!("Created project: {} - Alpha", projects[0].id))
    );
}

#[tokio::test]
async fn create_requires_a_name() {
    let controller = controller(false);

    let outcome = controller.run(create("   ", "d")).await;

    assert!(outcome.is_error());
    assert!(controller.service().list_projects().await.unwrap().is_empty());
}

#[tokio::test]
async fn read_on_empty_store_says_no_projects() {
    let outcome = controller(false).run(ActionRequest::Read).await;
    assert_eq!(outcome, Outcome::Success("No projects found.".to_string()));
}

#[tokio::test]
async fn read_lists_seeded_demo_project() {
    let outcome = controller(true).run(ActionRequest::Read).await;
    match outcome {
        Outcome::Listing(projects) => {
            assert_eq!(projects.len(), 1);
            assert_eq!(projects[0].name, "Demo Project (mock)");
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[tokio::test]
async fn update_form_preselects_first_or_requested_project() {
    let controller = controller(false);
    controller.run(create("A", "a")).await;
    controller.run(create("B", "b")).await;
    let projects = controller.service().list_projects().await.unwrap();

    let default_form = controller
        .run(ActionRequest::UpdateForm { id: None })
        .await;
    assert_eq!(
        default_form,
        Outcome::UpdateForm(UpdateFormState {
            choices: projects.clone(),
            selected: Some(projects[0].clone()),
        })
    );

    let chosen = controller
        .run(ActionRequest::UpdateForm {
            id: Some(projects[1].id.clone()),
        })
        .await;
    assert_eq!(
        chosen,
        Outcome::UpdateForm(UpdateFormState {
            choices: projects.clone(),
            selected: Some(projects[1].clone()),
        })
    );
}

#[tokio::test]
async fn update_form_with_unknown_id_is_an_error() {
    let controller = controller(true);
    let outcome = controller
        .run(ActionRequest::UpdateForm {
            id: Some("missing".to_string()),
        })
        .await;
    assert_eq!(
        outcome,
        Outcome::Failure("Mock fetch failed: project not found".to_string())
    );
}

#[tokio::test]
async fn update_submit_reports_updated_project() {
    let controller = controller(false);
    controller.run(create("A", "a")).await;
    let id = controller.service().list_projects().await.unwrap()[0].id.clone();

    let outcome = controller
        .run(ActionRequest::Update {
            id: id.clone(),
            name: "A2".to_string(),
            description: "a2".to_string(),
        })
        .await;

    assert_eq!(outcome, Outcome::Success(format!("Updated project: {id} - A2")));
    let loaded = controller.service().get_project(&id).await.unwrap();
    assert_eq!(loaded.name, "A2");
}

#[tokio::test]
async fn update_unknown_id_shows_mock_message() {
    let outcome = controller(false)
        .run(ActionRequest::Update {
            id: "missing".to_string(),
            name: "X".to_string(),
            description: String::new(),
        })
        .await;
    assert_eq!(
        outcome,
        Outcome::Failure("Mock update failed: project not found".to_string())
    );
}

#[tokio::test]
async fn delete_then_read_by_id_fails() {
    let controller = controller(false);
    controller.run(create("A", "a")).await;
    let id = controller.service().list_projects().await.unwrap()[0].id.clone();

    let deleted = controller
        .run(ActionRequest::Delete {
            id: format!(" {id} "),
        })
        .await;
    assert_eq!(deleted, Outcome::Success(format!("Deleted project {id}")));

    let again = controller.run(ActionRequest::Delete { id: id.clone() }).await;
    assert_eq!(
        again,
        Outcome::Failure("Mock delete failed: project not found".to_string())
    );

    let fetched = controller.run(ActionRequest::ReadById { id }).await;
    assert_eq!(
        fetched,
        Outcome::Failure("Mock fetch failed: project not found".to_string())
    );
}

#[tokio::test]
async fn read_by_id_shows_details() {
    let controller = controller(false);
    controller.run(create("Alpha", "first")).await;
    let project = controller.service().list_projects().await.unwrap()[0].clone();

    let outcome = controller
        .run(ActionRequest::ReadById {
            id: project.id.clone(),
        })
        .await;

    assert_eq!(outcome, Outcome::Details(project.clone()));
    assert_eq!(
        outcome.render(),
        format!("id: {}\nname: Alpha\ndescription: first", project.id)
    );
}

#[tokio::test]
async fn blank_id_is_rejected_before_backend_call() {
    let controller = controller(false);
    let outcome = controller
        .run(ActionRequest::ReadById {
            id: "  ".to_string(),
        })
        .await;
    assert_eq!(outcome, Outcome::Failure("Project id is required".to_string()));
    assert!(controller.service().api().storage().is_empty());
}

use projects_core::{
    ApiError, NewProject, Operation, Project, ProjectApi, RemoteClientConfig, RemoteProjectClient,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> RemoteProjectClient {
    RemoteProjectClient::new(&RemoteClientConfig::new(server.uri())).unwrap()
}

#[tokio::test]
async fn list_projects_parses_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "p1", "name": "Alpha", "description": "first" },
            { "id": "p2", "name": "Beta", "description": "" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let projects = client(&server).list_projects().await.unwrap();
    assert_eq!(
        projects,
        vec![
            Project::new("p1", "Alpha", "first"),
            Project::new("p2", "Beta", ""),
        ]
    );
}

#[tokio::test]
async fn create_posts_json_without_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/projects"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "name": "Alpha", "description": "first" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "srv-1", "name": "Alpha", "description": "first"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let created = client(&server)
        .create_project(&NewProject::new("Alpha", "first"))
        .await
        .unwrap();
    assert_eq!(created, Project::new("srv-1", "Alpha", "first"));
}

#[tokio::test]
async fn update_puts_full_project_to_item_path() {
    let server = MockServer::start().await;
    let project = Project::new("p1", "Renamed", "changed");
    Mock::given(method("PUT"))
        .and(path("/api/projects/p1"))
        .and(body_json(json!({ "id": "p1", "name": "Renamed", "description": "changed" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&project))
        .expect(1)
        .mount(&server)
        .await;

    let updated = client(&server).update_project(&project).await.unwrap();
    assert_eq!(updated, project);
}

#[tokio::test]
async fn delete_ignores_response_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/projects/p1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client(&server).delete_project("p1").await.unwrap();
}

#[tokio::test]
async fn get_fetches_item_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/projects/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "p1", "name": "Alpha", "description": "first"
        })))
        .mount(&server)
        .await;

    let project = client(&server).get_project("p1").await.unwrap();
    assert_eq!(project, Project::new("p1", "Alpha", "first"));
}

#[tokio::test]
async fn non_success_status_maps_to_fixed_message_per_operation() {
    let server = MockServer::start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let client = client(&server);

    let list = client.list_projects().await.unwrap_err();
    assert_eq!(list.to_string(), "Failed to fetch projects");

    let create = client
        .create_project(&NewProject::new("A", ""))
        .await
        .unwrap_err();
    assert_eq!(create.to_string(), "Failed to create project");

    let update = client
        .update_project(&Project::new("p1", "A", ""))
        .await
        .unwrap_err();
    assert_eq!(update.to_string(), "Failed to update project");

    let delete = client.delete_project("p1").await.unwrap_err();
    assert_eq!(delete.to_string(), "Failed to delete project");

    let get = client.get_project("p1").await.unwrap_err();
    assert_eq!(get.to_string(), "Failed to fetch project");
    assert!(matches!(
        get,
        ApiError::Status { operation: Operation::Get, status } if status.as_u16() == 500
    ));
}

#[tokio::test]
async fn missing_remote_project_is_a_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/projects/nope"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client(&server).get_project("nope").await.unwrap_err();
    assert!(!err.is_not_found());
    assert_eq!(err.to_string(), "Failed to fetch project");
}

#[tokio::test]
async fn undecodable_body_collapses_to_operation_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client(&server).list_projects().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode { operation: Operation::List, .. }));
    assert_eq!(err.to_string(), "Failed to fetch projects");
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    let client = RemoteProjectClient::new(&RemoteClientConfig::new(base_url)).unwrap();

    let err = client.list_projects().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport { operation: Operation::List, .. }));
    assert_eq!(err.to_string(), "Failed to fetch projects");
}

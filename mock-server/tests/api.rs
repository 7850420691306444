use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, hours_ago, CompletedTask, Fixture, ProjectPage, TaskPage};
use tower::ServiceExt;

const TOKEN: &str = "test-token";

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn authed(uri: &str) -> Request<String> {
    Request::builder()
        .uri(uri)
        .header(http::header::AUTHORIZATION, format!("Bearer {TOKEN}"))
        .body(String::new())
        .unwrap()
}

fn completed(id: &str, project_id: &str, completed_at: &str) -> CompletedTask {
    CompletedTask {
        id: id.to_string(),
        project_id: project_id.to_string(),
        content: format!("Task {id}"),
        description: String::new(),
        completed_at: completed_at.to_string(),
        parent_id: None,
    }
}

fn fixture() -> Fixture {
    Fixture::new(TOKEN)
        .project("1", "Inbox")
        .project("2", "Canopy")
        .task(completed("a", "2", "2025-06-02T10:00:00.000000Z"))
        .task(completed("b", "1", "2025-06-02T11:00:00.000000Z"))
        .task(completed("c", "2", "2025-05-20T09:00:00.000000Z"))
        .task(completed("d", "2", "2025-06-07T23:59:59Z"))
}

const WINDOW: &str = "since=2025-06-01T00:00:00Z&until=2025-06-08T00:00:00Z";

// --- auth ---

#[tokio::test]
async fn projects_without_token_returns_401() {
    let resp = app(fixture())
        .oneshot(Request::builder().uri("/projects").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(&body_bytes(resp).await[..], b"Unauthorized");
}

#[tokio::test]
async fn wrong_token_returns_401() {
    let resp = app(fixture())
        .oneshot(
            Request::builder()
                .uri(format!("/tasks/completed/by_completion_date?project_id=2&{WINDOW}"))
                .header(http::header::AUTHORIZATION, "Bearer nope")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

// --- projects ---

#[tokio::test]
async fn projects_are_listed_in_fixture_order() {
    let resp = app(fixture()).oneshot(authed("/projects")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: ProjectPage = body_json(resp).await;
    let names: Vec<_> = page.results.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Inbox", "Canopy"]);
    assert!(page.next_cursor.is_none());
}

#[tokio::test]
async fn projects_empty() {
    let resp = app(Fixture::new(TOKEN))
        .oneshot(authed("/projects"))
        .await
        .unwrap();

    let page: ProjectPage = body_json(resp).await;
    assert!(page.results.is_empty());
}

// --- completed tasks ---

#[tokio::test]
async fn completed_tasks_filtered_by_project_and_window() {
    let resp = app(fixture())
        .oneshot(authed(&format!(
            "/tasks/completed/by_completion_date?project_id=2&{WINDOW}"
        )))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: TaskPage = body_json(resp).await;
    let ids: Vec<_> = page.items.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["a", "d"]);
}

#[tokio::test]
async fn completed_tasks_unknown_project_is_empty() {
    let resp = app(fixture())
        .oneshot(authed(&format!(
            "/tasks/completed/by_completion_date?project_id=99&{WINDOW}"
        )))
        .await
        .unwrap();

    let page: TaskPage = body_json(resp).await;
    assert!(page.items.is_empty());
}

#[tokio::test]
async fn completed_tasks_missing_window_returns_400() {
    let resp = app(fixture())
        .oneshot(authed("/tasks/completed/by_completion_date?project_id=2"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn completed_tasks_malformed_since_returns_400() {
    let resp = app(fixture())
        .oneshot(authed(
            "/tasks/completed/by_completion_date?project_id=2&since=last-week&until=2025-06-08T00:00:00Z",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn demo_fixture_falls_inside_last_week() {
    let since = hours_ago(7 * 24);
    let until = hours_ago(0);
    let resp = app(Fixture::demo(TOKEN))
        .oneshot(authed(&format!(
            "/tasks/completed/by_completion_date?project_id=2&since={since}&until={until}"
        )))
        .await
        .unwrap();

    let page: TaskPage = body_json(resp).await;
    assert_eq!(page.items.len(), 3);
}

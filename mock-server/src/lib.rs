use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use jiff::{tz::TimeZone, SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CompletedTask {
    pub id: String,
    pub project_id: String,
    pub content: String,
    pub description: String,
    /// RFC 3339 timestamp, e.g. `2025-06-03T10:00:00.000000Z`.
    pub completed_at: String,
    pub parent_id: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct ProjectPage {
    pub results: Vec<Project>,
    pub next_cursor: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct TaskPage {
    pub items: Vec<CompletedTask>,
    pub next_cursor: Option<String>,
}

#[derive(Deserialize)]
pub struct CompletedQuery {
    pub project_id: Option<String>,
    pub since: Option<String>,
    pub until: Option<String>,
}

/// Everything the server will answer with, plus the token it accepts.
#[derive(Clone, Debug, Default)]
pub struct Fixture {
    pub token: String,
    pub projects: Vec<Project>,
    pub tasks: Vec<CompletedTask>,
}

impl Fixture {
    pub fn new(token: &str) -> Self {
        Self {
            token: token.to_string(),
            ..Self::default()
        }
    }

    pub fn project(mut self, id: &str, name: &str) -> Self {
        self.projects.push(Project {
            id: id.to_string(),
            name: name.to_string(),
        });
        self
    }

    pub fn task(mut self, task: CompletedTask) -> Self {
        self.tasks.push(task);
        self
    }

    /// Small data set for running the server by hand, completed recently.
    pub fn demo(token: &str) -> Self {
        let task = |id: &str, content: &str, parent: Option<&str>, hours: i64| CompletedTask {
            id: id.to_string(),
            project_id: "2".to_string(),
            content: content.to_string(),
            description: String::new(),
            completed_at: hours_ago(hours),
            parent_id: parent.map(str::to_string),
        };
        let mut release = task("10", "Release 1.2", None, 30);
        release.description = "Tagged and published".to_string();
        Self::new(token)
            .project("1", "Inbox")
            .project("2", "Canopy")
            .task(release)
            .task(task("11", "Update changelog", Some("10"), 29))
            .task(task("12", "Triage issues", None, 4))
    }
}

pub type Db = Arc<Fixture>;

pub fn app(fixture: Fixture) -> Router {
    let db: Db = Arc::new(fixture);
    Router::new()
        .route("/projects", get(list_projects))
        .route(
            "/tasks/completed/by_completion_date",
            get(list_completed_tasks),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener, fixture: Fixture) -> Result<(), std::io::Error> {
    axum::serve(listener, app(fixture)).await
}

/// Serve `fixture` on a random local port from a background thread.
pub fn spawn(fixture: Fixture) -> Result<SocketAddr, std::io::Error> {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    let addr = std_listener.local_addr()?;
    std_listener.set_nonblocking(true)?;

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("mock server runtime");
        rt.block_on(async {
            let listener = TcpListener::from_std(std_listener)?;
            run(listener, fixture).await
        })
        .expect("mock server stopped");
    });

    Ok(addr)
}

type Rejection = (StatusCode, &'static str);

fn authorize(db: &Fixture, headers: &HeaderMap) -> Result<(), Rejection> {
    let expected = format!("Bearer {}", db.token);
    match headers.get(header::AUTHORIZATION) {
        Some(value) if value.as_bytes() == expected.as_bytes() => Ok(()),
        _ => Err((StatusCode::UNAUTHORIZED, "Unauthorized")),
    }
}

async fn list_projects(
    State(db): State<Db>,
    headers: HeaderMap,
) -> Result<Json<ProjectPage>, Rejection> {
    authorize(&db, &headers)?;
    Ok(Json(ProjectPage {
        results: db.projects.clone(),
        next_cursor: None,
    }))
}

async fn list_completed_tasks(
    State(db): State<Db>,
    headers: HeaderMap,
    Query(query): Query<CompletedQuery>,
) -> Result<Json<TaskPage>, Rejection> {
    authorize(&db, &headers)?;
    let (Some(project_id), Some(since), Some(until)) = (query.project_id, query.since, query.until)
    else {
        return Err((StatusCode::BAD_REQUEST, "project_id, since and until are required"));
    };
    let (Ok(since), Ok(until)) = (since.parse::<Timestamp>(), until.parse::<Timestamp>()) else {
        return Err((StatusCode::BAD_REQUEST, "malformed since/until"));
    };

    let items = db
        .tasks
        .iter()
        .filter(|task| task.project_id == project_id)
        .filter(|task| {
            task.completed_at
                .parse::<Timestamp>()
                .is_ok_and(|at| since <= at && at <= until)
        })
        .cloned()
        .collect();
    Ok(Json(TaskPage {
        items,
        next_cursor: None,
    }))
}

/// Wire timestamp `hours` before now, with the microsecond field the real API sends.
pub fn hours_ago(hours: i64) -> String {
    let at = Timestamp::now()
        .checked_sub(SignedDuration::from_hours(hours))
        .unwrap_or(Timestamp::UNIX_EPOCH);
    let seconds = at.to_zoned(TimeZone::UTC).strftime("%Y-%m-%dT%H:%M:%S");
    format!("{seconds}.000000Z")
}

//! Domain DTOs for the Todoist REST API.
//!
//! # Design
//! Only the fields the report needs are modeled; anything else in the JSON is
//! ignored. `completed_at` stays in its wire form because rendering it is
//! best-effort and must not fail decoding.

use serde::{Deserialize, Serialize};

/// A named container for tasks. Names are not unique.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub name: String,
}

/// A completed task as returned by the completed-tasks endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub description: String,
    pub completed_at: String,
    /// Identifier of the parent task; `None` for top-level tasks.
    #[serde(default)]
    pub parent_id: Option<String>,
}

impl Task {
    pub fn is_subtask(&self) -> bool {
        self.parent_id.is_some()
    }
}

/// Envelope of `GET /projects`.
#[derive(Debug, Deserialize)]
pub(crate) struct ProjectPage {
    pub results: Vec<Project>,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// Envelope of `GET /tasks/completed/by_completion_date`.
#[derive(Debug, Deserialize)]
pub(crate) struct TaskPage {
    pub items: Vec<Task>,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

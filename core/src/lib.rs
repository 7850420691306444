//! Read-only reporting client for the Todoist REST API.
//!
//! # Overview
//! Resolves a project by name, fetches the tasks completed in a trailing
//! window and renders them as an indented report. Nothing here reads the
//! environment, prints, or exits; that is left to the binary.
//!
//! # Design
//! - `TodoistClient` owns the token, base URL and a `Transport`. Requests are
//!   built and responses checked as plain data around one `execute` call.
//! - `UreqTransport` is the blocking production transport; tests swap in
//!   in-memory transports or hit the mock server.
//! - Formatting is pure: `format_task` takes the previous task explicitly.

pub mod client;
pub mod error;
pub mod format;
pub mod http;
pub mod projects;
pub mod report;
pub mod tasks;
pub mod transport;
pub mod types;

#[cfg(test)]
mod testing;

pub use client::{TodoistClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use format::{format_task, format_task_in, format_tasks};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use report::{render_project_not_found, render_report};
pub use tasks::{CompletionWindow, DEFAULT_WINDOW_DAYS};
pub use transport::UreqTransport;
pub use types::{Project, Task};

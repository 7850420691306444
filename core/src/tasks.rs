//! Completed-task retrieval for one project over a time window.
//!
//! # Design
//! Only the first page of results is read. When the service signals more
//! pages through `next_cursor`, a warning is logged instead of silently
//! dropping the remainder. The returned order is the service's order; the
//! formatter relies on subtasks following their parent.

use jiff::{civil::Date, tz::TimeZone, SignedDuration, Timestamp};
use log::{debug, warn};

use crate::client::TodoistClient;
use crate::error::Result;
use crate::http::Transport;
use crate::types::{Task, TaskPage};

/// Endpoint listing tasks by completion date.
pub const COMPLETED_TASKS_ENDPOINT: &str = "tasks/completed/by_completion_date";

/// Length of the default report window.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// The `[since, until]` interval of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionWindow {
    pub since: Timestamp,
    pub until: Timestamp,
    /// Set when the window is "the last N days ending now"; `None` for an
    /// explicit range.
    pub trailing_days: Option<u32>,
}

impl CompletionWindow {
    /// Explicit window between two instants.
    pub fn new(since: Timestamp, until: Timestamp) -> Self {
        Self {
            since,
            until,
            trailing_days: None,
        }
    }

    /// Window ending at `now` and starting exactly `days * 24h` earlier.
    pub fn trailing_days(now: Timestamp, days: u32) -> Self {
        let span = SignedDuration::from_hours(i64::from(days) * 24);
        // Only overflows for windows reaching before year -9999.
        let since = now.checked_sub(span).unwrap_or(Timestamp::MIN);
        Self {
            since,
            until: now,
            trailing_days: Some(days),
        }
    }

    /// The default one-week window ending now.
    pub fn last_week() -> Self {
        Self::trailing_days(Timestamp::now(), DEFAULT_WINDOW_DAYS)
    }

    /// Whole calendar days in `tz`, from the start of `since` through the
    /// last second of `until`.
    pub fn between_dates(since: Date, until: Date, tz: &TimeZone) -> std::result::Result<Self, jiff::Error> {
        let start = since.to_zoned(tz.clone())?.timestamp();
        let end = until
            .tomorrow()?
            .to_zoned(tz.clone())?
            .timestamp()
            .checked_sub(SignedDuration::from_secs(1))?;
        Ok(Self::new(start, end))
    }
}

/// Render `ts` as `YYYY-MM-DDTHH:MM:SSZ` in UTC, dropping fractional seconds.
pub fn to_wire(ts: Timestamp) -> String {
    ts.to_zoned(TimeZone::UTC).strftime(WIRE_FORMAT).to_string()
}

impl<T: Transport> TodoistClient<T> {
    /// Tasks of `project_id` completed between `since` and now.
    pub fn get_completed_tasks(&self, project_id: &str, since: Timestamp) -> Result<Vec<Task>> {
        let window = CompletionWindow::new(since, Timestamp::now());
        self.get_completed_tasks_in(project_id, &window)
    }

    /// Tasks of `project_id` completed inside `window`.
    pub fn get_completed_tasks_in(
        &self,
        project_id: &str,
        window: &CompletionWindow,
    ) -> Result<Vec<Task>> {
        let since = to_wire(window.since);
        let until = to_wire(window.until);
        debug!("fetching tasks of project {project_id} completed in [{since}, {until}]");

        let page: TaskPage = self.get_json(
            COMPLETED_TASKS_ENDPOINT,
            &[
                ("project_id", project_id),
                ("since", since.as_str()),
                ("until", until.as_str()),
            ],
            "tasks",
        )?;
        if let Some(cursor) = page.next_cursor {
            warn!(
                "completed tasks are paginated (next_cursor={cursor}); only the first {} were read",
                page.items.len()
            );
        }
        Ok(page.items)
    }
}

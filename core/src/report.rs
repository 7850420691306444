//! Full report text, ready to be written to stdout as-is.

use jiff::{tz::TimeZone, Timestamp};

use crate::format::format_tasks;
use crate::tasks::CompletionWindow;
use crate::types::{Project, Task};

const SEPARATOR_WIDTH: usize = 56;

/// Render the completed-task report for `project_name` over `window`.
pub fn render_report(
    project_name: &str,
    window: &CompletionWindow,
    tasks: &[Task],
    tz: &TimeZone,
) -> String {
    let range = format!(
        "({} to {})",
        local_date(window.since, tz),
        local_date(window.until, tz)
    );
    if tasks.is_empty() {
        return match window.trailing_days {
            Some(7) => "No completed tasks found in the last week.\n".to_string(),
            Some(1) => "No completed tasks found in the last day.\n".to_string(),
            Some(n) => format!("No completed tasks found in the last {n} days.\n"),
            None => format!("No completed tasks found {range}.\n"),
        };
    }

    let mut out = format!("\n📋 Completed Tasks in #{project_name} {range}\n");
    out.push_str(&"=".repeat(SEPARATOR_WIDTH));
    out.push('\n');
    out.push_str(&format!("Total completed: {}\n\n", tasks.len()));
    for block in format_tasks(tz, tasks) {
        out.push_str(&block);
        out.push('\n');
    }
    out
}

/// Remediation text for a project name that matched nothing.
pub fn render_project_not_found(name: &str, available: &[Project]) -> String {
    let mut out = format!("Error: Could not find project named '{name}'\n");
    out.push_str("Available projects:\n");
    for project in available {
        out.push_str(&format!("  - {}\n", project.name));
    }
    out
}

fn local_date(ts: Timestamp, tz: &TimeZone) -> String {
    ts.to_zoned(tz.clone()).strftime("%Y-%m-%d").to_string()
}

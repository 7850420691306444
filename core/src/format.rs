//! Rendering of completed tasks into indented report blocks.
//!
//! # Design
//! Tasks arrive as a flat list in which subtasks follow their parent. The
//! grouping is rebuilt from consecutive pairs only: the one piece of history
//! that matters is whether the previous task was a subtask, in which case a
//! blank line closes its group before the next top-level task. The previous
//! task is passed in explicitly, so every call is a pure function.

use jiff::{tz::TimeZone, Timestamp};

use crate::types::Task;

const TOP_LEVEL_MARKER: &str = "* ";
const SUBTASK_MARKER: &str = "  - ";
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Shown when `completed_at` cannot be parsed.
pub const ZERO_TIMESTAMP: &str = "0001-01-01 00:00:00";

/// Format `current` in the system time zone. `previous` is the task rendered
/// just before it, or `None` for the first task of a report.
pub fn format_task(previous: Option<&Task>, current: &Task) -> String {
    format_task_in(&TimeZone::system(), previous, current)
}

/// Format `current`, displaying its completion time in `tz`.
pub fn format_task_in(tz: &TimeZone, previous: Option<&Task>, current: &Task) -> String {
    let marker = marker(current);
    let mut block = String::new();

    if previous.is_some_and(Task::is_subtask) && !current.is_subtask() {
        block.push('\n');
    }
    block.push_str(&format!(
        "{marker}{} (completed: {})",
        current.content,
        local_time(&current.completed_at, tz)
    ));

    // Trailing whitespace of the description is dropped; the block always
    // ends with exactly one newline.
    let description = current.description.trim_end();
    if !description.is_empty() {
        let pad = " ".repeat(marker.len());
        block.push('\n');
        for line in description.lines() {
            if !line.trim().is_empty() {
                block.push_str(&pad);
            }
            block.push_str(line);
            block.push('\n');
        }
    }

    block
}

/// Format every task in order, threading the previous task through.
pub fn format_tasks(tz: &TimeZone, tasks: &[Task]) -> Vec<String> {
    tasks
        .iter()
        .scan(None, |previous: &mut Option<&Task>, task| {
            let block = format_task_in(tz, *previous, task);
            *previous = Some(task);
            Some(block)
        })
        .collect()
}

fn marker(task: &Task) -> &'static str {
    if task.is_subtask() {
        SUBTASK_MARKER
    } else {
        TOP_LEVEL_MARKER
    }
}

/// Best effort: an unparseable wire timestamp renders as the zero time.
fn local_time(raw: &str, tz: &TimeZone) -> String {
    match raw.parse::<Timestamp>() {
        Ok(ts) => ts.to_zoned(tz.clone()).strftime(DISPLAY_FORMAT).to_string(),
        Err(_) => ZERO_TIMESTAMP.to_string(),
    }
}

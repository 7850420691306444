//! Wires project lookup, task retrieval and rendering into one report run.

use std::io::Write;

use anyhow::{bail, Context, Result};
use jiff::{civil::Date, tz::TimeZone, Span, Timestamp};
use log::info;
use noteist_core::{
    render_project_not_found, render_report, CompletionWindow, TodoistClient, Transport,
};

/// How a run ended when no error occurred.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Reported,
    ProjectNotFound,
}

/// Pick the report window from the command line.
///
/// Without dates the window is the trailing `days` ending at `now`. With
/// dates it spans whole local days: `until` defaults to today and `since` to
/// `days` calendar days ending on `until`.
pub fn resolve_window(
    days: u32,
    since: Option<Date>,
    until: Option<Date>,
    now: Timestamp,
    tz: &TimeZone,
) -> Result<CompletionWindow> {
    if since.is_none() && until.is_none() {
        return Ok(CompletionWindow::trailing_days(now, days));
    }

    let until = match until {
        Some(until) => until,
        None => now.to_zoned(tz.clone()).date(),
    };
    let since = match since {
        Some(since) => since,
        None => until.checked_sub(Span::new().days(i64::from(days) - 1))?,
    };
    if since > until {
        bail!("--since {since} is after --until {until}");
    }
    CompletionWindow::between_dates(since, until, tz).context("building the report window")
}

pub struct Cli<T: Transport> {
    client: TodoistClient<T>,
    tz: TimeZone,
}

impl<T: Transport> Cli<T> {
    pub fn new(client: TodoistClient<T>, tz: TimeZone) -> Self {
        Self { client, tz }
    }

    /// Resolve `project_name`, fetch its tasks completed inside `window` and
    /// write the report to `out`.
    pub fn report(
        &self,
        project_name: &str,
        window: &CompletionWindow,
        out: &mut impl Write,
    ) -> Result<Outcome> {
        let Some(project) = self
            .client
            .find_project_by_name(project_name)
            .context("fetching projects")?
        else {
            let available = self.client.list_projects().context("fetching projects")?;
            out.write_all(render_project_not_found(project_name, &available).as_bytes())?;
            return Ok(Outcome::ProjectNotFound);
        };

        let tasks = self
            .client
            .get_completed_tasks_in(&project.id, window)
            .context("fetching completed tasks")?;
        info!("{} completed tasks in {}", tasks.len(), project.name);

        out.write_all(render_report(&project.name, window, &tasks, &self.tz).as_bytes())?;
        out.flush()?;
        Ok(Outcome::Reported)
    }
}

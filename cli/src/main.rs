//! noteist: weekly report of completed Todoist tasks.
//!
//! The only place that prints errors or picks the exit code.

mod args;
mod cli;

use std::io;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{anyhow, Result};
use args::Args;
use clap::Parser;
use cli::{resolve_window, Cli, Outcome};
use jiff::{tz::TimeZone, Timestamp};
use log::debug;
use noteist_core::{TodoistClient, UreqTransport};

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.debug);

    match run(args) {
        Ok(Outcome::Reported) => ExitCode::SUCCESS,
        Ok(Outcome::ProjectNotFound) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn run(args: Args) -> Result<Outcome> {
    let token = args
        .token
        .filter(|token| !token.trim().is_empty())
        .ok_or_else(|| anyhow!("TODOIST_API_TOKEN environment variable is not set"))?;

    let tz = TimeZone::system();
    let window = resolve_window(args.days, args.since, args.until, Timestamp::now(), &tz)?;

    let transport = UreqTransport::with_timeout(args.timeout.map(Duration::from_secs));
    let client = TodoistClient::with_transport(token, &args.base_url, transport);
    debug!("using {client:?}");

    let mut stdout = io::stdout().lock();
    Cli::new(client, tz).report(&args.project, &window, &mut stdout)
}

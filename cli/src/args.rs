use clap::Parser;
use jiff::civil::Date;
use noteist_core::{DEFAULT_BASE_URL, DEFAULT_WINDOW_DAYS};

/// Report the tasks completed in a Todoist project over a trailing window.
///
/// Read-only: the tool lists projects and completed tasks and never changes
/// anything on the Todoist side.
#[derive(Parser)]
#[command(version, about, name = "noteist")]
pub struct Args {
    /// Todoist API token
    #[arg(long, env = "TODOIST_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Project name, matched case-insensitively
    #[arg(long, env = "NOTEIST_PROJECT", default_value = "Canopy")]
    pub project: String,

    /// Length of the report window in days, ending now. With only --until,
    /// the number of days ending on that date
    #[arg(long, default_value_t = DEFAULT_WINDOW_DAYS, value_parser = clap::value_parser!(u32).range(1..))]
    pub days: u32,

    /// First day of the report (YYYY-MM-DD, local time)
    #[arg(long, value_name = "DATE")]
    pub since: Option<Date>,

    /// Last day of the report, included in full (YYYY-MM-DD, local time).
    /// Defaults to today when --since is given
    #[arg(long, value_name = "DATE")]
    pub until: Option<Date>,

    /// Give up on a request after this many seconds. No timeout by default
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// API endpoint, overridable for testing against a mock server
    #[arg(long, env = "NOTEIST_BASE_URL", default_value = DEFAULT_BASE_URL, hide = true)]
    pub base_url: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["noteist", "--token", "t"]).unwrap();
        assert_eq!(args.token.as_deref(), Some("t"));
        assert_eq!(args.days, 7);
        assert!(args.timeout.is_none());
        assert!(args.since.is_none());
        assert!(args.until.is_none());
        assert!(!args.debug);
    }

    #[test]
    fn dates_parse_as_calendar_days() {
        let args =
            Args::try_parse_from(["noteist", "--since", "2025-06-01", "--until", "2025-06-07"])
                .unwrap();
        assert_eq!(args.since, Some(jiff::civil::date(2025, 6, 1)));
        assert_eq!(args.until, Some(jiff::civil::date(2025, 6, 7)));
    }

    #[test]
    fn malformed_date_is_rejected() {
        assert!(Args::try_parse_from(["noteist", "--since", "06/01/2025"]).is_err());
    }

    #[test]
    fn zero_days_is_rejected() {
        assert!(Args::try_parse_from(["noteist", "--days", "0"]).is_err());
    }

    #[test]
    fn clap_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}

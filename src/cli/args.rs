//! CLI argument definitions
//!
//! Every option has a default matching the plain, flag-less run; credentials
//! come from the environment.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::app::RunOptions;
use crate::consts::{DEFAULT_API_URL, DEFAULT_OUTPUT};
use crate::render::PanelSize;

#[derive(Parser)]
#[command(name = "asana-dashboard")]
#[command(about = "Per-assignee productivity dashboard for every project in an Asana workspace", version)]
pub(crate) struct Cli {
    /// Asana personal access token
    #[arg(long, env = "ASANA_PERSONAL_ACCESS_TOKEN", hide_env_values = true)]
    pub(crate) token: Option<String>,

    /// Workspace whose projects are analyzed
    #[arg(long, env = "ASANA_WORKSPACE_ID")]
    pub(crate) workspace: Option<String>,

    /// Base URL of the Asana REST API
    #[arg(long, env = "ASANA_API_URL", default_value = DEFAULT_API_URL)]
    pub(crate) api_url: String,

    /// Path of the dashboard PNG
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub(crate) output: PathBuf,

    /// Panels per dashboard row
    #[arg(long, default_value_t = 2)]
    pub(crate) columns: usize,

    /// Resolution of the composed dashboard
    #[arg(long, default_value_t = 180.0)]
    pub(crate) dpi: f64,

    /// Resolution of each 20x12 inch project panel
    #[arg(long, default_value_t = 100.0)]
    pub(crate) panel_dpi: f64,

    /// HTTP timeout per API call, in seconds
    #[arg(long, default_value_t = 30)]
    pub(crate) timeout: u64,

    /// Do not print per-project summary tables
    #[arg(short, long)]
    pub(crate) quiet: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long)]
    pub(crate) debug: bool,
}

impl Cli {
    pub(crate) fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    pub(crate) fn run_options(&self) -> RunOptions {
        RunOptions {
            // Not validated: an empty id surfaces as an API error.
            workspace_id: self.workspace.clone().unwrap_or_default(),
            output: self.output.clone(),
            columns: self.columns,
            dashboard_dpi: self.dpi,
            panel_size: PanelSize::with_dpi(self.panel_dpi),
            print_tables: !self.quiet,
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_plain_run() {
        let cli = Cli::try_parse_from(["asana-dashboard", "--workspace", "42"]).unwrap();
        assert_eq!(cli.api_url, DEFAULT_API_URL);
        assert_eq!(cli.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(cli.columns, 2);
        assert_eq!(cli.timeout(), Duration::from_secs(30));

        let options = cli.run_options();
        assert_eq!(options.workspace_id, "42");
        assert_eq!(options.dashboard_dpi, 180.0);
        assert_eq!(options.panel_size, PanelSize::default());
        assert!(options.print_tables);
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "asana-dashboard",
            "--workspace",
            "7",
            "-o",
            "out/board.png",
            "--columns",
            "3",
            "--dpi",
            "90",
            "--panel-dpi",
            "50",
            "-q",
        ])
        .unwrap();
        let options = cli.run_options();
        assert_eq!(options.output, PathBuf::from("out/board.png"));
        assert_eq!(options.columns, 3);
        assert_eq!(options.dashboard_dpi, 90.0);
        assert_eq!(options.panel_size.pixels(), (1000, 600));
        assert!(!options.print_tables);
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

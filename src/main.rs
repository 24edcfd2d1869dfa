mod app;
mod cli;
mod consts;
mod core;
mod error;
mod output;
mod render;
mod source;

use std::io::IsTerminal;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cli::Cli;
use source::AsanaClient;

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn try_main(cli: &Cli) -> anyhow::Result<()> {
    let client = AsanaClient::new(&cli.api_url, cli.token.clone(), cli.timeout());
    let options = cli.run_options();

    let report = app::run(&client, &options)
        .with_context(|| format!("writing dashboard to {}", options.output.display()))?;

    if !report.written {
        info!("No project produced a panel");
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match try_main(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Dashboard run failed: {e:?}");
            ExitCode::FAILURE
        }
    }
}

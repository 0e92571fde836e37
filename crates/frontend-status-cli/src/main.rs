use anyhow::Result;
use clap::Parser;
use frontend_status_cli::cli::args::{Cli, Command};
use frontend_status_cli::cli::{check_cmd, groups_cmd};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // output helpers read these instead of threading flags through
    if cli.json {
        std::env::set_var("FRONTEND_STATUS_JSON", "1");
    }
    if cli.quiet {
        std::env::set_var("FRONTEND_STATUS_QUIET", "1");
    }
    if cli.verbose {
        std::env::set_var("FRONTEND_STATUS_VERBOSE", "1");
    }
    if cli.no_color {
        std::env::set_var("FRONTEND_STATUS_NO_COLOR", "1");
    }

    init_tracing(cli.verbose)?;

    match &cli.command {
        Command::Groups(args) => groups_cmd::run(args).await,
        Command::Check(args) => check_cmd::run(args).await,
    }
}

/// Log to stderr so group names on stdout stay clean.
fn init_tracing(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(format!("frontend_status={level}").parse()?)
        .add_directive(format!("frontend_status_cli={level}").parse()?);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

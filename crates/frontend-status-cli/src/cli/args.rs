//! Command-line arguments.

use clap::{Args, Parser, Subcommand};
use frontend_status::config::{parse_file_name, parse_timeout};
use frontend_status::{Location, MissingNamePolicy, StatusConfig, StatusError};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "frontend-status",
    version,
    about = "Read group names from a glideinWMS frontend status document"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Print machine-readable JSON to stdout.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress decorations on stderr.
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log loading details.
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the frontend's group names, one per line.
    Groups(SourceArgs),
    /// Report the shape of the status document.
    Check(SourceArgs),
}

/// Where the status document lives. Flags override `FRONTEND_STATUS_*`
/// environment variables.
#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
    /// Monitoring page URL; frontend_status.xml is resolved against it.
    #[arg(long, conflicts_with_all = ["monitor_dir", "file"])]
    pub url: Option<String>,

    /// Frontend monitor directory containing frontend_status.xml.
    #[arg(long, conflicts_with = "file")]
    pub monitor_dir: Option<PathBuf>,

    /// Explicit path to a status document.
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Fail on a group without a name attribute instead of skipping it.
    #[arg(long)]
    pub strict: bool,

    /// HTTP request timeout in seconds.
    #[arg(long)]
    pub timeout: Option<String>,

    /// Status file name resolved against --url or --monitor-dir.
    #[arg(long, conflicts_with = "file")]
    pub file_name: Option<String>,
}

impl SourceArgs {
    /// Apply these flags on top of `base`.
    pub fn apply(&self, mut base: StatusConfig) -> Result<StatusConfig, StatusError> {
        if let Some(url) = &self.url {
            base.location = Location::Url(url.clone());
        } else if let Some(dir) = &self.monitor_dir {
            base.location = Location::MonitorDir(dir.clone());
        } else if let Some(file) = &self.file {
            base.location = Location::File(file.clone());
        }

        if self.strict {
            base.policy = MissingNamePolicy::Fail;
        }

        if let Some(raw) = &self.timeout {
            base.timeout = Some(parse_timeout(raw)?);
        }

        if let Some(name) = &self.file_name {
            base.file_name = parse_file_name(name)?;
        }

        Ok(base)
    }

    /// Environment configuration with these flags applied.
    pub fn resolve(&self) -> Result<StatusConfig, StatusError> {
        self.apply(StatusConfig::from_env()?)
    }
}

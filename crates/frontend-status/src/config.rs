//! Where to load the status document from, and how strictly to extract.
//!
//! Values come from defaults, then `FRONTEND_STATUS_*` environment
//! variables, then explicit overrides (the CLI flags).

use crate::error::StatusError;
use crate::extract::MissingNamePolicy;
use crate::loader::{FileStatusSource, HttpStatusSource, StatusSource, STATUS_FILE_NAME};
use std::path::PathBuf;
use std::time::Duration;

pub const ENV_URL: &str = "FRONTEND_STATUS_URL";
pub const ENV_MONITOR_DIR: &str = "FRONTEND_STATUS_MONITOR_DIR";
pub const ENV_FILE: &str = "FRONTEND_STATUS_FILE";
pub const ENV_STRICT: &str = "FRONTEND_STATUS_STRICT";
pub const ENV_TIMEOUT: &str = "FRONTEND_STATUS_TIMEOUT";
pub const ENV_FILE_NAME: &str = "FRONTEND_STATUS_FILE_NAME";

/// Location of the status document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// Page URL the status file is resolved against.
    Url(String),
    /// Frontend monitor directory containing the status file.
    MonitorDir(PathBuf),
    /// Explicit path to a status file.
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusConfig {
    pub location: Location,
    pub policy: MissingNamePolicy,
    /// Request timeout for HTTP sources. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// File name resolved against a page URL or monitor directory.
    pub file_name: String,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            location: Location::MonitorDir(PathBuf::from(".")),
            policy: MissingNamePolicy::Skip,
            timeout: None,
            file_name: STATUS_FILE_NAME.to_string(),
        }
    }
}

impl StatusConfig {
    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Result<Self, StatusError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with values from `lookup`.
    ///
    /// Location variables are checked in the order FILE, MONITOR_DIR, URL;
    /// the first one set wins. `FRONTEND_STATUS_STRICT` enables the strict
    /// policy when set to anything. `FRONTEND_STATUS_TIMEOUT` is in seconds.
    /// `FRONTEND_STATUS_FILE_NAME` replaces the status file name used with a
    /// page URL or monitor directory; it has no effect on an explicit file.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, StatusError> {
        let mut config = Self::default();

        if let Some(file) = lookup(ENV_FILE) {
            config.location = Location::File(PathBuf::from(file));
        } else if let Some(dir) = lookup(ENV_MONITOR_DIR) {
            config.location = Location::MonitorDir(PathBuf::from(dir));
        } else if let Some(url) = lookup(ENV_URL) {
            config.location = Location::Url(url);
        }

        if lookup(ENV_STRICT).is_some() {
            config.policy = MissingNamePolicy::Fail;
        }

        if let Some(raw) = lookup(ENV_TIMEOUT) {
            config.timeout = Some(parse_timeout(&raw)?);
        }

        if let Some(name) = lookup(ENV_FILE_NAME) {
            config.file_name = parse_file_name(&name)?;
        }

        Ok(config)
    }

    /// Build the source this configuration points at.
    pub fn source(&self) -> Result<Box<dyn StatusSource>, StatusError> {
        let source: Box<dyn StatusSource> = match &self.location {
            Location::Url(url) => {
                let mut http = HttpStatusSource::new(url)?.with_file_name(&self.file_name);
                if let Some(timeout) = self.timeout {
                    http = http.with_timeout(timeout);
                }
                Box::new(http)
            }
            Location::MonitorDir(dir) => {
                Box::new(FileStatusSource::from_path(dir.join(&self.file_name)))
            }
            Location::File(path) => Box::new(FileStatusSource::from_path(path.clone())),
        };
        Ok(source)
    }
}

/// Parse a timeout in whole or fractional seconds.
pub fn parse_timeout(raw: &str) -> Result<Duration, StatusError> {
    let secs: f64 = raw
        .trim()
        .parse()
        .map_err(|_| StatusError::Config(format!("timeout {raw:?} is not a number of seconds")))?;
    if !secs.is_finite() || secs <= 0.0 {
        return Err(StatusError::Config(format!(
            "timeout {raw:?} must be a positive number of seconds"
        )));
    }
    Duration::try_from_secs_f64(secs)
        .map_err(|e| StatusError::Config(format!("timeout {raw:?}: {e}")))
}

/// Validate a status file name: a single non-empty path segment.
pub fn parse_file_name(raw: &str) -> Result<String, StatusError> {
    let name = raw.trim();
    if name.is_empty() || name.contains('/') || name.contains('\\') {
        return Err(StatusError::Config(format!(
            "status file name {raw:?} must be a single file name"
        )));
    }
    Ok(name.to_string())
}

//! Client for the glideinWMS frontend status document.
//!
//! The frontend publishes `frontend_status.xml` next to its monitoring
//! page. This crate loads that document, parses it into a typed tree, and
//! extracts the names of the frontend's groups:
//!
//! ```no_run
//! use frontend_status::loader::HttpStatusSource;
//! use frontend_status::MissingNamePolicy;
//!
//! # async fn demo() -> Result<(), frontend_status::StatusError> {
//! let source = HttpStatusSource::new("http://frontend.example.org/vofrontend/monitor/")?;
//! let groups = frontend_status::load_groups(&source, MissingNamePolicy::Skip).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod dom;
pub mod error;
pub mod extract;
pub mod loader;

pub use config::{Location, StatusConfig};
pub use error::StatusError;
pub use extract::{frontend_groups, frontend_groups_with, inspect, GroupReport, MissingNamePolicy};
pub use loader::StatusSource;

use tracing::debug;

/// Load the document from `source` and extract its group names.
///
/// Extraction starts only once the whole document has been loaded and
/// parsed.
pub async fn load_groups(
    source: &dyn StatusSource,
    policy: MissingNamePolicy,
) -> Result<Vec<String>, StatusError> {
    let document = source.load().await?;
    let groups = frontend_groups_with(document.root(), policy)?;
    debug!("{} groups from {}", groups.len(), source.describe());
    Ok(groups)
}

/// Blocking form of [`load_groups`] for callers without an async runtime.
///
/// Runs on a private current-thread runtime. Panics if called from within
/// a tokio runtime.
pub fn load_groups_blocking(
    source: &dyn StatusSource,
    policy: MissingNamePolicy,
) -> Result<Vec<String>, StatusError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| StatusError::io("<tokio runtime>", e))?;
    runtime.block_on(load_groups(source, policy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{FileStatusSource, StaticStatusSource, STATUS_FILE_NAME};

    const STATUS_XML: &str = r#"<?xml version="1.0"?>
<frontend>
  <groups>
    <group name="main"/>
    <group name="cms"/>
    <group/>
  </groups>
</frontend>
"#;

    #[tokio::test]
    async fn test_load_groups() {
        let source = StaticStatusSource::new(STATUS_XML);
        let groups = load_groups(&source, MissingNamePolicy::Skip).await.unwrap();
        assert_eq!(groups, vec!["main", "cms"]);
    }

    #[tokio::test]
    async fn test_load_groups_strict() {
        let source = StaticStatusSource::new(STATUS_XML);
        let err = load_groups(&source, MissingNamePolicy::Fail)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StatusError::MissingGroupName {
                container: 0,
                position: 2
            }
        ));
    }

    #[tokio::test]
    async fn test_load_error_stops_before_extraction() {
        let source = StaticStatusSource::new("<frontend><groups>");
        assert!(matches!(
            load_groups(&source, MissingNamePolicy::Skip).await.unwrap_err(),
            StatusError::Parse { .. }
        ));
    }

    #[test]
    fn test_load_groups_blocking_from_monitor_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(STATUS_FILE_NAME), STATUS_XML).unwrap();

        let source = FileStatusSource::new(dir.path());
        let groups = load_groups_blocking(&source, MissingNamePolicy::Skip).unwrap();
        assert_eq!(groups, vec!["main", "cms"]);
    }

    #[test]
    fn test_load_groups_through_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(STATUS_FILE_NAME), STATUS_XML).unwrap();

        let config = StatusConfig {
            location: Location::MonitorDir(dir.path().to_path_buf()),
            ..StatusConfig::default()
        };
        let source = config.source().unwrap();
        let groups = load_groups_blocking(source.as_ref(), config.policy).unwrap();
        assert_eq!(groups.len(), 2);
    }
}

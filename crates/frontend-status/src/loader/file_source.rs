//! Local sources: the frontend's monitor directory, an explicit file, or
//! bytes already in memory.

use super::{StatusSource, STATUS_FILE_NAME};
use crate::dom::{self, Document};
use crate::error::StatusError;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads the status document from disk.
#[derive(Debug, Clone)]
pub struct FileStatusSource {
    path: PathBuf,
}

impl FileStatusSource {
    /// Read `frontend_status.xml` inside the frontend's monitor directory
    /// (`<work_dir>/monitor`).
    pub fn new(monitor_dir: impl AsRef<Path>) -> Self {
        Self {
            path: monitor_dir.as_ref().join(STATUS_FILE_NAME),
        }
    }

    /// Read an explicit file.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl StatusSource for FileStatusSource {
    async fn load(&self) -> Result<Document, StatusError> {
        let data = tokio::fs::read(&self.path)
            .await
            .map_err(|e| StatusError::io(&self.path, e))?;
        debug!("read {} bytes from {}", data.len(), self.path.display());
        dom::parse(&data)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Serves a fixed document, parsing it again on every load.
#[derive(Debug, Clone)]
pub struct StaticStatusSource {
    xml: Vec<u8>,
}

impl StaticStatusSource {
    pub fn new(xml: impl Into<Vec<u8>>) -> Self {
        Self { xml: xml.into() }
    }
}

#[async_trait]
impl StatusSource for StaticStatusSource {
    async fn load(&self) -> Result<Document, StatusError> {
        dom::parse(&self.xml)
    }

    fn describe(&self) -> String {
        format!("in-memory document ({} bytes)", self.xml.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_from_monitor_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(STATUS_FILE_NAME),
            r#"<frontend><groups><group name="main"/></groups></frontend>"#,
        )
        .unwrap();

        let src = FileStatusSource::new(dir.path());
        assert_eq!(src.path(), dir.path().join("frontend_status.xml"));

        let doc = src.load().await.unwrap();
        assert_eq!(doc.root().name(), "frontend");
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let src = FileStatusSource::new(dir.path());

        match src.load().await.unwrap_err() {
            StatusError::Io { path, source } => {
                assert_eq!(path, dir.path().join(STATUS_FILE_NAME));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.xml");
        std::fs::write(&path, "<frontend/>").unwrap();

        let src = FileStatusSource::from_path(&path);
        assert_eq!(src.describe(), path.display().to_string());
        assert!(src.load().await.is_ok());
    }

    #[tokio::test]
    async fn test_static_source_parses_each_time() {
        let src = StaticStatusSource::new("<frontend><groups/></frontend>");
        let a = src.load().await.unwrap();
        let b = src.load().await.unwrap();
        assert_eq!(a, b);
        assert!(src.describe().contains("30 bytes"));
    }
}

//! Status document loading.
//!
//! A [`StatusSource`] produces a freshly parsed [`Document`] on every call
//! to [`StatusSource::load`]. Nothing is cached between calls.

pub mod file_source;
pub mod http_source;

pub use file_source::{FileStatusSource, StaticStatusSource};
pub use http_source::HttpStatusSource;

use crate::dom::Document;
use crate::error::StatusError;
use async_trait::async_trait;

/// File name the frontend writes its status under.
pub const STATUS_FILE_NAME: &str = "frontend_status.xml";

/// Somewhere the frontend status document can be loaded from.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetch and parse the document. The returned document is complete;
    /// nothing is read lazily afterwards.
    async fn load(&self) -> Result<Document, StatusError>;

    /// Human-readable location, for logs and CLI output.
    fn describe(&self) -> String;
}

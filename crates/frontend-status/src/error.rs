//! Error type shared by loading, parsing, and extraction.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong between asking for the status document and
/// getting group names back.
///
/// A document without `groups` or `group` elements is not an error; it
/// yields an empty list.
#[derive(Debug, Error)]
pub enum StatusError {
    /// The page URL is not a valid URL, or the status file cannot be
    /// resolved against it.
    #[error("invalid status url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The request never produced a complete response.
    #[error("failed to fetch status document: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("status document {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// Reading the document from disk failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The body is not well-formed XML.
    #[error("malformed status document at byte {position}: {message}")]
    Parse { position: u64, message: String },

    /// The body parsed but contains no element at all.
    #[error("status document has no root element")]
    NoRoot,

    /// A `group` element without a `name` attribute, under the strict policy.
    #[error("group {position} in groups container {container} has no name attribute")]
    MissingGroupName { container: usize, position: usize },

    /// A configuration value could not be interpreted.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl StatusError {
    pub(crate) fn parse(position: u64, message: impl std::fmt::Display) -> Self {
        Self::Parse {
            position,
            message: message.to_string(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

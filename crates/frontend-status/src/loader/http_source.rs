//! Load the status document over HTTP, relative to a page location.

use super::{StatusSource, STATUS_FILE_NAME};
use crate::dom::{self, Document};
use crate::error::StatusError;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Fetches the status document the way the monitoring page does: a plain
/// GET for the file name resolved against the page URL.
#[derive(Debug, Clone)]
pub struct HttpStatusSource {
    client: reqwest::Client,
    page_url: Url,
    file_name: String,
    timeout: Option<Duration>,
}

impl HttpStatusSource {
    /// Create a source for the page at `page_url`.
    ///
    /// `http://host/monitor/index.html` and `http://host/monitor/` both load
    /// `http://host/monitor/frontend_status.xml`. Without a trailing slash the
    /// last path segment is treated as a page and replaced.
    pub fn new(page_url: &str) -> Result<Self, StatusError> {
        let page_url = Url::parse(page_url).map_err(|source| StatusError::InvalidUrl {
            url: page_url.to_string(),
            source,
        })?;
        Ok(Self {
            client: reqwest::Client::builder().build()?,
            page_url,
            file_name: STATUS_FILE_NAME.to_string(),
            timeout: None,
        })
    }

    /// Load a different file relative to the same page.
    pub fn with_file_name(mut self, file_name: &str) -> Self {
        self.file_name = file_name.to_string();
        self
    }

    /// Bound the whole request. There is no timeout unless one is set.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The absolute URL that [`load`](StatusSource::load) requests.
    pub fn status_url(&self) -> Result<Url, StatusError> {
        self.page_url
            .join(&self.file_name)
            .map_err(|source| StatusError::InvalidUrl {
                url: self.file_name.clone(),
                source,
            })
    }
}

#[async_trait]
impl StatusSource for HttpStatusSource {
    async fn load(&self) -> Result<Document, StatusError> {
        let url = self.status_url()?;

        debug!("fetching status document from {url}");
        let mut request = self.client.get(url.as_str());
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }
        let resp = request.send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(StatusError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = resp.bytes().await?;
        debug!("received {} bytes from {url}", body.len());
        dom::parse(&body)
    }

    fn describe(&self) -> String {
        match self.status_url() {
            Ok(url) => url.to_string(),
            Err(_) => format!("{} relative to {}", self.file_name, self.page_url),
        }
    }
}

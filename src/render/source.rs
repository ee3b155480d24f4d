//! Where the renderer reads the skills document from.

use std::path::PathBuf;
use std::time::Duration;

use tracing::debug;

use crate::core::SkillsDocument;
use crate::error::{Result, SkillsError};
use crate::storage::from_json;

const USER_AGENT: &str = concat!("skillbook/", env!("CARGO_PKG_VERSION"));

/// Produces a skills document, or an error the caller can recover from.
pub trait DocumentSource {
    fn fetch(&self) -> Result<SkillsDocument>;

    /// URL or path, for logs and reports.
    fn describe(&self) -> String;
}

/// A source location as written on the command line or in config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillSource {
    Http(String),
    File(PathBuf),
}

impl SkillSource {
    /// `http://` and `https://` are URLs; anything else is a path.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Http(trimmed.to_string())
        } else {
            Self::File(PathBuf::from(trimmed))
        }
    }

    pub fn into_source(self, timeout: Duration) -> Result<Box<dyn DocumentSource>> {
        Ok(match self {
            Self::Http(url) => Box::new(HttpSource::new(url, timeout)?),
            Self::File(path) => Box::new(FileSource::new(path)),
        })
    }
}

/// GET over HTTP; anything but a 200 with a valid body is an error.
pub struct HttpSource {
    url: String,
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| SkillsError::Config(format!("HTTP client error: {e}")))?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }

    fn fail(&self, reason: impl Into<String>) -> SkillsError {
        SkillsError::Fetch {
            source_name: self.url.clone(),
            reason: reason.into(),
        }
    }
}

impl DocumentSource for HttpSource {
    fn fetch(&self) -> Result<SkillsDocument> {
        let response = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .map_err(|e| self.fail(format!("request failed: {e}")))?;

        let status = response.status();
        debug!(url = %self.url, %status, "fetched skills document");
        if status != reqwest::StatusCode::OK {
            return Err(self.fail(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .map_err(|e| self.fail(format!("read body: {e}")))?;
        from_json(&body).map_err(|e| self.fail(format!("invalid JSON: {e}")))
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Reads a local file, same contract as the store.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentSource for FileSource {
    fn fetch(&self) -> Result<SkillsDocument> {
        let fail = |reason: String| SkillsError::Fetch {
            source_name: self.path.display().to_string(),
            reason,
        };
        let raw = std::fs::read_to_string(&self.path).map_err(|e| fail(e.to_string()))?;
        from_json(&raw).map_err(|e| fail(format!("invalid JSON: {e}")))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

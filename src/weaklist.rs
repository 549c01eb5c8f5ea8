//! Weak-password list sources
//!
//! A list is newline-delimited text, one entry per line. Sources compare
//! candidates against whole lines, exactly; callers decide about case.
//! Remote and file-backed sources read the list fresh on every lookup.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[cfg(feature = "http")]
use std::time::Duration;

/// Reasons a weak-password list could not be consulted.
#[derive(Error, Debug)]
pub enum LookupError {
    #[cfg(feature = "http")]
    #[error("List request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("List endpoint returned status {0}")]
    Status(u16),
    #[error("List file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read list file: {0}")]
    Read(#[from] std::io::Error),
    #[error("List is empty")]
    EmptyList,
}

/// A list of known weak passwords that can be queried for exact membership.
pub trait WeakListSource: Send + Sync {
    /// Short name used in log events.
    fn name(&self) -> &str;

    /// Returns `Ok(true)` if `candidate` equals one of the list entries.
    fn contains_exact(&self, candidate: &str) -> Result<bool, LookupError>;
}

fn list_contains(content: &str, candidate: &str) -> bool {
    content.lines().any(|line| line == candidate)
}

/// In-memory list.
#[derive(Debug, Clone, Default)]
pub struct MemoryListSource {
    name: String,
    entries: HashSet<String>,
}

impl MemoryListSource {
    /// Creates a source named `name` holding `entries` verbatim.
    pub fn new<I, S>(name: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Builds a source from newline-delimited text.
    pub fn from_lines(name: impl Into<String>, content: &str) -> Self {
        Self::new(name, content.lines())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl WeakListSource for MemoryListSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn contains_exact(&self, candidate: &str) -> Result<bool, LookupError> {
        Ok(self.entries.contains(candidate))
    }
}

/// List stored in a local file.
#[derive(Debug, Clone)]
pub struct FileListSource {
    name: String,
    path: PathBuf,
}

impl FileListSource {
    pub fn new(name: impl Into<String>, path: impl AsRef<Path>) -> Self {
        Self {
            name: name.into(),
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WeakListSource for FileListSource {
    fn name(&self) -> &str {
        &self.name
    }

    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File is empty
    fn contains_exact(&self, candidate: &str) -> Result<bool, LookupError> {
        if !self.path.exists() {
            return Err(LookupError::FileNotFound(self.path.clone()));
        }

        let content = std::fs::read_to_string(&self.path)?;

        if content.is_empty() {
            return Err(LookupError::EmptyList);
        }

        Ok(list_contains(&content, candidate))
    }
}

/// List served over HTTP as plain text.
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct HttpListSource {
    name: String,
    url: String,
    client: reqwest::blocking::Client,
}

#[cfg(feature = "http")]
impl HttpListSource {
    /// Creates a source whose requests give up after `timeout`.
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LookupError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self {
            name: name.into(),
            url: url.into(),
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[cfg(feature = "http")]
impl WeakListSource for HttpListSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn contains_exact(&self, candidate: &str) -> Result<bool, LookupError> {
        let response = self.client.get(&self.url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let body = response.text()?;
        Ok(list_contains(&body, candidate))
    }
}

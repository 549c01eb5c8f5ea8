//! Analyzer configuration.
//!
//! Where the two weak-password lists come from and how long a lookup may
//! take, with environment variable overrides.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const COMMON_PASSWORDS_ENV: &str = "PWD_COMMON_PASSWORDS_SOURCE";
pub const DICTIONARY_ENV: &str = "PWD_DICTIONARY_SOURCE";
pub const LOOKUP_TIMEOUT_ENV: &str = "PWD_LOOKUP_TIMEOUT_SECS";

pub const DEFAULT_COMMON_PASSWORDS_URL: &str =
    "https://raw.githubusercontent.com/danielmiessler/SecLists/master/Passwords/Common-Credentials/10-million-password-list-top-10000.txt";
pub const DEFAULT_DICTIONARY_URL: &str =
    "https://raw.githubusercontent.com/dwyl/english-words/master/words_alpha.txt";
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid lookup timeout {0:?}: expected a positive number of seconds")]
    InvalidTimeout(String),
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
    #[error("List URL {0} requires the `http` feature")]
    HttpDisabled(String),
}

/// Where a weak-password list is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListLocation {
    Url(String),
    Path(PathBuf),
}

impl ListLocation {
    /// `http://` and `https://` values are URLs, anything else is a file path.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.starts_with("http://") || value.starts_with("https://") {
            ListLocation::Url(value.to_string())
        } else {
            ListLocation::Path(PathBuf::from(value))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    pub common_passwords: ListLocation,
    pub dictionary: ListLocation,
    pub lookup_timeout: Duration,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            common_passwords: ListLocation::Url(DEFAULT_COMMON_PASSWORDS_URL.to_string()),
            dictionary: ListLocation::Url(DEFAULT_DICTIONARY_URL.to_string()),
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
        }
    }
}

impl AnalyzerConfig {
    /// Reads the configuration from the environment.
    ///
    /// Priority for each setting:
    /// 1. Environment variable (`PWD_COMMON_PASSWORDS_SOURCE`,
    ///    `PWD_DICTIONARY_SOURCE`, `PWD_LOOKUP_TIMEOUT_SECS`)
    /// 2. Built-in default
    ///
    /// # Errors
    ///
    /// Returns error if the timeout is not a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let common_passwords = std::env::var(COMMON_PASSWORDS_ENV)
            .map(|v| ListLocation::parse(&v))
            .unwrap_or(defaults.common_passwords);
        let dictionary = std::env::var(DICTIONARY_ENV)
            .map(|v| ListLocation::parse(&v))
            .unwrap_or(defaults.dictionary);
        let lookup_timeout = match std::env::var(LOOKUP_TIMEOUT_ENV) {
            Ok(raw) => parse_timeout(&raw)?,
            Err(_) => defaults.lookup_timeout,
        };

        Ok(Self {
            common_passwords,
            dictionary,
            lookup_timeout,
        })
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout(raw.to_string())),
    }
}

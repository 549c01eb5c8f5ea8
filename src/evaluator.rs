//! Password analyzer - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};
use std::fmt;

#[cfg(feature = "async")]
use std::sync::Arc;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::config::{AnalyzerConfig, ConfigError, ListLocation};
use crate::finding::{RuleFinding, STRONG_MESSAGE};
use crate::sections::{
    SectionResult, common_password_section, dictionary_word_section, digit_section,
    length_section, lowercase_section, sequential_digits_section, special_char_section,
    uppercase_section,
};
use crate::suggestions::assemble_suggestions;
use crate::transform::insert_separators;
use crate::weaklist::{FileListSource, MemoryListSource, WeakListSource};

#[cfg(feature = "http")]
use crate::weaklist::HttpListSource;

/// Outcome of analyzing one password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    /// `true` iff no finding was raised.
    pub is_strong: bool,
    /// One message per finding, or `["Password is strong."]`.
    pub messages: Vec<String>,
    /// At most ten improvement hints.
    pub suggestions: Vec<String>,
    /// Raised findings, in message order.
    pub findings: Vec<RuleFinding>,
}

type Section<'a> = Box<dyn Fn(&SecretString) -> SectionResult + 'a>;

/// Runs the rule pipeline against passwords.
///
/// Holds the two weak-password sources; nothing else is kept between calls.
pub struct Analyzer {
    common: Box<dyn WeakListSource>,
    dictionary: Box<dyn WeakListSource>,
}

impl fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Analyzer")
            .field("common", &self.common.name())
            .field("dictionary", &self.dictionary.name())
            .finish()
    }
}

impl Analyzer {
    /// Creates an analyzer that checks `common` for known common passwords
    /// and `dictionary` for dictionary words.
    pub fn new(
        common: impl WeakListSource + 'static,
        dictionary: impl WeakListSource + 'static,
    ) -> Self {
        Self {
            common: Box::new(common),
            dictionary: Box::new(dictionary),
        }
    }

    /// Analyzer whose lookups never match.
    pub fn without_lookups() -> Self {
        Self::new(
            MemoryListSource::new("common-passwords", Vec::<String>::new()),
            MemoryListSource::new("dictionary", Vec::<String>::new()),
        )
    }

    /// Builds the file or HTTP sources named by `config`.
    ///
    /// # Errors
    ///
    /// Returns error if an HTTP client cannot be built, or a URL is
    /// configured without the `http` feature.
    pub fn from_config(config: &AnalyzerConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            common: build_source("common-passwords", &config.common_passwords, config)?,
            dictionary: build_source("dictionary", &config.dictionary, config)?,
        })
    }

    /// Analyzes a password and returns the verdict, messages and suggestions.
    ///
    /// Never fails: lookups that cannot be completed count as "not found".
    pub fn analyze(&self, password: &SecretString) -> AnalysisResult {
        let transformed = insert_separators(password);
        let (findings, _) = self.collect_findings(&transformed, || false);
        assemble_result(&transformed, findings)
    }

    /// Like [`Analyzer::analyze`], but checks `token` before each rule.
    ///
    /// Returns `None` if the evaluation was cancelled.
    #[cfg(feature = "async")]
    pub fn analyze_with_token(
        &self,
        password: &SecretString,
        token: Option<CancellationToken>,
    ) -> Option<AnalysisResult> {
        let transformed = insert_separators(password);
        let (findings, completed) = self.collect_findings(&transformed, || {
            token.as_ref().is_some_and(|t| t.is_cancelled())
        });

        if !completed {
            return None;
        }
        Some(assemble_result(&transformed, findings))
    }

    /// Runs every section in reporting order.
    ///
    /// The returned flag is `false` if `is_cancelled` stopped the run early.
    fn collect_findings(
        &self,
        transformed: &SecretString,
        is_cancelled: impl Fn() -> bool,
    ) -> (Vec<RuleFinding>, bool) {
        let mut findings = Vec::new();

        let sections: Vec<(&str, Section<'_>)> = vec![
            ("length", Box::new(length_section)),
            ("uppercase", Box::new(uppercase_section)),
            ("lowercase", Box::new(lowercase_section)),
            ("digit", Box::new(digit_section)),
            ("special", Box::new(special_char_section)),
            ("sequential", Box::new(sequential_digits_section)),
            (
                "common",
                Box::new(|p: &SecretString| common_password_section(self.common.as_ref(), p)),
            ),
            (
                "dictionary",
                Box::new(|p: &SecretString| dictionary_word_section(self.dictionary.as_ref(), p)),
            ),
        ];

        for (_section_name, section_fn) in sections {
            if is_cancelled() {
                #[cfg(feature = "tracing")]
                tracing::debug!("Analysis cancelled before section: {}", _section_name);
                return (findings, false);
            }

            if let Some(finding) = section_fn(transformed) {
                findings.push(finding);
            }
        }

        (findings, true)
    }
}

#[cfg_attr(not(feature = "http"), allow(unused_variables))]
fn build_source(
    name: &str,
    location: &ListLocation,
    config: &AnalyzerConfig,
) -> Result<Box<dyn WeakListSource>, ConfigError> {
    match location {
        ListLocation::Path(path) => Ok(Box::new(FileListSource::new(name, path))),
        #[cfg(feature = "http")]
        ListLocation::Url(url) => {
            let source = HttpListSource::new(name, url.clone(), config.lookup_timeout)
                .map_err(|e| ConfigError::HttpClient(e.to_string()))?;
            Ok(Box::new(source))
        }
        #[cfg(not(feature = "http"))]
        ListLocation::Url(url) => Err(ConfigError::HttpDisabled(url.clone())),
    }
}

fn assemble_result(transformed: &SecretString, findings: Vec<RuleFinding>) -> AnalysisResult {
    let transformed_len = transformed.expose_secret().chars().count();
    let suggestions = assemble_suggestions(transformed_len, &findings)
        .into_iter()
        .map(|s| s.text().to_string())
        .collect();

    let is_strong = findings.is_empty();
    let messages = if is_strong {
        vec![STRONG_MESSAGE.to_string()]
    } else {
        findings.iter().map(|f| f.message().to_string()).collect()
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(findings = findings.len(), is_strong, "Password analysis complete");

    AnalysisResult {
        is_strong,
        messages,
        suggestions,
        findings,
    }
}

/// Analyzes a password with lists configured from the environment.
///
/// See [`AnalyzerConfig::from_env`]. If the configuration is unusable the
/// analysis still runs, without lookups.
pub fn analyze_password(password: &SecretString) -> AnalysisResult {
    let analyzer = AnalyzerConfig::from_env()
        .and_then(|config| Analyzer::from_config(&config))
        .unwrap_or_else(|_err| {
            #[cfg(feature = "tracing")]
            tracing::error!("Analyzer configuration FAILED, lookups disabled: {}", _err);
            Analyzer::without_lookups()
        });

    analyzer.analyze(password)
}

/// Async version that sends the analysis result via channel.
///
/// The analysis runs on the blocking pool. Nothing is sent if `token` is
/// cancelled first.
#[cfg(feature = "async")]
pub async fn analyze_password_tx(
    analyzer: Arc<Analyzer>,
    password: SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<AnalysisResult>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("analysis is about to start...");

    let task_token = token.clone();
    let handle = tokio::task::spawn_blocking(move || {
        analyzer.analyze_with_token(&password, Some(task_token))
    });

    let outcome = tokio::select! {
        biased;
        _ = token.cancelled() => None,
        joined = handle => match joined {
            Ok(result) => result,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::error!("Password analysis task failed: {}", _e);
                None
            }
        },
    };

    if let Some(result) = outcome {
        if let Err(_e) = tx.send(result).await {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send password analysis result: {}", _e);
        }
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[tokio::test]
    async fn test_analyze_with_cancellation() {
        let token = CancellationToken::new();
        token.cancel();

        let analyzer = Analyzer::without_lookups();
        let result = analyzer.analyze_with_token(&secret("Password1"), Some(token));
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_analyze_without_cancellation() {
        let analyzer = Analyzer::without_lookups();
        let token = CancellationToken::new();

        let result = analyzer.analyze_with_token(&secret("Password1"), Some(token));
        assert_eq!(result, Some(analyzer.analyze(&secret("Password1"))));
        assert!(analyzer.analyze_with_token(&secret("ab"), None).is_some());
    }

    #[tokio::test]
    async fn test_analyze_password_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        let analyzer = Arc::new(Analyzer::without_lookups());

        analyze_password_tx(analyzer, secret("short"), token, tx).await;

        let result = rx.recv().await.expect("Should receive analysis");
        assert!(!result.is_strong);
        assert_eq!(
            result.findings,
            vec![RuleFinding::MissingUppercase, RuleFinding::MissingDigit]
        );
    }

    #[tokio::test]
    async fn test_analyze_password_tx_cancelled() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();
        let analyzer = Arc::new(Analyzer::without_lookups());

        analyze_password_tx(analyzer, secret("Password1"), token, tx).await;

        assert!(rx.recv().await.is_none());
    }
}

//! Password analysis library
//!
//! This library checks a password against fixed composition rules and two
//! weak-password lists (common passwords and dictionary words), returning a
//! verdict, deficiency messages and improvement suggestions.
//!
//! Before any rule runs, a `*` is inserted between every two adjacent ASCII
//! letters; all rules and lookups see that transformed password.
//!
//! # Features
//!
//! - `async` (default): Enables cancellable analysis and channel delivery
//! - `http` (default): Enables fetching word lists over HTTP
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_COMMON_PASSWORDS_SOURCE`: URL or path of the common-password list
//! - `PWD_DICTIONARY_SOURCE`: URL or path of the dictionary word list
//! - `PWD_LOOKUP_TIMEOUT_SECS`: Lookup timeout in seconds (default: 10)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_analyzer::{Analyzer, MemoryListSource};
//! use secrecy::SecretString;
//!
//! let analyzer = Analyzer::new(
//!     MemoryListSource::new("common-passwords", ["1*2*3*4*5*6"]),
//!     MemoryListSource::new("dictionary", ["w*o*r*d"]),
//! );
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let result = analyzer.analyze(&password);
//!
//! println!("Strong: {}", result.is_strong);
//! for message in &result.messages {
//!     println!("{}", message);
//! }
//! ```

// Internal modules
mod config;
mod evaluator;
mod finding;
mod sections;
mod suggestions;
mod transform;
mod weaklist;

// Public API
pub use config::{AnalyzerConfig, ConfigError, ListLocation};
pub use evaluator::{AnalysisResult, Analyzer, analyze_password};
pub use finding::{RuleFinding, STRONG_MESSAGE};
pub use suggestions::{MAX_SUGGESTIONS, Suggestion};
pub use transform::{SEPARATOR, insert_separators};
pub use weaklist::{FileListSource, LookupError, MemoryListSource, WeakListSource};

#[cfg(feature = "http")]
pub use weaklist::HttpListSource;

#[cfg(feature = "async")]
pub use evaluator::analyze_password_tx;

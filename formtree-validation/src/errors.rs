//! Error types for validation configuration
//!
//! Rule failures are never errors: they are data in the
//! [`ErrorTree`](crate::ErrorTree). The variants here describe configuration
//! that cannot be interpreted at all.

use thiserror::Error;

/// Result type for configuration and validation calls
pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// A scalar field is configured with something other than a rule config
    #[error("Configuration for field '{path}' has no rules")]
    MissingRules {
        /// Dotted path of the offending field
        path: String,
    },

    /// A rule argument has the wrong shape for its rule
    #[error("Invalid argument for rule '{rule}' on field '{path}': {reason}")]
    InvalidRule {
        path: String,
        rule: String,
        reason: String,
    },

    /// A configuration node is neither a rule config nor a nested config
    #[error("Invalid configuration node '{path}': {reason}")]
    InvalidNode { path: String, reason: String },

    /// A `pattern` rule carries a regular expression that does not compile
    #[error("Invalid pattern for field '{path}': {source}")]
    InvalidPattern {
        path: String,
        #[source]
        source: regex::Error,
    },

    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConfigError {
    /// Create a missing-rules error for a field path
    pub fn missing_rules<S: Into<String>>(path: S) -> Self {
        Self::MissingRules { path: path.into() }
    }

    /// Create an invalid-rule error
    pub fn invalid_rule<P, R, M>(path: P, rule: R, reason: M) -> Self
    where
        P: Into<String>,
        R: Into<String>,
        M: Into<String>,
    {
        Self::InvalidRule {
            path: path.into(),
            rule: rule.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid-node error
    pub fn invalid_node<P: Into<String>, M: Into<String>>(path: P, reason: M) -> Self {
        Self::InvalidNode {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Dotted field path the error refers to, if any
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::MissingRules { path }
            | Self::InvalidRule { path, .. }
            | Self::InvalidNode { path, .. }
            | Self::InvalidPattern { path, .. } => Some(path.as_str()),
            _ => None,
        }
    }
}

/// Join a parent path and a field key with a dot
pub(crate) fn join_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

//! Engine configuration: class naming and missing-token policy.

use serde::Deserialize;

use crate::theme::resolver::MissingTokenPolicy;

/// Errors from configuration validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("class prefix {0:?} would not produce valid CSS class names")]
    InvalidClassPrefix(String),
}

/// How the rule cache names newly registered classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClassNaming {
    /// `prefix` followed by a per-process counter starting at 1 (`c1`, `c2`, ...).
    #[default]
    Counter,
    /// `prefix` followed by the base-36 rule hash; stable across processes.
    Hash,
}

/// Configuration for the style engine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct EngineConfig {
    /// Prefix for emitted class names.
    pub class_prefix: String,
    /// Class naming scheme.
    pub class_naming: ClassNaming,
    /// Behavior for tokens absent from the theme.
    pub missing_tokens: MissingTokenPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            class_prefix: "c".to_string(),
            class_naming: ClassNaming::Counter,
            missing_tokens: MissingTokenPolicy::Error,
        }
    }
}

impl EngineConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the class prefix (builder).
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    /// Set the naming scheme (builder).
    pub fn with_class_naming(mut self, naming: ClassNaming) -> Self {
        self.class_naming = naming;
        self
    }

    /// Set the missing-token policy (builder).
    pub fn with_missing_tokens(mut self, policy: MissingTokenPolicy) -> Self {
        self.missing_tokens = policy;
        self
    }

    /// Check that every class built from this config is a valid CSS
    /// identifier. Class names are the prefix followed by digits or base-36
    /// text, so the prefix alone must start the identifier.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if is_valid_prefix(&self.class_prefix) {
            Ok(())
        } else {
            Err(ConfigError::InvalidClassPrefix(self.class_prefix.clone()))
        }
    }
}

fn is_valid_prefix(prefix: &str) -> bool {
    let mut chars = prefix.chars();
    let starts_ident = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => true,
        Some('-') => matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '-'),
        _ => false,
    };
    starts_ident
        && prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

//! Token resolution against a theme, with an explicit missing-token policy.

use std::borrow::Cow;

use serde::Deserialize;

use crate::theme::value::TokenValue;

/// Value substituted for an absent token under [`MissingTokenPolicy::Fallback`].
///
/// `unset` makes the declaration behave as if it were never written.
pub const NEUTRAL_FALLBACK: &str = "unset";

/// Errors from token resolution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("theme '{theme}' does not provide token '{token}'")]
    Missing { token: String, theme: String },
    #[error("theme '{theme}' lacks token '{token}' required by extension '{schema}'")]
    MissingExtensionToken {
        schema: String,
        token: String,
        theme: String,
    },
}

/// Anything tokens can be looked up in: a [`crate::theme::Theme`] (base
/// contract) or an [`crate::theme::ExtendedTheme`] (base plus extension).
pub trait TokenSource {
    /// Name used in diagnostics.
    fn theme_name(&self) -> &str;

    /// Look up a token by name.
    fn token(&self, name: &str) -> Option<&TokenValue>;
}

impl<T: TokenSource + ?Sized> TokenSource for &T {
    fn theme_name(&self) -> &str {
        (**self).theme_name()
    }

    fn token(&self, name: &str) -> Option<&TokenValue> {
        (**self).token(name)
    }
}

/// What to do when a style references a token the theme does not provide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingTokenPolicy {
    /// Fail with [`TokenError::Missing`].
    #[default]
    Error,
    /// Substitute [`NEUTRAL_FALLBACK`] and log a warning.
    Fallback,
}

/// Resolves token names to CSS text under a fixed policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Resolver {
    policy: MissingTokenPolicy,
}

impl Resolver {
    pub fn new(policy: MissingTokenPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> MissingTokenPolicy {
        self.policy
    }

    /// Resolve `name` against `tokens`.
    pub fn resolve<'t, S: TokenSource + ?Sized>(
        &self,
        tokens: &'t S,
        name: &str,
    ) -> Result<Cow<'t, TokenValue>, TokenError> {
        if let Some(value) = tokens.token(name) {
            return Ok(Cow::Borrowed(value));
        }
        match self.policy {
            MissingTokenPolicy::Error => Err(TokenError::Missing {
                token: name.to_string(),
                theme: tokens.theme_name().to_string(),
            }),
            MissingTokenPolicy::Fallback => {
                log::warn!(
                    "token '{}' missing from theme '{}', using '{}'",
                    name,
                    tokens.theme_name(),
                    NEUTRAL_FALLBACK
                );
                Ok(Cow::Owned(TokenValue::Keyword(NEUTRAL_FALLBACK.to_string())))
            }
        }
    }
}

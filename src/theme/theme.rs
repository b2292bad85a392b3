//! Theme struct: a named, immutable set of semantic tokens.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::theme::extension::{ExtendedTheme, ExtensionSchema};
use crate::theme::resolver::{TokenError, TokenSource};
use crate::theme::value::TokenValue;

/// An ordered mapping from token name to value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct TokenSet {
    tokens: BTreeMap<String, TokenValue>,
}

impl TokenSet {
    /// Create an empty token set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a token, returning the updated set for chaining.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<TokenValue>) -> Self {
        self.tokens.insert(name.into(), value.into());
        self
    }

    /// Look up a token by name.
    pub fn get(&self, name: &str) -> Option<&TokenValue> {
        self.tokens.get(name)
    }

    /// Whether a token with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.tokens.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate tokens in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TokenValue)> {
        self.tokens.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn merged_with(&self, other: &TokenSet) -> TokenSet {
        let mut tokens = self.tokens.clone();
        tokens.extend(other.tokens.iter().map(|(k, v)| (k.clone(), v.clone())));
        TokenSet { tokens }
    }
}

/// A theme: base tokens plus the entries layered on top by [`Theme::extend`].
///
/// Themes are built once during application setup and never mutated
/// afterwards; extending a theme produces a new one.
///
/// Used directly as a [`TokenSource`], a theme exposes only the names of its
/// base contract (with overriding values applied). Names that exist only in
/// an extension are reachable through [`Theme::with_extension`].
///
/// # Example
///
/// ```rust
/// use gilt_styles::theme::{Theme, TokenSet};
///
/// let base = Theme::new(
///     "light",
///     TokenSet::new()
///         .with("colorNeutralBackground1", "#ffffff")
///         .with("spacingM", "8px"),
/// );
/// let azure = base.extend("azure-light", TokenSet::new().with("controlBackground", "#f3f2f1"));
/// assert_eq!(azure.name(), "azure-light");
/// assert!(base.extension_token("controlBackground").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Theme {
    name: String,
    #[serde(rename = "tokens")]
    base: TokenSet,
    #[serde(default, rename = "extension")]
    overrides: TokenSet,
}

impl Theme {
    /// Create a theme from its base token set.
    pub fn new(name: impl Into<String>, base: TokenSet) -> Self {
        Self {
            name: name.into(),
            base,
            overrides: TokenSet::new(),
        }
    }

    /// The theme's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Derive a new theme whose `tokens` add to or override this theme's entries.
    ///
    /// Extending an extended theme flattens the previous layer into the new
    /// base. The receiver is left untouched.
    pub fn extend(&self, name: impl Into<String>, tokens: TokenSet) -> Theme {
        let flattened = self.base.merged_with(&self.overrides);
        let base: TokenSet = TokenSet {
            tokens: flattened
                .tokens
                .into_iter()
                .filter(|(k, _)| self.base.contains(k))
                .collect(),
        };
        let mut overrides = self
            .overrides
            .tokens
            .iter()
            .filter(|(k, _)| !self.base.contains(k))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect::<BTreeMap<_, _>>();
        overrides.extend(tokens.tokens);
        Theme {
            name: name.into(),
            base,
            overrides: TokenSet { tokens: overrides },
        }
    }

    /// The base token names this theme guarantees.
    pub fn base_tokens(&self) -> &TokenSet {
        &self.base
    }

    /// Look up a base-contract token, seeing overriding values.
    pub fn base_token(&self, name: &str) -> Option<&TokenValue> {
        if !self.base.contains(name) {
            return None;
        }
        self.overrides.get(name).or_else(|| self.base.get(name))
    }

    /// Look up any token, including names that exist only in an extension.
    pub fn extension_token(&self, name: &str) -> Option<&TokenValue> {
        self.overrides.get(name).filter(|_| !self.base.contains(name))
    }

    /// Look up any token, base or extension.
    pub(crate) fn any_token(&self, name: &str) -> Option<&TokenValue> {
        self.overrides.get(name).or_else(|| self.base.get(name))
    }

    /// Prove this theme satisfies `schema`, unlocking its extension-only names.
    pub fn with_extension<'a>(
        &'a self,
        schema: &'a ExtensionSchema,
    ) -> Result<ExtendedTheme<'a>, TokenError> {
        ExtendedTheme::validate(self, schema)
    }
}

impl TokenSource for Theme {
    fn theme_name(&self) -> &str {
        &self.name
    }

    fn token(&self, name: &str) -> Option<&TokenValue> {
        self.base_token(name)
    }
}

//! Extended-token capability.
//!
//! A component whose styles need tokens beyond the base contract declares them
//! in an [`ExtensionSchema`]. [`Theme::with_extension`] checks the theme against
//! the schema once and hands back an [`ExtendedTheme`], the only
//! [`TokenSource`] through which those extra names resolve.

use crate::theme::resolver::{TokenError, TokenSource};
use crate::theme::theme::Theme;
use crate::theme::value::TokenValue;

/// One declared extension token.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtensionToken {
    pub name: String,
    /// Value used when the theme does not provide the token. `None` means required.
    pub default: Option<TokenValue>,
}

/// A named declaration of extension-only token names.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtensionSchema {
    name: String,
    tokens: Vec<ExtensionToken>,
}

impl ExtensionSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tokens: Vec::new(),
        }
    }

    /// Declare a token the theme must provide.
    pub fn required(mut self, name: impl Into<String>) -> Self {
        self.tokens.push(ExtensionToken {
            name: name.into(),
            default: None,
        });
        self
    }

    /// Declare a token with a documented default.
    pub fn optional(mut self, name: impl Into<String>, default: impl Into<TokenValue>) -> Self {
        self.tokens.push(ExtensionToken {
            name: name.into(),
            default: Some(default.into()),
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tokens(&self) -> &[ExtensionToken] {
        &self.tokens
    }

    fn declared(&self, name: &str) -> Option<&ExtensionToken> {
        self.tokens.iter().find(|t| t.name == name)
    }
}

/// A theme proven to satisfy an [`ExtensionSchema`].
#[derive(Debug, Clone, Copy)]
pub struct ExtendedTheme<'a> {
    theme: &'a Theme,
    schema: &'a ExtensionSchema,
}

impl<'a> ExtendedTheme<'a> {
    pub(crate) fn validate(theme: &'a Theme, schema: &'a ExtensionSchema) -> Result<Self, TokenError> {
        for token in &schema.tokens {
            if token.default.is_none() && theme.any_token(&token.name).is_none() {
                return Err(TokenError::MissingExtensionToken {
                    schema: schema.name.clone(),
                    token: token.name.clone(),
                    theme: theme.name().to_string(),
                });
            }
        }
        Ok(Self { theme, schema })
    }

    /// The underlying theme.
    pub fn theme(&self) -> &'a Theme {
        self.theme
    }

    /// The schema this theme was validated against.
    pub fn schema(&self) -> &'a ExtensionSchema {
        self.schema
    }
}

impl TokenSource for ExtendedTheme<'_> {
    fn theme_name(&self) -> &str {
        self.theme.name()
    }

    fn token(&self, name: &str) -> Option<&TokenValue> {
        if let Some(value) = self.theme.base_token(name) {
            return Some(value);
        }
        let declared = self.schema.declared(name)?;
        self.theme
            .any_token(name)
            .or(declared.default.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::theme::TokenSet;

    fn azure() -> Theme {
        Theme::new("light", TokenSet::new().with("spacingM", "8px")).extend(
            "azure",
            TokenSet::new()
                .with("controlBackground", "#f3f2f1")
                .with("undeclared", "red"),
        )
    }

    fn schema() -> ExtensionSchema {
        ExtensionSchema::new("azure-semantic-colors")
            .required("controlBackground")
            .optional("controlOutline", "#8a8886")
    }

    #[test]
    fn validated_theme_resolves_declared_tokens() {
        let theme = azure();
        let schema = schema();
        let extended = theme.with_extension(&schema).unwrap();
        assert_eq!(
            extended.token("controlBackground"),
            Some(&TokenValue::color("#f3f2f1"))
        );
        assert_eq!(extended.token("spacingM"), Some(&TokenValue::px(8.0)));
    }

    #[test]
    fn optional_token_falls_back_to_default() {
        let theme = azure();
        let schema = schema();
        let extended = theme.with_extension(&schema).unwrap();
        assert_eq!(
            extended.token("controlOutline"),
            Some(&TokenValue::color("#8a8886"))
        );
    }

    #[test]
    fn undeclared_extension_name_is_not_visible() {
        let theme = azure();
        let schema = schema();
        let extended = theme.with_extension(&schema).unwrap();
        assert_eq!(extended.token("undeclared"), None);
    }

    #[test]
    fn missing_required_token_fails_validation() {
        let theme = Theme::new("plain", TokenSet::new());
        let schema = schema();
        let err = theme.with_extension(&schema).unwrap_err();
        assert_eq!(
            err,
            TokenError::MissingExtensionToken {
                schema: "azure-semantic-colors".into(),
                token: "controlBackground".into(),
                theme: "plain".into(),
            }
        );
    }

    #[test]
    fn theme_name_passes_through() {
        let theme = azure();
        let schema = schema();
        let extended = theme.with_extension(&schema).unwrap();
        assert_eq!(extended.theme_name(), "azure");
        assert_eq!(extended.schema().name(), "azure-semantic-colors");
    }
}

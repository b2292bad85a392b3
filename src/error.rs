//! Top-level error type.

use crate::css::compiler::CompileError;
use crate::sheet::target::SheetError;
use crate::theme::resolver::TokenError;

/// Any failure while computing a component's slot styles.
///
/// All three are development-time contract violations: a description that
/// compiled once against a theme shape keeps compiling against it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StyleError {
    /// Malformed description or a missing token.
    #[error(transparent)]
    Compile(#[from] CompileError),
    /// The theme does not satisfy a component's extension schema.
    #[error(transparent)]
    Token(#[from] TokenError),
    /// The rendering surface rejected a rule.
    #[error(transparent)]
    Sheet(#[from] SheetError),
}

impl StyleError {
    /// The missing-token error inside this error, if that is what it is.
    pub fn as_token_error(&self) -> Option<&TokenError> {
        match self {
            StyleError::Token(e) | StyleError::Compile(CompileError::Token(e)) => Some(e),
            _ => None,
        }
    }
}

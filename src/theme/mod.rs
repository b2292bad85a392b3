//! Themes and semantic tokens: values, theme layering, extensions, resolution.

pub mod value;
#[allow(clippy::module_inception)]
pub mod theme;
pub mod extension;
pub mod resolver;

pub use extension::{ExtendedTheme, ExtensionSchema};
pub use resolver::{MissingTokenPolicy, Resolver, TokenError, TokenSource};
pub use theme::{Theme, TokenSet};
pub use value::TokenValue;

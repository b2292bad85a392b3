//! # gilt-styles
//!
//! A theme-aware, atomic style engine for component libraries.
//!
//! Components describe their styles per slot as plain data. The engine
//! resolves design tokens against the active theme, compiles each slot's
//! declarations into normalized, content-hashed rules, registers every
//! distinct rule with a style sheet exactly once, and merges the resulting
//! class names into the slot's class list in a fixed order.
//!
//! ## Core Systems
//!
//! - **[`theme`]**: Themes, token sets, extension schemas, token resolution
//! - **[`css`]**: Value lexer, property and shorthand tables, rule compiler
//! - **[`sheet`]**: Rule cache and sheet targets, plus the process-wide cache
//! - **[`slots`]**: Slot state and ordered, idempotent class merging
//! - **[`component`]**: The per-component entry point
//! - **[`components`]**: Built-in hooks: MenuList, Tooltip
//!
//! ## Example
//!
//! ```rust
//! use gilt_styles::prelude::*;
//!
//! struct Root;
//!
//! impl StyledComponent for Root {
//!     type Props = ();
//!     const NAME: &'static str = "Root";
//!
//!     fn slot_class_names() -> &'static [(&'static str, &'static str)] {
//!         &[("root", "fui-Root")]
//!     }
//!
//!     fn base_styles() -> StyleDescription {
//!         StyleDescription::new().slot("root", StyleBlock::new().declare("gap", "2px"))
//!     }
//! }
//!
//! let theme = Theme::new("light", TokenSet::new());
//! let mut cache = RuleCache::default();
//! let mut state = ComponentState::new();
//! compute_slot_styles::<Root, _>(&mut state, &(), &theme, &mut cache)?;
//! assert_eq!(state.class_name("root"), "fui-Root c1");
//! # Ok::<(), StyleError>(())
//! ```

pub mod config;
pub mod error;

// Core systems
pub mod theme;
pub mod css;
pub mod sheet;
pub mod slots;

// Components
pub mod component;
pub mod components;

pub use component::{compute_slot_styles, compute_slot_styles_global, StyledComponent};
pub use config::{ClassNaming, ConfigError, EngineConfig};
pub use error::StyleError;

// Proc macros (feature-gated)
#[cfg(feature = "macros")]
pub use gilt_styles_macros::styles;

/// Everything a component author usually needs.
pub mod prelude {
    pub use crate::component::{compute_slot_styles, compute_slot_styles_global, StyledComponent};
    pub use crate::config::{ClassNaming, ConfigError, EngineConfig};
    pub use crate::css::compiler::Compiler;
    pub use crate::css::model::{StyleBlock, StyleDescription};
    pub use crate::css::value::StyleValue;
    pub use crate::error::StyleError;
    pub use crate::sheet::{MemorySheet, RuleCache, SharedSheet, SheetTarget};
    pub use crate::slots::{ComponentState, SlotState};
    pub use crate::theme::{
        ExtendedTheme, ExtensionSchema, MissingTokenPolicy, Theme, TokenSet, TokenSource,
        TokenValue,
    };
}

//! Style description model: StyleBlock, StyleDescription, Declaration.

use std::collections::BTreeMap;

use crate::css::value::StyleValue;

/// The declarations for one slot, plus nested selector blocks.
///
/// Declarations keep their authored order; a later declaration of the same
/// property replaces an earlier one during compilation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleBlock {
    pub declarations: Vec<(String, StyleValue)>,
    /// Nested blocks keyed by selector suffix (`:hover`, `::after`, `& > svg`).
    pub nested: Vec<(String, StyleBlock)>,
}

impl StyleBlock {
    /// Create an empty block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declaration (builder).
    pub fn declare(mut self, property: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.declarations.push((property.into(), value.into()));
        self
    }

    /// Append a nested selector block (builder).
    pub fn nested(mut self, selector: impl Into<String>, block: StyleBlock) -> Self {
        self.nested.push((selector.into(), block));
        self
    }

    /// Returns `true` if neither this block nor any nested block declares anything.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty() && self.nested.iter().all(|(_, b)| b.is_empty())
    }
}

/// Per-slot style blocks for one component.
///
/// Authored once as plain data; the resolved output varies with the theme.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleDescription {
    slots: BTreeMap<String, StyleBlock>,
}

impl StyleDescription {
    /// Create an empty description.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the block for a slot (builder). Replaces any existing block.
    pub fn slot(mut self, name: impl Into<String>, block: StyleBlock) -> Self {
        self.slots.insert(name.into(), block);
        self
    }

    /// Look up a slot's block.
    pub fn get(&self, name: &str) -> Option<&StyleBlock> {
        self.slots.get(name)
    }

    /// Iterate slots in name order.
    pub fn slots(&self) -> impl Iterator<Item = (&str, &StyleBlock)> {
        self.slots.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// A single resolved declaration, e.g. `row-gap: 2px`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Declaration {
    /// Kebab-case longhand.
    pub property: String,
    /// Resolved CSS text.
    pub value: String,
}

impl Declaration {
    /// Create a new declaration.
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

//! Style rule compiler: style description + theme → content-addressed rules.
//!
//! Compilation runs in two phases. The first expands shorthands and validates
//! every property, value, and selector without looking at the theme, so a
//! malformed description fails before any token is resolved or any rule
//! reaches the cache. The second resolves tokens, sorts declarations by
//! property name, and hashes the result.

use std::collections::{BTreeMap, BTreeSet};

use crate::css::hash::RuleHash;
use crate::css::model::{Declaration, StyleBlock, StyleDescription};
use crate::css::properties::{self, PropertyError};
use crate::css::scalar::format_number;
use crate::css::shorthands::{self, ShorthandError};
use crate::css::value::{Component, ParsedValue, Piece, ValueError};
use crate::theme::resolver::{MissingTokenPolicy, Resolver, TokenError, TokenSource};

/// Placeholder for the emitted class inside selector templates.
const CLASS_PLACEHOLDER: char = '&';

/// Errors from style compilation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CompileError {
    #[error("slot '{slot}': {source}")]
    Property {
        slot: String,
        #[source]
        source: PropertyError,
    },
    #[error("slot '{slot}', property '{property}': {source}")]
    Value {
        slot: String,
        property: String,
        #[source]
        source: ValueError,
    },
    #[error("slot '{slot}': {source}")]
    Shorthand {
        slot: String,
        #[source]
        source: ShorthandError,
    },
    #[error("slot '{slot}': invalid nested selector {selector:?}")]
    InvalidSelector { slot: String, selector: String },
    #[error("component '{component}' has no slot '{slot}'")]
    UnknownSlot { component: String, slot: String },
    #[error(transparent)]
    Token(#[from] TokenError),
}

/// A normalized, content-hashed declaration set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledRule {
    /// Selector template; `&` stands for the emitted class (`&`, `&:hover`).
    pub selector: String,
    /// Declarations sorted by property.
    pub declarations: Vec<Declaration>,
    pub hash: RuleHash,
}

impl CompiledRule {
    fn new(selector: String, declarations: Vec<Declaration>) -> Self {
        let hash = RuleHash::of(Self::canonical_text(&selector, &declarations).as_bytes());
        Self {
            selector,
            declarations,
            hash,
        }
    }

    fn canonical_text(selector: &str, declarations: &[Declaration]) -> String {
        let mut text = String::with_capacity(selector.len() + declarations.len() * 24);
        text.push_str(selector);
        text.push('{');
        for d in declarations {
            text.push_str(&d.property);
            text.push(':');
            text.push_str(&d.value);
            text.push(';');
        }
        text.push('}');
        text
    }

    /// Render the rule as CSS text for `class_name`.
    ///
    /// ```rust
    /// # use gilt_styles::css::compiler::Compiler;
    /// # use gilt_styles::css::model::{StyleBlock, StyleDescription};
    /// # use gilt_styles::theme::{Theme, TokenSet};
    /// let desc = StyleDescription::new().slot("root", StyleBlock::new().declare("gap", "2px"));
    /// let theme = Theme::new("light", TokenSet::new());
    /// let compiled = Compiler::default().compile(&desc, &theme).unwrap();
    /// assert_eq!(
    ///     compiled.rules("root")[0].css_text("c1"),
    ///     ".c1{column-gap:2px;row-gap:2px;}"
    /// );
    /// ```
    pub fn css_text(&self, class_name: &str) -> String {
        let selector = self
            .selector
            .replace(CLASS_PLACEHOLDER, &format!(".{class_name}"));
        let body = Self::canonical_text("", &self.declarations);
        format!("{selector}{body}")
    }
}

/// Compiled rules per slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledStyles {
    slots: BTreeMap<String, Vec<CompiledRule>>,
}

impl CompiledStyles {
    /// Rules for a slot; empty if the slot was not described.
    pub fn rules(&self, slot: &str) -> &[CompiledRule] {
        self.slots.get(slot).map(Vec::as_slice).unwrap_or_default()
    }

    /// Iterate slots in name order.
    pub fn slots(&self) -> impl Iterator<Item = (&str, &[CompiledRule])> {
        self.slots.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn slot_names(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }
}

/// Phase-one output: expanded, validated, not yet resolved.
#[derive(Debug)]
struct ExpandedRule {
    selector: String,
    declarations: BTreeMap<String, ParsedValue>,
}

/// Compiles style descriptions under a fixed missing-token policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Compiler {
    resolver: Resolver,
}

impl Compiler {
    pub fn new(policy: MissingTokenPolicy) -> Self {
        Self {
            resolver: Resolver::new(policy),
        }
    }

    pub fn policy(&self) -> MissingTokenPolicy {
        self.resolver.policy()
    }

    /// Compile every slot of `desc` against `tokens`.
    ///
    /// Pure: the same inputs always yield identical rules and hashes.
    pub fn compile<S: TokenSource + ?Sized>(
        &self,
        desc: &StyleDescription,
        tokens: &S,
    ) -> Result<CompiledStyles, CompileError> {
        let expanded = expand_description(desc)?;

        let mut slots = BTreeMap::new();
        for (slot, rules) in expanded {
            let mut compiled = Vec::with_capacity(rules.len());
            for rule in rules {
                let mut declarations = Vec::with_capacity(rule.declarations.len());
                for (property, value) in &rule.declarations {
                    let text = self.render_value(property, value, tokens)?;
                    declarations.push(Declaration::new(property.clone(), text));
                }
                compiled.push(CompiledRule::new(rule.selector, declarations));
            }
            slots.insert(slot, compiled);
        }
        Ok(CompiledStyles { slots })
    }

    /// Check `desc` for malformed properties, values, and selectors.
    pub fn validate(&self, desc: &StyleDescription) -> Result<(), CompileError> {
        expand_description(desc).map(|_| ())
    }

    /// Every token name `desc` references, for checking a theme up front.
    pub fn required_tokens(&self, desc: &StyleDescription) -> Result<BTreeSet<String>, CompileError> {
        let expanded = expand_description(desc)?;
        let mut names = BTreeSet::new();
        for rule in expanded.values().flatten() {
            for value in rule.declarations.values() {
                if let ParsedValue::Components(components) = value {
                    for c in components {
                        names.extend(c.token_names().map(str::to_string));
                    }
                }
            }
        }
        Ok(names)
    }

    fn render_value<S: TokenSource + ?Sized>(
        &self,
        property: &str,
        value: &ParsedValue,
        tokens: &S,
    ) -> Result<String, TokenError> {
        match value {
            ParsedValue::Number(n) => Ok(render_number(property, *n)),
            ParsedValue::Components(components) => {
                let mut out = String::new();
                for (i, component) in components.iter().enumerate() {
                    if i > 0 {
                        out.push(' ');
                    }
                    self.render_component(component, tokens, &mut out)?;
                }
                Ok(out)
            }
        }
    }

    fn render_component<S: TokenSource + ?Sized>(
        &self,
        component: &Component,
        tokens: &S,
        out: &mut String,
    ) -> Result<(), TokenError> {
        for piece in &component.pieces {
            match piece {
                Piece::Text(text) => out.push_str(text),
                Piece::Token(name) => {
                    let value = self.resolver.resolve(tokens, name)?;
                    out.push_str(&value.to_string());
                }
            }
        }
        Ok(())
    }
}

fn render_number(property: &str, n: f64) -> String {
    if properties::is_unitless(property) || n == 0.0 {
        format_number(n)
    } else {
        format!("{}px", format_number(n))
    }
}

fn expand_description(
    desc: &StyleDescription,
) -> Result<BTreeMap<String, Vec<ExpandedRule>>, CompileError> {
    let mut out = BTreeMap::new();
    for (slot, block) in desc.slots() {
        let mut rules = Vec::new();
        expand_block(slot, CLASS_PLACEHOLDER.to_string(), block, &mut rules)?;
        out.insert(slot.to_string(), rules);
    }
    Ok(out)
}

fn expand_block(
    slot: &str,
    selector: String,
    block: &StyleBlock,
    rules: &mut Vec<ExpandedRule>,
) -> Result<(), CompileError> {
    let mut declarations = BTreeMap::new();
    for (name, value) in &block.declarations {
        let parsed = value.parse().map_err(|source| CompileError::Value {
            slot: slot.to_string(),
            property: name.clone(),
            source,
        })?;
        let normalized = properties::normalize_name(name);
        if let Some(shorthand) = shorthands::lookup(&normalized) {
            let expanded = shorthands::expand(shorthand, &parsed).map_err(|source| {
                CompileError::Shorthand {
                    slot: slot.to_string(),
                    source,
                }
            })?;
            for (longhand, v) in expanded {
                declarations.insert(longhand.to_string(), v);
            }
        } else {
            let longhand = properties::longhand(name).map_err(|source| CompileError::Property {
                slot: slot.to_string(),
                source,
            })?;
            declarations.insert(longhand, parsed);
        }
    }
    if !declarations.is_empty() {
        rules.push(ExpandedRule {
            selector: selector.clone(),
            declarations,
        });
    }

    for (nested, child) in &block.nested {
        let child_selector = nest_selector(&selector, nested).ok_or_else(|| {
            CompileError::InvalidSelector {
                slot: slot.to_string(),
                selector: nested.clone(),
            }
        })?;
        expand_block(slot, child_selector, child, rules)?;
    }
    Ok(())
}

/// Combine a parent selector template with a nested selector.
///
/// `:hover` and `[aria-x]` attach directly to the parent; selectors that
/// mention `&` substitute the parent for it (`& > svg`). Selector lists on
/// either side combine pairwise, so `:hover, :focus` under `&` yields
/// `&:hover, &:focus`.
fn nest_selector(parent: &str, nested: &str) -> Option<String> {
    let nested = nested.trim();
    if nested.is_empty() || nested.contains(['{', '}', ';']) {
        return None;
    }
    let parents = split_selector_list(parent);
    let mut combined = Vec::new();
    for part in split_selector_list(nested) {
        for parent in &parents {
            combined.push(nest_one(parent, part)?);
        }
    }
    Some(combined.join(", "))
}

fn nest_one(parent: &str, nested: &str) -> Option<String> {
    if nested.contains(CLASS_PLACEHOLDER) {
        Some(nested.replace(CLASS_PLACEHOLDER, parent))
    } else if nested.starts_with([':', '[', '.']) {
        Some(format!("{parent}{nested}"))
    } else {
        None
    }
}

/// Split a selector list on commas outside `()` and `[]`.
fn split_selector_list(list: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in list.char_indices() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(list[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(list[start..].trim());
    parts
}

//! In-memory style sheet.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use slotmap::{new_key_type, SlotMap};

use crate::sheet::target::{SheetError, SheetTarget};

new_key_type! {
    /// Key of a rule stored in a [`MemorySheet`].
    pub struct SheetRuleKey;
}

/// One registered rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRule {
    pub class_name: String,
    pub css: String,
}

/// A style sheet held in memory, in insertion order.
///
/// Useful as the target for server-side rendering (dump with
/// [`MemorySheet::to_css`]) and in tests.
#[derive(Debug, Default)]
pub struct MemorySheet {
    rules: SlotMap<SheetRuleKey, SheetRule>,
    order: Vec<SheetRuleKey>,
    by_class: HashMap<String, SheetRuleKey>,
}

impl MemorySheet {
    /// Create an empty sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The rule registered for `class_name`.
    pub fn get(&self, class_name: &str) -> Option<&SheetRule> {
        self.by_class.get(class_name).and_then(|k| self.rules.get(*k))
    }

    /// Iterate rules in insertion order.
    pub fn rules(&self) -> impl Iterator<Item = &SheetRule> {
        self.order.iter().filter_map(|k| self.rules.get(*k))
    }

    /// All rules as one CSS string, one rule per line.
    pub fn to_css(&self) -> String {
        self.rules()
            .map(|r| r.css.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl SheetTarget for MemorySheet {
    fn insert_rule(&mut self, class_name: &str, css: &str) -> Result<(), SheetError> {
        if self.by_class.contains_key(class_name) {
            return Err(SheetError::DuplicateClass(class_name.to_string()));
        }
        let key = self.rules.insert(SheetRule {
            class_name: class_name.to_string(),
            css: css.to_string(),
        });
        self.order.push(key);
        self.by_class.insert(class_name.to_string(), key);
        Ok(())
    }
}

/// A [`MemorySheet`] shared between the cache and an observer.
#[derive(Debug, Clone, Default)]
pub struct SharedSheet(Arc<Mutex<MemorySheet>>);

impl SharedSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock the underlying sheet for inspection.
    pub fn lock(&self) -> MutexGuard<'_, MemorySheet> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SheetTarget for SharedSheet {
    fn insert_rule(&mut self, class_name: &str, css: &str) -> Result<(), SheetError> {
        self.lock().insert_rule(class_name, css)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_lookup() {
        let mut sheet = MemorySheet::new();
        sheet.insert_rule("c1", ".c1{row-gap:2px;}").unwrap();
        assert_eq!(sheet.len(), 1);
        assert_eq!(sheet.get("c1").map(|r| r.css.as_str()), Some(".c1{row-gap:2px;}"));
        assert!(sheet.get("c2").is_none());
    }

    #[test]
    fn duplicate_class_rejected() {
        let mut sheet = MemorySheet::new();
        sheet.insert_rule("c1", ".c1{color:red;}").unwrap();
        assert_eq!(
            sheet.insert_rule("c1", ".c1{color:blue;}"),
            Err(SheetError::DuplicateClass("c1".into()))
        );
        assert_eq!(sheet.get("c1").unwrap().css, ".c1{color:red;}");
    }

    #[test]
    fn to_css_preserves_insertion_order() {
        let mut sheet = MemorySheet::new();
        sheet.insert_rule("c2", ".c2{color:red;}").unwrap();
        sheet.insert_rule("c1", ".c1{color:blue;}").unwrap();
        insta::assert_snapshot!(sheet.to_css(), @r"
        .c2{color:red;}
        .c1{color:blue;}
        ");
    }

    #[test]
    fn shared_sheet_observes_inserts() {
        let shared = SharedSheet::new();
        let mut writer = shared.clone();
        writer.insert_rule("c1", ".c1{color:red;}").unwrap();
        assert_eq!(shared.lock().len(), 1);
    }
}

//! Rule cache: rule hash → emitted class name, with insert-if-absent
//! registration into a [`SheetTarget`].

use std::collections::HashMap;
use std::fmt;

use crate::config::{ClassNaming, ConfigError, EngineConfig};
use crate::css::compiler::{CompiledRule, Compiler};
use crate::css::hash::RuleHash;
use crate::sheet::memory::MemorySheet;
use crate::sheet::target::{SheetError, SheetTarget};

/// Append-only mapping from rule hash to class name.
///
/// Each distinct hash is registered with the sheet at most once. A failed
/// registration records nothing, so the next `emit` of the same rule tries
/// again instead of handing out a class with no declarations behind it.
pub struct RuleCache {
    config: EngineConfig,
    entries: HashMap<RuleHash, String>,
    next_id: u64,
    sheet: Box<dyn SheetTarget>,
}

impl fmt::Debug for RuleCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleCache")
            .field("config", &self.config)
            .field("entries", &self.entries.len())
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}

impl Default for RuleCache {
    fn default() -> Self {
        Self::with_valid_config(EngineConfig::default(), MemorySheet::new())
    }
}

impl RuleCache {
    /// Create an empty cache that registers rules with `sheet`.
    ///
    /// Fails if `config` would produce invalid class names.
    pub fn new(config: EngineConfig, sheet: impl SheetTarget + 'static) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_valid_config(config, sheet))
    }

    fn with_valid_config(config: EngineConfig, sheet: impl SheetTarget + 'static) -> Self {
        Self {
            config,
            entries: HashMap::new(),
            next_id: 1,
            sheet: Box::new(sheet),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// A compiler using this cache's missing-token policy.
    pub fn compiler(&self) -> Compiler {
        Compiler::new(self.config.missing_tokens)
    }

    /// Number of distinct rules registered.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The class already assigned to `hash`, if any.
    pub fn class_for(&self, hash: RuleHash) -> Option<&str> {
        self.entries.get(&hash).map(String::as_str)
    }

    /// Return the class for `rule`, registering it with the sheet on first sight.
    pub fn emit(&mut self, rule: &CompiledRule) -> Result<String, SheetError> {
        if let Some(class_name) = self.entries.get(&rule.hash) {
            log::trace!("rule {} already registered as '{}'", rule.hash, class_name);
            return Ok(class_name.clone());
        }

        let class_name = self.allocate(rule.hash);
        let css = rule.css_text(&class_name);
        self.sheet.insert_rule(&class_name, &css)?;

        if self.config.class_naming == ClassNaming::Counter {
            self.next_id += 1;
        }
        log::debug!("registered rule {} as '{}': {}", rule.hash, class_name, css);
        self.entries.insert(rule.hash, class_name.clone());
        Ok(class_name)
    }

    /// Emit several rules, returning their classes in order.
    pub fn emit_all<'r>(
        &mut self,
        rules: impl IntoIterator<Item = &'r CompiledRule>,
    ) -> Result<Vec<String>, SheetError> {
        rules.into_iter().map(|rule| self.emit(rule)).collect()
    }

    /// Forget every entry and start over with `sheet`.
    ///
    /// For test isolation only: classes handed out before the reset have no
    /// backing declarations in the new sheet.
    pub fn reset(&mut self, sheet: impl SheetTarget + 'static) {
        log::debug!("rule cache reset ({} entries dropped)", self.entries.len());
        self.entries.clear();
        self.next_id = 1;
        self.sheet = Box::new(sheet);
    }

    fn allocate(&self, hash: RuleHash) -> String {
        match self.config.class_naming {
            ClassNaming::Counter => format!("{}{}", self.config.class_prefix, self.next_id),
            ClassNaming::Hash => format!("{}{}", self.config.class_prefix, hash.to_base36()),
        }
    }
}

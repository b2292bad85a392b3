//! The process-wide rule cache.
//!
//! Starts empty with [`EngineConfig::default`] and an in-memory sheet. Hosts
//! call [`init`] once at startup to install their configuration and sheet
//! target. The mutex makes insert-if-absent atomic, so concurrent emits of
//! the same rule converge on one registration and one class name.

use std::sync::{Mutex, MutexGuard, PoisonError};

use once_cell::sync::Lazy;

use crate::config::{ConfigError, EngineConfig};
use crate::css::compiler::CompiledRule;
use crate::sheet::cache::RuleCache;
use crate::sheet::memory::MemorySheet;
use crate::sheet::target::{SheetError, SheetTarget};

static RULE_CACHE: Lazy<Mutex<RuleCache>> = Lazy::new(|| Mutex::new(RuleCache::default()));

fn lock() -> MutexGuard<'static, RuleCache> {
    RULE_CACHE.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Install `config` and `sheet`, replacing whatever was there.
///
/// Meant to run once during application setup, before any component computes
/// its styles. An invalid `config` leaves the current cache in place.
pub fn init(config: EngineConfig, sheet: impl SheetTarget + 'static) -> Result<(), ConfigError> {
    log::debug!("initializing global rule cache: {:?}", config);
    let cache = RuleCache::new(config, sheet)?;
    *lock() = cache;
    Ok(())
}

/// Emit `rule` through the global cache.
pub fn emit(rule: &CompiledRule) -> Result<String, SheetError> {
    lock().emit(rule)
}

/// Run `f` with exclusive access to the global cache.
pub fn with_cache<R>(f: impl FnOnce(&mut RuleCache) -> R) -> R {
    f(&mut lock())
}

/// Drop every entry and start over with an empty in-memory sheet, keeping
/// the current configuration.
///
/// For test isolation; production code never tears the cache down.
pub fn reset() {
    lock().reset(MemorySheet::new());
}

//! Rule cache and sheet management: targets, in-memory sheet, cache, global instance.

pub mod target;
pub mod memory;
pub mod cache;
pub mod global;

pub use cache::RuleCache;
pub use memory::{MemorySheet, SharedSheet};
pub use target::{SheetError, SheetTarget};

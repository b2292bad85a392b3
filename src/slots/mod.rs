//! Slot state and class-list merging.

pub mod state;
pub mod merger;

pub use merger::{apply, merge_classes};
pub use state::{ComponentState, SlotState};

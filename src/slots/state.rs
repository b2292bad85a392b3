//! Per-render slot state owned by the calling component.

use std::collections::BTreeMap;

/// One slot's render state: its class list plus other style-affecting
/// properties the engine does not own (`style`, `dir`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotState {
    pub class_name: String,
    pub props: BTreeMap<String, String>,
}

impl SlotState {
    /// Create an empty slot state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the caller-supplied class list (builder).
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Set a non-class property (builder).
    pub fn with_prop(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }
}

/// Slot states for one component instance, keyed by slot name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentState {
    slots: BTreeMap<String, SlotState>,
}

impl ComponentState {
    /// Create a state with no slots.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a slot (builder).
    pub fn with_slot(mut self, name: impl Into<String>, slot: SlotState) -> Self {
        self.slots.insert(name.into(), slot);
        self
    }

    /// Look up a slot.
    pub fn slot(&self, name: &str) -> Option<&SlotState> {
        self.slots.get(name)
    }

    /// Mutable access to a slot, creating an empty one if absent.
    pub fn slot_mut(&mut self, name: &str) -> &mut SlotState {
        self.slots.entry(name.to_string()).or_default()
    }

    /// The class list of a slot, or `""` if the slot is absent.
    pub fn class_name(&self, name: &str) -> &str {
        self.slot(name).map_or("", |s| s.class_name.as_str())
    }

    /// Iterate slots in name order.
    pub fn slots(&self) -> impl Iterator<Item = (&str, &SlotState)> {
        self.slots.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_builder() {
        let slot = SlotState::new()
            .with_class_name("mine")
            .with_prop("dir", "rtl");
        assert_eq!(slot.class_name, "mine");
        assert_eq!(slot.props.get("dir").map(String::as_str), Some("rtl"));
    }

    #[test]
    fn test_slot_mut_creates_missing() {
        let mut state = ComponentState::new();
        assert!(state.slot("root").is_none());
        state.slot_mut("root").class_name.push_str("x");
        assert_eq!(state.class_name("root"), "x");
    }

    #[test]
    fn test_class_name_of_absent_slot() {
        assert_eq!(ComponentState::new().class_name("icon"), "");
    }
}

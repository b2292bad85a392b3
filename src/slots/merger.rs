//! Slot state merger: folds compiled classes into a slot's class list.
//!
//! Order is the contract: public slot class, base classes, theme classes,
//! then whatever the caller already put on the slot. Duplicates keep their
//! first position, which makes merging idempotent.

use std::collections::HashSet;

use crate::slots::state::SlotState;

/// Join whitespace-separated class lists, dropping repeated tokens.
///
/// ```rust
/// use gilt_styles::slots::merger::merge_classes;
///
/// assert_eq!(merge_classes(&["fui-Root c1", "", "c1 mine"]), "fui-Root c1 mine");
/// ```
pub fn merge_classes(parts: &[&str]) -> String {
    let mut seen = HashSet::new();
    let mut out = String::new();
    for token in parts.iter().flat_map(|p| p.split_whitespace()) {
        if !seen.insert(token) {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(token);
    }
    out
}

/// Rewrite `slot.class_name` as `public_class`, then `compiled` (base classes
/// followed by theme classes), then the slot's existing classes.
///
/// Only `class_name` is touched.
pub fn apply<S: AsRef<str>>(slot: &mut SlotState, public_class: &str, compiled: &[S]) {
    let mut parts: Vec<&str> = Vec::with_capacity(compiled.len() + 2);
    parts.push(public_class);
    parts.extend(compiled.iter().map(AsRef::as_ref));
    parts.push(&slot.class_name);
    slot.class_name = merge_classes(&parts);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn public_class_first_then_compiled() {
        let mut slot = SlotState::new();
        apply(&mut slot, "fui-Root", &["c1"]);
        assert_eq!(slot.class_name, "fui-Root c1");
    }

    #[test]
    fn apply_is_idempotent() {
        let mut slot = SlotState::new();
        apply(&mut slot, "fui-Root", &["c1"]);
        apply(&mut slot, "fui-Root", &["c1"]);
        assert_eq!(slot.class_name, "fui-Root c1");
    }

    #[test]
    fn caller_classes_come_last() {
        let mut slot = SlotState::new().with_class_name("mine other");
        apply(&mut slot, "fui-MenuList", &["c1", "c2"]);
        assert_eq!(slot.class_name, "fui-MenuList c1 c2 mine other");
    }

    #[test]
    fn idempotent_with_caller_classes() {
        let mut slot = SlotState::new().with_class_name("mine");
        apply(&mut slot, "fui-MenuList", &["c1", "c2"]);
        let once = slot.class_name.clone();
        apply(&mut slot, "fui-MenuList", &["c1", "c2"]);
        assert_eq!(slot.class_name, once);
    }

    #[test]
    fn duplicates_keep_first_position() {
        assert_eq!(merge_classes(&["a b", "c a", "b d"]), "a b c d");
    }

    #[test]
    fn extra_whitespace_is_collapsed() {
        assert_eq!(merge_classes(&["  a   b ", "\tc\n"]), "a b c");
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(merge_classes(&[]), "");
        assert_eq!(merge_classes(&["", "  "]), "");
    }

    #[test]
    fn other_props_untouched() {
        let mut slot = SlotState::new().with_prop("dir", "rtl");
        apply(&mut slot, "fui-Root", &[String::from("c1")]);
        assert_eq!(slot.props.get("dir").map(String::as_str), Some("rtl"));
    }
}

//! MenuList: a vertical stack of menu items.
//!
//! Only the root slot is styled, and only with theme-independent rules.

use crate::component::{compute_slot_styles, StyledComponent};
use crate::css::model::{StyleBlock, StyleDescription};
use crate::error::StyleError;
use crate::sheet::cache::RuleCache;
use crate::slots::state::ComponentState;
use crate::theme::resolver::TokenSource;

/// Public class on the MenuList root slot.
pub const MENU_LIST_CLASS_NAME: &str = "fui-MenuList";

/// Style hooks for the MenuList component.
pub struct MenuList;

impl StyledComponent for MenuList {
    type Props = ();
    const NAME: &'static str = "MenuList";

    fn slot_class_names() -> &'static [(&'static str, &'static str)] {
        &[("root", MENU_LIST_CLASS_NAME)]
    }

    fn base_styles() -> StyleDescription {
        StyleDescription::new().slot(
            "root",
            StyleBlock::new()
                .declare("display", "flex")
                .declare("flexDirection", "column")
                .declare("gap", "2px"),
        )
    }
}

/// Apply MenuList styling to `state`.
pub fn use_menu_list_styles<S: TokenSource + ?Sized>(
    state: &mut ComponentState,
    tokens: &S,
    cache: &mut RuleCache,
) -> Result<(), StyleError> {
    compute_slot_styles::<MenuList, S>(state, &(), tokens, cache)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::sheet::memory::SharedSheet;
    use crate::slots::state::SlotState;
    use crate::theme::theme::{Theme, TokenSet};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_root_classes() {
        let sheet = SharedSheet::new();
        let mut cache = RuleCache::new(EngineConfig::default(), sheet.clone()).unwrap();
        let mut state = ComponentState::new()
            .with_slot("root", SlotState::new().with_class_name("my-menu"));
        let theme = Theme::new("light", TokenSet::new());

        use_menu_list_styles(&mut state, &theme, &mut cache).unwrap();

        assert_eq!(state.class_name("root"), "fui-MenuList c1 my-menu");
        insta::assert_snapshot!(
            sheet.lock().to_css(),
            @".c1{column-gap:2px;display:flex;flex-direction:column;row-gap:2px;}"
        );
    }

    #[test]
    fn test_theme_independent() {
        let mut cache = RuleCache::default();
        let light = Theme::new("light", TokenSet::new().with("colorNeutralBackground1", "#fff"));
        let dark = Theme::new("dark", TokenSet::new().with("colorNeutralBackground1", "#000"));

        let mut a = ComponentState::new();
        let mut b = ComponentState::new();
        use_menu_list_styles(&mut a, &light, &mut cache).unwrap();
        use_menu_list_styles(&mut b, &dark, &mut cache).unwrap();

        assert_eq!(a, b);
        assert_eq!(cache.len(), 1);
    }
}

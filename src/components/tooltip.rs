//! Tooltip, styled for Azure themes.
//!
//! The content background comes from `controlBackground`, a token outside
//! the base contract, so the hook only accepts a theme that has been
//! checked against [`azure_extension`].

use once_cell::sync::Lazy;

use crate::component::{compute_slot_styles, StyledComponent};
use crate::css::model::{StyleBlock, StyleDescription};
use crate::error::StyleError;
use crate::sheet::cache::RuleCache;
use crate::slots::state::ComponentState;
use crate::theme::extension::{ExtendedTheme, ExtensionSchema};

pub const TOOLTIP_CLASS_NAME: &str = "fui-Tooltip";
pub const TOOLTIP_CONTENT_CLASS_NAME: &str = "fui-Tooltip__content";

static AZURE_EXTENSION: Lazy<ExtensionSchema> =
    Lazy::new(|| ExtensionSchema::new("azure").required("controlBackground"));

/// Extension tokens Azure-styled components read.
pub fn azure_extension() -> &'static ExtensionSchema {
    &AZURE_EXTENSION
}

/// Style hooks for the Tooltip component.
pub struct Tooltip;

impl StyledComponent for Tooltip {
    type Props = ();
    const NAME: &'static str = "Tooltip";

    fn slot_class_names() -> &'static [(&'static str, &'static str)] {
        &[
            ("root", TOOLTIP_CLASS_NAME),
            ("content", TOOLTIP_CONTENT_CLASS_NAME),
        ]
    }

    fn base_styles() -> StyleDescription {
        StyleDescription::new().slot(
            "root",
            StyleBlock::new()
                .declare("maxWidth", "480px")
                .declare("padding", "0"),
        )
    }

    fn themed_styles(_props: &()) -> StyleDescription {
        StyleDescription::new().slot(
            "content",
            StyleBlock::new()
                .declare("backgroundColor", "$controlBackground")
                .declare("padding", 8),
        )
    }
}

/// Apply Tooltip styling to `state`.
pub fn use_tooltip_styles(
    state: &mut ComponentState,
    theme: &ExtendedTheme<'_>,
    cache: &mut RuleCache,
) -> Result<(), StyleError> {
    compute_slot_styles::<Tooltip, _>(state, &(), theme, cache)
}

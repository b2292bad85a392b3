//! Built-in component style hooks: MenuList, Tooltip.

pub mod menu_list;
pub mod tooltip;

pub use menu_list::{use_menu_list_styles, MenuList, MENU_LIST_CLASS_NAME};
pub use tooltip::{
    azure_extension, use_tooltip_styles, Tooltip, TOOLTIP_CLASS_NAME, TOOLTIP_CONTENT_CLASS_NAME,
};

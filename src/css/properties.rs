//! Property names: normalization, the known longhand table, unitless properties.

/// Errors from property-name validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PropertyError {
    #[error("unknown property: {0}")]
    UnknownProperty(String),
    #[error("empty property name")]
    Empty,
}

/// Longhand properties the compiler accepts (kebab-case, sorted).
///
/// Shorthands live in [`crate::css::shorthands`] and are expanded into these.
pub const LONGHANDS: &[&str] = &[
    "align-content",
    "align-items",
    "align-self",
    "animation-delay",
    "animation-direction",
    "animation-duration",
    "animation-fill-mode",
    "animation-iteration-count",
    "animation-name",
    "animation-timing-function",
    "appearance",
    "background-clip",
    "background-color",
    "background-image",
    "background-position",
    "background-repeat",
    "background-size",
    "border-bottom-color",
    "border-bottom-left-radius",
    "border-bottom-right-radius",
    "border-bottom-style",
    "border-bottom-width",
    "border-collapse",
    "border-left-color",
    "border-left-style",
    "border-left-width",
    "border-right-color",
    "border-right-style",
    "border-right-width",
    "border-top-color",
    "border-top-left-radius",
    "border-top-right-radius",
    "border-top-style",
    "border-top-width",
    "bottom",
    "box-shadow",
    "box-sizing",
    "color",
    "column-gap",
    "content",
    "cursor",
    "display",
    "fill",
    "filter",
    "flex-basis",
    "flex-direction",
    "flex-grow",
    "flex-shrink",
    "flex-wrap",
    "font-family",
    "font-size",
    "font-style",
    "font-weight",
    "grid-auto-flow",
    "grid-column-end",
    "grid-column-start",
    "grid-row-end",
    "grid-row-start",
    "grid-template-areas",
    "grid-template-columns",
    "grid-template-rows",
    "height",
    "justify-content",
    "justify-items",
    "justify-self",
    "left",
    "letter-spacing",
    "line-height",
    "list-style-type",
    "margin-bottom",
    "margin-left",
    "margin-right",
    "margin-top",
    "max-height",
    "max-width",
    "min-height",
    "min-width",
    "object-fit",
    "opacity",
    "order",
    "outline-color",
    "outline-offset",
    "outline-style",
    "outline-width",
    "overflow-wrap",
    "overflow-x",
    "overflow-y",
    "padding-bottom",
    "padding-left",
    "padding-right",
    "padding-top",
    "pointer-events",
    "position",
    "resize",
    "right",
    "row-gap",
    "stroke",
    "text-align",
    "text-decoration-color",
    "text-decoration-line",
    "text-decoration-style",
    "text-overflow",
    "text-transform",
    "top",
    "transform",
    "transform-origin",
    "transition-delay",
    "transition-duration",
    "transition-property",
    "transition-timing-function",
    "user-select",
    "vertical-align",
    "visibility",
    "white-space",
    "width",
    "word-break",
    "z-index",
];

/// Longhands whose bare numbers are written without a unit.
const UNITLESS: &[&str] = &[
    "animation-iteration-count",
    "fill-opacity",
    "flex-grow",
    "flex-shrink",
    "font-weight",
    "grid-column-end",
    "grid-column-start",
    "grid-row-end",
    "grid-row-start",
    "line-height",
    "opacity",
    "order",
    "z-index",
];

const VENDOR_PREFIXES: &[&str] = &["-webkit-", "-moz-", "-ms-"];

/// Convert a camelCase property name to kebab-case.
///
/// Already-kebab names pass through. A leading capital marks a vendor prefix
/// (`WebkitAppearance` → `-webkit-appearance`). Custom properties (`--x`)
/// are returned as-is.
pub fn normalize_name(name: &str) -> String {
    if name.starts_with("--") {
        return name.to_string();
    }
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i == 0 || !out.ends_with('-') {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Whether `name` (kebab-case) is a custom property.
pub fn is_custom_property(name: &str) -> bool {
    name.starts_with("--") && name.len() > 2
}

/// Whether `name` (kebab-case) is an accepted longhand.
pub fn is_longhand(name: &str) -> bool {
    if is_custom_property(name) {
        return true;
    }
    let bare = VENDOR_PREFIXES
        .iter()
        .find_map(|p| name.strip_prefix(p))
        .unwrap_or(name);
    LONGHANDS.binary_search(&bare).is_ok()
}

/// Validate and normalize a longhand property name.
pub fn longhand(name: &str) -> Result<String, PropertyError> {
    if name.is_empty() {
        return Err(PropertyError::Empty);
    }
    let normalized = normalize_name(name);
    if is_longhand(&normalized) {
        Ok(normalized)
    } else {
        Err(PropertyError::UnknownProperty(name.to_string()))
    }
}

/// Whether bare numbers for this longhand are written without `px`.
pub fn is_unitless(name: &str) -> bool {
    is_custom_property(name) || UNITLESS.contains(&name)
}

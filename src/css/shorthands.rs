//! Shorthand expansion table.
//!
//! Every supported shorthand maps to a fixed, ordered list of longhands.
//! Expansion never depends on the theme: token references travel through it
//! as opaque components and are resolved afterwards.

use std::fmt;

use crate::css::scalar::{format_number, Scalar};
use crate::css::value::{Component, ParsedValue, Piece};

/// Bumped whenever an entry's longhands, order, or arity rules change.
pub const SHORTHAND_TABLE_VERSION: u32 = 2;

/// How a shorthand's components map onto its longhands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expansion {
    /// CSS box rule over four longhands: 1 value all, 2 vertical/horizontal,
    /// 3 top/horizontal/bottom, 4 each.
    Sides,
    /// Two longhands; one value sets both.
    Pair,
    /// `<width> <style> <color>` in any order. Longhands are three equal
    /// groups (widths, styles, colors); each component is classified and
    /// fans out to its group. Omitted roles emit nothing.
    Border,
    /// `flex: <grow> <shrink> <basis>` with the keyword and one-value forms.
    Flex,
}

/// One entry of the expansion table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shorthand {
    pub name: &'static str,
    pub expansion: Expansion,
    pub longhands: &'static [&'static str],
}

impl Shorthand {
    /// Accepted component counts, inclusive.
    pub fn arity(&self) -> (usize, usize) {
        match self.expansion {
            Expansion::Sides => (1, 4),
            Expansion::Pair => (1, 2),
            Expansion::Border => (1, 3),
            Expansion::Flex => (1, 3),
        }
    }
}

/// Errors from shorthand expansion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShorthandError {
    #[error("`{shorthand}` expects {min} to {max} values, got {got}")]
    Arity {
        shorthand: &'static str,
        min: usize,
        max: usize,
        got: usize,
    },
    #[error("`{shorthand}` cannot use {value:?} as a component")]
    InvalidComponent {
        shorthand: &'static str,
        value: String,
    },
    #[error("`{shorthand}` was given more than one {role}")]
    DuplicateRole {
        shorthand: &'static str,
        role: BorderRole,
    },
}

/// What a component of a `border`-like shorthand sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderRole {
    Width,
    Style,
    Color,
}

impl BorderRole {
    fn index(self) -> usize {
        match self {
            BorderRole::Width => 0,
            BorderRole::Style => 1,
            BorderRole::Color => 2,
        }
    }
}

impl fmt::Display for BorderRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BorderRole::Width => "width",
            BorderRole::Style => "style",
            BorderRole::Color => "color",
        })
    }
}

const LINE_STYLES: &[&str] = &[
    "dashed", "dotted", "double", "groove", "hidden", "inset", "none", "outset", "ridge", "solid",
];

const WIDTH_KEYWORDS: &[&str] = &["medium", "thick", "thin"];

const WIDTH_FUNCTIONS: &[&str] = &["calc(", "clamp(", "max(", "min("];

const COLOR_FUNCTIONS: &[&str] = &[
    "color(", "color-mix(", "hsl(", "hsla(", "hwb(", "lab(", "lch(", "light-dark(", "oklab(",
    "oklch(", "rgb(", "rgba(",
];

const CSS_WIDE_KEYWORDS: &[&str] = &["inherit", "initial", "revert", "revert-layer", "unset"];

const BORDER_WIDTH: [&str; 4] = [
    "border-top-width",
    "border-right-width",
    "border-bottom-width",
    "border-left-width",
];

/// The expansion table, sorted by name.
pub const SHORTHANDS: &[Shorthand] = &[
    Shorthand {
        name: "border",
        expansion: Expansion::Border,
        longhands: &[
            BORDER_WIDTH[0],
            BORDER_WIDTH[1],
            BORDER_WIDTH[2],
            BORDER_WIDTH[3],
            "border-top-style",
            "border-right-style",
            "border-bottom-style",
            "border-left-style",
            "border-top-color",
            "border-right-color",
            "border-bottom-color",
            "border-left-color",
        ],
    },
    Shorthand {
        name: "border-bottom",
        expansion: Expansion::Border,
        longhands: &["border-bottom-width", "border-bottom-style", "border-bottom-color"],
    },
    Shorthand {
        name: "border-color",
        expansion: Expansion::Sides,
        longhands: &[
            "border-top-color",
            "border-right-color",
            "border-bottom-color",
            "border-left-color",
        ],
    },
    Shorthand {
        name: "border-left",
        expansion: Expansion::Border,
        longhands: &["border-left-width", "border-left-style", "border-left-color"],
    },
    Shorthand {
        name: "border-radius",
        expansion: Expansion::Sides,
        longhands: &[
            "border-top-left-radius",
            "border-top-right-radius",
            "border-bottom-right-radius",
            "border-bottom-left-radius",
        ],
    },
    Shorthand {
        name: "border-right",
        expansion: Expansion::Border,
        longhands: &["border-right-width", "border-right-style", "border-right-color"],
    },
    Shorthand {
        name: "border-style",
        expansion: Expansion::Sides,
        longhands: &[
            "border-top-style",
            "border-right-style",
            "border-bottom-style",
            "border-left-style",
        ],
    },
    Shorthand {
        name: "border-top",
        expansion: Expansion::Border,
        longhands: &["border-top-width", "border-top-style", "border-top-color"],
    },
    Shorthand {
        name: "border-width",
        expansion: Expansion::Sides,
        longhands: &BORDER_WIDTH,
    },
    Shorthand {
        name: "flex",
        expansion: Expansion::Flex,
        longhands: &["flex-grow", "flex-shrink", "flex-basis"],
    },
    Shorthand {
        name: "gap",
        expansion: Expansion::Pair,
        longhands: &["row-gap", "column-gap"],
    },
    Shorthand {
        name: "inset",
        expansion: Expansion::Sides,
        longhands: &["top", "right", "bottom", "left"],
    },
    Shorthand {
        name: "margin",
        expansion: Expansion::Sides,
        longhands: &["margin-top", "margin-right", "margin-bottom", "margin-left"],
    },
    Shorthand {
        name: "outline",
        expansion: Expansion::Border,
        longhands: &["outline-width", "outline-style", "outline-color"],
    },
    Shorthand {
        name: "overflow",
        expansion: Expansion::Pair,
        longhands: &["overflow-x", "overflow-y"],
    },
    Shorthand {
        name: "padding",
        expansion: Expansion::Sides,
        longhands: &["padding-top", "padding-right", "padding-bottom", "padding-left"],
    },
];

/// Find the table entry for a kebab-case shorthand name.
pub fn lookup(name: &str) -> Option<&'static Shorthand> {
    SHORTHANDS
        .binary_search_by(|s| s.name.cmp(name))
        .ok()
        .map(|i| &SHORTHANDS[i])
}

/// Split a parsed value into single-component values.
fn split(value: &ParsedValue) -> Vec<ParsedValue> {
    match value {
        ParsedValue::Number(n) => vec![ParsedValue::Number(*n)],
        ParsedValue::Components(components) => components
            .iter()
            .map(|c| ParsedValue::Components(vec![c.clone()]))
            .collect(),
    }
}

fn literal(text: &str) -> ParsedValue {
    ParsedValue::Components(vec![Component::literal(text)])
}

/// Whether a single-component value is a plain number (`1`, `0.5`).
fn is_number(value: &ParsedValue) -> bool {
    match value {
        ParsedValue::Number(_) => true,
        ParsedValue::Components(c) => c
            .first()
            .and_then(Component::as_literal)
            .is_some_and(|t| t.parse::<f64>().is_ok()),
    }
}

/// Expand `value` into `(longhand, value)` pairs in table order.
///
/// Components holding a top-level `,` or `/`, or a lone operator, are
/// rejected: no table entry takes a list or a slash-separated form.
pub fn expand(
    shorthand: &Shorthand,
    value: &ParsedValue,
) -> Result<Vec<(&'static str, ParsedValue)>, ShorthandError> {
    if let ParsedValue::Components(components) = value {
        if let Some(bad) = components.iter().find(|c| c.has_top_level_separator()) {
            return Err(ShorthandError::InvalidComponent {
                shorthand: shorthand.name,
                value: bad.to_string(),
            });
        }
    }
    let parts = split(value);
    let (min, max) = shorthand.arity();
    if parts.len() < min || parts.len() > max {
        return Err(ShorthandError::Arity {
            shorthand: shorthand.name,
            min,
            max,
            got: parts.len(),
        });
    }
    let l = shorthand.longhands;

    let assigned: Vec<(&'static str, ParsedValue)> = match shorthand.expansion {
        Expansion::Sides => {
            let (top, right, bottom, left) = match parts.as_slice() {
                [a] => (a, a, a, a),
                [v, h] => (v, h, v, h),
                [t, h, b] => (t, h, b, h),
                [t, r, b, lft] => (t, r, b, lft),
                _ => unreachable!("arity checked above"),
            };
            vec![
                (l[0], top.clone()),
                (l[1], right.clone()),
                (l[2], bottom.clone()),
                (l[3], left.clone()),
            ]
        }
        Expansion::Pair => {
            let second = parts.get(1).unwrap_or(&parts[0]);
            vec![(l[0], parts[0].clone()), (l[1], second.clone())]
        }
        Expansion::Border => expand_border(shorthand, parts)?,
        Expansion::Flex => expand_flex(l, parts),
    };
    Ok(assigned)
}

fn expand_border(
    shorthand: &Shorthand,
    parts: Vec<ParsedValue>,
) -> Result<Vec<(&'static str, ParsedValue)>, ShorthandError> {
    let l = shorthand.longhands;
    let group = l.len() / 3;
    if let [single] = parts.as_slice() {
        if single_literal(single).is_some_and(|t| CSS_WIDE_KEYWORDS.contains(&t)) {
            return Ok(l.iter().map(|name| (*name, single.clone())).collect());
        }
    }

    let mut by_role: [Option<ParsedValue>; 3] = [None, None, None];
    for part in parts {
        let role = classify_border_component(shorthand, &part).ok_or_else(|| {
            ShorthandError::InvalidComponent {
                shorthand: shorthand.name,
                value: describe(&part),
            }
        })?;
        let slot = &mut by_role[role.index()];
        if slot.is_some() {
            return Err(ShorthandError::DuplicateRole {
                shorthand: shorthand.name,
                role,
            });
        }
        *slot = Some(part);
    }

    Ok(l.chunks(group)
        .zip(by_role)
        .filter_map(|(names, value)| value.map(|v| (names, v)))
        .flat_map(|(names, v)| names.iter().map(move |name| (*name, v.clone())))
        .collect())
}

/// Decide whether a `border`/`outline` component is a width, a style, or a
/// color. A lone token reference is always a color; any other plain
/// identifier that is not a width or style keyword is taken as a named color.
fn classify_border_component(shorthand: &Shorthand, part: &ParsedValue) -> Option<BorderRole> {
    let component = match part {
        ParsedValue::Number(_) => return Some(BorderRole::Width),
        ParsedValue::Components(c) => c.first()?,
    };
    if component.as_token().is_some() {
        return Some(BorderRole::Color);
    }
    let Some(Piece::Text(lead)) = component.pieces.first() else {
        return None;
    };
    let lead = lead.to_ascii_lowercase();
    if WIDTH_FUNCTIONS.iter().any(|f| lead.starts_with(f)) {
        return Some(BorderRole::Width);
    }
    if COLOR_FUNCTIONS.iter().any(|f| lead.starts_with(f)) {
        return Some(BorderRole::Color);
    }
    let text = component.as_literal()?.to_ascii_lowercase();
    if text.starts_with('#') {
        Some(BorderRole::Color)
    } else if text == "0" || text.parse::<Scalar>().is_ok() || WIDTH_KEYWORDS.contains(&text.as_str()) {
        Some(BorderRole::Width)
    } else if LINE_STYLES.contains(&text.as_str()) {
        Some(BorderRole::Style)
    } else if text == "auto" {
        (shorthand.name == "outline").then_some(BorderRole::Style)
    } else if text.starts_with(|c: char| c.is_ascii_alphabetic())
        && text.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        Some(BorderRole::Color)
    } else {
        None
    }
}

fn single_literal(value: &ParsedValue) -> Option<&str> {
    match value {
        ParsedValue::Components(c) => c.first().and_then(Component::as_literal),
        ParsedValue::Number(_) => None,
    }
}

fn describe(value: &ParsedValue) -> String {
    match value {
        ParsedValue::Number(n) => format_number(*n),
        ParsedValue::Components(c) => c.iter().map(Component::to_string).collect::<Vec<_>>().join(" "),
    }
}

fn expand_flex(l: &'static [&'static str], parts: Vec<ParsedValue>) -> Vec<(&'static str, ParsedValue)> {
    let (grow, shrink, basis) = match parts.as_slice() {
        [single] => {
            match single_literal(single) {
                Some("none") => (literal("0"), literal("0"), literal("auto")),
                Some("auto") => (literal("1"), literal("1"), literal("auto")),
                Some("initial") => (literal("0"), literal("1"), literal("auto")),
                _ if is_number(single) => (single.clone(), literal("1"), literal("0%")),
                _ => (literal("1"), literal("1"), single.clone()),
            }
        }
        [grow, second] if is_number(second) => (grow.clone(), second.clone(), literal("0%")),
        [grow, basis] => (grow.clone(), literal("1"), basis.clone()),
        [grow, shrink, basis] => (grow.clone(), shrink.clone(), basis.clone()),
        _ => unreachable!("arity checked above"),
    };
    vec![(l[0], grow), (l[1], shrink), (l[2], basis)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::properties::is_longhand;
    use crate::css::value::StyleValue;
    use pretty_assertions::assert_eq;

    fn run(name: &str, value: &str) -> Result<Vec<(&'static str, String)>, ShorthandError> {
        let parsed = StyleValue::from(value).parse().unwrap();
        let shorthand = lookup(name).unwrap();
        expand(shorthand, &parsed).map(|pairs| {
            pairs
                .into_iter()
                .map(|(name, v)| match v {
                    ParsedValue::Number(n) => (name, n.to_string()),
                    ParsedValue::Components(c) => {
                        (name, c[0].as_literal().unwrap_or("<token>").to_string())
                    }
                })
                .collect()
        })
    }

    fn pairs(items: &[(&'static str, &str)]) -> Vec<(&'static str, String)> {
        items.iter().map(|(k, v)| (*k, v.to_string())).collect()
    }

    #[test]
    fn table_is_sorted_and_expands_to_known_longhands() {
        let names: Vec<_> = SHORTHANDS.iter().map(|s| s.name).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        for s in SHORTHANDS {
            for l in s.longhands {
                assert!(is_longhand(l), "{} expands to unknown {}", s.name, l);
            }
        }
    }

    #[test]
    fn gap_one_value() {
        assert_eq!(
            run("gap", "2px").unwrap(),
            pairs(&[("row-gap", "2px"), ("column-gap", "2px")])
        );
    }

    #[test]
    fn gap_two_values() {
        assert_eq!(
            run("gap", "2px 4px").unwrap(),
            pairs(&[("row-gap", "2px"), ("column-gap", "4px")])
        );
    }

    #[test]
    fn padding_box_rule() {
        assert_eq!(
            run("padding", "1px 2px 3px").unwrap(),
            pairs(&[
                ("padding-top", "1px"),
                ("padding-right", "2px"),
                ("padding-bottom", "3px"),
                ("padding-left", "2px"),
            ])
        );
        assert_eq!(
            run("margin", "0 auto").unwrap(),
            pairs(&[
                ("margin-top", "0"),
                ("margin-right", "auto"),
                ("margin-bottom", "0"),
                ("margin-left", "auto"),
            ])
        );
    }

    #[test]
    fn number_value_fans_out() {
        let shorthand = lookup("padding").unwrap();
        let expanded = expand(shorthand, &ParsedValue::Number(8.0)).unwrap();
        assert_eq!(expanded.len(), 4);
        assert!(expanded.iter().all(|(_, v)| *v == ParsedValue::Number(8.0)));
    }

    #[test]
    fn too_many_values_is_arity_error() {
        assert_eq!(
            run("padding", "1px 2px 3px 4px 5px"),
            Err(ShorthandError::Arity {
                shorthand: "padding",
                min: 1,
                max: 4,
                got: 5,
            })
        );
        assert!(run("gap", "1px 2px 3px").is_err());
    }

    #[test]
    fn border_fans_out_by_group() {
        let expanded = run("border", "1px solid $stroke").unwrap();
        assert_eq!(expanded.len(), 12);
        assert_eq!(expanded[0], ("border-top-width", "1px".to_string()));
        assert_eq!(expanded[5], ("border-right-style", "solid".to_string()));
        assert_eq!(expanded[11], ("border-left-color", "<token>".to_string()));
    }

    #[test]
    fn border_width_only() {
        let expanded = run("border", "2px").unwrap();
        assert_eq!(expanded.len(), 4);
        assert!(expanded.iter().all(|(name, _)| name.ends_with("-width")));
    }

    #[test]
    fn side_border_width_and_style() {
        assert_eq!(
            run("border-bottom", "1px solid").unwrap(),
            pairs(&[("border-bottom-width", "1px"), ("border-bottom-style", "solid")])
        );
    }

    #[test]
    fn border_components_in_any_order() {
        assert_eq!(
            run("border-top", "solid 1px red").unwrap(),
            pairs(&[
                ("border-top-width", "1px"),
                ("border-top-style", "solid"),
                ("border-top-color", "red"),
            ])
        );
        assert_eq!(
            run("border-left", "$stroke dashed").unwrap(),
            pairs(&[("border-left-style", "dashed"), ("border-left-color", "<token>")])
        );
        assert_eq!(
            run("border-right", "rgba(0, 0, 0, 0.1) thin").unwrap(),
            pairs(&[
                ("border-right-width", "thin"),
                ("border-right-color", "rgba(0, 0, 0, 0.1)"),
            ])
        );
    }

    #[test]
    fn none_is_a_style() {
        assert_eq!(
            run("outline", "none").unwrap(),
            pairs(&[("outline-style", "none")])
        );
        let expanded = run("border", "none").unwrap();
        assert_eq!(
            expanded,
            pairs(&[
                ("border-top-style", "none"),
                ("border-right-style", "none"),
                ("border-bottom-style", "none"),
                ("border-left-style", "none"),
            ])
        );
    }

    #[test]
    fn outline_accepts_auto_style() {
        assert_eq!(
            run("outline", "2px auto").unwrap(),
            pairs(&[("outline-width", "2px"), ("outline-style", "auto")])
        );
        assert_eq!(
            run("border", "auto"),
            Err(ShorthandError::InvalidComponent {
                shorthand: "border",
                value: "auto".into(),
            })
        );
    }

    #[test]
    fn css_wide_keyword_sets_every_longhand() {
        let expanded = run("outline", "inherit").unwrap();
        assert_eq!(
            expanded,
            pairs(&[
                ("outline-width", "inherit"),
                ("outline-style", "inherit"),
                ("outline-color", "inherit"),
            ])
        );
    }

    #[test]
    fn border_role_given_twice_rejected() {
        assert_eq!(
            run("border", "1px 2px"),
            Err(ShorthandError::DuplicateRole {
                shorthand: "border",
                role: BorderRole::Width,
            })
        );
        assert_eq!(
            run("outline", "solid none"),
            Err(ShorthandError::DuplicateRole {
                shorthand: "outline",
                role: BorderRole::Style,
            })
        );
    }

    #[test]
    fn unclassifiable_border_component_rejected() {
        assert_eq!(
            run("border", "1px solid 'red'"),
            Err(ShorthandError::InvalidComponent {
                shorthand: "border",
                value: "'red'".into(),
            })
        );
        assert!(matches!(
            run("border-top", "2 solid"),
            Err(ShorthandError::InvalidComponent { .. })
        ));
        assert!(matches!(
            run("outline", "var(--ring)"),
            Err(ShorthandError::InvalidComponent { .. })
        ));
    }

    #[test]
    fn number_value_is_a_border_width() {
        let shorthand = lookup("border-top").unwrap();
        let expanded = expand(shorthand, &ParsedValue::Number(1.0)).unwrap();
        assert_eq!(expanded, vec![("border-top-width", ParsedValue::Number(1.0))]);
    }

    #[test]
    fn slash_and_operator_components_rejected() {
        assert_eq!(
            run("border-radius", "4px / 2px"),
            Err(ShorthandError::InvalidComponent {
                shorthand: "border-radius",
                value: "/".into(),
            })
        );
        assert_eq!(
            run("border-radius", "4px/2px"),
            Err(ShorthandError::InvalidComponent {
                shorthand: "border-radius",
                value: "4px/2px".into(),
            })
        );
        assert!(matches!(
            run("margin", "1px - 2px"),
            Err(ShorthandError::InvalidComponent { .. })
        ));
        assert!(matches!(
            run("padding", "1px, 2px"),
            Err(ShorthandError::InvalidComponent { .. })
        ));
        assert!(run("padding", "calc(1px / 2) 0").is_ok());
    }

    #[test]
    fn flex_forms() {
        assert_eq!(
            run("flex", "1").unwrap(),
            pairs(&[("flex-grow", "1"), ("flex-shrink", "1"), ("flex-basis", "0%")])
        );
        assert_eq!(
            run("flex", "none").unwrap(),
            pairs(&[("flex-grow", "0"), ("flex-shrink", "0"), ("flex-basis", "auto")])
        );
        assert_eq!(
            run("flex", "200px").unwrap(),
            pairs(&[("flex-grow", "1"), ("flex-shrink", "1"), ("flex-basis", "200px")])
        );
        assert_eq!(
            run("flex", "2 3").unwrap(),
            pairs(&[("flex-grow", "2"), ("flex-shrink", "3"), ("flex-basis", "0%")])
        );
        assert_eq!(
            run("flex", "1 0 auto").unwrap(),
            pairs(&[("flex-grow", "1"), ("flex-shrink", "0"), ("flex-basis", "auto")])
        );
    }

    #[test]
    fn expansion_is_deterministic() {
        assert_eq!(run("inset", "0").unwrap(), run("inset", "0").unwrap());
    }

    #[test]
    fn lookup_unknown() {
        assert!(lookup("background").is_none());
        assert!(lookup("padding-top").is_none());
    }
}

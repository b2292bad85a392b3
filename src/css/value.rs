//! Declaration values: authored [`StyleValue`]s and their parsed component form.
//!
//! A text value is split into whitespace-separated components at paren depth
//! zero (so `rgba(0, 0, 0, 0.1)` stays one component). Each component keeps
//! its source text, with `$token` references cut out as separate pieces so
//! they can be substituted after shorthand expansion.

use std::fmt;

use crate::css::scalar::format_number;
use crate::css::tokenizer::{tokenize, Token};

/// Errors from value parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValueError {
    #[error("empty value")]
    Empty,
    #[error("unrecognized character at byte {position} in {value:?}")]
    Unrecognized { value: String, position: usize },
    #[error("unbalanced parentheses in {0:?}")]
    UnbalancedParens(String),
}

/// A value as authored in a style description.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// A bare number. Rendered with `px` unless the property is unitless.
    Number(f64),
    /// Literal CSS text, possibly containing `$token` references.
    Text(String),
}

impl StyleValue {
    /// Create a numeric value.
    pub fn number(n: f64) -> Self {
        StyleValue::Number(n)
    }

    /// Create a text value.
    pub fn text(s: impl Into<String>) -> Self {
        StyleValue::Text(s.into())
    }

    /// Parse into components.
    pub fn parse(&self) -> Result<ParsedValue, ValueError> {
        match self {
            StyleValue::Number(n) => Ok(ParsedValue::Number(*n)),
            StyleValue::Text(s) => parse_components(s).map(ParsedValue::Components),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Text(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Text(s)
    }
}

impl From<f32> for StyleValue {
    /// Widened through its shortest decimal form so `0.1f32` stays `0.1`.
    fn from(n: f32) -> Self {
        StyleValue::Number(n.to_string().parse().unwrap_or(f64::from(n)))
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        StyleValue::Number(f64::from(n))
    }
}

impl From<i64> for StyleValue {
    fn from(n: i64) -> Self {
        StyleValue::Number(n as f64)
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Number(n) => f.write_str(&format_number(*n)),
            StyleValue::Text(s) => f.write_str(s),
        }
    }
}

/// One piece of a component: literal text or a token reference (without `$`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Piece {
    Text(String),
    Token(String),
}

/// A whitespace-delimited part of a value, e.g. `1px`, `$stroke`, `rgba(0, 0, 0, .1)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Component {
    pub pieces: Vec<Piece>,
}

impl Component {
    /// A component made of literal text only.
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            pieces: vec![Piece::Text(text.into())],
        }
    }

    /// The token name if this component is exactly one token reference.
    pub fn as_token(&self) -> Option<&str> {
        match self.pieces.as_slice() {
            [Piece::Token(name)] => Some(name),
            _ => None,
        }
    }

    /// The literal text if this component contains no token references.
    pub fn as_literal(&self) -> Option<&str> {
        match self.pieces.as_slice() {
            [Piece::Text(text)] => Some(text),
            _ => None,
        }
    }

    /// Whether the component holds a `,` or `/` outside parentheses and
    /// strings, or is a lone arithmetic operator.
    pub fn has_top_level_separator(&self) -> bool {
        if matches!(self.as_literal(), Some("+" | "-" | "*")) {
            return true;
        }
        let mut depth = 0usize;
        let mut quote = None;
        for piece in &self.pieces {
            let Piece::Text(text) = piece else { continue };
            for c in text.chars() {
                match (quote, c) {
                    (Some(q), c) if c == q => quote = None,
                    (Some(_), _) => {}
                    (None, '"' | '\'') => quote = Some(c),
                    (None, '(') => depth += 1,
                    (None, ')') => depth = depth.saturating_sub(1),
                    (None, ',' | '/') if depth == 0 => return true,
                    _ => {}
                }
            }
        }
        false
    }

    /// Names of every token this component references, in order.
    pub fn token_names(&self) -> impl Iterator<Item = &str> {
        self.pieces.iter().filter_map(|p| match p {
            Piece::Token(name) => Some(name.as_str()),
            Piece::Text(_) => None,
        })
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for piece in &self.pieces {
            match piece {
                Piece::Text(text) => f.write_str(text)?,
                Piece::Token(name) => write!(f, "${name}")?,
            }
        }
        Ok(())
    }
}

/// A parsed value, ready for shorthand expansion and token resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedValue {
    Number(f64),
    Components(Vec<Component>),
}

impl ParsedValue {
    /// Number of top-level components (a bare number counts as one).
    pub fn arity(&self) -> usize {
        match self {
            ParsedValue::Number(_) => 1,
            ParsedValue::Components(c) => c.len(),
        }
    }
}

/// Split `input` into top-level components.
pub fn parse_components(input: &str) -> Result<Vec<Component>, ValueError> {
    let tokens = tokenize(input).map_err(|position| ValueError::Unrecognized {
        value: input.to_string(),
        position,
    })?;
    if tokens.is_empty() {
        return Err(ValueError::Empty);
    }

    // Group token indices into components by whitespace gaps at depth 0.
    let mut groups: Vec<(usize, usize)> = Vec::new();
    let mut depth: usize = 0;
    let mut start = 0;
    for i in 0..tokens.len() {
        if i > start && depth == 0 && tokens[i].span.start > tokens[i - 1].span.end {
            groups.push((start, i));
            start = i;
        }
        match tokens[i].token {
            Token::Function | Token::ParenOpen => depth += 1,
            Token::ParenClose => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| ValueError::UnbalancedParens(input.to_string()))?;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(ValueError::UnbalancedParens(input.to_string()));
    }
    groups.push((start, tokens.len()));

    let components = groups
        .into_iter()
        .map(|(first, last)| {
            let begin = tokens[first].span.start;
            let end = tokens[last - 1].span.end;
            let mut pieces = Vec::new();
            let mut cursor = begin;
            for tok in &tokens[first..last] {
                if tok.token != Token::TokenRef {
                    continue;
                }
                if tok.span.start > cursor {
                    pieces.push(Piece::Text(input[cursor..tok.span.start].to_string()));
                }
                pieces.push(Piece::Token(input[tok.span.start + 1..tok.span.end].to_string()));
                cursor = tok.span.end;
            }
            if end > cursor {
                pieces.push(Piece::Text(input[cursor..end].to_string()));
            }
            Component { pieces }
        })
        .collect();

    Ok(components)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> Piece {
        Piece::Text(s.into())
    }

    fn token(s: &str) -> Piece {
        Piece::Token(s.into())
    }

    #[test]
    fn single_literal() {
        let comps = parse_components("2px").unwrap();
        assert_eq!(comps, vec![Component::literal("2px")]);
    }

    #[test]
    fn splits_on_whitespace() {
        let comps = parse_components("0  8px").unwrap();
        assert_eq!(comps.len(), 2);
        assert_eq!(comps[0].as_literal(), Some("0"));
        assert_eq!(comps[1].as_literal(), Some("8px"));
    }

    #[test]
    fn keeps_functions_whole() {
        let comps = parse_components("0 2px rgba(0, 0, 0, 0.1)").unwrap();
        assert_eq!(comps.len(), 3);
        assert_eq!(comps[2].as_literal(), Some("rgba(0, 0, 0, 0.1)"));
    }

    #[test]
    fn standalone_token_reference() {
        let comps = parse_components("1px solid $colorNeutralStroke1").unwrap();
        assert_eq!(comps.len(), 3);
        assert_eq!(comps[2].as_token(), Some("colorNeutralStroke1"));
    }

    #[test]
    fn embedded_token_reference() {
        let comps = parse_components("calc($spacingM * 2)").unwrap();
        assert_eq!(comps.len(), 1);
        assert_eq!(
            comps[0].pieces,
            vec![text("calc("), token("spacingM"), text(" * 2)")]
        );
        assert_eq!(comps[0].token_names().collect::<Vec<_>>(), vec!["spacingM"]);
    }

    #[test]
    fn top_level_separators() {
        let comps = parse_components("4px / 2px").unwrap();
        assert!(comps[1].has_top_level_separator());
        assert!(!comps[0].has_top_level_separator());
        let comps = parse_components("4px/2px 1px").unwrap();
        assert!(comps[0].has_top_level_separator());
        let comps = parse_components("a, b").unwrap();
        assert!(comps[0].has_top_level_separator());
        let comps = parse_components("rgba(0, 0, 0, 0.1) calc($spacingM / 2)").unwrap();
        assert!(comps.iter().all(|c| !c.has_top_level_separator()));
    }

    #[test]
    fn component_displays_source_text() {
        let comps = parse_components("calc($spacingM * 2)").unwrap();
        assert_eq!(comps[0].to_string(), "calc($spacingM * 2)");
    }

    #[test]
    fn empty_value_is_error() {
        assert_eq!(parse_components("   "), Err(ValueError::Empty));
    }

    #[test]
    fn unbalanced_parens_is_error() {
        assert!(matches!(
            parse_components("calc(1px + 2px"),
            Err(ValueError::UnbalancedParens(_))
        ));
        assert!(matches!(
            parse_components("1px)"),
            Err(ValueError::UnbalancedParens(_))
        ));
    }

    #[test]
    fn unrecognized_character_is_error() {
        assert!(matches!(
            parse_components("red !important"),
            Err(ValueError::Unrecognized { position: 4, .. })
        ));
    }

    #[test]
    fn number_value_has_arity_one() {
        assert_eq!(StyleValue::from(8).parse().unwrap().arity(), 1);
        assert_eq!(StyleValue::from("1px 2px 3px").parse().unwrap().arity(), 3);
    }

    #[test]
    fn display_number() {
        assert_eq!(StyleValue::Number(8.0).to_string(), "8");
        assert_eq!(StyleValue::from("2px").to_string(), "2px");
    }
}

//! logos-based tokenizer for declaration values.
//!
//! Token priority in logos is determined by:
//! 1. Longest match wins (e.g. `rgba(` as [`Token::Function`] beats `rgba` as Ident)
//! 2. For equal length matches, earlier-defined variants win
//!
//! Our ordering ensures:
//! - `#ff00aa` matches [`Token::HexColor`]
//! - `2px` matches [`Token::Dimension`], not `Number` + `Ident`
//! - `$colorBrand` matches [`Token::TokenRef`]
//! - `-webkit-box` and `--custom` match [`Token::Ident`], `-` alone is an operator

use std::ops::Range;

use logos::Logos;

/// Value token produced by the lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum Token {
    // ── Compound tokens (longer matches, defined first) ──────────────

    /// Theme token reference: `$colorNeutralBackground1`, `$spacing-m`.
    #[regex(r"\$[a-zA-Z_][a-zA-Z0-9_-]*")]
    TokenRef,

    /// CSS hex color: `#fff`, `#ff00aa`, `#ff00aa80` (3-8 hex digits).
    #[regex(r"#[0-9a-fA-F]{3,8}")]
    HexColor,

    /// Dimension: number with a unit suffix like `2px`, `1.5rem`, `50%`, `200ms`.
    #[regex(r"-?([0-9]+(\.[0-9]+)?|\.[0-9]+)(px|em|rem|%|vw|vh|vmin|vmax|fr|ms|s|deg|turn|ch|ex|pt)")]
    Dimension,

    /// Number: integer or float, possibly negative.
    #[regex(r"-?([0-9]+(\.[0-9]+)?|\.[0-9]+)")]
    Number,

    /// Function opening: an identifier immediately followed by `(`.
    #[regex(r"-{0,2}[a-zA-Z_][a-zA-Z0-9_-]*\(")]
    Function,

    /// Identifier: keywords, color names, custom idents, `--custom` names.
    #[regex(r"-{0,2}[a-zA-Z_][a-zA-Z0-9_-]*")]
    Ident,

    /// Double-quoted string literal.
    #[regex(r#""[^"]*""#)]
    StringLiteral,

    /// Single-quoted string literal.
    #[regex(r"'[^']*'")]
    StringLiteralSingle,

    // ── Single-character punctuation ─────────────────────────────────

    /// `(`
    #[token("(")]
    ParenOpen,

    /// `)`
    #[token(")")]
    ParenClose,

    /// `,`
    #[token(",")]
    Comma,

    /// Arithmetic/separator operators inside `calc()` and friends: `+ - * /`.
    #[regex(r"[+*/-]")]
    Operator,
}

/// A lexed token with its byte span in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned {
    pub token: Token,
    pub span: Range<usize>,
}

/// Tokenize a declaration value.
///
/// Returns the byte offset of the first unrecognized character on failure.
pub fn tokenize(input: &str) -> Result<Vec<Spanned>, usize> {
    let lexer = Token::lexer(input);
    let mut tokens = Vec::new();
    for (result, span) in lexer.spanned() {
        match result {
            Ok(token) => tokens.push(Spanned { token, span }),
            Err(()) => return Err(span.start),
        }
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: tokenize and return just the token variants.
    fn tokens(input: &str) -> Vec<Token> {
        tokenize(input)
            .unwrap()
            .into_iter()
            .map(|t| t.token)
            .collect()
    }

    /// Helper: tokenize and return (token, slice) pairs.
    fn tokens_with_text(input: &str) -> Vec<(Token, String)> {
        tokenize(input)
            .unwrap()
            .into_iter()
            .map(|t| (t.token, input[t.span].to_string()))
            .collect()
    }

    #[test]
    fn test_token_refs() {
        let result = tokens_with_text("$colorBrand $spacing-m $_internal");
        assert_eq!(result[0], (Token::TokenRef, "$colorBrand".into()));
        assert_eq!(result[1], (Token::TokenRef, "$spacing-m".into()));
        assert_eq!(result[2], (Token::TokenRef, "$_internal".into()));
    }

    #[test]
    fn test_dimensions() {
        let result = tokens_with_text("2px 1.5rem 50% 200ms .5em");
        assert_eq!(result[0], (Token::Dimension, "2px".into()));
        assert_eq!(result[1], (Token::Dimension, "1.5rem".into()));
        assert_eq!(result[2], (Token::Dimension, "50%".into()));
        assert_eq!(result[3], (Token::Dimension, "200ms".into()));
        assert_eq!(result[4], (Token::Dimension, ".5em".into()));
    }

    #[test]
    fn test_numbers() {
        let result = tokens_with_text("10 -5 3.14 0");
        assert_eq!(result[0], (Token::Number, "10".into()));
        assert_eq!(result[1], (Token::Number, "-5".into()));
        assert_eq!(result[2], (Token::Number, "3.14".into()));
        assert_eq!(result[3], (Token::Number, "0".into()));
    }

    #[test]
    fn test_hex_colors() {
        let result = tokens_with_text("#fff #ff00aa #ff00aa80");
        assert_eq!(result[0], (Token::HexColor, "#fff".into()));
        assert_eq!(result[1], (Token::HexColor, "#ff00aa".into()));
        assert_eq!(result[2], (Token::HexColor, "#ff00aa80".into()));
    }

    #[test]
    fn test_idents() {
        let result = tokens_with_text("column space-between -webkit-box --custom");
        assert_eq!(result[0], (Token::Ident, "column".into()));
        assert_eq!(result[1], (Token::Ident, "space-between".into()));
        assert_eq!(result[2], (Token::Ident, "-webkit-box".into()));
        assert_eq!(result[3], (Token::Ident, "--custom".into()));
    }

    #[test]
    fn test_function_call() {
        assert_eq!(
            tokens("rgba(0, 0, 0, 0.1)"),
            vec![
                Token::Function,
                Token::Number,
                Token::Comma,
                Token::Number,
                Token::Comma,
                Token::Number,
                Token::Comma,
                Token::Number,
                Token::ParenClose,
            ]
        );
    }

    #[test]
    fn test_calc_with_operator() {
        assert_eq!(
            tokens("calc(100% - $spacingM)"),
            vec![
                Token::Function,
                Token::Dimension,
                Token::Operator,
                Token::TokenRef,
                Token::ParenClose,
            ]
        );
    }

    #[test]
    fn test_string_literals() {
        let result = tokens_with_text(r#""Segoe UI" 'x'"#);
        assert_eq!(result[0], (Token::StringLiteral, "\"Segoe UI\"".into()));
        assert_eq!(result[1], (Token::StringLiteralSingle, "'x'".into()));
    }

    #[test]
    fn test_dimension_over_number() {
        assert_eq!(tokens("2px"), vec![Token::Dimension]);
        assert_eq!(tokens("42"), vec![Token::Number]);
    }

    #[test]
    fn test_unrecognized_character_reports_offset() {
        assert_eq!(tokenize("red !important"), Err(4));
        assert_eq!(tokenize("a; b"), Err(1));
    }

    #[test]
    fn test_whitespace_only() {
        assert!(tokens("   \t\n  ").is_empty());
    }
}

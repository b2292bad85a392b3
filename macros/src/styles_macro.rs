//! styles! macro: parse per-slot style blocks at compile time and generate
//! `StyleDescription` builder code.

use proc_macro2::{Delimiter, Span, TokenStream, TokenTree};
use quote::{quote, quote_spanned};
use syn::parse::{Parse, ParseStream};
use syn::{braced, parenthesized, Error, Ident, LitFloat, LitInt, LitStr, Result, Token};

// ---------------------------------------------------------------------------
// AST types
// ---------------------------------------------------------------------------

/// A single parsed value piece.
#[derive(Debug, Clone)]
pub(crate) enum StyleToken {
    /// A bare identifier like `flex`, `space-between`, `auto`.
    Ident(String, Span),
    /// A unitless number like `8` or `0.5`.
    Number(f64, Span),
    /// A number with a unit, kept as written (`2px`, `1.5rem`, `50%`).
    Dimension(String, Span),
    /// `#` followed by hex digits.
    Hash(String, Span),
    /// A quoted string literal.
    Str(String, Span),
    /// `$name`: a theme token reference.
    TokenRef(String, Span),
    /// `name(args)`, with args already rendered.
    Function(String, String, Span),
    /// `+ - * /` inside function arguments, or a `,` separating list items.
    Operator(char, Span),
}

impl StyleToken {
    fn span(&self) -> Span {
        match self {
            StyleToken::Ident(_, s)
            | StyleToken::Number(_, s)
            | StyleToken::Dimension(_, s)
            | StyleToken::Hash(_, s)
            | StyleToken::Str(_, s)
            | StyleToken::TokenRef(_, s)
            | StyleToken::Function(_, _, s)
            | StyleToken::Operator(_, s) => *s,
        }
    }

    /// CSS text for this piece.
    fn to_css(&self) -> String {
        match self {
            StyleToken::Ident(s, _) | StyleToken::Dimension(s, _) | StyleToken::Hash(s, _) => {
                s.clone()
            }
            StyleToken::Number(n, _) => n.to_string(),
            StyleToken::Str(s, _) => format!("\"{}\"", s.replace('"', "\\\"")),
            StyleToken::TokenRef(name, _) => format!("${}", name),
            StyleToken::Function(name, args, _) => format!("{}({})", name, args),
            StyleToken::Operator(c, _) => c.to_string(),
        }
    }
}

/// Join value pieces with spaces, attaching list commas to the piece before
/// them (`"Segoe UI", sans-serif`).
pub(crate) fn join_values(values: &[StyleToken]) -> String {
    let mut out = String::new();
    for value in values {
        if !out.is_empty() && !matches!(value, StyleToken::Operator(',', _)) {
            out.push(' ');
        }
        out.push_str(&value.to_css());
    }
    out
}

/// A property declaration: `property-name: value1 value2;`
#[derive(Debug, Clone)]
pub(crate) struct StyleDeclaration {
    /// Property name as written (kebab-case or camelCase).
    pub name: String,
    pub name_span: Span,
    pub values: Vec<StyleToken>,
}

/// One item inside a block.
#[derive(Debug, Clone)]
pub(crate) enum BlockItem {
    Declaration(StyleDeclaration),
    Nested(String, StyleBlockAst),
}

/// A `{ ... }` block of declarations and nested selector blocks.
#[derive(Debug, Clone, Default)]
pub(crate) struct StyleBlockAst {
    pub items: Vec<BlockItem>,
}

/// `slot_name { ... }`
#[derive(Debug, Clone)]
pub(crate) struct SlotAst {
    pub name: String,
    pub block: StyleBlockAst,
}

/// The top-level input to the styles! macro.
#[derive(Debug)]
struct StylesInput {
    slots: Vec<SlotAst>,
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

impl Parse for StylesInput {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut slots: Vec<SlotAst> = Vec::new();
        while !input.is_empty() {
            let name: Ident = input.parse()?;
            let content;
            braced!(content in input);
            let block = parse_block(&content)?;
            let slot_name = name.to_string();
            if slots.iter().any(|s| s.name == slot_name) {
                return Err(Error::new(
                    name.span(),
                    format!("slot `{}` is declared more than once", slot_name),
                ));
            }
            slots.push(SlotAst {
                name: slot_name,
                block,
            });
        }
        Ok(StylesInput { slots })
    }
}

fn starts_selector(input: ParseStream) -> bool {
    input.peek(Token![:])
        || input.peek(Token![::])
        || input.peek(Token![&])
        || input.peek(Token![.])
        || input.peek(syn::token::Bracket)
}

/// Parse the contents of a `{ ... }` block.
pub(crate) fn parse_block(input: ParseStream) -> Result<StyleBlockAst> {
    let mut items = Vec::new();
    while !input.is_empty() {
        if starts_selector(input) {
            let selector = parse_selector(input)?;
            let content;
            braced!(content in input);
            items.push(BlockItem::Nested(selector, parse_block(&content)?));
        } else {
            items.push(BlockItem::Declaration(parse_declaration(input)?));
        }
    }
    Ok(StyleBlockAst { items })
}

/// Collect selector tokens up to the next brace group and render them.
fn parse_selector(input: ParseStream) -> Result<String> {
    let span = input.span();
    let mut tokens = Vec::new();
    while !input.is_empty() && !input.peek(syn::token::Brace) {
        tokens.push(input.parse::<TokenTree>()?);
    }
    if input.is_empty() {
        return Err(Error::new(span, "expected `{` after nested selector"));
    }
    Ok(selector_text(tokens))
}

fn is_combinator(tt: &TokenTree) -> bool {
    matches!(tt, TokenTree::Punct(p) if matches!(p.as_char(), '>' | '+' | '~'))
}

fn is_word(tt: &TokenTree) -> bool {
    matches!(tt, TokenTree::Ident(_) | TokenTree::Literal(_))
}

/// Render selector tokens without the spaces proc_macro2 inserts, keeping
/// one around combinators and between adjacent words (`& > svg`, `& span`).
pub(crate) fn selector_text(tokens: impl IntoIterator<Item = TokenTree>) -> String {
    let mut out = String::new();
    let mut prev: Option<TokenTree> = None;
    for tt in tokens {
        if let Some(p) = &prev {
            let after_amp = matches!(p, TokenTree::Punct(x) if x.as_char() == '&');
            if is_combinator(p)
                || is_combinator(&tt)
                || (is_word(p) && is_word(&tt))
                || (after_amp && is_word(&tt))
            {
                out.push(' ');
            }
        }
        match &tt {
            TokenTree::Group(g) => {
                let (open, close) = match g.delimiter() {
                    Delimiter::Parenthesis => ("(", ")"),
                    Delimiter::Bracket => ("[", "]"),
                    Delimiter::Brace => ("{", "}"),
                    Delimiter::None => ("", ""),
                };
                out.push_str(open);
                out.push_str(&selector_text(g.stream()));
                out.push_str(close);
            }
            other => out.push_str(&other.to_string()),
        }
        prev = Some(tt);
    }
    out
}

/// Parse a property name: `display`, `flex-direction`, `flexDirection`,
/// `-webkit-appearance`, `--my-var`.
fn parse_property_name(input: ParseStream) -> Result<(String, Span)> {
    let mut name = String::new();
    let span = input.span();
    while input.peek(Token![-]) {
        input.parse::<Token![-]>()?;
        name.push('-');
    }
    let first: Ident = input.parse()?;
    name.push_str(&first.to_string());
    while input.peek(Token![-]) {
        input.parse::<Token![-]>()?;
        let next: Ident = input.parse()?;
        name.push('-');
        name.push_str(&next.to_string());
    }
    Ok((name, span))
}

/// Parse a single declaration: `property-name: values;`
pub(crate) fn parse_declaration(input: ParseStream) -> Result<StyleDeclaration> {
    let (name, name_span) = parse_property_name(input)?;
    input.parse::<Token![:]>()?;

    let mut values = Vec::new();
    while !input.is_empty() && !input.peek(Token![;]) {
        values.push(parse_value(input)?);
    }
    if input.is_empty() {
        return Err(Error::new(
            name_span,
            format!("missing `;` after property `{}`", name),
        ));
    }
    input.parse::<Token![;]>()?;

    if values.is_empty() {
        return Err(Error::new(name_span, format!("property `{}` has no value", name)));
    }

    Ok(StyleDeclaration {
        name,
        name_span,
        values,
    })
}

/// A number literal, with any unit suffix or trailing `%` folded in.
fn parse_number(input: ParseStream, negative: bool, span: Span) -> Result<StyleToken> {
    let sign = if negative { "-" } else { "" };
    let (digits, suffix) = if input.peek(LitFloat) {
        let lit: LitFloat = input.parse()?;
        (lit.base10_digits().to_string(), lit.suffix().to_string())
    } else {
        let lit: LitInt = input.parse()?;
        (lit.base10_digits().to_string(), lit.suffix().to_string())
    };

    if !suffix.is_empty() {
        return Ok(StyleToken::Dimension(format!("{}{}{}", sign, digits, suffix), span));
    }
    if input.peek(Token![%]) {
        input.parse::<Token![%]>()?;
        return Ok(StyleToken::Dimension(format!("{}{}%", sign, digits), span));
    }
    let value: f64 = digits
        .parse()
        .map_err(|_| Error::new(span, "invalid number"))?;
    Ok(StyleToken::Number(if negative { -value } else { value }, span))
}

/// Parse a single value piece.
pub(crate) fn parse_value(input: ParseStream) -> Result<StyleToken> {
    // Hex color: `#` followed by an ident (`#fff`) or a numeric literal
    // (`#0078d4` lexes as an int with a suffix, `#1e1e1e` as a float).
    if input.peek(Token![#]) {
        let span = input.parse::<Token![#]>()?.span;
        let hex = if input.peek(Ident) {
            input.parse::<Ident>()?.to_string()
        } else if input.peek(LitInt) {
            let mut s = input.parse::<LitInt>()?.to_string();
            if input.peek(Ident) {
                s.push_str(&input.parse::<Ident>()?.to_string());
            }
            s
        } else if input.peek(LitFloat) {
            input.parse::<LitFloat>()?.to_string()
        } else {
            return Err(input.error("expected hex color value after `#`"));
        };
        return Ok(StyleToken::Hash(format!("#{}", hex), span));
    }

    if input.peek(Token![$]) {
        let span = input.parse::<Token![$]>()?.span;
        let name: Ident = input
            .parse()
            .map_err(|_| Error::new(span, "expected a token name after `$`"))?;
        return Ok(StyleToken::TokenRef(name.to_string(), span));
    }

    if input.peek(Token![,]) {
        let comma = input.parse::<Token![,]>()?;
        return Ok(StyleToken::Operator(',', comma.span));
    }

    if input.peek(LitStr) {
        let lit: LitStr = input.parse()?;
        return Ok(StyleToken::Str(lit.value(), lit.span()));
    }

    if input.peek(LitFloat) || input.peek(LitInt) {
        return parse_number(input, false, input.span());
    }

    if input.peek(Token![-]) && (input.peek2(LitInt) || input.peek2(LitFloat)) {
        let span = input.parse::<Token![-]>()?.span;
        return parse_number(input, true, span);
    }

    // Identifiers, including vendor-prefixed (`-webkit-box`) and custom
    // (`--ring`) names.
    if input.peek(Ident) || (input.peek(Token![-]) && (input.peek2(Ident) || input.peek2(Token![-]))) {
        let span = input.span();
        let mut name = String::new();
        while input.peek(Token![-]) {
            input.parse::<Token![-]>()?;
            name.push('-');
        }
        let ident: Ident = input.parse()?;
        name.push_str(&ident.to_string());
        while input.peek(Token![-]) && input.peek2(Ident) {
            input.parse::<Token![-]>()?;
            name.push('-');
            name.push_str(&input.parse::<Ident>()?.to_string());
        }
        if input.peek(syn::token::Paren) {
            let content;
            parenthesized!(content in input);
            let args = parse_function_args(&content)?;
            return Ok(StyleToken::Function(name, args, span));
        }
        return Ok(StyleToken::Ident(name, span));
    }

    Err(input.error("unexpected token in style value"))
}

/// Parse and render function arguments: values, commas, and arithmetic
/// operators (`rgba(0, 0, 0, 0.4)`, `calc(100% - $spacingM)`).
fn parse_function_args(input: ParseStream) -> Result<String> {
    let mut out = String::new();
    let mut leading = true;
    while !input.is_empty() {
        let piece = if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
            leading = true;
            out.push_str(", ");
            continue;
        } else if !leading
            && (input.peek(Token![+])
                || input.peek(Token![-])
                || input.peek(Token![*])
                || input.peek(Token![/]))
        {
            let punct: proc_macro2::Punct = input.parse()?;
            StyleToken::Operator(punct.as_char(), punct.span())
        } else {
            parse_value(input)?
        };
        if !out.is_empty() && !out.ends_with(' ') {
            out.push(' ');
        }
        out.push_str(&piece.to_css());
        leading = matches!(piece, StyleToken::Operator(..));
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Code generation
// ---------------------------------------------------------------------------

/// Generate the `StyleValue` expression for a declaration's values.
fn generate_value(decl: &StyleDeclaration) -> TokenStream {
    let span = decl.values.first().map_or(decl.name_span, StyleToken::span);
    if let [StyleToken::Number(n, _)] = decl.values.as_slice() {
        let n = *n;
        return quote_spanned! {span=> ::gilt_styles::css::value::StyleValue::Number(#n) };
    }
    let text = join_values(&decl.values);
    quote_spanned! {span=>
        ::gilt_styles::css::value::StyleValue::Text(::std::string::String::from(#text))
    }
}

fn generate_block(block: &StyleBlockAst) -> Result<TokenStream> {
    let mut calls = Vec::new();
    for item in &block.items {
        match item {
            BlockItem::Declaration(decl) => {
                let name = &decl.name;
                let value = generate_value(decl);
                calls.push(quote_spanned! {decl.name_span=> .declare(#name, #value) });
            }
            BlockItem::Nested(selector, child) => {
                let child = generate_block(child)?;
                calls.push(quote! { .nested(#selector, #child) });
            }
        }
    }
    Ok(quote! {
        ::gilt_styles::css::model::StyleBlock::new() #(#calls)*
    })
}

/// Entry point: generate code for the entire styles! macro.
pub(crate) fn styles_impl(input: TokenStream) -> Result<TokenStream> {
    let parsed: StylesInput = syn::parse2(input)?;

    if parsed.slots.is_empty() {
        return Err(Error::new(
            Span::call_site(),
            "styles! macro requires at least one slot",
        ));
    }

    let mut slot_calls = Vec::new();
    for slot in &parsed.slots {
        let name = &slot.name;
        let block = generate_block(&slot.block)?;
        slot_calls.push(quote! { .slot(#name, #block) });
    }

    Ok(quote! {
        ::gilt_styles::css::model::StyleDescription::new() #(#slot_calls)*
    })
}

// ===========================================================================
// Tests
// ===========================================================================

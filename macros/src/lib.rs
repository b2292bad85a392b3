//! Proc macros for gilt-styles: `styles!` compile-time style descriptions.
//!
//! This crate is not meant to be used directly. Enable the `macros` feature on `gilt-styles`.

use proc_macro::TokenStream;

mod styles_macro;

/// Compile-time style description macro.
///
/// Parses per-slot style blocks and produces a
/// `gilt_styles::css::model::StyleDescription`.
///
/// # Syntax
///
/// ```ignore
/// let desc = styles! {
///     root {
///         display: flex;
///         flex-direction: column;
///         gap: 2px;
///         :hover { background-color: $colorNeutralBackground1Hover; }
///     }
///     content {
///         background-color: $controlBackground;
///         padding: 8;
///     }
/// };
/// ```
///
/// Property names may be kebab-case or camelCase. A lone unitless number
/// becomes `StyleValue::Number` (rendered with `px` where the property takes
/// a length); anything else is passed through as text, with `$name` marking
/// a theme token. Nested blocks start with `:`, `::`, `&`, `.` or `[`.
/// Property and value validity are checked when the description is compiled.
#[proc_macro]
pub fn styles(input: TokenStream) -> TokenStream {
    styles_macro::styles_impl(input.into())
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

//! The rendering surface's side of rule registration.

/// Errors raised by a style sheet target.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SheetError {
    #[error("style sheet is unavailable")]
    Unavailable,
    #[error("style sheet rejected rule for class '{class_name}': {reason}")]
    Rejected { class_name: String, reason: String },
    #[error("class '{0}' is already registered")]
    DuplicateClass(String),
}

/// A surface that accepts rule registrations, e.g. a DOM style element or an
/// in-memory sheet.
///
/// Registration is additive: a target never rewrites or removes a class it
/// has accepted.
pub trait SheetTarget: Send {
    /// Register `css` (a complete rule such as `.c1{row-gap:2px;}`) for `class_name`.
    fn insert_rule(&mut self, class_name: &str, css: &str) -> Result<(), SheetError>;
}

impl<T: SheetTarget + ?Sized> SheetTarget for Box<T> {
    fn insert_rule(&mut self, class_name: &str, css: &str) -> Result<(), SheetError> {
        (**self).insert_rule(class_name, css)
    }
}

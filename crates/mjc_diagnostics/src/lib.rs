//! mjc_diagnostics: Diagnostics raised while building symbol tables.
//!
//! The symbol table never reports anything itself; it answers `false` or a
//! typed error, and the semantic analyzer turns that answer into one of the
//! diagnostics defined here.

use mjc_core::text::TextSpan;
use std::fmt;

/// How severe a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    Warning,
    Error,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCategory::Warning => write!(f, "warning"),
            DiagnosticCategory::Error => write!(f, "error"),
        }
    }
}

/// A message template with a code and category.
#[derive(Debug, Clone)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    /// May contain `{0}`, `{1}`, etc. placeholders.
    pub message: &'static str,
}

/// A realized diagnostic: resolved text plus where the declaration was.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub span: Option<TextSpan>,
    pub message_text: String,
    pub code: u32,
    pub category: DiagnosticCategory,
}

impl Diagnostic {
    /// A diagnostic with no location.
    pub fn new(message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            span: None,
            message_text: format_message(message.message, args),
            code: message.code,
            category: message.category,
        }
    }

    /// A diagnostic pointing at `span` in the file being analyzed.
    pub fn at(span: TextSpan, message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            span: Some(span),
            ..Self::new(message, args)
        }
    }

    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(span) = self.span {
            write!(f, "({}): ", span.start)?;
        }
        write!(f, "{} MJ{}: {}", self.category, self.code, self.message_text)
    }
}

/// Substitute `{0}`, `{1}`, ... in `template` with `args`.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

/// Diagnostics accumulated over one analysis pass.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Order by source position; unlocated diagnostics come first.
    pub fn sort(&mut self) {
        self.diagnostics.sort_by_key(|d| d.span.map(|s| s.start));
    }
}

// ============================================================================
// Diagnostic Messages
// ============================================================================

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($code:expr, Error, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Error, message: $msg }
        };
        ($code:expr, Warning, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Warning, message: $msg }
        };
    }

    // ========================================================================
    // Declaration errors (2000-2099)
    // ========================================================================
    pub const _0_IS_ALREADY_DECLARED_IN_1_2: DiagnosticMessage = diag!(2001, Error, "'{0}' is already declared in {1} '{2}'.");
    pub const A_0_CANNOT_BE_DECLARED_IN_CLASS_1: DiagnosticMessage = diag!(2002, Error, "A {0} cannot be declared in class '{1}'.");
    pub const CYCLIC_INHERITANCE_INVOLVING_CLASS_0: DiagnosticMessage = diag!(2003, Error, "Cyclic inheritance involving class '{0}'.");
    pub const PARAMETER_0_MUST_PRECEDE_THE_BODY_OF_METHOD_1: DiagnosticMessage = diag!(2004, Error, "Parameter '{0}' must be declared before the body of method '{1}'.");
    pub const SUPERCLASS_OF_0_IS_NOT_DECLARED: DiagnosticMessage = diag!(2005, Warning, "The superclass of '{0}' is not declared in this compilation unit.");
    pub const CLASS_0_INHERITS_FROM_CYCLIC_CLASS_1: DiagnosticMessage = diag!(2006, Error, "Class '{0}' inherits from class '{1}', which is part of an inheritance cycle.");
    pub const A_DECLARATION_IN_0_1_HAS_NO_NAME: DiagnosticMessage = diag!(2007, Error, "A declaration in {0} '{1}' has no name.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message() {
        let text = format_message("'{0}' is already declared in {1} '{2}'.", &["x", "class", "Point"]);
        assert_eq!(text, "'x' is already declared in class 'Point'.");
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::at(
            TextSpan::new(42, 1),
            &messages::_0_IS_ALREADY_DECLARED_IN_1_2,
            &["x", "class", "Point"],
        );
        assert_eq!(diag.to_string(), "(42): error MJ2001: 'x' is already declared in class 'Point'.");

        let unlocated = Diagnostic::new(&messages::SUPERCLASS_OF_0_IS_NOT_DECLARED, &["B"]);
        assert_eq!(
            unlocated.to_string(),
            "warning MJ2005: The superclass of 'B' is not declared in this compilation unit."
        );
    }

    #[test]
    fn test_error_counting() {
        let mut collection = DiagnosticCollection::new();
        assert!(collection.is_empty());

        collection.add(Diagnostic::new(&messages::SUPERCLASS_OF_0_IS_NOT_DECLARED, &["B"]));
        assert!(!collection.has_errors());

        collection.add(Diagnostic::new(&messages::CYCLIC_INHERITANCE_INVOLVING_CLASS_0, &["A"]));
        assert!(collection.has_errors());
        assert_eq!(collection.error_count(), 1);
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn test_sort_by_position() {
        let mut collection = DiagnosticCollection::new();
        collection.add(Diagnostic::at(TextSpan::new(10, 1), &messages::A_0_CANNOT_BE_DECLARED_IN_CLASS_1, &["block", "A"]));
        collection.add(Diagnostic::at(TextSpan::new(5, 1), &messages::_0_IS_ALREADY_DECLARED_IN_1_2, &["x", "class", "A"]));
        collection.add(Diagnostic::new(&messages::CYCLIC_INHERITANCE_INVOLVING_CLASS_0, &["A"]));
        collection.sort();
        let codes: Vec<_> = collection.diagnostics().iter().map(|d| d.code).collect();
        assert_eq!(codes, vec![2003, 2001, 2002]);
    }
}

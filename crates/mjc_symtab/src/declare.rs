//! The seam between the symbol table and the analyzer's diagnostics.

use crate::entry::{Entry, SemanticEntry};
use crate::method::MethodEntry;
use crate::scope::{BindingError, ScopeEntry};
use crate::variable::VariableEntry;
use mjc_core::text::TextSpan;
use mjc_diagnostics::{messages, Diagnostic, DiagnosticCollection};

impl BindingError {
    /// The diagnostic the analyzer reports for this refusal.
    pub fn to_diagnostic(&self, span: TextSpan) -> Diagnostic {
        match self {
            BindingError::DuplicateName {
                name,
                scope,
                scope_kind,
            } => Diagnostic::at(
                span,
                &messages::_0_IS_ALREADY_DECLARED_IN_1_2,
                &[name.as_str(), scope_kind.as_str(), scope.as_str()],
            ),
            BindingError::DisallowedKind { kind, class, .. } => Diagnostic::at(
                span,
                &messages::A_0_CANNOT_BE_DECLARED_IN_CLASS_1,
                &[kind.as_str(), class.as_str()],
            ),
            BindingError::ParameterAfterBody { name, method } => Diagnostic::at(
                span,
                &messages::PARAMETER_0_MUST_PRECEDE_THE_BODY_OF_METHOD_1,
                &[name.as_str(), method.as_str()],
            ),
            BindingError::EmptyName { scope, scope_kind } => Diagnostic::at(
                span,
                &messages::A_DECLARATION_IN_0_1_HAS_NO_NAME,
                &[scope_kind.as_str(), scope.as_str()],
            ),
        }
    }
}

/// Bind `entry` in `scope` under its own name, reporting a refusal as a
/// diagnostic at `span`. Returns whether the binding was made.
pub fn declare<S>(
    scope: &mut S,
    entry: impl Into<Entry>,
    span: TextSpan,
    diagnostics: &mut DiagnosticCollection,
) -> bool
where
    S: ScopeEntry + ?Sized,
{
    let entry = entry.into();
    let name = entry.name().to_owned();
    report(scope.try_add_binding(&name, entry), span, diagnostics)
}

/// Like [`declare`], for a method parameter.
pub fn declare_parameter(
    method: &mut MethodEntry,
    param: VariableEntry,
    span: TextSpan,
    diagnostics: &mut DiagnosticCollection,
) -> bool {
    report(method.try_add_parameter(param), span, diagnostics)
}

fn report(
    result: Result<(), BindingError>,
    span: TextSpan,
    diagnostics: &mut DiagnosticCollection,
) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            diagnostics.add(err.to_diagnostic(span));
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BlockEntry, ClassEntry};
    use mjc_types::Type;

    #[test]
    fn test_declare_reports_duplicates() {
        let mut class = ClassEntry::new("Point");
        let mut diagnostics = DiagnosticCollection::new();

        assert!(declare(&mut class, VariableEntry::new("x", Type::Int), TextSpan::new(10, 1), &mut diagnostics));
        assert!(!declare(&mut class, VariableEntry::new("x", Type::Float), TextSpan::new(30, 1), &mut diagnostics));

        assert_eq!(diagnostics.len(), 1);
        let diag = &diagnostics.diagnostics()[0];
        assert_eq!(diag.code, 2001);
        assert_eq!(diag.span, Some(TextSpan::new(30, 1)));
        assert_eq!(diag.message_text, "'x' is already declared in class 'Point'.");
    }

    #[test]
    fn test_declare_reports_disallowed_kind() {
        let mut class = ClassEntry::new("Point");
        let mut diagnostics = DiagnosticCollection::new();

        assert!(!declare(&mut class, BlockEntry::anonymous(0), TextSpan::default(), &mut diagnostics));
        assert_eq!(diagnostics.diagnostics()[0].message_text, "A block cannot be declared in class 'Point'.");
    }

    #[test]
    fn test_declare_parameter_after_body() {
        let mut method = MethodEntry::new("f", Type::Void);
        let mut diagnostics = DiagnosticCollection::new();

        assert!(declare(&mut method, VariableEntry::new("tmp", Type::Int), TextSpan::default(), &mut diagnostics));
        assert!(!declare_parameter(&mut method, VariableEntry::new("n", Type::Int), TextSpan::default(), &mut diagnostics));
        assert_eq!(diagnostics.diagnostics()[0].code, 2004);
    }

    #[test]
    fn test_unnamed_binding_diagnostic() {
        let mut class = ClassEntry::new("Point");
        let err = class
            .try_add_binding("", VariableEntry::new("x", Type::Int).into())
            .unwrap_err();
        let diag = err.to_diagnostic(TextSpan::new(7, 0));
        assert_eq!(diag.code, 2007);
        assert_eq!(diag.message_text, "A declaration in class 'Point' has no name.");
    }

    #[test]
    fn test_declare_through_dyn_scope() {
        let mut block = BlockEntry::anonymous(3);
        let scope: &mut dyn ScopeEntry = &mut block;
        let mut diagnostics = DiagnosticCollection::new();

        assert!(declare(scope, VariableEntry::new("i", Type::Int), TextSpan::default(), &mut diagnostics));
        assert!(diagnostics.is_empty());
        assert_eq!(block.to_string(), "{int i}");
    }
}

use crate::entry::{entry_name, EntryKind, SemanticEntry};
use mjc_types::Type;
use std::fmt;

/// A declared variable: a field, a parameter or a local.
#[derive(Debug, Clone)]
pub struct VariableEntry {
    name: String,
    ty: Type,
}

impl VariableEntry {
    /// # Panics
    ///
    /// If `name` is empty.
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: entry_name(name),
            ty,
        }
    }

    /// The declared type. Variables always have one.
    pub fn var_type(&self) -> &Type {
        &self.ty
    }
}

impl SemanticEntry for VariableEntry {
    fn name(&self) -> &str {
        &self.name
    }

    fn ty(&self) -> Option<&Type> {
        Some(&self.ty)
    }

    fn kind(&self) -> EntryKind {
        EntryKind::Variable
    }
}

/// Renders as `<type> <name>` with no terminator, so the same text works as
/// a field declaration and as one entry of a parameter list.
impl fmt::Display for VariableEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ty, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_has_no_terminator() {
        assert_eq!(VariableEntry::new("x", Type::Int).to_string(), "int x");
        assert_eq!(
            VariableEntry::new("args", Type::array_of(Type::String)).to_string(),
            "String[] args"
        );
    }

    #[test]
    fn test_accessors() {
        let origin = VariableEntry::new("origin", Type::class("Point"));
        assert_eq!(origin.name(), "origin");
        assert_eq!(origin.var_type(), &Type::class("Point"));
        assert_eq!(origin.ty(), Some(&Type::class("Point")));
        assert_eq!(origin.kind(), EntryKind::Variable);
    }
}

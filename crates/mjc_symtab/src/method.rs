//! Method scopes.

use crate::entry::{entry_name, Entry, EntryKind, SemanticEntry};
use crate::scope::{BindingError, Scope, ScopeEntry, Sealed};
use crate::variable::VariableEntry;
use mjc_types::Type;
use std::fmt;

/// A method declaration.
///
/// Its scope holds the parameters first, in order, followed by the locals
/// and nested blocks of the body.
#[derive(Debug, Clone)]
pub struct MethodEntry {
    name: String,
    return_type: Type,
    scope: Scope,
    param_count: usize,
}

impl MethodEntry {
    /// # Panics
    ///
    /// If `name` is empty.
    pub fn new(name: impl Into<String>, return_type: Type) -> Self {
        Self {
            name: entry_name(name),
            return_type,
            scope: Scope::new(),
            param_count: 0,
        }
    }

    pub fn return_type(&self) -> &Type {
        &self.return_type
    }

    /// Bind a parameter. Parameters must all come before the first local.
    pub fn try_add_parameter(&mut self, param: VariableEntry) -> Result<(), BindingError> {
        let name = param.name().to_owned();
        if self.scope.len() > self.param_count {
            return Err(BindingError::ParameterAfterBody {
                name,
                method: self.name.clone(),
            });
        }
        self.scope.bind(&self.name, EntryKind::Method, &name, param.into())?;
        self.param_count += 1;
        Ok(())
    }

    pub fn add_parameter(&mut self, param: VariableEntry) -> bool {
        self.try_add_parameter(param).is_ok()
    }

    pub fn param_count(&self) -> usize {
        self.param_count
    }

    /// The parameters in declaration order.
    pub fn parameters(&self) -> impl Iterator<Item = &VariableEntry> {
        self.scope
            .entries()
            .take(self.param_count)
            .filter_map(Entry::as_variable)
    }
}

impl SemanticEntry for MethodEntry {
    fn name(&self) -> &str {
        &self.name
    }

    fn ty(&self) -> Option<&Type> {
        Some(&self.return_type)
    }

    fn kind(&self) -> EntryKind {
        EntryKind::Method
    }
}

impl Sealed for MethodEntry {}

impl ScopeEntry for MethodEntry {
    fn scope(&self) -> &Scope {
        &self.scope
    }

    fn try_add_binding(&mut self, name: &str, entry: Entry) -> Result<(), BindingError> {
        self.scope.bind(&self.name, EntryKind::Method, name, entry)
    }

    fn lookup_scope_mut(&mut self, name: &str) -> Option<&mut dyn ScopeEntry> {
        self.scope.nested_scope_mut(name)
    }
}

/// The signature, e.g. `int m(int x, int y)`. No terminator.
impl fmt::Display for MethodEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}(", self.return_type, self.name)?;
        for (i, param) in self.parameters().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", param)?;
        }
        f.write_str(")")
    }
}

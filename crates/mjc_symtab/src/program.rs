use crate::entry::{entry_name, Entry, EntryKind, SemanticEntry};
use crate::scope::{BindingError, Scope, ScopeEntry, Sealed};
use mjc_types::Type;
use std::fmt;

/// The compilation unit: the outermost scope, holding top-level classes.
///
/// Insertion is unrestricted; it is never itself bound anywhere.
#[derive(Debug, Clone)]
pub struct ProgramEntry {
    name: String,
    scope: Scope,
}

impl ProgramEntry {
    /// # Panics
    ///
    /// If `name` is empty.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: entry_name(name),
            scope: Scope::new(),
        }
    }
}

impl SemanticEntry for ProgramEntry {
    fn name(&self) -> &str {
        &self.name
    }

    fn ty(&self) -> Option<&Type> {
        None
    }

    fn kind(&self) -> EntryKind {
        EntryKind::Program
    }
}

impl Sealed for ProgramEntry {}

impl ScopeEntry for ProgramEntry {
    fn scope(&self) -> &Scope {
        &self.scope
    }

    fn try_add_binding(&mut self, name: &str, entry: Entry) -> Result<(), BindingError> {
        self.scope.bind(&self.name, EntryKind::Program, name, entry)
    }

    fn lookup_scope_mut(&mut self, name: &str) -> Option<&mut dyn ScopeEntry> {
        self.scope.nested_scope_mut(name)
    }
}

impl fmt::Display for ProgramEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_bindings())
    }
}

use crate::entry::{entry_name, Entry, EntryKind, SemanticEntry};
use crate::scope::{BindingError, Scope, ScopeEntry, Sealed};
use mjc_types::Type;
use std::fmt;

/// An anonymous nested scope: a bare `{ }`, or the body of an `if` or `while`.
///
/// Blocks have no source name, so they are labelled `block#<n>`.
#[derive(Debug, Clone)]
pub struct BlockEntry {
    label: String,
    scope: Scope,
}

impl BlockEntry {
    /// # Panics
    ///
    /// If `label` is empty.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: entry_name(label),
            scope: Scope::new(),
        }
    }

    /// A block labelled by its ordinal within the enclosing scope.
    pub fn anonymous(ordinal: usize) -> Self {
        Self::new(format!("block#{}", ordinal))
    }
}

impl SemanticEntry for BlockEntry {
    fn name(&self) -> &str {
        &self.label
    }

    fn ty(&self) -> Option<&Type> {
        None
    }

    fn kind(&self) -> EntryKind {
        EntryKind::Block
    }
}

impl Sealed for BlockEntry {}

impl ScopeEntry for BlockEntry {
    fn scope(&self) -> &Scope {
        &self.scope
    }

    fn try_add_binding(&mut self, name: &str, entry: Entry) -> Result<(), BindingError> {
        self.scope.bind(&self.label, EntryKind::Block, name, entry)
    }

    fn lookup_scope_mut(&mut self, name: &str) -> Option<&mut dyn ScopeEntry> {
        self.scope.nested_scope_mut(name)
    }
}

impl fmt::Display for BlockEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.render_bindings())
    }
}

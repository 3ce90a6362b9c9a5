//! Class scopes.

use crate::entry::{entry_name, Entry, EntryKind, SemanticEntry};
use crate::method::MethodEntry;
use crate::registry::{ClassId, ClassRegistry};
use crate::render;
use crate::scope::{BindingError, Scope, ScopeEntry, Sealed};
use crate::variable::VariableEntry;
use mjc_options::RenderOptions;
use mjc_types::Type;
use std::fmt;
use tracing::debug;

/// A class declaration and its member table.
///
/// Only variables (fields), methods and nested classes can be bound here.
#[derive(Debug, Clone)]
pub struct ClassEntry {
    name: String,
    scope: Scope,
    /// Handle into a [`ClassRegistry`]; never an owning link.
    superclass: Option<ClassId>,
}

impl ClassEntry {
    /// # Panics
    ///
    /// If `name` is empty.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: entry_name(name),
            scope: Scope::new(),
            superclass: None,
        }
    }

    /// Record the superclass by handle.
    pub fn extends(&mut self, superclass: ClassId) {
        self.superclass = Some(superclass);
    }

    pub fn superclass(&self) -> Option<ClassId> {
        self.superclass
    }

    /// The fields of this class in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &VariableEntry> {
        self.scope.entries().filter_map(Entry::as_variable)
    }

    /// The methods of this class in declaration order.
    pub fn methods(&self) -> impl Iterator<Item = &MethodEntry> {
        self.scope.entries().filter_map(Entry::as_method)
    }

    /// Render under explicit options. `registry` is only consulted for
    /// `extends` clauses.
    pub fn render_with(&self, options: &RenderOptions, registry: Option<&ClassRegistry>) -> String {
        render::render_class(self, options, registry)
    }
}

impl SemanticEntry for ClassEntry {
    fn name(&self) -> &str {
        &self.name
    }

    fn ty(&self) -> Option<&Type> {
        None
    }

    fn kind(&self) -> EntryKind {
        EntryKind::Class
    }
}

impl Sealed for ClassEntry {}

impl ScopeEntry for ClassEntry {
    fn scope(&self) -> &Scope {
        &self.scope
    }

    fn try_add_binding(&mut self, name: &str, entry: Entry) -> Result<(), BindingError> {
        let kind = entry.kind();
        if !kind.is_class_member() {
            debug!(class = %self.name, name, %kind, "kind not allowed in class scope");
            return Err(BindingError::DisallowedKind {
                name: name.to_owned(),
                kind,
                class: self.name.clone(),
            });
        }
        self.scope.bind(&self.name, EntryKind::Class, name, entry)
    }

    fn lookup_scope_mut(&mut self, name: &str) -> Option<&mut dyn ScopeEntry> {
        self.scope.nested_scope_mut(name)
    }
}

/// `class <name> {` and `}` with an empty body; members are not printed.
/// Use [`ClassEntry::render_with`] to include them.
impl fmt::Display for ClassEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(&RenderOptions::default(), None))
    }
}

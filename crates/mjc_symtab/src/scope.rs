//! The per-scope binding table and the `ScopeEntry` protocol.
//!
//! A scope keeps its bindings in first-insertion order and never replaces a
//! binding once made. Enumeration goes through a single-slot cursor
//! (`reset_iteration` / `has_next` / `next_entry`) so that printing and
//! checking visit declarations in source order.
//!
//! Bindings only enter a scope through its owner's `try_add_binding`, so a
//! class's kind gate cannot be bypassed and no binding can be swapped out
//! from under its name.

use crate::entry::{Entry, EntryKind, SemanticEntry};
use mjc_core::collections::FxIndexMap;
use std::cell::Cell;
use tracing::{debug, trace};

mod sealed {
    pub trait Sealed {}
}

pub(crate) use sealed::Sealed;

/// Borrowing iterator over a scope's bindings in insertion order.
pub type Bindings<'a> = indexmap::map::Iter<'a, String, Entry>;

/// Why a binding was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindingError {
    #[error("'{name}' is already declared in {scope_kind} '{scope}'")]
    DuplicateName {
        name: String,
        scope: String,
        scope_kind: EntryKind,
    },
    #[error("a {kind} cannot be declared in class '{class}'")]
    DisallowedKind {
        name: String,
        kind: EntryKind,
        class: String,
    },
    #[error("parameter '{name}' must be declared before the body of method '{method}'")]
    ParameterAfterBody { name: String, method: String },
    #[error("a declaration in {scope_kind} '{scope}' has no name")]
    EmptyName { scope: String, scope_kind: EntryKind },
}

impl BindingError {
    /// The name whose binding was refused; empty for `EmptyName`.
    pub fn name(&self) -> &str {
        match self {
            BindingError::DuplicateName { name, .. }
            | BindingError::DisallowedKind { name, .. }
            | BindingError::ParameterAfterBody { name, .. } => name,
            BindingError::EmptyName { .. } => "",
        }
    }
}

/// Misuse of the iteration cursor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IterationError {
    #[error("no iteration in progress over scope '{scope}'; call reset_iteration first")]
    NotStarted { scope: String },
    #[error("iteration over scope '{scope}' is exhausted")]
    Exhausted { scope: String },
}

/// An insertion-ordered, unique-key table of bindings plus its cursor.
///
/// Read-only outside this crate. The cursor lives in a `Cell` so that
/// rendering, which only borrows the scope, can still run the
/// reset/has-next/next protocol. This also keeps a scope `!Sync`: it is
/// confined to one analysis thread.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    bindings: FxIndexMap<String, Entry>,
    /// Position of the next binding to yield; `None` until the first reset.
    cursor: Cell<Option<usize>>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    /// The unrestricted, first-wins insertion every scope kind builds on.
    /// `owner` and `owner_kind` describe the scope for error reporting.
    pub(crate) fn bind(
        &mut self,
        owner: &str,
        owner_kind: EntryKind,
        name: &str,
        entry: Entry,
    ) -> Result<(), BindingError> {
        if name.is_empty() {
            debug!(scope = owner, "unnamed binding refused");
            return Err(BindingError::EmptyName {
                scope: owner.to_owned(),
                scope_kind: owner_kind,
            });
        }
        if self.bindings.contains_key(name) {
            debug!(scope = owner, name, "duplicate binding refused");
            return Err(BindingError::DuplicateName {
                name: name.to_owned(),
                scope: owner.to_owned(),
                scope_kind: owner_kind,
            });
        }
        trace!(scope = owner, name, kind = %entry.kind(), "bound");
        self.bindings.insert(name.to_owned(), entry);
        Ok(())
    }

    /// The scope of the entry bound under `name`, if it has one. Hands out
    /// the nested scope, never the binding slot itself.
    pub(crate) fn nested_scope_mut(&mut self, name: &str) -> Option<&mut dyn ScopeEntry> {
        self.bindings
            .get_mut(name)
            .and_then(|entry| entry.as_scope_mut())
    }

    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.bindings.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> Bindings<'_> {
        self.bindings.iter()
    }

    /// Entries only, in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.bindings.values()
    }

    fn reset(&self) {
        self.cursor.set(Some(0));
    }

    /// The cursor is compared against the current length, so bindings made
    /// after a reset are still reached by that traversal.
    fn has_next(&self) -> bool {
        matches!(self.cursor.get(), Some(pos) if pos < self.bindings.len())
    }

    fn advance(&self) -> Option<&Entry> {
        let pos = self.cursor.get()?;
        let (_, entry) = self.bindings.get_index(pos)?;
        self.cursor.set(Some(pos + 1));
        Some(entry)
    }

    fn is_started(&self) -> bool {
        self.cursor.get().is_some()
    }
}

/// An entry that owns a scope.
///
/// Sealed: only the entry kinds of this crate are scopes. Each supplies its
/// read-only `scope`, its insertion policy and access to nested scopes;
/// everything else has a default.
pub trait ScopeEntry: SemanticEntry + Sealed {
    fn scope(&self) -> &Scope;

    /// Bind `entry` under `name`, reporting why if the binding is refused.
    /// An existing binding is never replaced: the first declaration wins.
    fn try_add_binding(&mut self, name: &str, entry: Entry) -> Result<(), BindingError>;

    /// The scope of the method, class or block bound under `name`, so that
    /// its own bindings can be filled in. Variables have no scope and yield
    /// `None`.
    fn lookup_scope_mut(&mut self, name: &str) -> Option<&mut dyn ScopeEntry>;

    /// Bind `entry` under `name`. Returns `false`, leaving the scope
    /// untouched, if the binding is refused for any reason.
    fn add_binding(&mut self, name: &str, entry: Entry) -> bool {
        self.try_add_binding(name, entry).is_ok()
    }

    /// Look `name` up in this scope only. Enclosing scopes are not searched.
    fn lookup(&self, name: &str) -> Option<&Entry> {
        self.scope().get(name)
    }

    fn contains(&self, name: &str) -> bool {
        self.scope().contains(name)
    }

    fn len(&self) -> usize {
        self.scope().len()
    }

    fn is_empty(&self) -> bool {
        self.scope().is_empty()
    }

    fn bindings(&self) -> Bindings<'_> {
        self.scope().iter()
    }

    /// Put the cursor back on the first binding.
    fn reset_iteration(&self) {
        debug!(scope = self.name(), bindings = self.len(), "reset iteration");
        self.scope().reset();
    }

    /// Whether `next_entry` has a binding to yield. Always `false` before the
    /// first `reset_iteration`.
    fn has_next(&self) -> bool {
        self.scope().has_next()
    }

    fn try_next_entry(&self) -> Result<&Entry, IterationError> {
        let scope = self.scope();
        if !scope.is_started() {
            return Err(IterationError::NotStarted {
                scope: self.name().to_owned(),
            });
        }
        scope.advance().ok_or_else(|| IterationError::Exhausted {
            scope: self.name().to_owned(),
        })
    }

    /// Yield the next binding in insertion order.
    ///
    /// # Panics
    ///
    /// If `has_next` is false. Stepping past the end is a caller bug.
    fn next_entry(&self) -> &Entry {
        match self.try_next_entry() {
            Ok(entry) => entry,
            Err(err) => panic!("{}", err),
        }
    }

    /// Every binding rendered in insertion order, concatenated with no
    /// separator. Restarts the cursor and leaves it exhausted.
    fn render_bindings(&self) -> String {
        let mut out = String::new();
        self.reset_iteration();
        while self.has_next() {
            out.push_str(&self.next_entry().to_string());
        }
        out
    }
}

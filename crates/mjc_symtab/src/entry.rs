//! The entry capability set and the closed set of entry kinds.

use crate::block::BlockEntry;
use crate::class::ClassEntry;
use crate::method::MethodEntry;
use crate::scope::ScopeEntry;
use crate::variable::VariableEntry;
use mjc_types::Type;
use std::fmt;

/// What kind of declaration an entry stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Variable,
    Method,
    Class,
    Block,
    /// The compilation unit. Never bound inside another scope.
    Program,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Variable => "variable",
            EntryKind::Method => "method",
            EntryKind::Class => "class",
            EntryKind::Block => "block",
            EntryKind::Program => "program",
        }
    }

    /// Whether entries of this kind may be bound into a class scope.
    pub fn is_class_member(&self) -> bool {
        matches!(self, EntryKind::Variable | EntryKind::Method | EntryKind::Class)
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Check the name an entry is constructed with.
///
/// # Panics
///
/// If `name` is empty. Every entry kind's constructor goes through here.
pub(crate) fn entry_name(name: impl Into<String>) -> String {
    let name = name.into();
    assert!(!name.is_empty(), "entry names must not be empty");
    name
}

/// A named semantic object produced during semantic analysis.
///
/// `Display` is the entry's source-like rendering.
pub trait SemanticEntry: fmt::Display {
    /// The declared name. Fixed at construction.
    fn name(&self) -> &str;

    /// The declared type, if this kind of entry has one.
    fn ty(&self) -> Option<&Type>;

    fn kind(&self) -> EntryKind;
}

/// Any entry that can be bound into a scope.
#[derive(Debug, Clone)]
pub enum Entry {
    Variable(VariableEntry),
    Method(MethodEntry),
    Class(ClassEntry),
    Block(BlockEntry),
}

impl Entry {
    pub fn as_variable(&self) -> Option<&VariableEntry> {
        match self {
            Entry::Variable(variable) => Some(variable),
            _ => None,
        }
    }

    pub fn as_method(&self) -> Option<&MethodEntry> {
        match self {
            Entry::Method(method) => Some(method),
            _ => None,
        }
    }

    pub fn as_class(&self) -> Option<&ClassEntry> {
        match self {
            Entry::Class(class) => Some(class),
            _ => None,
        }
    }

    pub fn as_block(&self) -> Option<&BlockEntry> {
        match self {
            Entry::Block(block) => Some(block),
            _ => None,
        }
    }

    /// The entry's own scope, for scope-bearing kinds.
    pub fn as_scope(&self) -> Option<&dyn ScopeEntry> {
        match self {
            Entry::Variable(_) => None,
            Entry::Method(method) => Some(method),
            Entry::Class(class) => Some(class),
            Entry::Block(block) => Some(block),
        }
    }

    pub fn as_scope_mut(&mut self) -> Option<&mut dyn ScopeEntry> {
        match self {
            Entry::Variable(_) => None,
            Entry::Method(method) => Some(method),
            Entry::Class(class) => Some(class),
            Entry::Block(block) => Some(block),
        }
    }

    fn as_semantic(&self) -> &dyn SemanticEntry {
        match self {
            Entry::Variable(variable) => variable,
            Entry::Method(method) => method,
            Entry::Class(class) => class,
            Entry::Block(block) => block,
        }
    }
}

impl SemanticEntry for Entry {
    fn name(&self) -> &str {
        self.as_semantic().name()
    }

    fn ty(&self) -> Option<&Type> {
        self.as_semantic().ty()
    }

    fn kind(&self) -> EntryKind {
        self.as_semantic().kind()
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_semantic(), f)
    }
}

impl From<VariableEntry> for Entry {
    fn from(variable: VariableEntry) -> Self {
        Entry::Variable(variable)
    }
}

impl From<MethodEntry> for Entry {
    fn from(method: MethodEntry) -> Self {
        Entry::Method(method)
    }
}

impl From<ClassEntry> for Entry {
    fn from(class: ClassEntry) -> Self {
        Entry::Class(class)
    }
}

impl From<BlockEntry> for Entry {
    fn from(block: BlockEntry) -> Self {
        Entry::Block(block)
    }
}

//! Class handles for non-owning links between classes.
//!
//! A class refers to its superclass by [`ClassId`], never by holding the
//! entry: entries are owned solely by the scope they are bound in. Following
//! a link means mapping the id back to a name and looking that name up in
//! the scope the caller supplies.

use crate::class::ClassEntry;
use crate::entry::SemanticEntry;
use crate::scope::ScopeEntry;
use mjc_core::collections::{FxHashSet, FxIndexSet};
use mjc_core::text::TextSpan;
use mjc_diagnostics::{messages, Diagnostic, DiagnosticCollection};
use std::fmt;
use tracing::{debug, warn};

/// A lightweight handle to a class name in a [`ClassRegistry`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ClassId(pub u32);

impl ClassId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassId({})", self.0)
    }
}

/// How a superclass walk ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChainEnd<'a> {
    /// Reached a class with no superclass.
    Root,
    /// The id is unknown, or its class is not bound in the searched scope.
    Unresolved(ClassId),
    /// Came back to the named class, already on the chain. The walk's
    /// starting class is part of the cycle only if it is that class.
    Cycle(&'a str),
}

/// Interns class names to [`ClassId`]s. Holds names only, never entries.
#[derive(Debug, Clone, Default)]
pub struct ClassRegistry {
    names: FxIndexSet<String>,
}

impl ClassRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The id for `name`, allocating one on first use.
    pub fn register(&mut self, name: &str) -> ClassId {
        if let Some(index) = self.names.get_index_of(name) {
            return ClassId(index as u32);
        }
        let (index, _) = self.names.insert_full(name.to_owned());
        ClassId(index as u32)
    }

    pub fn id_of(&self, name: &str) -> Option<ClassId> {
        self.names.get_index_of(name).map(|index| ClassId(index as u32))
    }

    pub fn name_of(&self, id: ClassId) -> Option<&str> {
        self.names.get_index(id.index()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All registered classes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (ClassId, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(index, name)| (ClassId(index as u32), name.as_str()))
    }

    /// Follow `id` to the class bound under its name in `scope`.
    pub fn resolve<'a, S>(&self, id: ClassId, scope: &'a S) -> Option<&'a ClassEntry>
    where
        S: ScopeEntry + ?Sized,
    {
        let name = self.name_of(id)?;
        scope.lookup(name)?.as_class()
    }

    /// Names of the superclasses of `class`, nearest first, as far as they
    /// can be followed in `scope`. Stops short at an unresolved link or a
    /// cycle.
    pub fn superclass_chain<'a, S>(&'a self, class: &'a ClassEntry, scope: &'a S) -> Vec<&'a str>
    where
        S: ScopeEntry + ?Sized,
    {
        self.walk(class, scope).0
    }

    fn walk<'a, S>(&'a self, class: &'a ClassEntry, scope: &'a S) -> (Vec<&'a str>, ChainEnd<'a>)
    where
        S: ScopeEntry + ?Sized,
    {
        let mut chain = Vec::new();
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        seen.insert(class.name());

        let mut current = class;
        loop {
            let Some(id) = current.superclass() else {
                return (chain, ChainEnd::Root);
            };
            let Some(name) = self.name_of(id) else {
                debug!(class = class.name(), %id, "unknown superclass id");
                return (chain, ChainEnd::Unresolved(id));
            };
            if !seen.insert(name) {
                warn!(class = class.name(), superclass = name, "cyclic superclass chain");
                return (chain, ChainEnd::Cycle(name));
            }
            let Some(superclass) = self.resolve(id, scope) else {
                debug!(class = class.name(), superclass = name, "superclass not bound in scope");
                return (chain, ChainEnd::Unresolved(id));
            };
            chain.push(name);
            current = superclass;
        }
    }

    /// Report every class in `scope` whose superclass chain is unsound: the
    /// classes on an inheritance cycle, the classes inheriting into one, and
    /// the classes whose chain leaves the scope. Returns whether all chains
    /// were sound.
    pub fn check_inheritance<S>(
        &self,
        scope: &S,
        span: TextSpan,
        diagnostics: &mut DiagnosticCollection,
    ) -> bool
    where
        S: ScopeEntry + ?Sized,
    {
        let mut sound = true;
        for class in scope.scope().entries().filter_map(|entry| entry.as_class()) {
            match self.walk(class, scope).1 {
                ChainEnd::Root => {}
                ChainEnd::Cycle(entry) if entry == class.name() => {
                    sound = false;
                    diagnostics.add(Diagnostic::at(
                        span,
                        &messages::CYCLIC_INHERITANCE_INVOLVING_CLASS_0,
                        &[class.name()],
                    ));
                }
                ChainEnd::Cycle(entry) => {
                    sound = false;
                    diagnostics.add(Diagnostic::at(
                        span,
                        &messages::CLASS_0_INHERITS_FROM_CYCLIC_CLASS_1,
                        &[class.name(), entry],
                    ));
                }
                ChainEnd::Unresolved(_) => {
                    sound = false;
                    diagnostics.add(Diagnostic::at(
                        span,
                        &messages::SUPERCLASS_OF_0_IS_NOT_DECLARED,
                        &[class.name()],
                    ));
                }
            }
        }
        sound
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProgramEntry;

    /// Binds `(name, superclass)` pairs into a fresh program scope.
    fn program(classes: &[(&str, Option<&str>)], registry: &mut ClassRegistry) -> ProgramEntry {
        let mut program = ProgramEntry::new("Main");
        for (name, superclass) in classes {
            let mut class = ClassEntry::new(*name);
            registry.register(name);
            if let Some(superclass) = superclass {
                class.extends(registry.register(superclass));
            }
            assert!(program.add_binding(name, class.into()));
        }
        program
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut registry = ClassRegistry::new();
        let a = registry.register("A");
        let b = registry.register("B");
        assert_eq!(registry.register("A"), a);
        assert_ne!(a, b);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.id_of("B"), Some(b));
        assert_eq!(registry.name_of(a), Some("A"));
        assert_eq!(registry.name_of(ClassId(9)), None);
        assert_eq!(registry.iter().map(|(_, n)| n).collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn test_resolve_is_a_lookup() {
        let mut registry = ClassRegistry::new();
        let program = program(&[("A", None), ("B", Some("A"))], &mut registry);

        let b = program.lookup("B").and_then(|e| e.as_class()).unwrap();
        let a = registry.resolve(b.superclass().unwrap(), &program).unwrap();
        assert_eq!(a.name(), "A");

        // A handle to a name bound in some other scope resolves to nothing here.
        let ghost = registry.register("Ghost");
        assert!(registry.resolve(ghost, &program).is_none());
    }

    #[test]
    fn test_superclass_chain() {
        let mut registry = ClassRegistry::new();
        let program = program(&[("A", None), ("B", Some("A")), ("C", Some("B"))], &mut registry);

        let c = program.lookup("C").and_then(|e| e.as_class()).unwrap();
        assert_eq!(registry.superclass_chain(c, &program), vec!["B", "A"]);

        let a = program.lookup("A").and_then(|e| e.as_class()).unwrap();
        assert!(registry.superclass_chain(a, &program).is_empty());
    }

    #[test]
    fn test_cycle_terminates() {
        let mut registry = ClassRegistry::new();
        let program = program(&[("A", Some("B")), ("B", Some("A"))], &mut registry);

        let a = program.lookup("A").and_then(|e| e.as_class()).unwrap();
        assert_eq!(registry.superclass_chain(a, &program), vec!["B"]);

        let mut diagnostics = DiagnosticCollection::new();
        assert!(!registry.check_inheritance(&program, TextSpan::default(), &mut diagnostics));
        assert_eq!(diagnostics.error_count(), 2);
        assert_eq!(diagnostics.diagnostics()[0].message_text, "Cyclic inheritance involving class 'A'.");
    }

    #[test]
    fn test_class_inheriting_into_cycle_is_not_on_it() {
        let mut registry = ClassRegistry::new();
        let program = program(
            &[("A", Some("B")), ("B", Some("A")), ("C", Some("A"))],
            &mut registry,
        );

        let c = program.lookup("C").and_then(|e| e.as_class()).unwrap();
        assert_eq!(registry.superclass_chain(c, &program), vec!["A", "B"]);

        let mut diagnostics = DiagnosticCollection::new();
        assert!(!registry.check_inheritance(&program, TextSpan::default(), &mut diagnostics));
        let messages: Vec<_> = diagnostics
            .diagnostics()
            .iter()
            .map(|d| d.message_text.as_str())
            .collect();
        assert_eq!(
            messages,
            vec![
                "Cyclic inheritance involving class 'A'.",
                "Cyclic inheritance involving class 'B'.",
                "Class 'C' inherits from class 'A', which is part of an inheritance cycle.",
            ]
        );
    }

    #[test]
    fn test_unresolved_superclass_is_a_warning() {
        let mut registry = ClassRegistry::new();
        let program = program(&[("A", Some("Object"))], &mut registry);

        let mut diagnostics = DiagnosticCollection::new();
        assert!(!registry.check_inheritance(&program, TextSpan::default(), &mut diagnostics));
        assert_eq!(diagnostics.len(), 1);
        assert!(!diagnostics.has_errors());
    }
}

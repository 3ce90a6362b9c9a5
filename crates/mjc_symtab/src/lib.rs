//! mjc_symtab: Scoped symbol tables for semantic analysis.
//!
//! Every scope-bearing entry (program, class, method, block) owns an
//! insertion-ordered table of bindings from names to entries. The analyzer
//! binds declarations as it meets them, looks names up one scope at a time,
//! and walks or prints a scope in declaration order.

mod block;
mod class;
mod declare;
mod entry;
mod method;
mod program;
mod registry;
mod render;
mod scope;
mod variable;

pub use block::BlockEntry;
pub use class::ClassEntry;
pub use declare::{declare, declare_parameter};
pub use entry::{Entry, EntryKind, SemanticEntry};
pub use method::MethodEntry;
pub use program::ProgramEntry;
pub use registry::{ClassId, ClassRegistry};
pub use scope::{BindingError, Bindings, IterationError, Scope, ScopeEntry};
pub use variable::VariableEntry;

pub use mjc_options::RenderOptions;
pub use mjc_types::Type;

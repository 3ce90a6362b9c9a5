//! mjc_core: Core utilities for the mjc MiniJava front end.
//!
//! Provides source spans and the hash/ordered collections shared by the
//! symbol table and diagnostics crates.

pub mod collections;
pub mod text;

// Re-export commonly used types
pub use collections::{FxIndexMap, FxIndexSet};
pub use text::TextSpan;

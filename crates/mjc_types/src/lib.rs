//! mjc_types: Semantic type descriptors.
//!
//! Only the part of the type system the symbol table needs lives here:
//! enough structure to tell primitive from reference types and to print a
//! type the way it is written in source.

use std::fmt;

/// A MiniJava type as written in a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Int,
    Float,
    Boolean,
    Char,
    /// The built-in `String` class.
    String,
    /// Only valid as a method return type.
    Void,
    /// A user-declared class, referred to by name.
    Class(std::string::String),
    Array(Box<Type>),
}

impl Type {
    pub fn class(name: impl Into<std::string::String>) -> Self {
        Type::Class(name.into())
    }

    pub fn array_of(element: Type) -> Self {
        Type::Array(Box::new(element))
    }

    /// Map a primitive type keyword (`int`, `boolean`, ...) to its type.
    ///
    /// Class names are not keywords and yield `None`.
    pub fn from_keyword(keyword: &str) -> Option<Type> {
        match keyword {
            "int" => Some(Type::Int),
            "float" => Some(Type::Float),
            "boolean" => Some(Type::Boolean),
            "char" => Some(Type::Char),
            "String" => Some(Type::String),
            "void" => Some(Type::Void),
            _ => None,
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, Type::Int | Type::Float | Type::Boolean | Type::Char)
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, Type::String | Type::Class(_) | Type::Array(_))
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Type::Void)
    }

    /// The element type of an array type.
    pub fn element_type(&self) -> Option<&Type> {
        match self {
            Type::Array(element) => Some(element),
            _ => None,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Int => write!(f, "int"),
            Type::Float => write!(f, "float"),
            Type::Boolean => write!(f, "boolean"),
            Type::Char => write!(f, "char"),
            Type::String => write!(f, "String"),
            Type::Void => write!(f, "void"),
            Type::Class(name) => write!(f, "{}", name),
            Type::Array(element) => write!(f, "{}[]", element),
        }
    }
}

//! The closed descriptor vocabulary.
//!
//! Every resolvable type collapses into one of these shapes. The serialized
//! form (via `Display`) is what gets spliced into generated metadata, so the
//! rendering here is part of the output contract, not a debug convenience.
//!
//! "Unresolved" is deliberately not a variant: resolution returns
//! `Option<TypeDescriptor>`, and `None` means the caller must omit the
//! metadata field entirely.

use std::fmt;

/// A resolved type descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDescriptor {
    Boolean,
    Number,
    String,
    Date,
    /// Array wrapper over another descriptor, rendered as `[inner]`.
    Array(Box<TypeDescriptor>),
    /// A class identifier, emitted verbatim. This is the only open-ended
    /// shape; class names are stable, linkable symbols in generated output.
    Named(String),
    /// Generic fallback for interfaces, non-enum unions/intersections,
    /// aliased compound types, and the top types.
    Object,
}

impl TypeDescriptor {
    /// Wrap `self` one array level deeper.
    pub fn into_array(self) -> TypeDescriptor {
        TypeDescriptor::Array(Box::new(self))
    }

    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            TypeDescriptor::Boolean
                | TypeDescriptor::Number
                | TypeDescriptor::String
                | TypeDescriptor::Date
        )
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Boolean => f.write_str("Boolean"),
            TypeDescriptor::Number => f.write_str("Number"),
            TypeDescriptor::String => f.write_str("String"),
            TypeDescriptor::Date => f.write_str("Date"),
            TypeDescriptor::Array(inner) => write!(f, "[{inner}]"),
            TypeDescriptor::Named(name) => f.write_str(name),
            TypeDescriptor::Object => f.write_str("Object"),
        }
    }
}

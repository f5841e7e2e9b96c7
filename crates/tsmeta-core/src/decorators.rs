//! First-match decorator lookup.
//!
//! The generator scans candidate properties by decorator name; this module
//! owns the lookup over the ordered decorator list of a declaration.

/// A decorator applied to a declaration, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoratorNode {
    /// Simple name of the decorator, without the `@` sigil or call
    /// parentheses.
    pub name: String,
    /// Raw argument text, kept so the generator can merge into existing
    /// metadata arguments. Ignored by the lookup itself.
    pub arguments: Vec<String>,
}

impl DecoratorNode {
    pub fn new(name: impl Into<String>) -> Self {
        DecoratorNode {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    pub fn with_arguments(name: impl Into<String>, arguments: Vec<String>) -> Self {
        DecoratorNode {
            name: name.into(),
            arguments,
        }
    }
}

/// Return the first decorator whose simple name is one of `names`.
///
/// An absent or empty decorator set yields `None`, never an error.
pub fn find_first_decorator<'a>(
    names: &[&str],
    decorators: Option<&'a [DecoratorNode]>,
) -> Option<&'a DecoratorNode> {
    decorators
        .unwrap_or_default()
        .iter()
        .find(|decorator| names.contains(&decorator.name.as_str()))
}

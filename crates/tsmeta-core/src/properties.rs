//! Property-key membership for generated object literals.
//!
//! While building a metadata object literal the generator must not treat a
//! property it just injected as a pre-existing duplicate. Fabrication is an
//! explicit tag set at construction time, not inferred from missing parent
//! links or sentinel positions.

/// One key/value entry of a metadata object literal under construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyAssignment {
    pub name: String,
    /// Raw initializer text.
    pub value: String,
    /// True when this entry was fabricated by the generator rather than
    /// parsed from source.
    pub synthetic: bool,
}

impl PropertyAssignment {
    /// An entry parsed from original source.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        PropertyAssignment {
            name: name.into(),
            value: value.into(),
            synthetic: false,
        }
    }

    /// An entry injected by the generator itself.
    pub fn synthetic(name: impl Into<String>, value: impl Into<String>) -> Self {
        PropertyAssignment {
            name: name.into(),
            value: value.into(),
            synthetic: true,
        }
    }
}

/// True iff a non-synthetic entry named `key` exists.
pub fn has_property_key(key: &str, properties: &[PropertyAssignment]) -> bool {
    properties
        .iter()
        .any(|property| !property.synthetic && property.name == key)
}

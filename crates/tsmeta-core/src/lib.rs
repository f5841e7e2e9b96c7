//! Type-reference resolution engine for TypeScript metadata generation.
//!
//! Given a type node from the host compiler's type graph, this crate computes
//! a canonical descriptor string to embed in generated metadata, and rewrites
//! the cross-file `import("...")` specifiers that show up inside rendered
//! type text so the generated output stays loadable from its emit location.
//!
//! The crate is organized leaf-first:
//! - `checker` - facade trait over the host type-checking service
//! - `descriptor` - the closed descriptor vocabulary
//! - `desugar` - detectors for compiler-generated union shapes
//! - `resolver` - the recursive type-reference resolver
//! - `decorators` - first-match decorator lookup
//! - `properties` - property-key membership for generated object literals
//! - `import_rewriter` - import specifier normalization
//!
//! The type-checking service itself is an external collaborator: every
//! operation here is a pure function of its inputs plus read-only queries
//! through the `checker::TypeChecker` facade. "Unresolved" (`None`) is a
//! first-class outcome throughout, never an error.

pub mod checker;
pub mod decorators;
pub mod descriptor;
pub mod desugar;
pub mod import_rewriter;
pub mod properties;
pub mod resolver;

pub use checker::{RenderError, SymbolFlags, SymbolId, TypeChecker, TypeId};
pub use decorators::{DecoratorNode, find_first_decorator};
pub use descriptor::TypeDescriptor;
pub use desugar::{desugared_enum_union, is_desugared_optional_union};
pub use import_rewriter::rewrite_import_path;
pub use properties::{PropertyAssignment, has_property_key};
pub use resolver::resolve_type_reference;

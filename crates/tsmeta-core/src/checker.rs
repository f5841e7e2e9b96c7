//! Facade over the host's type-checking service.
//!
//! The resolution engine never owns a type graph. It borrows the host's
//! checker per call through the [`TypeChecker`] trait and talks about types
//! and symbols only via opaque interned handles, the same seam the compiler
//! puts between its checker and its type store.
//!
//! All queries are read-only; implementations are never mutated through
//! this trait.

use bitflags::bitflags;
use smallvec::SmallVec;
use thiserror::Error;

/// Opaque handle to a node in the host's type graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(u32);

impl TypeId {
    pub const fn from_raw(raw: u32) -> Self {
        TypeId(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Opaque handle to a symbol in the host's binder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolId(u32);

impl SymbolId {
    pub const fn from_raw(raw: u32) -> Self {
        SymbolId(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

bitflags! {
    /// Symbol classification bits, mirroring the compiler's symbol flag word.
    ///
    /// Only `ENUM_MEMBER` is load-bearing for this engine (the desugared
    /// enum-union detector); the remaining bits exist so hosts can pass
    /// their flag word through unchanged.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SymbolFlags: u32 {
        const CLASS = 1 << 0;
        const INTERFACE = 1 << 1;
        const ENUM = 1 << 2;
        const ENUM_MEMBER = 1 << 3;
        const TYPE_ALIAS = 1 << 4;
    }
}

/// Failure of the host's textual type renderer.
///
/// Rendering can fail on inconsistent type-graph state. The resolver treats
/// this as "unresolved", never as a fatal condition.
#[derive(Debug, Clone, Error)]
#[error("cannot render type {type_id:?}: {reason}")]
pub struct RenderError {
    pub type_id: TypeId,
    pub reason: String,
}

/// Read-only queries against the host type-checking service.
///
/// Capability predicates are consumed as black boxes: how the host decides
/// that a type is array-like or enum-like is its own business. The engine
/// only relies on the answers being stable for the lifetime of a checking
/// session.
pub trait TypeChecker {
    fn is_array_type(&self, ty: TypeId) -> bool;
    fn is_boolean_type(&self, ty: TypeId) -> bool;
    fn is_number_type(&self, ty: TypeId) -> bool;
    fn is_string_type(&self, ty: TypeId) -> bool;
    fn is_class_type(&self, ty: TypeId) -> bool;
    fn is_interface_type(&self, ty: TypeId) -> bool;
    fn is_enum_type(&self, ty: TypeId) -> bool;
    fn is_union_type(&self, ty: TypeId) -> bool;
    fn is_union_or_intersection_type(&self, ty: TypeId) -> bool;

    /// The absent/undefined marker type the compiler appends when it
    /// desugars optional properties.
    fn is_undefined_type(&self, ty: TypeId) -> bool;

    /// Ordered generic type arguments (array element type, wrapper payload
    /// type). Empty for non-generic types.
    fn type_arguments(&self, ty: TypeId) -> SmallVec<[TypeId; 2]>;

    /// Ordered member list of a union or intersection type, in declared
    /// order. Empty for other types.
    fn union_members(&self, ty: TypeId) -> SmallVec<[TypeId; 4]>;

    /// Render the type as text in the context of the declaration currently
    /// being scanned.
    fn type_to_string(&self, ty: TypeId) -> Result<String, RenderError>;

    fn symbol_of_type(&self, ty: TypeId) -> Option<SymbolId>;
    fn alias_symbol_of_type(&self, ty: TypeId) -> Option<SymbolId>;
    fn symbol_flags(&self, symbol: SymbolId) -> SymbolFlags;
    fn parent_symbol(&self, symbol: SymbolId) -> Option<SymbolId>;
    fn declared_type_of_symbol(&self, symbol: SymbolId) -> Option<TypeId>;
}

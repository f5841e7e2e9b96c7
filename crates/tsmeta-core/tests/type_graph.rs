//! In-memory type-graph fixture standing in for the host checking service.
//!
//! Builds small type graphs by hand and answers the `TypeChecker` queries
//! from them. Render failures are injectable per type to exercise the
//! resolver's guarded fallback.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tsmeta_core::checker::{RenderError, SymbolFlags, SymbolId, TypeChecker, TypeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TypeKind {
    Boolean,
    Number,
    String,
    Undefined,
    Array,
    Class,
    Interface,
    Enum,
    Union,
    Intersection,
    Other,
}

struct TypeData {
    kind: TypeKind,
    /// Rendered text; `None` simulates a renderer failure.
    text: Option<String>,
    type_arguments: Vec<TypeId>,
    members: Vec<TypeId>,
    symbol: Option<SymbolId>,
    alias_symbol: Option<SymbolId>,
}

impl TypeData {
    fn new(kind: TypeKind, text: &str) -> Self {
        TypeData {
            kind,
            text: Some(text.to_string()),
            type_arguments: Vec::new(),
            members: Vec::new(),
            symbol: None,
            alias_symbol: None,
        }
    }
}

struct SymbolData {
    flags: SymbolFlags,
    parent: Option<SymbolId>,
}

#[derive(Default)]
pub struct TypeGraph {
    types: Vec<TypeData>,
    symbols: Vec<SymbolData>,
    declared_types: FxHashMap<SymbolId, TypeId>,
}

impl TypeGraph {
    pub fn new() -> Self {
        TypeGraph::default()
    }

    fn add(&mut self, data: TypeData) -> TypeId {
        let id = TypeId::from_raw(self.types.len() as u32);
        self.types.push(data);
        id
    }

    fn data(&self, ty: TypeId) -> &TypeData {
        &self.types[ty.raw() as usize]
    }

    pub fn add_symbol(&mut self, flags: SymbolFlags, parent: Option<SymbolId>) -> SymbolId {
        let id = SymbolId::from_raw(self.symbols.len() as u32);
        self.symbols.push(SymbolData { flags, parent });
        id
    }

    pub fn boolean(&mut self) -> TypeId {
        self.add(TypeData::new(TypeKind::Boolean, "boolean"))
    }

    pub fn number(&mut self) -> TypeId {
        self.add(TypeData::new(TypeKind::Number, "number"))
    }

    pub fn string(&mut self) -> TypeId {
        self.add(TypeData::new(TypeKind::String, "string"))
    }

    pub fn undefined(&mut self) -> TypeId {
        self.add(TypeData::new(TypeKind::Undefined, "undefined"))
    }

    pub fn class(&mut self, name: &str) -> TypeId {
        let symbol = self.add_symbol(SymbolFlags::CLASS, None);
        let mut data = TypeData::new(TypeKind::Class, name);
        data.symbol = Some(symbol);
        self.add(data)
    }

    pub fn interface(&mut self, name: &str) -> TypeId {
        let symbol = self.add_symbol(SymbolFlags::INTERFACE, None);
        let mut data = TypeData::new(TypeKind::Interface, name);
        data.symbol = Some(symbol);
        self.add(data)
    }

    pub fn array_of(&mut self, element: TypeId) -> TypeId {
        let text = format!("{}[]", self.render(element));
        let mut data = TypeData::new(TypeKind::Array, &text);
        data.type_arguments = vec![element];
        self.add(data)
    }

    /// A generic instantiation such as `Promise<T>` or `Observable<T>`,
    /// rendered as `base<args>`.
    pub fn generic(&mut self, base: &str, arguments: &[TypeId]) -> TypeId {
        let rendered: Vec<String> = arguments.iter().map(|&a| self.render(a)).collect();
        let text = format!("{base}<{}>", rendered.join(", "));
        let mut data = TypeData::new(TypeKind::Other, &text);
        data.type_arguments = arguments.to_vec();
        self.add(data)
    }

    pub fn union(&mut self, members: &[TypeId]) -> TypeId {
        let rendered: Vec<String> = members.iter().map(|&m| self.render(m)).collect();
        let mut data = TypeData::new(TypeKind::Union, &rendered.join(" | "));
        data.members = members.to_vec();
        self.add(data)
    }

    pub fn intersection(&mut self, members: &[TypeId]) -> TypeId {
        let rendered: Vec<String> = members.iter().map(|&m| self.render(m)).collect();
        let mut data = TypeData::new(TypeKind::Intersection, &rendered.join(" & "));
        data.members = members.to_vec();
        self.add(data)
    }

    /// A type only known by its rendered text (`any`, `unknown`, `Date`, ...).
    pub fn named(&mut self, text: &str) -> TypeId {
        self.add(TypeData::new(TypeKind::Other, text))
    }

    /// A compound type carrying an alias symbol.
    pub fn aliased(&mut self, text: &str) -> TypeId {
        let alias = self.add_symbol(SymbolFlags::TYPE_ALIAS, None);
        let mut data = TypeData::new(TypeKind::Other, text);
        data.alias_symbol = Some(alias);
        self.add(data)
    }

    /// A type whose textual rendering fails.
    pub fn failing(&mut self) -> TypeId {
        let mut data = TypeData::new(TypeKind::Other, "");
        data.text = None;
        self.add(data)
    }

    /// Declare an enum type; returns the type and its declaring symbol.
    pub fn enum_type(&mut self, name: &str) -> (TypeId, SymbolId) {
        let symbol = self.add_symbol(SymbolFlags::ENUM, None);
        let mut data = TypeData::new(TypeKind::Enum, name);
        data.symbol = Some(symbol);
        let ty = self.add(data);
        self.declared_types.insert(symbol, ty);
        (ty, symbol)
    }

    /// Declare a member of `enum_symbol`, e.g. `E.A`.
    pub fn enum_member(&mut self, enum_symbol: SymbolId, text: &str) -> TypeId {
        let symbol = self.add_symbol(SymbolFlags::ENUM_MEMBER, Some(enum_symbol));
        let mut data = TypeData::new(TypeKind::Enum, text);
        data.symbol = Some(symbol);
        self.add(data)
    }

    /// A union member with a symbol that is not an enum member.
    pub fn literal_with_symbol(&mut self, text: &str) -> TypeId {
        let symbol = self.add_symbol(SymbolFlags::empty(), None);
        let mut data = TypeData::new(TypeKind::Other, text);
        data.symbol = Some(symbol);
        self.add(data)
    }

    fn render(&self, ty: TypeId) -> String {
        self.data(ty).text.clone().unwrap_or_else(|| "?".to_string())
    }
}

impl TypeChecker for TypeGraph {
    fn is_array_type(&self, ty: TypeId) -> bool {
        self.data(ty).kind == TypeKind::Array
    }

    fn is_boolean_type(&self, ty: TypeId) -> bool {
        self.data(ty).kind == TypeKind::Boolean
    }

    fn is_number_type(&self, ty: TypeId) -> bool {
        self.data(ty).kind == TypeKind::Number
    }

    fn is_string_type(&self, ty: TypeId) -> bool {
        self.data(ty).kind == TypeKind::String
    }

    fn is_class_type(&self, ty: TypeId) -> bool {
        self.data(ty).kind == TypeKind::Class
    }

    fn is_interface_type(&self, ty: TypeId) -> bool {
        self.data(ty).kind == TypeKind::Interface
    }

    fn is_enum_type(&self, ty: TypeId) -> bool {
        self.data(ty).kind == TypeKind::Enum
    }

    fn is_union_type(&self, ty: TypeId) -> bool {
        self.data(ty).kind == TypeKind::Union
    }

    fn is_union_or_intersection_type(&self, ty: TypeId) -> bool {
        matches!(self.data(ty).kind, TypeKind::Union | TypeKind::Intersection)
    }

    fn is_undefined_type(&self, ty: TypeId) -> bool {
        self.data(ty).kind == TypeKind::Undefined
    }

    fn type_arguments(&self, ty: TypeId) -> SmallVec<[TypeId; 2]> {
        self.data(ty).type_arguments.iter().copied().collect()
    }

    fn union_members(&self, ty: TypeId) -> SmallVec<[TypeId; 4]> {
        self.data(ty).members.iter().copied().collect()
    }

    fn type_to_string(&self, ty: TypeId) -> Result<String, RenderError> {
        self.data(ty).text.clone().ok_or_else(|| RenderError {
            type_id: ty,
            reason: "inconsistent type-graph state".to_string(),
        })
    }

    fn symbol_of_type(&self, ty: TypeId) -> Option<SymbolId> {
        self.data(ty).symbol
    }

    fn alias_symbol_of_type(&self, ty: TypeId) -> Option<SymbolId> {
        self.data(ty).alias_symbol
    }

    fn symbol_flags(&self, symbol: SymbolId) -> SymbolFlags {
        self.symbols[symbol.raw() as usize].flags
    }

    fn parent_symbol(&self, symbol: SymbolId) -> Option<SymbolId> {
        self.symbols[symbol.raw() as usize].parent
    }

    fn declared_type_of_symbol(&self, symbol: SymbolId) -> Option<TypeId> {
        self.declared_types.get(&symbol).copied()
    }
}

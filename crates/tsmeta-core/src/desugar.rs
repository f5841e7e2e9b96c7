//! Detectors for compiler-generated union shapes.
//!
//! The checker desugars two constructs into synthetic unions that must be
//! recognized and reversed before descriptor resolution, or an optional
//! class-typed property would degrade to `Object`:
//!
//! - an optional property `p?: T` becomes the union of `T` and the
//!   undefined marker type;
//! - an optional enum-typed property becomes the union of every member of
//!   the enum plus the undefined marker.
//!
//! Both detectors are pure predicates over the union's ordered member list.
//! A non-match is an ordinary `false`/`None`, never an error.

use crate::checker::{SymbolFlags, TypeChecker, TypeId};

/// True iff `ty` is a two-member union (not an enum) where one member is
/// the undefined marker.
pub fn is_desugared_optional_union(checker: &dyn TypeChecker, ty: TypeId) -> bool {
    if !checker.is_union_type(ty) || checker.is_enum_type(ty) {
        return false;
    }
    let members = checker.union_members(ty);
    members.len() == 2 && members.iter().any(|&member| checker.is_undefined_type(member))
}

/// Detect a union of enum-member types plus exactly one undefined marker.
///
/// Every non-marker member must have a symbol flagged as an enum member
/// whose parent symbol declares the same enum type; that common enum type
/// is returned. A union holding only the marker does not match.
pub fn desugared_enum_union(checker: &dyn TypeChecker, ty: TypeId) -> Option<TypeId> {
    if !checker.is_union_type(ty) || checker.is_enum_type(ty) {
        return None;
    }

    let mut marker_count = 0usize;
    let mut common_enum: Option<TypeId> = None;
    for &member in checker.union_members(ty).iter() {
        if checker.is_undefined_type(member) {
            marker_count += 1;
            continue;
        }
        let symbol = checker.symbol_of_type(member)?;
        if !checker.symbol_flags(symbol).contains(SymbolFlags::ENUM_MEMBER) {
            return None;
        }
        let parent = checker.parent_symbol(symbol)?;
        let declared = checker.declared_type_of_symbol(parent)?;
        match common_enum {
            None => common_enum = Some(declared),
            Some(seen) if seen == declared => {}
            Some(_) => return None,
        }
    }

    if marker_count == 1 { common_enum } else { None }
}

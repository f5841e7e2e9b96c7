//! The recursive type-reference resolver.
//!
//! Collapses a type node into the closed descriptor vocabulary, or reports
//! it unresolved (`None`). Branch order is load-bearing:
//!
//! 1. arrays and primitives run first because they are cheap and exact;
//! 2. the async/stream unwrap must precede the union/interface catch-alls,
//!    or a wrapper would be misclassified as `Object`;
//! 3. the desugared-union recovery must precede the generic union
//!    catch-all, or an optional class-typed property would lose its class
//!    name.
//!
//! Render failures inside the fallback branch convert to `None`; they never
//! escape.

use tracing::trace;

use crate::checker::{TypeChecker, TypeId};
use crate::descriptor::TypeDescriptor;
use crate::desugar::{desugared_enum_union, is_desugared_optional_union};

/// Marker substring for the async-result wrapper type.
const ASYNC_WRAPPER_MARKER: &str = "Promise";
/// Marker substring for the observable-stream wrapper type.
const STREAM_WRAPPER_MARKER: &str = "Observable";
/// Rendered name of the date type, returned verbatim.
const DATE_TYPE_NAME: &str = "Date";
/// Universal top types that collapse to the `Object` fallback.
const TOP_TYPE_NAMES: &[&str] = &["any", "unknown", "object"];

/// Resolve `ty` into a descriptor, or `None` when it cannot be classified.
///
/// Resolution is referentially transparent within a checking session:
/// the same `TypeId` always yields the same outcome.
pub fn resolve_type_reference(
    checker: &dyn TypeChecker,
    ty: TypeId,
) -> Option<TypeDescriptor> {
    if checker.is_array_type(ty) {
        let element = checker.type_arguments(ty).first().copied()?;
        let inner = resolve_type_reference(checker, element)?;
        trace!(type_id = ty.raw(), "resolved array type");
        return Some(inner.into_array());
    }

    if checker.is_boolean_type(ty) {
        return Some(TypeDescriptor::Boolean);
    }
    if checker.is_number_type(ty) {
        return Some(TypeDescriptor::Number);
    }
    if checker.is_string_type(ty) {
        return Some(TypeDescriptor::String);
    }

    // A render failure here only skips the wrapper branch; the guarded
    // fallback below decides whether the type is unresolvable.
    if let Ok(text) = checker.type_to_string(ty)
        && (text.contains(ASYNC_WRAPPER_MARKER) || text.contains(STREAM_WRAPPER_MARKER))
    {
        let payload = checker.type_arguments(ty).first().copied()?;
        trace!(type_id = ty.raw(), "unwrapping async/stream wrapper");
        return resolve_type_reference(checker, payload);
    }

    if checker.is_class_type(ty) {
        // A class that cannot be named cannot be linked from generated
        // output, so a render failure means unresolved.
        return checker.type_to_string(ty).ok().map(TypeDescriptor::Named);
    }

    let Ok(text) = checker.type_to_string(ty) else {
        trace!(type_id = ty.raw(), "render failure; unresolved");
        return None;
    };

    if text == DATE_TYPE_NAME {
        return Some(TypeDescriptor::Date);
    }

    if is_desugared_optional_union(checker, ty) || desugared_enum_union(checker, ty).is_some() {
        // The desugaring process appends the marker; the last member in
        // declared order is the original, pre-desugared type.
        let original = checker.union_members(ty).last().copied()?;
        trace!(type_id = ty.raw(), "recovering desugared union member");
        return resolve_type_reference(checker, original);
    }

    if TOP_TYPE_NAMES.contains(&text.as_str())
        || checker.is_interface_type(ty)
        || (checker.is_union_or_intersection_type(ty) && !checker.is_enum_type(ty))
    {
        return Some(TypeDescriptor::Object);
    }

    // Enums take a separate metadata path outside this engine.
    if checker.is_enum_type(ty) {
        return None;
    }

    if checker.alias_symbol_of_type(ty).is_some() {
        return Some(TypeDescriptor::Object);
    }

    trace!(type_id = ty.raw(), "no descriptor branch matched; unresolved");
    None
}

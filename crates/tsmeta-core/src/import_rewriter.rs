//! Import specifier normalization for resolved descriptor text.
//!
//! When the checker renders a type it cannot name locally, the text carries
//! an `import("<absolute-path>").TypeName` reference. Generated code lives
//! in a different file than the introspection site and loads modules with
//! `require`, so the absolute path is rewritten relative to the emitting
//! file and the keyword swapped.
//!
//! Dependency-installation artifacts (`node_modules/`, the `@types/`
//! declaration scope, trailing `/index`) are stripped from the rewritten
//! path; they are not part of the logical module specifier.
//!
//! The quoted-path extraction is pinned to the exact `import("...")` marker
//! grammar. If the host renderer ever changes that format, extraction fails
//! to `None` rather than producing a corrupt specifier.

use std::path::Path;

use tracing::debug;

/// Start of the import marker, up to and including the opening quote.
const IMPORT_MARKER: &str = "import(\"";
/// Bare marker used only for the cheap "is there anything to do" check.
const IMPORT_CALL: &str = "import(";
const IMPORT_KEYWORD: &str = "import";
const REQUIRE_KEYWORD: &str = "require";
/// Dependency directory segment, stripped with everything before it.
const NODE_MODULES_SEGMENT: &str = "node_modules/";
/// Type-declaration scope conventionally nested inside `node_modules/`.
const TYPES_SCOPE_SEGMENT: &str = "@types/";
/// Directory imports resolve to their index implicitly.
const INDEX_SUFFIX: &str = "/index";

/// Rewrite the import specifier embedded in `type_reference` relative to
/// `emitting_file`.
///
/// Text without an import marker passes through unchanged. A marker whose
/// quoted path cannot be extracted, or whose path cannot be related to the
/// emitting file's directory, yields `None`; the caller then falls back to
/// an unqualified reference or drops the metadata field.
pub fn rewrite_import_path(type_reference: &str, emitting_file: &str) -> Option<String> {
    if !type_reference.contains(IMPORT_CALL) {
        return Some(type_reference.to_string());
    }

    let raw_path = extract_import_path(type_reference)?;

    // The renderer may produce platform-native separators.
    let normalized = raw_path.replace('\\', "/");
    let from_dir = Path::new(emitting_file)
        .parent()
        .unwrap_or_else(|| Path::new(""));
    let mut relative = relative_import_specifier(from_dir, Path::new(&normalized))?;

    if !relative.starts_with('.') {
        relative = format!("./{relative}");
    }

    if let Some(position) = relative.find(NODE_MODULES_SEGMENT) {
        relative = relative[position + NODE_MODULES_SEGMENT.len()..].to_string();
        if let Some(unscoped) = relative.strip_prefix(TYPES_SCOPE_SEGMENT) {
            relative = unscoped.to_string();
        }
    }

    if let Some(truncated) = relative.strip_suffix(INDEX_SUFFIX) {
        relative = truncated.to_string();
    }

    debug!(
        file = emitting_file,
        from = raw_path,
        to = relative.as_str(),
        "rewrote import specifier"
    );

    let rewritten = type_reference.replacen(raw_path, &relative, 1);
    Some(rewritten.replacen(IMPORT_KEYWORD, REQUIRE_KEYWORD, 1))
}

/// Extract the double-quoted path argument of the first `import("...")`.
///
/// Requires the closing quote to be followed by `)`; anything else is a
/// grammar mismatch and yields `None`.
fn extract_import_path(type_reference: &str) -> Option<&str> {
    let start = type_reference.find(IMPORT_MARKER)? + IMPORT_MARKER.len();
    let rest = &type_reference[start..];
    let end = rest.find('"')?;
    if end == 0 || !rest[end + 1..].starts_with(')') {
        return None;
    }
    Some(&rest[..end])
}

/// Compute the path of `target` relative to `from_dir`, joined with `/`.
///
/// Walks up from `from_dir` until an ancestor prefixes `target`. Returns
/// `None` when the two share no root at all.
fn relative_import_specifier(from_dir: &Path, target: &Path) -> Option<String> {
    if let Ok(rel) = target.strip_prefix(from_dir) {
        return Some(join_with_slash(rel));
    }

    let mut up_count = 0;
    let mut ancestor = from_dir;
    while let Some(parent) = ancestor.parent() {
        up_count += 1;
        if let Ok(rel) = target.strip_prefix(parent) {
            return Some(format!("{}{}", "../".repeat(up_count), join_with_slash(rel)));
        }
        ancestor = parent;
    }
    None
}

fn join_with_slash(path: &Path) -> String {
    path.components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

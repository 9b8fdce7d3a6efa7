// pathmod/src/helpers.rs
//! Pure string helpers shared by the path operations.
//! - Basename / dirname extraction (single `/` separator convention)
//! - Extension decomposition: (root, extension chain) split on demand
//! - No filesystem access anywhere in this module

use memchr::memrchr;

/* ============================ Basename / dirname ============================ */

/// Final separator-delimited component. Trailing separators are ignored
/// when locating it; the root (or an empty string) has no component.
pub fn basename(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "";
    }
    match memrchr(b'/', trimmed.as_bytes()) {
        Some(pos) => &trimmed[pos + 1..],
        None => trimmed,
    }
}

/// Path with its final component removed. A path with no separator yields
/// `.` (parent-directory semantics, not string truncation).
pub fn dirname(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return if path.starts_with('/') { "/" } else { "." };
    }
    match memrchr(b'/', trimmed.as_bytes()) {
        Some(pos) => {
            let parent = trimmed[..pos].trim_end_matches('/');
            if parent.is_empty() {
                "/"
            } else {
                parent
            }
        }
        None => ".",
    }
}

/* ========================== Extension decomposition ========================== */

/// Split a filename into (root, extension chain) at its first dot.
/// A dot at index 0 is not a boundary, so any name whose first character
/// is a dot has zero extensions: `.gitignore` -> (".gitignore", ""), and
/// likewise `.tar.gz` taken as a whole name -> (".tar.gz", "").
pub fn split_extensions(name: &str) -> (&str, &str) {
    match name.find('.') {
        Some(i) if i > 0 => name.split_at(i),
        _ => (name, ""),
    }
}

/// Last extension including its dot (`"file.tar.gz"` -> `".gz"`), or an
/// empty string when the name has none.
pub fn last_extension(name: &str) -> &str {
    let (_, chain) = split_extensions(name);
    match chain.rfind('.') {
        Some(i) => &chain[i..],
        None => "",
    }
}

/// Name with only its last extension removed (`"file.tar.gz"` -> `"file.tar"`).
pub fn strip_last_extension(name: &str) -> &str {
    let ext = last_extension(name);
    &name[..name.len() - ext.len()]
}

/* ===================================== Tests ===================================== */

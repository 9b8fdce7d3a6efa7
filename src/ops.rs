// pathmod/src/ops.rs
//! The closed set of path operations and their semantics.

use anyhow::{anyhow, Context, Result};

use crate::helpers;

/// One step of a transformation chain. Parsed once from the flag list and
/// applied in order of appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Normalize,
    Dirname,
    Basename,
    Stem,
    RootStem,
    Extension,
    Extensions,
}

/// Apply a single operation to the accumulator produced by the previous
/// step. Only `Normalize` consults external context (the working dir).
pub fn apply(op: Op, path: &str) -> Result<String> {
    let out = match op {
        Op::Normalize => return normalize(path),
        Op::Dirname => helpers::dirname(path),
        Op::Basename => helpers::basename(path),
        Op::Stem => helpers::strip_last_extension(helpers::basename(path)),
        Op::RootStem => helpers::split_extensions(helpers::basename(path)).0,
        Op::Extension => helpers::last_extension(helpers::basename(path)),
        Op::Extensions => helpers::split_extensions(helpers::basename(path)).1,
    };
    Ok(out.to_string())
}

/// Resolve a path to absolute form against the process working directory.
pub fn normalize(path: &str) -> Result<String> {
    let cwd = std::env::current_dir().context("failed to get current_dir")?;
    let base = cwd
        .to_str()
        .ok_or_else(|| anyhow!("non-utf8 working directory: {}", cwd.display()))?;
    Ok(resolve(path, base))
}

/// Resolve `path` against an absolute `base`: drop `.` and empty segments,
/// pop one segment per `..` (a no-op at the root). The result carries no
/// trailing separator unless it is the root itself.
fn resolve(path: &str, base: &str) -> String {
    let mut stack: Vec<&str> = Vec::new();
    if !path.starts_with('/') {
        push_segments(&mut stack, base);
    }
    push_segments(&mut stack, path);
    if stack.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", stack.join("/"))
    }
}

fn push_segments<'a>(stack: &mut Vec<&'a str>, path: &'a str) {
    for seg in path.split('/') {
        match seg {
            "" | "." => {}
            ".." => {
                stack.pop();
            }
            other => stack.push(other),
        }
    }
}

/* ===================================== Tests ===================================== */

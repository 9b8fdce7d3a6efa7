// pathmod/src/modify.rs
//! The `modify` engine: flag parsing and chained application.
//!
//! Flags map one-to-one onto operations and are applied in the order they
//! appear on the command line; a repeated flag is applied every time.
//! Parsing stops at the first non-flag token, which starts the positional
//! path list verbatim.

use std::io::Write;

use anyhow::Result;

use crate::ops::{self, Op};

enum Parsed {
    Run { chain: Vec<Op>, paths: Vec<String> },
    Help,
}

/// Engine entry point. Returns the process exit status: 0 on success,
/// 1 when no paths were given, 2 on an unrecognized flag.
pub fn run(args: &[String], out: &mut impl Write, err: &mut impl Write) -> Result<i32> {
    let (chain, paths) = match parse_args(args) {
        Ok(Parsed::Help) => {
            print_usage(out)?;
            return Ok(0);
        }
        Ok(Parsed::Run { chain, paths }) => (chain, paths),
        Err(flag) => {
            writeln!(err, "Unknown option '{flag}'")?;
            return Ok(2);
        }
    };

    if paths.is_empty() {
        writeln!(err, "No paths provided")?;
        print_usage(err)?;
        return Ok(1);
    }

    for path in &paths {
        let mut acc = path.clone();
        for op in &chain {
            acc = ops::apply(*op, &acc)?;
        }
        writeln!(out, "{acc}")?;
    }
    Ok(0)
}

/// Scan the argument list into an operation chain plus positionals.
/// `Err` carries the offending flag token verbatim, prefix included.
fn parse_args(args: &[String]) -> Result<Parsed, String> {
    let mut chain = Vec::new();
    let mut paths = Vec::new();

    for (i, arg) in args.iter().enumerate() {
        if arg == "--" {
            paths.extend(args[i + 1..].iter().cloned());
            break;
        }
        if let Some(name) = arg.strip_prefix("--") {
            match long_op(name) {
                Some(op) => chain.push(op),
                None if name == "help" => return Ok(Parsed::Help),
                None => return Err(arg.clone()),
            }
        } else if arg.len() > 1 && arg.starts_with('-') {
            for c in arg.chars().skip(1) {
                match short_op(c) {
                    Some(op) => chain.push(op),
                    None if c == 'h' => return Ok(Parsed::Help),
                    None => return Err(format!("-{c}")),
                }
            }
        } else {
            // First positional: everything from here on is a path, even
            // tokens that start with '-'.
            paths.extend(args[i..].iter().cloned());
            break;
        }
    }

    Ok(Parsed::Run { chain, paths })
}

fn long_op(name: &str) -> Option<Op> {
    match name {
        "normalize" => Some(Op::Normalize),
        "dirname" => Some(Op::Dirname),
        "basename" => Some(Op::Basename),
        "stem" => Some(Op::Stem),
        "root-stem" => Some(Op::RootStem),
        "extension" => Some(Op::Extension),
        "extensions" => Some(Op::Extensions),
        _ => None,
    }
}

fn short_op(c: char) -> Option<Op> {
    match c {
        'n' => Some(Op::Normalize),
        'd' => Some(Op::Dirname),
        'b' => Some(Op::Basename),
        's' => Some(Op::Stem),
        'S' => Some(Op::RootStem),
        'e' => Some(Op::Extension),
        'E' => Some(Op::Extensions),
        _ => None,
    }
}

pub fn print_usage(out: &mut impl Write) -> Result<()> {
    writeln!(
        out,
        r#"USAGE:
    pathmod modify [flags] <path>...

Flags are applied to each path in the order given; short flags combine
(-nd means normalize, then dirname).

FLAGS:
    -n, --normalize     resolve to an absolute path
    -d, --dirname       parent directory
    -b, --basename      final path component
    -s, --stem          strip the final extension
    -S, --root-stem     strip all extensions
    -e, --extension     final extension only (e.g. .gz)
    -E, --extensions    full extension chain (e.g. .tar.gz)
    -h, --help          show this message"#
    )?;
    Ok(())
}

/* ===================================== Tests ===================================== */

#[cfg(test)]
mod tests {
    use super::*;

    fn run_captured(args: &[&str]) -> (i32, String, String) {
        let args: Vec<String> = args.iter().map(|s| (*s).to_string()).collect();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(&args, &mut out, &mut err).unwrap();
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn empty_chain_echoes_paths() {
        let (code, out, err) = run_captured(&["foo/bar", "baz.txt"]);
        assert_eq!(code, 0);
        assert_eq!(out, "foo/bar\nbaz.txt\n");
        assert!(err.is_empty());
    }

    #[test]
    fn one_line_per_path_in_order() {
        let (code, out, _) = run_captured(&["-e", "x/file.one.two", "y/another.txt", "plain"]);
        assert_eq!(code, 0);
        assert_eq!(out, ".two\n.txt\n\n");
    }

    #[test]
    fn stem_then_extension() {
        let (code, out, _) = run_captured(&["-se", "file.tar.gz"]);
        assert_eq!(code, 0);
        assert_eq!(out, ".tar\n");
    }

    #[test]
    fn root_stem_then_extension_is_empty() {
        let (code, out, _) = run_captured(&["-Se", "file.tar.gz"]);
        assert_eq!(code, 0);
        assert_eq!(out, "\n");
    }

    #[test]
    fn combined_shorts_apply_in_order() {
        // normalize -> dirname -> basename lands on the parent dir name,
        // wherever the process happens to be running.
        let (code, out, _) = run_captured(&["-ndb", "foo/bar/file.txt"]);
        assert_eq!(code, 0);
        assert_eq!(out, "bar\n");
    }

    #[test]
    fn separate_flags_equal_combined() {
        let combined = run_captured(&["-db", "foo/bar/file.txt"]);
        let separate = run_captured(&["-d", "-b", "foo/bar/file.txt"]);
        assert_eq!(combined, separate);
        assert_eq!(combined.1, "bar\n");
    }

    #[test]
    fn repeated_flag_applies_every_time() {
        let (code, out, _) = run_captured(&["-dd", "a/b/c/d"]);
        assert_eq!(code, 0);
        assert_eq!(out, "a/b\n");
    }

    #[test]
    fn long_flags_work() {
        let (code, out, _) = run_captured(&["--basename", "--stem", "a/b/file.tar.gz"]);
        assert_eq!(code, 0);
        assert_eq!(out, "file.tar\n");
    }

    #[test]
    fn unknown_short_flag_is_status_2() {
        let (code, out, err) = run_captured(&["-z", "some/path"]);
        assert_eq!(code, 2);
        assert!(out.is_empty());
        assert!(err.contains("Unknown option '-z'"));
    }

    #[test]
    fn unknown_flag_inside_group_reports_the_char() {
        let (code, _, err) = run_captured(&["-nq", "some/path"]);
        assert_eq!(code, 2);
        assert!(err.contains("Unknown option '-q'"));
    }

    #[test]
    fn unknown_long_flag_keeps_its_prefix() {
        let (code, out, err) = run_captured(&["--frobnicate", "some/path"]);
        assert_eq!(code, 2);
        assert!(out.is_empty());
        assert!(err.contains("Unknown option '--frobnicate'"));
    }

    #[test]
    fn no_paths_is_status_1() {
        let (code, out, err) = run_captured(&["-n"]);
        assert_eq!(code, 1);
        assert!(out.is_empty());
        assert!(err.contains("No paths provided"));
        assert!(err.contains("USAGE"));
    }

    #[test]
    fn help_short_circuits_parsed_state() {
        let (code, out, err) = run_captured(&["-n", "--help"]);
        assert_eq!(code, 0);
        assert!(out.contains("USAGE"));
        assert!(err.is_empty());
    }

    #[test]
    fn double_dash_flushes_positionals() {
        let (code, out, _) = run_captured(&["-b", "--", "-weird/file"]);
        assert_eq!(code, 0);
        assert_eq!(out, "file\n");
    }

    #[test]
    fn parsing_stops_at_first_positional() {
        let (code, out, _) = run_captured(&["-b", "x/foo", "-n"]);
        assert_eq!(code, 0);
        assert_eq!(out, "foo\n-n\n");
    }

    #[test]
    fn lone_dash_is_a_positional() {
        let (code, out, _) = run_captured(&["-"]);
        assert_eq!(code, 0);
        assert_eq!(out, "-\n");
    }
}

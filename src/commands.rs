// pathmod/src/commands.rs

use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;

use crate::modify;

/// Collect process arguments, wire up the real streams, and dispatch.
pub fn run_cli() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();

    let code = match dispatch(&args, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("pathmod: {e:#}");
            1
        }
    };
    ExitCode::from(exit_code_to_u8(code))
}

/// Route the top-level argument list. Writes only to the given sinks, so
/// callers (tests included) can capture everything the tool says.
pub fn dispatch(args: &[String], out: &mut impl Write, err: &mut impl Write) -> Result<i32> {
    let Some(first) = args.first() else {
        writeln!(err, "Missing command")?;
        print_usage(err)?;
        return Ok(2);
    };

    match first.as_str() {
        "help" | "--help" | "-h" => {
            print_usage(out)?;
            Ok(0)
        }
        "modify" => modify::run(&args[1..], out, err),
        cmd if cmd.starts_with('-') => {
            // Leading flag: the whole argument list is modify's.
            modify::run(args, out, err)
        }
        cmd => {
            writeln!(err, "Unknown command '{cmd}'")?;
            print_usage(err)?;
            Ok(2)
        }
    }
}

fn print_usage(out: &mut impl Write) -> Result<()> {
    writeln!(
        out,
        r#"pathmod - chained transformations over path strings

USAGE:
    pathmod modify [flags] <path>...   # transform each path, one line per input
    pathmod [flags] <path>...          # 'modify' may be omitted when flags lead
    pathmod help                       # show this message

Run 'pathmod modify --help' for the flag list."#
    )?;
    Ok(())
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}

/* ===================================== Tests ===================================== */

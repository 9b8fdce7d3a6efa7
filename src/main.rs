// src/main.rs

use std::process::ExitCode;

fn main() -> ExitCode {
    pathmod::commands::run_cli()
}

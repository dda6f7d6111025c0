//! Expression lexer CLI.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use exprc::commands::{check_command, lex_command, read_source, Report};
use exprc::{init_tracing, parse_args, Command};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let invocation = match parse_args(&args) {
        Ok(invocation) => invocation,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            print_usage();
            return ExitCode::from(2);
        }
    };

    if invocation.command == Command::Help {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let source = match read_source(&invocation.input) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let report = Report {
        color: invocation.color,
        is_tty: io::stderr().is_terminal(),
    };
    let stdout = io::stdout();
    let stderr = io::stderr();
    let result = match invocation.command {
        Command::Lex => lex_command(&source, report, &mut stdout.lock(), &mut stderr.lock()),
        Command::Check => check_command(&source, report, &mut stderr.lock()),
        Command::Help => Ok(true),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    eprintln!("Expression lexer");
    eprintln!();
    eprintln!("Usage: exprc <command> [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  lex <file|->     Print the tokens of an expression");
    eprintln!("  check <file|->   Report the first lexical error, if any");
    eprintln!("  help             Show this message");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --color=<mode>   Diagnostic colors: auto, always, never");
    eprintln!();
    eprintln!("Set RUST_LOG (e.g. RUST_LOG=expr_lexer=trace) for scanner traces.");
}

//! Argument parsing.

use std::io;
use std::path::PathBuf;

use expr_diagnostic::emitter::ColorMode;

/// What to do with the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print every token.
    Lex,
    /// Print only the diagnostic, if any.
    Check,
    Help,
}

/// Where the source text comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// Name used when rendering diagnostics.
    pub fn display_name(&self) -> String {
        match self {
            Input::Stdin => "<stdin>".to_string(),
            Input::File(path) => path.display().to_string(),
        }
    }
}

/// A fully parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    pub input: Input,
    pub color: ColorMode,
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("missing file path")]
    MissingPath,
    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),
    #[error("invalid --color value `{0}` (expected auto, always or never)")]
    InvalidColor(String),
    #[error("cannot read {name}: {source}")]
    Read {
        name: String,
        #[source]
        source: io::Error,
    },
}

/// Parse arguments (without the program name).
///
/// ```text
/// exprc <lex|check> <file|-> [--color=<auto|always|never>]
/// exprc help
/// ```
pub fn parse_args(args: &[String]) -> Result<Invocation, CliError> {
    let Some(command) = args.first() else {
        return Ok(help());
    };
    let command = match command.as_str() {
        "lex" => Command::Lex,
        "check" => Command::Check,
        "help" | "--help" | "-h" => return Ok(help()),
        other => return Err(CliError::UnknownCommand(other.to_string())),
    };

    let mut input = None;
    let mut color = ColorMode::Auto;
    let mut rest = args[1..].iter();
    while let Some(arg) = rest.next() {
        if let Some(value) = arg.strip_prefix("--color=") {
            color = parse_color(value)?;
        } else if arg == "--color" {
            let value = rest.next().map_or("", String::as_str);
            color = parse_color(value)?;
        } else if arg == "-" && input.is_none() {
            input = Some(Input::Stdin);
        } else if !arg.starts_with('-') && input.is_none() {
            input = Some(Input::File(PathBuf::from(arg)));
        } else {
            return Err(CliError::UnexpectedArgument(arg.clone()));
        }
    }

    Ok(Invocation {
        command,
        input: input.ok_or(CliError::MissingPath)?,
        color,
    })
}

fn parse_color(value: &str) -> Result<ColorMode, CliError> {
    ColorMode::parse(value).ok_or_else(|| CliError::InvalidColor(value.to_string()))
}

fn help() -> Invocation {
    Invocation {
        command: Command::Help,
        input: Input::Stdin,
        color: ColorMode::Auto,
    }
}

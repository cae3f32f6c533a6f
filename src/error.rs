use std::io;
use thiserror::Error;

/// Errors raised by the interpreter itself.
///
/// Builtins report their own failures through [`anyhow::Error`]; only
/// [`ShellError::MissingArgument`] is shared with them so the message stays
/// uniform across commands.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("expected argument to \"{0}\"")]
    MissingArgument(&'static str),

    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    #[error("line editor error: {0}")]
    Editor(#[from] rustyline::error::ReadlineError),
}

pub type ShellResult<T> = Result<T, ShellError>;

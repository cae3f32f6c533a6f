use crate::error::ShellResult;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{self, BufRead, IsTerminal, StdinLock, Stdout, Write};

/// Source of command lines for the read–eval loop.
pub trait LineSource {
    /// Shows `prompt` and reads one line.
    ///
    /// Returns `Ok(None)` at end of input, which is a normal shutdown.
    fn read_line(&mut self, prompt: &str) -> ShellResult<Option<String>>;
}

/// Plain reader for pipes, files and tests.
///
/// Writes the prompt itself and reads up to the next newline. Invalid UTF-8 is
/// replaced rather than treated as a read failure.
pub struct BufferedSource<R, W> {
    input: R,
    output: W,
    line: Vec<u8>,
}

impl<R: BufRead, W: Write> BufferedSource<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: Vec::new(),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> LineSource for BufferedSource<R, W> {
    fn read_line(&mut self, prompt: &str) -> ShellResult<Option<String>> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;

        self.line.clear();
        if self.input.read_until(b'\n', &mut self.line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&self.line).into_owned()))
    }
}

/// Interactive line editing on a terminal. History is not recorded.
pub struct EditorSource {
    editor: DefaultEditor,
}

impl EditorSource {
    pub fn new() -> ShellResult<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> ShellResult<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            // Ctrl-C drops the current line and prompts again.
            Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
            Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

/// Reads commands from the process's standard input.
pub type StdinSource = BufferedSource<StdinLock<'static>, Stdout>;

/// Picks the line source for standard input.
///
/// A terminal gets the line editor unless `plain` is set or the editor cannot be
/// set up; everything else is read line by line.
pub fn stdin_source(plain: bool) -> Box<dyn LineSource> {
    if !plain && io::stdin().is_terminal() {
        match EditorSource::new() {
            Ok(editor) => return Box::new(editor),
            Err(err) => tracing::warn!(error = %err, "line editor unavailable, reading plain lines"),
        }
    }
    Box::new(StdinSource::new(io::stdin().lock(), io::stdout()))
}

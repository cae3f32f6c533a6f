use anyhow::Result;
use std::io::Write;

/// Tells the read–eval loop whether to read another line.
///
/// Every dispatch produces one. Only the `exit` builtin produces [`Flow::Stop`];
/// failing commands still yield [`Flow::Continue`] so a single bad command never
/// takes the interpreter down.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

impl Flow {
    pub fn is_continue(self) -> bool {
        self == Flow::Continue
    }
}

/// A command handled entirely inside the interpreter process.
///
/// Implementors are stateless and shared through the process-wide registry, so
/// they must be `Send + Sync`.
pub trait Builtin: Send + Sync {
    /// Name the operator types, e.g. "cd" or "echo".
    fn name(&self) -> &'static str;

    /// One-line summary shown by `help`.
    fn description(&self) -> &'static str;

    /// Runs the command. `args[0]` is the command name itself.
    ///
    /// Output goes to `stdout`. Failures are returned as errors and reported by
    /// the dispatcher; they do not stop the loop.
    fn execute(&self, args: &[String], stdout: &mut dyn Write) -> Result<Flow>;
}

/// Runs anything that is not a builtin as a separate process.
pub trait Launcher {
    /// Starts `args[0]` with the full argument vector and waits for it to
    /// terminate. Problems are reported to `stderr`; the result is always
    /// [`Flow::Continue`] for real launchers.
    fn launch(&self, args: &[String], stderr: &mut dyn Write) -> Flow;
}

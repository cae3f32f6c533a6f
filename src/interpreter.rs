use crate::command::{Flow, Launcher};
use crate::error::ShellResult;
use crate::external::ProcessLauncher;
use crate::io_adapters::LineSource;
use crate::lexer::split_into_tokens;
use crate::registry::{BUILTINS, BuiltinRegistry};
use std::io::Write;
use tracing::{debug, trace};

/// Prompt shown before every line unless configured otherwise.
pub const DEFAULT_PROMPT: &str = "> ";

/// A minimal shell-like interpreter that runs builtin and external commands.
///
/// Each command line is split into an argument vector and dispatched: names
/// found in the builtin registry run in-process, everything else is handed to
/// the [`Launcher`].
///
/// Example
/// ```
/// use bsh::{Flow, Interpreter};
/// let sh = Interpreter::default();
/// let mut out = Vec::new();
/// let args = vec!["echo".to_string(), "hello".to_string()];
/// assert_eq!(sh.execute(&args, &mut out, &mut std::io::sink()), Flow::Continue);
/// assert_eq!(out, b"hello\n");
/// ```
pub struct Interpreter {
    builtins: &'static BuiltinRegistry,
    launcher: Box<dyn Launcher>,
    prompt: String,
}

impl Interpreter {
    /// Create an interpreter over a custom registry and launcher.
    pub fn new(builtins: &'static BuiltinRegistry, launcher: Box<dyn Launcher>) -> Self {
        Self {
            builtins,
            launcher,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Dispatch one argument vector.
    ///
    /// An empty vector is a no-op. Builtin failures are printed to `stderr` as
    /// `bsh: <error>` and never stop the loop.
    pub fn execute(&self, args: &[String], stdout: &mut dyn Write, stderr: &mut dyn Write) -> Flow {
        let Some(name) = args.first() else {
            return Flow::Continue;
        };

        let Some(builtin) = self.builtins.lookup(name) else {
            debug!(program = %name, argc = args.len(), "launching external program");
            return self.launcher.launch(args, stderr);
        };

        trace!(builtin = %name, "running builtin");
        let flow = match builtin.execute(args, stdout) {
            Ok(flow) => flow,
            Err(err) => {
                let _ = writeln!(stderr, "bsh: {:#}", err);
                Flow::Continue
            }
        };
        let _ = stdout.flush();
        flow
    }

    /// Run the read–eval loop until `exit` or end of input.
    ///
    /// Both endings are a clean shutdown. Only a failure to read a line is
    /// returned as an error.
    pub fn repl(
        &self,
        source: &mut dyn LineSource,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> ShellResult<()> {
        loop {
            let Some(line) = source.read_line(&self.prompt)? else {
                debug!("end of input");
                return Ok(());
            };
            let args = split_into_tokens(&line);
            if !self.execute(&args, stdout, stderr).is_continue() {
                debug!("exit requested");
                return Ok(());
            }
        }
    }
}

impl Default for Interpreter {
    /// The standard builtins backed by real processes.
    fn default() -> Self {
        Self::new(&BUILTINS, Box::new(ProcessLauncher))
    }
}

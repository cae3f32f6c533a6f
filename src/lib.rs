//! A tiny interactive command interpreter.
//!
//! Each line read from the operator is split on whitespace and either handled
//! by one of the builtins (`cd`, `pwd`, `ls`, `touch`, `mkdir`, `echo`, `cat`,
//! `whoami`, `host`, `help`, `exit`) or run as an external program. There are no
//! pipes, redirections, variables or quoting.
//!
//! The main entry point is [`Interpreter`]: [`Interpreter::execute`] dispatches a
//! single argument vector and [`Interpreter::repl`] drives the read–eval loop
//! over any [`LineSource`](io_adapters::LineSource).

mod builtin;
pub mod command;
pub mod config;
pub mod error;
mod external;
pub mod interpreter;
pub mod io_adapters;
pub mod lexer;
pub mod registry;

pub use command::{Builtin, Flow, Launcher};
pub use error::{ShellError, ShellResult};
pub use external::ProcessLauncher;
pub use interpreter::Interpreter;

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, MutexGuard, OnceLock};

    /// Serializes tests that read or change the process working directory.
    pub fn lock_current_dir() -> MutexGuard<'static, ()> {
        static MUTEX: OnceLock<Mutex<()>> = OnceLock::new();
        MUTEX
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

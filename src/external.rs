use crate::command::{Flow, Launcher};
use std::io::{self, Write};
use std::process::{Command, ExitStatus};
use tracing::debug;

/// Launcher for programs that are not builtins.
///
/// The program is looked up in `PATH` and runs with the interpreter's standard
/// streams, environment and working directory. The interpreter blocks until the
/// child has exited or was killed by a signal.
#[derive(Debug, Default)]
pub struct ProcessLauncher;

impl Launcher for ProcessLauncher {
    fn launch(&self, args: &[String], stderr: &mut dyn Write) -> Flow {
        let Some((name, rest)) = args.split_first() else {
            return Flow::Continue;
        };

        // Anything a builtin printed must reach the terminal before the child writes.
        let _ = io::stdout().flush();

        let mut child = match Command::new(name).args(rest).spawn() {
            Ok(child) => child,
            Err(err) => {
                let _ = writeln!(stderr, "bsh: {}: {}", name, err);
                return Flow::Continue;
            }
        };

        // `wait` does not ask for stopped children, so a suspended program keeps
        // the interpreter waiting until it really terminates.
        match child.wait() {
            Ok(status) => {
                debug!(program = %name, pid = child.id(), code = exit_code(status), "child terminated");
            }
            Err(err) => {
                let _ = writeln!(stderr, "bsh: {}: {}", name, err);
            }
        }
        Flow::Continue
    }
}

/// Shell-style exit code of a terminated child.
pub fn exit_code(status: ExitStatus) -> i32 {
    match status.code() {
        Some(code) => code,
        None => terminated_by_signal(status),
    }
}

#[cfg(unix)]
fn terminated_by_signal(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    if let Some(signal) = status.signal() {
        128 + signal
    } else if status.core_dumped() {
        255
    } else {
        -1
    }
}

#[cfg(not(unix))]
fn terminated_by_signal(_status: ExitStatus) -> i32 {
    -1
}

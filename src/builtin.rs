use crate::command::{Builtin, Flow};
use crate::error::ShellError;
use crate::registry::BUILTINS;
use anyhow::{Context, Result, anyhow};
use nix::unistd::{User, gethostname, getuid};
use std::env;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::{debug, trace};

/// Returns `args[1]` or reports that `command` needs an argument.
fn required_arg<'a>(args: &'a [String], command: &'static str) -> Result<&'a str> {
    args.get(1)
        .map(String::as_str)
        .ok_or_else(|| ShellError::MissingArgument(command).into())
}

/// Change the current working directory.
pub struct Cd;

impl Builtin for Cd {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn description(&self) -> &'static str {
        "Change the current working directory"
    }

    fn execute(&self, args: &[String], _stdout: &mut dyn Write) -> Result<Flow> {
        let target = required_arg(args, "cd")?;
        env::set_current_dir(target).with_context(|| format!("cd: {}", target))?;
        Ok(Flow::Continue)
    }
}

/// Print the current working directory.
pub struct Pwd;

impl Builtin for Pwd {
    fn name(&self) -> &'static str {
        "pwd"
    }

    fn description(&self) -> &'static str {
        "Print the current working directory"
    }

    fn execute(&self, _args: &[String], stdout: &mut dyn Write) -> Result<Flow> {
        let cwd = env::current_dir().context("pwd: failed to get current directory")?;
        writeln!(stdout, "{}", cwd.display())?;
        Ok(Flow::Continue)
    }
}

/// List a directory, `.` when no argument is given.
pub struct Ls;

impl Builtin for Ls {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn description(&self) -> &'static str {
        "List directory entries"
    }

    fn execute(&self, args: &[String], stdout: &mut dyn Write) -> Result<Flow> {
        let dir = args.get(1).map_or(".", String::as_str);
        // read_dir never yields "." or "..".
        let entries = fs::read_dir(dir).with_context(|| format!("ls: {}", dir))?;
        for entry in entries {
            let entry = entry.with_context(|| format!("ls: {}", dir))?;
            writeln!(stdout, "{}", entry.file_name().to_string_lossy())?;
        }
        Ok(Flow::Continue)
    }
}

/// Create an empty file, truncating it if it exists.
pub struct Touch;

impl Builtin for Touch {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn description(&self) -> &'static str {
        "Create an empty file or truncate an existing one"
    }

    fn execute(&self, args: &[String], _stdout: &mut dyn Write) -> Result<Flow> {
        let path = required_arg(args, "touch")?;
        File::create(path).with_context(|| format!("touch: {}", path))?;
        Ok(Flow::Continue)
    }
}

/// Create directories that do not exist yet. Failures are not reported.
pub struct Mkdir;

impl Builtin for Mkdir {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn description(&self) -> &'static str {
        "Create directories"
    }

    fn execute(&self, args: &[String], _stdout: &mut dyn Write) -> Result<Flow> {
        for dir in args.iter().skip(1) {
            let path = Path::new(dir);
            if path.exists() {
                trace!(path = %dir, "mkdir: already exists, skipping");
                continue;
            }
            if let Err(err) = fs::create_dir(path) {
                debug!(path = %dir, error = %err, "mkdir: creation failed, ignoring");
            }
        }
        Ok(Flow::Continue)
    }
}

/// Write the arguments separated by single spaces, newline-terminated.
pub struct Echo;

impl Builtin for Echo {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn description(&self) -> &'static str {
        "Print arguments separated by spaces"
    }

    fn execute(&self, args: &[String], stdout: &mut dyn Write) -> Result<Flow> {
        let words = args.get(1..).unwrap_or_default();
        writeln!(stdout, "{}", words.join(" "))?;
        Ok(Flow::Continue)
    }
}

/// Print a file line by line, normalizing line terminators to `\n`.
pub struct Cat;

impl Builtin for Cat {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn description(&self) -> &'static str {
        "Print the contents of a file"
    }

    fn execute(&self, args: &[String], stdout: &mut dyn Write) -> Result<Flow> {
        let path = required_arg(args, "cat")?;
        let file = File::open(path).with_context(|| format!("cat: {}", path))?;
        let mut reader = BufReader::new(file);
        let mut line = Vec::new();
        loop {
            line.clear();
            let read = reader
                .read_until(b'\n', &mut line)
                .with_context(|| format!("cat: {}", path))?;
            if read == 0 {
                break;
            }
            if line.last() == Some(&b'\n') {
                line.pop();
                if line.last() == Some(&b'\r') {
                    line.pop();
                }
            }
            stdout.write_all(&line)?;
            stdout.write_all(b"\n")?;
        }
        Ok(Flow::Continue)
    }
}

/// Print the login name of the real user.
pub struct Whoami;

impl Builtin for Whoami {
    fn name(&self) -> &'static str {
        "whoami"
    }

    fn description(&self) -> &'static str {
        "Print the current user name"
    }

    fn execute(&self, _args: &[String], stdout: &mut dyn Write) -> Result<Flow> {
        let uid = getuid();
        let user = User::from_uid(uid)
            .context("whoami: user lookup failed")?
            .ok_or_else(|| anyhow!("whoami: cannot find name for user ID {}", uid))?;
        writeln!(stdout, "{}", user.name)?;
        Ok(Flow::Continue)
    }
}

/// Print the host name.
pub struct Host;

impl Builtin for Host {
    fn name(&self) -> &'static str {
        "host"
    }

    fn description(&self) -> &'static str {
        "Print the host name"
    }

    fn execute(&self, _args: &[String], stdout: &mut dyn Write) -> Result<Flow> {
        let name = gethostname().context("host: failed to get host name")?;
        writeln!(stdout, "{}", name.to_string_lossy())?;
        Ok(Flow::Continue)
    }
}

/// Print usage and the list of builtins.
///
/// Always describes the process-wide [`BUILTINS`] table, whichever registry the
/// running interpreter dispatches through.
pub struct Help;

impl Builtin for Help {
    fn name(&self) -> &'static str {
        "help"
    }

    fn description(&self) -> &'static str {
        "Show this help"
    }

    fn execute(&self, _args: &[String], stdout: &mut dyn Write) -> Result<Flow> {
        writeln!(stdout, "bsh: a small command interpreter")?;
        writeln!(stdout, "Type program names and arguments, and hit enter.")?;
        writeln!(stdout, "The following are built in:")?;
        for builtin in BUILTINS.iter() {
            writeln!(stdout, "  {:<8}{}", builtin.name(), builtin.description())?;
        }
        writeln!(stdout, "Use the man command for information on other programs.")?;
        Ok(Flow::Continue)
    }
}

/// Leave the interpreter.
pub struct Exit;

impl Builtin for Exit {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn description(&self) -> &'static str {
        "Exit the shell"
    }

    fn execute(&self, _args: &[String], _stdout: &mut dyn Write) -> Result<Flow> {
        Ok(Flow::Stop)
    }
}

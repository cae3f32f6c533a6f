use crate::interpreter::DEFAULT_PROMPT;
use argh::FromArgs;

/// Environment variable holding the default log filter.
pub const LOG_ENV: &str = "BSH_LOG";

#[derive(FromArgs, Debug, PartialEq)]
/// A small interactive command interpreter.
/// Reads one command per line; builtins run in-process, anything else is started as a program.
pub struct Config {
    #[argh(option, default = "DEFAULT_PROMPT.to_string()")]
    /// text printed before each command line
    pub prompt: String,

    #[argh(switch)]
    /// read plain lines even when standard input is a terminal
    pub plain: bool,

    #[argh(option)]
    /// log filter directive such as "debug" or "bsh=trace"; overrides BSH_LOG
    pub log: Option<String>,
}

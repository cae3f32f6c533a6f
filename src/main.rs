use bsh::Interpreter;
use bsh::config::{Config, LOG_ENV};
use bsh::io_adapters::stdin_source;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_logging(directive: Option<&str>) {
    let filter = match directive {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let config: Config = argh::from_env();
    init_logging(config.log.as_deref());

    let interpreter = Interpreter::default().with_prompt(config.prompt);
    let mut source = stdin_source(config.plain);

    match interpreter.repl(source.as_mut(), &mut io::stdout(), &mut io::stderr()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("bsh: {}", err);
            ExitCode::FAILURE
        }
    }
}

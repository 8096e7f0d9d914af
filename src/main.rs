//! linesink - interactive line-processing utility

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::io;

use linesink::{parse_args, run_session, CliArgs, Config, Error, Result, StreamSink};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = parse_args();
    init_tracing(args.debug);

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return;
        }
    };

    let stdin = io::stdin();
    let mut control = stdin.lock();
    let mut console = io::stdout();
    let primary = Box::new(StreamSink::new(io::stdout()));

    if let Err(e) = run_session(&config, &mut control, &mut console, primary) {
        report(&e);
    }
}

/// Build configuration from CLI args and an optional config file
fn build_config(args: &CliArgs) -> Result<Config> {
    let mut config = if let Some(path) = &args.config {
        debug!(path = %path.display(), "using explicit config file");
        Config::from_toml_file(path)?
    } else if let Some(discovered) = Config::discover() {
        debug!(path = %discovered.display(), "using discovered config file");
        Config::from_toml_file(&discovered)?
    } else {
        Config::default()
    };

    // Override with CLI arguments
    if let Some(input) = &args.input {
        config.input.clone_from(input);
    }

    if let Some(message) = config.validate() {
        return Err(Error::Config(message));
    }

    Ok(config)
}

/// Convert a session failure into a single user-visible diagnostic.
fn report(error: &Error) {
    match error {
        Error::InputNotFound(_) => eprintln!("Error: {error}."),
        _ => eprintln!("An error occurred: {error}"),
    }
}

fn init_tracing(debug: bool) {
    let default_directive = if debug { "linesink=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

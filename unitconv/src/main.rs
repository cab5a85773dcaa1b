//! Unitconv interactive shell
//!
//! Reads lines like "10 km to m" from stdin and answers each one on stdout.
//!
//! Environment:
//! - UNITCONV_FORMAT: `text` (default) or `json`
//! - UNITCONV_PROMPT: prompt printed before each line
//! - UNITCONV_EXIT_COMMAND: line that ends the session (default `exit`)
//! - UNITCONV_VERBOSE: `1`/`true` for debug logging
//! - RUST_LOG: overrides the log filter entirely

mod config;
mod logger;
mod shell;

use std::io;
use std::process::ExitCode;
use config::Config;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> ExitCode {
    let config = Config::from_env();
    logger::init(config.verbose);

    for reason in &config.rejected {
        tracing::warn!("ignoring setting {}", reason);
    }
    tracing::info!(version = VERSION, format = %config.format, "unitconv started");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    match shell::run(&config, stdin.lock(), &mut output) {
        Ok(turns) => {
            tracing::info!(turns, "session finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("I/O error: {}", e);
            ExitCode::FAILURE
        }
    }
}

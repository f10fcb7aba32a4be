//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use fuelstop_cli::{CliError, run};

fn main() {
    match run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("fuelstop: {err}");
            std::process::exit(1);
        }
    }
}

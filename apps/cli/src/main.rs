//! # MiniCart Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration from the environment
//! 3. Run the interactive session on stdin/stdout
//!
//! Exit code is 0 after `exit` or end of input, 1 if the terminal fails.

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match minicart_cli_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "MiniCart stopped");
            eprintln!("minicart: {}", err);
            ExitCode::FAILURE
        }
    }
}

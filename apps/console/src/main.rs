//! # Gusto Console Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration from the environment
//! 3. Run the menu loop until Exit or end of input
//!
//! Exits non-zero only when standard input or output fails.

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for testability
    match gusto_console::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("gusto: {err}");
            ExitCode::FAILURE
        }
    }
}

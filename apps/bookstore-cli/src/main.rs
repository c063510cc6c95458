//! # bookstore: Command-Line Entry Point
//!
//! ## Startup Sequence
//! 1. Parse the command line
//! 2. Initialize tracing (logging to stderr)
//! 3. Load configuration from the environment
//! 4. Connect to the database & run migrations
//! 5. Run one command, print its result, exit

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    bookstore_cli::run()
}

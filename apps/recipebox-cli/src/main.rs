//! # Recipe Box
//!
//! Command-line entry point. See `recipebox --help`.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging, to stderr)
//! 2. Parse arguments
//! 3. Load configuration from the environment
//! 4. Build the store, seeded with the sample catalog
//! 5. Apply actions and print the selected view as JSON

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    recipebox_cli::run()
}

//! Teaching Library demo CLI
//!
//! Prints a square root, a sum and the number of positive values in a list.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --sqrt 25 --add -5 7
//! cargo run -- --values 1,-2,3 --verbose
//! ```
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (invalid argument, negative square root argument, overflow, output failure)

use std::process;
use teaching_library::{cli, demo, logging};

fn main() {
    let args = cli::parse_args();

    if let Err(e) = logging::init_logging(args.verbose) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    let mut output = std::io::stdout();
    let result = args.to_demo_config().and_then(|config| {
        tracing::debug!(?config, "starting demo");
        demo::run(&config, &mut output)
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "demo failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

//! Demo module
//!
//! Prints a square root, a sum and a count of positive numbers for a
//! [`DemoConfig`]. The binary writes to stdout; tests write to a buffer or a
//! temporary file.

use crate::types::LibraryError;
use crate::utils::{count_positives, my_add, my_sqrt};
use std::io::Write;

mod config;

pub use config::{DemoConfig, DEFAULT_SAMPLE};

/// First line of every report
pub const BANNER: &str = "Udemy course : Google Test & Google Mock!";

/// Run the demo and write its report to `output`
///
/// # Output Format
///
/// ```text
/// Udemy course : Google Test & Google Mock!
/// Sqrt(9) = 3
/// Addition of 5 + 3 = 8
/// In the vector there is 3 positives numbers
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - `sqrt_input` is negative
/// - The addition overflows
/// - Writing to `output` fails
///
/// Nothing is written when one of the computations fails.
pub fn run(config: &DemoConfig, output: &mut dyn Write) -> Result<(), LibraryError> {
    let root = my_sqrt(config.sqrt_input)?;

    let (lhs, rhs) = config.add_operands;
    let sum = my_add(lhs, rhs)?;

    let positives = count_positives(&config.sample);
    tracing::debug!(root, sum, positives, sample_len = config.sample.len(), "demo computed");

    writeln!(output, "{}", BANNER)?;
    writeln!(output, "Sqrt({}) = {}", config.sqrt_input, root)?;
    writeln!(output, "Addition of {} + {} = {}", lhs, rhs, sum)?;
    writeln!(
        output,
        "In the vector there is {} positives numbers",
        positives
    )?;
    output.flush()?;

    Ok(())
}

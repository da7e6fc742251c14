use crate::demo::{DemoConfig, DEFAULT_SAMPLE};
use crate::types::LibraryError;
use clap::{ArgAction, Parser};

/// Print a square root, a sum and a count of positive numbers
#[derive(Parser, Debug)]
#[command(name = "teaching-library")]
#[command(about = "Print a square root, a sum and a count of positive numbers", long_about = None)]
pub struct CliArgs {
    /// Value whose square root is printed
    #[arg(
        long = "sqrt",
        value_name = "X",
        allow_negative_numbers = true,
        help = "Value whose square root is printed (default: 9)"
    )]
    pub sqrt_input: Option<f64>,

    /// Operands of the printed addition
    #[arg(
        long = "add",
        action = ArgAction::Set,
        num_args = 2,
        value_names = ["A", "B"],
        allow_negative_numbers = true,
        help = "Two integers to add (default: 5 3)"
    )]
    pub add_operands: Option<Vec<i32>>,

    /// List in which positive numbers are counted
    #[arg(
        long = "values",
        value_name = "V,...",
        value_delimiter = ',',
        allow_hyphen_values = true,
        help = "Comma separated integers to scan for positives (default: 1,-2,3,-4,5,-6,-7)"
    )]
    pub values: Option<Vec<i32>>,

    /// Enable debug logging on stderr
    #[arg(short, long, help = "Enable debug logging")]
    pub verbose: bool,
}

impl CliArgs {
    /// Create a DemoConfig from CLI arguments
    ///
    /// Arguments that were not given fall back to the `DemoConfig` defaults.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::InvalidArgument`] if `--add` does not carry
    /// exactly two operands.
    pub fn to_demo_config(&self) -> Result<DemoConfig, LibraryError> {
        let add_operands = match self.add_operands.as_deref() {
            None => DemoConfig::DEFAULT_ADD_OPERANDS,
            Some(&[lhs, rhs]) => (lhs, rhs),
            Some(operands) => {
                return Err(LibraryError::invalid_argument(
                    "--add",
                    &format!("expected 2 operands, got {}", operands.len()),
                ))
            }
        };

        Ok(DemoConfig::new(
            self.sqrt_input.unwrap_or(DemoConfig::DEFAULT_SQRT_INPUT),
            add_operands,
            self.values
                .clone()
                .unwrap_or_else(|| DEFAULT_SAMPLE.to_vec()),
        ))
    }
}

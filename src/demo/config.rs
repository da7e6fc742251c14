//! Demo configuration

/// Sample list printed by the demo when none is supplied
pub const DEFAULT_SAMPLE: [i32; 7] = [1, -2, 3, -4, 5, -6, -7];

/// Inputs for a single demo run
///
/// Built from the command line by `CliArgs::to_demo_config`, falling back to
/// [`DemoConfig::default`] for anything not given.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Value whose square root is printed
    pub sqrt_input: f64,

    /// Operands of the printed addition
    pub add_operands: (i32, i32),

    /// List in which positive numbers are counted
    pub sample: Vec<i32>,
}

impl DemoConfig {
    /// Default square root input
    pub const DEFAULT_SQRT_INPUT: f64 = 9.0;

    /// Default addition operands
    pub const DEFAULT_ADD_OPERANDS: (i32, i32) = (5, 3);

    pub fn new(sqrt_input: f64, add_operands: (i32, i32), sample: Vec<i32>) -> Self {
        DemoConfig {
            sqrt_input,
            add_operands,
            sample,
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_SQRT_INPUT,
            Self::DEFAULT_ADD_OPERANDS,
            DEFAULT_SAMPLE.to_vec(),
        )
    }
}

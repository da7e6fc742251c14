// Utility functions
// Thin arithmetic and string helpers used by the demo

pub mod math;
pub mod text;

pub use math::{count_positives, is_positive, my_add, my_sqrt};
pub use text::to_upper;

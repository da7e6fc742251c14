//! Parameterized Validator tests
//!
//! One inside value, both edges, and values just and far outside the
//! range `[5, 10]`.

use rstest::{fixture, rstest};
use teaching_library::Validator;

#[fixture]
fn validator() -> Validator {
    Validator::new(5, 10)
}

#[rstest]
#[case(-100, false)]
#[case(4, false)]
#[case(5, true)]
#[case(6, true)]
#[case(7, true)]
#[case(9, true)]
#[case(10, true)]
#[case(11, false)]
#[case(100, false)]
fn test_in_range(validator: Validator, #[case] value: i32, #[case] expected: bool) {
    assert_eq!(validator.in_range(value), expected);
}

#[rstest]
fn test_inside_values(validator: Validator, #[values(5, 6, 7, 9, 10)] value: i32) {
    assert!(validator.in_range(value));
}

#[rstest]
fn test_outside_values(validator: Validator, #[values(-100, 4, 11, 100)] value: i32) {
    assert!(!validator.in_range(value));
}

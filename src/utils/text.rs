//! String helpers

/// Upper-case every ASCII letter of `input` in place
///
/// Non-ASCII characters are left as they are.
pub fn to_upper(input: &mut str) {
    input.make_ascii_uppercase();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::basic("Hello World", "HELLO WORLD")]
    #[case::already_upper("ABC", "ABC")]
    #[case::digits_and_punctuation("a1-b2!", "A1-B2!")]
    #[case::empty("", "")]
    #[case::non_ascii_untouched("straße", "STRAßE")]
    fn test_to_upper(#[case] input: &str, #[case] expected: &str) {
        let mut value = input.to_string();
        to_upper(&mut value);
        assert_eq!(value, expected);
    }
}

//! Property-based tests for Account, Validator and the math helpers

use proptest::prelude::*;
use rust_decimal::Decimal;
use teaching_library::{count_positives, my_add, Account, LibraryError, Validator};

/// Non-negative amount with two decimal places
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    #[test]
    fn prop_deposit_increases_balance_by_amount(initial in amount(), a in amount()) {
        let mut account = Account::new();
        account.deposit(initial);

        account.deposit(a);

        prop_assert_eq!(account.balance(), initial + a);
    }

    #[test]
    fn prop_withdraw_within_balance(a in amount(), b in amount()) {
        let (a, b) = if b <= a { (a, b) } else { (b, a) };
        let mut account = Account::new();
        account.deposit(a);

        prop_assert!(account.withdraw(b).is_ok());
        prop_assert_eq!(account.balance(), a - b);
        prop_assert!(account.balance() >= Decimal::ZERO);
    }

    #[test]
    fn prop_withdraw_beyond_balance_is_rejected(a in amount(), extra in 1i64..1_000_000) {
        let b = a + Decimal::new(extra, 2);
        let mut account = Account::new();
        account.deposit(a);

        prop_assert_eq!(
            account.withdraw(b),
            Err(LibraryError::insufficient_funds(a, b))
        );
        prop_assert_eq!(account.balance(), a);
    }

    #[test]
    fn prop_transfer_conserves_total(a in amount(), b in amount()) {
        let mut from = Account::new();
        let mut to = Account::new();
        from.deposit(a);

        let result = from.transfer(&mut to, b);

        prop_assert_eq!(from.balance() + to.balance(), a);
        if b <= a {
            prop_assert!(result.is_ok());
            prop_assert_eq!(to.balance(), b);
        } else {
            prop_assert!(result.is_err());
            prop_assert_eq!(to.balance(), Decimal::ZERO);
        }
    }

    #[test]
    fn prop_in_range_matches_interval(low in -1000i32..1000, width in 0i32..1000, value in any::<i32>()) {
        let high = low + width;
        let validator = Validator::new(low, high);
        prop_assert_eq!(validator.in_range(value), low <= value && value <= high);
    }

    #[test]
    fn prop_add_matches_i64_sum(a in any::<i32>(), b in any::<i32>()) {
        let wide = i64::from(a) + i64::from(b);
        match my_add(a, b) {
            Ok(sum) => prop_assert_eq!(i64::from(sum), wide),
            Err(_) => prop_assert!(wide > i64::from(i32::MAX) || wide < i64::from(i32::MIN)),
        }
    }

    #[test]
    fn prop_count_positives_bounded_by_len(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let count = count_positives(&values);
        prop_assert!(count <= values.len());
        prop_assert_eq!(count, values.iter().filter(|&&v| v >= 0).count());
    }
}

//! Tests for fixed-point amounts and rates

use core_kernel::{Amount, MoneyError, Rate};
use proptest::prelude::*;
use rust_decimal_macros::dec;

#[test]
fn test_amount_sum() {
    let total: Amount = [Amount::new(10), Amount::new(20), Amount::new(-5)]
        .into_iter()
        .sum();
    assert_eq!(total, Amount::new(25));
}

#[test]
fn test_amount_min_prefers_smaller() {
    assert_eq!(Amount::new(50).min(Amount::new(30)), Amount::new(30));
    assert_eq!(Amount::new(-10).min(Amount::new(5)), Amount::new(-10));
}

#[test]
fn test_checked_mul_for_annual_premium() {
    // monthly premium times twelve charges per year
    let annual = Amount::new(150).checked_mul(12).unwrap();
    assert_eq!(annual, Amount::new(1_800));

    assert_eq!(
        Amount::new(i64::MAX).checked_mul(2),
        Err(MoneyError::Overflow)
    );
}

#[test]
fn test_amount_serializes_transparently() {
    let value = serde_json::to_value(Amount::new(42)).unwrap();
    assert_eq!(value, serde_json::json!(42));

    let parsed: Amount = serde_json::from_value(serde_json::json!(-7)).unwrap();
    assert_eq!(parsed, Amount::new(-7));
}

#[test]
fn test_rate_threshold_comparisons() {
    // 2% minimum-premium rule: annual 199 against original value 10_000
    let minimum = Rate::from_percentage(dec!(2));
    assert!(Amount::new(199).as_decimal() < minimum.of(Amount::new(10_000)));
    assert!(Amount::new(200).as_decimal() >= minimum.of(Amount::new(10_000)));
}

proptest! {
    #[test]
    fn amount_add_sub_round_trips(a in -1_000_000i64..1_000_000i64, b in -1_000_000i64..1_000_000i64) {
        let ma = Amount::new(a);
        let mb = Amount::new(b);
        prop_assert_eq!(ma + mb - mb, ma);
    }

    #[test]
    fn split_evenly_never_exceeds_total(total in 0i64..1_000_000i64, parts in 1u32..100u32) {
        let share = Amount::new(total).split_evenly(parts).unwrap();
        prop_assert!(share.units() * i64::from(parts) <= total);
        prop_assert!((share.units() + 1) * i64::from(parts) > total);
    }
}

#![allow(clippy::float_cmp, reason = "tests compare exact constants")]

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn int64_defaults_to_zero() {
    assert_eq!(Int64::default().get(), 0);
}

#[test]
fn int64_from_widths() {
    assert_eq!(Int64::from(-5i8).get(), -5);
    assert_eq!(Int64::from(u32::MAX).get(), 4_294_967_295);
    let mut v = Int64::from(3u8);
    v.set(i64::MIN);
    assert_eq!(v.get(), i64::MIN);
}

#[test]
fn int64_compare() {
    assert_eq!(Int64::new(1).compare(Int64::new(2)), Compare::Less);
    assert_eq!(Int64::new(2).compare(Int64::new(2)), Compare::Equal);
    assert_eq!(Int64::new(3).compare(Int64::new(2)), Compare::Greater);
}

#[test]
fn float64_defaults_to_zero() {
    assert_eq!(Float64::default().get(), 0.0);
}

#[test]
fn float64_special_values() {
    let mut v = Float64::new(1.5);
    assert!(!v.is_nan());
    assert!(!v.is_infinity());
    assert_eq!(v.classify_infinity(), 0);

    v.set_nan();
    assert!(v.is_nan());
    assert!(!v.is_infinity());

    v.set_infinity();
    assert!(v.is_infinity());
    assert!(v.is_positive_infinity());
    assert!(!v.is_negative_infinity());
    assert_eq!(v.classify_infinity(), 1);

    v.set(f64::NEG_INFINITY);
    assert!(v.is_negative_infinity());
    assert_eq!(v.classify_infinity(), -1);
}

#[test]
fn float64_compare() {
    let one = Float64::new(1.0);
    let two = Float64::new(2.0);
    let nan = Float64::new(f64::NAN);
    assert_eq!(one.compare(two), Compare::Less);
    assert_eq!(two.compare(one), Compare::Greater);
    assert_eq!(one.compare(one), Compare::Equal);
    assert_eq!(Float64::new(-0.0).compare(Float64::new(0.0)), Compare::Equal);
    assert_eq!(nan.compare(one), Compare::Unordered);
    assert_eq!(one.compare(nan), Compare::Unordered);
    assert_eq!(nan.compare(nan), Compare::Unordered);
    assert!(!Compare::Unordered.is_ordered());
    assert!(Compare::Less.is_ordered());
}

#[test]
fn float64_nearly_equal() {
    let eps = Float64::DEFAULT_EPSILON;
    assert!(Float64::new(1.0).nearly_equal(Float64::new(1.000_000_1), eps));
    assert!(!Float64::new(1.0).nearly_equal(Float64::new(1.1), eps));
    assert!(Float64::new(0.0).nearly_equal(Float64::new(0.0), eps));
    assert!(!Float64::new(0.0).nearly_equal(Float64::new(0.001), eps));
    assert!(Float64::new(f64::INFINITY).nearly_equal(Float64::new(f64::INFINITY), eps));
    assert!(!Float64::new(f64::NAN).nearly_equal(Float64::new(f64::NAN), eps));
}

#[test]
fn parse_float64_shapes() {
    assert_eq!(parse_float64(""), 0.0);
    assert_eq!(parse_float64("12"), 12.0);
    assert_eq!(parse_float64("-1.5"), -1.5);
    assert_eq!(parse_float64("+.5"), 0.5);
    assert_eq!(parse_float64("33e+4"), 330_000.0);
    assert_eq!(parse_float64("3."), 3.0);
    assert!(parse_float64("abc").is_nan());
    assert!(parse_float64("inf").is_nan());
    assert!(parse_float64("NaN").is_nan());
    assert!(parse_float64("1e").is_nan());
    assert!(parse_float64(".").is_nan());
    assert!(parse_float64("0x10").is_nan());
    assert!(parse_float64(" 1").is_nan());
}

mod proptest_value {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn compare_is_antisymmetric(a in any::<f64>(), b in any::<f64>()) {
            let forward = Float64::new(a).compare(Float64::new(b));
            let backward = Float64::new(b).compare(Float64::new(a));
            let expected = match forward {
                Compare::Less => Compare::Greater,
                Compare::Greater => Compare::Less,
                other => other,
            };
            prop_assert_eq!(backward, expected);
        }

        #[test]
        fn parse_accepts_display_output(v in -1.0e15f64..1.0e15) {
            prop_assert_eq!(parse_float64(&v.to_string()), v);
        }
    }
}

//!
//! The time unit tests.
//!

use proptest::prelude::*;

use super::convert;
use super::TimeUnit;

#[test]
fn ok() {
    assert!((convert(1500.0, "ns", "us") - 1.5).abs() < 1e-12);
    assert_eq!(convert(2.0, "ms", "us"), 2000.0);
    assert_eq!(convert(3.0, "s", "ms"), 3000.0);
    assert_eq!(convert(42.0, "us", "us"), 42.0);
}

#[test]
fn unknown_unit_is_passed_through() {
    assert_eq!(convert(7.5, "fortnight", "us"), 7.5);
    assert_eq!(convert(7.5, "us", "minutes"), 7.5);
    assert_eq!(convert(7.5, "", ""), 7.5);
}

#[test]
fn from_str() {
    assert_eq!("MS".parse::<TimeUnit>().expect("Always valid"), TimeUnit::Millisecond);
    assert!("hours".parse::<TimeUnit>().is_err());
}

fn unit_strategy() -> impl Strategy<Value = TimeUnit> {
    prop::sample::select(TimeUnit::ALL.to_vec())
}

proptest! {
    #[test]
    fn round_trip(value in 1e-6f64..1e9, from in unit_strategy(), to in unit_strategy()) {
        let there = convert(value, from.to_string().as_str(), to.to_string().as_str());
        let back = convert(there, to.to_string().as_str(), from.to_string().as_str());
        prop_assert!((back - value).abs() <= value.abs() * 1e-9);
    }
}

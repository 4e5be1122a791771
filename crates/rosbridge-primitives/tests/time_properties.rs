//! Property tests for the time primitive.

use proptest::prelude::*;
use rosbridge_primitives::{Primitive, Time};

const NANOS_PER_SEC: i64 = 1_000_000_000;

proptest! {
    #[test]
    fn accessors_return_constructor_arguments(s in any::<i32>(), n in any::<i32>()) {
        let t = Time::new(s, n);
        prop_assert_eq!(t.seconds(), s);
        prop_assert_eq!(t.nanoseconds(), n);
    }

    #[test]
    fn copy_preserves_fields(s in any::<i32>(), n in any::<i32>()) {
        let t = Time::new(s, n);
        let c = t;
        prop_assert_eq!(c.seconds(), t.seconds());
        prop_assert_eq!(c.nanoseconds(), t.nanoseconds());
    }

    #[test]
    fn json_value_round_trip(s in any::<i32>(), n in any::<i32>()) {
        let t = Time::new(s, n);
        prop_assert_eq!(Time::from_json_value(&t.to_json_value()), Ok(t));
    }

    #[test]
    fn json_text_round_trip(s in any::<i32>(), n in 0..NANOS_PER_SEC as i32) {
        let t = Time::new(s, n);
        prop_assert_eq!(Time::parse(&t.to_json_string()), Ok(t));
    }

    #[test]
    fn exact_split_keeps_remainder_in_range(n in 0i64..i64::from(i32::MAX) * NANOS_PER_SEC) {
        let t = Time::from_elapsed_nanoseconds(n);
        prop_assert!((0..NANOS_PER_SEC as i32).contains(&t.nanoseconds()));
        prop_assert_eq!(t.to_nanoseconds(), n);
    }

    #[test]
    fn float_split_stays_close_below_2_pow_53(n in 0i64..(1i64 << 53)) {
        let exact = Time::from_elapsed_nanoseconds(n).to_nanoseconds();
        let legacy = Time::from_elapsed_nanoseconds_f64(n).to_nanoseconds();
        prop_assert!((exact - legacy).abs() <= 4, "n={} exact={} legacy={}", n, exact, legacy);
    }
}

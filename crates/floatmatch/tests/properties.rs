//! Property tests over arbitrary bit patterns.

use floatmatch::prelude::*;
use proptest::prelude::*;

fn finite_f64() -> impl Strategy<Value = f64> {
    any::<u64>()
        .prop_map(f64::from_bits)
        .prop_filter("finite", |x| x.is_finite())
}

fn finite_f32() -> impl Strategy<Value = f32> {
    any::<u32>()
        .prop_map(f32::from_bits)
        .prop_filter("finite", |x| x.is_finite())
}

proptest! {
    #[test]
    fn distance_to_self_is_zero(a in finite_f64(), b in finite_f32()) {
        prop_assert_eq!(ulp_distance(a, a), 0);
        prop_assert_eq!(ulp_distance(b, b), 0);
    }

    #[test]
    fn distance_is_antisymmetric(a in finite_f64(), b in finite_f64()) {
        prop_assert_eq!(ulp_distance(a, b), -ulp_distance(b, a));
    }

    #[test]
    fn distance_is_antisymmetric_single(a in finite_f32(), b in finite_f32()) {
        prop_assert_eq!(ulp_distance(a, b), -ulp_distance(b, a));
    }

    #[test]
    fn distance_sign_follows_order(a in finite_f64(), b in finite_f64()) {
        let d = ulp_distance(a, b);
        prop_assert_eq!(d > 0, a < b);
        prop_assert_eq!(d == 0, a == b);
    }

    #[test]
    fn crossing_zero_doubles_distance(x in finite_f64()) {
        let x = x.abs();
        let from_zero = ulp_distance(0.0, x);
        match from_zero.checked_mul(2) {
            Some(doubled) => prop_assert_eq!(ulp_distance(-x, x), doubled),
            None => prop_assert_eq!(ulp_distance(-x, x), INFINITE_DISTANCE),
        }
    }

    #[test]
    fn stepping_agrees_with_distance(x in finite_f64(), n in 0u64..2_000) {
        let up = step(x, Direction::Up, n);
        prop_assume!(up.is_finite());
        prop_assert_eq!(ulp_distance(x, up), n as i64);
        let down = step(x, Direction::Down, n);
        prop_assume!(down.is_finite());
        prop_assert_eq!(ulp_distance(x, down), -(n as i64));
    }

    #[test]
    fn nan_never_matches_ulps(x in any::<f64>(), ulps in any::<u64>()) {
        prop_assert!(!within_ulps(x, ulps).matches(f64::NAN));
        prop_assert!(!within_ulps(f64::NAN, ulps).matches(x));
        let single = ulps.min(u64::from(u32::MAX));
        prop_assert!(!within_ulps_f32(x as f32, single).unwrap().matches(f64::NAN));
    }

    #[test]
    fn policies_are_symmetric(t in finite_f64(), c in finite_f64(), m in 0.0f64..1e6, e in 0.0f64..1.0, n in 0u64..64) {
        prop_assert_eq!(within_abs(t, m).unwrap().matches(c), within_abs(c, m).unwrap().matches(t));
        prop_assert_eq!(within_rel(t, e).unwrap().matches(c), within_rel(c, e).unwrap().matches(t));
        prop_assert_eq!(within_ulps(t, n).matches(c), within_ulps(c, n).matches(t));
    }

    #[test]
    fn ulp_tolerance_is_monotone(t in finite_f64(), c in finite_f64(), n in 0u64..1_000_000) {
        if within_ulps(t, n).matches(c) {
            prop_assert!(within_ulps(t, n + 1).matches(c));
        }
    }

    #[test]
    fn ulp_bounds_are_accepted(t in finite_f64(), n in 0u64..256) {
        let policy = within_ulps(t, n);
        let (lo, hi) = policy.bounds();
        prop_assume!(lo.is_finite() && hi.is_finite());
        prop_assert!(policy.matches(lo));
        prop_assert!(policy.matches(hi));
        prop_assert!(!policy.matches(lo.next_down()) || lo.next_down().is_infinite());
        prop_assert!(!policy.matches(hi.next_up()) || hi.next_up().is_infinite());
    }

    #[test]
    fn zero_margin_is_numeric_equality(t in finite_f64(), c in finite_f64()) {
        prop_assert_eq!(within_abs(t, 0.0).unwrap().matches(c), t == c);
        prop_assert_eq!(within_rel(t, 0.0).unwrap().matches(c), t == c);
    }
}

//! ULP distance between floats of the same width.
//!
//! Conventions
//! - `ulp_distance(a, b) == 1` when `b` is the next representable value above
//!   `a`, and `-1` the other way round.
//! - `-0.0` and `+0.0` are 0 apart, so `a == b` always implies distance 0 and
//!   `ulp_distance(-x, x) == 2 * ulp_distance(0, x)`.
//! - Subnormals count as ordinary steps.
//! - NaN or infinite inputs give `INFINITE_DISTANCE`.

use std::fmt::{Debug, LowerExp};
use std::ops::Neg;

use crate::bits::BitView;
use crate::cfg::{F32_MAX_DIGITS10, F64_MAX_DIGITS10};

/// Largest distance `ulp_distance` reports; "too far for any tolerance".
pub const INFINITE_DISTANCE: i64 = i64::MAX;

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// IEEE-754 binary floats supported by the ULP machinery (`f32`, `f64`).
pub trait UlpFloat:
    BitView + PartialOrd + Neg<Output = Self> + Debug + LowerExp + sealed::Sealed
{
    const ZERO: Self;
    /// Smallest positive subnormal.
    const DENORM_MIN: Self;
    /// Significant digits needed to round-trip through decimal text.
    const MAX_DIGITS10: usize;
    /// Suffix marking the width in rendered literals.
    const LITERAL_SUFFIX: &'static str;

    fn is_nan(self) -> bool;
    fn is_finite(self) -> bool;
    fn next_up(self) -> Self;
    fn next_down(self) -> Self;

    /// Bit view widened to `i64`.
    #[inline]
    fn ordinal(self) -> i64 {
        self.bit_view().into()
    }
}

impl UlpFloat for f32 {
    const ZERO: f32 = 0.0;
    const DENORM_MIN: f32 = f32::from_bits(1);
    const MAX_DIGITS10: usize = F32_MAX_DIGITS10;
    const LITERAL_SUFFIX: &'static str = "f";

    #[inline]
    fn is_nan(self) -> bool {
        f32::is_nan(self)
    }
    #[inline]
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }
    #[inline]
    fn next_up(self) -> f32 {
        f32::next_up(self)
    }
    #[inline]
    fn next_down(self) -> f32 {
        f32::next_down(self)
    }
}

impl UlpFloat for f64 {
    const ZERO: f64 = 0.0;
    const DENORM_MIN: f64 = f64::from_bits(1);
    const MAX_DIGITS10: usize = F64_MAX_DIGITS10;
    const LITERAL_SUFFIX: &'static str = "";

    #[inline]
    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }
    #[inline]
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
    #[inline]
    fn next_up(self) -> f64 {
        f64::next_up(self)
    }
    #[inline]
    fn next_down(self) -> f64 {
        f64::next_down(self)
    }
}

/// Signed number of representable values from `a` to `b`.
///
/// Antisymmetric: `ulp_distance(a, b) == -ulp_distance(b, a)`. Spans wider
/// than `i64::MAX` (only possible for `f64` across zero) saturate to
/// `INFINITE_DISTANCE`. Recursion depth is bounded by the case analysis, not
/// by the magnitude of the inputs.
pub fn ulp_distance<F: UlpFloat>(a: F, b: F) -> i64 {
    if a.is_nan() || b.is_nan() || !a.is_finite() || !b.is_finite() {
        return INFINITE_DISTANCE;
    }
    if a > b {
        return -ulp_distance(b, a);
    }
    // Also covers -0.0 == +0.0.
    if a == b {
        return 0;
    }
    if a == F::ZERO {
        return 1i64.saturating_add(steps_from_zero_adjacent(b));
    }
    if b == F::ZERO {
        return 1i64.saturating_add(steps_from_zero_adjacent(a));
    }
    if (a < F::ZERO) != (b < F::ZERO) {
        return 2i64
            .saturating_add(steps_from_zero_adjacent(b))
            .saturating_add(steps_from_zero_adjacent(a));
    }
    if a < F::ZERO {
        return ulp_distance(-b, -a);
    }
    // 0 < a < b: positive bit patterns are ordered by magnitude.
    b.ordinal() - a.ordinal()
}

/// Steps between nonzero finite `x` and the subnormal minimum of its sign.
#[inline]
fn steps_from_zero_adjacent<F: UlpFloat>(x: F) -> i64 {
    let eps = if x < F::ZERO {
        -F::DENORM_MIN
    } else {
        F::DENORM_MIN
    };
    ulp_distance(eps, x).abs()
}

/// ULP equality with at most `max_ulps` steps between `lhs` and `rhs`.
///
/// NaN never matches. Infinities only match an identical infinity.
pub fn almost_equal_ulps<F: UlpFloat>(lhs: F, rhs: F, max_ulps: u64) -> bool {
    if lhs.is_nan() || rhs.is_nan() {
        return false;
    }
    if !lhs.is_finite() || !rhs.is_finite() {
        return lhs == rhs;
    }
    ulp_distance(lhs, rhs).unsigned_abs() <= max_ulps
}

#[cfg(test)]
mod tests {
    use super::*;

    const TINY: f64 = f64::from_bits(1);

    #[test]
    fn neighbours_are_one_apart() {
        assert_eq!(ulp_distance(1.0, 1.0f64.next_up()), 1);
        assert_eq!(ulp_distance(1.0f64.next_up(), 1.0), -1);
        assert_eq!(ulp_distance(1.0f32, 1.0f32.next_up()), 1);
        assert_eq!(ulp_distance(-1.0, (-1.0f64).next_down()), -1);
        // Largest subnormal to smallest normal.
        assert_eq!(ulp_distance(f64::MIN_POSITIVE.next_down(), f64::MIN_POSITIVE), 1);
    }

    #[test]
    fn signed_zeros_are_equal() {
        assert_eq!(ulp_distance(-0.0, 0.0), 0);
        assert_eq!(ulp_distance(0.0, -0.0), 0);
        assert_eq!(ulp_distance(-0.0f32, 0.0f32), 0);
    }

    #[test]
    fn bridging_through_zero() {
        assert_eq!(ulp_distance(0.0, TINY), 1);
        assert_eq!(ulp_distance(-0.0, TINY), 1);
        assert_eq!(ulp_distance(0.0, f64::from_bits(2)), 2);
        assert_eq!(ulp_distance(-TINY, 0.0), 1);
        assert_eq!(ulp_distance(-TINY, TINY), 2);
        assert_eq!(ulp_distance(TINY, -TINY), -2);
    }

    #[test]
    fn crossing_sign_doubles_distance_from_zero() {
        for x in [TINY, 1e-310, 0.5, 1.0, 3.25e100, f64::MAX] {
            let expected = ulp_distance(0.0, x)
                .checked_mul(2)
                .unwrap_or(INFINITE_DISTANCE);
            assert_eq!(ulp_distance(-x, x), expected, "x = {x:e}");
        }
        // Spans past i64::MAX saturate.
        assert_eq!(ulp_distance(-3.25e100, 3.25e100), INFINITE_DISTANCE);
        assert_eq!(ulp_distance(0.0, 1.0), 0x3FF0_0000_0000_0000);
        assert_eq!(ulp_distance(-1.0f32, 1.0f32), 2 * 0x3F80_0000);
    }

    #[test]
    fn negatives_mirror_positives() {
        assert_eq!(ulp_distance(-2.0, -1.0), ulp_distance(1.0, 2.0));
        assert_eq!(ulp_distance(-1.0, -2.0), -ulp_distance(1.0, 2.0));
    }

    #[test]
    fn full_double_span_saturates() {
        assert_eq!(ulp_distance(-f64::MAX, f64::MAX), INFINITE_DISTANCE);
        assert_eq!(ulp_distance(f64::MAX, -f64::MAX), -INFINITE_DISTANCE);
        // Single precision fits comfortably.
        assert_eq!(
            ulp_distance(-f32::MAX, f32::MAX),
            2 * i64::from(f32::MAX.to_bits())
        );
    }

    #[test]
    fn non_finite_inputs_are_infinitely_far() {
        assert_eq!(ulp_distance(f64::NAN, 1.0), INFINITE_DISTANCE);
        assert_eq!(ulp_distance(1.0, f64::NAN), INFINITE_DISTANCE);
        assert_eq!(ulp_distance(f64::INFINITY, f64::INFINITY), INFINITE_DISTANCE);
        assert_eq!(ulp_distance(f32::NEG_INFINITY, 0.0), INFINITE_DISTANCE);
    }

    #[test]
    fn almost_equal_counts_magnitudes() {
        let up2 = 1.0f64.next_up().next_up();
        assert!(almost_equal_ulps(1.0, up2, 2));
        assert!(almost_equal_ulps(up2, 1.0, 2));
        assert!(!almost_equal_ulps(1.0, up2, 1));
        assert!(almost_equal_ulps(-0.0, 0.0, 0));
        assert!(almost_equal_ulps(-TINY, TINY, 2));
        assert!(!almost_equal_ulps(-TINY, TINY, 1));
    }

    #[test]
    fn almost_equal_special_values() {
        assert!(!almost_equal_ulps(f64::NAN, f64::NAN, u64::MAX));
        assert!(!almost_equal_ulps(1.0f32, f32::NAN, u64::MAX));
        assert!(almost_equal_ulps(f64::INFINITY, f64::INFINITY, 0));
        assert!(!almost_equal_ulps(f64::INFINITY, f64::NEG_INFINITY, u64::MAX));
        assert!(!almost_equal_ulps(f64::MAX, f64::INFINITY, u64::MAX));
        // Saturated span still fits under the widest tolerance.
        assert!(almost_equal_ulps(-f64::MAX, f64::MAX, u64::MAX));
    }
}

//! Absolute margin test.

/// `|lhs - rhs| <= margin` without the subtraction.
///
/// Adding the margin to each side keeps the test meaningful when either value
/// is infinite (`inf - inf` would be NaN). A NaN anywhere makes it false.
#[inline]
pub fn margin_comparison(lhs: f64, rhs: f64, margin: f64) -> bool {
    lhs + margin >= rhs && rhs + margin >= lhs
}

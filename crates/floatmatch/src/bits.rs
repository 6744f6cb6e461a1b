//! Same-width signed integer view of IEEE-754 floats.
//!
//! The view is a bit-for-bit reinterpretation, not a numeric conversion. For
//! non-negative floats the resulting integers increase with magnitude, which
//! is what makes ULP distances a plain subtraction (see `ulp`).

use std::mem::size_of;

// The ULP arithmetic relies on these widths; a mismatch means the platform is
// unsupported.
const _: () = assert!(size_of::<f32>() == size_of::<i32>());
const _: () = assert!(size_of::<f64>() == size_of::<i64>());

/// Floats with a same-width signed integer representation.
pub trait BitView: Copy {
    /// Signed integer of the same width as `Self`.
    type Int: Copy + Into<i64>;

    /// Reinterpret the bits of `self` as a signed integer.
    fn bit_view(self) -> Self::Int;
}

impl BitView for f32 {
    type Int = i32;
    #[inline]
    fn bit_view(self) -> i32 {
        i32::from_ne_bytes(self.to_ne_bytes())
    }
}

impl BitView for f64 {
    type Int = i64;
    #[inline]
    fn bit_view(self) -> i64 {
        i64::from_ne_bytes(self.to_ne_bytes())
    }
}

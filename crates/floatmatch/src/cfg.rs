//! Fixed numeric defaults (internal).
//!
//! Policy
//! - Defaults are compile-time constants. Callers who need other tolerances
//!   pass them explicitly to the policy constructors.

/// Default relative epsilon is this many machine epsilons of the target width.
pub const DEFAULT_REL_EPSILON_FACTOR: u8 = 100;

/// Significant decimal digits needed to round-trip an `f32` (`max_digits10`).
pub(crate) const F32_MAX_DIGITS10: usize = 9;
/// Significant decimal digits needed to round-trip an `f64` (`max_digits10`).
pub(crate) const F64_MAX_DIGITS10: usize = 17;
/// Significant digits of `%g`-style text (C++ stream default precision).
pub(crate) const GENERAL_DIGITS: usize = 6;

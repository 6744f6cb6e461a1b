//! Approximate floating-point equality.
//!
//! Three comparison policies decide whether a candidate value should count as
//! equal to a target, and explain each decision in a fixed wording:
//! - `AbsoluteMargin`: `|candidate - target| <= margin`, computed without the
//!   subtraction so infinities compare sanely.
//! - `RelativeMargin`: margin derived per call from the larger magnitude.
//! - `UlpTolerance`: at most N representable values apart, in single or double
//!   precision.
//!
//! Layout
//! - `bits`: same-width integer view of a float.
//! - `ulp`: signed ULP distance and the ULP equality test.
//! - `step`: exact stepping through representable values (used for bounds).
//! - `margin`: overflow-safe margin comparison.
//! - `policy`: validated policies, `matches` and `describe`.
//!
//! Everything here is a pure function of its inputs. Policies are `Copy` and
//! can be shared across threads freely.

pub mod bits;
pub mod cfg;
pub mod error;
pub mod margin;
pub mod policy;
pub mod step;
pub mod ulp;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::PolicyError;
pub use policy::{
    within_abs, within_rel, within_rel_default, within_rel_f32, within_rel_f32_default,
    within_ulps, within_ulps_f32, AbsoluteMargin, ComparisonPolicy, FloatWidth, RelativeMargin,
    UlpTolerance,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::margin::margin_comparison;
    pub use crate::policy::{
        within_abs, within_rel, within_rel_default, within_rel_f32, within_rel_f32_default,
        within_ulps, within_ulps_f32, AbsoluteMargin, ComparisonPolicy, FloatWidth,
        RelativeMargin, UlpTolerance,
    };
    pub use crate::step::{step, Direction};
    pub use crate::ulp::{almost_equal_ulps, ulp_distance, UlpFloat, INFINITE_DISTANCE};
    pub use crate::PolicyError;
}

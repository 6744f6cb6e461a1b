//! Comparison policies (validated, immutable).
//!
//! Purpose
//! - Bundle a target with a tolerance, reject invalid tolerances up front,
//!   and answer `matches(candidate)` and `describe()` for the bundle.
//!
//! Kinds
//! - `AbsoluteMargin`: `candidate + margin >= target && target + margin >= candidate`.
//! - `RelativeMargin`: margin `epsilon * max(|candidate|, |target|)`, clamped to
//!   0 when that product overflows to infinity. Two huge values therefore only
//!   match when exactly equal.
//! - `UlpTolerance`: `|ulp_distance(candidate, target)| <= ulps`, evaluated in
//!   the policy's `FloatWidth`.
//!
//! `ComparisonPolicy` is the tagged union over the three kinds; dispatch is an
//! exhaustive `match`.

mod describe;

use crate::cfg::DEFAULT_REL_EPSILON_FACTOR;
use crate::error::PolicyError;
use crate::margin::margin_comparison;
use crate::step::{step, Direction};
use crate::ulp::almost_equal_ulps;

/// IEEE-754 layout a ULP tolerance is measured in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FloatWidth {
    /// binary32 (`f32`).
    Single,
    /// binary64 (`f64`).
    Double,
}

/// `|candidate - target| <= margin`, safe for infinite operands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AbsoluteMargin {
    target: f64,
    margin: f64,
}

impl AbsoluteMargin {
    pub fn new(target: f64, margin: f64) -> Result<Self, PolicyError> {
        if margin.is_nan() || margin < 0.0 {
            tracing::debug!(policy_target = target, margin, "rejecting absolute margin");
            return Err(PolicyError::InvalidMargin { margin });
        }
        Ok(Self { target, margin })
    }

    #[inline]
    pub fn target(&self) -> f64 {
        self.target
    }
    #[inline]
    pub fn margin(&self) -> f64 {
        self.margin
    }

    #[inline]
    pub fn matches(&self, candidate: f64) -> bool {
        margin_comparison(candidate, self.target, self.margin)
    }
}

/// Margin proportional to the larger of the two magnitudes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RelativeMargin {
    target: f64,
    epsilon: f64,
}

impl RelativeMargin {
    pub fn new(target: f64, epsilon: f64) -> Result<Self, PolicyError> {
        if epsilon.is_nan() || epsilon < 0.0 {
            tracing::debug!(policy_target = target, epsilon, "rejecting relative epsilon");
            return Err(PolicyError::EpsilonBelowZero { epsilon });
        }
        if epsilon >= 1.0 {
            tracing::debug!(policy_target = target, epsilon, "rejecting relative epsilon");
            return Err(PolicyError::EpsilonNotBelowOne { epsilon });
        }
        Ok(Self { target, epsilon })
    }

    /// Relative policy with `100 * f64::EPSILON`.
    pub fn with_default_epsilon(target: f64) -> Self {
        Self {
            target,
            epsilon: f64::EPSILON * f64::from(DEFAULT_REL_EPSILON_FACTOR),
        }
    }

    #[inline]
    pub fn target(&self) -> f64 {
        self.target
    }
    #[inline]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Absolute margin used for `candidate`.
    ///
    /// An overflowing product is clamped to 0, which degrades the test to
    /// exact equality rather than accepting everything. `0 * inf` is NaN and
    /// stays NaN, so a zero epsilon never matches an infinite operand.
    #[inline]
    pub fn effective_margin(&self, candidate: f64) -> f64 {
        let margin = self.epsilon * candidate.abs().max(self.target.abs());
        if margin.is_infinite() {
            0.0
        } else {
            margin
        }
    }

    #[inline]
    pub fn matches(&self, candidate: f64) -> bool {
        margin_comparison(candidate, self.target, self.effective_margin(candidate))
    }
}

/// At most `ulps` representable values between candidate and target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UlpTolerance {
    target: f64,
    ulps: u64,
    width: FloatWidth,
}

impl UlpTolerance {
    pub fn new(target: f64, ulps: u64, width: FloatWidth) -> Result<Self, PolicyError> {
        if width == FloatWidth::Single && ulps > u64::from(u32::MAX) {
            tracing::debug!(policy_target = target, ulps, "rejecting single-precision ULP count");
            return Err(PolicyError::UlpsTooLargeForSingle { ulps });
        }
        Ok(Self {
            target,
            ulps,
            width,
        })
    }

    /// Double-precision tolerance; every `u64` count is valid.
    pub fn double(target: f64, ulps: u64) -> Self {
        Self {
            target,
            ulps,
            width: FloatWidth::Double,
        }
    }

    /// Single-precision tolerance.
    pub fn single(target: f32, ulps: u64) -> Result<Self, PolicyError> {
        Self::new(f64::from(target), ulps, FloatWidth::Single)
    }

    #[inline]
    pub fn target(&self) -> f64 {
        self.target
    }
    #[inline]
    pub fn ulps(&self) -> u64 {
        self.ulps
    }
    #[inline]
    pub fn width(&self) -> FloatWidth {
        self.width
    }

    /// At `Single` width both sides are narrowed to `f32` before comparing.
    pub fn matches(&self, candidate: f64) -> bool {
        match self.width {
            FloatWidth::Single => {
                almost_equal_ulps(candidate as f32, self.target as f32, self.ulps)
            }
            FloatWidth::Double => almost_equal_ulps(candidate, self.target, self.ulps),
        }
    }

    /// Inclusive `[lower, upper]` interval the tolerance accepts, widened to
    /// `f64` for `Single`.
    ///
    /// Costs one `next_up`/`next_down` per ULP on each side, so time grows
    /// linearly with `ulps`. The walk stops early only at an infinity.
    pub fn bounds(&self) -> (f64, f64) {
        match self.width {
            FloatWidth::Single => {
                let t = self.target as f32;
                (
                    f64::from(step(t, Direction::Down, self.ulps)),
                    f64::from(step(t, Direction::Up, self.ulps)),
                )
            }
            FloatWidth::Double => (
                step(self.target, Direction::Down, self.ulps),
                step(self.target, Direction::Up, self.ulps),
            ),
        }
    }
}

/// One of the three comparison kinds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ComparisonPolicy {
    AbsoluteMargin(AbsoluteMargin),
    RelativeMargin(RelativeMargin),
    UlpTolerance(UlpTolerance),
}

impl ComparisonPolicy {
    #[inline]
    pub fn target(&self) -> f64 {
        match self {
            Self::AbsoluteMargin(p) => p.target(),
            Self::RelativeMargin(p) => p.target(),
            Self::UlpTolerance(p) => p.target(),
        }
    }

    pub fn matches(&self, candidate: f64) -> bool {
        match self {
            Self::AbsoluteMargin(p) => p.matches(candidate),
            Self::RelativeMargin(p) => p.matches(candidate),
            Self::UlpTolerance(p) => p.matches(candidate),
        }
    }

    /// Fixed-wording explanation of what the policy accepts.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl From<AbsoluteMargin> for ComparisonPolicy {
    fn from(p: AbsoluteMargin) -> Self {
        Self::AbsoluteMargin(p)
    }
}
impl From<RelativeMargin> for ComparisonPolicy {
    fn from(p: RelativeMargin) -> Self {
        Self::RelativeMargin(p)
    }
}
impl From<UlpTolerance> for ComparisonPolicy {
    fn from(p: UlpTolerance) -> Self {
        Self::UlpTolerance(p)
    }
}

pub fn within_abs(target: f64, margin: f64) -> Result<AbsoluteMargin, PolicyError> {
    AbsoluteMargin::new(target, margin)
}

pub fn within_rel(target: f64, epsilon: f64) -> Result<RelativeMargin, PolicyError> {
    RelativeMargin::new(target, epsilon)
}

/// `within_rel` with `100 * f64::EPSILON`.
pub fn within_rel_default(target: f64) -> RelativeMargin {
    RelativeMargin::with_default_epsilon(target)
}

/// Relative policy from single-precision inputs (widened losslessly).
pub fn within_rel_f32(target: f32, epsilon: f32) -> Result<RelativeMargin, PolicyError> {
    RelativeMargin::new(f64::from(target), f64::from(epsilon))
}

/// `within_rel_f32` with `100 * f32::EPSILON`.
pub fn within_rel_f32_default(target: f32) -> RelativeMargin {
    RelativeMargin {
        target: f64::from(target),
        epsilon: f64::from(f32::EPSILON * f32::from(DEFAULT_REL_EPSILON_FACTOR)),
    }
}

pub fn within_ulps(target: f64, ulps: u64) -> UlpTolerance {
    UlpTolerance::double(target, ulps)
}

pub fn within_ulps_f32(target: f32, ulps: u64) -> Result<UlpTolerance, PolicyError> {
    UlpTolerance::single(target, ulps)
}

//! Fixed-wording descriptions.
//!
//! Wording is consumed verbatim by reporters:
//! - absolute: `is within <margin> of <target>`
//! - relative: `and <target> are within <epsilon * 100>% of each other`
//! - ULP: `is within <ulps> ULPs of <target> ([<lower>, <upper>])`
//!
//! Absolute margins and targets use the shortest round-trip decimal form
//! (`10.0`, `0.05`, `1e300`). Relative targets and percentages use `%g` style
//! with six significant digits (`100`, `7`, `2.22045e-14`). ULP values use
//! scientific notation with enough digits to round-trip in their width and a
//! C-style exponent (`e+00`).

use std::fmt;

use super::{AbsoluteMargin, ComparisonPolicy, FloatWidth, RelativeMargin, UlpTolerance};
use crate::cfg::GENERAL_DIGITS;
use crate::step::{step, Direction};
use crate::ulp::UlpFloat;

/// Shortest decimal text that parses back to `x`, always with a fraction or
/// exponent.
pub(crate) fn decimal(x: f64) -> String {
    format!("{x:?}")
}

/// `%g` text: `GENERAL_DIGITS` significant digits, trailing zeros dropped,
/// scientific only for exponents below -4 or at least `GENERAL_DIGITS`.
pub(crate) fn general(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if x == 0.0 {
        return if x.is_sign_negative() { "-0" } else { "0" }.to_string();
    }
    let digits = GENERAL_DIGITS as i32;
    let sci = format!("{:.*e}", GENERAL_DIGITS - 1, x);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(e) = exp.parse::<i32>() else {
        return sci;
    };
    if e < -4 || e >= digits {
        let sign = if e < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), e.unsigned_abs())
    } else {
        let fixed = format!("{:.*}", (digits - 1 - e) as usize, x);
        trim_fraction(&fixed).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Scientific text with `MAX_DIGITS10 - 1` fractional digits.
pub(crate) fn scientific<F: UlpFloat>(x: F) -> String {
    let raw = format!("{:.*e}", F::MAX_DIGITS10 - 1, x);
    // inf and NaN carry no exponent.
    let Some((mantissa, exp)) = raw.split_once('e') else {
        return raw;
    };
    match exp.parse::<i32>() {
        Ok(e) => {
            let sign = if e < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", e.unsigned_abs())
        }
        Err(_) => raw,
    }
}

fn write_ulps<F: UlpFloat>(f: &mut fmt::Formatter<'_>, ulps: u64, target: F) -> fmt::Result {
    write!(
        f,
        "is within {ulps} ULPs of {}{} ([{}, {}])",
        scientific(target),
        F::LITERAL_SUFFIX,
        scientific(step(target, Direction::Down, ulps)),
        scientific(step(target, Direction::Up, ulps)),
    )
}

impl fmt::Display for AbsoluteMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "is within {} of {}",
            decimal(self.margin),
            decimal(self.target)
        )
    }
}

impl fmt::Display for RelativeMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "and {} are within {}% of each other",
            general(self.target),
            general(self.epsilon * 100.0)
        )
    }
}

impl fmt::Display for UlpTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.width {
            FloatWidth::Single => write_ulps(f, self.ulps, self.target as f32),
            FloatWidth::Double => write_ulps(f, self.ulps, self.target),
        }
    }
}

impl fmt::Display for ComparisonPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AbsoluteMargin(p) => fmt::Display::fmt(p, f),
            Self::RelativeMargin(p) => fmt::Display::fmt(p, f),
            Self::UlpTolerance(p) => fmt::Display::fmt(p, f),
        }
    }
}

impl AbsoluteMargin {
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl RelativeMargin {
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl UlpTolerance {
    /// Renders the bounds as well, so it costs the same linear-in-`ulps` walk
    /// as [`UlpTolerance::bounds`].
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

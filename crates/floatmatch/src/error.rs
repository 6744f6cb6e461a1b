use thiserror::Error;

/// Rejected policy parameters.
///
/// These are authoring mistakes in the calling test, so constructors report
/// them immediately instead of building a clamped policy.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum PolicyError {
    #[error("invalid margin: {margin}. Margin has to be non-negative")]
    InvalidMargin { margin: f64 },
    #[error("relative comparison with epsilon < 0 does not make sense (epsilon = {epsilon})")]
    EpsilonBelowZero { epsilon: f64 },
    #[error("relative comparison with epsilon >= 1 does not make sense (epsilon = {epsilon})")]
    EpsilonNotBelowOne { epsilon: f64 },
    #[error("provided ULP count {ulps} is impossibly large for a single-precision comparison")]
    UlpsTooLargeForSingle { ulps: u64 },
}

//! Command-line policy parameters.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use floatmatch::{
    within_abs, within_rel, within_rel_default, within_rel_f32, within_rel_f32_default,
    ComparisonPolicy, FloatWidth, UlpTolerance,
};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    /// Absolute margin
    Abs,
    /// Relative margin
    Rel,
    /// ULP tolerance
    Ulp,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WidthArg {
    Single,
    #[default]
    Double,
}

impl From<WidthArg> for FloatWidth {
    fn from(w: WidthArg) -> Self {
        match w {
            WidthArg::Single => FloatWidth::Single,
            WidthArg::Double => FloatWidth::Double,
        }
    }
}

#[derive(Args, Clone, Debug, Serialize)]
pub struct PolicyArgs {
    #[arg(long, value_enum)]
    pub kind: PolicyKind,
    #[arg(long, allow_negative_numbers = true)]
    pub target: f64,
    /// Absolute margin (abs)
    #[arg(long, allow_negative_numbers = true)]
    pub margin: Option<f64>,
    /// Relative epsilon in [0, 1) (rel); defaults to 100 machine epsilons
    #[arg(long, allow_negative_numbers = true)]
    pub epsilon: Option<f64>,
    /// Maximum ULP distance (ulp)
    #[arg(long)]
    pub ulps: Option<u64>,
    #[arg(long, value_enum, default_value_t = WidthArg::Double)]
    pub width: WidthArg,
}

impl PolicyArgs {
    pub fn build(&self) -> Result<ComparisonPolicy> {
        let policy: ComparisonPolicy = match self.kind {
            PolicyKind::Abs => {
                let margin = self.margin.context("--margin is required for --kind abs")?;
                within_abs(self.target, margin)?.into()
            }
            PolicyKind::Rel => match (self.epsilon, self.width) {
                (Some(epsilon), WidthArg::Double) => within_rel(self.target, epsilon)?.into(),
                (Some(epsilon), WidthArg::Single) => {
                    within_rel_f32(self.target as f32, epsilon as f32)?.into()
                }
                (None, WidthArg::Double) => within_rel_default(self.target).into(),
                (None, WidthArg::Single) => within_rel_f32_default(self.target as f32).into(),
            },
            PolicyKind::Ulp => {
                let ulps = self.ulps.context("--ulps is required for --kind ulp")?;
                UlpTolerance::new(self.target, ulps, self.width.into())?.into()
            }
        };
        Ok(policy)
    }
}

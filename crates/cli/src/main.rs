use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use floatmatch::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod args;
mod provenance;

use args::{PolicyArgs, WidthArg};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Approximate floating-point comparisons")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Evaluate candidates against a policy; exits non-zero on any mismatch
    Check {
        #[command(flatten)]
        policy: PolicyArgs,
        /// Also write the JSON report (plus provenance sidecar) here
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(required = true, allow_negative_numbers = true)]
        candidates: Vec<f64>,
    },
    /// Signed ULP distance from A to B
    Distance {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
        #[arg(long, value_enum, default_value_t = WidthArg::Double)]
        width: WidthArg,
    },
    /// Interval accepted by a ULP tolerance
    Bounds {
        #[arg(allow_negative_numbers = true)]
        target: f64,
        #[arg(long)]
        ulps: u64,
        #[arg(long, value_enum, default_value_t = WidthArg::Double)]
        width: WidthArg,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Debug, Serialize)]
struct CandidateResult {
    candidate: f64,
    matched: bool,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    policy: PolicyArgs,
    description: String,
    results: Vec<CandidateResult>,
    all_matched: bool,
}

#[derive(Debug, Serialize)]
struct DistanceReport {
    a: f64,
    b: f64,
    width: WidthArg,
    distance: i64,
}

#[derive(Debug, Serialize)]
struct BoundsReport {
    target: f64,
    ulps: u64,
    width: WidthArg,
    lower: f64,
    upper: f64,
    description: String,
}

fn main() -> Result<()> {
    // stdout carries JSON; logs go to stderr.
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Check {
            policy,
            out,
            candidates,
        } => check(policy, out, candidates),
        Action::Distance { a, b, width } => print_json(&distance(a, b, width)),
        Action::Bounds {
            target,
            ulps,
            width,
        } => print_json(&bounds(target, ulps, width)?),
        Action::Report => report(),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn check(policy: PolicyArgs, out: Option<PathBuf>, candidates: Vec<f64>) -> Result<()> {
    tracing::info!(kind = ?policy.kind, policy_target = policy.target, n = candidates.len(), "check");
    let report = check_report(policy, &candidates)?;
    print_json(&report)?;
    if let Some(out) = out {
        write_report(&out, &report)?;
    }
    let failed = report.results.iter().filter(|r| !r.matched).count();
    if failed > 0 {
        bail!(
            "{failed} of {} candidates did not satisfy: {}",
            report.results.len(),
            report.description
        );
    }
    Ok(())
}

fn check_report(policy: PolicyArgs, candidates: &[f64]) -> Result<CheckReport> {
    let built = policy.build()?;
    let results: Vec<CandidateResult> = candidates
        .iter()
        .map(|&candidate| {
            let matched = built.matches(candidate);
            if !matched {
                tracing::debug!(candidate, "no match");
            }
            CandidateResult { candidate, matched }
        })
        .collect();
    Ok(CheckReport {
        description: built.describe(),
        all_matched: results.iter().all(|r| r.matched),
        results,
        policy,
    })
}

fn write_report(out: &Path, report: &CheckReport) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating report dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(report)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let sidecar = provenance::write_sidecar(out, serde_json::to_value(&report.policy)?)?;
    tracing::info!(report = %out.display(), provenance = %sidecar.display(), "wrote report");
    Ok(())
}

fn distance(a: f64, b: f64, width: WidthArg) -> DistanceReport {
    tracing::info!(a, b, width = ?width, "distance");
    let distance = match width {
        WidthArg::Single => ulp_distance(a as f32, b as f32),
        WidthArg::Double => ulp_distance(a, b),
    };
    DistanceReport {
        a,
        b,
        width,
        distance,
    }
}

fn bounds(target: f64, ulps: u64, width: WidthArg) -> Result<BoundsReport> {
    tracing::info!(policy_target = target, ulps, width = ?width, "bounds");
    let policy = UlpTolerance::new(target, ulps, width.into())?;
    let (lower, upper) = policy.bounds();
    Ok(BoundsReport {
        target,
        ulps,
        width,
        lower,
        upper,
        description: policy.describe(),
    })
}

fn report() -> Result<()> {
    print_json(&provenance::Provenance::new(serde_json::json!({})))
}

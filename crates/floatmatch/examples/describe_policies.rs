//! Print verdicts and descriptions for a few policies.
//! Run: cargo run -p floatmatch --example describe_policies

use floatmatch::prelude::*;

fn main() -> Result<(), PolicyError> {
    let policies: Vec<ComparisonPolicy> = vec![
        within_abs(10.0, 0.05)?.into(),
        within_rel(100.0, 0.1)?.into(),
        within_rel_default(0.1 + 0.2).into(),
        within_ulps(1.0, 2).into(),
        within_ulps_f32(0.1, 4)?.into(),
    ];
    let candidates = [10.04, 105.0, 0.3, 1.0f64.next_up(), 0.1];
    for (policy, candidate) in policies.iter().zip(candidates) {
        let verdict = if policy.matches(candidate) { "ok  " } else { "FAIL" };
        println!("{verdict} {candidate:?} {policy}");
    }
    Ok(())
}

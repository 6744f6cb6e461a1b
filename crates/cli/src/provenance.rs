use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Serialize)]
pub struct Callsite {
    pub file: &'static str,
    pub line: u32,
}

/// Provenance block attached to every written report.
#[derive(Debug, Serialize)]
pub struct Provenance {
    pub code_rev: String,
    pub floatmatch_version: &'static str,
    pub callsite: Option<Callsite>,
    pub params: Value,
    pub outputs: Vec<String>,
}

impl Provenance {
    pub fn new(params: Value) -> Self {
        Self {
            code_rev: current_git_rev(),
            floatmatch_version: floatmatch::VERSION,
            callsite: None,
            params,
            outputs: Vec::new(),
        }
    }
}

/// Write `<report-stem>.provenance.json` next to `report`.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(report: P, params: Value) -> Result<PathBuf> {
    let report = report.as_ref();
    let path = sidecar_path(report);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }
    let caller = Location::caller();
    let mut doc = Provenance::new(params);
    doc.callsite = Some(Callsite {
        file: caller.file(),
        line: caller.line(),
    });
    doc.outputs.push(report.to_string_lossy().into_owned());
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn sidecar_path(report: &Path) -> PathBuf {
    let mut name = report
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("report"));
    name.push(".provenance.json");
    report.with_file_name(name)
}

/// Commit from `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    if let Some(rev) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return rev.to_string();
    }
    if let Ok(rev) = std::env::var("GIT_COMMIT") {
        if !rev.is_empty() {
            return rev;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

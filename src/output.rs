//! Output rendering for `check` results.
//!
//! Supports `human` (default) text and a `json` Code Climate issue list for CI
//! review tooling. Rendering is pure; the `print_*` helpers only write to
//! stdout/stderr.

use crate::aggregate::{matching_occurrences, total_count};
use crate::error::{BaselineError, Result};
use crate::models::{ErrorSummaryMap, IdentityMode, SpecificErrorsMap};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::Path;

/// `check_name` carried by every structured report entry.
pub const CHECK_NAME: &str = "tsc-baseline/new-error";

/// Severity carried by every structured report entry.
pub const SEVERITY: &str = "major";

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

pub fn error_prefix() -> String {
    if use_colors("human") {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

pub fn hint_prefix() -> String {
    if use_colors("human") {
        "hint:".cyan().bold().to_string()
    } else {
        "hint:".to_string()
    }
}

#[derive(Debug, Clone, Serialize)]
/// One Code Climate issue.
pub struct ReportEntry {
    pub description: String,
    pub check_name: String,
    pub fingerprint: String,
    pub severity: String,
    pub location: ReportLocation,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportLocation {
    pub path: String,
    pub lines: ReportLines,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportLines {
    pub begin: u32,
}

/// Human-readable listing of new errors, one blank-line separated block per
/// identity, each followed by the concrete occurrences of that identity.
pub fn render_human(
    delta: &ErrorSummaryMap,
    by_file: &SpecificErrorsMap,
    mode: IdentityMode,
    color: bool,
) -> String {
    let label = |s: &str| {
        if color {
            s.bold().to_string()
        } else {
            s.to_string()
        }
    };
    let blocks: Vec<String> = delta
        .iter()
        .map(|(hash, s)| {
            let mut out = format!("{} {}\n", label("File:"), s.file);
            if let Some(msg) = &s.message {
                out.push_str(&format!("{} {}\n", label("Message:"), msg));
            }
            out.push_str(&format!("{} {}\n", label("Code:"), s.code));
            out.push_str(&format!("{} {}\n", label("Hash:"), hash));
            out.push_str(&format!("{} {}\n", label("Count of new errors:"), s.count));
            let matches: Vec<String> = matching_occurrences(by_file, s, mode)
                .map(|e| format!("{}({},{})", e.file, e.line, e.column))
                .collect();
            let noun = if matches.len() == 1 { "error" } else { "errors" };
            out.push_str(&format!("{} current {}:\n", matches.len(), noun));
            for m in matches {
                out.push_str(&m);
                out.push('\n');
            }
            out
        })
        .collect();
    blocks.join("\n")
}

/// Trailing one-line summary for human output.
pub fn render_summary(delta: &ErrorSummaryMap, baseline: &ErrorSummaryMap) -> String {
    let new_count = total_count(delta);
    let base_count = total_count(baseline);
    format!(
        "{} new {} found. {} {} in baseline.",
        new_count,
        if new_count == 1 { "error" } else { "errors" },
        base_count,
        if base_count == 1 { "error" } else { "errors" },
    )
}

/// Structured report entries for the delta.
pub fn compose_report(delta: &ErrorSummaryMap) -> Vec<ReportEntry> {
    delta
        .iter()
        .map(|(hash, s)| ReportEntry {
            description: match &s.message {
                Some(msg) => format!("{}: {}", s.code, msg),
                None => s.code.clone(),
            },
            check_name: CHECK_NAME.to_string(),
            fingerprint: hash.clone(),
            severity: SEVERITY.to_string(),
            location: ReportLocation {
                path: s.file.clone(),
                lines: ReportLines { begin: s.line },
            },
        })
        .collect()
}

pub fn report_json(delta: &ErrorSummaryMap) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&compose_report(delta))
}

/// Write the structured report for `delta` to `path`.
pub fn write_report(delta: &ErrorSummaryMap, path: &Path) -> Result<()> {
    let mut body = report_json(delta)?;
    body.push('\n');
    std::fs::write(path, body).map_err(|source| BaselineError::Report {
        path: path.to_path_buf(),
        source,
    })
}

/// Print `check` results in the requested format.
pub fn print_check(
    delta: &ErrorSummaryMap,
    baseline: &ErrorSummaryMap,
    by_file: &SpecificErrorsMap,
    mode: IdentityMode,
    output: &str,
) -> serde_json::Result<()> {
    match output {
        "json" => println!("{}", report_json(delta)?),
        _ => {
            let color = use_colors(output);
            let body = render_human(delta, by_file, mode, color);
            if !body.is_empty() {
                println!("{}", body);
            }
            let summary = render_summary(delta, baseline);
            if !color {
                println!("{}", summary);
            } else if delta.is_empty() {
                println!("{}", summary.green().bold());
            } else {
                println!("{}", summary.red().bold());
            }
        }
    }
    Ok(())
}

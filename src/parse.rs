//! Diagnostic line parser.
//!
//! Each input line is matched against
//! `<file>(<line>,<column>): error <code>: <message>`. Anything else (runner
//! banners, "Found N errors" footers, blank lines) is dropped without error.

use crate::aggregate::{index_by_file, summarize};
use crate::models::{IdentityMode, ParsedErrors, SpecificError};
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

fn line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(.+?)\((\d+),(\d+)\): error (\w+): (.+)$").expect("diagnostic regex is valid")
    })
}

/// Parse a single line; `None` for anything that is not a diagnostic.
pub fn parse_line(line: &str) -> Option<SpecificError> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let caps = line_regex().captures(line)?;
    Some(SpecificError {
        file: caps[1].to_string(),
        line: caps[2].parse().ok()?,
        column: caps[3].parse().ok()?,
        code: caps[4].to_string(),
        message: caps[5].to_string(),
    })
}

/// Parse a whole diagnostic blob into occurrences, a per-file index, and
/// counted summaries.
pub fn parse_diagnostics(text: &str, mode: IdentityMode) -> ParsedErrors {
    let mut discarded = 0usize;
    let occurrences: Vec<SpecificError> = text
        .lines()
        .filter_map(|l| {
            let parsed = parse_line(l);
            if parsed.is_none() {
                discarded += 1;
            }
            parsed
        })
        .collect();
    let by_file = index_by_file(&occurrences);
    let summaries = summarize(&occurrences, mode);
    debug!(
        matched = occurrences.len(),
        discarded,
        identities = summaries.len(),
        files = by_file.len(),
        "parsed diagnostics"
    );
    ParsedErrors {
        occurrences,
        by_file,
        summaries,
    }
}

//! Shared data models for parsed diagnostics, summaries, and the baseline
//! document.

pub mod baseline;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One concrete diagnostic occurrence as printed by the type checker.
pub struct SpecificError {
    pub file: String,
    pub line: u32,
    pub column: u32,
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Identity-deduplicated diagnostic with its occurrence count.
///
/// `line` is informational only (last occurrence seen); it never takes part
/// in the identity hash.
pub struct ErrorSummary {
    pub file: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub line: u32,
    pub count: u32,
}

/// Identity hash -> summary.
pub type ErrorSummaryMap = BTreeMap<String, ErrorSummary>;

/// File path -> occurrences in that file, in input order.
pub type SpecificErrorsMap = BTreeMap<String, Vec<SpecificError>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Which fields make up a diagnostic's identity.
pub enum IdentityMode {
    /// `(file, code, message)`
    #[default]
    WithMessages,
    /// `(file, code)`
    IgnoreMessages,
}

impl IdentityMode {
    pub fn from_ignore_messages(ignore: bool) -> Self {
        if ignore {
            IdentityMode::IgnoreMessages
        } else {
            IdentityMode::WithMessages
        }
    }

    pub fn ignores_messages(self) -> bool {
        self == IdentityMode::IgnoreMessages
    }
}

#[derive(Debug, Default)]
/// Everything one parse of a diagnostic blob produces.
pub struct ParsedErrors {
    /// Matched occurrences in encounter order.
    pub occurrences: Vec<SpecificError>,
    pub by_file: SpecificErrorsMap,
    pub summaries: ErrorSummaryMap,
}

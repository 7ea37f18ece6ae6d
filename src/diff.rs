//! Delta between a baseline and the current summaries.

use crate::models::{ErrorSummary, ErrorSummaryMap};
use tracing::debug;

/// Summaries in `new` not covered by `old`.
///
/// Unknown identities are reported with their full count; known identities
/// whose count grew are reported with only the increase. Identities that
/// shrank, stayed equal, or disappeared contribute nothing.
pub fn new_errors(old: &ErrorSummaryMap, new: &ErrorSummaryMap) -> ErrorSummaryMap {
    let delta: ErrorSummaryMap = new
        .iter()
        .filter_map(|(hash, summary)| {
            let old_count = old.get(hash).map(|s| s.count).unwrap_or(0);
            (summary.count > old_count).then(|| {
                (
                    hash.clone(),
                    ErrorSummary {
                        count: summary.count - old_count,
                        ..summary.clone()
                    },
                )
            })
        })
        .collect();
    debug!(
        baseline = old.len(),
        current = new.len(),
        new = delta.len(),
        "computed delta"
    );
    delta
}

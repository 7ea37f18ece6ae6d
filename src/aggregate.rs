//! Groups parsed occurrences into counted summaries and per-file indexes.

use crate::fingerprint::hash_error;
use crate::models::{ErrorSummary, ErrorSummaryMap, IdentityMode, SpecificError, SpecificErrorsMap};

/// Build the identity -> summary map.
///
/// Repeated identities bump `count`; the stored `line` is the one from the
/// last occurrence processed.
pub fn summarize(occurrences: &[SpecificError], mode: IdentityMode) -> ErrorSummaryMap {
    let mut summaries = ErrorSummaryMap::new();
    for err in occurrences {
        let hash = hash_error(err, mode);
        summaries
            .entry(hash)
            .and_modify(|s| {
                s.count += 1;
                s.line = err.line;
            })
            .or_insert_with(|| ErrorSummary {
                file: err.file.clone(),
                code: err.code.clone(),
                message: if mode.ignores_messages() {
                    None
                } else {
                    Some(err.message.clone())
                },
                line: err.line,
                count: 1,
            });
    }
    summaries
}

/// Index occurrences by file, keeping input order within each file.
pub fn index_by_file(occurrences: &[SpecificError]) -> SpecificErrorsMap {
    let mut by_file = SpecificErrorsMap::new();
    for err in occurrences {
        by_file.entry(err.file.clone()).or_default().push(err.clone());
    }
    by_file
}

/// Occurrences in `by_file` that belong to `summary` under `mode`.
pub fn matching_occurrences<'a>(
    by_file: &'a SpecificErrorsMap,
    summary: &'a ErrorSummary,
    mode: IdentityMode,
) -> impl Iterator<Item = &'a SpecificError> + 'a {
    by_file
        .get(&summary.file)
        .into_iter()
        .flatten()
        .filter(move |e| {
            e.code == summary.code
                && (mode.ignores_messages() || summary.message.as_deref() == Some(e.message.as_str()))
        })
}

/// Sum of all `count` values.
pub fn total_count(summaries: &ErrorSummaryMap) -> u64 {
    summaries.values().map(|s| u64::from(s.count)).sum()
}

//! Property-based tests for identity hashing, aggregation, and the delta.

use proptest::prelude::*;

use tsc_baseline::aggregate::{summarize, total_count};
use tsc_baseline::diff::new_errors;
use tsc_baseline::fingerprint::{hash_error, identity_hash};
use tsc_baseline::models::{ErrorSummaryMap, IdentityMode, SpecificError};
use tsc_baseline::parse::parse_diagnostics;

fn arb_mode() -> impl Strategy<Value = IdentityMode> {
    prop_oneof![Just(IdentityMode::WithMessages), Just(IdentityMode::IgnoreMessages)]
}

fn arb_file() -> impl Strategy<Value = String> {
    prop::string::string_regex("src/[a-z]{1,8}\\.ts").expect("valid regex")
}

fn arb_code() -> impl Strategy<Value = String> {
    (1000u32..9999).prop_map(|n| format!("TS{n}"))
}

fn arb_message() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 '.]{1,40}").expect("valid regex")
}

fn arb_error() -> impl Strategy<Value = SpecificError> {
    (arb_file(), 1u32..500, 1u32..120, arb_code(), arb_message()).prop_map(
        |(file, line, column, code, message)| SpecificError {
            file,
            line,
            column,
            code,
            message,
        },
    )
}

fn render(errors: &[SpecificError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}({},{}): error {}: {}\n", e.file, e.line, e.column, e.code, e.message))
        .collect()
}

proptest! {
    #[test]
    fn hash_stable_and_position_free(e in arb_error(), line in 1u32..500, column in 1u32..120, mode in arb_mode()) {
        let moved = SpecificError { line, column, ..e.clone() };
        prop_assert_eq!(hash_error(&e, mode), hash_error(&e, mode));
        prop_assert_eq!(hash_error(&e, mode), hash_error(&moved, mode));
        prop_assert_eq!(
            hash_error(&e, mode),
            identity_hash(&e.file, &e.code, Some(&e.message), mode)
        );
    }

    #[test]
    fn diff_of_self_is_empty(errors in prop::collection::vec(arb_error(), 0..30), mode in arb_mode()) {
        let s = summarize(&errors, mode);
        prop_assert!(new_errors(&s, &s).is_empty());
    }

    #[test]
    fn total_count_matches_occurrences(errors in prop::collection::vec(arb_error(), 0..30), mode in arb_mode()) {
        let s = summarize(&errors, mode);
        prop_assert_eq!(total_count(&s), errors.len() as u64);
    }

    #[test]
    fn repeated_identity_counts_n(e in arb_error(), n in 1usize..20) {
        let errors: Vec<SpecificError> = (0..n)
            .map(|i| SpecificError { line: e.line + i as u32, column: 1 + i as u32, ..e.clone() })
            .collect();
        let parsed = parse_diagnostics(&render(&errors), IdentityMode::WithMessages);
        prop_assert_eq!(parsed.summaries.len(), 1);
        prop_assert_eq!(parsed.summaries.values().next().unwrap().count, n as u32);
    }

    #[test]
    fn partial_count_delta(e in arb_error(), old_n in 1usize..10, extra in 0usize..10) {
        let make = |n: usize| -> ErrorSummaryMap {
            let errs: Vec<SpecificError> = (0..n).map(|_| e.clone()).collect();
            summarize(&errs, IdentityMode::WithMessages)
        };
        let delta = new_errors(&make(old_n), &make(old_n + extra));
        prop_assert_eq!(total_count(&delta), extra as u64);
        prop_assert_eq!(delta.len(), usize::from(extra > 0));
    }

    #[test]
    fn line_movement_is_not_new(errors in prop::collection::vec(arb_error(), 1..20), shift in 1u32..1000) {
        let moved: Vec<SpecificError> = errors
            .iter()
            .map(|e| SpecificError { line: e.line + shift, ..e.clone() })
            .collect();
        let old = summarize(&errors, IdentityMode::WithMessages);
        let new = summarize(&moved, IdentityMode::WithMessages);
        prop_assert!(new_errors(&old, &new).is_empty());
    }
}

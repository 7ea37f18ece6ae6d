//! Stable identity hash for diagnostics.
//!
//! The hash input is a JSON object with a fixed field order
//! (`code`, `file`, `message`), so equal identities hash the same across runs
//! and builds. `line` and `count` never take part.

use crate::models::{IdentityMode, SpecificError};
use serde::Serialize;
use sha2::{Digest, Sha256};

#[derive(Serialize)]
struct IdentityFields<'a> {
    code: &'a str,
    file: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
}

/// Hash the identity fields of a diagnostic as 64 lowercase hex chars.
pub fn identity_hash(file: &str, code: &str, message: Option<&str>, mode: IdentityMode) -> String {
    let fields = IdentityFields {
        code,
        file,
        message: if mode.ignores_messages() { None } else { message },
    };
    // Serializing borrowed strings into a Vec cannot fail.
    let canonical = serde_json::to_vec(&fields).unwrap_or_default();
    hex::encode(Sha256::digest(&canonical))
}

pub fn hash_error(err: &SpecificError, mode: IdentityMode) -> String {
    identity_hash(&err.file, &err.code, Some(&err.message), mode)
}

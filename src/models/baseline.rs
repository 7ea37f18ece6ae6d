//! Persisted baseline document schema.
//!
//! Current layout:
//! ```json
//! { "meta": { "baselineFileVersion": 1, "ignoreMessages": false },
//!   "errors": { "<hash>": { "file": "...", "code": "...", "line": 1, "count": 1 } } }
//! ```
//! Documents written before versioning were a flat `hash -> summary` map and
//! are read as version 0. Entries are only decoded once the version is known
//! to be current, since other versions may lay them out differently.

use super::{ErrorSummaryMap, IdentityMode};
use serde::{Deserialize, Serialize};

/// Version written by this build. Bump whenever hashing or layout changes.
pub const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaselineMeta {
    #[serde(default)]
    pub baseline_file_version: u32,
    #[serde(default)]
    pub ignore_messages: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
/// The unit read and written by the baseline store.
pub struct BaselineDocument {
    pub meta: BaselineMeta,
    pub errors: ErrorSummaryMap,
}

impl BaselineDocument {
    /// New document at the current version.
    pub fn new(errors: ErrorSummaryMap, mode: IdentityMode) -> Self {
        BaselineDocument {
            meta: BaselineMeta {
                baseline_file_version: CURRENT_VERSION,
                ignore_messages: mode.ignores_messages(),
            },
            errors,
        }
    }

    pub fn mode(&self) -> IdentityMode {
        IdentityMode::from_ignore_messages(self.meta.ignore_messages)
    }
}

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading, validating, or updating a baseline.
#[derive(Debug, Error)]
pub enum BaselineError {
    #[error("could not read baseline {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("baseline {} is not a valid baseline document: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("baseline {} has an invalid entry at `{location}`: {source}", .path.display())]
    Entry {
        path: PathBuf,
        location: String,
        source: serde_json::Error,
    },

    #[error("could not write baseline {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not write report {}: {source}", .path.display())]
    Report {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("baseline is outdated (version {found}, current {current})")]
    Outdated { found: u32, current: u32 },

    #[error("baseline is from an unrecognized future version (version {found}, current {current})")]
    FutureVersion { found: u32, current: u32 },

    #[error("baseline was saved with ignoreMessages={baseline} but this run uses ignoreMessages={requested}")]
    ModeMismatch { baseline: bool, requested: bool },

    #[error("hash {0} does not match any current error")]
    HashNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BaselineError {
    /// Exit code for the CLI. `1` is reserved for "new errors found".
    pub fn exit_code(&self) -> i32 {
        match self {
            BaselineError::Read { .. }
            | BaselineError::Parse { .. }
            | BaselineError::Entry { .. }
            | BaselineError::Outdated { .. }
            | BaselineError::FutureVersion { .. }
            | BaselineError::ModeMismatch { .. }
            | BaselineError::HashNotFound(_) => 2,
            BaselineError::Write { .. }
            | BaselineError::Report { .. }
            | BaselineError::Io(_)
            | BaselineError::Json(_) => 3,
        }
    }

    /// Actionable next step shown under the error message.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            BaselineError::Read { .. } | BaselineError::Parse { .. } => {
                Some("Run `tsc-baseline save` first to create a baseline.")
            }
            BaselineError::Entry { .. } => {
                Some("Fix the entry by hand or re-run `tsc-baseline save` to regenerate the baseline.")
            }
            BaselineError::Outdated { .. } => {
                Some("Re-run `tsc-baseline save` to regenerate it in the current format.")
            }
            BaselineError::FutureVersion { .. } => {
                Some("Update tsc-baseline to a version that understands this baseline.")
            }
            BaselineError::ModeMismatch { .. } => Some(
                "Drop --ignore-messages/ignoreMessages to use the baseline's mode, or re-run `tsc-baseline save` with the new mode.",
            ),
            BaselineError::HashNotFound(_) => {
                Some("Copy the hash from `tsc-baseline check` output for the same input.")
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, BaselineError>;

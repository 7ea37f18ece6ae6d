//! Baseline document store.
//!
//! The document is always read and written whole. Writes go to a sibling
//! temporary file that is renamed over the target, so readers never observe a
//! half-written baseline. `read` rejects documents of any other version;
//! identity-mode gating is a separate step callers run afterwards. Nothing
//! here migrates documents.

use crate::error::{BaselineError, Result};
use crate::models::baseline::{BaselineDocument, BaselineMeta, CURRENT_VERSION};
use crate::models::{ErrorSummary, ErrorSummaryMap, IdentityMode};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Serialize `summaries` as a current-version document at `path`,
/// replacing any existing file.
pub fn write(summaries: &ErrorSummaryMap, path: &Path, mode: IdentityMode) -> Result<BaselineDocument> {
    let doc = BaselineDocument::new(summaries.clone(), mode);
    write_document(&doc, path)?;
    Ok(doc)
}

/// Persist an already-built document as-is.
pub fn write_document(doc: &BaselineDocument, path: &Path) -> Result<()> {
    let mut body = serde_json::to_string_pretty(doc)?;
    body.push('\n');
    let write_err = |source| BaselineError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    let tmp = temp_path(path);
    fs::write(&tmp, body).map_err(write_err)?;
    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        write_err(e)
    })?;
    info!(
        path = %path.display(),
        errors = doc.errors.len(),
        version = doc.meta.baseline_file_version,
        "wrote baseline"
    );
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Load the document at `path`.
///
/// The version is checked before any entry is decoded, so documents from
/// other versions are reported as outdated or future even when their entries
/// no longer fit today's layout. Legacy flat-map documents are version 0.
pub fn read(path: &Path) -> Result<BaselineDocument> {
    let s = fs::read_to_string(path).map_err(|source| BaselineError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parse_err = |source| BaselineError::Parse {
        path: path.to_path_buf(),
        source,
    };
    let mut obj: Map<String, Value> = serde_json::from_str(&s).map_err(parse_err)?;

    let (meta, entries) = if obj.contains_key("meta") || obj.contains_key("errors") {
        let meta = obj.remove("meta").unwrap_or(Value::Null);
        let found = match meta.get("baselineFileVersion") {
            Some(v) => serde_json::from_value(v.clone()).map_err(parse_err)?,
            None => 0,
        };
        check_version(found)?;
        let meta: BaselineMeta = if meta.is_null() {
            BaselineMeta::default()
        } else {
            serde_json::from_value(meta).map_err(parse_err)?
        };
        let entries = obj.remove("errors").unwrap_or_else(|| Value::Object(Map::new()));
        (meta, entries)
    } else {
        check_version(0)?;
        (BaselineMeta::default(), Value::Object(obj))
    };

    let doc = BaselineDocument {
        meta,
        errors: decode_entries(path, entries)?,
    };
    debug!(
        path = %path.display(),
        version = version_of(&doc),
        errors = doc.errors.len(),
        "read baseline"
    );
    Ok(doc)
}

fn decode_entries(path: &Path, entries: Value) -> Result<ErrorSummaryMap> {
    let entry_err = |location: String, source| BaselineError::Entry {
        path: path.to_path_buf(),
        location,
        source,
    };
    let entries: Map<String, Value> =
        serde_json::from_value(entries).map_err(|e| entry_err("errors".into(), e))?;
    entries
        .into_iter()
        .map(|(hash, entry)| match ErrorSummary::deserialize(&entry) {
            Ok(summary) => Ok((hash, summary)),
            Err(e) => {
                let location = match offending_field(&entry) {
                    Some(field) => format!("errors.{hash}.{field}"),
                    None => format!("errors.{hash}"),
                };
                Err(entry_err(location, e))
            }
        })
        .collect()
}

fn is_u32(v: &Value) -> bool {
    v.as_u64().map_or(false, |n| n <= u64::from(u32::MAX))
}

fn is_optional_string(v: &Value) -> bool {
    v.is_string() || v.is_null()
}

const ENTRY_FIELDS: [(&str, fn(&Value) -> bool); 5] = [
    ("file", Value::is_string),
    ("code", Value::is_string),
    ("message", is_optional_string),
    ("line", is_u32),
    ("count", is_u32),
];

/// First present field of an entry whose JSON type is wrong. Missing fields
/// are already named by serde's own message.
fn offending_field(entry: &Value) -> Option<&'static str> {
    let obj = entry.as_object()?;
    ENTRY_FIELDS
        .iter()
        .find(|(name, ok)| obj.get(*name).map_or(false, |v| !ok(v)))
        .map(|(name, _)| *name)
}

pub fn version_of(doc: &BaselineDocument) -> u32 {
    doc.meta.baseline_file_version
}

pub fn is_current(doc: &BaselineDocument) -> bool {
    version_of(doc) == CURRENT_VERSION
}

/// Reject documents not written at `CURRENT_VERSION`.
pub fn ensure_current(doc: &BaselineDocument) -> Result<()> {
    check_version(version_of(doc))
}

fn check_version(found: u32) -> Result<()> {
    if found < CURRENT_VERSION {
        debug!(found, current = CURRENT_VERSION, "rejecting outdated baseline");
        return Err(BaselineError::Outdated {
            found,
            current: CURRENT_VERSION,
        });
    }
    if found > CURRENT_VERSION {
        debug!(found, current = CURRENT_VERSION, "rejecting baseline from a newer release");
        return Err(BaselineError::FutureVersion {
            found,
            current: CURRENT_VERSION,
        });
    }
    Ok(())
}

/// Resolve the identity mode for comparing against `doc`.
///
/// With no explicit request the stored mode wins; an explicit request that
/// disagrees with the stored mode is an error, since hashes would never match.
pub fn ensure_mode(doc: &BaselineDocument, requested: Option<IdentityMode>) -> Result<IdentityMode> {
    let stored = doc.mode();
    match requested {
        Some(mode) if mode != stored => Err(BaselineError::ModeMismatch {
            baseline: stored.ignores_messages(),
            requested: mode.ignores_messages(),
        }),
        _ => Ok(stored),
    }
}

/// Accept the current error identified by `hash` into `doc`, taking its full
/// current count.
pub fn add(doc: &mut BaselineDocument, current: &ErrorSummaryMap, hash: &str) -> Result<()> {
    let summary = current
        .get(hash)
        .ok_or_else(|| BaselineError::HashNotFound(hash.to_string()))?;
    let previous = doc.errors.insert(hash.to_string(), summary.clone());
    info!(
        hash,
        count = summary.count,
        previous = previous.map(|p| p.count).unwrap_or(0),
        "added error to baseline"
    );
    Ok(())
}

/// Delete the baseline. Returns whether a file was removed.
pub fn clear(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => {
            info!(path = %path.display(), "removed baseline");
            Ok(true)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!(path = %path.display(), "no baseline to remove");
            Ok(false)
        }
        Err(e) => Err(BaselineError::Io(e)),
    }
}

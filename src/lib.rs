//! tsc-baseline core library.
//!
//! Parses TypeScript compiler diagnostics, persists them as a versioned
//! baseline, and reports only diagnostics that are new relative to it.
//!
//! High-level modules:
//! - `parse`: Line grammar for `file(line,col): error CODE: message`.
//! - `fingerprint`: Stable identity hash (excludes line and count).
//! - `aggregate`: Counted summaries and per-file occurrence index.
//! - `baseline`: Read/write/version gating of the baseline document.
//! - `diff`: New-error delta including partial counts.
//! - `output`: Human text and Code Climate report rendering.
//! - `config`: Discovery and effective configuration resolution.
//! - `cli`: CLI argument parsing (binary uses this).
//! - `models`: Data models shared by the modules above.
//! - `error`: Error taxonomy with exit codes and hints.
pub mod aggregate;
pub mod baseline;
pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod fingerprint;
pub mod models;
pub mod output;
pub mod parse;

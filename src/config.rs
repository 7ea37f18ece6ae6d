//! Configuration discovery and effective settings resolution.
//!
//! tsc-baseline reads `tsc-baseline.toml|yaml|yml` from the repository root
//! (or closest ancestor) and merges it with CLI flags to produce an
//! `Effective` config.
//! Defaults:
//! - `path`: `.tsc-baseline.json` (relative to the repository root)
//! - `output`: `human`
//! - `ignoreMessages`: unset (save: false; check/add: the baseline's mode)
//! - `reportPath`: unset
//!
//! Overrides precedence: CLI > config file > defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const DEFAULT_BASELINE_PATH: &str = ".tsc-baseline.json";

const CONFIG_NAMES: [&str; 3] = ["tsc-baseline.toml", "tsc-baseline.yaml", "tsc-baseline.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
/// Root configuration loaded from `tsc-baseline.toml|yaml`.
pub struct BaselineConfig {
    pub path: Option<String>,
    pub ignore_messages: Option<bool>,
    pub output: Option<String>,
    pub report_path: Option<String>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub baseline_path: PathBuf,
    pub ignore_messages: Option<bool>,
    pub output: String,
    pub report_path: Option<PathBuf>,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a config file or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_NAMES.iter().any(|n| cur.join(n).exists()) || cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `BaselineConfig` from `tsc-baseline.toml` or `tsc-baseline.yaml|yml`
/// if present. A config file that fails to parse is ignored with a warning.
pub fn load_config(root: &Path) -> Option<BaselineConfig> {
    let toml_path = root.join(CONFIG_NAMES[0]);
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        return match toml::from_str(&s) {
            Ok(cfg) => Some(cfg),
            Err(e) => {
                warn!(path = %toml_path.display(), error = %e, "ignoring invalid config");
                None
            }
        };
    }
    for yml in &CONFIG_NAMES[1..] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            return match serde_yaml::from_str(&s) {
                Ok(cfg) => Some(cfg),
                Err(e) => {
                    warn!(path = %p.display(), error = %e, "ignoring invalid config");
                    None
                }
            };
        }
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_path: Option<&str>,
    cli_ignore_messages: Option<bool>,
    cli_output: Option<&str>,
    cli_report_path: Option<&str>,
) -> Effective {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let cfg = load_config(&repo_root).unwrap_or_default();

    let path = cli_path
        .map(|s| s.to_string())
        .or(cfg.path)
        .unwrap_or_else(|| DEFAULT_BASELINE_PATH.to_string());
    let ignore_messages = cli_ignore_messages.or(cfg.ignore_messages);
    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());
    let report_path = cli_report_path
        .map(|s| s.to_string())
        .or(cfg.report_path)
        .map(|p| repo_root.join(p));

    let eff = Effective {
        baseline_path: repo_root.join(path),
        repo_root,
        ignore_messages,
        output,
        report_path,
    };
    debug!(?eff, "resolved configuration");
    eff
}

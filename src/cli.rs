//! CLI argument parsing via `clap`.

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tsc-baseline",
    version,
    about = "Baseline TypeScript compiler errors and report only new ones",
    long_about = "tsc-baseline — save the current tsc errors as a baseline, then fail CI only on errors that are not in it.\n\nDiagnostics are read from stdin.\nConfiguration precedence: CLI > tsc-baseline.toml > defaults.",
    after_help = "Examples:\n  tsc --noEmit | tsc-baseline save\n  tsc --noEmit | tsc-baseline check\n  tsc --noEmit | tsc-baseline check --output json --report-path codeclimate.json\n  tsc --noEmit | tsc-baseline add 3f1c...\n  tsc-baseline clear",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Args)]
pub struct GlobalArgs {
    #[arg(long, global = true, help = "Repository root (default: current dir)")]
    pub repo_root: Option<String>,
    #[arg(long, global = true, help = "Baseline file, relative to the repository root (default: .tsc-baseline.json)")]
    pub path: Option<String>,
    #[arg(long, global = true, default_value = "warn", help = "Log level when RUST_LOG is unset (trace|debug|info|warn|error)")]
    pub log_level: String,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Save current errors as the baseline
    #[command(
        about = "Save errors from stdin as the baseline",
        long_about = "Parse tsc output from stdin and overwrite the baseline with the errors found.",
        after_help = "Examples:\n  tsc --noEmit | tsc-baseline save\n  tsc --noEmit | tsc-baseline save --ignore-messages"
    )]
    Save {
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Identify errors by file and code only")]
        ignore_messages: bool,
    },
    /// Report errors not present in the baseline
    #[command(
        about = "Check stdin for new errors",
        long_about = "Parse tsc output from stdin and list errors not covered by the baseline. Exits 1 when new errors exist.",
        after_help = "Examples:\n  tsc --noEmit | tsc-baseline check\n  tsc --noEmit | tsc-baseline check --output json"
    )]
    Check {
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Identify errors by file and code only (must match the baseline)")]
        ignore_messages: bool,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(long, help = "Also write a Code Climate report to this file")]
        report_path: Option<String>,
    },
    /// Accept one current error into the baseline
    #[command(
        about = "Add an error hash to the baseline",
        long_about = "Parse tsc output from stdin and copy the error with the given hash into the baseline."
    )]
    Add {
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Identify errors by file and code only (must match the baseline)")]
        ignore_messages: bool,
        #[arg(help = "Hash printed by `tsc-baseline check`")]
        hash: String,
    },
    /// Delete the baseline
    #[command(about = "Delete the baseline file")]
    Clear,
}

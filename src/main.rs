//! tsc-baseline CLI binary entry point.
//! Reads diagnostics from stdin, delegates to the library, and maps results to
//! exit codes: 0 clean, 1 new errors found, 2 baseline problems, 3 I/O failures.

use clap::Parser;
use std::io::Read;
use std::process::exit;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tsc_baseline::cli::{Cli, Commands};
use tsc_baseline::error::BaselineError;
use tsc_baseline::models::IdentityMode;
use tsc_baseline::{aggregate, baseline, config, diff, output, parse};

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn read_stdin() -> String {
    let mut buf = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
        eprintln!("{} failed to read stdin: {}", output::error_prefix(), e);
        exit(2);
    }
    buf
}

fn fail(e: BaselineError) -> ! {
    eprintln!("{} {}", output::error_prefix(), e);
    if let Some(h) = e.hint() {
        eprintln!("{} {}", output::hint_prefix(), h);
    }
    exit(e.exit_code());
}

/// Identity mode requested by flag or config, if any.
fn requested_mode(eff: &config::Effective) -> Option<IdentityMode> {
    eff.ignore_messages.map(IdentityMode::from_ignore_messages)
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.global.log_level);
    let repo_root = cli.global.repo_root.as_deref();
    let path = cli.global.path.as_deref();

    match cli.cmd {
        Commands::Save { ignore_messages } => {
            let eff =
                config::resolve_effective(repo_root, path, ignore_messages.then_some(true), None, None);
            let mode = requested_mode(&eff).unwrap_or_default();
            let parsed = parse::parse_diagnostics(&read_stdin(), mode);
            if let Err(e) = baseline::write(&parsed.summaries, &eff.baseline_path, mode) {
                fail(e);
            }
            println!(
                "Saved baseline to {} ({} errors, {} unique).",
                eff.baseline_path.display(),
                aggregate::total_count(&parsed.summaries),
                parsed.summaries.len()
            );
        }
        Commands::Check {
            ignore_messages,
            output: out,
            report_path,
        } => {
            let eff = config::resolve_effective(
                repo_root,
                path,
                ignore_messages.then_some(true),
                out.as_deref(),
                report_path.as_deref(),
            );
            let doc = baseline::read(&eff.baseline_path).unwrap_or_else(|e| fail(e));
            let mode = baseline::ensure_mode(&doc, requested_mode(&eff))
                .unwrap_or_else(|e| fail(e));
            let parsed = parse::parse_diagnostics(&read_stdin(), mode);
            let delta = diff::new_errors(&doc.errors, &parsed.summaries);

            if let Some(rp) = eff.report_path.as_ref() {
                if let Err(e) = output::write_report(&delta, rp) {
                    fail(e);
                }
            }
            if let Err(e) = output::print_check(&delta, &doc.errors, &parsed.by_file, mode, &eff.output) {
                fail(e.into());
            }
            if !delta.is_empty() {
                exit(1);
            }
        }
        Commands::Add {
            ignore_messages,
            hash,
        } => {
            let eff =
                config::resolve_effective(repo_root, path, ignore_messages.then_some(true), None, None);
            let mut doc = baseline::read(&eff.baseline_path).unwrap_or_else(|e| fail(e));
            let mode = baseline::ensure_mode(&doc, requested_mode(&eff))
                .unwrap_or_else(|e| fail(e));
            let parsed = parse::parse_diagnostics(&read_stdin(), mode);
            let added = baseline::add(&mut doc, &parsed.summaries, &hash)
                .and_then(|_| baseline::write_document(&doc, &eff.baseline_path));
            if let Err(e) = added {
                fail(e);
            }
            println!("Added {} to {}.", hash, eff.baseline_path.display());
        }
        Commands::Clear => {
            let eff = config::resolve_effective(repo_root, path, None, None, None);
            match baseline::clear(&eff.baseline_path) {
                Ok(true) => println!("Removed {}.", eff.baseline_path.display()),
                Ok(false) => println!("No baseline at {}.", eff.baseline_path.display()),
                Err(e) => fail(e),
            }
        }
    }
}

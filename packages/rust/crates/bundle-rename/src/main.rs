//! bundle-rename CLI.
//!
//! Logging: set `RUST_LOG=bundle_rename=debug` (or `warn`, ...) to tune
//! what reaches stderr. Reports go to stdout.

mod cli;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bundle_rename::{BatchReport, RenameSession, RenameSettings, canonical_name, load_settings};

use crate::cli::{Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG overrides; --verbose => debug; else info
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose {
            "bundle_rename=debug,bundle_io=debug"
        } else {
            "bundle_rename=info,bundle_io=info"
        })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    match cli.command {
        Command::Run {
            bundle,
            mapping,
            archive,
            dry_run,
            json,
        } => {
            // CLI paths are relative to the working directory, not the bundle.
            let archive = archive.map(absolutize).transpose()?;
            let settings = load_settings(cli.config.as_deref()).merge(RenameSettings {
                archive_dir: archive,
                dry_run: dry_run.then_some(true),
                ..RenameSettings::default()
            });
            run_command(settings, &bundle, &mapping, json)
        }
        Command::Name { role } => {
            println!("{}", canonical_name(&role));
            Ok(())
        }
    }
}

fn run_command(
    settings: RenameSettings,
    bundle: &Path,
    mapping: &Path,
    json: bool,
) -> anyhow::Result<()> {
    let session = RenameSession::new(settings);
    let report = session
        .run(bundle, mapping)
        .with_context(|| format!("rename run over {} failed", bundle.display()))?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("failed to encode report")?
        );
    } else {
        println!("{}", summary_line(&report));
    }
    Ok(())
}

fn absolutize(path: PathBuf) -> anyhow::Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path);
    }
    let cwd = std::env::current_dir().context("cannot resolve working directory")?;
    Ok(cwd.join(path))
}

fn summary_line(report: &BatchReport) -> String {
    let prefix = if report.dry_run { "[dry run] " } else { "" };
    let report_note = report
        .report_path
        .as_ref()
        .map(|p| format!(" (see {})", p.display()))
        .unwrap_or_default();
    format!(
        "{prefix}renamed {}, unresolved {}{report_note}",
        report.renamed_count(),
        report.unresolved.len()
    )
}

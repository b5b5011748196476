//! # sheetson-cli
//!
//! Command-line interface for the sheetson master-data exporter.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use sheetson_extract::{write_artifact, FilterList, ScanLimits, Workbook};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// sheetson - exports schema-tagged workbook sheets as JSON artifacts
#[derive(Parser)]
#[command(name = "sheetson")]
#[command(author, version, about = "Exports schema-tagged workbook sheets to per-sheet JSON", long_about = None)]
struct Cli {
    /// Workbook file to export (.xlsx)
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Environment, selects json/<ENV>/ and originData/<ENV>/
    #[arg(short, long, default_value = "develop")]
    env: String,

    /// Project root anchoring the json/ and originData/ directories
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Only export sheets listed in originData/<ENV>/json_list.json
    #[arg(long)]
    apply_filter: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .init();
    }

    match run(&cli) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(failed) => {
            eprintln!("{} {failed} sheet(s) failed", "Error:".red().bold());
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

/// Export every data sheet of the workbook; returns how many failed.
fn run(cli: &Cli) -> Result<usize> {
    let json_dir = cli.root.join("json").join(&cli.env);
    std::fs::create_dir_all(&json_dir)
        .with_context(|| format!("Failed to create {}", json_dir.display()))?;

    let filter_path = cli
        .root
        .join("originData")
        .join(&cli.env)
        .join("json_list.json");
    let filter = FilterList::load(&filter_path)
        .with_context(|| format!("Failed to load filter list {}", filter_path.display()))?;
    if !filter.is_empty() && !cli.apply_filter {
        tracing::debug!(
            "filter list has {} name(s) but --apply-filter is off; exporting all sheets",
            filter.len()
        );
    }

    let mut workbook = Workbook::open(&cli.file)
        .with_context(|| format!("Failed to open workbook {}", cli.file.display()))?;

    let limits = ScanLimits::default();
    let mut failed = 0usize;

    // One result per sheet; a bad sheet is reported and the run moves on.
    for name in workbook.data_sheet_names() {
        if cli.apply_filter && !filter.contains(&name) {
            tracing::debug!("{name}: not in filter list, skipped");
            continue;
        }

        match export_sheet(&mut workbook, &name, &limits, &json_dir) {
            Ok((count, digest)) => {
                tracing::info!("{name}: {count} record(s)");
                println!("{name} hash:{digest}");
                println!("{name}: {}", "OK".green());
            }
            Err(e) => {
                eprintln!("{name}: {e:#}");
                failed += 1;
            }
        }
    }

    Ok(failed)
}

/// Extract one sheet and write its artifact, returning (record count, digest).
fn export_sheet(
    workbook: &mut Workbook,
    name: &str,
    limits: &ScanLimits,
    json_dir: &Path,
) -> Result<(usize, String)> {
    let sheet = workbook.load_sheet(name)?;
    let records = sheet.extract_with_limits(limits)?;
    let path = json_dir.join(format!("{name}.json"));
    let digest = write_artifact(&path, &records)?;
    Ok((records.len(), digest))
}

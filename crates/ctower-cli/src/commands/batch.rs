//! Batch command - parse every operation row of CSV exports.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use csv::StringRecord;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{debug, error, info, warn};

use ctower_core::models::config::CsvConfig;
use ctower_core::text::is_valid_operation_text;
use ctower_core::{CtowerConfig, ExtractionError, OperationInfo, OperationInfoParser};

use super::config::load_config;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// CSV file or glob pattern
    #[arg(required = true)]
    input: String,

    /// Header (or 0-based index) of the operation-info column
    #[arg(long)]
    column: Option<String>,

    /// Output file for the JSON array (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print per-row giro reconciliation
    #[arg(long)]
    summary: bool,

    /// Treat malformed rows and total mismatches as failures
    #[arg(long)]
    strict: bool,

    /// With --strict, skip failing rows instead of aborting
    #[arg(long)]
    continue_on_error: bool,
}

/// One parsed CSV row.
#[derive(Debug, Serialize)]
struct BatchEntry {
    file: String,
    row: usize,
    operation: OperationInfo,
    warnings: Vec<String>,
}

/// Reconciliation outcome of one row, for the summary table.
struct RowStatus {
    file: String,
    row: usize,
    cliente: String,
    mismatch: Option<String>,
}

pub async fn run(args: BatchArgs, config_path: &Path) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("csv"))
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching CSV files found for pattern: {}", args.input);
    }

    eprintln!("{} Found {} CSV files to process", style("ℹ").blue(), files.len());

    let parser = OperationInfoParser::from_config(&config.extraction);
    let mut entries = Vec::new();
    let mut statuses = Vec::new();
    let mut failed = 0usize;

    for path in &files {
        let rows = read_operation_rows(path, &config, args.column.as_deref())?;
        let file = path.display().to_string();

        let pb = ProgressBar::new(rows.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} rows")?
                .progress_chars("=>-"),
        );

        for (row, text) in rows {
            pb.inc(1);

            if !is_valid_operation_text(&text) {
                if args.strict {
                    let err = ExtractionError::InvalidText;
                    if args.continue_on_error {
                        warn!("Skipping {} row {}: {}", file, row, err);
                        failed += 1;
                        continue;
                    }
                    error!("Failed on {} row {}: {}", file, row, err);
                    anyhow::bail!("Row {} of {}: {}", row, file, err);
                }
                if config.extraction.require_valid_text {
                    debug!("Skipping {} row {}: not an operation block", file, row);
                    continue;
                }
            }

            let mut result = parser.parse_with_report(&text);
            let mismatch = result
                .operation
                .reconcile(config.extraction.reconcile_tolerance)
                .err();

            if let Some(err) = &mismatch {
                if args.strict {
                    if args.continue_on_error {
                        warn!("Skipping {} row {}: {}", file, row, err);
                        failed += 1;
                        continue;
                    }
                    error!("Failed on {} row {}: {}", file, row, err);
                    anyhow::bail!("Row {} of {}: {}", row, file, err);
                }
                result.warnings.push(err.to_string());
            }

            statuses.push(RowStatus {
                file: file.clone(),
                row,
                cliente: result.operation.cliente.clone(),
                mismatch: mismatch.map(|e| e.to_string()),
            });
            entries.push(BatchEntry {
                file: file.clone(),
                row,
                operation: result.operation,
                warnings: result.warnings,
            });
        }

        pb.finish_and_clear();
    }

    let output = serde_json::to_string_pretty(&entries)?;
    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.summary {
        print_summary(&statuses);
    }

    info!("Batch finished in {:?}", start.elapsed());
    eprintln!(
        "{} Parsed {} operations in {:?}",
        style("✓").green(),
        entries.len(),
        start.elapsed()
    );
    if failed > 0 {
        eprintln!("{} {} rows failed", style("✗").red(), failed);
    }

    Ok(())
}

/// Read `(row, text)` pairs from the operation-info column. Rows are 1-based
/// data rows, not counting the header.
fn read_operation_rows(
    path: &Path,
    config: &CtowerConfig,
    column: Option<&str>,
) -> anyhow::Result<Vec<(usize, String)>> {
    let mut reader = reader_builder(&config.csv).from_path(path)?;

    let headers = if config.csv.has_headers {
        Some(reader.headers()?.clone())
    } else {
        None
    };
    let records = reader.records().collect::<Result<Vec<_>, _>>()?;

    let requested = column.or(config.csv.info_column.as_deref());
    let index = resolve_column(headers.as_ref(), records.first(), requested)
        .ok_or_else(|| anyhow::anyhow!("No operation-info column found in {}", path.display()))?;

    debug!("Using column {} of {}", index, path.display());

    Ok(records
        .iter()
        .enumerate()
        .map(|(i, record)| (i + 1, record.get(index).unwrap_or_default().to_string()))
        .collect())
}

fn reader_builder(csv: &CsvConfig) -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .delimiter(csv.delimiter as u8)
        .has_headers(csv.has_headers)
        .flexible(true);
    builder
}

/// Locate the operation-info column: an explicit header or index, then a
/// header mentioning "info", then the first column whose first cell looks
/// like an operation block.
fn resolve_column(
    headers: Option<&StringRecord>,
    first_row: Option<&StringRecord>,
    requested: Option<&str>,
) -> Option<usize> {
    if let Some(name) = requested {
        let by_header = headers.and_then(|h| {
            h.iter()
                .position(|header| header.trim().eq_ignore_ascii_case(name.trim()))
        });
        return by_header.or_else(|| name.trim().parse().ok());
    }

    let by_info = headers.and_then(|h| {
        h.iter()
            .position(|header| header.to_lowercase().contains("info"))
    });

    by_info.or_else(|| first_row?.iter().position(is_valid_operation_text))
}

fn print_summary(statuses: &[RowStatus]) {
    eprintln!();
    eprintln!("{}", style("Giro reconciliation:").bold());

    for status in statuses {
        let label = match &status.mismatch {
            None => style("OK".to_string()).green(),
            Some(message) => style(format!("MISMATCH ({})", message)).red(),
        };
        eprintln!(
            "  {} row {:>4}  {:<30} {}",
            status.file, status.row, status.cliente, label
        );
    }

    let mismatched = statuses.iter().filter(|s| s.mismatch.is_some()).count();
    eprintln!();
    eprintln!(
        "{} OK, {} MISMATCH",
        statuses.len() - mismatched,
        mismatched
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    #[test]
    fn test_resolve_requested_column() {
        let headers = record(&["ID", "Operación", "Notas"]);
        assert_eq!(resolve_column(Some(&headers), None, Some("operación")), Some(1));
        assert_eq!(resolve_column(None, None, Some("2")), Some(2));
        assert_eq!(resolve_column(Some(&headers), None, Some("missing")), None);
    }

    #[test]
    fn test_resolve_info_header() {
        let headers = record(&["ID", "Cliente", "Info Operación"]);
        assert_eq!(resolve_column(Some(&headers), None, None), Some(2));
    }

    #[test]
    fn test_resolve_by_content() {
        let headers = record(&["ID", "Texto"]);
        let first = record(&["7", "CLIENTE: MALE\nVALOR TOTAL DE COMPRA: 10"]);
        assert_eq!(resolve_column(Some(&headers), Some(&first), None), Some(1));
        assert_eq!(resolve_column(None, Some(&record(&["a", "b"])), None), None);
    }
}

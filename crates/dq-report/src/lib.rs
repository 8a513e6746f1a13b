//! Writes pipeline outputs as delimited files: one `cleaned_<dataset>.csv`
//! per entity plus the two audit tables.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use dq_model::{CleanedBundle, CleaningLogEntry, PipelineReport, Table, ValidationErrorEntry};

/// Paths of everything one run wrote.
#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub cleaned: Vec<PathBuf>,
    pub cleaning_summary: PathBuf,
    pub validation_errors: PathBuf,
}

/// Write the cleaned tables and both audit tables into `dir`, creating the
/// directory if needed.
pub fn write_outputs(
    dir: &Path,
    cleaned: &CleanedBundle,
    report: &PipelineReport,
) -> Result<OutputPaths> {
    fs::create_dir_all(dir).with_context(|| format!("create output dir {}", dir.display()))?;

    let mut cleaned_paths = Vec::new();
    for (_, table) in cleaned.iter() {
        cleaned_paths.push(write_cleaned_table(dir, table)?);
    }
    let cleaning_summary = write_cleaning_summary(dir, &report.cleaning_log)?;
    let validation_errors = write_validation_errors(dir, &report.validation_errors)?;

    Ok(OutputPaths {
        cleaned: cleaned_paths,
        cleaning_summary,
        validation_errors,
    })
}

/// Write one cleaned table as `cleaned_<dataset>.csv`, preserving the raw
/// column order. Missing cells render as empty fields.
pub fn write_cleaned_table(dir: &Path, table: &Table) -> Result<PathBuf> {
    let path = dir.join(format!("cleaned_{}.csv", table.dataset));
    let mut writer =
        csv::Writer::from_path(&path).with_context(|| format!("write {}", path.display()))?;
    writer
        .write_record(&table.columns)
        .with_context(|| format!("write header {}", path.display()))?;
    for row in &table.rows {
        let record: Vec<&str> = table
            .columns
            .iter()
            .map(|column| row.text(column).unwrap_or(""))
            .collect();
        writer
            .write_record(&record)
            .with_context(|| format!("write row {}", path.display()))?;
    }
    writer.flush().context("flush cleaned table")?;
    info!(dataset = %table.dataset, rows = table.len(), path = %path.display(), "saved cleaned table");
    Ok(path)
}

/// Write the cleaning-action log as `cleaning_summary.csv`.
pub fn write_cleaning_summary(dir: &Path, entries: &[CleaningLogEntry]) -> Result<PathBuf> {
    let path = dir.join("cleaning_summary.csv");
    let mut writer =
        csv::Writer::from_path(&path).with_context(|| format!("write {}", path.display()))?;
    writer
        .write_record(["dataset", "action", "rows_affected"])
        .context("write summary header")?;
    for entry in entries {
        writer
            .write_record([
                entry.dataset.as_str(),
                entry.action.as_str(),
                &entry.rows_affected.to_string(),
            ])
            .context("write summary row")?;
    }
    writer.flush().context("flush cleaning summary")?;
    Ok(path)
}

/// Write the per-value validation errors as `validation_errors.csv`.
pub fn write_validation_errors(dir: &Path, errors: &[ValidationErrorEntry]) -> Result<PathBuf> {
    let path = dir.join("validation_errors.csv");
    let mut writer =
        csv::Writer::from_path(&path).with_context(|| format!("write {}", path.display()))?;
    writer
        .write_record(["dataset", "row", "column", "issue", "value"])
        .context("write errors header")?;
    for error in errors {
        writer
            .write_record([
                error.dataset.as_str(),
                &error.row.to_string(),
                &error.column,
                error.issue.as_str(),
                &error.value,
            ])
            .context("write error row")?;
    }
    writer.flush().context("flush validation errors")?;
    Ok(path)
}

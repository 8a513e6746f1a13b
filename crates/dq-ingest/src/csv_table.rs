//! CSV reading into the string-cell table model.

use std::path::Path;

use csv::ReaderBuilder;

use dq_model::{CellValue, Dataset, Row, Table};

use crate::error::{IngestError, Result};

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read one raw CSV file into a [`Table`].
///
/// The first record is the header; header names and cells are trimmed and
/// BOM-stripped. Fully empty records are skipped. Records shorter than the
/// header read as missing in the absent columns; cells beyond the header
/// are dropped.
pub fn read_table(path: &Path, dataset: Dataset) -> Result<Table> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

    let mut columns: Option<Vec<String>> = None;
    let mut rows: Vec<Row> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        match &columns {
            None => {
                columns = Some(record.iter().map(normalize_header).collect());
            }
            Some(headers) => {
                if record.iter().all(|cell| cell.trim().is_empty()) {
                    continue;
                }
                let mut row = Row::new(rows.len());
                for (idx, header) in headers.iter().enumerate() {
                    let raw = record.get(idx).unwrap_or("");
                    row.set(header.clone(), CellValue::from_raw(raw));
                }
                rows.push(row);
            }
        }
    }

    let mut table = Table::new(dataset, columns.unwrap_or_default());
    for row in rows {
        table.push_row(row);
    }
    Ok(table)
}

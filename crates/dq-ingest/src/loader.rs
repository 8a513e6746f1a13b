//! Raw dataset loading with column-presence checks.

use std::path::Path;

use tracing::{info, warn};

use dq_model::schema::{raw_file_name, required_columns};
use dq_model::{Dataset, RawBundle, Table};

use crate::csv_table::read_table;
use crate::error::{IngestError, Result};

/// Load one raw dataset from `dir` and verify its required columns.
pub fn load_dataset(dir: &Path, dataset: Dataset) -> Result<Table> {
    let path = dir.join(raw_file_name(dataset));
    let table = read_table(&path, dataset)?;

    let missing: Vec<String> = required_columns(dataset)
        .iter()
        .filter(|column| !table.has_column(column))
        .map(|column| (*column).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(IngestError::MissingColumns {
            dataset,
            columns: missing,
        });
    }

    if table.is_empty() {
        warn!(dataset = %dataset, "dataset is empty");
    }
    info!(dataset = %dataset, rows = table.len(), "loaded raw dataset");
    Ok(table)
}

/// Load all four raw datasets. Any failure aborts the whole run before any
/// cleaning starts; a partially loaded bundle is never returned.
pub fn load_raw_bundle(dir: &Path) -> Result<RawBundle> {
    Ok(RawBundle {
        customers: load_dataset(dir, Dataset::Customers)?,
        products: load_dataset(dir, Dataset::Products)?,
        orders: load_dataset(dir, Dataset::Orders)?,
        order_items: load_dataset(dir, Dataset::OrderItems)?,
    })
}

//! Shared request/response types for the cleaning pipeline.

use serde::{Deserialize, Serialize};

use crate::audit::{CleaningLogEntry, IssueSummary, ValidationErrorEntry};
use crate::table::Table;
use crate::Dataset;

/// All four entity tables of one run. Holding the tables by field makes a
/// partially-loaded bundle unrepresentable: either every raw file loaded or
/// the run aborted before cleaning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableBundle {
    pub customers: Table,
    pub products: Table,
    pub orders: Table,
    pub order_items: Table,
}

pub type RawBundle = TableBundle;
pub type CleanedBundle = TableBundle;

impl TableBundle {
    pub fn get(&self, dataset: Dataset) -> &Table {
        match dataset {
            Dataset::Customers => &self.customers,
            Dataset::Products => &self.products,
            Dataset::Orders => &self.orders,
            Dataset::OrderItems => &self.order_items,
        }
    }

    /// Tables in cleaning order.
    pub fn iter(&self) -> impl Iterator<Item = (Dataset, &Table)> {
        Dataset::ALL.into_iter().map(|dataset| (dataset, self.get(dataset)))
    }
}

/// Raw/clean row counts for one dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub dataset: Dataset,
    pub raw_rows: usize,
    pub clean_rows: usize,
    pub removed: usize,
    pub pct_removed: f64,
}

impl DatasetSummary {
    pub fn new(dataset: Dataset, raw_rows: usize, clean_rows: usize) -> Self {
        let removed = raw_rows.saturating_sub(clean_rows);
        let pct_removed = if raw_rows == 0 {
            0.0
        } else {
            removed as f64 / raw_rows as f64 * 100.0
        };
        Self {
            dataset,
            raw_rows,
            clean_rows,
            removed,
            pct_removed,
        }
    }
}

/// Final report of one pipeline run: per-dataset counts plus the merged
/// audit trail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineReport {
    pub summaries: Vec<DatasetSummary>,
    pub cleaning_log: Vec<CleaningLogEntry>,
    pub validation_errors: Vec<ValidationErrorEntry>,
    pub error_summary: Vec<IssueSummary>,
}

//! Append-only audit trail of cleaning actions and validation errors.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Dataset;

/// Maximum length of the offending value kept in a validation error record.
pub const VALUE_SNIPPET_MAX: usize = 50;

/// What a cleaning action did to the rows it touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Rows were dropped from the table.
    Removal,
    /// Rows were corrected in place and kept.
    Repair,
}

/// Every corrective action the cleaners can take, by its audit label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CleaningAction {
    DuplicatesRemoved,
    DuplicateIdsRemoved,
    MissingCriticalRemoved,
    MissingProductName,
    InvalidPriceRemoved,
    NegativeStockFixed,
    MissingOrderDate,
    FutureDatesRemoved,
    InvalidStatusRemoved,
    OrphanedCustomerId,
    OrphanedOrderId,
    OrphanedProductId,
    InvalidQuantityRemoved,
}

impl CleaningAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DuplicatesRemoved => "duplicates_removed",
            Self::DuplicateIdsRemoved => "duplicate_ids_removed",
            Self::MissingCriticalRemoved => "missing_critical_removed",
            Self::MissingProductName => "missing_product_name",
            Self::InvalidPriceRemoved => "invalid_price_removed",
            Self::NegativeStockFixed => "negative_stock_fixed",
            Self::MissingOrderDate => "missing_order_date",
            Self::FutureDatesRemoved => "future_dates_removed",
            Self::InvalidStatusRemoved => "invalid_status_removed",
            Self::OrphanedCustomerId => "orphaned_customer_id",
            Self::OrphanedOrderId => "orphaned_order_id",
            Self::OrphanedProductId => "orphaned_product_id",
            Self::InvalidQuantityRemoved => "invalid_quantity_removed",
        }
    }

    /// Repairs keep the row; everything else removes it. Summaries must never
    /// count a repair in a removal bucket.
    pub fn kind(self) -> ActionKind {
        match self {
            Self::NegativeStockFixed => ActionKind::Repair,
            _ => ActionKind::Removal,
        }
    }
}

impl fmt::Display for CleaningAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a recorded field-level validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    InvalidFormat,
}

impl IssueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidFormat => "invalid_format",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rule application: recorded even when `rows_affected` is zero, so the
/// audit trail has a fixed shape per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningLogEntry {
    pub dataset: Dataset,
    pub action: CleaningAction,
    pub rows_affected: usize,
}

/// One individually failing field value. A row can contribute several of
/// these (e.g. bad email and bad phone).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrorEntry {
    pub dataset: Dataset,
    pub row: usize,
    pub column: String,
    pub issue: IssueKind,
    /// Offending value, truncated to [`VALUE_SNIPPET_MAX`] characters.
    pub value: String,
}

/// Occurrence count for one `(dataset, issue)` group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueSummary {
    pub dataset: Dataset,
    pub issue: IssueKind,
    pub count: usize,
}

/// Accumulator for one pipeline run, passed by value through the cleaners
/// and returned with the result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditLog {
    cleaning: Vec<CleaningLogEntry>,
    errors: Vec<ValidationErrorEntry>,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_action(&mut self, dataset: Dataset, action: CleaningAction, rows_affected: usize) {
        self.cleaning.push(CleaningLogEntry {
            dataset,
            action,
            rows_affected,
        });
    }

    pub fn record_error(
        &mut self,
        dataset: Dataset,
        row: usize,
        column: &str,
        issue: IssueKind,
        value: &str,
    ) {
        let snippet: String = value.chars().take(VALUE_SNIPPET_MAX).collect();
        self.errors.push(ValidationErrorEntry {
            dataset,
            row,
            column: column.to_string(),
            issue,
            value: snippet,
        });
    }

    pub fn cleaning_entries(&self) -> &[CleaningLogEntry] {
        &self.cleaning
    }

    pub fn validation_errors(&self) -> &[ValidationErrorEntry] {
        &self.errors
    }

    /// Total rows removed from `dataset` across all removal-kind entries.
    /// Repairs do not count.
    pub fn rows_removed(&self, dataset: Dataset) -> usize {
        self.cleaning
            .iter()
            .filter(|entry| entry.dataset == dataset && entry.action.kind() == ActionKind::Removal)
            .map(|entry| entry.rows_affected)
            .sum()
    }

    /// Validation errors grouped by `(dataset, issue)` with counts.
    pub fn error_summary(&self) -> Vec<IssueSummary> {
        let mut counts: BTreeMap<(Dataset, IssueKind), usize> = BTreeMap::new();
        for error in &self.errors {
            *counts.entry((error.dataset, error.issue)).or_default() += 1;
        }
        counts
            .into_iter()
            .map(|((dataset, issue), count)| IssueSummary {
                dataset,
                issue,
                count,
            })
            .collect()
    }
}

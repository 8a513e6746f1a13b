//! Declared cleaning rules.
//!
//! Each entity cleaner is an ordered rule table executed by the engine in
//! [`crate::engine`]. Optional-column behavior is part of the declaration
//! (`LogInvalidField` skips tables that lack the column), not a runtime
//! branch inside the cleaner.

use dq_model::{CleaningAction, Dataset};
use dq_validate::{
    is_valid_date, is_valid_email, is_valid_order_status, is_valid_phone, is_valid_price,
    is_valid_quantity,
};

use crate::context::CleanContext;

/// Field-level predicate, dispatched against the run context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldCheck {
    Email,
    Phone,
    Price,
    Quantity,
    Date,
    Status,
}

impl FieldCheck {
    pub fn is_valid(self, value: Option<&str>, ctx: &CleanContext) -> bool {
        match self {
            Self::Email => is_valid_email(value),
            Self::Phone => is_valid_phone(value),
            Self::Price => is_valid_price(value),
            Self::Quantity => is_valid_quantity(value),
            Self::Date => is_valid_date(value, ctx.now),
            Self::Status => is_valid_order_status(value),
        }
    }
}

/// One step of an entity's cleaning sequence.
///
/// Removal and repair rules always record a [`dq_model::CleaningLogEntry`],
/// even for zero affected rows. `LogInvalidField` records per-value
/// validation errors and never touches the row (advisory). `TrimWhitespace`
/// is a silent normalization step.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Drop later occurrences of fully identical rows.
    DropExactDuplicates { action: CleaningAction },
    /// Drop later occurrences of a repeated id value. Missing ids group
    /// together, so the second null-id row counts as a duplicate.
    DropDuplicateIds {
        column: &'static str,
        action: CleaningAction,
    },
    /// Drop rows where any listed column is missing.
    DropMissing {
        columns: &'static [&'static str],
        action: CleaningAction,
    },
    /// Drop rows where the field fails its check.
    DropInvalidField {
        column: &'static str,
        check: FieldCheck,
        action: CleaningAction,
    },
    /// Record a validation error for each failing value; keep the row.
    /// Skipped entirely when the table lacks the column.
    LogInvalidField {
        column: &'static str,
        check: FieldCheck,
    },
    /// Replace negative numeric values with zero in place.
    /// Skipped entirely when the table lacks the column.
    ClampNegativeToZero {
        column: &'static str,
        action: CleaningAction,
    },
    /// Drop rows whose foreign key is absent from the cleaned parent table.
    DropOrphans {
        column: &'static str,
        parent: Dataset,
        parent_column: &'static str,
        action: CleaningAction,
    },
    /// Trim leading/trailing whitespace on every text cell.
    TrimWhitespace,
}

//! Rule-table execution.
//!
//! The engine consumes a raw table and an ordered rule slice and produces
//! the cleaned table plus audit entries. It never fails: the worst outcome
//! for any rule is an empty surviving row set.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, warn};

use dq_model::{AuditLog, CellValue, Dataset, IssueKind, Row, Table};

use crate::context::CleanContext;
use crate::rules::Rule;

/// Already-cleaned parent tables available to foreign-key rules.
#[derive(Debug, Default)]
pub struct ParentTables<'a> {
    tables: BTreeMap<Dataset, &'a Table>,
}

impl<'a> ParentTables<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, dataset: Dataset, table: &'a Table) -> Self {
        self.tables.insert(dataset, table);
        self
    }

    pub fn get(&self, dataset: Dataset) -> Option<&'a Table> {
        self.tables.get(&dataset).copied()
    }
}

/// Apply `rules` in order to `raw`, recording every action in `log`.
pub fn apply_rules(
    raw: &Table,
    rules: &[Rule],
    parents: &ParentTables<'_>,
    ctx: &CleanContext,
    log: &mut AuditLog,
) -> Table {
    let dataset = raw.dataset;
    let mut rows: Vec<Row> = raw.rows.clone();

    for rule in rules {
        match rule {
            Rule::DropExactDuplicates { action } => {
                let columns = raw.columns.clone();
                let mut seen: BTreeSet<Vec<CellValue>> = BTreeSet::new();
                let (kept, removed) = retain_counted(rows, |row| {
                    let key: Vec<CellValue> =
                        columns.iter().map(|column| row.cell(column).clone()).collect();
                    seen.insert(key)
                });
                rows = kept;
                log.record_action(dataset, *action, removed);
            }
            Rule::DropDuplicateIds { column, action } => {
                let mut seen: BTreeSet<Option<String>> = BTreeSet::new();
                let (kept, removed) = retain_counted(rows, |row| {
                    seen.insert(row.text(column).map(str::to_owned))
                });
                rows = kept;
                log.record_action(dataset, *action, removed);
            }
            Rule::DropMissing { columns, action } => {
                let (kept, removed) = retain_counted(rows, |row| {
                    !columns.iter().any(|column| row.is_missing(column))
                });
                rows = kept;
                log.record_action(dataset, *action, removed);
            }
            Rule::DropInvalidField {
                column,
                check,
                action,
            } => {
                let (kept, removed) =
                    retain_counted(rows, |row| check.is_valid(row.text(column), ctx));
                rows = kept;
                log.record_action(dataset, *action, removed);
            }
            Rule::LogInvalidField { column, check } => {
                if !raw.has_column(column) {
                    continue;
                }
                for row in &rows {
                    let value = row.text(column);
                    if !check.is_valid(value, ctx) {
                        log.record_error(
                            dataset,
                            row.index,
                            column,
                            IssueKind::InvalidFormat,
                            value.unwrap_or(""),
                        );
                    }
                }
            }
            Rule::ClampNegativeToZero { column, action } => {
                if !raw.has_column(column) {
                    continue;
                }
                let mut repaired = 0usize;
                for row in &mut rows {
                    let negative = row
                        .text(column)
                        .and_then(|raw_value| raw_value.trim().parse::<f64>().ok())
                        .is_some_and(|value| value < 0.0);
                    if negative {
                        row.set(*column, CellValue::Text("0".to_string()));
                        repaired += 1;
                    }
                }
                log.record_action(dataset, *action, repaired);
            }
            Rule::DropOrphans {
                column,
                parent,
                parent_column,
                action,
            } => {
                let valid = match parents.get(*parent) {
                    Some(table) => dq_validate::id_set(table, parent_column),
                    None => {
                        warn!(dataset = %dataset, parent = %parent, "missing parent table for foreign-key rule");
                        BTreeSet::new()
                    }
                };
                let (kept, removed) = retain_counted(rows, |row| {
                    row.text(column).is_some_and(|value| valid.contains(value))
                });
                rows = kept;
                log.record_action(dataset, *action, removed);
            }
            Rule::TrimWhitespace => {
                for row in &mut rows {
                    for value in row.cells.values_mut() {
                        if let CellValue::Text(text) = value {
                            let trimmed = text.trim();
                            if trimmed.is_empty() {
                                *value = CellValue::Missing;
                            } else if trimmed.len() != text.len() {
                                *value = CellValue::Text(trimmed.to_string());
                            }
                        }
                    }
                }
            }
        }
        debug!(dataset = %dataset, rule = rule_name(rule), surviving = rows.len(), "applied rule");
    }

    raw.with_rows(rows)
}

/// Keep rows the predicate accepts, in order; return the removed count.
fn retain_counted(rows: Vec<Row>, mut keep: impl FnMut(&Row) -> bool) -> (Vec<Row>, usize) {
    let before = rows.len();
    let kept: Vec<Row> = rows.into_iter().filter(|row| keep(row)).collect();
    let removed = before - kept.len();
    (kept, removed)
}

fn rule_name(rule: &Rule) -> &'static str {
    match rule {
        Rule::DropExactDuplicates { .. } => "drop_exact_duplicates",
        Rule::DropDuplicateIds { .. } => "drop_duplicate_ids",
        Rule::DropMissing { .. } => "drop_missing",
        Rule::DropInvalidField { .. } => "drop_invalid_field",
        Rule::LogInvalidField { .. } => "log_invalid_field",
        Rule::ClampNegativeToZero { .. } => "clamp_negative_to_zero",
        Rule::DropOrphans { .. } => "drop_orphans",
        Rule::TrimWhitespace => "trim_whitespace",
    }
}

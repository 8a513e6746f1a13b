//! Set-based helpers: duplicate detection, missing-value detection and
//! foreign-key membership.
//!
//! All helpers return row positions within the given table, in row order.

use std::collections::{BTreeMap, BTreeSet};

use dq_model::Table;

/// Positions of all rows whose `id_column` value occurs more than once.
/// Every occurrence is reported, not just the extras. Missing values group
/// together, so two rows with a null id count as duplicates of each other.
pub fn find_duplicates(table: &Table, id_column: &str) -> Vec<usize> {
    let mut occurrences: BTreeMap<Option<String>, usize> = BTreeMap::new();
    for row in &table.rows {
        let key = row.text(id_column).map(str::to_owned);
        *occurrences.entry(key).or_default() += 1;
    }
    table
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| {
            let key = row.text(id_column).map(str::to_owned);
            occurrences.get(&key).copied().unwrap_or(0) > 1
        })
        .map(|(pos, _)| pos)
        .collect()
}

/// Positions of rows where any of `required_columns` is missing.
pub fn find_missing_values(table: &Table, required_columns: &[&str]) -> Vec<usize> {
    table
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| required_columns.iter().any(|column| row.is_missing(column)))
        .map(|(pos, _)| pos)
        .collect()
}

/// The set of non-missing values in `column`, for foreign-key membership.
pub fn id_set(table: &Table, column: &str) -> BTreeSet<String> {
    table
        .rows
        .iter()
        .filter_map(|row| row.text(column).map(str::to_owned))
        .collect()
}

/// Positions of rows whose `fk_column` value is absent from the reference
/// table's id set. Missing reference ids never vouch for anything, and a
/// missing foreign-key cell is itself orphaned.
pub fn check_foreign_key(
    table: &Table,
    fk_column: &str,
    reference: &Table,
    ref_column: &str,
) -> Vec<usize> {
    let valid = id_set(reference, ref_column);
    table
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| match row.text(fk_column) {
            Some(value) => !valid.contains(value),
            None => true,
        })
        .map(|(pos, _)| pos)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dq_model::{CellValue, Dataset, Row, Table};

    fn table(dataset: Dataset, columns: &[&str], rows: &[&[Option<&str>]]) -> Table {
        let mut table = Table::new(dataset, columns.iter().map(|c| (*c).to_string()).collect());
        for (index, cells) in rows.iter().enumerate() {
            let mut row = Row::new(index);
            for (column, cell) in columns.iter().zip(cells.iter()) {
                let value = match cell {
                    Some(text) => CellValue::Text((*text).to_string()),
                    None => CellValue::Missing,
                };
                row.set(*column, value);
            }
            table.push_row(row);
        }
        table
    }

    #[test]
    fn duplicates_report_every_occurrence() {
        let orders = table(
            Dataset::Orders,
            &["order_id"],
            &[&[Some("1")], &[Some("2")], &[Some("1")], &[Some("1")]],
        );
        assert_eq!(find_duplicates(&orders, "order_id"), vec![0, 2, 3]);
    }

    #[test]
    fn missing_ids_group_as_duplicates() {
        let orders = table(Dataset::Orders, &["order_id"], &[&[None], &[Some("1")], &[None]]);
        assert_eq!(find_duplicates(&orders, "order_id"), vec![0, 2]);
    }

    #[test]
    fn missing_values_checks_every_required_column() {
        let customers = table(
            Dataset::Customers,
            &["customer_id", "first_name"],
            &[
                &[Some("1"), Some("Ada")],
                &[None, Some("Grace")],
                &[Some("3"), None],
            ],
        );
        assert_eq!(
            find_missing_values(&customers, &["customer_id", "first_name"]),
            vec![1, 2]
        );
    }

    #[test]
    fn foreign_key_excludes_missing_reference_ids() {
        let customers = table(Dataset::Customers, &["customer_id"], &[&[Some("1")], &[None]]);
        let orders = table(
            Dataset::Orders,
            &["customer_id"],
            &[&[Some("1")], &[Some("999")], &[None]],
        );
        assert_eq!(check_foreign_key(&orders, "customer_id", &customers, "customer_id"), vec![1, 2]);
    }
}

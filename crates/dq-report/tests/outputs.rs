use std::fs;

use tempfile::TempDir;

use dq_model::{
    AuditLog, CellValue, CleaningAction, Dataset, IssueKind, PipelineReport, Row, Table,
    TableBundle,
};
use dq_report::write_outputs;

fn tiny_table(dataset: Dataset, columns: &[&str], rows: &[&[&str]]) -> Table {
    let mut table = Table::new(dataset, columns.iter().map(|c| (*c).to_string()).collect());
    for (index, cells) in rows.iter().enumerate() {
        let mut row = Row::new(index);
        for (column, cell) in columns.iter().zip(cells.iter()) {
            row.set(*column, CellValue::from_raw(cell));
        }
        table.push_row(row);
    }
    table
}

#[test]
fn writes_all_output_files() {
    let dir = TempDir::new().unwrap();
    let cleaned = TableBundle {
        customers: tiny_table(
            Dataset::Customers,
            &["customer_id", "first_name", "last_name", "email"],
            &[&["1", "Ada", "Lovelace", ""]],
        ),
        products: tiny_table(Dataset::Products, &["product_id", "product_name", "price"], &[]),
        orders: tiny_table(Dataset::Orders, &["order_id", "customer_id"], &[]),
        order_items: tiny_table(Dataset::OrderItems, &["order_item_id"], &[]),
    };
    let mut log = AuditLog::new();
    log.record_action(Dataset::Customers, CleaningAction::DuplicatesRemoved, 0);
    log.record_error(Dataset::Customers, 0, "email", IssueKind::InvalidFormat, "");
    let report = PipelineReport {
        summaries: vec![],
        cleaning_log: log.cleaning_entries().to_vec(),
        validation_errors: log.validation_errors().to_vec(),
        error_summary: log.error_summary(),
    };

    let out = write_outputs(&dir.path().join("cleaned"), &cleaned, &report).unwrap();
    assert_eq!(out.cleaned.len(), 4);

    let customers = fs::read_to_string(&out.cleaned[0]).unwrap();
    assert!(customers.starts_with("customer_id,first_name,last_name,email\n"));
    // Missing cell renders as an empty field.
    assert!(customers.contains("1,Ada,Lovelace,\n"));

    let summary = fs::read_to_string(&out.cleaning_summary).unwrap();
    assert!(summary.contains("customers,duplicates_removed,0"));

    let errors = fs::read_to_string(&out.validation_errors).unwrap();
    assert!(errors.starts_with("dataset,row,column,issue,value\n"));
    assert!(errors.contains("customers,0,email,invalid_format,"));
}

//! Whole-pipeline properties: referential closure, uniqueness, count
//! conservation and idempotence.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveDateTime};

use dq_clean::{run_pipeline, CleanContext};
use dq_model::{CellValue, Dataset, RawBundle, Row, Table};

fn reference_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 15)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn table(dataset: Dataset, columns: &[&str], rows: &[&[&str]]) -> Table {
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

/// A bundle with a representative mix of problems in every dataset.
fn messy_bundle() -> RawBundle {
    RawBundle {
        customers: table(
            Dataset::Customers,
            &["customer_id", "first_name", "last_name", "email", "phone"],
            &[
                &["1", "Ada", "Lovelace", "ada@example.com", "9876543210"],
                &["1", "Ada", "Lovelace", "ada@example.com", "9876543210"], // exact dup
                &["2", "Grace", "Hopper", "bad-email", "12345"],            // advisory only
                &["", "Mary", "Shelley", "mary@example.com", ""],           // missing id
                &["3", "Joan", "Clarke", "joan@example.com", "1112223334"],
            ],
        ),
        products: table(
            Dataset::Products,
            &["product_id", "product_name", "price", "stock_quantity"],
            &[
                &["10", "Widget", "9.99", "5"],
                &["11", "Gadget", "-5", "2"],  // invalid price
                &["12", "Gizmo", "4.50", "-3"], // negative stock, repaired
                &["10", "Widget copy", "1.00", "1"], // duplicate id
                &["13", "", "2.00", "0"],      // missing name
            ],
        ),
        orders: table(
            Dataset::Orders,
            &["order_id", "customer_id", "order_date", "order_status", "total_amount"],
            &[
                &["5", "1", "2024-01-10", "Pending", "19.98"],
                &["5", "2", "2024-02-02", "Completed", "4.50"], // duplicate id
                &["6", "999", "2024-01-11", "Completed", "9.99"], // orphaned customer
                &["7", "2", "2030-01-01", "Pending", "1.00"],   // future date
                &["8", "3", "2024-03-03", "Shipped", "2.00"],   // invalid status
                &["9", "3", "2024-03-04", "Cancelled", "4.50"],
            ],
        ),
        order_items: table(
            Dataset::OrderItems,
            &["order_item_id", "order_id", "product_id", "quantity", "price_per_unit"],
            &[
                &["100", "5", "10", "2", "9.99"],
                &["101", "5", "10", "0", "9.99"],  // invalid quantity
                &["102", "9", "12", "1", "4.50"],
                &["103", "42", "10", "1", "9.99"], // orphaned order
                &["104", "9", "11", "1", "4.50"],  // product 11 was removed
            ],
        ),
    }
}

fn ids(table: &Table, column: &str) -> Vec<String> {
    table
        .rows
        .iter()
        .filter_map(|row| row.text(column).map(str::to_owned))
        .collect()
}

#[test]
fn referential_closure_holds() {
    let outcome = run_pipeline(&messy_bundle(), &CleanContext::fixed(reference_time()));
    let cleaned = &outcome.cleaned;

    let customer_ids: BTreeSet<_> = ids(&cleaned.customers, "customer_id").into_iter().collect();
    let order_ids: BTreeSet<_> = ids(&cleaned.orders, "order_id").into_iter().collect();
    let product_ids: BTreeSet<_> = ids(&cleaned.products, "product_id").into_iter().collect();

    for row in &cleaned.orders.rows {
        assert!(customer_ids.contains(row.text("customer_id").unwrap()));
    }
    for row in &cleaned.order_items.rows {
        assert!(order_ids.contains(row.text("order_id").unwrap()));
        assert!(product_ids.contains(row.text("product_id").unwrap()));
    }
}

#[test]
fn surviving_ids_are_unique() {
    let outcome = run_pipeline(&messy_bundle(), &CleanContext::fixed(reference_time()));
    let cleaned = &outcome.cleaned;

    for (table, column) in [
        (&cleaned.customers, "customer_id"),
        (&cleaned.products, "product_id"),
        (&cleaned.orders, "order_id"),
    ] {
        let all = ids(table, column);
        let distinct: BTreeSet<_> = all.iter().collect();
        assert_eq!(all.len(), distinct.len(), "{column} values repeat");
    }
}

#[test]
fn stock_quantities_are_non_negative() {
    let outcome = run_pipeline(&messy_bundle(), &CleanContext::fixed(reference_time()));
    for row in &outcome.cleaned.products.rows {
        if let Some(stock) = row.text("stock_quantity") {
            assert!(stock.parse::<f64>().unwrap() >= 0.0);
        }
    }
}

#[test]
fn counts_are_conserved() {
    // raw = clean + sum of removal-kind entries, per dataset. Repairs must
    // not disturb the balance.
    let raw = messy_bundle();
    let outcome = run_pipeline(&raw, &CleanContext::fixed(reference_time()));

    for dataset in Dataset::ALL {
        let raw_rows = raw.get(dataset).len();
        let clean_rows = outcome.cleaned.get(dataset).len();
        let removed = outcome.audit.rows_removed(dataset);
        assert_eq!(raw_rows, clean_rows + removed, "{dataset} counts do not balance");
    }
}

#[test]
fn report_matches_audit() {
    let outcome = run_pipeline(&messy_bundle(), &CleanContext::fixed(reference_time()));
    let report = &outcome.report;

    assert_eq!(report.summaries.len(), 4);
    assert_eq!(report.summaries[0].dataset, Dataset::Customers);
    assert_eq!(report.cleaning_log, outcome.audit.cleaning_entries());
    assert_eq!(report.validation_errors, outcome.audit.validation_errors());
    // The messy bundle produces customer email/phone errors only.
    assert_eq!(report.error_summary.len(), 1);
    assert_eq!(report.error_summary[0].dataset, Dataset::Customers);
}

#[test]
fn cleaning_is_idempotent() {
    let ctx = CleanContext::fixed(reference_time());
    let first = run_pipeline(&messy_bundle(), &ctx);
    let second = run_pipeline(&first.cleaned, &ctx);

    assert_eq!(second.cleaned.customers, first.cleaned.customers);
    assert_eq!(second.cleaned.products, first.cleaned.products);
    assert_eq!(second.cleaned.orders, first.cleaned.orders);
    assert_eq!(second.cleaned.order_items, first.cleaned.order_items);
    for dataset in Dataset::ALL {
        assert_eq!(second.audit.rows_removed(dataset), 0);
    }
}

#[test]
fn worst_case_still_returns_complete_tables() {
    // Every row fails somewhere: cleaners still return (empty) tables and a
    // full set of log entries.
    let raw = RawBundle {
        customers: table(
            Dataset::Customers,
            &["customer_id", "first_name", "last_name"],
            &[&["", "", ""]],
        ),
        products: table(
            Dataset::Products,
            &["product_id", "product_name", "price", "stock_quantity"],
            &[&["1", "Thing", "-2", "1"]],
        ),
        orders: table(
            Dataset::Orders,
            &["order_id", "customer_id", "order_date", "order_status"],
            &[&["1", "1", "2024-01-01", "Pending"]],
        ),
        order_items: table(
            Dataset::OrderItems,
            &["order_item_id", "order_id", "product_id", "quantity", "price_per_unit"],
            &[&["1", "1", "1", "1", "1.00"]],
        ),
    };
    let outcome = run_pipeline(&raw, &CleanContext::fixed(reference_time()));

    for dataset in Dataset::ALL {
        assert!(outcome.cleaned.get(dataset).is_empty(), "{dataset} should be empty");
    }
    // 3 customer rules + 4 product + 5 order + 4 order-item rules.
    assert_eq!(outcome.audit.cleaning_entries().len(), 16);
}

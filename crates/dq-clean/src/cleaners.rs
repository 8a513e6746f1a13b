//! Per-entity rule tables and cleaning entry points.
//!
//! The rule order inside each table is authoritative. It decides which
//! duplicate instance survives and which removal bucket a bad row lands in,
//! so the audit trail is only reproducible if the order never changes.

use tracing::info;

use dq_model::schema::{customers, order_items, orders, products};
use dq_model::{AuditLog, CleaningAction, Dataset, Table};

use crate::context::CleanContext;
use crate::engine::{apply_rules, ParentTables};
use crate::rules::{FieldCheck, Rule};

/// Customers: hard removal for identity problems, advisory logging for
/// contact fields. A bad email or phone never removes the row.
pub fn customer_rules() -> Vec<Rule> {
    vec![
        Rule::DropExactDuplicates {
            action: CleaningAction::DuplicatesRemoved,
        },
        Rule::DropDuplicateIds {
            column: customers::CUSTOMER_ID,
            action: CleaningAction::DuplicateIdsRemoved,
        },
        Rule::DropMissing {
            columns: &[
                customers::CUSTOMER_ID,
                customers::FIRST_NAME,
                customers::LAST_NAME,
            ],
            action: CleaningAction::MissingCriticalRemoved,
        },
        Rule::LogInvalidField {
            column: customers::EMAIL,
            check: FieldCheck::Email,
        },
        Rule::LogInvalidField {
            column: customers::PHONE,
            check: FieldCheck::Phone,
        },
        // Last, so the trim only touches surviving rows.
        Rule::TrimWhitespace,
    ]
}

/// Products: price and name filtering come before id-dedup so the first
/// retained duplicate is chosen among already-valid rows. Negative stock is
/// repaired in place, never removed.
pub fn product_rules() -> Vec<Rule> {
    vec![
        Rule::DropMissing {
            columns: &[products::PRODUCT_NAME],
            action: CleaningAction::MissingProductName,
        },
        Rule::DropInvalidField {
            column: products::PRICE,
            check: FieldCheck::Price,
            action: CleaningAction::InvalidPriceRemoved,
        },
        Rule::ClampNegativeToZero {
            column: products::STOCK_QUANTITY,
            action: CleaningAction::NegativeStockFixed,
        },
        Rule::DropDuplicateIds {
            column: products::PRODUCT_ID,
            action: CleaningAction::DuplicateIdsRemoved,
        },
    ]
}

/// Orders: integrity, date and status filtering run on raw content first;
/// id-dedup runs last.
pub fn order_rules() -> Vec<Rule> {
    vec![
        Rule::DropMissing {
            columns: &[orders::ORDER_DATE],
            action: CleaningAction::MissingOrderDate,
        },
        Rule::DropInvalidField {
            column: orders::ORDER_DATE,
            check: FieldCheck::Date,
            action: CleaningAction::FutureDatesRemoved,
        },
        Rule::DropInvalidField {
            column: orders::ORDER_STATUS,
            check: FieldCheck::Status,
            action: CleaningAction::InvalidStatusRemoved,
        },
        Rule::DropOrphans {
            column: orders::CUSTOMER_ID,
            parent: Dataset::Customers,
            parent_column: customers::CUSTOMER_ID,
            action: CleaningAction::OrphanedCustomerId,
        },
        Rule::DropDuplicateIds {
            column: orders::ORDER_ID,
            action: CleaningAction::DuplicateIdsRemoved,
        },
    ]
}

/// Order items: no duplicate-id step; line-item identity is not deduplicated.
pub fn order_item_rules() -> Vec<Rule> {
    vec![
        Rule::DropInvalidField {
            column: order_items::QUANTITY,
            check: FieldCheck::Quantity,
            action: CleaningAction::InvalidQuantityRemoved,
        },
        Rule::DropInvalidField {
            column: order_items::PRICE_PER_UNIT,
            check: FieldCheck::Price,
            action: CleaningAction::InvalidPriceRemoved,
        },
        Rule::DropOrphans {
            column: order_items::ORDER_ID,
            parent: Dataset::Orders,
            parent_column: orders::ORDER_ID,
            action: CleaningAction::OrphanedOrderId,
        },
        Rule::DropOrphans {
            column: order_items::PRODUCT_ID,
            parent: Dataset::Products,
            parent_column: products::PRODUCT_ID,
            action: CleaningAction::OrphanedProductId,
        },
    ]
}

pub fn clean_customers(raw: &Table, ctx: &CleanContext, log: &mut AuditLog) -> Table {
    run_cleaner(raw, &customer_rules(), &ParentTables::new(), ctx, log)
}

pub fn clean_products(raw: &Table, ctx: &CleanContext, log: &mut AuditLog) -> Table {
    run_cleaner(raw, &product_rules(), &ParentTables::new(), ctx, log)
}

pub fn clean_orders(
    raw: &Table,
    cleaned_customers: &Table,
    ctx: &CleanContext,
    log: &mut AuditLog,
) -> Table {
    let parents = ParentTables::new().with(Dataset::Customers, cleaned_customers);
    run_cleaner(raw, &order_rules(), &parents, ctx, log)
}

pub fn clean_order_items(
    raw: &Table,
    cleaned_orders: &Table,
    cleaned_products: &Table,
    ctx: &CleanContext,
    log: &mut AuditLog,
) -> Table {
    let parents = ParentTables::new()
        .with(Dataset::Orders, cleaned_orders)
        .with(Dataset::Products, cleaned_products);
    run_cleaner(raw, &order_item_rules(), &parents, ctx, log)
}

fn run_cleaner(
    raw: &Table,
    rules: &[Rule],
    parents: &ParentTables<'_>,
    ctx: &CleanContext,
    log: &mut AuditLog,
) -> Table {
    let cleaned = apply_rules(raw, rules, parents, ctx, log);
    info!(
        dataset = %raw.dataset,
        raw_rows = raw.len(),
        clean_rows = cleaned.len(),
        removed = raw.len() - cleaned.len(),
        "cleaned dataset"
    );
    cleaned
}

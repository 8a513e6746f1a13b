//! Column names and per-dataset schema facts.
//!
//! Column order in the raw files is irrelevant to semantics; these constants
//! exist so rule tables and foreign-key checks name columns in one place.

use crate::Dataset;

pub mod customers {
    pub const CUSTOMER_ID: &str = "customer_id";
    pub const FIRST_NAME: &str = "first_name";
    pub const LAST_NAME: &str = "last_name";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const CITY: &str = "city";
    pub const STATE: &str = "state";
}

pub mod products {
    pub const PRODUCT_ID: &str = "product_id";
    pub const PRODUCT_NAME: &str = "product_name";
    pub const CATEGORY: &str = "category";
    pub const PRICE: &str = "price";
    pub const STOCK_QUANTITY: &str = "stock_quantity";
}

pub mod orders {
    pub const ORDER_ID: &str = "order_id";
    pub const CUSTOMER_ID: &str = "customer_id";
    pub const ORDER_DATE: &str = "order_date";
    pub const ORDER_STATUS: &str = "order_status";
    pub const TOTAL_AMOUNT: &str = "total_amount";
}

pub mod order_items {
    pub const ORDER_ITEM_ID: &str = "order_item_id";
    pub const ORDER_ID: &str = "order_id";
    pub const PRODUCT_ID: &str = "product_id";
    pub const QUANTITY: &str = "quantity";
    pub const PRICE_PER_UNIT: &str = "price_per_unit";
}

/// Columns that must be present in the raw file for the load to succeed.
pub fn required_columns(dataset: Dataset) -> &'static [&'static str] {
    match dataset {
        Dataset::Customers => &[
            customers::CUSTOMER_ID,
            customers::FIRST_NAME,
            customers::LAST_NAME,
            customers::EMAIL,
        ],
        Dataset::Products => &[
            products::PRODUCT_ID,
            products::PRODUCT_NAME,
            products::CATEGORY,
            products::PRICE,
        ],
        Dataset::Orders => &[
            orders::ORDER_ID,
            orders::CUSTOMER_ID,
            orders::ORDER_DATE,
            orders::TOTAL_AMOUNT,
        ],
        Dataset::OrderItems => &[
            order_items::ORDER_ITEM_ID,
            order_items::ORDER_ID,
            order_items::PRODUCT_ID,
            order_items::QUANTITY,
        ],
    }
}

/// The raw CSV file name for a dataset.
pub fn raw_file_name(dataset: Dataset) -> &'static str {
    match dataset {
        Dataset::Customers => "raw_customers.csv",
        Dataset::Products => "raw_products.csv",
        Dataset::Orders => "raw_orders.csv",
        Dataset::OrderItems => "raw_order_items.csv",
    }
}

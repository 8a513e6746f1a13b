//! Pure, stateless validation predicates for the data-quality pipeline.
//!
//! Field predicates never panic and never perform I/O; a missing or
//! malformed value is simply invalid. Set helpers operate on whole tables
//! and return row positions for the cleaners to act on.

pub mod datetime;
pub mod field;
pub mod sets;

pub use datetime::{is_valid_date, parse_datetime};
pub use field::{
    is_valid_email, is_valid_order_status, is_valid_phone, is_valid_price, is_valid_quantity,
};
pub use sets::{check_foreign_key, find_duplicates, find_missing_values, id_set};

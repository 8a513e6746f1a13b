//! Single-field predicates.
//!
//! Every predicate is total: missing values, empty strings, and malformed
//! input return `false`, never an error. The predicates take the cell text
//! as `Option<&str>` so call sites do not special-case missing cells.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use dq_model::OrderStatus;

/// `local@domain.tld` shape: ASCII local part of letters, digits and
/// `._%+-`, dot-separated domain, final segment of at least two letters.
/// Case-sensitive, no normalization.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .unwrap_or_else(|error| unreachable!("email pattern is a constant: {error}"))
});

pub fn is_valid_email(value: Option<&str>) -> bool {
    match value {
        Some(email) if !email.is_empty() => EMAIL_PATTERN.is_match(email),
        _ => false,
    }
}

/// Strips every non-digit character and requires exactly 10 digits to
/// remain (fixed national format).
pub fn is_valid_phone(value: Option<&str>) -> bool {
    let Some(phone) = value else {
        return false;
    };
    if phone.is_empty() {
        return false;
    }
    let digits = phone.chars().filter(|ch| ch.is_ascii_digit()).count();
    digits == 10
}

/// Numeric and strictly positive. Zero and negative prices are invalid.
pub fn is_valid_price(value: Option<&str>) -> bool {
    value
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .is_some_and(|price| price > 0.0)
}

/// Integer and strictly positive.
pub fn is_valid_quantity(value: Option<&str>) -> bool {
    value
        .and_then(|raw| raw.trim().parse::<i64>().ok())
        .is_some_and(|quantity| quantity > 0)
}

/// Exact membership in the closed order-status set.
pub fn is_valid_order_status(value: Option<&str>) -> bool {
    value.is_some_and(|status| OrderStatus::from_str(status).is_ok())
}

//! Property tests for the field validators.

use proptest::prelude::*;

use dq_validate::{is_valid_phone, is_valid_price, is_valid_quantity};

proptest! {
    /// Any 10 digits stay valid no matter what separators surround them.
    #[test]
    fn phone_formatting_is_ignored(digits in "[0-9]{10}", sep in r"[ \-().+]{0,3}") {
        let formatted = format!("{sep}{}{sep}{}", &digits[..5], &digits[5..]);
        prop_assert!(is_valid_phone(Some(&formatted)));
    }

    /// Other digit counts are always invalid.
    #[test]
    fn phone_wrong_length_is_invalid(digits in "[0-9]{1,9}|[0-9]{11,14}") {
        prop_assert!(!is_valid_phone(Some(&digits)));
    }

    /// Sign decides price validity for every finite value.
    #[test]
    fn price_validity_matches_sign(value in -1.0e6f64..1.0e6) {
        let rendered = format!("{value}");
        prop_assert_eq!(is_valid_price(Some(&rendered)), value > 0.0);
    }

    /// Quantity validity matches integer sign.
    #[test]
    fn quantity_validity_matches_sign(value in -1000i64..1000) {
        let rendered = value.to_string();
        prop_assert_eq!(is_valid_quantity(Some(&rendered)), value > 0);
    }
}

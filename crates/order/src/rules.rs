//! Validation rules for the order form.
//!
//! Each check takes the candidate value for one field and reports the first
//! violation as the exact message the UI shows. The whole-form predicate
//! [`order_is_valid`] gates the submit control; it never produces a message
//! of its own.

use crate::draft::OrderDraft;

pub const FULL_NAME_MIN: usize = 3;
pub const FULL_NAME_MAX: usize = 20;

/// Accepted size values, in menu order.
pub const SIZES: &[&str] = &["S", "M", "L"];

pub const MSG_NAME_TOO_SHORT: &str = "full name must be at least 3 characters";
pub const MSG_NAME_TOO_LONG: &str = "full name must be at most 20 characters";
pub const MSG_SIZE_INCORRECT: &str = "size must be S or M or L";

/// Check a candidate full name.
///
/// The value is trimmed before length checks, so surrounding whitespace does
/// not count toward the limits. Length is measured in characters, not bytes.
/// An empty name fails the minimum-length check (the short message doubles
/// as the required-field message).
pub fn check_full_name(value: &str) -> Result<(), String> {
    let len = value.trim().chars().count();
    if len < FULL_NAME_MIN {
        return Err(MSG_NAME_TOO_SHORT.to_string());
    }
    if len > FULL_NAME_MAX {
        return Err(MSG_NAME_TOO_LONG.to_string());
    }
    Ok(())
}

/// Check a candidate size. Only the exact values in [`SIZES`] pass; the
/// empty placeholder value fails like any other stray string.
pub fn check_size(value: &str) -> Result<(), String> {
    if SIZES.contains(&value) {
        Ok(())
    } else {
        Err(MSG_SIZE_INCORRECT.to_string())
    }
}

/// Toppings are optional; any selection the draft allows is acceptable.
pub fn check_toppings(_ids: &[String]) -> Result<(), String> {
    Ok(())
}

/// Whole-form predicate: every field passes its rule.
pub fn order_is_valid(draft: &OrderDraft) -> bool {
    check_full_name(&draft.full_name).is_ok()
        && check_size(&draft.size).is_ok()
        && check_toppings(&draft.toppings).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_valid() {
        for name in ["Ali", "Rosa Diaz", " Alice ", "abcdefghijklmnopqrst"] {
            assert!(check_full_name(name).is_ok(), "expected OK for {name:?}");
        }
    }

    #[test]
    fn full_name_too_short() {
        for name in ["", "A", "Al", "  Al  ", "   "] {
            assert_eq!(
                check_full_name(name),
                Err(MSG_NAME_TOO_SHORT.to_string()),
                "expected short-name error for {name:?}"
            );
        }
    }

    #[test]
    fn full_name_too_long() {
        let long = "abcdefghijklmnopqrstu"; // 21 chars
        assert_eq!(check_full_name(long), Err(MSG_NAME_TOO_LONG.to_string()));
        // trailing whitespace does not count toward the limit
        let padded = format!("  {}  ", "abcdefghijklmnopqrst");
        assert!(check_full_name(&padded).is_ok());
    }

    #[test]
    fn full_name_counts_characters_not_bytes() {
        // 20 two-byte characters: fine by character count
        let name = "ä".repeat(20);
        assert!(check_full_name(&name).is_ok());
        assert!(check_full_name("äö").is_err());
    }

    #[test]
    fn size_valid() {
        for size in ["S", "M", "L"] {
            assert!(check_size(size).is_ok(), "expected OK for {size}");
        }
    }

    #[test]
    fn size_invalid() {
        for size in ["", "s", "XL", " S", "Small", "m "] {
            assert_eq!(
                check_size(size),
                Err(MSG_SIZE_INCORRECT.to_string()),
                "expected size error for {size:?}"
            );
        }
    }

    #[test]
    fn toppings_never_block() {
        assert!(check_toppings(&[]).is_ok());
        assert!(check_toppings(&["1".to_string(), "5".to_string()]).is_ok());
    }

    #[test]
    fn whole_form_predicate() {
        let mut draft = OrderDraft::new();
        assert!(!order_is_valid(&draft), "pristine draft must not validate");

        draft.full_name = "Rosa Diaz".into();
        assert!(!order_is_valid(&draft), "missing size must block");

        draft.size = "M".into();
        assert!(order_is_valid(&draft));

        draft.set_topping("1", true);
        draft.set_topping("4", true);
        assert!(order_is_valid(&draft), "toppings never block");

        draft.full_name = "Al".into();
        assert!(!order_is_valid(&draft));
    }
}

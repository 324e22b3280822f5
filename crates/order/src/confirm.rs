//! Confirmation text for accepted orders.

use crate::draft::OrderDraft;

/// Human-readable size word used in the confirmation text. Values that the
/// rules would reject fall through to "large"; callers build the message
/// from drafts that already validated.
fn size_word(size: &str) -> &'static str {
    match size {
        "S" => "small",
        "M" => "medium",
        _ => "large",
    }
}

/// Build the confirmation message for an order.
///
/// The name goes in as typed. One topping is "1 topping", several are
/// "n toppings", none keeps the plural: "no toppings".
pub fn confirmation_message(draft: &OrderDraft) -> String {
    let size = size_word(&draft.size);
    let count = draft.toppings.len();
    let toppings = match count {
        0 => "no toppings".to_string(),
        1 => "1 topping".to_string(),
        n => format!("{n} toppings"),
    };
    format!(
        "Thank you for your order, {}! Your {} pizza with {} is on the way.",
        draft.full_name, size, toppings
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn draft(name: &str, size: &str, toppings: &[&str]) -> OrderDraft {
        OrderDraft {
            full_name: name.to_string(),
            size: size.to_string(),
            toppings: toppings.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn no_toppings_keeps_the_plural() {
        assert_eq!(
            confirmation_message(&draft("Ann", "M", &[])),
            "Thank you for your order, Ann! Your medium pizza with no toppings is on the way."
        );
    }

    #[test]
    fn one_topping_is_singular() {
        assert_eq!(
            confirmation_message(&draft("Rosa Diaz", "S", &["3"])),
            "Thank you for your order, Rosa Diaz! Your small pizza with 1 topping is on the way."
        );
    }

    #[test]
    fn several_toppings_are_counted() {
        assert_eq!(
            confirmation_message(&draft("Terry Jeffords", "L", &["1", "4"])),
            "Thank you for your order, Terry Jeffords! Your large pizza with 2 toppings is on the way."
        );
    }

    #[test]
    fn name_goes_in_as_typed() {
        let msg = confirmation_message(&draft(" Amy  Santiago ", "M", &[]));
        assert!(msg.starts_with("Thank you for your order,  Amy  Santiago !"));
    }
}

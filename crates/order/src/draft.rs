//! The mutable order draft: what the form currently holds.

use crate::catalog;

/// Values captured while the order form is being filled in.
///
/// `size` stays a raw select value (`""` until the user picks one); whether
/// it is acceptable is the job of [`crate::rules`], not of this type.
/// Toppings hold catalog ids, each at most once, in the order they were
/// picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDraft {
    pub full_name: String,
    pub size: String,
    pub toppings: Vec<String>,
}

impl OrderDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or remove a topping. Ids outside the catalog are ignored; adding
    /// a present id or removing an absent one is a no-op. Returns whether
    /// the draft changed.
    pub fn set_topping(&mut self, id: &str, on: bool) -> bool {
        if !catalog::is_topping_id(id) {
            return false;
        }
        let pos = self.toppings.iter().position(|t| t == id);
        match (on, pos) {
            (true, None) => {
                self.toppings.push(id.to_string());
                true
            }
            (false, Some(i)) => {
                self.toppings.remove(i);
                true
            }
            _ => false,
        }
    }

    /// Whether a topping is currently selected.
    pub fn has_topping(&self, id: &str) -> bool {
        self.toppings.iter().any(|t| t == id)
    }

    /// Back to the pristine draft (empty name, no size, no toppings).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn toppings_stay_unique_and_ordered() {
        let mut draft = OrderDraft::new();
        assert!(draft.set_topping("2", true));
        assert!(draft.set_topping("4", true));
        assert!(!draft.set_topping("2", true), "re-adding must be a no-op");
        assert_eq!(draft.toppings, vec!["2".to_string(), "4".to_string()]);

        assert!(draft.set_topping("2", false));
        assert!(!draft.set_topping("2", false), "re-removing must be a no-op");
        assert_eq!(draft.toppings, vec!["4".to_string()]);
        assert!(draft.has_topping("4"));
        assert!(!draft.has_topping("2"));
    }

    #[test]
    fn unknown_topping_ids_are_rejected() {
        let mut draft = OrderDraft::new();
        assert!(!draft.set_topping("42", true));
        assert!(!draft.set_topping("", true));
        assert!(draft.toppings.is_empty());
    }

    #[test]
    fn reset_returns_to_defaults() {
        let mut draft = OrderDraft {
            full_name: "Rosa Diaz".into(),
            size: "M".into(),
            toppings: vec!["1".into(), "3".into()],
        };
        draft.reset();
        assert_eq!(draft, OrderDraft::default());
    }
}

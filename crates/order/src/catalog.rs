//! Static menu data: the topping catalog.

/// One selectable topping. `id` is the stable wire value sent to the
/// kitchen; `label` is what the UI shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToppingOption {
    pub id: &'static str,
    pub label: &'static str,
}

/// The catalog, in menu order. Fixed at compile time; ids are never reused.
pub const TOPPINGS: &[ToppingOption] = &[
    ToppingOption { id: "1", label: "Pepperoni" },
    ToppingOption { id: "2", label: "Green Peppers" },
    ToppingOption { id: "3", label: "Pineapple" },
    ToppingOption { id: "4", label: "Mushrooms" },
    ToppingOption { id: "5", label: "Ham" },
];

/// Look up a catalog entry by wire id.
pub fn topping_by_id(id: &str) -> Option<&'static ToppingOption> {
    TOPPINGS.iter().find(|t| t.id == id)
}

/// Whether `id` names a catalog entry.
pub fn is_topping_id(id: &str) -> bool {
    topping_by_id(id).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        for (i, a) in TOPPINGS.iter().enumerate() {
            for b in &TOPPINGS[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate catalog id {}", a.id);
            }
        }
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(topping_by_id("1").map(|t| t.label), Some("Pepperoni"));
        assert_eq!(topping_by_id("5").map(|t| t.label), Some("Ham"));
        assert!(topping_by_id("6").is_none());
        assert!(topping_by_id("").is_none());
        assert!(!is_topping_id("42"));
    }
}

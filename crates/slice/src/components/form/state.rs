//! Form runtime (mutable) state.
//!
//! Only the data structures and lightweight helpers representing the
//! *current editing state* of a form:
//!   * Captured scalar values (`values`)
//!   * Checked entries of checkbox groups (`checked`)
//!   * Per-field validation errors (`errors`)
//!
//! Kept free of UI / rendering concerns so it can be unit tested in
//! isolation; the validation dispatch (in `view.rs`) mutates `errors`
//! directly through the helpers below.

use std::collections::HashMap;

/// Mutable state captured while editing a form.
///
/// Fields:
/// - `values`:  Scalar (stringified) values for text / select fields.
/// - `checked`: Checked choice values per checkbox group. Each value occurs
///              at most once and keeps the order it was first checked in.
/// - `errors`:  Per-field validation errors.
#[derive(Default, Clone)]
pub struct FormState {
    pub values: HashMap<String, String>,
    pub checked: HashMap<String, Vec<String>>,
    pub errors: HashMap<String, String>,
}

impl FormState {
    /// Set (or replace) a scalar value for a field.
    pub fn set_value(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_string(), value.into());
    }

    /// Get a scalar value for a field (if present).
    pub fn get_value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|s| s.as_str())
    }

    /// Checked choice values of a checkbox group, in toggle order.
    pub fn checked_values(&self, key: &str) -> &[String] {
        self.checked.get(key).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Whether one choice value of a checkbox group is checked.
    pub fn is_checked(&self, key: &str, value: &str) -> bool {
        self.checked_values(key).iter().any(|v| v == value)
    }

    /// Check (`on = true`) or uncheck one choice value. Checking a present
    /// value or unchecking an absent one is a no-op. Returns whether the
    /// set changed.
    pub fn set_entry(&mut self, key: &str, value: &str, on: bool) -> bool {
        let entries = self.checked.entry(key.to_string()).or_default();
        let pos = entries.iter().position(|v| v == value);
        match (on, pos) {
            (true, None) => {
                entries.push(value.to_string());
                true
            }
            (false, Some(i)) => {
                entries.remove(i);
                true
            }
            _ => false,
        }
    }

    /// Flip one choice value; returns the new checked state.
    pub fn toggle_entry(&mut self, key: &str, value: &str) -> bool {
        let now = !self.is_checked(key, value);
        self.set_entry(key, value, now);
        now
    }

    /// Record a validation error for a field (replacing any previous one).
    pub fn set_error(&mut self, key: &str, message: impl Into<String>) {
        self.errors.insert(key.to_string(), message.into());
    }

    /// Clear the validation error for a field.
    pub fn clear_error(&mut self, key: &str) {
        self.errors.remove(key);
    }

    /// The validation error for a field (if any).
    pub fn error(&self, key: &str) -> Option<&str> {
        self.errors.get(key).map(|s| s.as_str())
    }

    /// Reset entered values (scalars + checked sets). Errors stay; whoever
    /// resets decides what happens to them.
    pub fn reset_values(&mut self) {
        self.values.clear();
        self.checked.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn scalar_values_roundtrip() {
        let mut state = FormState::default();
        assert_eq!(state.get_value("fullName"), None);
        state.set_value("fullName", "Rosa");
        state.set_value("fullName", "Rosa Diaz");
        assert_eq!(state.get_value("fullName"), Some("Rosa Diaz"));
    }

    #[test]
    fn checked_entries_stay_unique_and_ordered() {
        let mut state = FormState::default();
        assert!(state.set_entry("toppings", "3", true));
        assert!(state.set_entry("toppings", "1", true));
        assert!(!state.set_entry("toppings", "3", true));
        assert_eq!(state.checked_values("toppings"), ["3", "1"]);

        assert!(state.set_entry("toppings", "3", false));
        assert!(!state.set_entry("toppings", "3", false));
        assert_eq!(state.checked_values("toppings"), ["1"]);
    }

    #[test]
    fn toggle_flips_and_reports_new_state() {
        let mut state = FormState::default();
        assert!(state.toggle_entry("toppings", "2"));
        assert!(state.is_checked("toppings", "2"));
        assert!(!state.toggle_entry("toppings", "2"));
        assert!(!state.is_checked("toppings", "2"));
    }

    #[test]
    fn reset_values_keeps_errors() {
        let mut state = FormState::default();
        state.set_value("fullName", "Al");
        state.set_entry("toppings", "4", true);
        state.set_error("fullName", "full name must be at least 3 characters");

        state.reset_values();

        assert_eq!(state.get_value("fullName"), None);
        assert!(state.checked_values("toppings").is_empty());
        assert_eq!(
            state.error("fullName"),
            Some("full name must be at least 3 characters")
        );
    }
}

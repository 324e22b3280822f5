//! Form schema definition.
//!
//! `FormSchema` groups multiple `FormField` instances together with a
//! display title. Kept intentionally lightweight; validation rules remain
//! attached to each `FormField` via its optional validator closure.

use super::FormField;

/// Declarative schema for a multi-field form.
pub struct FormSchema {
    pub title: String,
    pub fields: Vec<FormField>,
}

impl FormSchema {
    pub fn new(title: impl Into<String>, fields: Vec<FormField>) -> Self {
        Self {
            title: title.into(),
            fields,
        }
    }

    /// Convenience accessor: number of fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Find a field by its key.
    pub fn field_by_key(&self, key: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.key == key)
    }
}

//! Form field types & metadata.
//!
//! The declarative pieces of the form system:
//! - `Choice`: one stored-value/label pair for selects and checkbox groups
//! - `FieldKind`: supported input widget types
//! - `FormField`: metadata + optional validator for a single field
//!
//! Everything here is pure data. Mutation lives in `state.rs`, interactive
//! behavior in `view.rs`, rendering in `render.rs`.

/// One selectable choice: the value kept in form state plus the label the
/// UI shows for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

impl Choice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A single form field kind supported by the form system.
///
/// Notes:
/// - Text renders as a single-line editor (Enter to edit, Enter to keep)
/// - Select cycles through its choices with Left/Right
/// - Checkbox is a multi-select group; Left/Right move the cursor, Space
///   flips the choice under it
#[derive(Debug, Clone)]
pub enum FieldKind {
    Text,
    Select { options: Vec<Choice> },
    Checkbox { options: Vec<Choice> },
}

/// Declarative description of a form field.
///
/// `validator` (optional):
///   A function receiving the current scalar value (or each checked entry
///   for Checkbox groups) and returning:
///     Ok(())          -> value accepted
///     Err(message)    -> validation error message (displayed inline)
pub struct FormField {
    pub key: String,
    pub label: String,
    pub kind: FieldKind,
    pub help: Option<String>,
    pub placeholder: Option<String>,
    pub validator: Option<Box<dyn Fn(&str) -> std::result::Result<(), String> + Send + Sync>>,
}

impl FormField {
    /// Create a new field definition.
    pub fn new(key: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind,
            help: None,
            placeholder: None,
            validator: None,
        }
    }

    /// Attach optional help / hint text shown beneath the field.
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Attach placeholder text shown while a text field is empty.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Attach a validator closure for the field.
    pub fn validator(
        mut self,
        f: impl Fn(&str) -> std::result::Result<(), String> + Send + Sync + 'static,
    ) -> Self {
        self.validator = Some(Box::new(f));
        self
    }

    /// True if this field uses the textual editor when focused.
    pub fn is_textual(&self) -> bool {
        matches!(self.kind, FieldKind::Text)
    }
}

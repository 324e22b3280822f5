//! Interactive multi-field form embedded in a page (logic / state only;
//! rendering lives in `render.rs`).
//!
//! Responsibilities:
//! - Navigation & focus management (fields plus a trailing submit row)
//! - Editing lifecycle for text fields (enter edit, write-through, leave)
//! - Select cycling & checkbox cursor movement / toggling
//! - Per-field validation dispatch
//!
//! The view owns schema and state but knows nothing about what the values
//! mean; the owning page reacts to the returned [`FormChange`]s.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent};
use tui_input::{backend::crossterm::EventHandler, Input};

use super::{Choice, FieldKind, FormField, FormSchema, FormState};

/// What a key press did to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormChange {
    /// A scalar field's value changed. Typing writes through on every
    /// keystroke, so this fires while editing, not just on leaving.
    Edited { key: String },
    /// A checkbox choice was flipped.
    Toggled {
        key: String,
        value: String,
        checked: bool,
    },
    /// The submit control was activated.
    SubmitRequested,
}

pub struct FormView {
    schema: FormSchema,
    state: FormState,

    // UI / navigation state
    focused: usize,
    editing: bool,
    input: Input,
    edit_backup: String,
    check_cursor: HashMap<String, usize>,
    submit_enabled: bool,
}

impl FormView {
    /// Create a new view with a given schema and empty state.
    pub fn new(schema: FormSchema) -> Self {
        Self {
            schema,
            state: FormState::default(),
            focused: 0,
            editing: false,
            input: Input::default(),
            edit_backup: String::new(),
            check_cursor: HashMap::new(),
            submit_enabled: false,
        }
    }

    /// Replace the internal state (e.g. to seed defaults).
    pub fn with_state(mut self, state: FormState) -> Self {
        self.state = state;
        self
    }

    // --- Accessors used by the renderer and the owning page ------------------------------------

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut FormState {
        &mut self.state
    }

    pub fn focused_index(&self) -> usize {
        self.focused
    }

    /// The synthetic submit row sits after the last field.
    pub fn submit_row_index(&self) -> usize {
        self.schema.field_count()
    }

    pub fn is_submit_focused(&self) -> bool {
        self.focused == self.submit_row_index()
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn input_value(&self) -> &str {
        self.input.value()
    }

    /// Cursor position inside a checkbox group.
    pub fn check_cursor(&self, key: &str) -> usize {
        self.check_cursor.get(key).copied().unwrap_or(0)
    }

    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    /// Whether the submit row is active; decided by the owning page.
    pub fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
    }

    // --- Internal navigation / editing helpers -------------------------------------------------

    fn row_count(&self) -> usize {
        // fields + submit row
        self.schema.field_count() + 1
    }

    fn current_field(&self) -> Option<&FormField> {
        self.schema.fields.get(self.focused)
    }

    fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.row_count();
    }

    fn focus_prev(&mut self) {
        if self.focused == 0 {
            self.focused = self.row_count() - 1;
        } else {
            self.focused -= 1;
        }
    }

    fn cycle_select(&mut self, key: &str, options: &[Choice], dir: i32) {
        if options.is_empty() {
            return;
        }
        let cur = self
            .state
            .get_value(key)
            .unwrap_or_else(|| options[0].value.as_str());
        let idx = options.iter().position(|o| o.value == cur).unwrap_or(0) as i32;
        let len = options.len() as i32;
        let next = (idx + dir).rem_euclid(len) as usize;
        self.state.set_value(key, options[next].value.clone());
    }

    fn move_check_cursor(&mut self, key: &str, len: usize, dir: i32) {
        if len == 0 {
            return;
        }
        let cur = self.check_cursor(key) as i32;
        let next = (cur + dir).rem_euclid(len as i32) as usize;
        self.check_cursor.insert(key.to_string(), next);
    }

    fn start_editing(&mut self) {
        let existing = match self.current_field() {
            Some(field) if field.is_textual() => {
                self.state.get_value(&field.key).unwrap_or("").to_string()
            }
            _ => return,
        };
        self.editing = true;
        self.edit_backup = existing.clone();
        self.input = Input::default().with_value(existing);
    }

    fn stop_editing(&mut self) {
        self.editing = false;
        self.input = Input::default();
    }

    // --- Key handling ---------------------------------------------------------------------------

    /// Feed one key press into the form. Returns what changed so the owning
    /// page can react (revalidate, submit, ...).
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<FormChange> {
        if self.editing {
            return self.handle_editing_key(key);
        }

        match key.code {
            KeyCode::Up | KeyCode::BackTab => {
                self.focus_prev();
                None
            }
            KeyCode::Down | KeyCode::Tab => {
                self.focus_next();
                None
            }
            KeyCode::Home => {
                self.focused = 0;
                None
            }
            KeyCode::End => {
                self.focused = self.row_count() - 1;
                None
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => {
                let field = self.current_field()?;
                match &field.kind {
                    FieldKind::Select { options } => {
                        let k = field.key.clone();
                        let opts = options.clone();
                        let dir = if matches!(key.code, KeyCode::Left) {
                            -1
                        } else {
                            1
                        };
                        self.cycle_select(&k, &opts, dir);
                        Some(FormChange::Edited { key: k })
                    }
                    FieldKind::Checkbox { options } => {
                        let k = field.key.clone();
                        let opts = options.clone();
                        if matches!(key.code, KeyCode::Char(' ')) {
                            let cursor = self.check_cursor(&k).min(opts.len().saturating_sub(1));
                            let value = opts.get(cursor)?.value.clone();
                            let checked = self.state.toggle_entry(&k, &value);
                            Some(FormChange::Toggled {
                                key: k,
                                value,
                                checked,
                            })
                        } else {
                            let dir = if matches!(key.code, KeyCode::Left) {
                                -1
                            } else {
                                1
                            };
                            self.move_check_cursor(&k, opts.len(), dir);
                            None
                        }
                    }
                    FieldKind::Text => None,
                }
            }
            KeyCode::Enter => {
                if self.is_submit_focused() {
                    Some(FormChange::SubmitRequested)
                } else if self.current_field().map(|f| f.is_textual()).unwrap_or(false) {
                    self.start_editing();
                    None
                } else {
                    // Enter on a select or checkbox row submits as well
                    Some(FormChange::SubmitRequested)
                }
            }
            _ => None,
        }
    }

    fn handle_editing_key(&mut self, key: KeyEvent) -> Option<FormChange> {
        let key_of = self.current_field().map(|f| f.key.clone())?;
        match key.code {
            KeyCode::Enter => {
                // value is already written through; just leave edit mode
                self.stop_editing();
                None
            }
            KeyCode::Esc => {
                let backup = self.edit_backup.clone();
                let changed = self.state.get_value(&key_of) != Some(backup.as_str());
                self.state.set_value(&key_of, backup);
                self.stop_editing();
                if changed {
                    Some(FormChange::Edited { key: key_of })
                } else {
                    None
                }
            }
            _ => {
                let before = self.input.value().to_string();
                self.input.handle_event(&crossterm::event::Event::Key(key));
                if self.input.value() != before {
                    let value = self.input.value().to_string();
                    self.state.set_value(&key_of, value);
                    Some(FormChange::Edited { key: key_of })
                } else {
                    None
                }
            }
        }
    }

    // --- Validation dispatch --------------------------------------------------------------------

    /// Re-run one field's rule: the first violation lands in `errors`,
    /// success clears the slot.
    pub fn revalidate_field(&mut self, key: &str) {
        let Some(field) = self.schema.field_by_key(key) else {
            return;
        };
        let result = match &field.kind {
            FieldKind::Checkbox { .. } => {
                let mut result = Ok(());
                if let Some(validator) = &field.validator {
                    for value in self.state.checked_values(key) {
                        if let Err(msg) = validator(value) {
                            result = Err(msg);
                            break;
                        }
                    }
                }
                result
            }
            _ => {
                let value = self.state.get_value(key).unwrap_or("");
                match &field.validator {
                    Some(validator) => validator(value),
                    None => Ok(()),
                }
            }
        };
        match result {
            Ok(()) => self.state.clear_error(key),
            Err(msg) => self.state.set_error(key, msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_view() -> FormView {
        let schema = FormSchema::new(
            "Test Form",
            vec![
                FormField::new("name", "Name", FieldKind::Text).validator(|v| {
                    if v.trim().chars().count() < 3 {
                        Err("too short".to_string())
                    } else {
                        Ok(())
                    }
                }),
                FormField::new(
                    "size",
                    "Size",
                    FieldKind::Select {
                        options: vec![
                            Choice::new("", "none yet"),
                            Choice::new("S", "Small"),
                            Choice::new("M", "Medium"),
                        ],
                    },
                ),
                FormField::new(
                    "extras",
                    "Extras",
                    FieldKind::Checkbox {
                        options: vec![Choice::new("1", "One"), Choice::new("2", "Two")],
                    },
                ),
            ],
        );
        let mut state = FormState::default();
        state.set_value("name", "");
        state.set_value("size", "");
        FormView::new(schema).with_state(state)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn focus_wraps_over_fields_and_submit_row() {
        let mut view = sample_view();
        assert_eq!(view.focused_index(), 0);
        for _ in 0..3 {
            view.handle_key(key(KeyCode::Down));
        }
        assert!(view.is_submit_focused());
        view.handle_key(key(KeyCode::Down));
        assert_eq!(view.focused_index(), 0, "focus wraps forward");
        view.handle_key(key(KeyCode::Up));
        assert!(view.is_submit_focused(), "focus wraps backward");
    }

    #[test]
    fn typing_writes_through_to_state() {
        let mut view = sample_view();
        view.handle_key(key(KeyCode::Enter));
        assert!(view.is_editing());

        let change = view.handle_key(key(KeyCode::Char('J')));
        assert_eq!(
            change,
            Some(FormChange::Edited {
                key: "name".to_string()
            })
        );
        view.handle_key(key(KeyCode::Char('o')));
        assert_eq!(view.state().get_value("name"), Some("Jo"));

        view.handle_key(key(KeyCode::Enter));
        assert!(!view.is_editing());
        assert_eq!(view.state().get_value("name"), Some("Jo"));
    }

    #[test]
    fn escape_reverts_the_edit() {
        let mut view = sample_view();
        view.state_mut().set_value("name", "Rosa");
        view.handle_key(key(KeyCode::Enter));
        view.handle_key(key(KeyCode::Backspace));
        assert_eq!(view.state().get_value("name"), Some("Ros"));

        let change = view.handle_key(key(KeyCode::Esc));
        assert_eq!(
            change,
            Some(FormChange::Edited {
                key: "name".to_string()
            })
        );
        assert_eq!(view.state().get_value("name"), Some("Rosa"));
        assert!(!view.is_editing());
    }

    #[test]
    fn select_cycles_with_arrows() {
        let mut view = sample_view();
        view.handle_key(key(KeyCode::Down));
        view.handle_key(key(KeyCode::Right));
        assert_eq!(view.state().get_value("size"), Some("S"));
        view.handle_key(key(KeyCode::Right));
        assert_eq!(view.state().get_value("size"), Some("M"));
        view.handle_key(key(KeyCode::Left));
        assert_eq!(view.state().get_value("size"), Some("S"));
        view.handle_key(key(KeyCode::Left));
        view.handle_key(key(KeyCode::Left));
        assert_eq!(view.state().get_value("size"), Some("M"), "cycling wraps");
    }

    #[test]
    fn space_toggles_checkbox_under_cursor() {
        let mut view = sample_view();
        view.handle_key(key(KeyCode::Down));
        view.handle_key(key(KeyCode::Down));

        let change = view.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(
            change,
            Some(FormChange::Toggled {
                key: "extras".to_string(),
                value: "1".to_string(),
                checked: true
            })
        );

        view.handle_key(key(KeyCode::Right));
        view.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(view.state().checked_values("extras"), ["1", "2"]);

        let change = view.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(
            change,
            Some(FormChange::Toggled {
                key: "extras".to_string(),
                value: "2".to_string(),
                checked: false
            })
        );
    }

    #[test]
    fn enter_requests_submission() {
        let mut view = sample_view();
        view.handle_key(key(KeyCode::End));
        assert_eq!(
            view.handle_key(key(KeyCode::Enter)),
            Some(FormChange::SubmitRequested)
        );

        view.handle_key(key(KeyCode::Home));
        view.handle_key(key(KeyCode::Down));
        assert_eq!(
            view.handle_key(key(KeyCode::Enter)),
            Some(FormChange::SubmitRequested),
            "Enter on a select row submits too"
        );
    }

    #[test]
    fn revalidate_field_sets_and_clears_errors() {
        let mut view = sample_view();
        view.state_mut().set_value("name", "Al");
        view.revalidate_field("name");
        assert_eq!(view.state().error("name"), Some("too short"));

        view.state_mut().set_value("name", "Alice");
        view.revalidate_field("name");
        assert_eq!(view.state().error("name"), None);
    }
}

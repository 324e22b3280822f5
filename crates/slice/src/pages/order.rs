//! The order page: the pizza form, its outcome banner and the async
//! plumbing that keeps the submit row in sync with the draft.

use color_eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, trace};

use order::{confirmation_message, rules, OrderDraft, OrderPayload, TOPPINGS};

use crate::{
    action::Action,
    components::{
        banner::OutcomeBanner,
        form::{render_form, Choice, FieldKind, FormChange, FormField, FormSchema, FormState, FormView},
        Component,
    },
    config::Config,
    services::kitchen::KitchenClient,
    state::{InputMode, State},
    tui::{EventResponse, Frame},
};

use super::Page;

fn order_form() -> FormSchema {
    FormSchema::new(
        "Order Your Pizza",
        vec![
            FormField::new("fullName", "Full Name", FieldKind::Text)
                .placeholder("Type full name")
                .validator(rules::check_full_name),
            FormField::new(
                "size",
                "Size",
                FieldKind::Select {
                    options: vec![
                        Choice::new("", "----Choose Size----"),
                        Choice::new("S", "Small"),
                        Choice::new("M", "Medium"),
                        Choice::new("L", "Large"),
                    ],
                },
            )
            .validator(rules::check_size),
            FormField::new(
                "toppings",
                "Toppings",
                FieldKind::Checkbox {
                    options: TOPPINGS
                        .iter()
                        .map(|t| Choice::new(t.id, t.label))
                        .collect(),
                },
            )
            .help("optional"),
        ],
    )
}

pub struct OrderPage {
    command_tx: Option<UnboundedSender<Action>>,
    form: FormView,
    banner: OutcomeBanner,
    kitchen: Option<KitchenClient>,
    /// Bumped on every draft mutation; validity results carry the revision
    /// they were computed for, so stale ones can be dropped.
    revision: u64,
}

impl OrderPage {
    pub fn new() -> Self {
        let mut state = FormState::default();
        state.set_value("fullName", "");
        state.set_value("size", "");
        Self {
            command_tx: None,
            form: FormView::new(order_form()).with_state(state),
            banner: OutcomeBanner::new(),
            kitchen: None,
            revision: 0,
        }
    }

    /// Snapshot the form into a draft. The form state stays the single
    /// source of truth; drafts are built on demand.
    fn draft(&self) -> OrderDraft {
        OrderDraft {
            full_name: self
                .form
                .state()
                .get_value("fullName")
                .unwrap_or("")
                .to_string(),
            size: self.form.state().get_value("size").unwrap_or("").to_string(),
            toppings: self.form.state().checked_values("toppings").to_vec(),
        }
    }

    /// Re-check the whole draft off the main task and report back through
    /// the action channel.
    fn spawn_validity_check(&mut self) {
        self.revision += 1;
        let Some(tx) = self.command_tx.clone() else {
            return;
        };
        let revision = self.revision;
        let draft = self.draft();
        tokio::spawn(async move {
            let valid = rules::order_is_valid(&draft);
            let _ = tx.send(Action::OrderValidity { revision, valid });
        });
    }

    fn submit(&mut self) {
        if !self.form.submit_enabled() {
            return;
        }
        let Some(tx) = self.command_tx.clone() else {
            return;
        };
        let Some(kitchen) = self.kitchen.clone() else {
            return;
        };
        let draft = self.draft();
        // composed before the request so the reply cannot race a later edit
        let confirmation = confirmation_message(&draft);
        let payload = OrderPayload::from(&draft);
        debug!(
            name = %draft.full_name,
            size = %draft.size,
            toppings = draft.toppings.len(),
            "placing order"
        );
        tokio::spawn(async move {
            match kitchen.submit(&payload).await {
                Ok(_) => {
                    let _ = tx.send(Action::OrderAccepted(confirmation));
                }
                Err(err) => {
                    let _ = tx.send(Action::OrderRejected(err.to_string()));
                }
            }
        });
    }
}

impl Default for OrderPage {
    fn default() -> Self {
        Self::new()
    }
}

impl Page for OrderPage {
    fn name(&self) -> &str {
        "order"
    }

    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        self.command_tx = Some(tx);
        Ok(())
    }

    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        let kitchen = KitchenClient::new(config.config.order_endpoint);
        debug!(endpoint = %kitchen.endpoint(), "kitchen client ready");
        self.kitchen = Some(kitchen);
        Ok(())
    }

    fn init(&mut self, _state: &State) -> Result<()> {
        // seed the submit gate for the pristine draft
        self.spawn_validity_check();
        Ok(())
    }

    fn handle_key_events(
        &mut self,
        key: KeyEvent,
        state: &mut State,
    ) -> Result<Option<EventResponse<Action>>> {
        let change = self.form.handle_key(key);
        state.input_mode = if self.form.is_editing() {
            InputMode::Insert
        } else {
            InputMode::Normal
        };

        match change {
            Some(FormChange::Edited { key: field })
            | Some(FormChange::Toggled { key: field, .. }) => {
                self.form.revalidate_field(&field);
                self.spawn_validity_check();
                Ok(Some(EventResponse::Stop(Action::Render)))
            }
            Some(FormChange::SubmitRequested) => {
                self.submit();
                Ok(Some(EventResponse::Stop(Action::Render)))
            }
            None => Ok(None),
        }
    }

    fn update(&mut self, action: Action, _state: &mut State) -> Result<Option<Action>> {
        match action {
            Action::OrderValidity { revision, valid } => {
                if revision == self.revision {
                    self.form.set_submit_enabled(valid);
                } else {
                    trace!(revision, newest = self.revision, "dropping stale validity result");
                }
            }
            Action::OrderAccepted(confirmation) => {
                // errors stay as they are; only values and the banner change
                self.banner.show_success(confirmation);
                self.form.state_mut().reset_values();
                self.spawn_validity_check();
            }
            Action::OrderRejected(message) => {
                self.banner.show_failure(message);
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect, state: &State) -> Result<()> {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Fill(1),
                Constraint::Max(64),
                Constraint::Fill(1),
            ])
            .split(area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([self.banner.height_constraint(), Constraint::Fill(1)])
            .split(chunks[1]);

        self.banner.draw(f, rows[0], state)?;
        render_form(&self.form, f, rows[1]);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use pretty_assertions::assert_eq;
    use tokio::sync::mpsc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[tokio::test]
    async fn short_names_are_flagged_while_typing() {
        let mut page = OrderPage::new();
        let (tx, mut rx) = mpsc::unbounded_channel();
        page.register_action_handler(tx).unwrap();
        let mut state = State::default();

        page.handle_key_events(key(KeyCode::Enter), &mut state).unwrap();
        assert!(matches!(state.input_mode, InputMode::Insert));

        page.handle_key_events(key(KeyCode::Char('A')), &mut state).unwrap();
        page.handle_key_events(key(KeyCode::Char('l')), &mut state).unwrap();

        assert_eq!(
            page.form.state().error("fullName"),
            Some(rules::MSG_NAME_TOO_SHORT)
        );
        assert_eq!(
            rx.recv().await,
            Some(Action::OrderValidity {
                revision: 1,
                valid: false
            })
        );
    }

    #[test]
    fn matching_validity_revision_gates_the_submit_row() {
        let mut page = OrderPage::new();
        let mut state = State::default();

        page.update(
            Action::OrderValidity {
                revision: 0,
                valid: true,
            },
            &mut state,
        )
        .unwrap();
        assert!(page.form.submit_enabled());

        page.update(
            Action::OrderValidity {
                revision: 5,
                valid: false,
            },
            &mut state,
        )
        .unwrap();
        assert!(page.form.submit_enabled(), "stale result must be ignored");
    }

    #[tokio::test]
    async fn acceptance_resets_values_but_keeps_errors() {
        let mut page = OrderPage::new();
        let (tx, mut rx) = mpsc::unbounded_channel();
        page.register_action_handler(tx).unwrap();
        let mut state = State::default();

        page.form.state_mut().set_value("fullName", "Rosa Diaz");
        page.form.state_mut().set_value("size", "M");
        page.form.state_mut().set_entry("toppings", "1", true);
        page.form
            .state_mut()
            .set_error("size", rules::MSG_SIZE_INCORRECT);

        page.update(Action::OrderAccepted("Thank you!".to_string()), &mut state)
            .unwrap();

        assert_eq!(page.banner.success_text(), Some("Thank you!"));
        let draft = page.draft();
        assert_eq!(draft.full_name, "");
        assert_eq!(draft.size, "");
        assert!(draft.toppings.is_empty());
        assert_eq!(
            page.form.state().error("size"),
            Some(rules::MSG_SIZE_INCORRECT),
            "field errors survive the reset"
        );
        assert_eq!(
            rx.recv().await,
            Some(Action::OrderValidity {
                revision: 1,
                valid: false
            }),
            "the emptied draft gets re-checked"
        );
    }

    #[test]
    fn rejection_replaces_the_success_banner() {
        let mut page = OrderPage::new();
        let mut state = State::default();

        page.update(Action::OrderAccepted("first".to_string()), &mut state)
            .unwrap();
        page.update(
            Action::OrderRejected("Pineapple is sold out".to_string()),
            &mut state,
        )
        .unwrap();

        assert_eq!(page.banner.failure_text(), Some("Pineapple is sold out"));
        assert_eq!(page.banner.success_text(), None);
    }

    #[tokio::test]
    async fn submit_stays_gated_until_validity_arrives() {
        let mut page = OrderPage::new();
        let (tx, mut rx) = mpsc::unbounded_channel();
        page.register_action_handler(tx).unwrap();
        let mut state = State::default();

        page.handle_key_events(key(KeyCode::End), &mut state).unwrap();
        page.handle_key_events(key(KeyCode::Enter), &mut state).unwrap();

        assert!(
            rx.try_recv().is_err(),
            "a disabled submit row must not send anything"
        );
    }
}

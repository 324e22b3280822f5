pub mod home;
pub mod order;

pub use home::HomePage;
pub use order::OrderPage;

use color_eyre::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;
use tokio::sync::mpsc::UnboundedSender;

use crate::{
    action::Action,
    config::Config,
    state::State,
    tui::{Event, EventResponse, Frame},
};

/// A full-screen view below the navigation bar. Exactly one page is active
/// at a time; the app routes events, actions and draw calls to it.
pub trait Page {
    /// Stable name, used for navigation and logging.
    fn name(&self) -> &str;

    /// Register an action handler that can send actions for processing if necessary.
    #[allow(unused_variables)]
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        Ok(())
    }

    /// Register a configuration handler that provides configuration settings if necessary.
    #[allow(unused_variables)]
    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        Ok(())
    }

    /// Initialize the page once before the main loop starts.
    #[allow(unused_variables)]
    fn init(&mut self, state: &State) -> Result<()> {
        Ok(())
    }

    /// Handle incoming events and produce actions if necessary.
    fn handle_events(
        &mut self,
        event: Option<Event>,
        state: &mut State,
    ) -> Result<Option<EventResponse<Action>>> {
        let r = match event {
            Some(Event::Key(key_event)) => self.handle_key_events(key_event, state)?,
            Some(Event::Mouse(mouse_event)) => self.handle_mouse_events(mouse_event, state)?,
            _ => None,
        };
        Ok(r)
    }

    /// Handle key events and produce actions if necessary.
    #[allow(unused_variables)]
    fn handle_key_events(
        &mut self,
        key: KeyEvent,
        state: &mut State,
    ) -> Result<Option<EventResponse<Action>>> {
        Ok(None)
    }

    /// Handle mouse events and produce actions if necessary.
    #[allow(unused_variables)]
    fn handle_mouse_events(
        &mut self,
        mouse: MouseEvent,
        state: &mut State,
    ) -> Result<Option<EventResponse<Action>>> {
        Ok(None)
    }

    /// Update the state of the page based on a received action.
    #[allow(unused_variables)]
    fn update(&mut self, action: Action, state: &mut State) -> Result<Option<Action>> {
        Ok(None)
    }

    /// Render the page on the screen.
    fn draw(&mut self, f: &mut Frame<'_>, area: Rect, state: &State) -> Result<()>;

    /// Called when the page becomes the active one.
    #[allow(unused_variables)]
    fn on_enter(&mut self, state: &mut State) -> Result<()> {
        Ok(())
    }

    /// Called when another page takes over.
    #[allow(unused_variables)]
    fn on_exit(&mut self, state: &mut State) -> Result<()> {
        Ok(())
    }
}

use color_eyre::Result;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Tabs},
};

use super::Component;
use crate::{action::Action, state::State, tui::Frame};

/// Top navigation bar.
///
/// Shows one tab per page and tracks the active page by listening for
/// `Action::Navigate`; the key handling itself lives in the app loop.
pub struct NavBar {
    titles: Vec<&'static str>,
    active: usize,
}

impl NavBar {
    pub fn new(titles: Vec<&'static str>) -> Self {
        Self { titles, active: 0 }
    }
}

impl Component for NavBar {
    fn height_constraint(&self) -> Constraint {
        Constraint::Length(3)
    }

    fn update(&mut self, action: Action, _state: &mut State) -> Result<Option<Action>> {
        if let Action::Navigate(index) = action {
            if index < self.titles.len() {
                self.active = index;
            }
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect, _state: &State) -> Result<()> {
        let tabs = Tabs::new(self.titles.clone())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" slice ")
                    .title_style(Style::default().fg(Color::Yellow)),
            )
            .divider("|")
            .select(self.active)
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );
        f.render_widget(tabs, area);
        Ok(())
    }
}

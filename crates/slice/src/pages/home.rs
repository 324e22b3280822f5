use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    action::Action,
    components::{logo::LogoComponent, Component},
    state::State,
    tui::{EventResponse, Frame},
};

use super::Page;

/// Landing page: logo plus a short pointer to the order page.
pub struct HomePage {
    logo: LogoComponent,
}

impl HomePage {
    pub fn new() -> Self {
        Self {
            logo: LogoComponent::new(),
        }
    }
}

impl Default for HomePage {
    fn default() -> Self {
        Self::new()
    }
}

impl Page for HomePage {
    fn name(&self) -> &str {
        "home"
    }

    fn handle_key_events(
        &mut self,
        key: KeyEvent,
        _state: &mut State,
    ) -> Result<Option<EventResponse<Action>>> {
        match key.code {
            KeyCode::Enter => Ok(Some(EventResponse::Stop(Action::Navigate(1)))),
            _ => Ok(None),
        }
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect, state: &State) -> Result<()> {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Fill(1),
                self.logo.height_constraint(),
                Constraint::Length(4),
                Constraint::Fill(2),
            ])
            .split(area);

        self.logo.draw(f, chunks[1], state)?;

        let blurb = vec![
            Line::from("Pizza, straight from your terminal."),
            Line::default(),
            Line::from(vec![
                Span::raw("Press "),
                Span::styled("Enter", Style::default().fg(Color::Yellow)),
                Span::raw(" or "),
                Span::styled("o", Style::default().fg(Color::Yellow)),
                Span::raw(" to order, "),
                Span::styled("q", Style::default().fg(Color::Yellow)),
                Span::raw(" to leave."),
            ]),
        ];
        f.render_widget(
            Paragraph::new(blurb).alignment(Alignment::Center),
            chunks[2],
        );
        Ok(())
    }
}

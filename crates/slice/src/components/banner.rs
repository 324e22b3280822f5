use color_eyre::Result;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use super::Component;
use crate::{state::State, tui::Frame};

/// Outcome banner under the order form.
///
/// Success and failure are mutually exclusive: whichever outcome arrives
/// last wins and clears the other. Nothing is cleared while a request is
/// in flight, so the previous outcome stays visible until the next one
/// replaces it.
#[derive(Default)]
pub struct OutcomeBanner {
    success: Option<String>,
    failure: Option<String>,
}

impl OutcomeBanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_success(&mut self, message: impl Into<String>) {
        self.success = Some(message.into());
        self.failure = None;
    }

    pub fn show_failure(&mut self, message: impl Into<String>) {
        self.failure = Some(message.into());
        self.success = None;
    }

    pub fn success_text(&self) -> Option<&str> {
        self.success.as_deref()
    }

    pub fn failure_text(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.success.is_none() && self.failure.is_none()
    }
}

impl Component for OutcomeBanner {
    fn height_constraint(&self) -> Constraint {
        if self.is_empty() {
            Constraint::Length(0)
        } else {
            Constraint::Length(4)
        }
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect, _state: &State) -> Result<()> {
        let (message, color, title) = if let Some(message) = self.success_text() {
            (message.to_string(), Color::Green, " order placed ")
        } else if let Some(message) = self.failure_text() {
            (message.to_string(), Color::Red, " order failed ")
        } else {
            return Ok(());
        };

        let banner = Paragraph::new(message)
            .style(Style::default().fg(color))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .title(title)
                    .padding(Padding::horizontal(1)),
            );
        f.render_widget(banner, area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn outcomes_displace_each_other() {
        let mut banner = OutcomeBanner::new();
        assert!(banner.is_empty());

        banner.show_failure("the kitchen is closed");
        assert_eq!(banner.failure_text(), Some("the kitchen is closed"));
        assert_eq!(banner.success_text(), None);

        banner.show_success("Thank you for your order, Jo!");
        assert_eq!(banner.success_text(), Some("Thank you for your order, Jo!"));
        assert_eq!(banner.failure_text(), None);

        banner.show_failure("ran out of dough");
        assert_eq!(banner.failure_text(), Some("ran out of dough"));
        assert_eq!(banner.success_text(), None);
    }
}

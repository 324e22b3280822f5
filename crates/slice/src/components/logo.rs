use super::Component;
use crate::{state::State, tui::Frame};
use color_eyre::Result;
use ratatui::{prelude::*, widgets::*};
use std::collections::HashMap;

#[derive(Default)]
pub struct LogoComponent;

impl LogoComponent {
    pub fn new() -> Self {
        Self
    }

    pub(crate) fn width() -> u16 {
        36
    }
}

impl Component for LogoComponent {
    fn height_constraint(&self) -> Constraint {
        Constraint::Length(7)
    }

    fn draw(&mut self, frame: &mut Frame<'_>, area: Rect, _state: &State) -> Result<()> {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Max(5), Constraint::Min(0)])
            .split(area);
        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Max(Self::width()),
                Constraint::Min(0),
            ])
            .split(vertical[1]);

        let logo_lines = vec![
            " ██████ ██      ██  ██████ ███████",
            "██      ██      ██ ██      ██     ",
            " █████  ██      ██ ██      █████  ",
            "     ██ ██      ██ ██      ██     ",
            "██████  ███████ ██  ██████ ███████",
        ];

        let logo_color = vec![
            " AAAAAA BB      CC  DDDDDD EEEEEEE",
            "AA      BB      CC DD      EE     ",
            " AAAAA  BB      CC DD      EEEEE  ",
            "     AA BB      CC DD      EE     ",
            "AAAAAA  BBBBBBB CC  DDDDDD EEEEEEE",
        ];

        // warmes Gefälle von Kruste zu Salami
        let color_map: HashMap<char, Color> = [
            ('A', Color::Rgb(255, 206, 84)),
            ('B', Color::Rgb(255, 170, 60)),
            ('C', Color::Rgb(255, 134, 48)),
            ('D', Color::Rgb(236, 92, 40)),
            ('E', Color::Rgb(214, 48, 36)),
        ]
        .iter()
        .cloned()
        .collect();

        let mut styled_lines = Vec::new();

        for (logo_line, color_line) in logo_lines.iter().zip(logo_color.iter()) {
            let mut spans = Vec::new();
            let logo_chars: Vec<char> = logo_line.chars().collect();
            let color_chars: Vec<char> = color_line.chars().collect();

            for (j, &logo_char) in logo_chars.iter().enumerate() {
                let color = if j < color_chars.len() {
                    color_map
                        .get(&color_chars[j])
                        .copied()
                        .unwrap_or(Color::White)
                } else {
                    Color::White
                };

                spans.push(Span::styled(
                    logo_char.to_string(),
                    Style::default().fg(color),
                ));
            }

            styled_lines.push(Line::from(spans));
        }

        let logo = Paragraph::new(styled_lines)
            .block(Block::default())
            .wrap(ratatui::widgets::Wrap { trim: false });

        frame.render_widget(logo, horizontal[1]);
        Ok(())
    }
}

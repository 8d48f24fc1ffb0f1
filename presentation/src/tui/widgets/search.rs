//! Search box widget

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct SearchWidget<'a> {
    state: &'a TuiState,
}

impl<'a> SearchWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for SearchWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let applied = self.state.session.search();
        let title = if applied.is_empty() {
            " Search ".to_string()
        } else {
            format!(" Search · Searching for: {} ", applied)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .style(Style::default().fg(Color::Green));

        let prompt = Span::styled(
            "> ",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        );
        let text = if self.state.search_input.is_empty() {
            Span::styled(
                "type to filter this page",
                Style::default().fg(Color::DarkGray),
            )
        } else {
            Span::styled(
                self.state.search_input.as_str(),
                Style::default().fg(Color::White),
            )
        };
        let cursor = Span::styled(" ", Style::default().add_modifier(Modifier::REVERSED));

        let mut spans = vec![prompt];
        if self.state.search_input.is_empty() {
            spans.push(cursor);
            spans.push(text);
        } else {
            spans.push(text);
            spans.push(cursor);
        }
        if self.state.search_pending() {
            spans.push(Span::styled(" …", Style::default().fg(Color::DarkGray)));
        }

        Paragraph::new(Line::from(spans)).block(block).render(area, buf);
    }
}

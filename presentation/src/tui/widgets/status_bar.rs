//! Status bar widget — summary or error + key hints

use crate::tui::mode::KeyHandler;
use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBarWidget<'a> {
    state: &'a TuiState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Fill background
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        let session = &self.state.session;
        let (left_text, left_style) = if let Some(error) = session.error() {
            (
                format!(" {} ", error),
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            )
        } else if session.is_loading() {
            (" Loading… ".to_string(), bg_style)
        } else {
            (
                format!(" {} ", session.summary().unwrap_or_default()),
                bg_style,
            )
        };

        let left_width = left_text.chars().count() as u16;
        let left_line = Line::from(vec![Span::styled(left_text, left_style)]);
        buf.set_line(area.x, area.y, &left_line, area.width);

        // Key hints right-aligned, when there is room
        let hints = KeyHandler::hints();
        let hints_width = hints.chars().count() as u16;
        let hints_x = area.right().saturating_sub(hints_width + 1);
        if hints_x > area.x + left_width {
            let hints_line = Line::from(vec![Span::styled(hints, bg_style)]);
            buf.set_line(hints_x, area.y, &hints_line, hints_width + 1);
        }
    }
}

//! Advocate table widget

use crate::table::{EMPTY_MESSAGE, advocate_columns, cell_lines, column_widths};
use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Text,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget},
};

pub struct TableWidget<'a> {
    state: &'a TuiState,
}

impl<'a> TableWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for TableWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let session = &self.state.session;
        let title = match session.pagination() {
            Some(p) if p.total_pages > 0 => {
                format!(" Advocates · page {} of {} ", session.current_page(), p.total_pages)
            }
            _ => " Advocates ".to_string(),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .style(Style::default().fg(Color::Cyan));

        let rows = session.visible();
        if rows.is_empty() {
            let message = if session.pagination().is_none() && session.is_loading() {
                "Loading…"
            } else {
                EMPTY_MESSAGE
            };
            Paragraph::new(message)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Yellow))
                .block(block)
                .render(area, buf);
            return;
        }

        let columns = advocate_columns();
        let cells = cell_lines(&columns, rows);
        let widths: Vec<Constraint> = column_widths(&columns, &cells)
            .into_iter()
            .map(|w| Constraint::Length(w as u16))
            .collect();

        let header = Row::new(columns.iter().map(|c| Cell::from(c.header))).style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

        let body = cells.into_iter().map(|row| {
            let height = row.iter().map(Vec::len).max().unwrap_or(0).max(1);
            Row::new(
                row.into_iter()
                    .map(|lines| Cell::from(Text::from(lines.join("\n")))),
            )
            .height(height as u16)
            .style(Style::default().fg(Color::White))
        });

        Table::new(body, widths)
            .header(header)
            .column_spacing(2)
            .block(block)
            .render(area, buf);
    }
}

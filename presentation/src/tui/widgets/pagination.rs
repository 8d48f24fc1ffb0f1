//! Pagination bar widget — `‹ Previous  1 [2] 3  Next ›`

use crate::table::{NavItem, NavKind, navigation_items};
use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct PaginationWidget<'a> {
    state: &'a TuiState,
}

impl<'a> PaginationWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn span(item: &NavItem) -> Span<'static> {
        let style = if item.current {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if item.enabled {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Span::styled(format!(" {} ", item.label), style)
    }
}

impl<'a> Widget for PaginationWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(pagination) = self.state.session.pagination() else {
            return;
        };

        let mut spans = Vec::new();
        for item in navigation_items(pagination) {
            if item.kind == NavKind::Next {
                spans.push(Span::raw(" "));
            }
            spans.push(Self::span(&item));
            if item.kind == NavKind::Previous {
                spans.push(Span::raw(" "));
            }
        }

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advocates_domain::{Page, PageRequest, PaginationMetadata};

    #[test]
    fn test_renders_page_buttons() {
        let mut state = TuiState::new();
        let request = PageRequest::new(2, 10).unwrap();
        let ticket = state.session.begin_load(request);
        state.session.apply(
            ticket,
            Ok(Page::new(vec![], PaginationMetadata::for_request(&request, 30))),
        );

        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        PaginationWidget::new(&state).render(area, &mut buf);
        let content = buf.content().iter().map(|c| c.symbol()).collect::<String>();

        assert!(content.contains("‹ Previous"));
        assert!(content.contains(" 1 "));
        assert!(content.contains(" 3 "));
        assert!(content.contains("Next ›"));

        // Current page is highlighted
        let current = buf
            .content()
            .iter()
            .find(|c| c.symbol() == "2")
            .unwrap();
        assert_eq!(current.bg, Color::Cyan);
    }

    #[test]
    fn test_nothing_before_first_load() {
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        PaginationWidget::new(&TuiState::new()).render(area, &mut buf);
        let content = buf.content().iter().map(|c| c.symbol()).collect::<String>();
        assert_eq!(content.trim(), "");
    }
}

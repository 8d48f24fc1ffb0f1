//! TUI widgets — ratatui components for the browser layout
//!
//! Layout:
//! ┌── Search (3) ────────────────────────────────────┐
//! ├── Advocates table (flex) ────────────────────────┤
//! ├── Pagination (1) ────────────────────────────────┤
//! └── StatusBar (1) ─────────────────────────────────┘

pub mod pagination;
pub mod search;
pub mod status_bar;
pub mod table;

pub use pagination::PaginationWidget;
pub use search::SearchWidget;
pub use status_bar::StatusBarWidget;
pub use table::TableWidget;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Compute the browser layout regions from a terminal area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowseLayout {
    pub search: Rect,
    pub table: Rect,
    pub pagination: Rect,
    pub status_bar: Rect,
}

impl BrowseLayout {
    pub fn compute(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            search: chunks[0],
            table: chunks[1],
            pagination: chunks[2],
            status_bar: chunks[3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_regions() {
        let layout = BrowseLayout::compute(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.search.height, 3);
        assert_eq!(layout.pagination.height, 1);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.table.height, 24 - 5);
        assert_eq!(layout.status_bar.y, 23);
    }
}

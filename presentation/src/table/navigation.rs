//! Pagination controls: `‹ Previous  1 [2] 3  Next ›`

use advocates_domain::{PaginationMetadata, page_numbers};

/// What a navigation control does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKind {
    Previous,
    Page(u64),
    Next,
}

/// One control of the pagination bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub kind: NavKind,
    pub label: String,
    /// Disabled controls are shown but cannot be activated
    pub enabled: bool,
    /// The page currently shown
    pub current: bool,
}

impl NavItem {
    fn new(kind: NavKind, label: impl Into<String>, enabled: bool, current: bool) -> Self {
        Self {
            kind,
            label: label.into(),
            enabled,
            current,
        }
    }
}

/// Previous, one button per page in the visible window, Next
pub fn navigation_items(pagination: &PaginationMetadata) -> Vec<NavItem> {
    let mut items = vec![NavItem::new(
        NavKind::Previous,
        "‹ Previous",
        pagination.has_previous_page,
        false,
    )];
    for n in page_numbers(pagination) {
        let current = n == pagination.page;
        items.push(NavItem::new(NavKind::Page(n), n.to_string(), !current, current));
    }
    items.push(NavItem::new(
        NavKind::Next,
        "Next ›",
        pagination.has_next_page,
        false,
    ));
    items
}

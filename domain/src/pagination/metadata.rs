//! Page envelope and its navigation metadata

use super::request::PageRequest;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Totals and navigation flags that accompany every page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMetadata {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl PaginationMetadata {
    /// Derive the metadata for `page` of a roster of `total` records.
    ///
    /// `total_pages = ceil(total / limit)`; a `limit` of 0 is treated as 1.
    pub fn new(page: u64, limit: u64, total: u64) -> Self {
        let limit = limit.max(1);
        let total_pages = total.div_ceil(limit);
        Self {
            page,
            limit,
            total,
            total_pages,
            has_next_page: page < total_pages,
            has_previous_page: page > 1,
        }
    }

    pub fn for_request(request: &PageRequest, total: u64) -> Self {
        Self::new(request.page(), request.limit(), total)
    }
}

/// One page of results plus its metadata
///
/// This is the success body of `GET /api/advocates`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMetadata,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, pagination: PaginationMetadata) -> Self {
        Self { data, pagination }
    }

    /// A page with no rows for a roster of `total` records
    pub fn empty(request: &PageRequest, total: u64) -> Self {
        Self::new(Vec::new(), PaginationMetadata::for_request(request, total))
    }
}

/// Most page-number buttons shown at once
pub const PAGE_WINDOW: u64 = 9;

/// The page-number buttons to show (empty when there are no pages).
///
/// All pages up to `PAGE_WINDOW`; beyond that, a window of `PAGE_WINDOW`
/// pages kept around the current one.
pub fn page_numbers(pagination: &PaginationMetadata) -> RangeInclusive<u64> {
    let total = pagination.total_pages;
    if total <= PAGE_WINDOW {
        return 1..=total;
    }
    let start = pagination
        .page
        .saturating_sub(PAGE_WINDOW / 2)
        .clamp(1, total - PAGE_WINDOW + 1);
    start..=start + PAGE_WINDOW - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(PaginationMetadata::new(1, 20, 41).total_pages, 3);
        assert_eq!(PaginationMetadata::new(1, 20, 40).total_pages, 2);
        assert_eq!(PaginationMetadata::new(1, 20, 0).total_pages, 0);
    }

    #[test]
    fn test_first_page_flags() {
        let meta = PaginationMetadata::new(1, 10, 25);
        assert!(meta.has_next_page);
        assert!(!meta.has_previous_page);
    }

    #[test]
    fn test_last_page_flags() {
        let meta = PaginationMetadata::new(3, 10, 25);
        assert!(!meta.has_next_page);
        assert!(meta.has_previous_page);
    }

    #[test]
    fn test_page_past_the_end() {
        let meta = PaginationMetadata::new(9, 10, 25);
        assert!(!meta.has_next_page);
        assert!(meta.has_previous_page);
    }

    #[test]
    fn test_empty_roster() {
        let meta = PaginationMetadata::new(1, 20, 0);
        assert!(!meta.has_next_page);
        assert!(!meta.has_previous_page);
        assert!(page_numbers(&meta).is_empty());
    }

    #[test]
    fn test_page_numbers() {
        let meta = PaginationMetadata::new(2, 5, 12);
        assert_eq!(page_numbers(&meta).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_page_numbers_window_follows_current_page() {
        let first = PaginationMetadata::new(1, 10, 500);
        assert_eq!(page_numbers(&first), 1..=9);

        let middle = PaginationMetadata::new(25, 10, 500);
        assert_eq!(page_numbers(&middle), 21..=29);

        let last = PaginationMetadata::new(50, 10, 500);
        assert_eq!(page_numbers(&last), 42..=50);

        let past_end = PaginationMetadata::new(80, 10, 500);
        assert_eq!(page_numbers(&past_end), 42..=50);
    }

    #[test]
    fn test_page_numbers_stay_bounded_for_huge_totals() {
        let meta = PaginationMetadata::new(1, 1, u64::MAX);
        assert_eq!(meta.total_pages, u64::MAX);
        assert_eq!(page_numbers(&meta).count(), PAGE_WINDOW as usize);

        let meta = PaginationMetadata::new(u64::MAX, 1, u64::MAX);
        assert_eq!(page_numbers(&meta), u64::MAX - 8..=u64::MAX);
    }

    #[test]
    fn test_serializes_camel_case() {
        let meta = PaginationMetadata::new(2, 5, 12);
        let json = serde_json::to_value(meta).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "page": 2,
                "limit": 5,
                "total": 12,
                "totalPages": 3,
                "hasNextPage": true,
                "hasPreviousPage": true
            })
        );
    }

    #[test]
    fn test_page_envelope_shape() {
        let page: Page<u32> = Page::new(vec![7], PaginationMetadata::new(1, 1, 1));
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["data"], serde_json::json!([7]));
        assert_eq!(json["pagination"]["totalPages"], 1);
    }
}

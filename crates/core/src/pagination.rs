//! Pagination math for the public listing pages.
//!
//! Listing queries use LIMIT/OFFSET; this module owns the page-number
//! bookkeeping around them. Page numbers are 1-indexed. A missing or
//! malformed `?page=` falls back to 1, and a number past the end clamps to
//! the last page rather than erroring, so stale links keep working.

use serde::Serialize;

/// Fixed page sizes per listing, matching the public site's layout grids.
pub const NEWS_PAGE_SIZE: i64 = 10;
pub const TOUR_PAGE_SIZE: i64 = 10;
pub const PHOTOS_PAGE_SIZE: i64 = 16;
pub const VIDEOS_PAGE_SIZE: i64 = 6;

/// Number of teaser items shown on the home page per listing.
pub const HOME_TEASER_COUNT: i64 = 4;

/// Parse a raw `?page=` value. Anything that is not a positive integer is 1.
pub fn parse_page_param(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.parse::<i64>().ok())
        .filter(|&p| p >= 1)
        .unwrap_or(1)
}

/// Total number of pages for `total_items` at `page_size` (at least 1).
pub fn total_pages(total_items: i64, page_size: i64) -> i64 {
    if total_items <= 0 {
        1
    } else {
        (total_items + page_size - 1) / page_size
    }
}

/// Clamp a requested page into `[1, total_pages]`.
pub fn clamp_page(page: i64, total_items: i64, page_size: i64) -> i64 {
    page.clamp(1, total_pages(total_items, page_size))
}

/// Row offset of a (already clamped) page.
pub fn page_offset(page: i64, page_size: i64) -> i64 {
    (page - 1) * page_size
}

/// One page of a listing plus the metadata the page chrome needs.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: i64,
    pub total_pages: i64,
    pub total_items: i64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> Paginated<T> {
    /// Assemble a page from an already-sliced item set.
    ///
    /// `page` must already be clamped; the metadata is derived from the
    /// totals, not from the slice length.
    pub fn new(items: Vec<T>, page: i64, page_size: i64, total_items: i64) -> Self {
        let total_pages = total_pages(total_items, page_size);
        Paginated {
            items,
            page,
            total_pages,
            total_items,
            has_next: page < total_pages,
            has_previous: page > 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- parse_page_param ----------------------------------------------------

    #[test]
    fn missing_param_defaults_to_first_page() {
        assert_eq!(parse_page_param(None), 1);
    }

    #[test]
    fn malformed_param_defaults_to_first_page() {
        assert_eq!(parse_page_param(Some("abc")), 1);
        assert_eq!(parse_page_param(Some("")), 1);
        assert_eq!(parse_page_param(Some("-3")), 1);
        assert_eq!(parse_page_param(Some("0")), 1);
    }

    #[test]
    fn numeric_param_is_used() {
        assert_eq!(parse_page_param(Some("4")), 4);
    }

    // -- total_pages / clamp_page --------------------------------------------

    #[test]
    fn empty_listing_has_one_page() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(clamp_page(5, 0, 10), 1);
    }

    #[test]
    fn partial_last_page_counts() {
        assert_eq!(total_pages(21, 10), 3);
        assert_eq!(total_pages(20, 10), 2);
    }

    #[test]
    fn page_past_the_end_clamps_to_last() {
        assert_eq!(clamp_page(99, 21, 10), 3);
    }

    #[test]
    fn offset_of_clamped_page() {
        assert_eq!(page_offset(1, 16), 0);
        assert_eq!(page_offset(3, 16), 32);
    }

    // -- Paginated -----------------------------------------------------------

    #[test]
    fn first_of_several_pages() {
        let page = Paginated::new(vec![1, 2, 3], 1, 3, 7);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_next);
        assert!(!page.has_previous);
    }

    #[test]
    fn middle_page_has_both_neighbours() {
        let page = Paginated::new(vec![4, 5, 6], 2, 3, 7);
        assert!(page.has_next);
        assert!(page.has_previous);
    }

    #[test]
    fn last_page_has_no_next() {
        let page = Paginated::new(vec![7], 3, 3, 7);
        assert!(!page.has_next);
        assert!(page.has_previous);
    }

    #[test]
    fn single_empty_page() {
        let page: Paginated<i32> = Paginated::new(vec![], 1, 10, 0);
        assert_eq!(page.total_pages, 1);
        assert!(!page.has_next);
        assert!(!page.has_previous);
    }
}

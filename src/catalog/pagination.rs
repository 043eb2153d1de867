//! Page slicing for catalog and order lists.

use serde::{Deserialize, Serialize};

/// One page of a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// The 1-based page number that was requested.
    pub page: usize,
    /// Number of pages in the whole list.
    pub total_pages: usize,
    /// Number of items in the whole list.
    pub total_items: usize,
    /// 1-based position of the first item on this page, for row numbering.
    pub first_row: usize,
}

/// Returns page `page` (1-based) of `items`, `per_page` items per page.
///
/// A page past the end, page 0, or a `per_page` of 0 yields no items.
///
/// # Example
///
/// ```
/// use enrollment_pricing::catalog::paginate;
///
/// let items: Vec<u32> = (1..=12).collect();
/// let page = paginate(&items, 3, 5);
/// assert_eq!(page.items, vec![11, 12]);
/// assert_eq!(page.total_pages, 3);
/// assert_eq!(page.first_row, 11);
/// ```
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let total_items = items.len();
    let total_pages = if per_page == 0 {
        0
    } else {
        total_items.div_ceil(per_page)
    };

    let start = page.saturating_sub(1).saturating_mul(per_page);
    let page_items = if page == 0 || start >= total_items {
        Vec::new()
    } else {
        let end = start.saturating_add(per_page).min(total_items);
        items[start..end].to_vec()
    };

    Page {
        items: page_items,
        page,
        total_pages,
        total_items,
        first_row: start.saturating_add(1),
    }
}

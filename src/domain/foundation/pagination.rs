//! Pagination primitives shared by repository list queries.
//!
//! List endpoints use a fixed page size and a 1-based `page` query
//! parameter; the HTTP layer wraps a [`PageSlice`] into the
//! `{count, next, previous, results}` response envelope.

/// Fixed number of items per page for habit listings.
pub const PAGE_SIZE: u32 = 5;

/// A 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    number: u32,
}

impl Page {
    /// Builds a page request, clamping zero to the first page.
    pub fn new(number: u32) -> Self {
        Self {
            number: number.max(1),
        }
    }

    pub fn first() -> Self {
        Self { number: 1 }
    }

    /// 1-based page number.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Row offset for SQL `OFFSET`.
    pub fn offset(&self) -> u32 {
        (self.number - 1) * PAGE_SIZE
    }

    /// Row limit for SQL `LIMIT`.
    pub fn limit(&self) -> u32 {
        PAGE_SIZE
    }
}

/// One page of results together with the total row count.
#[derive(Debug, Clone)]
pub struct PageSlice<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: Page,
}

impl<T> PageSlice<T> {
    pub fn new(items: Vec<T>, total: u64, page: Page) -> Self {
        Self { items, total, page }
    }

    /// Whether a later page exists.
    pub fn has_next(&self) -> bool {
        u64::from(self.page.number()) * u64::from(PAGE_SIZE) < self.total
    }

    /// Whether an earlier page exists.
    pub fn has_previous(&self) -> bool {
        self.page.number() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_zero_clamps_to_first() {
        assert_eq!(Page::new(0).number(), 1);
        assert_eq!(Page::new(0).offset(), 0);
    }

    #[test]
    fn offset_advances_by_page_size() {
        assert_eq!(Page::new(1).offset(), 0);
        assert_eq!(Page::new(3).offset(), 2 * PAGE_SIZE);
    }

    #[test]
    fn slice_navigation_flags() {
        let slice = PageSlice::new(vec![1, 2, 3, 4, 5], 12, Page::new(2));
        assert!(slice.has_next());
        assert!(slice.has_previous());

        let last = PageSlice::new(vec![1, 2], 12, Page::new(3));
        assert!(!last.has_next());
        assert!(last.has_previous());

        let only = PageSlice::new(vec![1], 1, Page::first());
        assert!(!only.has_next());
        assert!(!only.has_previous());
    }
}

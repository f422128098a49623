//! Page window arithmetic shared by paginated endpoints.

/// Number of questions shown per page unless configured otherwise.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// A 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    pub fn new(page: usize, per_page: usize) -> Self {
        Self { page, per_page }
    }

    /// Offset of the first item on this page, saturating at `usize::MAX`.
    ///
    /// Page `0` is treated as page `1`.
    pub fn offset(&self) -> usize {
        (self.page.max(1) - 1).saturating_mul(self.per_page)
    }

    pub fn limit(&self) -> usize {
        self.per_page
    }

    /// Returns the `[start, end)` window of `items` covered by this page.
    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = start.saturating_add(self.per_page).min(items.len());
        &items[start..end]
    }
}

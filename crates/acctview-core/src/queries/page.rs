//! Page descriptor and query result types

use serde::Serialize;

/// Requested page (1-based) and page size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDescriptor {
    page: usize,
    page_size: usize,
}

impl PageDescriptor {
    pub const DEFAULT_PAGE_SIZE: usize = 10;

    /// Zero values are normalized to 1; `page` is not clamped against the
    /// result, so a page past the end simply yields no items.
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    pub fn first(page_size: usize) -> Self {
        Self::new(1, page_size)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Index of the first item on this page
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size)
    }

    /// Number of pages needed for `total` items
    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }
}

impl Default for PageDescriptor {
    fn default() -> Self {
        Self::first(Self::DEFAULT_PAGE_SIZE)
    }
}

/// Output of one engine invocation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult<R> {
    /// Records on the requested page, in sorted order
    pub items: Vec<R>,

    /// Matches before slicing
    pub total_matched: usize,

    /// `ceil(total_matched / page_size)`
    pub total_pages: usize,
}

impl<R> QueryResult<R> {
    pub fn is_empty(&self) -> bool {
        self.total_matched == 0
    }

    /// 1-based positions of the first and last item shown, `(0, 0)` when
    /// the page holds nothing ("Showing 51-100 of 230").
    pub fn window(&self, page: &PageDescriptor) -> (usize, usize) {
        if self.items.is_empty() {
            return (0, 0);
        }
        let first = page.offset() + 1;
        (first, first + self.items.len() - 1)
    }
}

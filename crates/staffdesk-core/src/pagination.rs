// ── Page cursor ──
//
// The bounds contract shared by every paginated list view: pages are
// 1-based and a request outside `1..=total_pages` is ignored.

use staffdesk_api::Pagination;

/// Number of pages needed for `total` items at `per_page` items per page.
///
/// A zero page size yields zero pages.
pub fn total_pages(total: u64, per_page: u32) -> u32 {
    if per_page == 0 {
        return 0;
    }
    let pages = total.div_ceil(u64::from(per_page));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Client-side page navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    current: u32,
    total_items: u64,
    per_page: u32,
}

impl PageCursor {
    pub fn new(per_page: u32) -> Self {
        Self {
            current: 1,
            total_items: 0,
            per_page,
        }
    }

    /// Build a cursor mirroring a server pagination echo.
    pub fn from_pagination(p: Pagination) -> Self {
        Self {
            current: p.page.max(1),
            total_items: p.total,
            per_page: p.limit,
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn total_pages(&self) -> u32 {
        total_pages(self.total_items, self.per_page)
    }

    pub fn set_total_items(&mut self, total: u64) {
        self.total_items = total;
    }

    /// Move to `page`. Returns `false` (and stays put) when out of bounds.
    pub fn go_to(&mut self, page: u32) -> bool {
        if page >= 1 && page <= self.total_pages() {
            self.current = page;
            true
        } else {
            false
        }
    }

    pub fn next(&mut self) -> bool {
        if self.current < self.total_pages() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    pub fn prev(&mut self) -> bool {
        if self.current > 1 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total_pages()
    }

    pub fn has_prev(&self) -> bool {
        self.current > 1
    }
}

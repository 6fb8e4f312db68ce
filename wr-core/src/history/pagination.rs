//! Page bookkeeping derived from the offset, page size and total count.

/// Derived position of the current page within the full result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub total_items: u64,
    pub total_pages: u64,
    pub current_page: u64,
    pub offset: u64,
    pub limit: u64,
    /// Number of reports on the current page
    pub displayed: u64,
}

/// An entry of the numbered page strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page { number: u64, current: bool },
    Gap,
}

impl PageInfo {
    pub fn new(offset: u64, limit: u64, total_items: u64, displayed: u64) -> Self {
        let limit = limit.max(1);
        Self {
            total_items,
            total_pages: total_items.div_ceil(limit),
            current_page: offset / limit + 1,
            offset,
            limit,
            displayed,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.offset > 0
    }

    /// Whether a later page is known to exist.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn offset_of(&self, page: u64) -> u64 {
        page.saturating_sub(1) * self.limit
    }

    /// e.g. `11-20 of 42 records`
    pub fn range_text(&self) -> String {
        if self.displayed == 0 {
            return format!("0 of {} records", self.total_items);
        }
        let start = self.offset + 1;
        let end = self.offset + self.displayed;
        format!("{}-{} of {} records", start, end, self.total_items)
    }

    /// First page, the current page with up to two successors, and the last
    /// page, with gaps where pages are skipped.
    pub fn window(&self) -> Vec<PageItem> {
        let current = self.current_page;
        let total = self.total_pages;
        let mut items = Vec::new();

        if current > 1 {
            items.push(PageItem::Page { number: 1, current: false });
            if current > 2 {
                items.push(PageItem::Gap);
            }
        }

        items.push(PageItem::Page { number: current, current: true });

        for number in (current + 1)..=(current + 2) {
            if number <= total {
                items.push(PageItem::Page { number, current: false });
            }
        }

        if current + 3 <= total {
            if current + 3 < total {
                items.push(PageItem::Gap);
            }
            items.push(PageItem::Page { number: total, current: false });
        }

        items
    }
}

//! Pagination
//!
//! Page arithmetic for the DataTable. Pages are 1-based.

use std::ops::Range;

use crate::i18n::{Locale, t_args};

/// Page navigation for a fixed page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_size: usize,
}

impl Pagination {
    /// Create a paginator; a zero page size is treated as one
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Pagination controls are only shown when rows overflow one page
    pub fn is_enabled(&self, total: usize) -> bool {
        total > self.page_size
    }

    /// Number of pages (at least one, even for an empty table)
    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    /// Clamp a requested page into `1..=total_pages`
    pub fn clamp_page(&self, page: usize, total: usize) -> usize {
        page.clamp(1, self.total_pages(total))
    }

    /// Row index range shown on `page`
    pub fn page_range(&self, page: usize, total: usize) -> Range<usize> {
        let page = self.clamp_page(page, total);
        let start = (page - 1) * self.page_size;
        let end = (start + self.page_size).min(total);
        start.min(end)..end
    }

    /// "1-10 of 42 items"
    pub fn total_label(&self, locale: Locale, page: usize, total: usize) -> String {
        let range = self.page_range(page, total);
        let start = if total == 0 { 0 } else { range.start + 1 };
        t_args(
            locale,
            "pagination-total",
            &[
                ("start", start.to_string().as_str()),
                ("end", range.end.to_string().as_str()),
                ("total", total.to_string().as_str()),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_and_ranges() {
        let p = Pagination::new(10);
        assert!(!p.is_enabled(10));
        assert!(p.is_enabled(11));
        assert_eq!(p.total_pages(0), 1);
        assert_eq!(p.total_pages(42), 5);
        assert_eq!(p.page_range(1, 42), 0..10);
        assert_eq!(p.page_range(5, 42), 40..42);
        assert_eq!(p.page_range(9, 42), 40..42);
        assert_eq!(p.page_range(0, 42), 0..10);
        assert_eq!(p.page_range(1, 0), 0..0);
    }

    #[test]
    fn total_label_is_one_based() {
        let p = Pagination::new(10);
        assert_eq!(p.total_label(Locale::EnUS, 2, 42), "11-20 of 42 items");
        assert_eq!(p.total_label(Locale::EnUS, 1, 0), "0-0 of 0 items");
    }
}

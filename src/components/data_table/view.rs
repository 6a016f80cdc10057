//! TableView - Sort, Filter and Page State
//!
//! Turns a data provider plus column definitions into the rows of one page.
//! Filtering runs first, then a stable sort, then pagination.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::ops::Range;
use std::sync::Arc;

use super::column::Column;
use super::data_provider::DataProvider;
use super::pagination::Pagination;
use crate::i18n::Locale;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascend,
    Descend,
}

/// Active sort
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub column: Arc<str>,
    pub order: SortOrder,
}

/// One rendered page of rows
#[derive(Debug, Clone)]
pub struct TablePage<R> {
    /// Rows on this page
    pub rows: Vec<R>,
    /// Current page (1-based, clamped)
    pub page: usize,
    /// Page count
    pub total_pages: usize,
    /// Rows that passed the filters
    pub matched: usize,
    /// Whether pagination controls should be shown
    pub paginated: bool,
    pagination: Pagination,
}

impl<R> TablePage<R> {
    /// Row index range of this page within the matched rows
    pub fn range(&self) -> Range<usize> {
        self.pagination.page_range(self.page, self.matched)
    }

    /// "1-10 of 42 items"
    pub fn total_label(&self, locale: Locale) -> String {
        self.pagination.total_label(locale, self.page, self.matched)
    }
}

/// View state for one table
#[derive(Debug, Clone)]
pub struct TableView {
    pagination: Pagination,
    sort: Option<SortState>,
    /// Selected filter values per column key
    filters: BTreeMap<Arc<str>, Vec<String>>,
    page: usize,
}

impl TableView {
    /// Create a view with the given page size
    pub fn new(page_size: usize) -> Self {
        Self {
            pagination: Pagination::new(page_size),
            sort: None,
            filters: BTreeMap::new(),
            page: 1,
        }
    }

    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    /// Header click: ascend → descend → unsorted. Another column starts at ascend.
    pub fn toggle_sort(&mut self, column: &str) {
        self.sort = match &self.sort {
            Some(current) if &*current.column == column => match current.order {
                SortOrder::Ascend => Some(SortState {
                    column: current.column.clone(),
                    order: SortOrder::Descend,
                }),
                SortOrder::Descend => None,
            },
            _ => Some(SortState {
                column: column.into(),
                order: SortOrder::Ascend,
            }),
        };
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: Option<SortState>) {
        self.sort = sort;
        self.page = 1;
    }

    /// Select filter values for a column; an empty selection removes the filter
    pub fn set_filter(&mut self, column: &str, values: Vec<String>) {
        if values.is_empty() {
            self.filters.remove(column);
        } else {
            self.filters.insert(column.into(), values);
        }
        self.page = 1;
    }

    /// Selected filter values for a column
    pub fn filter_values(&self, column: &str) -> &[String] {
        self.filters
            .get(column)
            .map(|v| v.as_slice())
            .unwrap_or_default()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    /// Produce the current page.
    ///
    /// A row passes a column filter when it matches any selected value;
    /// it must pass every filtered column.
    pub fn apply<P: DataProvider + ?Sized>(
        &self,
        columns: &[Column<P::Row>],
        provider: &P,
    ) -> TablePage<P::Row> {
        let mut rows: Vec<&P::Row> = provider.rows().collect();

        rows.retain(|row| {
            self.filters.iter().all(|(key, values)| {
                match columns.iter().find(|c| c.key == *key) {
                    Some(column) => values.iter().any(|v| column.matches_filter(v, row)),
                    None => true,
                }
            })
        });

        if let Some(sort) = &self.sort {
            if let Some(column) = columns.iter().find(|c| c.key == sort.column) {
                if column.is_sortable() {
                    rows.sort_by(|a, b| {
                        let ord = column.compare(a, b).unwrap_or(Ordering::Equal);
                        match sort.order {
                            SortOrder::Ascend => ord,
                            SortOrder::Descend => ord.reverse(),
                        }
                    });
                }
            }
        }

        let matched = rows.len();
        let page = self.pagination.clamp_page(self.page, matched);
        let range = self.pagination.page_range(page, matched);
        let rows = rows[range].iter().map(|row| (*row).clone()).collect();

        TablePage {
            rows,
            page,
            total_pages: self.pagination.total_pages(matched),
            matched,
            paginated: self.pagination.is_enabled(matched),
            pagination: self.pagination,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::data_table::column::FilterOption;

    fn columns() -> Vec<Column<(String, u32)>> {
        vec![
            Column::new("word", "Word", |r: &(String, u32)| r.0.clone())
                .sorter(|a, b| a.0.cmp(&b.0))
                .filter(
                    vec![FilterOption {
                        text: "Starts with a".into(),
                        value: "a".into(),
                    }],
                    |value, r| r.0.starts_with(value),
                ),
            Column::new("n", "N", |r: &(String, u32)| r.1.to_string()),
        ]
    }

    fn provider(words: &[&str]) -> Vec<(String, u32)> {
        words
            .iter()
            .enumerate()
            .map(|(i, w)| (w.to_string(), i as u32))
            .collect()
    }

    #[test]
    fn toggle_cycles_ascend_descend_none() {
        let mut view = TableView::new(10);
        view.toggle_sort("word");
        assert_eq!(view.sort().map(|s| s.order), Some(SortOrder::Ascend));
        view.toggle_sort("word");
        assert_eq!(view.sort().map(|s| s.order), Some(SortOrder::Descend));
        view.toggle_sort("word");
        assert!(view.sort().is_none());

        view.toggle_sort("word");
        view.toggle_sort("n");
        assert_eq!(
            view.sort(),
            Some(&SortState {
                column: "n".into(),
                order: SortOrder::Ascend
            })
        );
    }

    #[test]
    fn filters_then_sorts() {
        let mut view = TableView::new(10);
        view.set_filter("word", vec!["a".into()]);
        view.toggle_sort("word");
        view.toggle_sort("word");

        let rows = provider(&["apple", "pear", "avocado", "apricot"]);
        let page = view.apply(&columns(), &rows[..]);
        let words: Vec<_> = page.rows.iter().map(|r| r.0.as_str()).collect();
        assert_eq!(words, vec!["avocado", "apricot", "apple"]);
        assert_eq!(page.matched, 3);
        assert!(!page.paginated);
    }

    #[test]
    fn unsortable_column_keeps_insertion_order() {
        let mut view = TableView::new(10);
        view.set_sort(Some(SortState {
            column: "n".into(),
            order: SortOrder::Descend,
        }));
        let page = view.apply(&columns(), &provider(&["b", "a", "c"])[..]);
        let words: Vec<_> = page.rows.iter().map(|r| r.0.as_str()).collect();
        assert_eq!(words, vec!["b", "a", "c"]);
    }

    #[test]
    fn page_is_clamped_when_rows_shrink() {
        let mut view = TableView::new(2);
        view.set_page(3);
        let page = view.apply(&columns(), &provider(&["a", "b", "c", "d", "e"])[..]);
        assert_eq!(page.page, 3);
        assert_eq!(page.rows.len(), 1);
        assert!(page.paginated);
        assert_eq!(page.total_label(Locale::EnUS), "5-5 of 5 items");

        let page = view.apply(&columns(), &provider(&["a", "b"])[..]);
        assert_eq!(page.page, 1);
        assert_eq!(page.rows.len(), 2);
        assert!(!page.paginated);
        assert_eq!(page.range(), 0..2);
    }

    #[test]
    fn empty_selection_removes_filter() {
        let mut view = TableView::new(10);
        view.set_filter("word", vec!["a".into()]);
        assert_eq!(view.filter_values("word"), ["a".to_string()]);
        view.set_filter("word", Vec::new());
        assert!(view.filter_values("word").is_empty());
    }
}

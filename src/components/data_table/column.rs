//! Column Definition
//!
//! Defines table columns with their title, cell renderer, sort comparator
//! and filter predicate. Columns are pure configuration; rendering is left
//! to the display surface.

use std::cmp::Ordering;
use std::sync::Arc;

type RenderFn<R> = Box<dyn Fn(&R) -> String + Send + Sync>;
type SortFn<R> = Box<dyn Fn(&R, &R) -> Ordering + Send + Sync>;
type FilterFn<R> = Box<dyn Fn(&str, &R) -> bool + Send + Sync>;

/// One entry in a column's filter menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    /// Menu text
    pub text: String,
    /// Value passed to the predicate
    pub value: String,
}

/// Filter menu plus predicate
pub struct ColumnFilter<R> {
    options: Vec<FilterOption>,
    predicate: FilterFn<R>,
}

/// Column definition for the DataTable
pub struct Column<R> {
    /// Column identifier (the row field it shows)
    pub key: Arc<str>,
    /// Column header label
    pub title: Arc<str>,
    /// Whether long cell text is cut with an ellipsis
    pub ellipsis: bool,
    render: RenderFn<R>,
    sorter: Option<SortFn<R>>,
    filter: Option<ColumnFilter<R>>,
}

impl<R: 'static> Column<R> {
    /// Create a new column
    pub fn new(
        key: impl Into<Arc<str>>,
        title: impl Into<Arc<str>>,
        render: impl Fn(&R) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            ellipsis: false,
            render: Box::new(render),
            sorter: None,
            filter: None,
        }
    }

    /// Cut long cell text with an ellipsis
    pub fn ellipsis(mut self) -> Self {
        self.ellipsis = true;
        self
    }

    /// Make the column sortable with the given comparator (ascending order)
    pub fn sorter(mut self, compare: impl Fn(&R, &R) -> Ordering + Send + Sync + 'static) -> Self {
        self.sorter = Some(Box::new(compare));
        self
    }

    /// Give the column a filter menu and predicate
    pub fn filter(
        mut self,
        options: Vec<FilterOption>,
        predicate: impl Fn(&str, &R) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.filter = Some(ColumnFilter {
            options,
            predicate: Box::new(predicate),
        });
        self
    }

    pub fn is_sortable(&self) -> bool {
        self.sorter.is_some()
    }

    pub fn is_filterable(&self) -> bool {
        self.filter.is_some()
    }

    /// Filter menu entries (empty when the column has no filter)
    pub fn filter_options(&self) -> &[FilterOption] {
        self.filter
            .as_ref()
            .map(|f| f.options.as_slice())
            .unwrap_or_default()
    }

    /// Render a cell
    pub fn render_cell(&self, row: &R) -> String {
        (self.render)(row)
    }

    /// Compare two rows in ascending order; `None` when not sortable
    pub fn compare(&self, a: &R, b: &R) -> Option<Ordering> {
        self.sorter.as_ref().map(|sorter| sorter(a, b))
    }

    /// Whether `row` passes the filter value; rows always pass unfiltered columns
    pub fn matches_filter(&self, value: &str, row: &R) -> bool {
        self.filter
            .as_ref()
            .is_none_or(|filter| (filter.predicate)(value, row))
    }
}

impl<R> std::fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("ellipsis", &self.ellipsis)
            .field("sortable", &self.sorter.is_some())
            .field("filter_options", &self.filter.as_ref().map(|f| f.options.len()))
            .finish()
    }
}

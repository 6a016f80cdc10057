//! DataTable
//!
//! Column configuration and view state consumed by a table surface.

pub mod column;
pub mod data_provider;
pub mod pagination;
pub mod view;

pub use column::{Column, FilterOption};
pub use data_provider::DataProvider;
pub use pagination::Pagination;
pub use view::{SortOrder, SortState, TablePage, TableView};

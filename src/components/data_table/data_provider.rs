//! DataProvider Trait
//!
//! Read-only access to the rows a table view pages over. Rows are borrowed
//! from their owner; a view clones only the rows that land on the page.

/// Source of rows for a table view
pub trait DataProvider {
    type Row: Clone + 'static;

    /// Total number of rows
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rows in source order
    fn rows(&self) -> impl Iterator<Item = &Self::Row>;
}

impl<R: Clone + 'static> DataProvider for [R] {
    type Row = R;

    fn len(&self) -> usize {
        <[R]>::len(self)
    }

    fn rows(&self) -> impl Iterator<Item = &R> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_yield_rows_in_order() {
        let rows = [3, 1, 2];
        let provider: &[i32] = &rows;
        assert_eq!(DataProvider::len(provider), 3);
        assert!(!DataProvider::is_empty(provider));
        assert_eq!(provider.rows().copied().collect::<Vec<_>>(), vec![3, 1, 2]);
    }
}

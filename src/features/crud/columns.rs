//! Record Columns
//!
//! Column configuration for the records table: name (text sort), category
//! (filter by option code), description (ellipsis) and creation date
//! (chronological sort).

use std::cmp::Ordering;

use crate::components::data_table::{Column, FilterOption};
use crate::constants::DESCRIPTION_ELLIPSIS_LEN;
use crate::domain::option::label_for;
use crate::domain::{CategoryOption, Record};
use crate::i18n::{Locale, t};
use crate::utils::format::{format_date, truncate};

/// Case-insensitive text order, ties broken by exact text
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Row key for the records table
pub fn row_key(record: &Record) -> &str {
    record.id().as_str()
}

/// Exact match of a record's category against a filter value
pub fn category_matches(value: &str, record: &Record) -> bool {
    record.category() == value
}

/// Columns for the records table, in display order
pub fn record_columns(categories: &[CategoryOption], locale: Locale) -> Vec<Column<Record>> {
    let labels = categories.to_vec();
    let filters: Vec<FilterOption> = categories
        .iter()
        .map(|o| FilterOption {
            text: o.label.clone(),
            value: o.value.clone(),
        })
        .collect();

    vec![
        Column::new("name", t(locale, "field-name"), |r: &Record| r.name().to_string())
            .sorter(|a: &Record, b: &Record| compare_text(a.name(), b.name())),
        Column::new("category", t(locale, "field-category"), move |r: &Record| {
            label_for(&labels, r.category())
                .unwrap_or(r.category())
                .to_string()
        })
        .filter(filters, category_matches),
        Column::new("description", t(locale, "field-description"), |r: &Record| {
            truncate(r.description().unwrap_or_default(), DESCRIPTION_ELLIPSIS_LEN)
        })
        .ellipsis(),
        Column::new("createdAt", t(locale, "column-created-at"), |r: &Record| {
            format_date(&r.created_at())
        })
        .sorter(|a: &Record, b: &Record| a.created_at().cmp(&b.created_at())),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::option::default_categories;
    use crate::domain::{RecordFields, RecordId};
    use chrono::{Duration, Utc};

    fn record(name: &str, category: &str, age_days: i64) -> Record {
        Record::new(
            RecordId::generate(),
            RecordFields {
                name: name.into(),
                category: category.into(),
                ..Default::default()
            },
            Utc::now() - Duration::days(age_days),
        )
    }

    #[test]
    fn columns_in_display_order() {
        let columns = record_columns(&default_categories(), Locale::EnUS);
        let keys: Vec<_> = columns.iter().map(|c| &*c.key).collect();
        assert_eq!(keys, vec!["name", "category", "description", "createdAt"]);
        let titles: Vec<_> = columns.iter().map(|c| &*c.title).collect();
        assert_eq!(titles, vec!["Name", "Category", "Description", "Created At"]);
    }

    #[test]
    fn name_sorts_lexicographically_ignoring_case() {
        let columns = record_columns(&default_categories(), Locale::EnUS);
        let name = &columns[0];
        let a = record("alpha", "health", 0);
        let b = record("Beta", "health", 0);
        assert_eq!(name.compare(&a, &b), Some(Ordering::Less));
        assert_eq!(compare_text("Same", "same"), Ordering::Less);
    }

    #[test]
    fn created_at_sorts_chronologically() {
        let columns = record_columns(&default_categories(), Locale::EnUS);
        let created = &columns[3];
        let older = record("x", "health", 3);
        let newer = record("y", "health", 1);
        assert_eq!(created.compare(&older, &newer), Some(Ordering::Less));
    }

    #[test]
    fn category_filters_on_code_and_renders_label() {
        let columns = record_columns(&default_categories(), Locale::EnUS);
        let category = &columns[1];
        let r = record("x", "finance", 0);
        assert!(category.matches_filter("finance", &r));
        assert!(!category.matches_filter("Finance", &r));
        assert_eq!(category.render_cell(&r), "Finance");
        assert_eq!(category.filter_options().len(), 5);
        assert!(!columns[2].is_sortable());
        assert!(columns[2].ellipsis);
        assert_eq!(row_key(&r), r.id().as_str());
    }
}

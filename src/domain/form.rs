//! Form - Draft Values Bound to the Create/Update Form

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Fields a draft can track
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Name,
    Category,
    Description,
    Email,
    Country,
}

impl FieldName {
    /// Every known field, in form order
    pub const ALL: [FieldName; 5] = [
        FieldName::Name,
        FieldName::Category,
        FieldName::Description,
        FieldName::Email,
        FieldName::Country,
    ];

    /// Stable key used in events and config
    pub fn key(self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Category => "category",
            FieldName::Description => "description",
            FieldName::Email => "email",
            FieldName::Country => "country",
        }
    }

    /// Whether submit refuses an empty value for this field
    pub fn is_required(self) -> bool {
        matches!(self, FieldName::Name | FieldName::Category)
    }
}

impl FromStr for FieldName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|f| f.key() == s)
            .ok_or_else(|| Error::InvalidField {
                name: s.to_string(),
            })
    }
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Which fields the form shows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormLayout {
    /// Name, category and description
    #[default]
    Basic,
    /// Basic fields plus email and country
    Extended,
}

impl FormLayout {
    /// Tracked fields, in form order
    pub fn fields(self) -> &'static [FieldName] {
        match self {
            FormLayout::Basic => &[FieldName::Name, FieldName::Category, FieldName::Description],
            FormLayout::Extended => &FieldName::ALL,
        }
    }

    /// Whether the layout tracks the given field
    pub fn tracks(self, field: FieldName) -> bool {
        self.fields().contains(&field)
    }
}

/// Unvalidated draft values. Every field is always present, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub category: String,
    pub description: String,
    pub email: String,
    pub country: String,
}

impl FormValues {
    /// Read one field
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Category => &self.category,
            FieldName::Description => &self.description,
            FieldName::Email => &self.email,
            FieldName::Country => &self.country,
        }
    }

    /// Replace one field, leaving the others untouched
    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        let slot = match field {
            FieldName::Name => &mut self.name,
            FieldName::Category => &mut self.category,
            FieldName::Description => &mut self.description,
            FieldName::Email => &mut self.email,
            FieldName::Country => &mut self.country,
        };
        *slot = value.into();
    }

    /// Builder-style variant of [`FormValues::set`]
    pub fn with(mut self, field: FieldName, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Whether every field is empty
    pub fn is_empty(&self) -> bool {
        FieldName::ALL.into_iter().all(|f| self.get(f).is_empty())
    }

    /// Character count of the description, for the textarea counter
    pub fn description_len(&self) -> usize {
        self.description.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_and_unknown_fields() {
        assert_eq!("email".parse::<FieldName>().ok(), Some(FieldName::Email));
        assert!(matches!(
            "age".parse::<FieldName>(),
            Err(Error::InvalidField { name }) if name == "age"
        ));
    }

    #[test]
    fn set_does_not_clobber_siblings() {
        let values = FormValues::default()
            .with(FieldName::Name, "Alpha")
            .with(FieldName::Description, "first");
        assert_eq!(values.name, "Alpha");
        assert_eq!(values.description, "first");
        assert!(values.category.is_empty());
    }

    #[test]
    fn only_name_and_category_are_required() {
        let required: Vec<_> = FieldName::ALL
            .into_iter()
            .filter(|f| f.is_required())
            .collect();
        assert_eq!(required, vec![FieldName::Name, FieldName::Category]);
    }

    #[test]
    fn layouts_track_expected_fields() {
        assert!(!FormLayout::Basic.tracks(FieldName::Email));
        assert!(FormLayout::Extended.tracks(FieldName::Country));
        assert_eq!(FormLayout::Basic.fields().len(), 3);
    }

    #[test]
    fn description_len_counts_chars() {
        let values = FormValues::default().with(FieldName::Description, "héllo");
        assert_eq!(values.description_len(), 5);
        assert!(!values.is_empty());
        assert!(FormValues::default().is_empty());
    }
}

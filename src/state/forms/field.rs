//! Form field identifiers and the enquiry value record

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifies one input of the enquiry form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Designation,
    BrandName,
    Website,
    Location,
    Category,
    Instagram,
    Query,
}

/// Returned when a field name does not match any form input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form field: {0}")]
pub struct FieldParseError(pub String);

impl Field {
    /// All fields in display order
    pub const ALL: [Field; 10] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Designation,
        Field::BrandName,
        Field::Website,
        Field::Location,
        Field::Category,
        Field::Instagram,
        Field::Query,
    ];

    /// Name used in payloads and for lookups
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Designation => "designation",
            Self::BrandName => "brandName",
            Self::Website => "website",
            Self::Location => "location",
            Self::Category => "category",
            Self::Instagram => "instagram",
            Self::Query => "query",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email address",
            Self::Phone => "Phone number",
            Self::Designation => "Designation",
            Self::BrandName => "Brand Name",
            Self::Website => "Brand website/ ecommerce store",
            Self::Location => "Location (Country/City)",
            Self::Category => "Category",
            Self::Instagram => "Instagram Handle",
            Self::Query => "Query /regarding",
        }
    }

    /// Whether the label carries the required marker
    pub fn is_required(&self) -> bool {
        matches!(
            self,
            Self::Name | Self::Email | Self::Phone | Self::BrandName | Self::Category | Self::Query
        )
    }

    /// Position in [`Field::ALL`]
    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|f| f == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = FieldParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| FieldParseError(s.to_string()))
    }
}

/// The values entered into the enquiry form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub designation: String,
    pub brand_name: String,
    pub website: String,
    pub location: String,
    pub category: String,
    pub instagram: String,
    pub query: String,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Designation => &self.designation,
            Field::BrandName => &self.brand_name,
            Field::Website => &self.website,
            Field::Location => &self.location,
            Field::Category => &self.category,
            Field::Instagram => &self.instagram,
            Field::Query => &self.query,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        *self.get_mut(field) = value;
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Designation => &mut self.designation,
            Field::BrandName => &mut self.brand_name,
            Field::Website => &mut self.website,
            Field::Location => &mut self.location,
            Field::Category => &mut self.category,
            Field::Instagram => &mut self.instagram,
            Field::Query => &mut self.query,
        }
    }

    /// Number of fields holding a non-empty value
    pub fn filled_count(&self) -> usize {
        Field::ALL
            .iter()
            .filter(|f| !self.get(**f).is_empty())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod field {
        use super::*;

        #[test]
        fn test_all_has_every_field_once() {
            let mut names: Vec<_> = Field::ALL.iter().map(|f| f.as_str()).collect();
            names.sort();
            names.dedup();
            assert_eq!(names.len(), 10);
        }

        #[test]
        fn test_from_str_round_trips_names() {
            for field in Field::ALL {
                assert_eq!(field.as_str().parse::<Field>(), Ok(field));
            }
        }

        #[test]
        fn test_from_str_uses_camel_case() {
            assert_eq!("brandName".parse::<Field>(), Ok(Field::BrandName));
            assert!("brand_name".parse::<Field>().is_err());
        }

        #[test]
        fn test_from_str_unknown() {
            let err = "fax".parse::<Field>().unwrap_err();
            assert_eq!(err.to_string(), "unknown form field: fax");
        }

        #[test]
        fn test_required_fields() {
            let required: Vec<_> = Field::ALL.into_iter().filter(Field::is_required).collect();
            assert_eq!(
                required,
                vec![
                    Field::Name,
                    Field::Email,
                    Field::Phone,
                    Field::BrandName,
                    Field::Category,
                    Field::Query
                ]
            );
        }

        #[test]
        fn test_instagram_is_not_marked_required() {
            assert!(!Field::Instagram.is_required());
        }

        #[test]
        fn test_index_matches_display_order() {
            assert_eq!(Field::Name.index(), 0);
            assert_eq!(Field::BrandName.index(), 4);
            assert_eq!(Field::Query.index(), 9);
        }
    }

    mod form_values {
        use super::*;

        #[test]
        fn test_default_is_empty() {
            let values = FormValues::default();
            for field in Field::ALL {
                assert_eq!(values.get(field), "");
            }
            assert_eq!(values.filled_count(), 0);
        }

        #[test]
        fn test_set_only_touches_named_field() {
            let mut values = FormValues::default();
            values.set(Field::BrandName, "Acme".to_string());
            assert_eq!(values.brand_name, "Acme");
            assert_eq!(values.filled_count(), 1);
        }

        #[test]
        fn test_serializes_camel_case() {
            let values = FormValues {
                brand_name: "Acme".to_string(),
                ..Default::default()
            };
            let json = serde_json::to_value(&values).unwrap();
            assert_eq!(json["brandName"], "Acme");
            assert!(json.get("brand_name").is_none());
        }

        #[test]
        fn test_deserialize_partial() {
            let values: FormValues = serde_json::from_str(r#"{"email": "jo@x.com"}"#).unwrap();
            assert_eq!(values.email, "jo@x.com");
            assert_eq!(values.name, "");
        }
    }
}

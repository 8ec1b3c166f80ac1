//! Field constraints and the per-field error mapping

use super::field::{Field, FormValues};
use std::collections::BTreeMap;

/// A predicate over one field's value and the message shown when it fails
#[derive(Clone, Copy)]
pub struct FieldConstraint {
    pub field: Field,
    pub check: fn(&str) -> bool,
    pub message: &'static str,
}

impl FieldConstraint {
    pub fn passes(&self, values: &FormValues) -> bool {
        (self.check)(values.get(self.field))
    }
}

/// Constraints checked by the contact form. Fields not listed are unconstrained.
pub const CONSTRAINTS: &[FieldConstraint] = &[
    FieldConstraint {
        field: Field::Name,
        check: |v| min_len(v, 2),
        message: "Name must be at least 2 characters long",
    },
    FieldConstraint {
        field: Field::Email,
        check: is_valid_email,
        message: "Please enter a valid email address",
    },
    FieldConstraint {
        field: Field::Phone,
        check: |v| min_len(v, 5),
        message: "Please enter a valid phone number",
    },
    FieldConstraint {
        field: Field::BrandName,
        check: |v| min_len(v, 1),
        message: "Brand name is required",
    },
    FieldConstraint {
        field: Field::Category,
        check: |v| min_len(v, 1),
        message: "Category is required",
    },
    FieldConstraint {
        field: Field::Query,
        check: |v| min_len(v, 3),
        message: "Please provide details about your query",
    },
];

fn min_len(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

/// Check `value` against the email grammar: `local@domain.tld`
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.rsplit_once('@') else {
        return false;
    };
    is_valid_local_part(local) && is_valid_domain(domain)
}

fn is_valid_local_part(local: &str) -> bool {
    !local.is_empty()
        && !local.starts_with('.')
        && local
            .chars()
            .last()
            .is_some_and(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '-'))
        && !local.contains("..")
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '\'' | '+' | '-' | '.'))
}

fn is_valid_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    let (tld, rest) = match labels.split_last() {
        Some(parts) => parts,
        None => return false,
    };

    let labels_ok = rest.iter().all(|label| {
        label
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphanumeric())
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });

    labels_ok && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// Sparse mapping from field to its current error message.
///
/// A field without an entry has no error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Remove the error for `field`, returning whether one was recorded
    pub fn clear_field(&mut self, field: Field) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }
}

/// Evaluate every constraint independently and collect the failures
pub fn validate_values(values: &FormValues) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for constraint in CONSTRAINTS {
        if !constraint.passes(values) {
            errors.insert(constraint.field, constraint.message);
        }
    }
    errors
}

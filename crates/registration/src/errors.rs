//! Per-field validation failures.

use std::fmt;

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use signup_validator::foundation::ValidationError;

use crate::field::Field;

/// The first failing rule of every rejected field.
///
/// Iteration follows [`Field`] order. Serializes as `{"<field>": "<message>"}`,
/// the shape the form renders next to each input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: IndexMap<Field, ValidationError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `error` for `field` unless the field already failed.
    ///
    /// Returns `false` when an earlier error was kept.
    pub(crate) fn insert(&mut self, field: Field, error: ValidationError) -> bool {
        if self.errors.contains_key(&field) {
            return false;
        }
        self.errors.insert(field, error);
        self.errors.sort_keys();
        true
    }

    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    /// The user-facing message for `field`, if it failed.
    pub fn message(&self, field: Field) -> Option<&str> {
        self.get(field).map(|error| &*error.message)
    }

    /// The machine code for `field`, if it failed.
    pub fn code(&self, field: Field) -> Option<&str> {
        self.get(field).map(|error| &*error.code)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &ValidationError)> {
        self.errors.iter().map(|(field, error)| (*field, error))
    }

    /// Removes and returns the error of one field.
    pub fn take(&mut self, field: Field) -> Option<ValidationError> {
        self.errors.shift_remove(&field)
    }
}

impl IntoIterator for FieldErrors {
    type Item = (Field, ValidationError);
    type IntoIter = indexmap::map::IntoIter<Field, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for (field, error) in &self.errors {
            map.serialize_entry(field.as_str(), &*error.message)?;
        }
        map.end()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (field, error)) in self.errors.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{field}: {}", error.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn error(message: &'static str) -> ValidationError {
        ValidationError::new("required", message)
    }

    #[test]
    fn test_first_error_wins() {
        let mut errors = FieldErrors::new();
        assert!(errors.insert(Field::Day, error("day is required")));
        assert!(!errors.insert(Field::Day, error("Invalid day")));

        assert_eq!(errors.message(Field::Day), Some("day is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_iteration_follows_field_order() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::ConfirmPassword, error("Passwords are not matched"));
        errors.insert(Field::FullName, error("Full Name field is required"));
        errors.insert(Field::Year, error("Invalid year"));

        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(fields, vec![Field::FullName, Field::ConfirmPassword, Field::Year]);
    }

    #[test]
    fn test_serializes_messages_by_field() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::Email, error("Email is required"));
        errors.insert(Field::Day, error("Invalid day"));

        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            json!({ "email": "Email is required", "day": "Invalid day" })
        );
        assert_eq!(errors.to_string(), "email: Email is required\nday: Invalid day");
    }

    #[test]
    fn test_take() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::Email, error("Email is required"));
        assert!(errors.take(Field::Email).is_some());
        assert!(errors.is_empty());
    }
}

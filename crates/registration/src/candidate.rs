//! Raw form input.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::Month;
use crate::field::Field;

/// The registration form exactly as the user left it.
///
/// Every input is text; an untouched input is the empty string. Keys use
/// the form's camelCase identifiers on the wire.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationCandidate {
    pub full_name: String,
    pub contact_number: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub day: String,
    pub month: String,
    pub year: String,
}

impl RegistrationCandidate {
    /// A blank form whose birth-date pickers start on `today`.
    pub fn with_today(today: NaiveDate) -> Self {
        Self {
            day: today.day().to_string(),
            month: Month::of(today).abbreviation().to_owned(),
            year: today.year().to_string(),
            ..Self::default()
        }
    }

    /// The raw value of one input.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::ContactNumber => &self.contact_number,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
            Field::Year => &self.year,
            Field::Month => &self.month,
            Field::Day => &self.day,
        }
    }

    /// Mutable access to one input, for form-style editing.
    pub fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FullName => &mut self.full_name,
            Field::ContactNumber => &mut self.contact_number,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
            Field::Year => &mut self.year,
            Field::Month => &mut self.month,
            Field::Day => &mut self.day,
        }
    }
}

impl fmt::Debug for RegistrationCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationCandidate")
            .field("full_name", &self.full_name)
            .field("contact_number", &self.contact_number)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("confirm_password", &"[REDACTED]")
            .field("day", &self.day)
            .field("month", &self.month)
            .field("year", &self.year)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_with_today_prefills_birth_date() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        let candidate = RegistrationCandidate::with_today(today);

        assert_eq!(candidate.year, "2024");
        assert_eq!(candidate.month, "Jun");
        assert_eq!(candidate.day, "5");
        assert!(candidate.full_name.is_empty());
        assert!(candidate.password.is_empty());
    }

    #[test]
    fn test_deserializes_form_keys() {
        let candidate: RegistrationCandidate = serde_json::from_value(serde_json::json!({
            "fullName": "Jane Doe",
            "contactNumber": "123-456-7890",
            "confirmPassword": "x",
            "month": "Mar",
        }))
        .unwrap();

        assert_eq!(candidate.full_name, "Jane Doe");
        assert_eq!(candidate.value(Field::ContactNumber), "123-456-7890");
        assert_eq!(candidate.value(Field::ConfirmPassword), "x");
        assert_eq!(candidate.value(Field::Email), "");
    }

    #[test]
    fn test_debug_redacts_passwords() {
        let mut candidate = RegistrationCandidate::default();
        *candidate.value_mut(Field::Password) = "Secret123".into();
        candidate.confirm_password = "Secret123".into();

        let debug = format!("{candidate:?}");
        assert!(!debug.contains("Secret123"));
        assert!(debug.contains("[REDACTED]"));
    }
}

//! Identifiers of the registration form inputs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A registration form input, in evaluation order.
///
/// Serializes as the form's camelCase identifier (`"fullName"`, …).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FullName,
    ContactNumber,
    Email,
    Password,
    ConfirmPassword,
    Year,
    Month,
    Day,
}

impl Field {
    /// Every field in evaluation order.
    pub const ALL: [Field; 8] = [
        Field::FullName,
        Field::ContactNumber,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
        Field::Year,
        Field::Month,
        Field::Day,
    ];

    /// The form identifier of the field.
    pub const fn as_str(self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::ContactNumber => "contactNumber",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::Year => "year",
            Field::Month => "month",
            Field::Day => "day",
        }
    }

    /// Finds a field by its form identifier.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == name)
    }

    /// True for the three birth-date pickers.
    pub const fn is_birth_date(self) -> bool {
        matches!(self, Field::Year | Field::Month | Field::Day)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! The validated, type-coerced registration.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::calendar::{BirthDate, Month};

/// A registration that passed every rule, shaped for the create-user
/// endpoint.
///
/// Serializes as
/// `{full_name, contact_number, email, password, day, month, year}` with
/// `day` and `year` as numbers and `month` as its abbreviation.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub full_name: String,
    pub contact_number: String,
    pub email: String,
    pub password: String,
    pub day: u32,
    pub month: Month,
    pub year: i32,
}

impl NormalizedRecord {
    /// The birth date as a calendar value.
    pub fn birth_date(&self) -> Option<BirthDate> {
        BirthDate::new(self.year, self.month, self.day)
    }
}

impl fmt::Debug for NormalizedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NormalizedRecord")
            .field("full_name", &self.full_name)
            .field("contact_number", &self.contact_number)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("day", &self.day)
            .field("month", &self.month)
            .field("year", &self.year)
            .finish()
    }
}

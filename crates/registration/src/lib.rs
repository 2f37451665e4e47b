//! # signup-registration
//!
//! The rule set of the account-registration form.
//!
//! A [`RegistrationCandidate`] holds the raw form fields as strings.
//! [`validate`] either turns it into a [`NormalizedRecord`] ready to be
//! posted, or returns [`FieldErrors`] with one message per failing field.
//! "Today" always comes from an injected [`Clock`].
//!
//! ```rust
//! use signup_registration::{FixedClock, Month, RegistrationCandidate, validate};
//!
//! let candidate = RegistrationCandidate {
//!     full_name: "Jane Doe".into(),
//!     contact_number: "123-456-7890".into(),
//!     email: "jane@example.com".into(),
//!     password: "Passw0rd".into(),
//!     confirm_password: "Passw0rd".into(),
//!     day: "10".into(),
//!     month: "Mar".into(),
//!     year: "1990".into(),
//! };
//! let clock = FixedClock::from_ymd(2024, 6, 15).unwrap();
//!
//! let record = validate(&candidate, &clock).unwrap();
//! assert_eq!(record.day, 10);
//! assert_eq!(record.month, Month::Mar);
//! assert_eq!(record.year, 1990);
//! ```
//!
//! ## Evaluation order
//!
//! Single-field rules run first, each field reporting its first failing rule.
//! Cross-field rules follow: password confirmation, day-in-month, and
//! finally the future-date check on the year. A cross-field rule never
//! replaces an error a field already has.

#![allow(clippy::result_large_err)]

pub mod calendar;
pub mod candidate;
pub mod clock;
pub mod errors;
pub mod field;
pub mod messages;
pub mod record;
mod rules;
pub mod validator;

pub use calendar::{
    BirthDate, EARLIEST_YEAR, Month, ParseMonthError, clamp_day, day_options, days_in_month,
    year_options,
};
pub use candidate::RegistrationCandidate;
pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::FieldErrors;
pub use field::Field;
pub use record::NormalizedRecord;
pub use validator::{RegistrationValidator, validate, validate_field};

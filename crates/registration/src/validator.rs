//! Whole-record and per-field validation.

use chrono::NaiveDate;
use signup_validator::foundation::{Validate, ValidationError};

use crate::calendar::BirthDate;
use crate::candidate::RegistrationCandidate;
use crate::clock::{Clock, SystemClock};
use crate::errors::FieldErrors;
use crate::field::Field;
use crate::record::NormalizedRecord;
use crate::rules::{CalendarDate, NotInFuture, PasswordsMatch, field_rules};

/// Validates registration candidates against a clock.
///
/// ```rust
/// use signup_registration::{Field, FixedClock, RegistrationCandidate, RegistrationValidator};
///
/// let validator = RegistrationValidator::new(FixedClock::from_ymd(2024, 6, 15).unwrap());
/// let errors = validator.validate(&RegistrationCandidate::default()).unwrap_err();
///
/// assert_eq!(errors.len(), 8);
/// assert_eq!(errors.message(Field::FullName), Some("Full Name field is required"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RegistrationValidator<C = SystemClock> {
    clock: C,
}

impl<C: Clock> RegistrationValidator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Runs every rule and normalizes the candidate.
    pub fn validate(
        &self,
        candidate: &RegistrationCandidate,
    ) -> Result<NormalizedRecord, FieldErrors> {
        validate_on(candidate, self.clock.today())
    }

    /// The error [`validate`](Self::validate) reports for `field`, if any.
    pub fn validate_field(
        &self,
        candidate: &RegistrationCandidate,
        field: Field,
    ) -> Result<(), ValidationError> {
        match self.validate(candidate) {
            Ok(_) => Ok(()),
            Err(mut errors) => errors.take(field).map_or(Ok(()), Err),
        }
    }
}

/// Validates `candidate` with "today" taken from `clock`.
pub fn validate<C: Clock + ?Sized>(
    candidate: &RegistrationCandidate,
    clock: &C,
) -> Result<NormalizedRecord, FieldErrors> {
    validate_on(candidate, clock.today())
}

/// Validates a single field, for feedback while the form is being filled.
pub fn validate_field<C: Clock + ?Sized>(
    candidate: &RegistrationCandidate,
    field: Field,
    clock: &C,
) -> Result<(), ValidationError> {
    RegistrationValidator::new(clock).validate_field(candidate, field)
}

#[tracing::instrument(level = "trace", skip(candidate))]
fn validate_on(
    candidate: &RegistrationCandidate,
    today: NaiveDate,
) -> Result<NormalizedRecord, FieldErrors> {
    let mut errors = FieldErrors::new();

    for (field, rule) in field_rules(today) {
        if let Err(error) = rule.validate(candidate) {
            errors.insert(field, error);
        }
    }

    if let Err(error) = PasswordsMatch.validate(candidate) {
        errors.insert(Field::ConfirmPassword, error);
    }

    let birth_date = match CalendarDate.resolve(candidate) {
        Ok(date) => Some(date),
        Err(error) => {
            errors.insert(Field::Day, error);
            None
        }
    };

    if let Some(date) = birth_date
        && let Err(error) = NotInFuture::new(today).validate(&date)
    {
        errors.insert(Field::Year, error);
    }

    match (errors.is_empty(), birth_date) {
        (true, Some(date)) => Ok(normalize(candidate, date)),
        _ => {
            for (field, error) in errors.iter() {
                tracing::debug!(field = %field, code = %error.code, "registration field rejected");
            }
            Err(errors)
        }
    }
}

fn normalize(candidate: &RegistrationCandidate, date: BirthDate) -> NormalizedRecord {
    NormalizedRecord {
        full_name: candidate.full_name.clone(),
        contact_number: candidate.contact_number.clone(),
        email: candidate.email.clone(),
        password: candidate.password.clone(),
        day: date.day(),
        month: date.month(),
        year: date.year(),
    }
}

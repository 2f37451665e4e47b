//! The ordered rule table of the registration form.

use chrono::{Datelike, NaiveDate};
use signup_validator::foundation::{Validate, ValidateExt, ValidationError};
use signup_validator::validator;
use signup_validator::validators::{
    character_classes, email, min_length, no_surrounding_spaces, no_symbols, not_empty, phone,
};

use crate::calendar::{BirthDate, Month};
use crate::candidate::RegistrationCandidate;
use crate::field::Field;
use crate::messages;

/// A rule evaluated against the whole candidate.
pub(crate) type CandidateRule = Box<dyn Validate<Input = RegistrationCandidate> + Send + Sync>;

// ============================================================================
// VALUE RULES
// ============================================================================

validator! {
    /// A positive integer year no later than `max`.
    #[derive(Copy, PartialEq, Eq)]
    pub(crate) YearNotAfter { max: i32 } for str;
    rule(self, input) { parse_year(input).is_some_and(|year| year <= self.max) }
    error(self, input) {
        ValidationError::new("invalid_year", messages::INVALID_YEAR)
            .with_param("max", self.max.to_string())
    }
}

validator! {
    /// One of the canonical month abbreviations.
    pub(crate) MonthName for str;
    rule(input) { input.parse::<Month>().is_ok() }
    error(input) { ValidationError::new("invalid_month", messages::INVALID_MONTH) }
}

validator! {
    /// The confirmation repeats the password exactly.
    pub(crate) PasswordsMatch for RegistrationCandidate;
    rule(input) { input.password == input.confirm_password }
    error(input) {
        ValidationError::new("password_mismatch", messages::PASSWORDS_NOT_MATCHED)
            .with_field(Field::ConfirmPassword.as_str())
    }
}

validator! {
    /// The birth date is not later than `today`.
    #[derive(Copy, PartialEq, Eq)]
    pub(crate) NotInFuture { today: NaiveDate } for BirthDate;
    rule(self, input) { !input.is_after(self.today) }
    error(self, input) {
        ValidationError::new("future_birth_date", messages::FUTURE_BIRTH_DATE)
            .with_field(Field::Year.as_str())
            .with_param("date", input.to_string())
    }
}

/// Resolves the three date inputs into a calendar date.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct CalendarDate;

impl CalendarDate {
    pub(crate) fn resolve(
        &self,
        candidate: &RegistrationCandidate,
    ) -> Result<BirthDate, ValidationError> {
        let month = candidate.month.parse::<Month>().ok();
        let year = parse_year(&candidate.year);
        let day = candidate.day.parse::<u32>().ok();

        let date = match (year, month, day) {
            (Some(year), Some(month), Some(day)) => BirthDate::new(year, month, day),
            _ => None,
        };
        date.ok_or_else(|| {
            ValidationError::new("invalid_day", messages::INVALID_DAY)
                .with_field(Field::Day.as_str())
        })
    }
}

impl Validate for CalendarDate {
    type Input = RegistrationCandidate;

    fn validate(&self, input: &RegistrationCandidate) -> Result<(), ValidationError> {
        self.resolve(input).map(|_| ())
    }
}

/// Parses a year input; only positive integers count.
pub(crate) fn parse_year(input: &str) -> Option<i32> {
    input.parse::<i32>().ok().filter(|year| *year > 0)
}

// ============================================================================
// RULE TABLE
// ============================================================================

fn required(message: &'static str) -> impl Validate<Input = str> + Send + Sync {
    not_empty().with_message(message).with_code("required")
}

fn entry<R>(field: Field, rule: R) -> (Field, CandidateRule)
where
    R: Validate<Input = RegistrationCandidate> + Send + Sync + 'static,
{
    (field, Box::new(rule))
}

/// The single-field rules, one chain per field in evaluation order.
///
/// Each chain stops at its first failing rule.
pub(crate) fn field_rules(today: NaiveDate) -> Vec<(Field, CandidateRule)> {
    vec![
        entry(
            Field::FullName,
            required(messages::FULL_NAME_REQUIRED)
                .and(
                    no_symbols()
                        .with_message(messages::SYMBOL_NOT_ALLOWED)
                        .with_code("symbol_not_allowed"),
                )
                .and(no_surrounding_spaces().with_message(messages::SPACES_AROUND))
                .for_field(Field::FullName.as_str(), |c: &RegistrationCandidate| {
                    c.full_name.as_str()
                }),
        ),
        entry(
            Field::ContactNumber,
            required(messages::CONTACT_NUMBER_REQUIRED)
                .and(
                    phone()
                        .with_message(messages::CONTACT_NUMBER_FORMAT)
                        .with_code("invalid_phone"),
                )
                .for_field(Field::ContactNumber.as_str(), |c: &RegistrationCandidate| {
                    c.contact_number.as_str()
                }),
        ),
        entry(
            Field::Email,
            required(messages::EMAIL_REQUIRED)
                .and(
                    email()
                        .with_message(messages::EMAIL_FORMAT)
                        .with_code("invalid_email"),
                )
                .for_field(Field::Email.as_str(), |c: &RegistrationCandidate| c.email.as_str()),
        ),
        entry(
            Field::Password,
            required(messages::PASSWORD_REQUIRED)
                .and(
                    min_length(messages::PASSWORD_MIN_LENGTH)
                        .with_message(messages::PASSWORD_TOO_SHORT),
                )
                .and(
                    character_classes()
                        .with_message(messages::PASSWORD_INVALID)
                        .with_code("weak_password"),
                )
                .for_field(Field::Password.as_str(), |c: &RegistrationCandidate| {
                    c.password.as_str()
                }),
        ),
        entry(
            Field::ConfirmPassword,
            required(messages::CONFIRM_PASSWORD_REQUIRED).for_field(
                Field::ConfirmPassword.as_str(),
                |c: &RegistrationCandidate| c.confirm_password.as_str(),
            ),
        ),
        entry(
            Field::Year,
            required(messages::YEAR_REQUIRED)
                .and(YearNotAfter::new(today.year()))
                .for_field(Field::Year.as_str(), |c: &RegistrationCandidate| c.year.as_str()),
        ),
        entry(
            Field::Month,
            required(messages::MONTH_REQUIRED)
                .and(MonthName)
                .for_field(Field::Month.as_str(), |c: &RegistrationCandidate| c.month.as_str()),
        ),
        entry(
            Field::Day,
            required(messages::DAY_REQUIRED)
                .for_field(Field::Day.as_str(), |c: &RegistrationCandidate| c.day.as_str()),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[rstest]
    #[case("1990", true)]
    #[case("2024", true)]
    #[case("2025", false)]
    #[case("0", false)]
    #[case("-1990", false)]
    #[case("19x0", false)]
    #[case("1990 ", false)]
    #[case("+1990", true)]
    #[case("", false)]
    fn test_year_not_after(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(YearNotAfter::new(2024).validate(input).is_ok(), ok);
    }

    #[rstest]
    #[case("Jan", true)]
    #[case("Dec", true)]
    #[case("jan", false)]
    #[case("JAN", false)]
    #[case("January", false)]
    fn test_month_name(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(MonthName.validate(input).is_ok(), ok);
    }

    #[test]
    fn test_calendar_date_resolves() {
        let candidate = RegistrationCandidate {
            day: "29".into(),
            month: "Feb".into(),
            year: "2024".into(),
            ..RegistrationCandidate::default()
        };
        let date = CalendarDate.resolve(&candidate).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2024, Month::Feb, 29));
    }

    #[rstest]
    #[case("29", "Feb", "2023")]
    #[case("31", "Apr", "2020")]
    #[case("0", "Jan", "2020")]
    #[case("10", "jan", "2020")]
    #[case("10", "Jan", "abc")]
    #[case("ten", "Jan", "2020")]
    #[case(" 10", "Jan", "2020")]
    #[case("10", "Jan", " 2020")]
    fn test_calendar_date_rejects(#[case] day: &str, #[case] month: &str, #[case] year: &str) {
        let candidate = RegistrationCandidate {
            day: day.into(),
            month: month.into(),
            year: year.into(),
            ..RegistrationCandidate::default()
        };
        let error = CalendarDate.validate(&candidate).unwrap_err();
        assert_eq!(error.code, "invalid_day");
        assert_eq!(error.field.as_deref(), Some("day"));
    }

    #[test]
    fn test_not_in_future() {
        let rule = NotInFuture::new(today());
        assert!(rule.validate(&BirthDate::new(2024, Month::Jun, 15).unwrap()).is_ok());
        let error = rule
            .validate(&BirthDate::new(2024, Month::Jun, 16).unwrap())
            .unwrap_err();
        assert_eq!(error.code, "future_birth_date");
    }

    #[test]
    fn test_rule_table_covers_every_field_in_order() {
        let fields: Vec<_> = field_rules(today()).into_iter().map(|(f, _)| f).collect();
        assert_eq!(fields, Field::ALL.to_vec());
    }

    #[test]
    fn test_rule_errors_carry_field_path() {
        let candidate = RegistrationCandidate::default();
        for (field, rule) in field_rules(today()) {
            let error = rule.validate(&candidate).unwrap_err();
            assert_eq!(error.code, "required");
            assert_eq!(error.field.as_deref(), Some(field.as_str()));
        }
    }
}

//! Terminal output helpers.

use signup_registration::{Field, FieldErrors};

/// Label of the shared line for the three birth-date pickers.
const BIRTHDAY_LABEL: &str = "birthday";

/// One `label: Sorry, <message>` line per rejected field.
///
/// Day, month and year share a single `birthday` line showing the day
/// error first, then the year error, then the month error.
pub fn field_error_lines(errors: &FieldErrors) -> Vec<String> {
    let mut lines: Vec<String> = errors
        .iter()
        .filter(|(field, _)| !field.is_birth_date())
        .map(|(field, error)| format!("{field}: Sorry, {}", error.message))
        .collect();

    if let Some(message) = [Field::Day, Field::Year, Field::Month]
        .into_iter()
        .find_map(|field| errors.message(field))
    {
        lines.push(format!("{BIRTHDAY_LABEL}: Sorry, {message}"));
    }
    lines
}

/// Prints [`field_error_lines`] to stderr.
pub fn print_field_errors(errors: &FieldErrors) {
    for line in field_error_lines(errors) {
        eprintln!("{line}");
    }
}

pub fn print_error(message: &str) {
    eprintln!("error: {message}");
}

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use signup_registration::{FixedClock, RegistrationCandidate, validate};

    fn errors_for(candidate: &RegistrationCandidate) -> FieldErrors {
        validate(candidate, &FixedClock::from_ymd(2024, 6, 15).unwrap()).unwrap_err()
    }

    fn jane() -> RegistrationCandidate {
        RegistrationCandidate {
            full_name: "Jane Doe".into(),
            contact_number: "123-456-7890".into(),
            email: "jane@example.com".into(),
            password: "Passw0rd".into(),
            confirm_password: "Passw0rd".into(),
            day: "10".into(),
            month: "Mar".into(),
            year: "1990".into(),
        }
    }

    #[test]
    fn test_blank_form_has_one_birthday_line() {
        let lines = field_error_lines(&errors_for(&RegistrationCandidate::default()));
        assert_eq!(
            lines,
            [
                "fullName: Sorry, Full Name field is required",
                "contactNumber: Sorry, Contact Number is required",
                "email: Sorry, Email is required",
                "password: Sorry, Password is required",
                "confirmPassword: Sorry, Confirm Password is required",
                "birthday: Sorry, day is required",
            ]
        );
    }

    #[test]
    fn test_day_error_wins_over_year_error() {
        let candidate = RegistrationCandidate {
            day: "31".into(),
            month: "Feb".into(),
            year: "2999".into(),
            ..jane()
        };
        assert_eq!(field_error_lines(&errors_for(&candidate)), ["birthday: Sorry, Invalid day"]);
    }

    #[test]
    fn test_future_date_reported_on_birthday_line() {
        let candidate = RegistrationCandidate {
            day: "16".into(),
            month: "Jun".into(),
            year: "2024".into(),
            ..jane()
        };
        assert_eq!(
            field_error_lines(&errors_for(&candidate)),
            ["birthday: Sorry, Birthday cannot be in the future"]
        );
    }
}

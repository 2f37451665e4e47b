//! Phone number shape validator.
//!
//! Accepts the `xxx-xxx-xxxx` family of formats used by the registration
//! form: an optional `+`, a three-digit area code optionally wrapped in
//! parentheses, a three-digit exchange and a subscriber number of four to
//! six digits. Groups may be separated by one space, dash or dot.

use std::sync::LazyLock;

use crate::foundation::{Validate, ValidationError};

// Parentheses are individually optional, so "(123-456-7890" passes too.
static PHONE_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"(?i)^\+?\(?[0-9]{3}\)?[-\s.]?[0-9]{3}[-\s.]?[0-9]{4,6}$").unwrap()
});

// ============================================================================
// PHONE VALIDATOR
// ============================================================================

/// Validates the shape of a phone number.
///
/// This checks formatting only; it does not know which area codes exist.
///
/// # Examples
///
/// ```
/// use signup_validator::validators::Phone;
/// use signup_validator::foundation::Validate;
///
/// let phone = Phone::new();
/// assert!(phone.validate("123-456-7890").is_ok());
/// assert!(phone.validate("+(123) 456.789012").is_ok());
/// assert!(phone.validate("12-3456-7890").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Phone {
    pattern: regex::Regex,
}

impl Phone {
    /// Creates the phone shape validator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pattern: PHONE_REGEX.clone(),
        }
    }
}

impl Default for Phone {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for Phone {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if self.pattern.is_match(input) {
            Ok(())
        } else {
            Err(ValidationError::invalid_format("", "phone")
                .with_param("example", "xxx-xxx-xxxx"))
        }
    }
}

/// Creates the phone shape validator.
#[must_use]
pub fn phone() -> Phone {
    Phone::new()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("123-456-7890")]
    #[case("1234567890")]
    #[case("123 456 7890")]
    #[case("123.456.7890")]
    #[case("(123) 456-7890")]
    #[case("(123)456-7890")]
    #[case("+123-456-7890")]
    #[case("+(123)-456-7890")]
    #[case("123-456-78901")]
    #[case("123-456-789012")]
    #[case("123456-7890")]
    fn test_accepts(#[case] input: &str) {
        assert!(phone().validate(input).is_ok(), "{input} should be accepted");
    }

    #[rstest]
    #[case("")]
    #[case("123-456-789")]
    #[case("123-456-7890123")]
    #[case("12-345-6789")]
    #[case("123--456-7890")]
    #[case("abc-def-ghij")]
    #[case("++123-456-7890")]
    #[case("123-456-7890 ext 5")]
    #[case("1-123-456-7890")]
    fn test_rejects(#[case] input: &str) {
        let error = phone().validate(input).unwrap_err();
        assert_eq!(error.code, "invalid_format");
        assert_eq!(error.param("expected"), Some("phone"));
    }

    #[test]
    fn test_lenient_parentheses() {
        assert!(phone().validate("(123-456-7890").is_ok());
        assert!(phone().validate("123)456-7890").is_ok());
    }

    #[test]
    fn test_newline_is_not_a_line_boundary() {
        assert!(phone().validate("junk\n123-456-7890").is_err());
    }
}

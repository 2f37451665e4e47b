//! String length validators
//!
//! Length is measured in Unicode scalar values (chars), so a password
//! made of multi-byte characters is not penalised.

use crate::foundation::ValidationError;

// ============================================================================
// NOT EMPTY
// ============================================================================

crate::validator! {
    /// Validates that a string is not empty.
    ///
    /// This is the "required" rule of a form: an untouched input arrives
    /// as the empty string.
    pub NotEmpty for str;
    rule(input) { !input.is_empty() }
    error(input) { ValidationError::new("not_empty", "String must not be empty") }
    fn not_empty();
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string has at least a minimum number of characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize } for str;
    rule(self, input) { input.chars().count() >= self.min }
    error(self, input) { ValidationError::min_length("", self.min, input.chars().count()) }
    fn min_length(min: usize);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_not_empty() {
        assert!(not_empty().validate("x").is_ok());
        assert!(not_empty().validate(" ").is_ok());
        assert_eq!(not_empty().validate("").unwrap_err().code, "not_empty");
    }

    #[test]
    fn test_min_length_boundary() {
        let validator = min_length(8);
        assert!(validator.validate("12345678").is_ok());
        let error = validator.validate("1234567").unwrap_err();
        assert_eq!(error.code, "min_length");
        assert_eq!(error.param("actual"), Some("7"));
    }

    #[test]
    fn test_min_length_counts_chars() {
        // 8 chars, 16 bytes
        assert!(min_length(8).validate("ЖжЖжЖжЖж").is_ok());
    }
}

//! String content validators
//!
//! Validators for checking string content against patterns.

use std::sync::LazyLock;

use crate::foundation::ValidationError;

// Local part and domain as accepted by common browser form libraries.
// Leading dots and consecutive dots are rejected separately because the
// regex crate has no lookaround.
static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@(?:[A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .unwrap()
});

// ============================================================================
// REGEX VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates that a string matches a regular expression.
    pub MatchesRegex { pattern: regex::Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) {
        ValidationError::invalid_format("", "regex")
            .with_param("pattern", self.pattern.as_str().to_string())
    }
    new(pattern: &str) -> regex::Error {
        Ok(Self {
            pattern: regex::Regex::new(pattern)?,
        })
    }
    fn matches_regex(pattern: &str) -> regex::Error;
}

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates email shape: `local@label.label.tld`.
    ///
    /// The local part may contain letters, digits and `_ ' + - .`, must not
    /// start with a dot, must not end with `'` or `.`, and must not contain
    /// `..`. The domain is one or more labels followed by an alphabetic TLD
    /// of at least two letters.
    pub Email { pattern: regex::Regex } for str;
    rule(self, input) {
        !input.starts_with('.') && !input.contains("..") && self.pattern.is_match(input)
    }
    error(self, input) { ValidationError::invalid_format("", "email") }
    new() {
        Self {
            pattern: EMAIL_REGEX.clone(),
        }
    }
    fn email();
}

// ============================================================================
// TESTS
// ============================================================================

//! Character-set validators
//!
//! Blacklist checks over the characters of a string.

use crate::foundation::ValidationError;

/// Punctuation and symbol characters rejected in personal names.
///
/// Anything not listed here (letters in any script, digits, inner spaces,
/// other punctuation) is allowed.
pub const FORBIDDEN_SYMBOLS: &[char] = &[
    '~', '`', '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '-', '+', '=', '{', '}', '[', ']',
    '|', '\\', ':', ';', '"', '\'', '<', '>', ',', '.', '?', '/', '_', '₹',
];

// ============================================================================
// NONE OF
// ============================================================================

crate::validator! {
    /// Validates that a string contains none of the given characters.
    ///
    /// The error reports the first offending character as the `character`
    /// parameter.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub NoneOf { forbidden: &'static [char] } for str;
    rule(self, input) { !input.contains(self.forbidden) }
    error(self, input) {
        let mut error = ValidationError::new("forbidden_character", "Contains a forbidden character");
        if let Some(found) = input.chars().find(|c| self.forbidden.contains(c)) {
            error = error.with_param("character", found.to_string());
        }
        error
    }
    fn none_of(forbidden: &'static [char]);
}

/// Rejects strings containing any of [`FORBIDDEN_SYMBOLS`].
#[must_use]
pub const fn no_symbols() -> NoneOf {
    NoneOf {
        forbidden: FORBIDDEN_SYMBOLS,
    }
}

// ============================================================================
// NO SURROUNDING SPACES
// ============================================================================

crate::validator! {
    /// Validates that a string neither starts nor ends with a space.
    ///
    /// Only the ASCII space is checked; inner spaces are fine.
    pub NoSurroundingSpaces for str;
    rule(input) { !(input.starts_with(' ') || input.ends_with(' ')) }
    error(input) {
        ValidationError::new("surrounding_spaces", "Must not start or end with a space")
    }
    fn no_surrounding_spaces();
}

// ============================================================================
// TESTS
// ============================================================================

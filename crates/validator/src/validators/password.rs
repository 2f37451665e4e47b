//! Password character-class validator.
//!
//! Length is checked separately with [`MinLength`](super::MinLength) so a
//! form can report "too short" and "missing classes" as different messages.

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// CHARACTER CLASSES VALIDATOR
// ============================================================================

/// Validates that a password contains the required ASCII character classes.
///
/// # Examples
///
/// ```
/// use signup_validator::validators::CharacterClasses;
/// use signup_validator::foundation::Validate;
///
/// let validator = CharacterClasses::new().require_lowercase().require_digit();
/// assert!(validator.validate("abc1").is_ok());
/// assert!(validator.validate("abcd").is_err());
///
/// // lowercase + uppercase + digit
/// let strict = CharacterClasses::all();
/// assert!(strict.validate("Abcdefg1").is_ok());
/// assert!(strict.validate("abcdefg1").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CharacterClasses {
    require_lowercase: bool,
    require_uppercase: bool,
    require_digit: bool,
}

impl CharacterClasses {
    /// Creates a validator with no requirements.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires lowercase, uppercase and digit characters.
    #[must_use]
    pub fn all() -> Self {
        Self::new()
            .require_lowercase()
            .require_uppercase()
            .require_digit()
    }

    /// Requires at least one lowercase letter (`a-z`).
    #[must_use = "builder methods must be chained or built"]
    pub fn require_lowercase(mut self) -> Self {
        self.require_lowercase = true;
        self
    }

    /// Requires at least one uppercase letter (`A-Z`).
    #[must_use = "builder methods must be chained or built"]
    pub fn require_uppercase(mut self) -> Self {
        self.require_uppercase = true;
        self
    }

    /// Requires at least one digit (`0-9`).
    #[must_use = "builder methods must be chained or built"]
    pub fn require_digit(mut self) -> Self {
        self.require_digit = true;
        self
    }

    fn missing(&self, input: &str) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.require_lowercase && !input.chars().any(|c| c.is_ascii_lowercase()) {
            missing.push("lowercase");
        }
        if self.require_uppercase && !input.chars().any(|c| c.is_ascii_uppercase()) {
            missing.push("uppercase");
        }
        if self.require_digit && !input.chars().any(|c| c.is_ascii_digit()) {
            missing.push("digit");
        }
        missing
    }
}

impl Validate for CharacterClasses {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let missing = self.missing(input);
        if missing.is_empty() {
            return Ok(());
        }

        Err(ValidationError::new(
            "character_classes",
            format!("Must contain at least one {} character", missing.join(", ")),
        )
        .with_param("missing", missing.join(",")))
    }
}

/// Requires lowercase, uppercase and digit characters.
#[must_use]
pub fn character_classes() -> CharacterClasses {
    CharacterClasses::all()
}

// ============================================================================
// TESTS
// ============================================================================

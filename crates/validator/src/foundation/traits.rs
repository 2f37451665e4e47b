//! The `Validate` trait and its fluent extension.

use std::borrow::Cow;

use crate::combinators::{And, Field, WithMessage};
use crate::foundation::ValidationError;

// ============================================================================
// VALIDATE
// ============================================================================

/// A single rule over a borrowed input.
///
/// `Input` may be unsized, so string rules take `&str` directly and record
/// rules take the whole record. A rule either accepts the input or returns
/// one [`ValidationError`] describing why not.
///
/// ```rust
/// use signup_validator::foundation::{Validate, ValidationError};
///
/// struct StartsWithPlus;
///
/// impl Validate for StartsWithPlus {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.starts_with('+') {
///             Ok(())
///         } else {
///             Err(ValidationError::new("missing_plus", "Must start with '+'"))
///         }
///     }
/// }
///
/// assert!(StartsWithPlus.validate("+1 555 0100").is_ok());
/// ```
pub trait Validate {
    type Input: ?Sized;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        V::validate(self, input)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        V::validate(self, input)
    }
}

// ============================================================================
// VALIDATE EXT
// ============================================================================

/// Combinator methods available on every validator.
///
/// ```rust
/// use signup_validator::prelude::*;
///
/// let email_rule = not_empty()
///     .with_message("Email is required")
///     .and(email().with_message("Type Email Format"));
///
/// assert!(email_rule.validate("jane@example.com").is_ok());
/// assert_eq!(email_rule.validate("").unwrap_err().message, "Email is required");
/// assert_eq!(email_rule.validate("jane@").unwrap_err().message, "Type Email Format");
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Runs `other` only when `self` accepts the input.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Reports `message` instead of the inner message on failure.
    fn with_message(self, message: impl Into<Cow<'static, str>>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }

    /// Reports `code` instead of the inner code on failure.
    fn with_code(self, code: impl Into<Cow<'static, str>>) -> WithMessage<Self> {
        WithMessage::code_only(self, code)
    }

    /// Applies this rule to one field of a record, tagging errors with
    /// `name` as their field path.
    fn for_field<T, F>(self, name: &'static str, accessor: F) -> Field<T, Self::Input, Self, F>
    where
        F: Fn(&T) -> &Self::Input,
    {
        Field::named(name, self, accessor)
    }
}

impl<T: Validate> ValidateExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{min_length, not_empty, phone};

    #[test]
    fn test_reference_and_box_delegate() {
        let boxed: Box<dyn Validate<Input = str>> = Box::new(not_empty());
        assert!(boxed.validate("").is_err());
        assert!((&phone()).validate("123-456-7890").is_ok());
    }

    #[test]
    fn test_fluent_chain_relabels_first_failure() {
        let rule = not_empty().and(min_length(8)).with_message("minimum password is 8");

        let error = rule.validate("Ab1").unwrap_err();
        assert_eq!(error.message, "minimum password is 8");
        assert_eq!(error.code, "min_length");

        let error = rule.validate("").unwrap_err();
        assert_eq!(error.code, "not_empty");
    }

    #[test]
    fn test_with_code() {
        let error = not_empty().with_code("required").validate("").unwrap_err();
        assert_eq!(error.code, "required");
    }
}

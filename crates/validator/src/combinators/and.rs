//! Sequential conjunction.

use crate::foundation::{Validate, ValidationError};

/// Runs `first`, then `then`, stopping at the first failure.
///
/// A form field is a chain of these: `required.and(shape).and(strength)`
/// reports the earliest rule that does not hold, so the order of the
/// chain is the order in which the user sees problems.
///
/// ```rust
/// use signup_validator::prelude::*;
///
/// let password = not_empty().and(min_length(8)).and(character_classes());
///
/// assert_eq!(password.validate("").unwrap_err().code, "not_empty");
/// assert_eq!(password.validate("Ab1").unwrap_err().code, "min_length");
/// assert_eq!(password.validate("abcdefgh").unwrap_err().code, "character_classes");
/// assert!(password.validate("Abcdefg1").is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<A, B> {
    first: A,
    then: B,
}

impl<A, B> And<A, B> {
    pub fn new(first: A, then: B) -> Self {
        Self { first, then }
    }

    pub fn first(&self) -> &A {
        &self.first
    }

    pub fn then(&self) -> &B {
        &self.then
    }
}

impl<A, B> Validate for And<A, B>
where
    A: Validate,
    B: Validate<Input = A::Input>,
{
    type Input = A::Input;

    fn validate(&self, input: &A::Input) -> Result<(), ValidationError> {
        self.first.validate(input).and_then(|()| self.then.validate(input))
    }
}

/// Free-function form of [`ValidateExt::and`](crate::foundation::ValidateExt::and).
pub fn and<A, B>(first: A, then: B) -> And<A, B>
where
    A: Validate,
    B: Validate<Input = A::Input>,
{
    And::new(first, then)
}

//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Traits**: `Validate`, `ValidateExt`
//! - **Errors**: `ValidationError`
//!
//! # Architecture
//!
//! ## 1. Type Safety
//!
//! Validators are generic over their input type:
//!
//! ```rust
//! use signup_validator::foundation::{Validate, ValidationError};
//!
//! struct MinLength { min: usize }
//!
//! impl Validate for MinLength {
//!     type Input = str;  // Only validates strings
//!
//!     fn validate(&self, input: &str) -> Result<(), ValidationError> {
//!         if input.chars().count() >= self.min {
//!             Ok(())
//!         } else {
//!             Err(ValidationError::min_length("", self.min, input.chars().count()))
//!         }
//!     }
//! }
//!
//! assert!(MinLength { min: 3 }.validate("abc").is_ok());
//! ```
//!
//! ## 2. Composition
//!
//! Validators compose with combinators. `and` short-circuits, so the error
//! reported is always the first rule that failed:
//!
//! ```rust
//! use signup_validator::prelude::*;
//!
//! let password = min_length(8).and(character_classes());
//! assert_eq!(password.validate("Ab1").unwrap_err().code, "min_length");
//! ```
//!
//! ## 3. Rich Error Information
//!
//! ```rust
//! use signup_validator::foundation::ValidationError;
//!
//! let error = ValidationError::new("min_length", "Too short")
//!     .with_field("password")
//!     .with_param("min", "8");
//! assert_eq!(error.param("min"), Some("8"));
//! ```

pub mod error;
pub mod traits;

pub use error::ValidationError;
pub use traits::{Validate, ValidateExt};

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Runs validators in order and returns the first failure.
///
/// Unlike [`ValidateExt::and`], the validators do not have to share a
/// concrete type, which makes this convenient for rule tables.
///
/// ```rust
/// use signup_validator::foundation::{Validate, first_failure};
/// use signup_validator::validators::{min_length, not_empty};
///
/// let rules: [&dyn Validate<Input = str>; 2] = [&not_empty(), &min_length(8)];
/// assert_eq!(first_failure("", &rules).unwrap_err().code, "not_empty");
/// ```
pub fn first_failure<I>(value: &I, validators: &[&dyn Validate<Input = I>]) -> ValidationResult<()>
where
    I: ?Sized,
{
    validators
        .iter()
        .try_for_each(|validator| validator.validate(value))
}

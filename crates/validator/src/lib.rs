//! # signup-validator
//!
//! A composable, type-safe validation framework for the signup registration form.
//!
//! ## Quick Start
//!
//! ```rust
//! use signup_validator::prelude::*;
//!
//! // Compose validators with .and() and give them user-facing messages
//! let full_name = not_empty()
//!     .with_message("Full Name field is required")
//!     .and(no_symbols().with_message("Symbol is not allowed"));
//!
//! assert!(full_name.validate("Jane Doe").is_ok());
//! assert_eq!(
//!     full_name.validate("Jane!").unwrap_err().message,
//!     "Symbol is not allowed"
//! );
//! ```
//!
//! ## Creating Validators
//!
//! Use the [`validator!`] macro for zero-boilerplate validators,
//! or implement [`Validate`](foundation::Validate) manually for complex cases.
//!
//! ## Built-in Validators
//!
//! - **Length**: [`NotEmpty`](validators::NotEmpty), [`MinLength`](validators::MinLength)
//! - **Content**: [`MatchesRegex`](validators::MatchesRegex), [`Email`](validators::Email)
//! - **Charset**: [`NoneOf`](validators::NoneOf), [`NoSurroundingSpaces`](validators::NoSurroundingSpaces)
//! - **Phone**: [`Phone`](validators::Phone)
//! - **Password**: [`CharacterClasses`](validators::CharacterClasses)

// ValidationError is the fundamental error type for all validators;
// boxing it would add indirection to every validation call.
#![allow(clippy::result_large_err)]
// Deep combinator nesting (And<WithMessage<...>, ...>) produces complex types
// that are inherent to the type-safe combinator architecture.
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;

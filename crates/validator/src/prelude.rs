//! `use signup_validator::prelude::*;` brings in the traits, the built-in
//! rules and the combinator types.

pub use crate::combinators::{And, Field, WithMessage, and, with_code, with_message};
pub use crate::foundation::{Validate, ValidateExt, ValidationError};
pub use crate::validators::*;

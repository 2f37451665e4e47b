//! Validator combinators
//!
//! - [`And`]: both validators must pass, first failure wins
//! - [`WithMessage`]: replaces the user-facing message or code of a failure
//! - [`Field`]: lifts a validator onto a named field of a parent type

pub mod and;
pub mod field;
pub mod message;

pub use and::{And, and};
pub use field::Field;
pub use message::{WithMessage, with_code, with_message};

//! Built-in validators
//!
//! # Categories
//!
//! - **Length**: not-empty, minimum length
//! - **Content**: regular expressions, email shape
//! - **Charset**: forbidden characters, surrounding spaces
//! - **Phone**: area-code / exchange / subscriber shape
//! - **Password**: required character classes
//!
//! # Examples
//!
//! ```rust
//! use signup_validator::prelude::*;
//!
//! let password = min_length(8).and(character_classes());
//! assert!(password.validate("Abcdefg1").is_ok());
//! assert!(password.validate("abcdefgh").is_err());
//! ```

pub mod charset;
pub mod content;
pub mod length;
pub mod password;
pub mod phone;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use charset::{
    FORBIDDEN_SYMBOLS, NoSurroundingSpaces, NoneOf, no_surrounding_spaces, no_symbols, none_of,
};
pub use content::{Email, MatchesRegex, email, matches_regex};
pub use length::{MinLength, NotEmpty, min_length, not_empty};
pub use password::{CharacterClasses, character_classes};
pub use phone::{Phone, phone};

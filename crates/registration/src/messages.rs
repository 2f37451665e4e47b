//! User-facing messages, one per rule.
//!
//! The form renders these next to the input, prefixed with "Sorry, ".

pub const FULL_NAME_REQUIRED: &str = "Full Name field is required";
pub const SYMBOL_NOT_ALLOWED: &str = "Symbol is not allowed";
pub const SPACES_AROUND: &str = "Spaces around is invalid";

pub const CONTACT_NUMBER_REQUIRED: &str = "Contact Number is required";
pub const CONTACT_NUMBER_FORMAT: &str = "Type Contact Number like xxx-xxx-xxxx";

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_FORMAT: &str = "Type Email Format";

pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "minimum password is 8";
pub const PASSWORD_INVALID: &str = "Password is not valid";

pub const CONFIRM_PASSWORD_REQUIRED: &str = "Confirm Password is required";
pub const PASSWORDS_NOT_MATCHED: &str = "Passwords are not matched";

pub const YEAR_REQUIRED: &str = "year is required";
pub const INVALID_YEAR: &str = "Invalid year";
pub const FUTURE_BIRTH_DATE: &str = "Birthday cannot be in the future";

pub const MONTH_REQUIRED: &str = "month is required";
pub const INVALID_MONTH: &str = "Invalid month";

pub const DAY_REQUIRED: &str = "day is required";
pub const INVALID_DAY: &str = "Invalid day";

/// Minimum password length in characters.
pub const PASSWORD_MIN_LENGTH: usize = 8;

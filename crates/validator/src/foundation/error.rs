//! The error a single rule reports.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

type Text = Cow<'static, str>;

/// Why a rule rejected its input.
///
/// `code` is stable and meant for programs; `message` is the sentence shown
/// to the user. `field` is filled in once the error is attached to a record
/// field. Static strings are borrowed, so the common path does not allocate.
///
/// ```rust
/// use signup_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("min_length", "minimum password is 8")
///     .with_field("password")
///     .with_param("min", "8");
///
/// assert_eq!(error.param("min"), Some("8"));
/// assert_eq!(error.to_string(), "password: minimum password is 8 [min_length; min=8]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub code: Text,
    pub message: Text,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<Text>,
    /// Rule arguments and observed values, in insertion order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<(Text, Text)>,
    /// Underlying errors, e.g. the rule output behind a replaced message.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nested: Vec<ValidationError>,
}

impl ValidationError {
    pub fn new(code: impl Into<Text>, message: impl Into<Text>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
            nested: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_field(self, field: impl Into<Text>) -> Self {
        Self {
            field: Some(field.into()),
            ..self
        }
    }

    #[must_use]
    pub fn with_param(mut self, key: impl Into<Text>, value: impl Into<Text>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn with_nested_error(mut self, cause: ValidationError) -> Self {
        self.nested.push(cause);
        self
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find_map(|(name, value)| (name == key).then_some(&**value))
    }

    pub fn has_nested(&self) -> bool {
        !self.nested.is_empty()
    }

    /// `required`: an empty input where a value is needed.
    pub fn required(field: impl Into<Text>) -> Self {
        Self::new("required", "This field is required").at(field.into())
    }

    /// `min_length`: fewer than `min` characters, `actual` observed.
    pub fn min_length(field: impl Into<Text>, min: usize, actual: usize) -> Self {
        Self::new("min_length", format!("Must be at least {min} characters"))
            .with_param("min", min.to_string())
            .with_param("actual", actual.to_string())
            .at(field.into())
    }

    /// `invalid_format`: the input does not have the `expected` shape.
    pub fn invalid_format(field: impl Into<Text>, expected: impl Into<Text>) -> Self {
        Self::new("invalid_format", "Invalid format")
            .with_param("expected", expected)
            .at(field.into())
    }

    // An empty name means "not known yet"; `Field` sets it later.
    fn at(self, field: Text) -> Self {
        if field.is_empty() { self } else { self.with_field(field) }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "{field}: ")?;
        }
        write!(f, "{} [{}", self.message, self.code)?;
        for (index, (key, value)) in self.params.iter().enumerate() {
            let sep = if index == 0 { "; " } else { ", " };
            write!(f, "{sep}{key}={value}")?;
        }
        f.write_str("]")
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_static_text_is_borrowed() {
        let error = ValidationError::new("password_mismatch", "Passwords are not matched");
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
        assert!(error.field.is_none());
        assert!(!error.has_nested());
    }

    #[test]
    fn test_constructors_skip_unknown_field() {
        let error = ValidationError::invalid_format("", "email");
        assert_eq!(error.field, None);
        assert_eq!(error.param("expected"), Some("email"));

        let error = ValidationError::required("day");
        assert_eq!(error.field.as_deref(), Some("day"));
    }

    #[test]
    fn test_min_length_params() {
        let error = ValidationError::min_length("password", 8, 3);
        assert_eq!(error.param("min"), Some("8"));
        assert_eq!(error.param("actual"), Some("3"));
        assert_eq!(error.param("max"), None);
        assert_eq!(
            error.to_string(),
            "password: Must be at least 8 characters [min_length; min=8, actual=3]"
        );
    }

    #[test]
    fn test_display_without_field_or_params() {
        let error = ValidationError::new("invalid_month", "Invalid month");
        assert_eq!(error.to_string(), "Invalid month [invalid_month]");
    }

    #[test]
    fn test_serialize_skips_empty_parts() {
        let error = ValidationError::new("required", "Email is required").with_field("email");
        assert_eq!(
            serde_json::to_value(&error).unwrap(),
            serde_json::json!({
                "code": "required",
                "message": "Email is required",
                "field": "email",
            })
        );
    }
}

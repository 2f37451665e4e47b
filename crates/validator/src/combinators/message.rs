//! Relabelling errors with user-facing text.

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};

/// Swaps the message and/or code of the wrapped validator's error.
///
/// Built-in validators report generic text ("Invalid format"); form rules
/// wrap them with the sentence shown next to the input. The field path is
/// kept and the original error is attached as the only nested error.
///
/// ```rust
/// use signup_validator::prelude::*;
///
/// let rule = min_length(8).with_message("minimum password is 8");
///
/// let error = rule.validate("short").unwrap_err();
/// assert_eq!(error.message, "minimum password is 8");
/// assert_eq!(error.code, "min_length");
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    message: Option<Cow<'static, str>>,
    code: Option<Cow<'static, str>>,
}

impl<V> WithMessage<V> {
    pub fn new(inner: V, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            message: Some(message.into()),
            code: None,
        }
    }

    /// Keeps the inner message, replaces only the code.
    pub fn code_only(inner: V, code: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            message: None,
            code: Some(code.into()),
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
}

impl<V: Validate> Validate for WithMessage<V> {
    type Input = V::Input;

    fn validate(&self, input: &V::Input) -> Result<(), ValidationError> {
        let Err(original) = self.inner.validate(input) else {
            return Ok(());
        };

        let mut relabelled = ValidationError::new(
            self.code.clone().unwrap_or_else(|| original.code.clone()),
            self.message.clone().unwrap_or_else(|| original.message.clone()),
        );
        relabelled.field.clone_from(&original.field);
        Err(relabelled.with_nested_error(original))
    }
}

pub fn with_message<V>(validator: V, message: impl Into<Cow<'static, str>>) -> WithMessage<V> {
    WithMessage::new(validator, message)
}

pub fn with_code<V>(validator: V, code: impl Into<Cow<'static, str>>) -> WithMessage<V> {
    WithMessage::code_only(validator, code)
}

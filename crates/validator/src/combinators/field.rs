//! Lifts a value rule onto one field of a record.

use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Validate, ValidationError};

/// Runs `rule` against the value `accessor` picks out of a `T`.
///
/// Any error coming out of the rule is tagged with `name` as its field path.
///
/// ```rust
/// use signup_validator::prelude::*;
///
/// struct Form {
///     email: String,
/// }
///
/// let rule = not_empty().for_field("email", |form: &Form| form.email.as_str());
/// let error = rule.validate(&Form { email: String::new() }).unwrap_err();
/// assert_eq!(error.field.as_deref(), Some("email"));
/// ```
pub struct Field<T, U: ?Sized, V, F> {
    name: &'static str,
    rule: V,
    accessor: F,
    _record: PhantomData<fn(&T) -> &U>,
}

impl<T, U: ?Sized, V, F> Field<T, U, V, F> {
    pub const fn named(name: &'static str, rule: V, accessor: F) -> Self {
        Self {
            name,
            rule,
            accessor,
            _record: PhantomData,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn rule(&self) -> &V {
        &self.rule
    }
}

impl<T, U: ?Sized, V: Clone, F: Clone> Clone for Field<T, U, V, F> {
    fn clone(&self) -> Self {
        Self::named(self.name, self.rule.clone(), self.accessor.clone())
    }
}

impl<T, U: ?Sized, V: fmt::Debug, F> fmt::Debug for Field<T, U, V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("rule", &self.rule)
            .finish_non_exhaustive()
    }
}

impl<T, U, V, F> Validate for Field<T, U, V, F>
where
    U: ?Sized,
    V: Validate<Input = U>,
    F: Fn(&T) -> &U,
{
    type Input = T;

    fn validate(&self, record: &T) -> Result<(), ValidationError> {
        self.rule
            .validate((self.accessor)(record))
            .map_err(|error| error.with_field(self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::{email, min_length};

    struct Signup {
        email: String,
        password: String,
    }

    fn signup(email: &str, password: &str) -> Signup {
        Signup {
            email: email.to_owned(),
            password: password.to_owned(),
        }
    }

    #[test]
    fn test_error_carries_field_name() {
        let password: fn(&Signup) -> &str = |s| s.password.as_str();
        let rule = Field::named("password", min_length(8), password);
        let error = rule.validate(&signup("jane@example.com", "short")).unwrap_err();
        assert_eq!(error.field.as_deref(), Some("password"));
        assert_eq!(error.code, "min_length");
    }

    #[test]
    fn test_only_selected_field_is_checked() {
        let rule = email().for_field("email", |s: &Signup| s.email.as_str());
        assert!(rule.validate(&signup("jane@example.com", "")).is_ok());
        assert_eq!(rule.name(), "email");
    }
}

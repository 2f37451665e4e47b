//! The [`validator!`](crate::validator) macro.
//!
//! A validator is a struct, a predicate and the error reported when the
//! predicate is false. The macro writes the struct, its `Validate` impl and
//! optionally a constructor function.
//!
//! ```rust
//! use signup_validator::validator;
//! use signup_validator::foundation::{Validate, ValidationError};
//!
//! validator! {
//!     pub NoTabs for str;
//!     rule(input) { !input.contains('\t') }
//!     error(input) { ValidationError::new("no_tabs", "must not contain tabs") }
//!     fn no_tabs();
//! }
//!
//! validator! {
//!     #[derive(Copy, PartialEq, Eq, Hash)]
//!     pub MaxChars { max: usize } for str;
//!     rule(self, input) { input.chars().count() <= self.max }
//!     error(self, input) { ValidationError::new("max_chars", "too long") }
//!     fn max_chars(max: usize);
//! }
//!
//! assert!(no_tabs().validate("a b").is_ok());
//! assert!(max_chars(3).validate("abcd").is_err());
//! ```

/// Declares a validator type.
///
/// Four shapes are accepted. All of them take an optional trailing
/// `fn name(...);` that emits a constructor function.
///
/// - Unit: `pub Name for Input; rule(input) {..} error(input) {..}`.
///   Derives `Debug, Clone, Copy, PartialEq, Eq, Hash`.
/// - Fields with a generated `new` taking every field in order.
/// - Fields with a hand-written `new(args) { body }`.
/// - Fields with a fallible `new(args) -> Error { body }`; the constructor
///   function then returns `Result<Name, Error>` as well.
///
/// Struct shapes derive `Debug, Clone` and accept extra `#[derive]`s.
/// Inside `error`, the input is bound to the given name; the error's field
/// path is left to the caller.
#[macro_export]
macro_rules! validator {
    // Shared `Validate` impl.
    (@impl $name:ident, $input:ty, $self_:ident, $inp:ident, $rule:block, $einp:ident, $err:block) => {
        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(
                &$self_,
                $inp: &Self::Input,
            ) -> ::std::result::Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    return ::std::result::Result::Ok(());
                }
                let $einp = $inp;
                ::std::result::Result::Err($err)
            }
        }
    };

    (@struct $(#[$meta:meta])* $vis:vis $name:ident { $($field:ident: $fty:ty),+ }) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }
    };

    // Unit validator.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        $(fn $factory:ident();)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;

        $crate::validator!(@impl $name, $input, self, $inp, $rule, $einp, $err);

        $(
            #[must_use]
            $vis const fn $factory() -> $name {
                $name
            }
        )?
    };

    // Fields, hand-written `new`.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        $(fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);)?
    ) => {
        $crate::validator!(@struct $(#[$meta])* $vis $name { $($field: $fty),+ });

        #[allow(clippy::new_without_default)]
        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        $crate::validator!(@impl $name, $input, $self_, $inp, $rule, $einp, $err);

        $(
            #[must_use]
            $vis fn $factory($($farg: $faty),*) -> $name {
                $name::new($($farg),*)
            }
        )?
    };

    // Fields, fallible `new`.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) -> $ety:ty $new_body:block
        $(fn $factory:ident($($farg:ident: $faty:ty),* $(,)?) -> $efty:ty;)?
    ) => {
        $crate::validator!(@struct $(#[$meta])* $vis $name { $($field: $fty),+ });

        impl $name {
            pub fn new($($narg: $naty),*) -> ::std::result::Result<Self, $ety> $new_body
        }

        $crate::validator!(@impl $name, $input, $self_, $inp, $rule, $einp, $err);

        $(
            $vis fn $factory($($farg: $faty),*) -> ::std::result::Result<$name, $efty> {
                $name::new($($farg),*)
            }
        )?
    };

    // Fields, generated `new`.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        $(fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);)?
    ) => {
        $crate::validator!(@struct $(#[$meta])* $vis $name { $($field: $fty),+ });

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        $crate::validator!(@impl $name, $input, $self_, $inp, $rule, $einp, $err);

        $(
            #[must_use]
            $vis fn $factory($($farg: $faty),*) -> $name {
                $name::new($($farg),*)
            }
        )?
    };
}

#[cfg(test)]
mod tests {
    use crate::foundation::{Validate, ValidationError};

    validator! {
        Digits for str;
        rule(input) { input.chars().all(|c| c.is_ascii_digit()) }
        error(input) { ValidationError::new("digits", "digits only") }
        fn digits();
    }

    validator! {
        #[derive(Copy, PartialEq, Eq)]
        Between { min: u32, max: u32 } for u32;
        rule(self, input) { (self.min..=self.max).contains(input) }
        error(self, input) {
            ValidationError::new("between", "out of range").with_param("value", input.to_string())
        }
        fn between(min: u32, max: u32);
    }

    validator! {
        Exactly { expected: String } for str;
        rule(self, input) { input == self.expected }
        error(self, input) { ValidationError::new("exactly", "mismatch") }
        new(expected: &str) { Self { expected: expected.to_owned() } }
    }

    validator! {
        Parsed { value: u32 } for u32;
        rule(self, input) { *input == self.value }
        error(self, input) { ValidationError::new("parsed", "different value") }
        new(text: &str) -> std::num::ParseIntError { Ok(Self { value: text.parse()? }) }
        fn parsed(text: &str) -> std::num::ParseIntError;
    }

    #[test]
    fn test_unit_validator() {
        assert!(digits().validate("0123").is_ok());
        assert_eq!(Digits.validate("12a").unwrap_err().code, "digits");
    }

    #[test]
    fn test_generated_new() {
        assert_eq!(between(1, 31), Between::new(1, 31));
        let error = between(1, 31).validate(&32).unwrap_err();
        assert_eq!(error.param("value"), Some("32"));
    }

    #[test]
    fn test_custom_new_without_factory() {
        let rule = Exactly::new("Passw0rd");
        assert!(rule.validate("Passw0rd").is_ok());
        assert!(rule.validate("passw0rd").is_err());
    }

    #[test]
    fn test_fallible_new() {
        assert!(parsed("7").unwrap().validate(&7).is_ok());
        assert!(parsed("seven").is_err());
    }
}

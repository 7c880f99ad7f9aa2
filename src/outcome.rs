//! Value-or-error carrier with check-before-use semantics.
//!
//! [`Outcome`] holds either a success value or an [`ErrorChain`], never both.
//! Callers take the error first and only touch the value once no error was
//! returned; reading the value while an error is held panics.
//!
//! # Examples
//!
//! ```
//! use error_trail::{make_error, MaybeError, Outcome};
//!
//! fn lookup(fail: bool) -> Outcome<String> {
//!     if fail {
//!         return Outcome::from_error(make_error!("something went wrong!"));
//!     }
//!     Outcome::from_value("no problem".to_string())
//! }
//!
//! fn caller(fail: bool) -> MaybeError {
//!     let mut outcome = lookup(fail);
//!     if let Some(err) = outcome.take_error() {
//!         return Some(make_error!("caller - {}", err.first_message()));
//!     }
//!     let value = outcome.take_value();
//!     assert_eq!(value, "no problem");
//!     None
//! }
//!
//! assert!(caller(false).is_none());
//! assert_eq!(caller(true).unwrap().first_message(), "caller - something went wrong!");
//! ```

use crate::chain::ErrorChain;

const NULL_ERROR: &str = "Detected a NULL error when the result was not available";
const VALUE_NOT_SET: &str = "Detected a call to value when the result was not set";

/// Holds exactly one of a success value or an error chain.
#[must_use]
#[derive(Debug, PartialEq, Eq)]
pub struct Outcome<T> {
    inner: Slot<T>,
}

#[derive(Debug, PartialEq, Eq)]
enum Slot<T> {
    Value(T),
    Error(ErrorChain),
}

impl<T> Outcome<T> {
    #[inline]
    pub fn from_value(value: T) -> Self {
        Self { inner: Slot::Value(value) }
    }

    /// Wraps an error chain.
    ///
    /// # Panics
    ///
    /// Panics if `error` has no entries.
    #[track_caller]
    pub fn from_error(error: ErrorChain) -> Self {
        assert!(!error.is_empty(), "{}", NULL_ERROR);
        Self { inner: Slot::Error(error) }
    }

    /// Moves the held error out, if any.
    ///
    /// A held value is left in place. Once the error has been taken, later
    /// calls return `None` while [`take_value`](Self::take_value) keeps
    /// panicking.
    pub fn take_error(&mut self) -> Option<ErrorChain> {
        match &mut self.inner {
            Slot::Error(chain) if !chain.is_empty() => Some(core::mem::take(chain)),
            _ => None,
        }
    }

    /// Moves the held value out.
    ///
    /// # Panics
    ///
    /// Panics if the outcome holds an error, including one already moved out
    /// by [`take_error`](Self::take_error).
    #[track_caller]
    pub fn take_value(self) -> T {
        match self.inner {
            Slot::Value(value) => value,
            Slot::Error(_) => panic!("{}", VALUE_NOT_SET),
        }
    }

    #[inline]
    pub fn is_value(&self) -> bool {
        matches!(self.inner, Slot::Value(_))
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self.inner, Slot::Error(_))
    }

    /// Converts into a standard `Result`.
    ///
    /// An error that was already taken converts to an empty chain.
    #[inline]
    pub fn into_result(self) -> Result<T, ErrorChain> {
        match self.inner {
            Slot::Value(value) => Ok(value),
            Slot::Error(chain) => Err(chain),
        }
    }
}

impl<T> From<Result<T, ErrorChain>> for Outcome<T> {
    #[track_caller]
    fn from(result: Result<T, ErrorChain>) -> Self {
        match result {
            Ok(value) => Self::from_value(value),
            Err(chain) => Self::from_error(chain),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, ErrorChain> {
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

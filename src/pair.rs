//! Value/error pair carrier.
//!
//! [`ResultPair`] always carries both halves. When `error` is `Some`, `value`
//! holds `T::default()`; when `error` is `None`, `value` is the payload. Field
//! access never panics, which makes this the everyday return type for
//! fallible functions.
//!
//! # Examples
//!
//! ```
//! use error_trail::{make_error, MaybeError, ResultPair};
//!
//! fn load(fail: bool) -> ResultPair<String> {
//!     if fail {
//!         return ResultPair::from_error(make_error!("something went wrong!"));
//!     }
//!     ResultPair::from_value("no problem".to_string())
//! }
//!
//! fn caller(fail: bool) -> MaybeError {
//!     let (text, err) = load(fail).into_parts();
//!     if let Some(err) = err {
//!         assert!(text.is_empty());
//!         return Some(make_error!("caller - {}", err.first_message()));
//!     }
//!     assert_eq!(text, "no problem");
//!     None
//! }
//!
//! assert!(caller(false).is_none());
//! assert!(caller(true).is_some());
//! ```

use core::any::type_name;

use crate::chain::{ErrorChain, MaybeError};

/// A value together with an optional error chain.
#[must_use]
#[derive(Debug, PartialEq, Eq)]
pub struct ResultPair<T> {
    pub value: T,
    pub error: MaybeError,
}

impl<T> ResultPair<T> {
    #[inline]
    pub fn from_value(value: T) -> Self {
        debug_assert_payload::<T>();
        Self { value, error: None }
    }

    /// Pairs `T::default()` with an error chain.
    ///
    /// # Panics
    ///
    /// Panics if `error` has no entries.
    #[track_caller]
    pub fn from_error(error: ErrorChain) -> Self
    where
        T: Default,
    {
        debug_assert_payload::<T>();
        assert!(!error.is_empty(), "Detected a NULL error when constructing a result pair");
        Self { value: T::default(), error: Some(error) }
    }

    /// Returns `true` when no error is present.
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    #[inline]
    pub fn into_parts(self) -> (T, MaybeError) {
        (self.value, self.error)
    }

    #[inline]
    pub fn into_result(self) -> Result<T, ErrorChain> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.value),
        }
    }
}

impl<T: Default> Default for ResultPair<T> {
    #[inline]
    fn default() -> Self {
        Self::from_value(T::default())
    }
}

impl<T> From<ResultPair<T>> for (T, MaybeError) {
    #[inline]
    fn from(pair: ResultPair<T>) -> Self {
        pair.into_parts()
    }
}

impl<T: Default> From<Result<T, ErrorChain>> for ResultPair<T> {
    #[track_caller]
    fn from(result: Result<T, ErrorChain>) -> Self {
        match result {
            Ok(value) => Self::from_value(value),
            Err(err) => Self::from_error(err),
        }
    }
}

// A pair whose payload is itself an error would be ambiguous.
#[inline]
fn debug_assert_payload<T>() {
    debug_assert!(
        type_name::<T>() != type_name::<ErrorChain>()
            && type_name::<T>() != type_name::<MaybeError>(),
        "ResultPair payload must not be an error chain"
    );
}

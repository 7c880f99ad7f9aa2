//! Error constructors.
//!
//! Each constructor returns a fresh one-entry [`ErrorChain`]. The kind and the
//! size budget apply to that entry only; later appends choose their own.
//!
//! | constructor | kind | message budget |
//! |---|---|---|
//! | [`make_error`] | generic | [`DEFAULT_MESSAGE_SIZE`] |
//! | [`make_sized_error`] | generic | `size` |
//! | [`make_typed_error`] | `kind` | [`DEFAULT_MESSAGE_SIZE`] |
//! | [`make_typed_sized_error`] | `kind` | `size` |
//!
//! The same-named macros accept a format string and arguments directly.
//!
//! # Examples
//!
//! ```
//! use error_trail::{make_error, make_typed_error, ErrorKind};
//!
//! let err = make_typed_error!(ErrorKind::NullPointer, "x={}", 5);
//! assert_eq!(err.first_kind(), ErrorKind::NullPointer);
//! assert_eq!(err.first_message(), "x=5");
//!
//! let err = error_trail::make_error(format_args!("plain {}", "function"));
//! assert_eq!(err.first_message(), "plain function");
//! ```

use core::fmt;

use crate::chain::ErrorChain;
use crate::kind::ErrorKind;
use crate::message::DEFAULT_MESSAGE_SIZE;

/// Creates a generic error with the default message budget.
#[inline]
pub fn make_error(args: fmt::Arguments<'_>) -> ErrorChain {
    ErrorChain::new(ErrorKind::GENERIC, DEFAULT_MESSAGE_SIZE, args)
}

/// Creates a generic error whose message is limited to `size - 1` bytes.
#[inline]
pub fn make_sized_error(size: usize, args: fmt::Arguments<'_>) -> ErrorChain {
    ErrorChain::new(ErrorKind::GENERIC, size, args)
}

/// Creates an error of `kind` with the default message budget.
#[inline]
pub fn make_typed_error(kind: ErrorKind, args: fmt::Arguments<'_>) -> ErrorChain {
    ErrorChain::new(kind, DEFAULT_MESSAGE_SIZE, args)
}

/// Creates an error of `kind` whose message is limited to `size - 1` bytes.
#[inline]
pub fn make_typed_sized_error(kind: ErrorKind, size: usize, args: fmt::Arguments<'_>) -> ErrorChain {
    ErrorChain::new(kind, size, args)
}

/// Creates a generic [`ErrorChain`](crate::ErrorChain) from a format string.
///
/// ```
/// let err = error_trail::make_error!("some problem: {}", "ops");
/// assert_eq!(err.first_message(), "some problem: ops");
/// ```
#[macro_export]
macro_rules! make_error {
    ($($arg:tt)+) => {
        $crate::make_error(::core::format_args!($($arg)+))
    };
}

/// Creates a generic [`ErrorChain`](crate::ErrorChain) with a message budget.
///
/// ```
/// let err = error_trail::make_sized_error!(8, "some problem: {}", "ops");
/// assert_eq!(err.first_message(), "some pr");
/// ```
#[macro_export]
macro_rules! make_sized_error {
    ($size:expr, $($arg:tt)+) => {
        $crate::make_sized_error($size, ::core::format_args!($($arg)+))
    };
}

/// Creates a typed [`ErrorChain`](crate::ErrorChain) from a format string.
#[macro_export]
macro_rules! make_typed_error {
    ($kind:expr, $($arg:tt)+) => {
        $crate::make_typed_error($kind, ::core::format_args!($($arg)+))
    };
}

/// Creates a typed [`ErrorChain`](crate::ErrorChain) with a message budget.
///
/// ```
/// use error_trail::{make_typed_sized_error, ErrorKind};
///
/// let err = make_typed_sized_error!(ErrorKind::AlreadyExists, 8, "some problem: {}", "blah");
/// assert_eq!(err.first_message(), "some pr");
/// assert_eq!(err.first_kind(), ErrorKind::AlreadyExists);
/// ```
#[macro_export]
macro_rules! make_typed_sized_error {
    ($kind:expr, $size:expr, $($arg:tt)+) => {
        $crate::make_typed_sized_error($kind, $size, ::core::format_args!($($arg)+))
    };
}

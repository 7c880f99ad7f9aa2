//! Exception-free error propagation.
//!
//! The crate is built from three pieces:
//!
//! - [`ErrorKind`]: a catalog of error kinds generated at build time, with a
//!   baseline of generic and POSIX-style kinds that applications can extend.
//! - [`ErrorChain`]: an ordered, append-only list of `(kind, message)`
//!   entries. The first entry is the root cause; each layer that sees the
//!   error on its way up may append one more. Messages are formatted into a
//!   size-bounded buffer and silently truncated to fit.
//! - Two carriers for return values: [`Outcome`] holds a value or an error,
//!   [`ResultPair`] always holds a value plus an optional error.
//!
//! "No error" is `None` ([`MaybeError`]), never an empty chain.
//!
//! # Examples
//!
//! ## Building and annotating a chain
//!
//! ```
//! use error_trail::{make_sized_error, name_of, ErrorKind};
//!
//! let mut err = make_sized_error!(8, "some problem: {}", "ops");
//! assert_eq!(err.first_message(), "some pr");
//!
//! err.append_typed(ErrorKind::AlreadyExists, format_args!("hey there {}", "mate"));
//!
//! let entries = err.entries();
//! assert_eq!(entries[0].kind(), ErrorKind::GenericError);
//! assert_eq!(entries[1].message(), "hey there mate");
//! assert_eq!(name_of(entries[1].kind()), "already_exists");
//! ```
//!
//! ## Propagating through layers
//!
//! ```
//! use error_trail::{code_location, make_error, make_typed_error, ErrorKind, MaybeError};
//!
//! fn read_header() -> MaybeError {
//!     Some(make_typed_error!(ErrorKind::BadMessage, "header truncated"))
//! }
//!
//! fn load() -> MaybeError {
//!     if let Some(mut err) = read_header() {
//!         err.append(format_args!("{} - loading archive", code_location!()));
//!         return Some(err);
//!     }
//!     None
//! }
//!
//! let err = load().unwrap();
//! assert_eq!(err.first_kind(), ErrorKind::BadMessage);
//! assert_eq!(err.len(), 2);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub(crate) mod alloc_type;
mod diag;

/// Ordered error chains and their entries
pub mod chain;
/// Constructors for one-entry chains
pub mod construct;
/// Chain rendering
pub mod format;
/// The error kind catalog
pub mod kind;
/// Call-site strings for messages
pub mod location;
/// Size-bounded message formatting
pub mod message;
/// Value-or-error carrier
pub mod outcome;
/// Value/error pair carrier
pub mod pair;
/// Convenience re-exports for quick starts
pub mod prelude;

/// Conversions from `std::io` errors (requires `std`)
#[cfg(feature = "std")]
pub mod convert;

#[cfg(all(test, feature = "std"))]
#[path = "../build/catalog.rs"]
mod catalog_rules;

use smallvec::SmallVec;

pub use chain::{ErrorChain, ErrorEntry, MaybeError};
pub use construct::{make_error, make_sized_error, make_typed_error, make_typed_sized_error};
pub use format::{ErrorFormatConfig, ErrorFormatter};
pub use kind::{name_of, ErrorKind};
pub use message::DEFAULT_MESSAGE_SIZE;
pub use outcome::Outcome;
pub use pair::ResultPair;

/// SmallVec-backed storage for chain entries.
///
/// Uses inline storage for one element, so the common single-entry chain
/// needs no allocation for the list itself.
pub type ErrorVec<E> = SmallVec<[E; 1]>;

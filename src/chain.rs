//! Ordered error chains.
//!
//! An [`ErrorChain`] records the root cause first and every layer of context
//! after it. "No error" is `None` ([`MaybeError`]), never an empty chain.

use core::fmt::{self, Display};

use crate::alloc_type::String;
use crate::diag;
use crate::format::ErrorFormatBuilder;
use crate::kind::ErrorKind;
use crate::message::{format_bounded, DEFAULT_MESSAGE_SIZE};
use crate::ErrorVec;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Return type for operations that only report failure.
pub type MaybeError = Option<ErrorChain>;

/// One `(kind, message)` record of a chain.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorEntry {
    kind: ErrorKind,
    message: String,
}

impl ErrorEntry {
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for ErrorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

/// Ordered, append-only sequence of error entries.
///
/// Chains are built by the `make_*` constructors and grow one entry per
/// `append*` call. Existing entries are never modified or reordered.
///
/// The [`Default`] value has no entries. It only shows up transiently (for
/// example after [`Outcome::take_error`](crate::Outcome::take_error)) and the
/// first-entry accessors answer it with benign defaults.
///
/// # Examples
///
/// ```
/// use error_trail::{make_sized_error, ErrorKind};
///
/// let mut err = make_sized_error!(8, "some problem: {}", "ops");
/// err.append_typed(ErrorKind::AlreadyExists, format_args!("hey there {}", "mate"));
///
/// assert_eq!(err.first_message(), "some pr");
/// assert_eq!(err.len(), 2);
/// assert_eq!(err.entries()[1].kind(), ErrorKind::AlreadyExists);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ErrorChain {
    entries: ErrorVec<ErrorEntry>,
}

impl ErrorChain {
    /// Creates a one-entry chain with the given kind and message budget.
    pub fn new(kind: ErrorKind, size: usize, args: fmt::Arguments<'_>) -> Self {
        let mut chain = Self::default();
        chain.push(kind, size, args);
        chain
    }

    /// Appends a generic entry with the default message budget.
    #[inline]
    pub fn append(&mut self, args: fmt::Arguments<'_>) {
        self.push(ErrorKind::GENERIC, DEFAULT_MESSAGE_SIZE, args);
    }

    /// Appends a generic entry with a message budget of `size` bytes.
    #[inline]
    pub fn append_sized(&mut self, size: usize, args: fmt::Arguments<'_>) {
        self.push(ErrorKind::GENERIC, size, args);
    }

    /// Appends an entry of `kind` with the default message budget.
    #[inline]
    pub fn append_typed(&mut self, kind: ErrorKind, args: fmt::Arguments<'_>) {
        self.push(kind, DEFAULT_MESSAGE_SIZE, args);
    }

    /// Appends an entry of `kind` with a message budget of `size` bytes.
    #[inline]
    pub fn append_typed_sized(&mut self, kind: ErrorKind, size: usize, args: fmt::Arguments<'_>) {
        self.push(kind, size, args);
    }

    /// Message of the root-cause entry.
    pub fn first_message(&self) -> &str {
        match self.entries.first() {
            Some(entry) => &entry.message,
            None => {
                diag::report(format_args!("first_message called on an error chain with no entries"));
                ""
            }
        }
    }

    /// Kind of the root-cause entry.
    pub fn first_kind(&self) -> ErrorKind {
        match self.entries.first() {
            Some(entry) => entry.kind,
            None => {
                diag::report(format_args!("first_kind called on an error chain with no entries"));
                ErrorKind::GENERIC
            }
        }
    }

    /// All entries, root cause first.
    #[inline]
    pub fn entries(&self) -> &[ErrorEntry] {
        &self.entries
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, ErrorEntry> {
        self.entries.iter()
    }

    /// The most recently appended entry.
    #[inline]
    pub fn last_entry(&self) -> Option<&ErrorEntry> {
        self.entries.last()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a builder for customizing how the chain is rendered.
    #[must_use]
    #[inline]
    pub fn fmt(&self) -> ErrorFormatBuilder<'_> {
        ErrorFormatBuilder::new(self)
    }

    fn push(&mut self, kind: ErrorKind, size: usize, args: fmt::Arguments<'_>) {
        match format_bounded(size, args) {
            Ok(message) => self.entries.push(ErrorEntry { kind, message }),
            Err(err) => diag::report(format_args!(
                "dropping {} error entry, cannot allocate a {}-byte message buffer ({}): {}",
                kind,
                size,
                err,
                args.as_str().unwrap_or("<formatted message>")
            )),
        }
    }
}

impl<'a> IntoIterator for &'a ErrorChain {
    type Item = &'a ErrorEntry;
    type IntoIter = core::slice::Iter<'a, ErrorEntry>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for ErrorChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            return Display::fmt(&self.fmt(), f);
        }
        Display::fmt(&self.fmt().cascaded(), f)
    }
}

impl core::error::Error for ErrorChain {}

// A deserialized chain always carries at least one entry.
#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for ErrorChain {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename = "ErrorChain")]
        struct Raw {
            entries: ErrorVec<ErrorEntry>,
        }

        let raw = Raw::deserialize(deserializer)?;
        if raw.entries.is_empty() {
            return Err(serde::de::Error::custom("an error chain needs at least one entry"));
        }
        Ok(Self { entries: raw.entries })
    }
}

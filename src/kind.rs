//! The error kind catalog.
//!
//! [`ErrorKind`] is generated at build time from `kinds/predefined.kinds`,
//! `kinds/user_defined.kinds` and the optional list named by the
//! `ERROR_TRAIL_KINDS_FILE` environment variable, in that order. Every name in
//! those lists becomes one variant (`already_exists` becomes
//! `ErrorKind::AlreadyExists`) and keeps its snake_case spelling as the
//! display name.
//!
//! A relative `ERROR_TRAIL_KINDS_FILE` resolves against the error-trail
//! package directory, not the crate that depends on it. Give an absolute path,
//! or set the variable from `.cargo/config.toml` with `relative = true`:
//!
//! ```toml
//! [env]
//! ERROR_TRAIL_KINDS_FILE = { value = "app.kinds", relative = true }
//! ```
//!
//! # Examples
//!
//! ```
//! use error_trail::{name_of, ErrorKind};
//!
//! assert_eq!(name_of(ErrorKind::AlreadyExists), "already_exists");
//! assert_eq!(ErrorKind::from_name("timed_out"), Some(ErrorKind::TimedOut));
//! assert_eq!(ErrorKind::default(), ErrorKind::GenericError);
//! ```

use core::fmt::{self, Display};

macro_rules! define_error_kinds {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// Classification tag carried by every error entry.
        ///
        /// Kinds carry no data. New kinds are appended through the kind lists,
        /// so matches outside this crate need a wildcard arm.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[non_exhaustive]
        pub enum ErrorKind {
            $(
                #[doc = concat!("`", $name, "`")]
                $variant,
            )+
        }

        impl ErrorKind {
            /// Every kind in catalog order.
            pub const ALL: &'static [ErrorKind] = &[$(ErrorKind::$variant),+];

            /// Returns the stable symbolic name of the kind.
            #[inline]
            pub const fn name(self) -> &'static str {
                match self {
                    $(ErrorKind::$variant => $name,)+
                }
            }

            /// Looks a kind up by its symbolic name.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(ErrorKind::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

include!(concat!(env!("OUT_DIR"), "/error_kinds.rs"));

impl ErrorKind {
    /// The kind used by [`make_error`](crate::make_error) and
    /// [`ErrorChain::append`](crate::ErrorChain::append).
    pub const GENERIC: ErrorKind = ErrorKind::GenericError;
}

/// Returns the stable symbolic name of `kind`.
#[inline]
pub const fn name_of(kind: ErrorKind) -> &'static str {
    kind.name()
}

impl Default for ErrorKind {
    #[inline]
    fn default() -> Self {
        Self::GENERIC
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ErrorKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ErrorKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct KindVisitor;

        impl serde::de::Visitor<'_> for KindVisitor {
            type Value = ErrorKind;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an error kind name")
            }

            fn visit_str<E>(self, value: &str) -> Result<ErrorKind, E>
            where
                E: serde::de::Error,
            {
                ErrorKind::from_name(value)
                    .ok_or_else(|| E::custom(format_args!("unknown error kind `{value}`")))
            }
        }

        deserializer.deserialize_str(KindVisitor)
    }
}

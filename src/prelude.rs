//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_trail::prelude::*;
//!
//! fn parse_port(raw: &str) -> ResultPair<u16> {
//!     match raw.parse::<u16>() {
//!         Ok(port) => ResultPair::from_value(port),
//!         Err(err) => ResultPair::from_error(make_typed_error!(
//!             ErrorKind::InvalidArgument,
//!             "{} - bad port {:?}: {}",
//!             code_location!(),
//!             raw,
//!             err
//!         )),
//!     }
//! }
//!
//! assert_eq!(parse_port("8080").value, 8080);
//! assert_eq!(parse_port("http").value, 0);
//! ```

// Macros
pub use crate::{
    code_location, make_error, make_sized_error, make_typed_error, make_typed_sized_error,
};

// Core types
pub use crate::chain::{ErrorChain, ErrorEntry, MaybeError};
pub use crate::kind::{name_of, ErrorKind};
pub use crate::outcome::Outcome;
pub use crate::pair::ResultPair;

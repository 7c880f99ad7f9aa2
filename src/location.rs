//! Call-site description for error messages.
//!
//! [`code_location!`](crate::code_location) produces
//! `"[ <file>:<line> => <function path> ]"`. The string is meant to be passed
//! as an ordinary format argument:
//!
//! ```
//! use error_trail::{code_location, make_error};
//!
//! fn open_socket() -> error_trail::ErrorChain {
//!     make_error!("{} - port already bound", code_location!())
//! }
//!
//! let err = open_socket();
//! assert!(err.first_message().contains("open_socket"));
//! assert!(err.first_message().ends_with("] - port already bound"));
//! ```

use crate::alloc_type::{format, String};

/// Formats a location string from its parts.
pub fn format_location(file: &str, line: u32, function: &str) -> String {
    format!("[ {file}:{line} => {function} ]")
}

/// Expands to a `String` describing the current file, line and enclosing
/// function.
#[macro_export]
macro_rules! code_location {
    () => {{
        fn __here() {}
        let function = ::core::any::type_name_of_val(&__here);
        let function = function.strip_suffix("::__here").unwrap_or(function);
        $crate::location::format_location(::core::file!(), ::core::line!(), function)
    }};
}

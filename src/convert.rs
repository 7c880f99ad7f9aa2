//! Conversions from standard library I/O errors (requires `std`).
//!
//! ```
//! use error_trail::{ErrorChain, ErrorKind};
//! use std::io;
//!
//! let err = ErrorChain::from(io::Error::new(io::ErrorKind::TimedOut, "socket idle"));
//! assert_eq!(err.first_kind(), ErrorKind::TimedOut);
//! assert_eq!(err.first_message(), "socket idle");
//! ```

use std::io;

use crate::chain::ErrorChain;
use crate::kind::ErrorKind;
use crate::message::DEFAULT_MESSAGE_SIZE;

impl From<io::ErrorKind> for ErrorKind {
    fn from(kind: io::ErrorKind) -> Self {
        match kind {
            io::ErrorKind::NotFound => ErrorKind::NoSuchFileOrDirectory,
            io::ErrorKind::PermissionDenied => ErrorKind::PermissionDenied,
            io::ErrorKind::ConnectionRefused => ErrorKind::ConnectionRefused,
            io::ErrorKind::ConnectionReset => ErrorKind::ConnectionReset,
            io::ErrorKind::ConnectionAborted => ErrorKind::ConnectionAborted,
            io::ErrorKind::NotConnected => ErrorKind::NotConnected,
            io::ErrorKind::AddrInUse => ErrorKind::AddressInUse,
            io::ErrorKind::AddrNotAvailable => ErrorKind::AddressNotAvailable,
            io::ErrorKind::BrokenPipe => ErrorKind::BrokenPipe,
            io::ErrorKind::AlreadyExists => ErrorKind::AlreadyExists,
            io::ErrorKind::WouldBlock => ErrorKind::OperationWouldBlock,
            io::ErrorKind::InvalidInput => ErrorKind::InvalidArgument,
            io::ErrorKind::InvalidData => ErrorKind::BadMessage,
            io::ErrorKind::TimedOut => ErrorKind::TimedOut,
            io::ErrorKind::Interrupted => ErrorKind::Interrupted,
            io::ErrorKind::Unsupported => ErrorKind::NotSupported,
            io::ErrorKind::OutOfMemory => ErrorKind::NotEnoughMemory,
            io::ErrorKind::Other => ErrorKind::GenericError,
            _ => ErrorKind::IoError,
        }
    }
}

impl From<io::Error> for ErrorChain {
    fn from(err: io::Error) -> Self {
        ErrorChain::new(err.kind().into(), DEFAULT_MESSAGE_SIZE, format_args!("{err}"))
    }
}

impl From<&io::Error> for ErrorChain {
    fn from(err: &io::Error) -> Self {
        ErrorChain::new(err.kind().into(), DEFAULT_MESSAGE_SIZE, format_args!("{err}"))
    }
}

//! Size-bounded message formatting.
//!
//! Messages are rendered from [`core::fmt::Arguments`] into a buffer whose
//! budget is chosen by the caller. A `size`-byte budget leaves room for
//! `size - 1` bytes of text; anything past that is cut silently.
//!
//! # Examples
//!
//! ```
//! use error_trail::message::format_bounded;
//!
//! let msg = format_bounded(8, format_args!("some problem: {}", "ops")).unwrap();
//! assert_eq!(msg, "some pr");
//! ```

use core::fmt::{self, Write};

use crate::alloc_type::{String, TryReserveError};

/// Budget used by the constructors and appends that take no explicit size.
pub const DEFAULT_MESSAGE_SIZE: usize = 128;

/// Renders `args` into a message of at most `size - 1` bytes.
///
/// The whole budget is reserved before formatting starts, so the result is
/// an `Err` only when that reservation fails. Truncation never splits a
/// UTF-8 character.
pub fn format_bounded(size: usize, args: fmt::Arguments<'_>) -> Result<String, TryReserveError> {
    let limit = size.saturating_sub(1);

    let mut buf = String::new();
    buf.try_reserve_exact(limit)?;

    let mut writer = BoundedWriter { buf: &mut buf, limit };
    // An Err here only means the budget ran out.
    let _ = writer.write_fmt(args);

    buf.shrink_to_fit();
    Ok(buf)
}

struct BoundedWriter<'a> {
    buf: &'a mut String,
    limit: usize,
}

impl Write for BoundedWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let remaining = self.limit - self.buf.len();
        if s.len() <= remaining {
            self.buf.push_str(s);
            return Ok(());
        }

        let mut end = remaining;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        self.buf.push_str(&s[..end]);
        Err(fmt::Error)
    }
}

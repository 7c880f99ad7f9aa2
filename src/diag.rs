//! Diagnostic stream for the degraded paths.
//!
//! Routed through `tracing` when the `tracing` feature is enabled, to stderr
//! under `std`, and dropped otherwise.

use core::fmt;

pub(crate) fn report(args: fmt::Arguments<'_>) {
    #[cfg(feature = "tracing")]
    tracing::warn!(target: "error_trail", "{}", args);

    #[cfg(all(feature = "std", not(feature = "tracing")))]
    std::eprintln!("error_trail: {args}");

    #[cfg(not(feature = "std"))]
    let _ = args;
}

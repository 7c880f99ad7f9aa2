//! Error chain rendering.
//!
//! By default a chain renders newest entry first down to the root cause,
//! joined with `" -> "`, each entry as `kind: message`.
//!
//! ```
//! use error_trail::{make_typed_error, ErrorKind};
//!
//! let mut err = make_typed_error!(ErrorKind::TimedOut, "read took too long");
//! err.append(format_args!("loading config"));
//!
//! assert_eq!(
//!     err.to_string(),
//!     "generic_error: loading config -> timed_out: read took too long"
//! );
//! assert_eq!(
//!     err.fmt().root_first(true).show_kind(false).to_string(),
//!     "read took too long -> loading config"
//! );
//! ```

use core::fmt::{self, Display};

use crate::alloc_type::{String, ToString};
use crate::chain::{ErrorChain, ErrorEntry};

/// Trait for customizing error chain formatting.
pub trait ErrorFormatter {
    fn format_entry(&self, entry: &ErrorEntry) -> String {
        entry.to_string()
    }

    fn separator(&self) -> &str {
        " -> "
    }

    fn format_chain<'a>(&self, entries: impl Iterator<Item = &'a ErrorEntry>) -> String {
        let mut result = String::new();
        for (i, entry) in entries.enumerate() {
            if i > 0 {
                result.push_str(self.separator());
            }
            result.push_str(&self.format_entry(entry));
        }
        result
    }
}

/// Configuration-based error formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorFormatConfig {
    pub separator: String,
    pub entry_prefix: Option<String>,
    pub root_prefix: Option<String>,
    pub indent: String,
    pub show_kind: bool,
    pub cascade: bool,
    /// The root cause is yielded first rather than last.
    pub root_at_start: bool,
}

impl Default for ErrorFormatConfig {
    fn default() -> Self {
        Self {
            separator: " -> ".into(),
            entry_prefix: None,
            root_prefix: None,
            indent: "  ".into(),
            show_kind: true,
            cascade: false,
            root_at_start: false,
        }
    }
}

impl ErrorFormatConfig {
    #[inline]
    pub fn pretty() -> Self {
        Self {
            separator: "\n".into(),
            entry_prefix: Some("├─ ".into()),
            root_prefix: Some("└─ ".into()),
            ..Default::default()
        }
    }

    #[inline]
    pub fn cascaded() -> Self {
        Self { separator: "\n".into(), cascade: true, ..Default::default() }
    }

    #[inline]
    pub fn compact() -> Self {
        Self { separator: " | ".into(), ..Default::default() }
    }

    #[inline]
    pub fn messages_only() -> Self {
        Self { show_kind: false, ..Default::default() }
    }
}

impl ErrorFormatter for ErrorFormatConfig {
    fn format_entry(&self, entry: &ErrorEntry) -> String {
        if self.show_kind {
            entry.to_string()
        } else {
            entry.message().to_string()
        }
    }

    fn separator(&self) -> &str {
        &self.separator
    }

    // `root_prefix` marks the root cause, which is the first entry yielded
    // when `root_at_start` is set and the last one otherwise.
    fn format_chain<'a>(&self, entries: impl Iterator<Item = &'a ErrorEntry>) -> String {
        let entries: crate::ErrorVec<&ErrorEntry> = entries.collect();
        let root_idx = if self.root_at_start { 0 } else { entries.len().saturating_sub(1) };
        let mut result = String::with_capacity(entries.len() * 32);

        for (i, entry) in entries.iter().enumerate() {
            if i > 0 {
                result.push_str(&self.separator);
                if self.cascade {
                    for _ in 0..i {
                        result.push_str(&self.indent);
                    }
                }
            }

            let prefix = if i == root_idx {
                self.root_prefix.as_ref().or(self.entry_prefix.as_ref())
            } else {
                self.entry_prefix.as_ref()
            };
            if let Some(p) = prefix {
                result.push_str(p);
            }

            result.push_str(&self.format_entry(entry));
        }
        result
    }
}

/// Builder for customizing chain display output.
pub struct ErrorFormatBuilder<'a> {
    chain: &'a ErrorChain,
    config: ErrorFormatConfig,
}

impl<'a> ErrorFormatBuilder<'a> {
    pub fn new(chain: &'a ErrorChain) -> Self {
        Self { chain, config: ErrorFormatConfig::default() }
    }

    pub fn with_config(mut self, config: ErrorFormatConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.config.separator = separator.into();
        self
    }

    /// Renders in insertion order (root cause first) instead of newest first.
    pub fn root_first(mut self, enabled: bool) -> Self {
        self.config.root_at_start = enabled;
        self
    }

    pub fn show_kind(mut self, show: bool) -> Self {
        self.config.show_kind = show;
        self
    }

    pub fn pretty(self) -> Self {
        self.preset(ErrorFormatConfig::pretty())
    }

    pub fn compact(self) -> Self {
        self.preset(ErrorFormatConfig::compact())
    }

    pub fn cascaded(self) -> Self {
        self.preset(ErrorFormatConfig::cascaded())
    }

    // Presets keep the chosen rendering order.
    fn preset(mut self, config: ErrorFormatConfig) -> Self {
        let root_at_start = self.config.root_at_start;
        self.config = ErrorFormatConfig { root_at_start, ..config };
        self
    }
}

impl Display for ErrorFormatBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = if self.config.root_at_start {
            self.config.format_chain(self.chain.iter())
        } else {
            self.config.format_chain(self.chain.iter().rev())
        };
        f.write_str(&rendered)
    }
}

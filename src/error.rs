//! This module implements `JdnError`.

use core::fmt;

/// `JdnError`'s error type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// RangeError
    #[default]
    Range,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Range => "RangeError",
        }
        .fmt(f)
    }
}

/// The error type for `jdn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JdnError {
    kind: ErrorKind,
    msg: &'static str,
}

impl JdnError {
    #[inline]
    #[must_use]
    const fn new(kind: ErrorKind) -> Self {
        Self { kind, msg: "" }
    }

    /// Create a range error.
    #[inline]
    #[must_use]
    pub const fn range() -> Self {
        Self::new(ErrorKind::Range)
    }

    /// Add a message to the error.
    #[inline]
    #[must_use]
    pub const fn with_message(mut self, msg: &'static str) -> Self {
        self.msg = msg;
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Extracts the error message.
    #[inline]
    #[must_use]
    pub const fn into_message(self) -> &'static str {
        self.msg
    }
}

impl fmt::Display for JdnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        if !self.msg.is_empty() {
            write!(f, ": {}", self.msg)?;
        }

        Ok(())
    }
}

impl core::error::Error for JdnError {}

//! Error taxonomy shared by every weft crate.
//!
//! Each failure carries one [`ErrorKind`] plus a human-readable message.
//! Callers branch on the kind to decide between retrying and aborting;
//! the message is for people.
//!
//! Errors are built through the `#[cold]` factory functions at the bottom
//! of this module so that message wording lives in one place.

use std::fmt;

/// Category of a failure crossing a component boundary.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input or a structural mismatch.
    InvalidArgument,
    /// The caller violated a protocol (e.g. context stack discipline).
    FailedPrecondition,
    /// The IR or type shape is not supported by this build.
    Unimplemented,
    /// Unexpected environment fault (e.g. encoding failure).
    Internal,
}

impl ErrorKind {
    /// Stable upper-case name, as used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "INVALID_ARGUMENT",
            ErrorKind::FailedPrecondition => "FAILED_PRECONDITION",
            ErrorKind::Unimplemented => "UNIMPLEMENTED",
            ErrorKind::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tagged failure.
///
/// `Display` renders only the message so that nested failures can be
/// embedded verbatim into an outer message without repeating the kind.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    /// Taxonomy kind.
    pub kind: ErrorKind,
    /// Human-readable description.
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Error {
            kind,
            message: message.into(),
        }
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the failure may go away on retry.
    ///
    /// Only environment faults qualify; every other kind is deterministic
    /// for the same input.
    #[inline]
    pub fn is_retryable(&self) -> bool {
        self.kind == ErrorKind::Internal
    }

    /// Prefix the message with `context`, keeping the kind.
    #[must_use]
    pub fn context(self, context: impl fmt::Display) -> Self {
        Error {
            kind: self.kind,
            message: format!("{context}{}", self.message),
        }
    }
}

/// Result alias used throughout weft.
pub type Result<T> = std::result::Result<T, Error>;

#[cold]
pub fn invalid_argument(message: impl Into<String>) -> Error {
    Error::new(ErrorKind::InvalidArgument, message)
}

#[cold]
pub fn failed_precondition(message: impl Into<String>) -> Error {
    Error::new(ErrorKind::FailedPrecondition, message)
}

#[cold]
pub fn unimplemented(message: impl Into<String>) -> Error {
    Error::new(ErrorKind::Unimplemented, message)
}

#[cold]
pub fn internal(message: impl Into<String>) -> Error {
    Error::new(ErrorKind::Internal, message)
}

//! Error types shared by every checker
//!
//! All of these are returned values. A mismatch is expected while a stream
//! is being consumed; only the verdict from `final_check` decides a run.

use thiserror::Error;

/// A single [`EventChecker`] rejected an event
///
/// [`EventChecker`]: crate::core::ports::EventChecker
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct MatchError {
    message: String,
}

impl MatchError {
    /// Create a match error with a human-readable reason
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The reason the event was rejected
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A streamed response could not be turned into an [`Event`]
///
/// [`Event`]: super::Event
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The response had no payload field at all
    #[error("response carries no event payload")]
    Empty,

    /// The response carried only fields that are not events (control frames)
    #[error("unknown event type: {0}")]
    UnknownEvent(String),
}

/// A run ended before every check matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IncompleteSequenceError {
    /// Ordered checker stopped at position `matched`
    #[error("OrderedEventChecker: only {matched}/{total} matched")]
    Ordered {
        /// Checks matched before the stream ended
        matched: usize,
        /// Checks in the sequence
        total: usize,
    },

    /// Unordered checker still had `remaining` checks pending
    #[error("UnorderedEventChecker: {remaining}/{total} checks remain")]
    Unordered {
        /// Checks never matched
        remaining: usize,
        /// Checks in the set
        total: usize,
    },
}

/// Any error a multi-event checker can report
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    /// The check at the current position rejected the event
    #[error(transparent)]
    Mismatch(#[from] MatchError),

    /// No pending check of an unordered set accepted the event
    #[error("UnorderedEventChecker: all {pending} checks failed")]
    NoPendingMatch {
        /// Checks that were tried
        pending: usize,
    },

    /// The stream ended early
    #[error(transparent)]
    Incomplete(#[from] IncompleteSequenceError),

    /// The response did not carry an event
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// Raised by caller-supplied check functions
    #[error("{0}")]
    Custom(String),
}

impl CheckError {
    /// Create a free-form error, for use in custom check functions
    #[must_use]
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }
}

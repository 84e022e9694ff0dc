//! Outcome of feeding one event to a multi-event checker

use super::CheckError;

/// Result of a single `next_*_check` call
///
/// The four states mirror a `(done, error)` pair:
///
/// | variant | done | error | meaning |
/// |---|---|---|---|
/// | `Matched` | false | none | event accepted, keep feeding |
/// | `Mismatched` | false | some | event rejected, keep feeding |
/// | `Done` | true | none | overall success, stop feeding |
/// | `Failed` | true | some | overall failure, stop feeding |
///
/// Callers must stop feeding events once [`Step::is_done`] returns `true`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Step {
    /// The event was accepted; more events are needed
    Matched,
    /// The event was rejected; more events may still satisfy the checker
    Mismatched(CheckError),
    /// The checker concluded successfully
    Done,
    /// The checker concluded with a failure
    Failed(CheckError),
}

impl Step {
    /// Build a step from a `(done, error)` pair
    pub fn from_parts(done: bool, error: Option<CheckError>) -> Self {
        match (done, error) {
            (false, None) => Self::Matched,
            (false, Some(err)) => Self::Mismatched(err),
            (true, None) => Self::Done,
            (true, Some(err)) => Self::Failed(err),
        }
    }

    /// Split into a `(done, error)` pair
    #[must_use]
    pub fn into_parts(self) -> (bool, Option<CheckError>) {
        match self {
            Self::Matched => (false, None),
            Self::Mismatched(err) => (false, Some(err)),
            Self::Done => (true, None),
            Self::Failed(err) => (true, Some(err)),
        }
    }

    /// Whether the checker has concluded
    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done | Self::Failed(_))
    }

    /// The error carried by this step, if any
    #[must_use]
    pub const fn error(&self) -> Option<&CheckError> {
        match self {
            Self::Mismatched(err) | Self::Failed(err) => Some(err),
            Self::Matched | Self::Done => None,
        }
    }
}

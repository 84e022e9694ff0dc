//! Ordered multi-event checker
//!
//! Checks are matched in insertion order. Events that do not match the
//! current position are reported and skipped; the same position is tried
//! again on the next event.

use std::fmt;
use std::sync::Arc;

use super::MultiEventChecker;
use crate::core::models::{CheckError, Event, IncompleteSequenceError, Step};
use crate::core::ports::{EventChecker, Logger, SharedChecker, diag};

/// Checks a series of events in order
#[derive(Default)]
pub struct OrderedEventChecker {
    checks: Vec<SharedChecker>,
    idx: usize,
}

impl OrderedEventChecker {
    /// Create a checker expecting `checks` in the given order
    pub fn new(checks: impl IntoIterator<Item = SharedChecker>) -> Self {
        Self {
            checks: checks.into_iter().collect(),
            idx: 0,
        }
    }

    /// Append checks to the end of the sequence
    pub fn add_checks(&mut self, checks: impl IntoIterator<Item = SharedChecker>) {
        self.checks.extend(checks);
    }

    /// Append a single check to the end of the sequence
    pub fn push(&mut self, check: impl EventChecker + 'static) {
        self.checks.push(Arc::new(check));
    }

    /// Every check, in expected order
    #[must_use]
    pub fn checks(&self) -> &[SharedChecker] {
        &self.checks
    }

    /// Checks matched so far in the current run
    #[must_use]
    pub const fn matched(&self) -> usize {
        self.idx
    }

    /// Number of checks in the sequence
    #[must_use]
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Whether the sequence has no checks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl MultiEventChecker for OrderedEventChecker {
    fn next_event_check(&mut self, event: &Event, logger: Logger<'_>) -> Step {
        let Some(check) = self.checks.get(self.idx) else {
            return Step::Done;
        };

        if let Err(err) = check.check_event(event) {
            return Step::Mismatched(err.into());
        }

        self.idx += 1;
        let total = self.checks.len();
        if self.idx == total {
            diag!(logger, Info, "OrderedEventChecker: all {total} checks matched");
            return Step::Done;
        }

        diag!(logger, Info, "OrderedEventChecker: {}/{total} matched", self.idx);
        Step::Matched
    }

    fn final_check(&mut self, _logger: Logger<'_>) -> Result<(), CheckError> {
        let matched = self.idx;
        let total = self.checks.len();
        self.idx = 0;

        if matched >= total {
            return Ok(());
        }

        Err(IncompleteSequenceError::Ordered { matched, total }.into())
    }
}

impl fmt::Debug for OrderedEventChecker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedEventChecker")
            .field("checks", &self.checks.len())
            .field("idx", &self.idx)
            .finish()
    }
}

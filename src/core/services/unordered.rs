//! Unordered multi-event checker
//!
//! Every check must match some event, in any order. Checks live in an
//! append-only list; the pending set is a flag per check, so matching clears
//! a flag and resetting sets them all again.

use std::fmt;
use std::sync::Arc;

use super::MultiEventChecker;
use crate::core::models::{CheckError, Event, IncompleteSequenceError, Step};
use crate::core::ports::{EventChecker, Logger, SharedChecker, diag};

/// Checks a series of events in arbitrary order
#[derive(Default)]
pub struct UnorderedEventChecker {
    all: Vec<SharedChecker>,
    pending: Vec<bool>,
    remaining: usize,
}

impl UnorderedEventChecker {
    /// Create a checker expecting every one of `checks`
    pub fn new(checks: impl IntoIterator<Item = SharedChecker>) -> Self {
        let mut checker = Self::default();
        checker.add_checks(checks);
        checker
    }

    /// Add checks to the set
    ///
    /// New checks are pending immediately, so they can match during the
    /// current run. Checks that already matched stay matched until the next
    /// [`final_check`](MultiEventChecker::final_check).
    pub fn add_checks(&mut self, checks: impl IntoIterator<Item = SharedChecker>) {
        for check in checks {
            self.all.push(check);
            self.pending.push(true);
            self.remaining += 1;
        }
    }

    /// Add a single check to the set
    pub fn push(&mut self, check: impl EventChecker + 'static) {
        let check: SharedChecker = Arc::new(check);
        self.add_checks([check]);
    }

    /// Every check, in insertion order, whether matched or not
    #[must_use]
    pub fn checks(&self) -> &[SharedChecker] {
        &self.all
    }

    /// Checks not yet matched in the current run, in insertion order
    pub fn pending_checks(&self) -> impl Iterator<Item = &SharedChecker> {
        self.all
            .iter()
            .zip(&self.pending)
            .filter_map(|(check, &pending)| pending.then_some(check))
    }

    /// Number of checks not yet matched in the current run
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.remaining
    }

    /// Number of checks in the set
    #[must_use]
    pub fn len(&self) -> usize {
        self.all.len()
    }

    /// Whether the set has no checks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}

impl MultiEventChecker for UnorderedEventChecker {
    fn next_event_check(&mut self, event: &Event, logger: Logger<'_>) -> Step {
        let pending = self.remaining;
        if pending == 0 {
            return Step::Done;
        }

        let total = self.all.len();
        diag!(logger, Info, "UnorderedEventChecker: {}/{total} matched", total - pending);

        let mut attempt = 0;
        let mut hit = None;
        for (idx, check) in self.all.iter().enumerate() {
            if !self.pending[idx] {
                continue;
            }
            attempt += 1;
            match check.check_event(event) {
                Ok(()) => {
                    hit = Some(idx);
                    break;
                },
                Err(err) => {
                    diag!(
                        logger,
                        Info,
                        "UnorderedEventChecker: checking {attempt}/{pending}: failure: {err}"
                    );
                },
            }
        }

        let Some(idx) = hit else {
            return Step::Mismatched(CheckError::NoPendingMatch { pending });
        };

        self.pending[idx] = false;
        self.remaining -= 1;
        if self.remaining > 0 {
            return Step::Matched;
        }

        diag!(logger, Info, "UnorderedEventChecker: all {total} checks matched");
        Step::Done
    }

    fn final_check(&mut self, _logger: Logger<'_>) -> Result<(), CheckError> {
        let remaining = self.remaining;
        let total = self.all.len();

        self.pending.fill(true);
        self.remaining = total;

        if remaining == 0 {
            return Ok(());
        }

        Err(IncompleteSequenceError::Unordered { remaining, total }.into())
    }
}

impl fmt::Debug for UnorderedEventChecker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnorderedEventChecker")
            .field("checks", &self.all.len())
            .field("remaining", &self.remaining)
            .finish()
    }
}

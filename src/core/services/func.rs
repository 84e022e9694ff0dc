//! Function-backed multi-event checker
//!
//! For sequences the ordered and unordered checkers cannot express, callers
//! supply the step and verdict logic directly as closures.

use std::fmt;

use super::MultiEventChecker;
use crate::core::models::{CheckError, Event, Step};
use crate::core::ports::Logger;

/// Step function: checks one event, see [`Step`] for the outcomes
pub type NextCheckFn = Box<dyn FnMut(&Event, Logger<'_>) -> Step>;

/// Verdict function: called once the stream ends, performs any cleanup
pub type FinalCheckFn = Box<dyn FnMut(Logger<'_>) -> Result<(), CheckError>>;

/// Checks a series of events using caller-defined functions
pub struct FnEventChecker {
    next_check: NextCheckFn,
    final_check: FinalCheckFn,
}

impl FnEventChecker {
    /// Create a checker from a step function and a verdict function
    pub fn new<N, F>(next_check: N, final_check: F) -> Self
    where
        N: FnMut(&Event, Logger<'_>) -> Step + 'static,
        F: FnMut(Logger<'_>) -> Result<(), CheckError> + 'static,
    {
        Self {
            next_check: Box::new(next_check),
            final_check: Box::new(final_check),
        }
    }
}

impl MultiEventChecker for FnEventChecker {
    fn next_event_check(&mut self, event: &Event, logger: Logger<'_>) -> Step {
        (self.next_check)(event, logger)
    }

    fn final_check(&mut self, logger: Logger<'_>) -> Result<(), CheckError> {
        (self.final_check)(logger)
    }
}

impl fmt::Debug for FnEventChecker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnEventChecker").finish_non_exhaustive()
    }
}

//! Multi-event checker contract
//!
//! A [`MultiEventChecker`] consumes a stream one event at a time and decides,
//! after each one, whether it has seen enough. Once the stream ends (or the
//! checker concludes) the caller asks for a final verdict, which also resets
//! the checker for the next run.

use crate::core::models::{CheckError, Event, GetEventsResponse, Step, event_from_response};
use crate::core::ports::Logger;

/// Stepwise checker over a sequence of events
pub trait MultiEventChecker {
    /// Check the next streamed response
    ///
    /// The response is converted to an [`Event`] first. A response that does
    /// not carry an event yields [`Step::Mismatched`] with the conversion
    /// error and leaves the checker untouched.
    fn next_response_check(&mut self, response: &GetEventsResponse, logger: Logger<'_>) -> Step {
        match event_from_response(response) {
            Ok(event) => self.next_event_check(&event, logger),
            Err(err) => Step::Mismatched(err.into()),
        }
    }

    /// Check the next event
    ///
    /// See [`Step`] for the meaning of each outcome. Callers must stop
    /// feeding events once the returned step is done.
    fn next_event_check(&mut self, event: &Event, logger: Logger<'_>) -> Step;

    /// Signal the end of the stream and get the verdict
    ///
    /// Any per-run state is reset, whatever the verdict.
    fn final_check(&mut self, logger: Logger<'_>) -> Result<(), CheckError>;
}

impl<C: MultiEventChecker + ?Sized> MultiEventChecker for Box<C> {
    fn next_response_check(&mut self, response: &GetEventsResponse, logger: Logger<'_>) -> Step {
        (**self).next_response_check(response, logger)
    }

    fn next_event_check(&mut self, event: &Event, logger: Logger<'_>) -> Step {
        (**self).next_event_check(event, logger)
    }

    fn final_check(&mut self, logger: Logger<'_>) -> Result<(), CheckError> {
        (**self).final_check(logger)
    }
}

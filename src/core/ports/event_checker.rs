//! Single-event checker port
//!
//! Defines the capability the multi-event checkers are built from.

use std::sync::Arc;

use crate::core::models::{Event, MatchError};

/// Validates one event
///
/// Implementations decide whether a single event is the one expected. The
/// multi-event checkers only ever call [`EventChecker::check_event`] and act
/// on its result; they never inspect events themselves.
#[cfg_attr(test, mockall::automock)]
pub trait EventChecker: Send + Sync {
    /// Check an event, returning why it does not match
    fn check_event(&self, event: &Event) -> Result<(), MatchError>;
}

/// A checker shared between multi-event checkers
pub type SharedChecker = Arc<dyn EventChecker>;

impl<F> EventChecker for F
where
    F: Fn(&Event) -> Result<(), MatchError> + Send + Sync,
{
    fn check_event(&self, event: &Event) -> Result<(), MatchError> {
        self(event)
    }
}

//! Port traits (interfaces) for external collaborators
//!
//! These traits define the boundaries between the checking logic and the
//! code that owns event semantics and diagnostics.
//!
//! Implementations live with their owners: leaf checkers in test suites or
//! [`FieldChecker`](crate::core::services::FieldChecker), loggers in the
//! `adapters` module.

mod event_checker;
mod logger;

pub use event_checker::{EventChecker, SharedChecker};
pub use logger::{CheckLogger, Logger};

pub(crate) use logger::diag;

#[cfg(test)]
pub(crate) use event_checker::MockEventChecker;

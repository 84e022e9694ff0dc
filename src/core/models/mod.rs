//! Domain models for eventchecker
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Event`] - A decoded record from the monitored process
//! - [`GetEventsResponse`] - One streamed record, possibly carrying an event
//! - [`Step`] - Outcome of feeding one event to a multi-event checker
//! - [`CheckError`] - Everything a checker can report

mod error;
mod event;
mod response;
mod step;

pub use error::{CheckError, ConversionError, IncompleteSequenceError, MatchError};
pub use event::{Event, EventKind};
pub use response::{GetEventsResponse, event_from_response};
pub use step::Step;

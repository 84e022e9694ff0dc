//! Adapter implementations for port traits and stream sources
//!
//! This module contains the pieces that touch the outside world:
//!
//! - `json` - JSON-lines event stream reader and replay
//! - `logging` - `CheckLogger` backed by the `log` crate

pub mod json;
pub mod logging;

pub use json::{ReplayError, ResponseReader, read_responses, replay};
pub use logging::LogFacade;

//! eventchecker - Assert sequences of events emitted by a runtime security sensor
//!
//! This library provides stateful multi-event checkers that consume a live
//! or recorded event stream one event at a time and decide whether it met a
//! set of expectations.
//!
//! ```
//! use std::sync::Arc;
//!
//! use eventchecker::core::models::{Event, EventKind, Step};
//! use eventchecker::core::ports::SharedChecker;
//! use eventchecker::core::services::{FieldChecker, MultiEventChecker, OrderedEventChecker};
//! use serde_json::json;
//!
//! let exec: SharedChecker = Arc::new(FieldChecker::new(EventKind::ProcessExec));
//! let exit: SharedChecker = Arc::new(FieldChecker::new(EventKind::ProcessExit));
//! let mut checker = OrderedEventChecker::new([exec, exit]);
//!
//! let step = checker.next_event_check(&Event::new(EventKind::ProcessExec, json!({})), None);
//! assert_eq!(step, Step::Matched);
//! let step = checker.next_event_check(&Event::new(EventKind::ProcessExit, json!({})), None);
//! assert!(step.is_done());
//! assert!(checker.final_check(None).is_ok());
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;

pub use crate::core::models::{CheckError, Event, EventKind, GetEventsResponse, MatchError, Step};
pub use crate::core::ports::{CheckLogger, EventChecker, Logger, SharedChecker};
pub use crate::core::services::{
    FnEventChecker, MultiEventChecker, OrderedEventChecker, UnorderedEventChecker,
};

//! Checking services
//!
//! Pure logic that consumes events handed in by a caller. Nothing here
//! reads from a stream on its own.
//!
//! - [`multi`] - The [`MultiEventChecker`] contract
//! - [`ordered`] - Position-sensitive checker
//! - [`unordered`] - Set-membership checker
//! - [`func`] - Checker backed by caller-supplied closures
//! - [`driver`] - Runs a checker over a whole stream
//! - [`field`] - Reference single-event checker used by expectation files

pub mod driver;
pub mod field;
pub mod func;
pub mod multi;
pub mod ordered;
pub mod unordered;


pub use driver::{StreamDriver, StreamReport, StreamStats, check_events, check_responses};
pub use field::{FieldChecker, FieldMatcher};
pub use func::{FinalCheckFn, FnEventChecker, NextCheckFn};
pub use multi::MultiEventChecker;
pub use ordered::OrderedEventChecker;
pub use unordered::UnorderedEventChecker;

//! Core checking logic for eventchecker
//!
//! This module contains pure logic with no I/O dependencies.
//! Stream sources and log sinks are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Event, GetEventsResponse, Step, errors)
//! - `services/` - The multi-event checkers and the stream driver
//! - `ports/` - Trait definitions for external collaborators

pub mod models;
pub mod ports;
pub mod services;

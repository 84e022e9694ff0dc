//! Shared test fixtures and helpers
//!
//! Events here are exec events tagged with an `id`, and checks accept a
//! single id. That keeps sequences readable: `["A", "x", "B"]`.

use std::cell::RefCell;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use eventchecker::core::models::{Event, EventKind, GetEventsResponse, MatchError};
use eventchecker::core::ports::{CheckLogger, SharedChecker};
use log::Level;
use serde_json::{Value, json};
use tempfile::TempDir;

/// An exec event tagged with `id`
pub fn event(id: &str) -> Event {
    Event::new(EventKind::ProcessExec, json!({ "id": id }))
}

/// Events for each id, in order
pub fn events(ids: &[&str]) -> Vec<Event> {
    ids.iter().map(|id| event(id)).collect()
}

/// A streamed response wrapping [`event`]
pub fn response(id: &str) -> GetEventsResponse {
    GetEventsResponse::event(EventKind::ProcessExec, json!({ "id": id }))
}

/// A check accepting only events tagged with `id`
pub fn named(id: impl Into<String>) -> SharedChecker {
    let id = id.into();
    Arc::new(move |event: &Event| -> Result<(), MatchError> {
        match event.field("/id").and_then(Value::as_str) {
            Some(got) if got == id => Ok(()),
            got => Err(MatchError::new(format!("expected {id}, got {got:?}"))),
        }
    })
}

/// Checks for each id, in order
pub fn checks(ids: &[&str]) -> Vec<SharedChecker> {
    ids.iter().map(|id| named(*id)).collect()
}

/// Logger keeping every message with its level
#[derive(Default)]
pub struct Recorder(RefCell<Vec<(Level, String)>>);

impl Recorder {
    pub fn messages(&self) -> Vec<String> {
        self.0.borrow().iter().map(|(_, msg)| msg.clone()).collect()
    }

    pub fn levels(&self) -> Vec<Level> {
        self.0.borrow().iter().map(|(level, _)| *level).collect()
    }
}

impl CheckLogger for Recorder {
    fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        self.0.borrow_mut().push((level, args.to_string()));
    }
}

/// A scratch directory for expectation and stream files
pub struct Scratch {
    dir: TempDir,
}

impl Scratch {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Write `content` to `name` and return its path
    pub fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }
}

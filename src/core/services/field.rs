//! Field checker - a small reference [`EventChecker`]
//!
//! Matches an event by kind and by a list of JSON pointers into its payload.
//! This is what expectation files compile to; test suites with richer needs
//! implement [`EventChecker`] themselves.

use std::fmt;

use regex::Regex;
use serde_json::Value;

use crate::core::models::{Event, EventKind, MatchError};
use crate::core::ports::EventChecker;

/// How one payload field is matched
#[derive(Debug, Clone)]
pub enum FieldMatcher {
    /// JSON equality
    Exact(Value),
    /// String equality
    Full(String),
    /// String starts with
    Prefix(String),
    /// String ends with
    Suffix(String),
    /// String contains
    Contains(String),
    /// String matches the regular expression
    Regex(Regex),
}

impl FieldMatcher {
    /// Compile a regular expression matcher
    pub fn regex(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(Self::Regex)
    }

    /// Whether `value` satisfies this matcher
    ///
    /// String matchers never match non-string values.
    #[must_use]
    pub fn matches(&self, value: &Value) -> bool {
        if let Self::Exact(expected) = self {
            return expected == value;
        }

        let Some(actual) = value.as_str() else {
            return false;
        };

        match self {
            Self::Full(s) => actual == s,
            Self::Prefix(s) => actual.starts_with(s.as_str()),
            Self::Suffix(s) => actual.ends_with(s.as_str()),
            Self::Contains(s) => actual.contains(s.as_str()),
            Self::Regex(re) => re.is_match(actual),
            Self::Exact(_) => false,
        }
    }
}

impl fmt::Display for FieldMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(v) => write!(f, "{v}"),
            Self::Full(s) => write!(f, "full {s:?}"),
            Self::Prefix(s) => write!(f, "prefix {s:?}"),
            Self::Suffix(s) => write!(f, "suffix {s:?}"),
            Self::Contains(s) => write!(f, "contains {s:?}"),
            Self::Regex(re) => write!(f, "regex {:?}", re.as_str()),
        }
    }
}

/// Matches events of one kind whose fields satisfy every matcher
#[derive(Debug, Clone)]
pub struct FieldChecker {
    name: Option<String>,
    kind: EventKind,
    fields: Vec<(String, FieldMatcher)>,
}

impl FieldChecker {
    /// Create a checker accepting any event of `kind`
    #[must_use]
    pub const fn new(kind: EventKind) -> Self {
        Self {
            name: None,
            kind,
            fields: Vec::new(),
        }
    }

    /// Name used in mismatch messages
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Require the field at `pointer` (e.g. `/process/binary`) to match
    #[must_use]
    pub fn with_field(mut self, pointer: impl Into<String>, matcher: FieldMatcher) -> Self {
        self.fields.push((pointer.into(), matcher));
        self
    }

    /// Expected event kind
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        self.kind
    }

    /// Name for messages: the configured name, or the kind
    #[must_use]
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or_else(|| self.kind.as_str())
    }
}

impl EventChecker for FieldChecker {
    fn check_event(&self, event: &Event) -> Result<(), MatchError> {
        if event.kind() != self.kind {
            return Err(MatchError::new(format!(
                "{}: expected {} event, got {}",
                self.label(),
                self.kind,
                event.kind()
            )));
        }

        for (pointer, matcher) in &self.fields {
            match event.field(pointer) {
                None => {
                    return Err(MatchError::new(format!("{}: {pointer} is missing", self.label())));
                },
                Some(value) if !matcher.matches(value) => {
                    return Err(MatchError::new(format!(
                        "{}: {pointer} is {value}, expected {matcher}",
                        self.label()
                    )));
                },
                Some(_) => {},
            }
        }

        Ok(())
    }
}

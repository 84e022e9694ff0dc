//! Event model
//!
//! An [`Event`] is one decoded record emitted by the monitored process. The
//! checkers never look inside it themselves; leaf [`EventChecker`]s do.
//!
//! [`EventChecker`]: crate::core::ports::EventChecker

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kinds of events a sensor exports
///
/// The serialized names are the payload field names used in exported
/// `GetEventsResponse` records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Process started (`execve`)
    ProcessExec,
    /// Process exited
    ProcessExit,
    /// Kernel probe hit
    ProcessKprobe,
    /// Tracepoint hit
    ProcessTracepoint,
    /// User-space probe hit
    ProcessUprobe,
    /// Shared object loaded into a process
    ProcessLoader,
    /// LSM hook hit
    ProcessLsm,
    /// Synthetic event used by sensor self-tests
    Test,
}

impl EventKind {
    /// Every known kind, in declaration order
    pub const ALL: [Self; 8] = [
        Self::ProcessExec,
        Self::ProcessExit,
        Self::ProcessKprobe,
        Self::ProcessTracepoint,
        Self::ProcessUprobe,
        Self::ProcessLoader,
        Self::ProcessLsm,
        Self::Test,
    ];

    /// Payload field name for this kind
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ProcessExec => "process_exec",
            Self::ProcessExit => "process_exit",
            Self::ProcessKprobe => "process_kprobe",
            Self::ProcessTracepoint => "process_tracepoint",
            Self::ProcessUprobe => "process_uprobe",
            Self::ProcessLoader => "process_loader",
            Self::ProcessLsm => "process_lsm",
            Self::Test => "test",
        }
    }

    /// Look up a kind by its payload field name
    #[must_use]
    pub fn from_field(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EventKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_field(&s.to_lowercase()).ok_or_else(|| {
            let known = Self::ALL.map(Self::as_str);
            format!("Invalid event kind: {s}. Use: {}", known.join(", "))
        })
    }
}

/// A decoded event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    kind: EventKind,
    payload: Value,
}

impl Event {
    /// Create an event of `kind` carrying `payload`
    #[must_use]
    pub const fn new(kind: EventKind, payload: Value) -> Self {
        Self { kind, payload }
    }

    /// Kind of this event
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        self.kind
    }

    /// Raw payload
    #[must_use]
    pub const fn payload(&self) -> &Value {
        &self.payload
    }

    /// Resolve a JSON pointer (`/process/binary`) against the payload
    #[must_use]
    pub fn field(&self, pointer: &str) -> Option<&Value> {
        self.payload.pointer(pointer)
    }
}

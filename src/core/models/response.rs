//! Streamed response model and the response-to-event adapter
//!
//! A [`GetEventsResponse`] is one record of the sensor's event stream, as
//! exported in JSON form:
//!
//! ```json
//! {"process_exec": {"process": {"binary": "/usr/bin/curl"}}, "node_name": "kind-control-plane", "time": "2024-05-01T10:00:00Z"}
//! ```
//!
//! Exactly one field carries the payload. Event payloads are converted to an
//! [`Event`]; control frames such as `rate_limit_info` are not events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{ConversionError, Event, EventKind};

/// One record from the event stream
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetEventsResponse {
    /// Node that produced the record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_name: Option<String>,

    /// When the record was produced
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,

    /// Payload field(s), keyed by payload type
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl GetEventsResponse {
    /// Create a response carrying an event of `kind`
    #[must_use]
    pub fn event(kind: EventKind, body: Value) -> Self {
        Self::with_field(kind.as_str(), body)
    }

    /// Create a response carrying an arbitrary payload field
    #[must_use]
    pub fn with_field(name: &str, body: Value) -> Self {
        let mut payload = Map::new();
        payload.insert(name.to_string(), body);
        Self {
            node_name: None,
            time: None,
            payload,
        }
    }

    /// Set the node name
    #[must_use]
    pub fn on_node(mut self, node_name: impl Into<String>) -> Self {
        self.node_name = Some(node_name.into());
        self
    }
}

impl TryFrom<&GetEventsResponse> for Event {
    type Error = ConversionError;

    fn try_from(response: &GetEventsResponse) -> Result<Self, Self::Error> {
        for (name, body) in &response.payload {
            if let Some(kind) = EventKind::from_field(name) {
                return Ok(Self::new(kind, body.clone()));
            }
        }

        response
            .payload
            .keys()
            .next()
            .map_or(Err(ConversionError::Empty), |name| {
                Err(ConversionError::UnknownEvent(name.clone()))
            })
    }
}

/// Convert a streamed response into an [`Event`]
///
/// This is the single conversion point used by every
/// [`MultiEventChecker`](crate::core::services::MultiEventChecker).
pub fn event_from_response(response: &GetEventsResponse) -> Result<Event, ConversionError> {
    Event::try_from(response)
}

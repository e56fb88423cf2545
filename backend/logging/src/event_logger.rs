//! Interaction Event Logger
//!
//! One structured event per handled interaction request, emitted under the
//! `interaction_events` target so it can be filtered or routed separately.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::redact::redact_sensitive_data;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InteractionEvent {
    /// Wire `type` of the interaction, when the body got far enough to be decoded.
    pub kind: Option<u64>,
    /// What happened: `pong`, `reply`, `reply_ephemeral`, `unrecognized`,
    /// `malformed`, or `unauthorized`.
    pub outcome: &'static str,
    /// HTTP status returned.
    pub status: u16,
    /// Failure reason for operators. Never sent to the client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl InteractionEvent {
    pub fn new(kind: Option<u64>, outcome: &'static str, status: u16) -> Self {
        Self { kind, outcome, status, detail: None }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

#[derive(Debug, Serialize)]
pub struct EventLogEntry {
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub event: InteractionEvent,
}

pub struct InteractionEventLogger;

impl InteractionEventLogger {
    /// Serialize the event to the tracing system, scrubbing the detail first.
    pub fn log(mut event: InteractionEvent) -> EventLogEntry {
        if let Some(detail) = event.detail.as_mut() {
            *detail = redact_sensitive_data(detail);
        }

        let entry = EventLogEntry {
            timestamp: Utc::now(),
            event,
        };

        let json = serde_json::to_string(&entry).unwrap_or_default();
        info!(
            target: "interaction_events",
            kind = ?entry.event.kind,
            outcome = entry.event.outcome,
            status = entry.event.status,
            entry = %json,
            "Interaction handled"
        );
        entry
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::agent::AgentId;

/// A single incoming job request.
///
/// Created per user message by the chat front-end; the engine never persists
/// it. Session history is always passed explicitly to the calls that consume
/// it, so requests stay small and the engine stays reentrant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRequest {
    /// Free-text intent as typed by the user.
    pub intent: String,

    /// Keywords extracted from the intent by the front-end.
    pub keywords: Vec<String>,

    /// Brand this request is scoped to.
    pub brand_id: String,
}

impl JobRequest {
    /// Create a new job request.
    pub fn new(
        intent: impl Into<String>,
        keywords: Vec<String>,
        brand_id: impl Into<String>,
    ) -> Self {
        Self {
            intent: intent.into(),
            keywords,
            brand_id: brand_id.into(),
        }
    }
}

/// One prior agent output in a session's history.
///
/// Immutable once created; appended only. The intent echo is the request text
/// that produced the output, compared against later requests by the duplicate
/// detector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorOutputRecord {
    /// The agent that produced the output.
    pub agent: AgentId,

    /// Intent echo of the producing request.
    pub intent: String,

    /// Opaque output payload as returned by the completion service.
    pub payload: Value,

    /// When the output was recorded.
    pub recorded_at: DateTime<Utc>,
}

impl PriorOutputRecord {
    /// Record an output produced now.
    pub fn new(agent: AgentId, intent: impl Into<String>, payload: Value) -> Self {
        Self {
            agent,
            intent: intent.into(),
            payload,
            recorded_at: Utc::now(),
        }
    }

    /// The `result` text of the payload, when present.
    pub fn result_text(&self) -> Option<&str> {
        self.payload.get("result").and_then(Value::as_str)
    }

    /// The `goal` text of the payload, when present.
    pub fn goal_text(&self) -> Option<&str> {
        self.payload.get("goal").and_then(Value::as_str)
    }
}

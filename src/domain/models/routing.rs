use std::fmt;

use serde::{Deserialize, Serialize};

use super::agent::AgentId;

/// Downstream directive attached to a routing decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationRule {
    /// Run the five-rule quality gate over the agent's output.
    QualityGate,
    /// No bucket matched; the front-end should ask the user to clarify.
    AskForClarification,
}

impl fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QualityGate => write!(f, "quality_gate"),
            Self::AskForClarification => write!(f, "ask_for_clarification"),
        }
    }
}

/// Anti-overlap structure derived from the winning classification bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlapGuard {
    /// Whether the caller should run duplicate detection before dispatch.
    pub needs_dedup: bool,
    /// Agents that must not also run on this request.
    pub skip_agents: Vec<AgentId>,
}

impl OverlapGuard {
    /// Guard derived from a skip list; dedup is needed whenever the list is
    /// non-empty.
    pub fn from_skip_agents(skip_agents: Vec<AgentId>) -> Self {
        Self {
            needs_dedup: !skip_agents.is_empty(),
            skip_agents,
        }
    }
}

/// The intent router's answer for one request.
///
/// `secondary` never contains `primary` and holds no duplicate entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingDecision {
    /// Agent that should handle the request.
    pub primary: AgentId,

    /// Ranked supporting agents, disjoint from `primary`.
    pub secondary: Vec<AgentId>,

    /// Routing confidence in `[0.0, 1.0]`.
    pub confidence: f64,

    /// Human-readable justification.
    pub rationale: String,

    /// Directives to apply downstream.
    pub validation_rules: Vec<ValidationRule>,

    /// Anti-overlap skip list.
    pub overlap: OverlapGuard,
}

impl RoutingDecision {
    /// Whether this is the zero-confidence escalation sentinel.
    pub fn is_escalation(&self) -> bool {
        self.primary == AgentId::Escalation && self.confidence == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_rule_slugs() {
        assert_eq!(ValidationRule::QualityGate.to_string(), "quality_gate");
        assert_eq!(
            ValidationRule::AskForClarification.to_string(),
            "ask_for_clarification"
        );
    }

    #[test]
    fn test_overlap_guard_from_skip_agents() {
        let empty = OverlapGuard::from_skip_agents(vec![]);
        assert!(!empty.needs_dedup);

        let guarded = OverlapGuard::from_skip_agents(vec![AgentId::Copywriter]);
        assert!(guarded.needs_dedup);
        assert_eq!(guarded.skip_agents, vec![AgentId::Copywriter]);
    }
}

//! Duplicate-work detection over a session's prior outputs.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::models::{AgentId, JobRequest, PriorOutputRecord};

/// Whether a request repeats work already done this session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuplicateCheck {
    /// True when at least one prior output answers the same intent.
    pub is_duplicate: bool,
    /// Agents whose prior output matched, deduplicated.
    pub duplicate_agents: Vec<AgentId>,
}

/// Flags requests whose intent was already answered.
///
/// The trigger is exact intent-string equality against each record's intent
/// echo. Fuzzy matching is deliberately left to the quality gate's
/// anti-copycat rule; this check only catches literal re-asks.
#[derive(Debug, Clone, Copy, Default)]
pub struct DuplicateDetector;

impl DuplicateDetector {
    pub fn new() -> Self {
        Self
    }

    /// Compare `request` against the session history.
    ///
    /// With no prior outputs the request is never a duplicate.
    pub fn detect(
        &self,
        request: &JobRequest,
        prior_outputs: &[PriorOutputRecord],
    ) -> DuplicateCheck {
        let mut duplicate_agents: Vec<AgentId> = Vec::new();
        for record in prior_outputs {
            if record.intent == request.intent && !duplicate_agents.contains(&record.agent) {
                duplicate_agents.push(record.agent);
            }
        }

        if !duplicate_agents.is_empty() {
            debug!(
                intent = %request.intent,
                agents = ?duplicate_agents,
                "request duplicates prior work"
            );
        }

        DuplicateCheck {
            is_duplicate: !duplicate_agents.is_empty(),
            duplicate_agents,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(agent: AgentId, intent: &str) -> PriorOutputRecord {
        PriorOutputRecord::new(agent, intent, json!({"result": "done"}))
    }

    fn request(intent: &str) -> JobRequest {
        JobRequest::new(intent, vec![], "acme")
    }

    #[test]
    fn test_no_history_is_never_duplicate() {
        let check = DuplicateDetector::new().detect(&request("analyze the market"), &[]);
        assert!(!check.is_duplicate);
        assert!(check.duplicate_agents.is_empty());
    }

    #[test]
    fn test_exact_intent_match_is_flagged() {
        let history = vec![record(AgentId::MarketAnalyzer, "analyze the market")];
        let check = DuplicateDetector::new().detect(&request("analyze the market"), &history);

        assert!(check.is_duplicate);
        assert_eq!(check.duplicate_agents, vec![AgentId::MarketAnalyzer]);
    }

    #[test]
    fn test_near_identical_intent_is_not_flagged() {
        // Exact string equality is the trigger here; fuzzy matching is
        // reserved for the anti-copycat gate.
        let history = vec![record(AgentId::MarketAnalyzer, "analyze the market")];
        let check = DuplicateDetector::new().detect(&request("analyze the markets"), &history);

        assert!(!check.is_duplicate);
    }

    #[test]
    fn test_matching_agents_are_deduplicated() {
        let history = vec![
            record(AgentId::Copywriter, "write a tagline"),
            record(AgentId::Copywriter, "write a tagline"),
            record(AgentId::PositioningStrategist, "write a tagline"),
        ];
        let check = DuplicateDetector::new().detect(&request("write a tagline"), &history);

        assert!(check.is_duplicate);
        assert_eq!(
            check.duplicate_agents,
            vec![AgentId::Copywriter, AgentId::PositioningStrategist]
        );
    }
}

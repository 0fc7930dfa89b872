//! Intent router: job classification by keyword bucket scoring.
//!
//! Deterministic by construction: the bucket table is fixed, scoring is pure,
//! and ties resolve to the first-declared bucket.

use std::cmp::Ordering;

use tracing::debug;

use crate::domain::models::{
    AgentId, JobRequest, OverlapGuard, RoutingDecision, ValidationRule,
};

/// One job-classification bucket. The first agent listed is the primary when
/// the bucket wins; the rest surface as secondaries when the bucket ranks
/// second or third.
struct JobBucket {
    job_type: &'static str,
    agents: &'static [AgentId],
    keywords: &'static [&'static str],
    avoid_overlap: &'static [AgentId],
}

const BUCKETS: [JobBucket; 7] = [
    JobBucket {
        job_type: "market-research",
        agents: &[AgentId::MarketAnalyzer],
        keywords: &[
            "market",
            "competitor",
            "swot",
            "research",
            "industry",
            "trend",
            "landscape",
        ],
        avoid_overlap: &[AgentId::AnalyticsAdvisor],
    },
    JobBucket {
        job_type: "positioning",
        agents: &[AgentId::PositioningStrategist],
        keywords: &[
            "positioning",
            "usp",
            "value proposition",
            "differentiation",
            "niche",
            "messaging",
            "audience",
        ],
        avoid_overlap: &[AgentId::Copywriter],
    },
    JobBucket {
        job_type: "visual-identity",
        agents: &[AgentId::BrandDesigner],
        keywords: &[
            "logo",
            "visual",
            "color",
            "palette",
            "typography",
            "moodboard",
            "identity",
        ],
        avoid_overlap: &[],
    },
    JobBucket {
        job_type: "copywriting",
        agents: &[AgentId::Copywriter],
        keywords: &[
            "copy",
            "headline",
            "tagline",
            "slogan",
            "caption",
            "blog",
            "email",
            "post",
        ],
        avoid_overlap: &[AgentId::PositioningStrategist],
    },
    JobBucket {
        job_type: "campaign-planning",
        agents: &[AgentId::CampaignPlanner, AgentId::Copywriter],
        keywords: &[
            "campaign",
            "launch",
            "plan",
            "calendar",
            "budget",
            "channel",
            "promotion",
        ],
        avoid_overlap: &[AgentId::AutomationArchitect],
    },
    JobBucket {
        job_type: "automation",
        agents: &[AgentId::AutomationArchitect],
        keywords: &[
            "automation",
            "webhook",
            "workflow",
            "integration",
            "trigger",
            "schedule",
            "sync",
        ],
        avoid_overlap: &[],
    },
    JobBucket {
        job_type: "analytics",
        agents: &[AgentId::AnalyticsAdvisor],
        keywords: &[
            "analytics",
            "metrics",
            "kpi",
            "report",
            "performance",
            "conversion",
            "roi",
        ],
        avoid_overlap: &[AgentId::MarketAnalyzer],
    },
];

/// Two-way case-insensitive substring containment.
///
/// A request keyword matches a bucket keyword when either contains the other.
/// Short keywords can therefore match unrelated words ("ai" is contained in
/// "email" and "campaign"); that looseness is intentional and pinned by the
/// router tests.
fn keyword_match(request_keyword: &str, bucket_keyword: &str) -> bool {
    let request = request_keyword.to_lowercase();
    let bucket = bucket_keyword.to_lowercase();
    request.contains(&bucket) || bucket.contains(&request)
}

/// Routes job requests to agents.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntentRouter;

impl IntentRouter {
    pub fn new() -> Self {
        Self
    }

    /// Score the request against every bucket and pick primary and secondary
    /// agents.
    ///
    /// Score per bucket is the fraction of bucket keywords matched by at
    /// least one request keyword. Buckets scoring zero are dropped. If none
    /// remain, the escalation sentinel is returned with zero confidence.
    pub fn route(&self, request: &JobRequest) -> RoutingDecision {
        let mut ranked: Vec<(f64, &JobBucket)> = BUCKETS
            .iter()
            .filter_map(|bucket| {
                let matched = bucket
                    .keywords
                    .iter()
                    .filter(|bucket_keyword| {
                        request
                            .keywords
                            .iter()
                            .any(|request_keyword| keyword_match(request_keyword, bucket_keyword))
                    })
                    .count();
                if matched == 0 {
                    return None;
                }
                let score = matched as f64 / bucket.keywords.len() as f64;
                debug!(job_type = bucket.job_type, matched, score, "bucket scored");
                Some((score, bucket))
            })
            .collect();

        // Stable sort: equal scores keep bucket declaration order.
        ranked.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

        let Some(&(top_score, top_bucket)) = ranked.first() else {
            debug!(intent = %request.intent, "no bucket matched, escalating");
            return RoutingDecision {
                primary: AgentId::Escalation,
                secondary: Vec::new(),
                confidence: 0.0,
                rationale: "no job classification matched the request keywords".to_string(),
                validation_rules: vec![ValidationRule::AskForClarification],
                overlap: OverlapGuard::from_skip_agents(Vec::new()),
            };
        };

        let primary = top_bucket.agents[0];

        let mut secondary: Vec<AgentId> = Vec::new();
        for &(_, bucket) in ranked.iter().skip(1).take(2) {
            for &agent in bucket.agents {
                if agent != primary && !secondary.contains(&agent) {
                    secondary.push(agent);
                }
            }
        }

        RoutingDecision {
            primary,
            secondary,
            confidence: top_score.min(1.0),
            rationale: format!(
                "matched job type '{}' with {:.0}% keyword coverage",
                top_bucket.job_type,
                top_score * 100.0
            ),
            validation_rules: vec![ValidationRule::QualityGate],
            overlap: OverlapGuard::from_skip_agents(top_bucket.avoid_overlap.to_vec()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(keywords: &[&str]) -> JobRequest {
        JobRequest::new(
            keywords.join(" "),
            keywords.iter().map(|k| (*k).to_string()).collect(),
            "acme",
        )
    }

    #[test]
    fn test_market_keywords_route_to_market_analyzer() {
        let router = IntentRouter::new();
        let decision = router.route(&request(&["market", "competitor", "swot"]));

        assert_eq!(decision.primary, AgentId::MarketAnalyzer);
        assert!(decision.confidence > 0.0);
        assert_eq!(decision.validation_rules, vec![ValidationRule::QualityGate]);
        assert_eq!(decision.overlap.skip_agents, vec![AgentId::AnalyticsAdvisor]);
        assert!(decision.overlap.needs_dedup);
    }

    #[test]
    fn test_unknown_keywords_escalate() {
        let router = IntentRouter::new();
        let decision = router.route(&request(&["xyz", "unknown"]));

        assert!(decision.is_escalation());
        assert_eq!(decision.primary, AgentId::Escalation);
        assert_eq!(decision.confidence, 0.0);
        assert_eq!(
            decision.validation_rules,
            vec![ValidationRule::AskForClarification]
        );
        assert!(decision.secondary.is_empty());
        assert!(decision.overlap.skip_agents.is_empty());
        assert!(!decision.overlap.needs_dedup);
    }

    #[test]
    fn test_empty_keywords_escalate() {
        let router = IntentRouter::new();
        assert!(router.route(&request(&[])).is_escalation());
    }

    #[test]
    fn test_primary_never_in_secondary() {
        let router = IntentRouter::new();
        let decision = router.route(&request(&[
            "campaign", "launch", "copy", "headline", "email", "plan",
        ]));

        assert!(!decision.secondary.contains(&decision.primary));
    }

    #[test]
    fn test_secondary_has_no_duplicates() {
        let router = IntentRouter::new();
        let decision = router.route(&request(&[
            "campaign", "copy", "tagline", "positioning", "usp", "audience",
        ]));

        let mut seen = decision.secondary.clone();
        seen.sort_by_key(|a| a.as_str());
        seen.dedup();
        assert_eq!(seen.len(), decision.secondary.len());
    }

    #[test]
    fn test_secondary_comes_from_second_and_third_buckets() {
        let router = IntentRouter::new();
        // Five copywriting keywords, two campaign keywords, one analytics
        // keyword: copywriting wins, campaign-planning and analytics follow.
        let decision = router.route(&request(&[
            "copy", "headline", "tagline", "caption", "blog", "campaign", "budget", "roi",
        ]));

        assert_eq!(decision.primary, AgentId::Copywriter);
        assert_eq!(
            decision.secondary,
            vec![AgentId::CampaignPlanner, AgentId::AnalyticsAdvisor]
        );
    }

    #[test]
    fn test_tie_resolves_to_first_declared_bucket() {
        let router = IntentRouter::new();
        // "swot" and "roi" each match exactly one keyword in buckets of equal
        // size; market-research is declared first and wins the tie.
        let decision = router.route(&request(&["swot", "roi"]));

        assert_eq!(decision.primary, AgentId::MarketAnalyzer);
        assert_eq!(decision.secondary, vec![AgentId::AnalyticsAdvisor]);
    }

    #[test]
    fn route_short_keyword_two_way_containment() {
        let router = IntentRouter::new();
        // "ai" is a substring of "email" and "campaign", so this request
        // matches buckets it has nothing to do with. Documented behavior of
        // the two-way containment heuristic, kept as-is.
        let decision = router.route(&request(&["ai"]));

        assert!(!decision.is_escalation());
        assert!(decision.confidence > 0.0);
    }

    #[test]
    fn test_confidence_capped_at_one() {
        let router = IntentRouter::new();
        let decision = router.route(&request(&[
            "market", "competitor", "swot", "research", "industry", "trend", "landscape",
        ]));

        assert!(decision.confidence <= 1.0);
        assert_eq!(decision.confidence, 1.0);
    }

    #[test]
    fn test_routing_is_deterministic() {
        let router = IntentRouter::new();
        let req = request(&["campaign", "copy", "metrics"]);

        let first = router.route(&req);
        let second = router.route(&req);

        assert_eq!(first.primary, second.primary);
        assert_eq!(first.secondary, second.secondary);
        assert_eq!(first.confidence, second.confidence);
    }
}

//! Quality-gate validator: the five-rule scoring pipeline over a candidate
//! agent output.
//!
//! Rules run in a fixed order, each subtracting its penalty from a score that
//! starts at 100 and is floored at 0. An output passes when the final score
//! reaches the configured threshold. Malformed, null, or empty candidates
//! fail the format rule gracefully; nothing in here panics on bad input.

use std::sync::LazyLock;

use chrono::Utc;
use regex::Regex;
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::models::{
    AgentId, BrandContext, CheckKind, CheckOutcome, PriorOutputRecord, QualityGateConfig,
    ValidationIssue, ValidationResult,
};
use crate::services::similarity::SimilarityEngine;

/// Hedging phrases that mark unsupported claims.
const HEDGING_MARKERS: [&str; 8] = [
    "probably",
    "estimated",
    "seems like",
    "might be",
    "i think",
    "roughly",
    "as far as i know",
    "it is likely",
];

/// Pricing vocabulary buckets for the consistency rule.
const PREMIUM_TERMS: [&str; 5] = ["premium", "luxury", "exclusive", "enterprise", "high-end"];
const FREE_TERMS: [&str; 4] = ["free", "freemium", "no-cost", "zero-cost"];

/// Inline citation or URL, e.g. `[source: report]`.
static CITATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\[(?:source|src|ref|citation)\s*:|https?://").expect("citation pattern")
});

/// Fields every structured output must carry.
const REQUIRED_FIELDS: [&str; 3] = ["task", "result", "reasoning"];

/// Output structures each agent must produce, keyed by identity.
fn required_agent_fields(agent: AgentId) -> &'static [&'static str] {
    match agent {
        AgentId::MarketAnalyzer => &["swot", "competitors"],
        AgentId::PositioningStrategist => &["usp", "pillars"],
        AgentId::BrandDesigner => &["palette", "moodboard"],
        AgentId::Copywriter => &["variants"],
        AgentId::CampaignPlanner => &["timeline", "channels"],
        AgentId::AutomationArchitect => &["triggers", "steps"],
        AgentId::AnalyticsAdvisor => &["kpis"],
        AgentId::Escalation => &[],
    }
}

enum PricingTier {
    Premium,
    Free,
}

fn pricing_tier(text: &str) -> Option<PricingTier> {
    let lower = text.to_lowercase();
    if PREMIUM_TERMS.iter().any(|t| lower.contains(t)) {
        return Some(PricingTier::Premium);
    }
    if FREE_TERMS.iter().any(|t| lower.contains(t)) {
        return Some(PricingTier::Free);
    }
    None
}

/// Case-folded alphanumeric tokens of a text.
fn tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Runs the five-rule pipeline and produces a [`ValidationResult`].
#[derive(Debug, Clone)]
pub struct QualityGate {
    config: QualityGateConfig,
    similarity: SimilarityEngine,
}

impl Default for QualityGate {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl QualityGate {
    pub fn new(config: QualityGateConfig) -> Self {
        Self {
            config,
            similarity: SimilarityEngine::new(),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(QualityGateConfig::default())
    }

    /// Validate a candidate output for `agent`.
    ///
    /// `brand` and `prior_outputs` are consulted by the consistency and
    /// anti-copycat rules; passing an empty history or no brand context
    /// simply lets those rules pass.
    pub fn validate(
        &self,
        agent: AgentId,
        output: &Value,
        brand: Option<&BrandContext>,
        prior_outputs: &[PriorOutputRecord],
    ) -> ValidationResult {
        let mut score: u32 = 100;
        let mut checks: Vec<CheckOutcome> = Vec::with_capacity(CheckKind::ORDERED.len());
        let mut issues: Vec<ValidationIssue> = Vec::new();

        for kind in CheckKind::ORDERED {
            let (outcome, suggestion) = match kind {
                CheckKind::FormatStructure => self.check_format(output),
                CheckKind::FactGrounding => self.check_grounding(output),
                CheckKind::AntiCopycat => self.check_copycat(output, prior_outputs),
                CheckKind::Consistency => self.check_consistency(output, brand, prior_outputs),
                CheckKind::AgentConstraints => self.check_agent_constraints(agent, output),
            };

            if !outcome.passed {
                score = score.saturating_sub(kind.penalty());
                warn!(agent = %agent, rule = %kind, message = %outcome.message, "quality rule failed");
                issues.push(ValidationIssue {
                    category: kind,
                    severity: kind.severity(),
                    message: outcome.message.clone(),
                    suggestion,
                });
            }
            checks.push(outcome);
        }

        let passed = score >= self.config.pass_threshold;
        debug!(agent = %agent, score, passed, "quality gate finished");

        let recommendations = issues.iter().map(|i| i.suggestion.clone()).collect();
        ValidationResult {
            passed,
            score,
            checks,
            issues,
            recommendations,
            evaluated_at: Utc::now(),
        }
    }

    /// The output must be an object carrying task, result, and reasoning,
    /// with a non-empty result.
    fn check_format(&self, output: &Value) -> (CheckOutcome, String) {
        let suggestion =
            "Return a structured record with task, result, and reasoning fields.".to_string();

        let Some(object) = output.as_object() else {
            return (
                CheckOutcome::fail(
                    CheckKind::FormatStructure,
                    "output is not a structured record",
                ),
                suggestion,
            );
        };

        let missing: Vec<&str> = REQUIRED_FIELDS
            .iter()
            .filter(|field| !object.contains_key(**field))
            .copied()
            .collect();
        if !missing.is_empty() {
            return (
                CheckOutcome::fail(
                    CheckKind::FormatStructure,
                    format!("output is missing required fields: {}", missing.join(", ")),
                ),
                suggestion,
            );
        }

        if object.get("result").and_then(Value::as_str) == Some("") {
            return (
                CheckOutcome::fail(CheckKind::FormatStructure, "result field is empty"),
                suggestion,
            );
        }

        (
            CheckOutcome::pass(CheckKind::FormatStructure, "structured record is complete"),
            suggestion,
        )
    }

    /// Claims must not hedge, and the result needs a citation or a sources
    /// field.
    fn check_grounding(&self, output: &Value) -> (CheckOutcome, String) {
        let suggestion =
            "Cite a source for factual claims and drop hedging language.".to_string();

        let serialized = output.to_string().to_lowercase();
        if let Some(marker) = HEDGING_MARKERS.iter().find(|m| serialized.contains(*m)) {
            return (
                CheckOutcome::fail(
                    CheckKind::FactGrounding,
                    format!("output hedges with \"{marker}\""),
                ),
                suggestion,
            );
        }

        let result_text = output.get("result").and_then(Value::as_str).unwrap_or("");
        let has_citation = CITATION_RE.is_match(result_text);
        let has_sources = output.get("sources").is_some();
        if !has_citation && !has_sources {
            return (
                CheckOutcome::fail(
                    CheckKind::FactGrounding,
                    "result carries no citation and no sources field",
                ),
                suggestion,
            );
        }

        (
            CheckOutcome::pass(CheckKind::FactGrounding, "claims are grounded"),
            suggestion,
        )
    }

    /// The result must not mirror a prior output.
    fn check_copycat(
        &self,
        output: &Value,
        prior_outputs: &[PriorOutputRecord],
    ) -> (CheckOutcome, String) {
        let suggestion =
            "Regenerate with a different angle; the result repeats earlier work.".to_string();

        let Some(result_text) = output.get("result").and_then(Value::as_str) else {
            return (
                CheckOutcome::pass(CheckKind::AntiCopycat, "no result text to compare"),
                suggestion,
            );
        };

        for record in prior_outputs {
            let Some(prior_text) = record.result_text() else {
                continue;
            };
            let score = self.similarity.score(result_text, prior_text);
            if score > self.config.copycat_threshold {
                return (
                    CheckOutcome::fail(
                        CheckKind::AntiCopycat,
                        format!(
                            "result is {:.0}% similar to earlier output from {}",
                            score * 100.0,
                            record.agent
                        ),
                    ),
                    suggestion,
                );
            }
        }

        (
            CheckOutcome::pass(CheckKind::AntiCopycat, "result is original"),
            suggestion,
        )
    }

    /// Declared pricing, audience, and goal must not contradict the brand
    /// profile or the most recent prior goal, and forbidden brand words must
    /// not appear.
    fn check_consistency(
        &self,
        output: &Value,
        brand: Option<&BrandContext>,
        prior_outputs: &[PriorOutputRecord],
    ) -> (CheckOutcome, String) {
        let suggestion =
            "Align pricing, audience, and goal statements with the brand profile.".to_string();

        let mut contradictions: Vec<String> = Vec::new();

        if let Some(brand) = brand {
            if let (Some(output_pricing), Some(brand_pricing)) = (
                output.get("pricing").and_then(Value::as_str),
                brand.pricing_model.as_deref(),
            ) {
                match (pricing_tier(output_pricing), pricing_tier(brand_pricing)) {
                    (Some(PricingTier::Premium), Some(PricingTier::Free))
                    | (Some(PricingTier::Free), Some(PricingTier::Premium)) => {
                        contradictions.push(format!(
                            "pricing \"{output_pricing}\" contradicts the declared \"{brand_pricing}\" model"
                        ));
                    }
                    _ => {}
                }
            }

            if let Some(output_audience) = output.get("audience").and_then(Value::as_str) {
                if !brand.target_audience.is_empty() {
                    let declared = tokens(&brand.target_audience);
                    let claimed = tokens(output_audience);
                    if !claimed.is_empty() && !claimed.iter().any(|t| declared.contains(t)) {
                        contradictions.push(format!(
                            "audience \"{output_audience}\" does not overlap the declared audience \"{}\"",
                            brand.target_audience
                        ));
                    }
                }
            }

            let serialized = output.to_string().to_lowercase();
            for word in &brand.forbidden_words {
                if serialized.contains(&word.to_lowercase()) {
                    contradictions.push(format!("output uses forbidden brand word \"{word}\""));
                }
            }
        }

        if let (Some(goal), Some(prior_goal)) = (
            output.get("goal").and_then(Value::as_str),
            prior_outputs.last().and_then(PriorOutputRecord::goal_text),
        ) {
            if goal.to_lowercase() != prior_goal.to_lowercase() {
                contradictions.push(format!(
                    "goal \"{goal}\" contradicts the previous goal \"{prior_goal}\""
                ));
            }
        }

        if contradictions.is_empty() {
            (
                CheckOutcome::pass(CheckKind::Consistency, "output is consistent with the brand"),
                suggestion,
            )
        } else {
            (
                CheckOutcome::fail(CheckKind::Consistency, contradictions.join("; ")),
                suggestion,
            )
        }
    }

    /// Each agent's output must include its expected structures.
    fn check_agent_constraints(&self, agent: AgentId, output: &Value) -> (CheckOutcome, String) {
        let required = required_agent_fields(agent);
        let suggestion = format!(
            "Include the structures expected from {agent}: {}.",
            required.join(", ")
        );

        if required.is_empty() {
            return (
                CheckOutcome::pass(CheckKind::AgentConstraints, "no agent-specific constraints"),
                suggestion,
            );
        }

        let missing: Vec<&str> = match output.as_object() {
            Some(object) => required
                .iter()
                .filter(|field| !object.contains_key(**field))
                .copied()
                .collect(),
            None => required.to_vec(),
        };

        if missing.is_empty() {
            (
                CheckOutcome::pass(
                    CheckKind::AgentConstraints,
                    "agent-specific structures present",
                ),
                suggestion,
            )
        } else {
            (
                CheckOutcome::fail(
                    CheckKind::AgentConstraints,
                    format!("missing expected structures: {}", missing.join(", ")),
                ),
                suggestion,
            )
        }
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::errors::EngineError;

/// Identity of an agent specialization.
///
/// The agent set is fixed at compile time; identity is the primary key used
/// by every other engine component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgentId {
    MarketAnalyzer,
    PositioningStrategist,
    BrandDesigner,
    Copywriter,
    CampaignPlanner,
    AutomationArchitect,
    AnalyticsAdvisor,
    /// Fallback identity for requests no classification bucket matches.
    Escalation,
}

impl AgentId {
    /// Every agent identity, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::MarketAnalyzer,
        Self::PositioningStrategist,
        Self::BrandDesigner,
        Self::Copywriter,
        Self::CampaignPlanner,
        Self::AutomationArchitect,
        Self::AnalyticsAdvisor,
        Self::Escalation,
    ];

    /// The stable slug used in payloads and session records.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MarketAnalyzer => "market-analyzer",
            Self::PositioningStrategist => "positioning-strategist",
            Self::BrandDesigner => "brand-designer",
            Self::Copywriter => "copywriter",
            Self::CampaignPlanner => "campaign-planner",
            Self::AutomationArchitect => "automation-architect",
            Self::AnalyticsAdvisor => "analytics-advisor",
            Self::Escalation => "escalation",
        }
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AgentId {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "market-analyzer" => Ok(Self::MarketAnalyzer),
            "positioning-strategist" => Ok(Self::PositioningStrategist),
            "brand-designer" => Ok(Self::BrandDesigner),
            "copywriter" => Ok(Self::Copywriter),
            "campaign-planner" => Ok(Self::CampaignPlanner),
            "automation-architect" => Ok(Self::AutomationArchitect),
            "analytics-advisor" => Ok(Self::AnalyticsAdvisor),
            "escalation" => Ok(Self::Escalation),
            _ => Err(EngineError::UnknownAgent(s.to_string())),
        }
    }
}

/// High-level grouping of agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cluster {
    Strategy,
    Creative,
    Growth,
    Operations,
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strategy => write!(f, "strategy"),
            Self::Creative => write!(f, "creative"),
            Self::Growth => write!(f, "growth"),
            Self::Operations => write!(f, "operations"),
        }
    }
}

impl FromStr for Cluster {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strategy" => Ok(Self::Strategy),
            "creative" => Ok(Self::Creative),
            "growth" => Ok(Self::Growth),
            "operations" => Ok(Self::Operations),
            _ => Err(EngineError::InvalidCluster(s.to_string())),
        }
    }
}

/// A dependency edge to another agent, with the reason the edge exists.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DependencyEdge {
    /// The agent that must complete first.
    pub agent: AgentId,
    /// Why this prerequisite exists.
    pub reason: &'static str,
}

/// A conflict edge to another agent that must not run on the same request.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ConflictEdge {
    /// The conflicting agent.
    pub agent: AgentId,
    /// Why the two must not run together.
    pub reason: &'static str,
}

/// Immutable profile of a single agent.
///
/// Descriptors are defined once in the capability registry's static table and
/// never mutated at runtime.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AgentDescriptor {
    /// Primary key.
    pub id: AgentId,
    /// Human-facing name.
    pub display_name: &'static str,
    /// Cluster membership.
    pub cluster: Cluster,
    /// Ordered keyword list describing this agent's territory.
    pub keywords: &'static [&'static str],
    /// What the agent is allowed to do.
    pub capabilities: &'static [&'static str],
    /// Tasks the agent must refuse.
    pub forbidden_tasks: &'static [&'static str],
    /// Agents that must complete before this one may run.
    pub depends_on: &'static [DependencyEdge],
    /// Agents that must not run on the same request.
    pub conflicts_with: &'static [ConflictEdge],
    /// Agents that declare a dependency on this one.
    pub required_by: &'static [AgentId],
    /// Workflow phase, 1 through 4.
    pub phase: u8,
    /// Labels of inputs the agent needs.
    pub required_inputs: &'static [&'static str],
    /// Labels of structures the agent's output is expected to carry.
    pub expected_outputs: &'static [&'static str],
    /// What a good result looks like.
    pub success_criteria: &'static [&'static str],
}

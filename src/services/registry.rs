//! Capability registry: the static catalog of agent descriptors.
//!
//! The table is fixed at compile time and read-only at runtime. Lookups never
//! fail with an error; an unknown slug yields an absent result. The only
//! fatal condition in the engine is a corrupted table, caught by
//! [`CapabilityRegistry::verify_integrity`] at process initialization.

use std::str::FromStr;

use tracing::debug;

use crate::domain::errors::{EngineError, EngineResult};
use crate::domain::models::{AgentDescriptor, AgentId, Cluster, ConflictEdge, DependencyEdge};

const DESCRIPTORS: [AgentDescriptor; 8] = [
    AgentDescriptor {
        id: AgentId::MarketAnalyzer,
        display_name: "Market Analyst",
        cluster: Cluster::Strategy,
        keywords: &[
            "market",
            "competitor",
            "swot",
            "research",
            "industry",
            "trend",
            "landscape",
        ],
        capabilities: &[
            "competitor profiling",
            "swot analysis",
            "market sizing",
            "trend scouting",
        ],
        forbidden_tasks: &["final copywriting", "visual design", "automation wiring"],
        depends_on: &[],
        conflicts_with: &[ConflictEdge {
            agent: AgentId::AnalyticsAdvisor,
            reason: "campaign metrics are read after launch, not during landscape research",
        }],
        required_by: &[AgentId::PositioningStrategist],
        phase: 1,
        required_inputs: &["industry", "product description"],
        expected_outputs: &["swot", "competitors", "market_size"],
        success_criteria: &[
            "every competitor claim carries a source",
            "swot covers all four quadrants",
        ],
    },
    AgentDescriptor {
        id: AgentId::PositioningStrategist,
        display_name: "Positioning Strategist",
        cluster: Cluster::Strategy,
        keywords: &[
            "positioning",
            "usp",
            "value proposition",
            "differentiation",
            "niche",
            "messaging",
            "audience",
        ],
        capabilities: &[
            "usp derivation",
            "messaging pillars",
            "audience profiling",
        ],
        forbidden_tasks: &["market research from scratch", "asset production"],
        depends_on: &[DependencyEdge {
            agent: AgentId::MarketAnalyzer,
            reason: "positioning is derived from the competitive landscape",
        }],
        conflicts_with: &[ConflictEdge {
            agent: AgentId::Copywriter,
            reason: "messaging pillars must settle before copy variants are written",
        }],
        required_by: &[AgentId::BrandDesigner, AgentId::Copywriter],
        phase: 2,
        required_inputs: &["swot", "competitors"],
        expected_outputs: &["usp", "pillars", "audience_profile"],
        success_criteria: &["usp is defensible against every profiled competitor"],
    },
    AgentDescriptor {
        id: AgentId::BrandDesigner,
        display_name: "Brand Designer",
        cluster: Cluster::Creative,
        keywords: &[
            "logo",
            "visual",
            "color",
            "palette",
            "typography",
            "moodboard",
            "identity",
        ],
        capabilities: &["palette curation", "moodboard direction", "typography pairing"],
        forbidden_tasks: &["copywriting", "campaign scheduling"],
        depends_on: &[DependencyEdge {
            agent: AgentId::PositioningStrategist,
            reason: "visual identity expresses the agreed positioning",
        }],
        conflicts_with: &[],
        required_by: &[AgentId::CampaignPlanner],
        phase: 3,
        required_inputs: &["usp", "visual mood"],
        expected_outputs: &["palette", "moodboard", "typography"],
        success_criteria: &["palette and mood align with the declared tone of voice"],
    },
    AgentDescriptor {
        id: AgentId::Copywriter,
        display_name: "Copywriter",
        cluster: Cluster::Creative,
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
        capabilities: &["headline variants", "long-form drafts", "caption packs"],
        forbidden_tasks: &["positioning decisions", "kpi definition"],
        depends_on: &[DependencyEdge {
            agent: AgentId::PositioningStrategist,
            reason: "copy variants build on the messaging pillars",
        }],
        conflicts_with: &[ConflictEdge {
            agent: AgentId::PositioningStrategist,
            reason: "messaging pillars must settle before copy variants are written",
        }],
        required_by: &[AgentId::CampaignPlanner],
        phase: 3,
        required_inputs: &["usp", "pillars", "tone of voice"],
        expected_outputs: &["variants", "headline"],
        success_criteria: &["every variant stays inside the brand tone"],
    },
    AgentDescriptor {
        id: AgentId::CampaignPlanner,
        display_name: "Campaign Planner",
        cluster: Cluster::Growth,
        keywords: &[
            "campaign",
            "launch",
            "plan",
            "calendar",
            "budget",
            "channel",
            "promotion",
        ],
        capabilities: &["channel planning", "budget allocation", "launch calendars"],
        forbidden_tasks: &["asset production", "webhook configuration"],
        depends_on: &[
            DependencyEdge {
                agent: AgentId::Copywriter,
                reason: "a campaign schedules approved copy",
            },
            DependencyEdge {
                agent: AgentId::BrandDesigner,
                reason: "creative assets must exist before placements are planned",
            },
        ],
        conflicts_with: &[ConflictEdge {
            agent: AgentId::AutomationArchitect,
            reason: "automation wiring starts after the channel plan is frozen",
        }],
        required_by: &[AgentId::AutomationArchitect, AgentId::AnalyticsAdvisor],
        phase: 4,
        required_inputs: &["variants", "palette", "budget"],
        expected_outputs: &["timeline", "channels", "budget"],
        success_criteria: &["every channel carries a measurable goal"],
    },
    AgentDescriptor {
        id: AgentId::AutomationArchitect,
        display_name: "Automation Architect",
        cluster: Cluster::Operations,
        keywords: &[
            "automation",
            "webhook",
            "workflow",
            "integration",
            "trigger",
            "schedule",
            "sync",
        ],
        capabilities: &["webhook flows", "posting schedules", "tool integration"],
        forbidden_tasks: &["content generation", "budget decisions"],
        depends_on: &[DependencyEdge {
            agent: AgentId::CampaignPlanner,
            reason: "flows automate an agreed channel plan",
        }],
        conflicts_with: &[ConflictEdge {
            agent: AgentId::CampaignPlanner,
            reason: "automation wiring starts after the channel plan is frozen",
        }],
        required_by: &[],
        phase: 4,
        required_inputs: &["timeline", "channels"],
        expected_outputs: &["triggers", "steps"],
        success_criteria: &["every trigger has an owner and a rollback"],
    },
    AgentDescriptor {
        id: AgentId::AnalyticsAdvisor,
        display_name: "Analytics Advisor",
        cluster: Cluster::Growth,
        keywords: &[
            "analytics",
            "metrics",
            "kpi",
            "report",
            "performance",
            "conversion",
            "roi",
        ],
        capabilities: &["kpi trees", "dashboard specs", "performance reviews"],
        forbidden_tasks: &["copy edits", "visual direction"],
        depends_on: &[DependencyEdge {
            agent: AgentId::CampaignPlanner,
            reason: "kpis are defined against the campaign plan",
        }],
        conflicts_with: &[ConflictEdge {
            agent: AgentId::MarketAnalyzer,
            reason: "campaign metrics are read after launch, not during landscape research",
        }],
        required_by: &[],
        phase: 4,
        required_inputs: &["timeline", "channels"],
        expected_outputs: &["kpis", "dashboard"],
        success_criteria: &["every kpi maps to a channel goal"],
    },
    AgentDescriptor {
        id: AgentId::Escalation,
        display_name: "Escalation Desk",
        cluster: Cluster::Operations,
        keywords: &[],
        capabilities: &["clarification requests", "human handoff"],
        forbidden_tasks: &["content generation"],
        depends_on: &[],
        conflicts_with: &[],
        required_by: &[],
        phase: 1,
        required_inputs: &["original request"],
        expected_outputs: &["clarifying_questions"],
        success_criteria: &["user receives a concrete next step"],
    },
];

/// Read-only lookup over the fixed agent catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct CapabilityRegistry;

impl CapabilityRegistry {
    pub fn new() -> Self {
        Self
    }

    /// All descriptors, in declaration order.
    pub fn all(&self) -> &'static [AgentDescriptor] {
        &DESCRIPTORS
    }

    /// Descriptor for `id`.
    pub fn get(&self, id: AgentId) -> Option<&'static AgentDescriptor> {
        DESCRIPTORS.iter().find(|d| d.id == id)
    }

    /// Descriptor for a string slug, absent when the slug is unknown.
    pub fn get_by_slug(&self, slug: &str) -> Option<&'static AgentDescriptor> {
        match AgentId::from_str(slug) {
            Ok(id) => self.get(id),
            Err(_) => {
                debug!(slug, "agent slug not in registry");
                None
            }
        }
    }

    /// Descriptors belonging to `cluster`, in declaration order.
    pub fn by_cluster(&self, cluster: Cluster) -> Vec<&'static AgentDescriptor> {
        DESCRIPTORS.iter().filter(|d| d.cluster == cluster).collect()
    }

    /// Verify the table's structural invariants.
    ///
    /// Checked once at process initialization; a failure here means the build
    /// itself is wrong and the host should abort rather than handle it
    /// per-call. Invariants: every identity has exactly one descriptor, phases
    /// stay in 1..=4, no self edges, dependencies never point at a later
    /// phase, and dependency/required-by and conflict edges are mutually
    /// consistent.
    pub fn verify_integrity(&self) -> EngineResult<()> {
        for id in AgentId::ALL {
            let count = DESCRIPTORS.iter().filter(|d| d.id == id).count();
            if count != 1 {
                return Err(EngineError::CorruptRegistry(format!(
                    "agent {id} has {count} descriptors"
                )));
            }
        }

        for desc in &DESCRIPTORS {
            if !(1..=4).contains(&desc.phase) {
                return Err(EngineError::CorruptRegistry(format!(
                    "agent {} declares phase {}",
                    desc.id, desc.phase
                )));
            }

            for edge in desc.depends_on {
                if edge.agent == desc.id {
                    return Err(EngineError::CorruptRegistry(format!(
                        "agent {} depends on itself",
                        desc.id
                    )));
                }
                let Some(dep) = self.get(edge.agent) else {
                    return Err(EngineError::CorruptRegistry(format!(
                        "agent {} depends on unknown agent {}",
                        desc.id, edge.agent
                    )));
                };
                if dep.phase > desc.phase {
                    return Err(EngineError::CorruptRegistry(format!(
                        "agent {} (phase {}) depends on {} (phase {})",
                        desc.id, desc.phase, dep.id, dep.phase
                    )));
                }
                if !dep.required_by.contains(&desc.id) {
                    return Err(EngineError::CorruptRegistry(format!(
                        "agent {} depends on {} but is not in its required-by list",
                        desc.id, dep.id
                    )));
                }
            }

            for &downstream in desc.required_by {
                let Some(dependent) = self.get(downstream) else {
                    return Err(EngineError::CorruptRegistry(format!(
                        "agent {} is required by unknown agent {downstream}",
                        desc.id
                    )));
                };
                if !dependent.depends_on.iter().any(|e| e.agent == desc.id) {
                    return Err(EngineError::CorruptRegistry(format!(
                        "agent {} lists {} as dependent, but {} declares no such dependency",
                        desc.id, dependent.id, dependent.id
                    )));
                }
            }

            for edge in desc.conflicts_with {
                if edge.agent == desc.id {
                    return Err(EngineError::CorruptRegistry(format!(
                        "agent {} conflicts with itself",
                        desc.id
                    )));
                }
                let Some(other) = self.get(edge.agent) else {
                    return Err(EngineError::CorruptRegistry(format!(
                        "agent {} conflicts with unknown agent {}",
                        desc.id, edge.agent
                    )));
                };
                if !other.conflicts_with.iter().any(|e| e.agent == desc.id) {
                    return Err(EngineError::CorruptRegistry(format!(
                        "conflict between {} and {} is not symmetric",
                        desc.id, other.id
                    )));
                }
            }
        }

        Ok(())
    }
}

//! Dependency gating and phase ordering over the capability registry.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::models::AgentId;
use crate::services::registry::CapabilityRegistry;

/// Whether an agent's prerequisites are satisfied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DependencyReadiness {
    /// True when every declared dependency has completed.
    pub is_ready: bool,
    /// Dependency slugs still outstanding. For an unknown agent this contains
    /// the queried identity itself.
    pub missing_dependencies: Vec<String>,
}

/// Validates prerequisite completion and derives the phase ordering.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkflowValidator {
    registry: CapabilityRegistry,
}

impl WorkflowValidator {
    pub fn new(registry: CapabilityRegistry) -> Self {
        Self { registry }
    }

    /// Check whether `agent_id` may run given the set of completed agents.
    ///
    /// An identity absent from the registry yields `is_ready = false` with
    /// the identity echoed back as its own missing dependency; unknown agents
    /// are a sentinel result, never an error.
    pub fn validate_dependencies(
        &self,
        agent_id: &str,
        completed: &[AgentId],
    ) -> DependencyReadiness {
        let Some(desc) = self.registry.get_by_slug(agent_id) else {
            return DependencyReadiness {
                is_ready: false,
                missing_dependencies: vec![agent_id.to_string()],
            };
        };

        let missing_dependencies: Vec<String> = desc
            .depends_on
            .iter()
            .filter(|edge| !completed.contains(&edge.agent))
            .map(|edge| edge.agent.to_string())
            .collect();

        if !missing_dependencies.is_empty() {
            debug!(
                agent = %desc.id,
                missing = ?missing_dependencies,
                "agent not ready"
            );
        }

        DependencyReadiness {
            is_ready: missing_dependencies.is_empty(),
            missing_dependencies,
        }
    }

    /// Group every registry agent into its execution phase.
    ///
    /// Returns four lists, one per phase. The lists are pairwise disjoint and
    /// their union is the full agent set.
    pub fn workflow_order(&self) -> [Vec<AgentId>; 4] {
        let mut phases: [Vec<AgentId>; 4] = Default::default();
        for desc in self.registry.all() {
            let slot = usize::from(desc.phase.clamp(1, 4)) - 1;
            phases[slot].push(desc.id);
        }
        phases
    }
}

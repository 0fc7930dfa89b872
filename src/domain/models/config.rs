use serde::{Deserialize, Serialize};

/// Tunables for the quality-gate validator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityGateConfig {
    /// Minimum score for an output to pass.
    pub pass_threshold: u32,
    /// Similarity above which a result counts as copying a prior output.
    pub copycat_threshold: f64,
}

impl Default for QualityGateConfig {
    fn default() -> Self {
        Self {
            pass_threshold: 70,
            copycat_threshold: 0.8,
        }
    }
}

/// Engine-wide configuration.
///
/// Constructed in code by the host; the engine reads no files or environment
/// variables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Quality-gate tunables.
    pub quality_gate: QualityGateConfig,
}

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity of a failed check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

/// The five quality-gate rules, in execution order.
///
/// Each rule carries its own penalty and severity as data, so the scoring
/// table lives in exactly one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    FormatStructure,
    FactGrounding,
    AntiCopycat,
    Consistency,
    AgentConstraints,
}

impl CheckKind {
    /// Execution order of the pipeline.
    pub const ORDERED: [Self; 5] = [
        Self::FormatStructure,
        Self::FactGrounding,
        Self::AntiCopycat,
        Self::Consistency,
        Self::AgentConstraints,
    ];

    /// Points subtracted from the running score when the rule fails.
    pub fn penalty(self) -> u32 {
        match self {
            Self::FormatStructure => 30,
            Self::FactGrounding => 20,
            Self::AntiCopycat => 15,
            Self::Consistency => 15,
            Self::AgentConstraints => 20,
        }
    }

    /// Severity attached to a failure of this rule.
    pub fn severity(self) -> Severity {
        match self {
            Self::FormatStructure | Self::FactGrounding => Severity::Critical,
            Self::AntiCopycat | Self::Consistency | Self::AgentConstraints => Severity::Warning,
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FormatStructure => write!(f, "format_structure"),
            Self::FactGrounding => write!(f, "fact_grounding"),
            Self::AntiCopycat => write!(f, "anti_copycat"),
            Self::Consistency => write!(f, "consistency"),
            Self::AgentConstraints => write!(f, "agent_constraints"),
        }
    }
}

/// Outcome of a single rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// Which rule ran.
    pub kind: CheckKind,
    /// Whether it passed.
    pub passed: bool,
    /// Severity, meaningful when the rule failed.
    pub severity: Severity,
    /// What the rule observed.
    pub message: String,
}

impl CheckOutcome {
    /// A passing outcome.
    pub fn pass(kind: CheckKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            passed: true,
            severity: kind.severity(),
            message: message.into(),
        }
    }

    /// A failing outcome.
    pub fn fail(kind: CheckKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            passed: false,
            severity: kind.severity(),
            message: message.into(),
        }
    }
}

/// One structured issue raised by a failing rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Rule the issue came from.
    pub category: CheckKind,
    /// Severity of the issue.
    pub severity: Severity,
    /// What went wrong.
    pub message: String,
    /// How to fix it.
    pub suggestion: String,
}

/// Result of running the full quality gate over one candidate output.
///
/// Derived fresh on every call; never mutated after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the output is acceptable to surface.
    pub passed: bool,

    /// Accumulated score in `0..=100`.
    pub score: u32,

    /// Per-rule outcomes in execution order.
    pub checks: Vec<CheckOutcome>,

    /// One entry per failing rule.
    pub issues: Vec<ValidationIssue>,

    /// Flattened remediation suggestions.
    pub recommendations: Vec<String>,

    /// When the gate ran.
    pub evaluated_at: DateTime<Utc>,
}

impl ValidationResult {
    /// The outcome recorded for `kind`, if that rule ran.
    pub fn check(&self, kind: CheckKind) -> Option<&CheckOutcome> {
        self.checks.iter().find(|c| c.kind == kind)
    }
}

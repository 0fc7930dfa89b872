//! Domain models: plain data consumed and produced by the engine services.

pub mod agent;
pub mod brand;
pub mod config;
pub mod request;
pub mod routing;
pub mod validation;

pub use agent::{AgentDescriptor, AgentId, Cluster, ConflictEdge, DependencyEdge};
pub use brand::{BrandContext, ToneOfVoice};
pub use config::{EngineConfig, QualityGateConfig};
pub use request::{JobRequest, PriorOutputRecord};
pub use routing::{OverlapGuard, RoutingDecision, ValidationRule};
pub use validation::{CheckKind, CheckOutcome, Severity, ValidationIssue, ValidationResult};

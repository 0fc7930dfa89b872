//! Engine services: the routing and validation components.

pub mod duplicate;
pub mod isolation;
pub mod quality_gate;
pub mod registry;
pub mod router;
pub mod similarity;
pub mod workflow;

pub use duplicate::{DuplicateCheck, DuplicateDetector};
pub use isolation::{BlocklistCheck, IsolationCheck, IsolationGuard};
pub use quality_gate::QualityGate;
pub use registry::CapabilityRegistry;
pub use router::IntentRouter;
pub use similarity::SimilarityEngine;
pub use workflow::{DependencyReadiness, WorkflowValidator};

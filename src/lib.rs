//! Brandloom - Routing and Quality-Gate Engine
//!
//! Brandloom decides which marketing agent should handle a job request and
//! whether a generated result is acceptable to surface. It is the core of a
//! multi-agent brand assistant: keyword-scored intent routing, dependency and
//! phase gating across the agent workflow, duplicate-work detection, a
//! five-rule output quality gate, and brand isolation.
//!
//! # Architecture
//!
//! The crate follows a hexagonal split scaled down to a pure library:
//!
//! - **Domain Layer** (`domain`): plain data models and the error taxonomy
//! - **Service Layer** (`services`): the engine components
//!
//! The engine is synchronous and reentrant. It owns no session state: brand
//! context and prior-output history are explicit parameters on every call, so
//! one engine instance serves any number of concurrent brands. Content
//! generation and persistence belong to the caller.
//!
//! # Example
//!
//! ```
//! use brandloom::{CapabilityRegistry, IntentRouter, JobRequest, QualityGate};
//!
//! let registry = CapabilityRegistry::new();
//! registry.verify_integrity().expect("static catalog is well formed");
//!
//! let router = IntentRouter::new();
//! let request = JobRequest::new(
//!     "analyze the market",
//!     vec!["market".into(), "competitor".into()],
//!     "acme",
//! );
//! let decision = router.route(&request);
//! assert!(decision.confidence > 0.0);
//!
//! // ... invoke the completion service for `decision.primary`, then gate
//! // the output through `QualityGate::validate`.
//! let _gate = QualityGate::with_defaults();
//! ```

pub mod domain;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{EngineError, EngineResult};
pub use domain::models::{
    AgentDescriptor, AgentId, BrandContext, CheckKind, CheckOutcome, Cluster, ConflictEdge,
    DependencyEdge, EngineConfig, JobRequest, OverlapGuard, PriorOutputRecord, QualityGateConfig,
    RoutingDecision, Severity, ToneOfVoice, ValidationIssue, ValidationResult, ValidationRule,
};
pub use services::{
    BlocklistCheck, CapabilityRegistry, DependencyReadiness, DuplicateCheck, DuplicateDetector,
    IntentRouter, IsolationCheck, IsolationGuard, QualityGate, SimilarityEngine, WorkflowValidator,
};

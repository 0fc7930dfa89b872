//! Domain errors for the brandloom engine.

use thiserror::Error;

/// Errors that can occur in the brandloom engine.
///
/// Routing misses, quality-gate failures, and isolation violations are not
/// errors; they are surfaced as ordinary result values so callers always get
/// a well-formed answer. The variants here cover identifier parsing and the
/// one genuinely fatal condition: a corrupted capability registry at startup.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Capability registry corrupted: {0}")]
    CorruptRegistry(String),

    #[error("Unknown agent identity: {0}")]
    UnknownAgent(String),

    #[error("Invalid cluster: {0}")]
    InvalidCluster(String),

    #[error("Invalid tone of voice: {0}")]
    InvalidTone(String),
}

/// Convenience alias for engine results.
pub type EngineResult<T> = Result<T, EngineError>;

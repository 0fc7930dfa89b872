//! Pure domain layer: models and error taxonomy.

pub mod errors;
pub mod models;

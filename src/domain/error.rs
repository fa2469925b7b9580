//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Validation errors represent violated entity invariants.
///
/// Only constructors return them: an entity either exists with valid
/// attributes or not at all.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("table dimensions must be greater than zero")]
    TableDimensions { height: f64, length: f64, width: f64 },

    #[error("tree height and age must be greater than zero")]
    TreeMeasurements { height: f64, age: u32 },

    #[error("growth rate must be a finite, non-negative number: {0}")]
    GrowthRate(f64),

    #[error("user age must be at least {min_age}")]
    UserTooYoung { age: i32, min_age: i32 },

    #[error("invalid email format")]
    InvalidEmail { email: String },
}

impl ValidationError {
    /// Human readable message, identical to the `Display` output.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Result type for entity construction.
pub type DomainResult<T> = Result<T, ValidationError>;

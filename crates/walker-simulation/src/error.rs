//! Parameter validation errors

use thiserror::Error;

/// Rejected simulation parameter. The engine state is left untouched.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParamError {
    #[error("walker count must be at least 1, got {0}")]
    InvalidCount(usize),
    #[error("iteration count must be at least 1, got {0}")]
    InvalidIterations(usize),
    #[error("spread must be a positive finite number, got {0}")]
    InvalidSpread(f64),
    #[error("relation average must be finite, got {0}")]
    InvalidRelationAverage(f64),
    #[error("relation variance must be a non-negative finite number, got {0}")]
    InvalidRelationVariance(f64),
}

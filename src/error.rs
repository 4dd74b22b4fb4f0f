use thiserror::Error;
use walker_geometry::GradientError;
use walker_simulation::ParamError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SessionError {
    #[error("invalid simulation parameter: {0}")]
    Param(#[from] ParamError),
    #[error("invalid gradient: {0}")]
    Gradient(#[from] GradientError),
}

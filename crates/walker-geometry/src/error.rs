use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GradientError {
    #[error("color has {found} channels, gradient stops have {expected}")]
    ChannelMismatch { expected: usize, found: usize },
    #[error("stop position {0} is outside [0, 1]")]
    StopOutOfRange(f32),
    #[error("gradient has no color stops")]
    Empty,
}

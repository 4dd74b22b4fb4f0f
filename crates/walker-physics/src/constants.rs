//! Numeric constants shared by the interaction laws

/// Fraction of the relation-weighted net force added to a walker's velocity
/// at each iteration of a velocity-based law.
pub const VELOCITY_DAMPING: f64 = 0.1;

/// Force constant `k` of the Newton-style laws (`F = k / d^degree`).
/// Large because walkers start tens of units apart.
pub const NEWTON_CONSTANT: f64 = 1.0e4;

/// Distance exponent of the linear Newton law (`k / d`)
pub const LINEAR_DEGREE: i32 = 1;

/// Distance exponent of the quadratic Newton law (`k / d²`)
pub const QUADRATIC_DEGREE: i32 = 2;

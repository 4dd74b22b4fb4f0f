//! Pairwise kernels for the interaction laws
//!
//! Positions are `f64` ([`DVec3`]) so that a simulation is reproducible
//! bit for bit and long runs do not drift from rounding alone.

use crate::constants::NEWTON_CONSTANT;
use glam::DVec3;

/// Force exerted on a walker by one of its influencers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForceKernel {
    /// The displacement itself is the force.
    Spring,
    /// Magnitude `k / d^degree` along the displacement, i.e. the
    /// displacement scaled by `k / d^(degree + 1)`.
    Newton { degree: i32 },
}

impl ForceKernel {
    /// Force on a walker at `from` exerted by a walker at `to`.
    ///
    /// Coincident walkers (including a walker paired with itself) contribute
    /// zero force instead of a non-finite value.
    pub fn force(self, from: DVec3, to: DVec3) -> DVec3 {
        let r = to - from;
        match self {
            ForceKernel::Spring => finite_or_zero(r),
            ForceKernel::Newton { degree } => {
                let d = r.length();
                if d == 0.0 {
                    return DVec3::ZERO;
                }
                finite_or_zero(r * (NEWTON_CONSTANT / d.powi(degree + 1)))
            }
        }
    }
}

/// Replaces every non-finite component of `v` by zero.
#[inline]
pub fn finite_or_zero(v: DVec3) -> DVec3 {
    let fix = |c: f64| if c.is_finite() { c } else { 0.0 };
    DVec3::new(fix(v.x), fix(v.y), fix(v.z))
}

/// `Σ_j weights[j] · positions[j]`
pub fn weighted_sum(positions: &[DVec3], weights: impl IntoIterator<Item = f64>) -> DVec3 {
    positions
        .iter()
        .zip(weights)
        .fold(DVec3::ZERO, |acc, (&p, w)| acc + p * w)
}

/// Relation-weighted sum of the forces exerted on walker `i`.
///
/// `weights[j]` is how strongly walker `j` influences walker `i`; the pair
/// `(i, i)` is skipped, as are zero weights.
pub fn net_force(kernel: ForceKernel, positions: &[DVec3], i: usize, weights: &[f64]) -> DVec3 {
    let origin = positions[i];
    positions
        .iter()
        .zip(weights)
        .enumerate()
        .filter(|&(j, (_, &w))| j != i && w != 0.0)
        .fold(DVec3::ZERO, |acc, (_, (&p, &w))| {
            acc + finite_or_zero(kernel.force(origin, p) * w)
        })
}

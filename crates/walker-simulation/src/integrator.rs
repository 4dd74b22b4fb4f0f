//! One integration step per interaction law
//!
//! Every step reads positions from the previous iteration only: all deltas
//! are computed before any walker moves.

use crate::relations::RelationMatrix;
use glam::DVec3;
use walker_physics::{net_force, weighted_sum, Integration, InteractionLaw, VELOCITY_DAMPING};

/// Mutable state carried across iterations
#[derive(Debug, Clone)]
pub struct WalkerState {
    pub positions: Vec<DVec3>,
    /// Only used by velocity-based laws. Zero at start, never reset.
    pub velocities: Vec<DVec3>,
}

impl WalkerState {
    pub fn at_rest(positions: Vec<DVec3>) -> Self {
        let velocities = vec![DVec3::ZERO; positions.len()];
        Self {
            positions,
            velocities,
        }
    }

    /// Advances every walker by one iteration of `law`.
    pub fn step(&mut self, law: InteractionLaw, relations: &RelationMatrix) {
        let n = self.positions.len();
        debug_assert_eq!(relations.len(), n);
        let pos = &self.positions;

        match law.integration() {
            Integration::Position => {
                // Σ_j r[i][j]·p[j] − (Σ_j r[i][j])·p[i]
                let deltas: Vec<DVec3> = (0..n)
                    .map(|i| {
                        weighted_sum(pos, relations.row(i).iter().copied())
                            - pos[i] * relations.row_sum(i)
                    })
                    .collect();
                self.apply(&deltas);
            }
            Integration::Asymmetry => {
                // Σ_j r[i][j]·p[j] − Σ_j r[j][i]·p[j]
                let deltas: Vec<DVec3> = (0..n)
                    .map(|i| {
                        weighted_sum(pos, relations.row(i).iter().copied())
                            - weighted_sum(pos, relations.column(i))
                    })
                    .collect();
                self.apply(&deltas);
            }
            Integration::Force(kernel) => {
                let forces: Vec<DVec3> = (0..n)
                    .map(|i| net_force(kernel, pos, i, relations.row(i)))
                    .collect();
                for (v, f) in self.velocities.iter_mut().zip(forces) {
                    *v += f * VELOCITY_DAMPING;
                }
                let velocities = std::mem::take(&mut self.velocities);
                self.apply(&velocities);
                self.velocities = velocities;
            }
        }
    }

    fn apply(&mut self, deltas: &[DVec3]) {
        for (p, d) in self.positions.iter_mut().zip(deltas) {
            *p += *d;
        }
    }
}

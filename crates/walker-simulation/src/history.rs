//! Recorded walker trajectories

use glam::DVec3;

/// Walker positions at every iteration.
///
/// Stored flat and iteration-major: all walkers of iteration 0, then all
/// walkers of iteration 1, and so on. This is also the vertex order of the
/// line geometry built from it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PositionHistory {
    walkers: usize,
    positions: Vec<DVec3>,
}

impl PositionHistory {
    pub fn with_capacity(walkers: usize, iterations: usize) -> Self {
        Self {
            walkers,
            positions: Vec::with_capacity(walkers * iterations),
        }
    }

    /// Appends one snapshot. Panics if its length is not the walker count.
    pub fn record(&mut self, snapshot: &[DVec3]) {
        assert_eq!(snapshot.len(), self.walkers, "snapshot size mismatch");
        self.positions.extend_from_slice(snapshot);
    }

    /// Number of walkers per snapshot
    pub fn walkers(&self) -> usize {
        self.walkers
    }

    /// Number of recorded snapshots
    pub fn iterations(&self) -> usize {
        if self.walkers == 0 {
            0
        } else {
            self.positions.len() / self.walkers
        }
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn snapshot(&self, iteration: usize) -> &[DVec3] {
        &self.positions[iteration * self.walkers..(iteration + 1) * self.walkers]
    }

    pub fn snapshots(&self) -> impl Iterator<Item = &[DVec3]> {
        self.positions.chunks_exact(self.walkers.max(1))
    }

    /// One walker's position at every iteration
    pub fn trajectory(&self, walker: usize) -> impl Iterator<Item = DVec3> + '_ {
        self.positions
            .iter()
            .skip(walker)
            .step_by(self.walkers.max(1))
            .copied()
    }

    /// Every recorded position, iteration-major
    pub fn as_flat(&self) -> &[DVec3] {
        &self.positions
    }

    /// Smallest box containing every recorded position
    pub fn bounds(&self) -> Option<(DVec3, DVec3)> {
        let first = *self.positions.first()?;
        Some(
            self.positions
                .iter()
                .fold((first, first), |(lo, hi), &p| (lo.min(p), hi.max(p))),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PositionHistory {
        let mut history = PositionHistory::with_capacity(2, 3);
        history.record(&[DVec3::ZERO, DVec3::X]);
        history.record(&[DVec3::Y, DVec3::Z]);
        history.record(&[DVec3::ONE, DVec3::NEG_ONE]);
        history
    }

    #[test]
    fn shape_follows_records() {
        let history = sample();
        assert_eq!(history.walkers(), 2);
        assert_eq!(history.iterations(), 3);
        assert_eq!(history.as_flat().len(), 6);
        assert_eq!(history.snapshot(1), &[DVec3::Y, DVec3::Z]);
        assert_eq!(history.snapshots().count(), 3);
    }

    #[test]
    fn trajectory_strides_over_walkers() {
        let history = sample();
        let path: Vec<DVec3> = history.trajectory(1).collect();
        assert_eq!(path, vec![DVec3::X, DVec3::Z, DVec3::NEG_ONE]);
    }

    #[test]
    fn bounds_cover_all_positions() {
        let (lo, hi) = sample().bounds().unwrap();
        assert_eq!(lo, DVec3::NEG_ONE);
        assert_eq!(hi, DVec3::ONE);
        assert!(PositionHistory::default().bounds().is_none());
    }

    #[test]
    #[should_panic]
    fn record_rejects_wrong_snapshot_size() {
        let mut history = PositionHistory::with_capacity(3, 1);
        history.record(&[DVec3::ZERO]);
    }
}

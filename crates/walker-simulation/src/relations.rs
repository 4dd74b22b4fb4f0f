//! Relation mask and relation matrix
//!
//! Both are square, row-major matrices over walkers. Entry `(i, j)` describes
//! how walker `j` influences walker `i`; the diagonal is always empty.

use crate::seed::spread_sample;
use rand::Rng;
use walker_physics::RelationModel;

/// Share of off-diagonal relations kept by [`RelationModel::Sparse`]
pub const SPARSE_DENSITY: f64 = 0.25;

/// Who influences whom
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RelationMask {
    n: usize,
    cells: Vec<bool>,
}

impl RelationMask {
    /// Builds the mask of `n` walkers for `model`.
    ///
    /// Only [`RelationModel::Sparse`] draws from `rng`: one sample per cell,
    /// diagonal included, in row-major order.
    pub fn generate(model: RelationModel, n: usize, rng: &mut impl Rng) -> Self {
        let cells = match model {
            // Rotated identity: a one-directional cycle i <- i + 1
            RelationModel::OneToOne => (0..n * n).map(|c| (c / n + 1) % n == c % n).collect(),
            RelationModel::Sparse => {
                // The diagonal is cleared below, so the draw probability is
                // raised by 1/n to keep 25% of the off-diagonal cells.
                let p = SPARSE_DENSITY + 1.0 / n as f64;
                (0..n * n).map(|_| rng.random::<f64>() < p).collect()
            }
            RelationModel::ManyToMany => vec![true; n * n],
        };

        let mut mask = Self { n, cells };
        for i in 0..n {
            mask.cells[i * n + i] = false;
        }
        mask
    }

    /// Number of walkers
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> bool {
        self.cells[i * self.n + j]
    }

    pub fn row(&self, i: usize) -> &[bool] {
        &self.cells[i * self.n..(i + 1) * self.n]
    }

    /// Total number of relations
    pub fn relation_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

/// Relation weights: a random matrix restricted to a [`RelationMask`]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RelationMatrix {
    n: usize,
    weights: Vec<f64>,
}

impl RelationMatrix {
    /// Draws one weight per cell in `[avg - variance, avg + variance)`, in
    /// row-major order, then zeroes every cell absent from `mask`.
    pub fn generate(mask: &RelationMask, avg: f64, variance: f64, rng: &mut impl Rng) -> Self {
        let n = mask.len();
        let weights = mask
            .cells
            .iter()
            .map(|&related| {
                let w = spread_sample(rng, avg, variance);
                if related {
                    w
                } else {
                    0.0
                }
            })
            .collect();

        Self { n, weights }
    }

    /// Builds a matrix from explicit rows. Panics if the rows are not square.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Self {
        let n = rows.len();
        let mut weights = Vec::with_capacity(n * n);
        for row in rows {
            let row = row.as_ref();
            assert_eq!(row.len(), n, "relation matrix must be square");
            weights.extend_from_slice(row);
        }
        Self { n, weights }
    }

    /// Number of walkers
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.weights[i * self.n + j]
    }

    /// How strongly every walker influences walker `i`
    pub fn row(&self, i: usize) -> &[f64] {
        &self.weights[i * self.n..(i + 1) * self.n]
    }

    /// How strongly walker `j` influences every walker
    pub fn column(&self, j: usize) -> impl Iterator<Item = f64> + '_ {
        self.weights.iter().skip(j).step_by(self.n.max(1)).copied()
    }

    pub fn row_sum(&self, i: usize) -> f64 {
        self.row(i).iter().sum()
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.n).all(|i| (0..i).all(|j| self.get(i, j) == self.get(j, i)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::stage_rng;

    #[test]
    fn one_to_one_is_rotated_identity() {
        let mask = RelationMask::generate(RelationModel::OneToOne, 4, &mut stage_rng(0));
        for i in 0..4 {
            let related: Vec<usize> = (0..4).filter(|&j| mask.get(i, j)).collect();
            assert_eq!(related, vec![(i + 1) % 4]);
        }
    }

    #[test]
    fn one_to_one_single_walker_has_no_relation() {
        let mask = RelationMask::generate(RelationModel::OneToOne, 1, &mut stage_rng(0));
        assert_eq!(mask.relation_count(), 0);
    }

    #[test]
    fn many_to_many_is_complete_without_diagonal() {
        let mask = RelationMask::generate(RelationModel::ManyToMany, 5, &mut stage_rng(0));
        for i in 0..5 {
            for j in 0..5 {
                assert_eq!(mask.get(i, j), i != j);
            }
        }
        assert_eq!(mask.relation_count(), 20);
    }

    #[test]
    fn sparse_density_is_about_a_quarter() {
        let n = 60;
        let mask = RelationMask::generate(RelationModel::Sparse, n, &mut stage_rng(1234));
        let density = mask.relation_count() as f64 / (n * (n - 1)) as f64;
        assert!((density - SPARSE_DENSITY).abs() < 0.05, "density = {density}");
        assert!((0..n).all(|i| !mask.get(i, i)));
    }

    #[test]
    fn sparse_mask_depends_only_on_seed() {
        let a = RelationMask::generate(RelationModel::Sparse, 12, &mut stage_rng(7));
        let b = RelationMask::generate(RelationModel::Sparse, 12, &mut stage_rng(7));
        assert_eq!(a, b);
    }

    #[test]
    fn matrix_is_zero_outside_mask() {
        let mask = RelationMask::generate(RelationModel::Sparse, 10, &mut stage_rng(2));
        let matrix = RelationMatrix::generate(&mask, -0.3, 0.2, &mut stage_rng(3));
        for i in 0..10 {
            for j in 0..10 {
                if !mask.get(i, j) {
                    assert_eq!(matrix.get(i, j), 0.0);
                } else {
                    let w = matrix.get(i, j);
                    assert!((-0.5..=-0.1).contains(&w), "{w}");
                }
            }
        }
    }

    #[test]
    fn zero_variance_weights_equal_average() {
        let mask = RelationMask::generate(RelationModel::ManyToMany, 4, &mut stage_rng(0));
        let matrix = RelationMatrix::generate(&mask, 0.1, 0.0, &mut stage_rng(9));
        for i in 0..4 {
            for j in 0..4 {
                let expected = if i == j { 0.0 } else { 0.1 };
                assert_eq!(matrix.get(i, j), expected);
            }
        }
        assert!(matrix.is_symmetric());
    }

    #[test]
    fn rows_and_columns_index_the_same_cells() {
        let matrix = RelationMatrix::from_rows(&[[0.0, 1.0, 2.0], [3.0, 0.0, 4.0], [5.0, 6.0, 0.0]]);
        assert_eq!(matrix.row(1), &[3.0, 0.0, 4.0]);
        assert_eq!(matrix.column(1).collect::<Vec<_>>(), vec![1.0, 0.0, 6.0]);
        assert_eq!(matrix.row_sum(2), 11.0);
        assert!(!matrix.is_symmetric());
    }
}

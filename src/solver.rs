use tracing::{debug, trace};

use crate::augment::{augment, Scratch};
use crate::error::Result;
use crate::matrix::{Cost, CostMatrix};
use crate::potentials::Potentials;

/// Direction of optimisation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Objective {
    #[default]
    Minimize,
    Maximize,
}

/// Reusable assignment solver.
///
/// A solver owns the potentials, the matching and the search buffers of the
/// Hungarian method. Every call to [`Solver::solve`] starts from a clean
/// state, so one solver may be reused for any number of matrices of any
/// shape; only the allocations are kept.
///
/// ```
/// use lsap::Solver;
///
/// let mut solver = Solver::new();
/// let pairs = solver.compute(&[[4., 1., 3.], [2., 0., 5.]]).unwrap();
/// assert_eq!(pairs, vec![(0, 1), (1, 0)]);
/// ```
#[derive(Debug, Clone)]
pub struct Solver<T> {
    objective: Objective,
    potentials: Potentials<T>,
    scratch: Scratch<T>,
}

impl<T: Cost> Default for Solver<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Cost> Solver<T> {
    pub fn new() -> Self {
        Self::with_objective(Objective::Minimize)
    }

    pub fn maximizing() -> Self {
        Self::with_objective(Objective::Maximize)
    }

    pub fn with_objective(objective: Objective) -> Self {
        Self {
            objective,
            potentials: Potentials::default(),
            scratch: Scratch::default(),
        }
    }

    /// Solver with buffers pre-sized for matrices up to `size x size`.
    pub fn with_capacity(size: usize) -> Self {
        Self {
            objective: Objective::Minimize,
            potentials: Potentials::with_capacity(size),
            scratch: Scratch::with_capacity(size),
        }
    }

    pub fn objective(&self) -> Objective {
        self.objective
    }

    pub fn set_objective(&mut self, objective: Objective) {
        self.objective = objective;
    }

    /// Potentials left by the last solve, over the padded square matrix.
    pub fn potentials(&self) -> &Potentials<T> {
        &self.potentials
    }

    /// Find an optimal assignment of `min(n, m)` rows to distinct columns.
    ///
    /// Non-square matrices are padded with zero-cost rows or columns; pairs
    /// involving padding are not part of the result.
    pub fn solve(&mut self, costs: &CostMatrix<T>) -> Result<Solution<T>> {
        let (nrows, ncols) = costs.shape();
        let view = costs.padded(self.objective);
        let size = view.size();

        self.potentials.reset(&view);
        self.scratch.reset(size);

        for root in 0..size {
            let step = augment(&view, &mut self.potentials, &mut self.scratch, root)?;
            trace!(
                root,
                column = step.column,
                dual_updates = step.dual_updates,
                path_length = step.path_length,
                "augmented matching"
            );
        }

        let pairs: Vec<_> = self
            .scratch
            .matching()
            .filter(|&(row, col)| view.is_real(row, col))
            .collect();
        let cost = costs.cost_of(&pairs);
        let dual_objective = self.potentials.objective();
        debug!(
            nrows,
            ncols,
            size,
            objective = ?self.objective,
            cost = ?cost,
            "solved assignment"
        );

        Ok(Solution {
            pairs,
            cost,
            dual_objective,
            objective: self.objective,
            nrows,
            ncols,
        })
    }

    /// Validate `rows` as a cost matrix and return the optimal pairs in row
    /// order.
    pub fn compute<R: AsRef<[T]>>(&mut self, rows: &[R]) -> Result<Vec<(usize, usize)>> {
        let costs = CostMatrix::from_rows(rows)?;
        self.compute_matrix(&costs)
    }

    pub fn compute_matrix(&mut self, costs: &CostMatrix<T>) -> Result<Vec<(usize, usize)>> {
        self.solve(costs).map(Solution::into_pairs)
    }
}

/// Solve `costs` with a fresh minimising solver.
pub fn solve<T: Cost>(costs: &CostMatrix<T>) -> Result<Solution<T>> {
    Solver::new().solve(costs)
}

/// Minimum-cost pairs for `rows`, see [`Solver::compute`].
pub fn compute<T: Cost, R: AsRef<[T]>>(rows: &[R]) -> Result<Vec<(usize, usize)>> {
    Solver::new().compute(rows)
}

/// An optimal assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<T> {
    pairs: Vec<(usize, usize)>,
    cost: T,
    dual_objective: T,
    objective: Objective,
    nrows: usize,
    ncols: usize,
}

impl<T: Cost> Solution<T> {
    /// `(row, column)` pairs sorted by row.
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    pub fn into_pairs(self) -> Vec<(usize, usize)> {
        self.pairs
    }

    /// Sum of the selected entries of the input matrix.
    pub fn cost(&self) -> T {
        self.cost
    }

    /// `sum(u) + sum(v)` of the final potentials.
    ///
    /// Potentials are computed on the minimised problem, so this equals
    /// `cost()` when minimising and `-cost()` when maximising.
    pub fn dual_objective(&self) -> T {
        self.dual_objective
    }

    pub fn objective(&self) -> Objective {
        self.objective
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn column_for_row(&self, row: usize) -> Option<usize> {
        self.pairs
            .binary_search_by_key(&row, |&(r, _)| r)
            .ok()
            .map(|i| self.pairs[i].1)
    }

    pub fn row_for_column(&self, col: usize) -> Option<usize> {
        self.pairs.iter().find(|&&(_, c)| c == col).map(|&(r, _)| r)
    }

    /// Rows left without a column, only possible when `n > m`.
    pub fn unassigned_rows(&self) -> Vec<usize> {
        (0..self.nrows)
            .filter(|&row| self.column_for_row(row).is_none())
            .collect()
    }

    /// Columns left without a row, only possible when `n < m`.
    pub fn unassigned_columns(&self) -> Vec<usize> {
        let mut assigned = vec![false; self.ncols];
        for &(_, col) in &self.pairs {
            assigned[col] = true;
        }
        (0..self.ncols).filter(|&col| !assigned[col]).collect()
    }
}

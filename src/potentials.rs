use crate::matrix::{Cost, PaddedView};

/// Dual variables of the assignment LP: `u` per row, `v` per column.
///
/// Dual feasibility means `cost(i, j) - u[i] - v[j] >= 0` for every pair.
#[derive(Debug, Clone)]
pub struct Potentials<T> {
    u: Vec<T>,
    v: Vec<T>,
}

impl<T> Default for Potentials<T> {
    fn default() -> Self {
        Self {
            u: Vec::new(),
            v: Vec::new(),
        }
    }
}

impl<T: Cost> Potentials<T> {
    pub fn with_capacity(size: usize) -> Self {
        Self {
            u: Vec::with_capacity(size),
            v: Vec::with_capacity(size),
        }
    }

    /// Start from the column reduction `u = 0`, `v[j] = min_i cost(i, j)`,
    /// discarding anything left by a previous solve.
    pub fn reset(&mut self, costs: &PaddedView<'_, T>) {
        let size = costs.size();
        self.u.clear();
        self.u.resize(size, T::zero());
        self.v.clear();
        self.v.extend((0..size).map(|col| costs.column_minimum(col)));
    }

    #[inline]
    pub fn reduced_cost(&self, costs: &PaddedView<'_, T>, row: usize, col: usize) -> T {
        costs.get(row, col) - self.u[row] - self.v[col]
    }

    /// Raise the potential of every row in `rows` by `delta` and lower the
    /// potential of every column in `columns` by the same amount.
    pub fn shift<R, C>(&mut self, rows: R, columns: C, delta: T)
    where
        R: IntoIterator<Item = usize>,
        C: IntoIterator<Item = usize>,
    {
        for row in rows {
            self.u[row] = self.u[row] + delta;
        }
        for col in columns {
            self.v[col] = self.v[col] - delta;
        }
    }

    /// Dual objective `sum(u) + sum(v)`, a lower bound on the cost of any
    /// complete assignment.
    pub fn objective(&self) -> T {
        self.u
            .iter()
            .chain(self.v.iter())
            .fold(T::zero(), |total, &p| total + p)
    }

    pub fn rows(&self) -> &[T] {
        &self.u
    }

    pub fn columns(&self) -> &[T] {
        &self.v
    }
}

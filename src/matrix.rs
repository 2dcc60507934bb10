use nalgebra::{DMatrix, Dim, Matrix, RawStorage};

use crate::error::{InvalidInput, Result};
use crate::solver::Objective;

/// Numeric type usable as an assignment cost.
pub trait Cost: num_traits::Float + nalgebra::Scalar {}

impl<T> Cost for T where T: num_traits::Float + nalgebra::Scalar {}

/// A validated, dense `n x m` cost matrix.
///
/// Every entry is finite and both dimensions are non-zero. Pairs that must
/// never be chosen should carry a large finite cost, well below
/// `T::max_value()` so that potentials cannot overflow.
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix<T: Cost> {
    costs: DMatrix<T>,
}

impl<T: Cost> CostMatrix<T> {
    /// Build a matrix from a slice of equally long rows.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let first = rows.first().ok_or(InvalidInput::NoRows)?;
        let ncols = first.as_ref().len();
        if ncols == 0 {
            return Err(InvalidInput::NoColumns.into());
        }

        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != ncols {
                return Err(InvalidInput::Ragged {
                    row,
                    len: r.len(),
                    expected: ncols,
                }
                .into());
            }
            if let Some(col) = r.iter().position(|c| !c.is_finite()) {
                return Err(InvalidInput::NonFinite { row, col }.into());
            }
        }

        let costs = DMatrix::from_fn(rows.len(), ncols, |i, j| rows[i].as_ref()[j]);
        Ok(Self { costs })
    }

    /// Build a matrix from `nrows * ncols` entries given in row-major order.
    pub fn from_row_slice(nrows: usize, ncols: usize, data: &[T]) -> Result<Self> {
        check_shape(nrows, ncols)?;
        if data.len() != nrows * ncols {
            return Err(InvalidInput::Length {
                len: data.len(),
                rows: nrows,
                cols: ncols,
            }
            .into());
        }
        Self::try_from(DMatrix::from_row_slice(nrows, ncols, data))
    }

    /// Copy any nalgebra matrix (or view) into a cost matrix.
    pub fn from_matrix<R, C, S>(matrix: &Matrix<T, R, C, S>) -> Result<Self>
    where
        R: Dim,
        C: Dim,
        S: RawStorage<T, R, C>,
    {
        let (nrows, ncols) = matrix.shape();
        check_shape(nrows, ncols)?;
        Self::try_from(DMatrix::from_fn(nrows, ncols, |i, j| matrix[(i, j)]))
    }

    pub fn nrows(&self) -> usize {
        self.costs.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.costs.ncols()
    }

    pub fn shape(&self) -> (usize, usize) {
        self.costs.shape()
    }

    /// Side of the square matrix obtained by padding, `max(n, m)`.
    pub fn size(&self) -> usize {
        self.nrows().max(self.ncols())
    }

    pub fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        (row < self.nrows() && col < self.ncols()).then(|| self.costs[(row, col)])
    }

    pub fn as_matrix(&self) -> &DMatrix<T> {
        &self.costs
    }

    pub fn into_matrix(self) -> DMatrix<T> {
        self.costs
    }

    /// Minimum entry of each row.
    pub fn row_minima(&self) -> Vec<T> {
        self.costs
            .row_iter()
            .map(|r| r.iter().copied().fold(T::infinity(), T::min))
            .collect()
    }

    /// Minimum entry of each column.
    pub fn column_minima(&self) -> Vec<T> {
        self.costs
            .column_iter()
            .map(|c| c.iter().copied().fold(T::infinity(), T::min))
            .collect()
    }

    /// Sum of the entries selected by `pairs`.
    ///
    /// # Panics
    ///
    /// Panics if a pair lies outside the matrix.
    pub fn cost_of(&self, pairs: &[(usize, usize)]) -> T {
        pairs
            .iter()
            .fold(T::zero(), |total, &pair| total + self.costs[pair])
    }

    /// Square view of this matrix, padded with zero-cost dummy rows or
    /// columns, with entries negated when maximising.
    pub fn padded(&self, objective: Objective) -> PaddedView<'_, T> {
        PaddedView {
            costs: &self.costs,
            size: self.size(),
            negate: objective == Objective::Maximize,
        }
    }
}

fn check_shape(nrows: usize, ncols: usize) -> std::result::Result<(), InvalidInput> {
    if nrows == 0 {
        Err(InvalidInput::NoRows)
    } else if ncols == 0 {
        Err(InvalidInput::NoColumns)
    } else {
        Ok(())
    }
}

impl<T: Cost> TryFrom<DMatrix<T>> for CostMatrix<T> {
    type Error = crate::Error;

    fn try_from(costs: DMatrix<T>) -> Result<Self> {
        let (nrows, ncols) = costs.shape();
        check_shape(nrows, ncols)?;
        // report the first offending entry in row order
        for row in 0..nrows {
            for col in 0..ncols {
                if !costs[(row, col)].is_finite() {
                    return Err(InvalidInput::NonFinite { row, col }.into());
                }
            }
        }
        Ok(Self { costs })
    }
}

impl<T: Cost> TryFrom<Vec<Vec<T>>> for CostMatrix<T> {
    type Error = crate::Error;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self> {
        Self::from_rows(&rows)
    }
}

impl<T: Cost> std::ops::Index<(usize, usize)> for CostMatrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &T {
        &self.costs[index]
    }
}

/// The square, objective-adjusted matrix the solver works on.
#[derive(Debug, Clone, Copy)]
pub struct PaddedView<'a, T: Cost> {
    costs: &'a DMatrix<T>,
    size: usize,
    negate: bool,
}

impl<T: Cost> PaddedView<'_, T> {
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `(row, col)` is an entry of the caller's matrix rather than
    /// padding.
    pub fn is_real(&self, row: usize, col: usize) -> bool {
        row < self.costs.nrows() && col < self.costs.ncols()
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        if !self.is_real(row, col) {
            return T::zero();
        }
        let cost = self.costs[(row, col)];
        if self.negate {
            -cost
        } else {
            cost
        }
    }

    /// Minimum of column `col` over all padded rows.
    pub fn column_minimum(&self, col: usize) -> T {
        (0..self.size)
            .map(|row| self.get(row, col))
            .fold(T::infinity(), T::min)
    }
}

#[cfg(test)]
mod test {
    use nalgebra::{Matrix2x3, Matrix3};

    use super::*;
    use crate::Error;

    #[test]
    fn from_rows() {
        let costs = CostMatrix::from_rows(&[[1., 2., 3.], [4., 5., 6.]]).unwrap();
        assert_eq!(costs.shape(), (2, 3));
        assert_eq!(costs.size(), 3);
        assert!(!costs.is_square());
        assert_eq!(costs[(1, 0)], 4.);
        assert_eq!(costs.get(0, 2), Some(3.));
        assert_eq!(costs.get(2, 0), None);
        assert_eq!(costs.get(0, 3), None);
    }

    #[test]
    fn rejects_empty() {
        let rows: [[f64; 0]; 0] = [];
        assert_eq!(
            CostMatrix::from_rows(&rows),
            Err(Error::InvalidInput(InvalidInput::NoRows))
        );
        let rows: [[f64; 0]; 2] = [[], []];
        assert_eq!(
            CostMatrix::from_rows(&rows),
            Err(Error::InvalidInput(InvalidInput::NoColumns))
        );
        assert_eq!(
            CostMatrix::<f64>::from_row_slice(0, 3, &[]),
            Err(Error::InvalidInput(InvalidInput::NoRows))
        );
        assert_eq!(
            CostMatrix::try_from(DMatrix::<f64>::zeros(3, 0)),
            Err(Error::InvalidInput(InvalidInput::NoColumns))
        );
    }

    #[test]
    fn rejects_ragged() {
        let rows = vec![vec![1., 2.], vec![3., 4.], vec![5.]];
        assert_eq!(
            CostMatrix::try_from(rows),
            Err(Error::InvalidInput(InvalidInput::Ragged {
                row: 2,
                len: 1,
                expected: 2
            }))
        );
        assert_eq!(
            CostMatrix::from_row_slice(2, 2, &[1., 2., 3.]),
            Err(Error::InvalidInput(InvalidInput::Length {
                len: 3,
                rows: 2,
                cols: 2
            }))
        );
    }

    #[test]
    fn rejects_non_finite() {
        let rows = vec![vec![1., 2.], vec![f64::NAN, 4.]];
        assert_eq!(
            CostMatrix::try_from(rows),
            Err(Error::InvalidInput(InvalidInput::NonFinite { row: 1, col: 0 }))
        );
        #[rustfmt::skip]
        let costs = Matrix2x3::new(
            1., 2., 3.,
            4., 5., f64::INFINITY,
        );
        assert_eq!(
            CostMatrix::from_matrix(&costs),
            Err(Error::InvalidInput(InvalidInput::NonFinite { row: 1, col: 2 }))
        );
        assert_eq!(
            CostMatrix::from_row_slice(1, 2, &[f64::NEG_INFINITY, 0.]),
            Err(Error::InvalidInput(InvalidInput::NonFinite { row: 0, col: 0 }))
        );
    }

    #[test]
    fn from_nalgebra() {
        #[rustfmt::skip]
        let costs = Matrix3::from_row_slice(
            &[
                1., 2., 3.,
                4., 5., 6.,
                7., 8., 9.,
            ]
        );
        let view = costs.view((1, 0), (2, 3));
        let matrix = CostMatrix::from_matrix(&view).unwrap();
        assert_eq!(matrix.shape(), (2, 3));
        assert_eq!(matrix[(0, 0)], 4.);
        assert_eq!(matrix[(1, 2)], 9.);
        assert_eq!(
            matrix,
            CostMatrix::from_row_slice(2, 3, &[4., 5., 6., 7., 8., 9.]).unwrap()
        );
    }

    #[test]
    fn reductions() {
        #[rustfmt::skip]
        let costs = CostMatrix::from_row_slice(2, 3, &[
            4., 1., 3.,
            2., 0., 5.,
        ]).unwrap();
        assert_eq!(costs.row_minima(), vec![1., 0.]);
        assert_eq!(costs.column_minima(), vec![2., 0., 3.]);
        assert_eq!(costs.cost_of(&[(0, 1), (1, 0)]), 3.);
    }

    #[test]
    fn padding() {
        let costs = CostMatrix::from_row_slice(2, 3, &[4., 1., 3., 2., -1., 5.]).unwrap();
        let view = costs.padded(Objective::Minimize);
        assert_eq!(view.size(), 3);
        assert_eq!(view.get(1, 1), -1.);
        assert_eq!(view.get(2, 0), 0.);
        assert!(view.is_real(1, 2));
        assert!(!view.is_real(2, 2));
        assert_eq!(view.column_minimum(0), 0.);
        assert_eq!(view.column_minimum(1), -1.);

        let view = costs.padded(Objective::Maximize);
        assert_eq!(view.get(0, 0), -4.);
        assert_eq!(view.get(2, 1), 0.);
        assert_eq!(view.column_minimum(2), -5.);
    }
}

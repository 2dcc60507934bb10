//! Dense linear sum assignment.
//!
//! Given an `n x m` cost matrix, [`Solver`] finds `min(n, m)` pairs of
//! distinct rows and columns of minimum (or maximum) total cost. The method is
//! the `O(n^3)` shortest augmenting path variant of the Hungarian algorithm:
//! row and column potentials are kept dual feasible while the matching grows
//! one row at a time, and on completion the dual objective equals the cost
//! of the assignment.
//!
//! ```
//! use lsap::{CostMatrix, Solver};
//!
//! #[rustfmt::skip]
//! let costs = CostMatrix::from_rows(&[
//!     [12.,  9., 27., 10., 23.],
//!     [ 7., 13., 13., 30., 19.],
//!     [25., 18., 26., 11., 26.],
//!     [ 9., 28., 26., 23., 13.],
//!     [16., 16., 24.,  6.,  9.],
//! ]).unwrap();
//!
//! let mut solver = Solver::new();
//! let solution = solver.solve(&costs).unwrap();
//! assert_eq!(solution.pairs(), &[(0, 1), (1, 2), (2, 3), (3, 0), (4, 4)]);
//! assert_eq!(solution.cost(), 51.);
//! assert_eq!(solution.dual_objective(), solution.cost());
//! ```

mod augment;
mod error;
mod matrix;
mod potentials;
mod solver;

pub use augment::{augment, Scratch, Step};
pub use error::{Error, InvalidInput, Result};
pub use matrix::{Cost, CostMatrix, PaddedView};
pub use potentials::Potentials;
pub use solver::{compute, solve, Objective, Solution, Solver};

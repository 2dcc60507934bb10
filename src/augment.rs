use crate::error::{Error, Result};
use crate::matrix::{Cost, PaddedView};
use crate::potentials::Potentials;

/// Matching state and search buffers of one solve.
///
/// Buffers keep their allocation between solves; [`Scratch::reset`] clears
/// every semantic value before a new matrix is processed.
#[derive(Debug, Clone)]
pub struct Scratch<T> {
    col_of_row: Vec<Option<usize>>,
    row_of_col: Vec<Option<usize>>,
    slack: Vec<T>,
    pred: Vec<usize>,
    visited: Vec<bool>,
    visited_cols: Vec<usize>,
    tree: Vec<usize>,
}

impl<T> Default for Scratch<T> {
    fn default() -> Self {
        Self {
            col_of_row: Vec::new(),
            row_of_col: Vec::new(),
            slack: Vec::new(),
            pred: Vec::new(),
            visited: Vec::new(),
            visited_cols: Vec::new(),
            tree: Vec::new(),
        }
    }
}

/// Summary of one augmentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Previously free column the augmenting path ends in.
    pub column: usize,
    /// Number of dual updates needed to reach it.
    pub dual_updates: usize,
    /// Number of matched edges on the flipped path.
    pub path_length: usize,
}

impl<T: Cost> Scratch<T> {
    pub fn with_capacity(size: usize) -> Self {
        Self {
            col_of_row: Vec::with_capacity(size),
            row_of_col: Vec::with_capacity(size),
            slack: Vec::with_capacity(size),
            pred: Vec::with_capacity(size),
            visited: Vec::with_capacity(size),
            visited_cols: Vec::with_capacity(size),
            tree: Vec::with_capacity(size),
        }
    }

    /// Drop the matching and size every buffer for a `size x size` problem.
    pub fn reset(&mut self, size: usize) {
        self.col_of_row.clear();
        self.col_of_row.resize(size, None);
        self.row_of_col.clear();
        self.row_of_col.resize(size, None);
        self.slack.clear();
        self.slack.resize(size, T::zero());
        self.pred.clear();
        self.pred.resize(size, 0);
        self.visited.clear();
        self.visited.resize(size, false);
        self.visited_cols.clear();
        self.tree.clear();
    }

    pub fn size(&self) -> usize {
        self.col_of_row.len()
    }

    pub fn column_for_row(&self, row: usize) -> Option<usize> {
        self.col_of_row.get(row).copied().flatten()
    }

    pub fn row_for_column(&self, col: usize) -> Option<usize> {
        self.row_of_col.get(col).copied().flatten()
    }

    /// Matched `(row, column)` pairs in row order.
    pub fn matching(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.col_of_row
            .iter()
            .enumerate()
            .filter_map(|(row, col)| col.map(|col| (row, col)))
    }

    fn begin(&mut self, root: usize) {
        self.visited.fill(false);
        self.visited_cols.clear();
        self.tree.clear();
        self.tree.push(root);
        self.pred.fill(root);
    }
}

/// Grow the matching by one edge, starting from the free row `root`.
///
/// Runs a Dijkstra-like search over reduced costs, moving the potentials
/// whenever no zero-reduced-cost edge leaves the alternating tree, and flips
/// the augmenting path once a free column is reached. Dual feasibility holds
/// before and after the call.
pub fn augment<T: Cost>(
    costs: &PaddedView<'_, T>,
    potentials: &mut Potentials<T>,
    scratch: &mut Scratch<T>,
    root: usize,
) -> Result<Step> {
    let size = costs.size();
    if scratch.column_for_row(root).is_some() {
        return Err(Error::InternalInvariantViolation(
            "augmentation started from a matched row",
        ));
    }

    scratch.begin(root);
    for col in 0..size {
        scratch.slack[col] = potentials.reduced_cost(costs, root, col);
    }

    let mut dual_updates = 0;
    let end = loop {
        // unvisited column of minimum slack, lowest index on ties
        let mut best: Option<(usize, T)> = None;
        for col in 0..size {
            if scratch.visited[col] {
                continue;
            }
            let slack = scratch.slack[col];
            if best.map_or(true, |(_, min)| slack < min) {
                best = Some((col, slack));
            }
        }
        let (col, delta) = best.ok_or(Error::InternalInvariantViolation(
            "no free column reachable from the alternating tree",
        ))?;
        if !delta.is_finite() {
            return Err(Error::InternalInvariantViolation(
                "reduced cost is no longer finite",
            ));
        }

        if delta > T::zero() {
            potentials.shift(
                scratch.tree.iter().copied(),
                scratch.visited_cols.iter().copied(),
                delta,
            );
            for c in 0..size {
                if !scratch.visited[c] {
                    scratch.slack[c] = scratch.slack[c] - delta;
                }
            }
            dual_updates += 1;
        }

        scratch.visited[col] = true;
        scratch.visited_cols.push(col);

        let Some(row) = scratch.row_of_col[col] else {
            break col;
        };

        // extend the tree through the row matched to `col`
        scratch.tree.push(row);
        for c in 0..size {
            if scratch.visited[c] {
                continue;
            }
            let reduced = potentials.reduced_cost(costs, row, c);
            if reduced < scratch.slack[c] {
                scratch.slack[c] = reduced;
                scratch.pred[c] = row;
            }
        }
    };

    // flip the alternating path back to the root
    let mut col = end;
    let mut path_length = 0;
    loop {
        let row = scratch.pred[col];
        let previous = scratch.col_of_row[row];
        scratch.row_of_col[col] = Some(row);
        scratch.col_of_row[row] = Some(col);
        path_length += 1;
        if row == root {
            break;
        }
        col = previous.ok_or(Error::InternalInvariantViolation(
            "alternating path passes through a free row",
        ))?;
    }

    Ok(Step {
        column: end,
        dual_updates,
        path_length,
    })
}

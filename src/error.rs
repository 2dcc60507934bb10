/// Reason a cost matrix was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    #[error("cost matrix has no rows")]
    NoRows,
    #[error("cost matrix has no columns")]
    NoColumns,
    #[error("row {row} has {len} entries, expected {expected}")]
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("{len} entries cannot fill a {rows}x{cols} matrix")]
    Length { len: usize, rows: usize, cols: usize },
    #[error("entry ({row}, {col}) is not finite")]
    NonFinite { row: usize, col: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid cost matrix: {0}")]
    InvalidInput(#[from] InvalidInput),
    /// The solver reached a state that a correct implementation never
    /// reaches. Not recoverable.
    #[error("assignment solver invariant violated: {0}")]
    InternalInvariantViolation(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;

use crate::trace::Op;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Costs must be non-negative.
    #[error("{op} cost must be non-negative, got {cost}")]
    InvalidCost { op: Op, cost: String },
    /// The cost of cell `(i, j)` does not fit in the cost type.
    #[error("cost of cell ({i}, {j}) overflows the cost type")]
    CostOverflow { i: usize, j: usize },
    /// No recurrence explains the value of cell `(i, j)`.
    /// The matrix was not built by `DistanceMatrix::new` for these costs.
    #[error("corrupt distance matrix: no edit operation leads to cell ({i}, {j})")]
    CorruptMatrix { i: usize, j: usize },
}

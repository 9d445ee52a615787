//! The full dynamic programming table, and a linear-memory distance-only variant.
use crate::cost_model::{CostModel, CostValue};
use crate::Error;
use std::ops::Index;

/// `(m+1) x (n+1)` table where cell `(i, j)` is the distance between
/// `a[..i]` and `b[..j]`.
///
/// Stored row-major in a single allocation.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix<C> {
    rows: usize,
    cols: usize,
    cells: Vec<C>,
}

/// The cheapest of an insertion from `left`, a deletion from `up`, and a
/// substitution from `diag`. Sums that overflow are skipped; `None` when all do.
#[inline]
fn cheapest_step<C: CostValue>(left: C, up: C, diag: C, cm: &CostModel<C>) -> Option<C> {
    [
        left.checked_cost_add(cm.ins),
        up.checked_cost_add(cm.del),
        diag.checked_cost_add(cm.sub),
    ]
    .into_iter()
    .flatten()
    .reduce(|m, c| if c < m { c } else { m })
}

impl<C: CostValue> DistanceMatrix<C> {
    /// Fill the entire table.
    ///
    /// The first column and row are running sums of the deletion and insertion
    /// cost. Equal symbols copy the diagonal; otherwise the cheapest of
    /// insertion, deletion, and substitution is taken.
    ///
    /// Fails with `Error::CostOverflow` at the first cell whose cost does not
    /// fit in `C`.
    pub fn new<T: PartialEq>(a: &[T], b: &[T], cm: &CostModel<C>) -> Result<Self, Error> {
        cm.validate()?;
        let rows = a.len() + 1;
        let cols = b.len() + 1;
        let mut cells = vec![C::zero(); rows * cols];

        for i in 1..rows {
            cells[i * cols] = cells[(i - 1) * cols]
                .checked_cost_add(cm.del)
                .ok_or(Error::CostOverflow { i, j: 0 })?;
        }
        for j in 1..cols {
            cells[j] = cells[j - 1]
                .checked_cost_add(cm.ins)
                .ok_or(Error::CostOverflow { i: 0, j })?;
        }

        for (i, ca) in a.iter().enumerate() {
            let (prev, cur) = cells[i * cols..(i + 2) * cols].split_at_mut(cols);
            for (j, cb) in b.iter().enumerate() {
                cur[j + 1] = if ca == cb {
                    prev[j]
                } else {
                    cheapest_step(cur[j], prev[j + 1], prev[j], cm)
                        .ok_or(Error::CostOverflow { i: i + 1, j: j + 1 })?
                };
            }
        }

        log::debug!(
            "distance matrix {rows}x{cols}: distance {:?}",
            cells[rows * cols - 1]
        );
        Ok(DistanceMatrix { rows, cols, cells })
    }

    /// The distance between the two full sequences.
    pub fn distance(&self) -> C {
        self.cells[self.cells.len() - 1]
    }
}

impl<C> DistanceMatrix<C> {
    /// Number of rows: the source length plus one.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns: the target length plus one.
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn row(&self, i: usize) -> &[C] {
        &self.cells[i * self.cols..(i + 1) * self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[C]> + '_ {
        self.cells.chunks_exact(self.cols)
    }

    /// Build a matrix from raw cells, bypassing the recurrence.
    #[cfg(test)]
    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<C>) -> Self {
        assert_eq!(rows * cols, cells.len());
        DistanceMatrix { rows, cols, cells }
    }
}

impl<C> Index<(usize, usize)> for DistanceMatrix<C> {
    type Output = C;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &C {
        assert!(i < self.rows && j < self.cols);
        &self.cells[i * self.cols + j]
    }
}

/// Only the distance, using two rows of length `min(|a|, |b|) + 1`.
///
/// Gives the same value as `DistanceMatrix::new(a, b, cm)?.distance()`.
pub fn distance_only<T: PartialEq, C: CostValue>(
    a: &[T],
    b: &[T],
    cm: &CostModel<C>,
) -> Result<C, Error> {
    cm.validate()?;
    // Rows run over the longer sequence. Aligning b to a swaps the indel costs,
    // and the coordinates of an overflowing cell.
    if b.len() <= a.len() {
        rolling_distance(a, b, cm).map_err(|(i, j)| Error::CostOverflow { i, j })
    } else {
        rolling_distance(b, a, &cm.transposed()).map_err(|(j, i)| Error::CostOverflow { i, j })
    }
}

/// Fails with the coordinates of the first overflowing cell.
fn rolling_distance<T: PartialEq, C: CostValue>(
    a: &[T],
    b: &[T],
    cm: &CostModel<C>,
) -> Result<C, (usize, usize)> {
    let mut prev = Vec::with_capacity(b.len() + 1);
    prev.push(C::zero());
    for j in 0..b.len() {
        let c = prev[j].checked_cost_add(cm.ins).ok_or((0, j + 1))?;
        prev.push(c);
    }
    let mut cur = prev.clone();

    for (i, ca) in a.iter().enumerate() {
        cur[0] = prev[0].checked_cost_add(cm.del).ok_or((i + 1, 0))?;
        for (j, cb) in b.iter().enumerate() {
            cur[j + 1] = if ca == cb {
                prev[j]
            } else {
                cheapest_step(cur[j], prev[j + 1], prev[j], cm).ok_or((i + 1, j + 1))?
            };
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    Ok(prev[b.len()])
}

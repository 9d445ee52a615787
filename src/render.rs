//! Plain-text views of the distance matrix and the edit script.
use crate::cost_model::CostValue;
use crate::matrix::DistanceMatrix;
use crate::trace::EditOp;
use itertools::Itertools;
use std::fmt::{self, Display};
use std::iter::once;

/// Header used for the empty prefix.
pub const PLACEHOLDER: &str = "-";

/// Minimal width of each matrix and index column.
const MIN_WIDTH: usize = 2;

/// Width of the operation type column.
const TYPE_WIDTH: usize = 13;

fn width(s: &str) -> usize {
    s.chars().count()
}

/// The distance matrix with the target along the top and the source along the
/// left. All columns are right-aligned to the widest cell.
///
/// ```text
///  -  -  w  o
///  -  0  2  4
///  h  2  1  3
/// ```
pub struct MatrixView<'a, T, C> {
    pub a: &'a [T],
    pub b: &'a [T],
    pub matrix: &'a DistanceMatrix<C>,
}

impl<T: Display, C: CostValue> Display for MatrixView<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = [PLACEHOLDER.to_string(), PLACEHOLDER.to_string()]
            .into_iter()
            .chain(self.b.iter().map(|c| c.to_string()))
            .collect_vec();
        let labels = once(PLACEHOLDER.to_string())
            .chain(self.a.iter().map(|c| c.to_string()))
            .collect_vec();
        let rows = self
            .matrix
            .iter_rows()
            .map(|row| row.iter().map(|c| c.to_string()).collect_vec())
            .collect_vec();

        let w = header
            .iter()
            .chain(&labels)
            .chain(rows.iter().flatten())
            .map(|s| width(s))
            .max()
            .unwrap_or(0)
            .max(MIN_WIDTH);

        writeln!(f, "{}", header.iter().map(|s| format!("{s:>w$}")).join(" "))?;
        for (label, row) in labels.iter().zip(&rows) {
            writeln!(
                f,
                "{}",
                once(label)
                    .chain(row)
                    .map(|s| format!("{s:>w$}"))
                    .join(" ")
            )?;
        }
        Ok(())
    }
}

/// One line per edit operation, in order.
///
/// ```text
/// Type           i  j
/// --------------------
/// Substitution   0  0
/// ```
pub struct EditOpsView<'a> {
    pub ops: &'a [EditOp],
}

impl Display for EditOpsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self
            .ops
            .iter()
            .map(|e| e.i.max(e.j).to_string().len())
            .max()
            .unwrap_or(0)
            .max(MIN_WIDTH);

        let tw = TYPE_WIDTH;
        let header = format!("{:<tw$} {:>w$} {:>w$}", "Type", "i", "j");
        writeln!(f, "{header}")?;
        writeln!(f, "{}", "-".repeat(header.len() + 1))?;
        for e in self.ops {
            writeln!(f, "{:<tw$} {:>w$} {:>w$}", e.op, e.i, e.j)?;
        }
        Ok(())
    }
}

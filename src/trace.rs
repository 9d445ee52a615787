//! Backtrace through a `DistanceMatrix` to recover an edit script.
use crate::cost_model::{CostModel, CostValue};
use crate::matrix::DistanceMatrix;
use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Op {
    /// Diagonal step that does not increase the cost. Usually this pairs equal
    /// symbols, but unequal symbols qualify when the costs happen to coincide.
    Match,
    Substitution,
    /// Consume one source symbol.
    Deletion,
    /// Consume one target symbol.
    Insertion,
}

impl Op {
    pub fn name(&self) -> &'static str {
        match self {
            Op::Match => "Match",
            Op::Substitution => "Substitution",
            Op::Deletion => "Deletion",
            Op::Insertion => "Insertion",
        }
    }

    /// The cigar character.
    pub fn to_char(&self) -> char {
        match self {
            Op::Match => '=',
            Op::Substitution => 'X',
            Op::Deletion => 'D',
            Op::Insertion => 'I',
        }
    }

    pub fn from_char(c: char) -> Option<Op> {
        Some(match c {
            '=' => Op::Match,
            'X' => Op::Substitution,
            'D' => Op::Deletion,
            'I' => Op::Insertion,
            _ => return None,
        })
    }

    /// How far `(i, j)` advances.
    pub fn delta(&self) -> (usize, usize) {
        match self {
            Op::Match | Op::Substitution => (1, 1),
            Op::Deletion => (1, 0),
            Op::Insertion => (0, 1),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` so that width and alignment flags are respected.
        f.pad(self.name())
    }
}

/// A single edit operation, applied at position `i` of the source and `j` of
/// the target, i.e. after `a[..i]` has been aligned to `b[..j]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EditOp {
    #[serde(rename = "type")]
    pub op: Op,
    pub i: usize,
    pub j: usize,
}

impl EditOp {
    pub fn new(op: Op, i: usize, j: usize) -> Self {
        EditOp { op, i, j }
    }
}

/// Walk from the bottom-right cell back to the origin and return the edit
/// operations in forward order.
///
/// At each cell the predecessor is chosen in the fixed order Match,
/// Substitution, Deletion, Insertion. This order decides which of several
/// optimal alignments is reported and must not change. A Match is recognised
/// by an unchanged diagonal cost, without comparing symbols.
///
/// Fails with `Error::CorruptMatrix` when no predecessor explains a cell,
/// which can only happen when `d` was not computed with `cm`.
pub fn backtrace<C: CostValue>(
    d: &DistanceMatrix<C>,
    cm: &CostModel<C>,
) -> Result<Vec<EditOp>, Error> {
    let (mut i, mut j) = (d.rows() - 1, d.cols() - 1);
    let mut ops = Vec::with_capacity(i.max(j));

    while i > 0 || j > 0 {
        let cur = d[(i, j)];
        // A sum that overflows cannot have produced `cur`.
        let step = |prev: C, cost: C| prev.checked_cost_add(cost) == Some(cur);
        let op = if i > 0 && j > 0 && cur == d[(i - 1, j - 1)] {
            Op::Match
        } else if i > 0 && j > 0 && step(d[(i - 1, j - 1)], cm.sub) {
            Op::Substitution
        } else if i > 0 && step(d[(i - 1, j)], cm.del) {
            Op::Deletion
        } else if j > 0 && step(d[(i, j - 1)], cm.ins) {
            Op::Insertion
        } else {
            return Err(Error::CorruptMatrix { i, j });
        };
        let (di, dj) = op.delta();
        i -= di;
        j -= dj;
        log::trace!("backtrace: {op} at ({i}, {j}), cost {cur:?}");
        ops.push(EditOp::new(op, i, j));
    }

    ops.reverse();
    Ok(ops)
}

/// Apply `ops` to `a`, producing the target sequence.
///
/// Match and Substitution take the symbol from `b`, since a Match may pair
/// unequal symbols.
///
/// Panics when `ops` does not walk exactly from `(0, 0)` to `(|a|, |b|)`.
pub fn apply<T: Clone>(ops: &[EditOp], a: &[T], b: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(b.len());
    let (mut i, mut j) = (0, 0);
    for e in ops {
        assert_eq!((e.i, e.j), (i, j), "{} out of order", e.op);
        match e.op {
            Op::Match | Op::Substitution | Op::Insertion => out.push(b[j].clone()),
            Op::Deletion => {}
        }
        let (di, dj) = e.op.delta();
        i += di;
        j += dj;
    }
    assert_eq!((i, j), (a.len(), b.len()), "edit script does not cover both sequences");
    out
}

/// The total cost of `ops` under `cm`.
pub fn script_cost<C: CostValue>(ops: &[EditOp], cm: &CostModel<C>) -> C {
    ops.iter()
        .fold(C::zero(), |acc, e| acc + cm.op_cost(e.op))
}

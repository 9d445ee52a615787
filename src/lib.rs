//!
//! # Levenshtein distance with configurable costs
//!
//! `Levenshtein` computes the full dynamic programming matrix for a pair of
//! sequences and a `CostModel`, and traces back one optimal edit script.
//! Symbols can be of any type that supports equality: bytes, `char`s, or
//! tokens such as words.
//!
//! ```
//! use pa_levenshtein::{CostModel, Levenshtein, Op};
//!
//! let a: Vec<char> = "hello".chars().collect();
//! let b: Vec<char> = "world".chars().collect();
//! let l = Levenshtein::new(&a, &b, CostModel::new(2, 2, 1)).unwrap();
//! assert_eq!(l.distance(), 4);
//! assert_eq!(l.edit_ops()[3].op, Op::Match);
//! assert_eq!(l.cigar().to_string(), "3X1=1X");
//! ```
//!
//! When only the distance is needed, `distance_only` uses linear memory.

pub mod cigar;
pub mod cost_model;
mod error;
pub mod generate;
pub mod matrix;
pub mod render;
pub mod trace;

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(test)]
mod tests;

pub use cigar::{Cigar, CigarElem};
pub use cost_model::{Cost, CostModel, CostValue};
pub use error::Error;
pub use matrix::{distance_only, DistanceMatrix};
pub use render::{EditOpsView, MatrixView};
pub use trace::{EditOp, Op};

use std::fmt::Display;

/// The distance matrix and edit script for one pair of sequences.
///
/// Both are computed once in `new` and never change afterwards.
#[derive(Clone, Debug)]
pub struct Levenshtein<'a, T, C = Cost> {
    a: &'a [T],
    b: &'a [T],
    cm: CostModel<C>,
    matrix: DistanceMatrix<C>,
    edits: Vec<EditOp>,
}

impl<'a, T: PartialEq, C: CostValue> Levenshtein<'a, T, C> {
    /// Align source `a` to target `b`.
    ///
    /// Fails with `Error::InvalidCost` when any cost is negative, and with
    /// `Error::CostOverflow` when a cell does not fit in `C`.
    pub fn new(a: &'a [T], b: &'a [T], cm: CostModel<C>) -> Result<Self, Error> {
        let matrix = DistanceMatrix::new(a, b, &cm)?;
        let edits = trace::backtrace(&matrix, &cm)?;
        Ok(Levenshtein {
            a,
            b,
            cm,
            matrix,
            edits,
        })
    }
}

impl<'a, T: PartialEq> Levenshtein<'a, T, Cost> {
    /// Align with unit costs for insertions, deletions, and substitutions.
    pub fn unit(a: &'a [T], b: &'a [T]) -> Result<Self, Error> {
        Self::new(a, b, CostModel::unit())
    }
}

impl<'a, T, C: CostValue> Levenshtein<'a, T, C> {
    pub fn source(&self) -> &'a [T] {
        self.a
    }

    pub fn target(&self) -> &'a [T] {
        self.b
    }

    pub fn cost_model(&self) -> &CostModel<C> {
        &self.cm
    }

    /// The bottom-right cell of the matrix.
    pub fn distance(&self) -> C {
        self.matrix.distance()
    }

    pub fn matrix(&self) -> &DistanceMatrix<C> {
        &self.matrix
    }

    /// One optimal edit script, from the start of the sequences to the end.
    pub fn edit_ops(&self) -> &[EditOp] {
        &self.edits
    }

    pub fn cigar(&self) -> Cigar {
        Cigar::from_ops(&self.edits)
    }

    /// Apply the edit script to the source. This always yields the target.
    pub fn replay(&self) -> Vec<T>
    where
        T: Clone,
    {
        trace::apply(&self.edits, self.a, self.b)
    }

    pub fn edit_ops_view(&self) -> EditOpsView<'_> {
        EditOpsView { ops: &self.edits }
    }

    pub fn render_edit_ops(&self) -> String {
        self.edit_ops_view().to_string()
    }
}

impl<'a, T: Display, C: CostValue> Levenshtein<'a, T, C> {
    pub fn matrix_view(&self) -> MatrixView<'_, T, C> {
        MatrixView {
            a: self.a,
            b: self.b,
            matrix: &self.matrix,
        }
    }

    pub fn render_matrix(&self) -> String {
        self.matrix_view().to_string()
    }
}

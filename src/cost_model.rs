//! This module contains the linear `CostModel` used by the distance matrix and
//! the backtrace.

use crate::{trace::Op, Error};
use num_traits::{CheckedAdd, One, Zero};
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};
use std::ops::Add;

/// Default type for storing costs.
pub type Cost = i32;

/// Numeric types that can be used as costs.
///
/// Costs are only ever added and compared, so both integer and floating point
/// types qualify.
pub trait CostValue: Copy + PartialOrd + Zero + Add<Output = Self> + Debug + Display {
    /// `self + rhs`, or `None` when the sum does not fit in `Self`.
    fn checked_cost_add(self, rhs: Self) -> Option<Self>;
}

macro_rules! int_cost {
    ($($t:ty),*) => {$(
        impl CostValue for $t {
            #[inline]
            fn checked_cost_add(self, rhs: Self) -> Option<Self> {
                CheckedAdd::checked_add(&self, &rhs)
            }
        }
    )*};
}

macro_rules! float_cost {
    ($($t:ty),*) => {$(
        impl CostValue for $t {
            /// Floats saturate to infinity, which still compares correctly.
            #[inline]
            fn checked_cost_add(self, rhs: Self) -> Option<Self> {
                Some(self + rhs)
            }
        }
    )*};
}

int_cost!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
float_cost!(f32, f64);

/// Linear costs for insertions, deletions, and substitutions.
///
/// A match is always free.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostModel<C = Cost> {
    /// The cost of inserting one symbol of the target.
    pub ins: C,
    /// The cost of deleting one symbol of the source.
    pub del: C,
    /// The cost of replacing a source symbol by a different target symbol.
    pub sub: C,
}

impl<C: CostValue> CostModel<C> {
    pub fn new(ins: C, del: C, sub: C) -> Self {
        CostModel { ins, del, sub }
    }

    pub fn linear(sub: C, indel: C) -> Self {
        Self::new(indel, indel, sub)
    }

    pub fn linear_asymmetric(sub: C, ins: C, del: C) -> Self {
        Self::new(ins, del, sub)
    }

    /// The same model seen from the target: insertions and deletions swap.
    pub fn transposed(&self) -> Self {
        Self::new(self.del, self.ins, self.sub)
    }

    /// The cost of a single edit operation.
    #[inline]
    pub fn op_cost(&self, op: Op) -> C {
        match op {
            Op::Match => C::zero(),
            Op::Substitution => self.sub,
            Op::Deletion => self.del,
            Op::Insertion => self.ins,
        }
    }

    /// Fails on the first negative cost, in `ins`, `del`, `sub` order.
    /// NaN is rejected as well.
    pub fn validate(&self) -> Result<(), Error> {
        for (op, cost) in [
            (Op::Insertion, self.ins),
            (Op::Deletion, self.del),
            (Op::Substitution, self.sub),
        ] {
            if !(cost >= C::zero()) {
                return Err(Error::InvalidCost {
                    op,
                    cost: cost.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl<C: CostValue + One> CostModel<C> {
    pub fn unit() -> Self {
        Self::new(C::one(), C::one(), C::one())
    }
}

impl<C: CostValue + One> Default for CostModel<C> {
    fn default() -> Self {
        Self::unit()
    }
}

/// Costs given as an `(ins, del, sub)` tuple.
impl<C: CostValue> From<(C, C, C)> for CostModel<C> {
    fn from((ins, del, sub): (C, C, C)) -> Self {
        Self::new(ins, del, sub)
    }
}

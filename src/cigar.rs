use crate::cost_model::{CostModel, CostValue};
use crate::trace::{EditOp, Op};
use std::fmt::{self, Write};
use std::slice;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CigarElem {
    pub op: Op,
    pub cnt: usize,
}

/// Run-length encoded edit script, e.g. `3X1=1X`.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Cigar {
    pub ops: Vec<CigarElem>,
}

impl Cigar {
    pub fn from_ops(ops: &[EditOp]) -> Self {
        let mut cigar = Cigar::default();
        for e in ops {
            cigar.push_op(e.op);
        }
        cigar
    }

    pub fn push_op(&mut self, op: Op) {
        self.push_elem(CigarElem { op, cnt: 1 });
    }

    /// Append `el`, merging it into the last element when the ops agree.
    pub fn push_elem(&mut self, el: CigarElem) {
        if let Some(s) = self.ops.last_mut() {
            if s.op == el.op {
                s.cnt += el.cnt;
                return;
            }
        }
        self.ops.push(el);
    }

    /// Expand back into individual edit operations with their positions.
    pub fn to_edit_ops(&self) -> Vec<EditOp> {
        let (mut i, mut j) = (0, 0);
        let mut ops = vec![];
        for el in self {
            let (di, dj) = el.op.delta();
            for _ in 0..el.cnt {
                ops.push(EditOp::new(el.op, i, j));
                i += di;
                j += dj;
            }
        }
        ops
    }

    /// Number of edit operations.
    pub fn len(&self) -> usize {
        self.ops.iter().map(|el| el.cnt).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Parse a string as produced by `to_string`. Counts must be positive.
    pub fn parse(s: &str) -> Option<Cigar> {
        let mut cigar = Cigar::default();
        let mut cnt = String::new();
        for c in s.chars() {
            if c.is_ascii_digit() {
                cnt.push(c);
                continue;
            }
            let op = Op::from_char(c)?;
            let cnt = std::mem::take(&mut cnt).parse::<usize>().ok()?;
            if cnt == 0 {
                return None;
            }
            cigar.push_elem(CigarElem { op, cnt });
        }
        cnt.is_empty().then_some(cigar)
    }

    /// Check that the cigar aligns `a` to `b` and return its cost.
    ///
    /// A Match costs nothing and may pair unequal symbols, as the backtrace
    /// reports any diagonal step without cost increase as a Match.
    /// Panics on a Substitution of equal symbols, or a cigar that does not
    /// end at `(|a|, |b|)`.
    pub fn verify<T: PartialEq + fmt::Debug, C: CostValue>(
        &self,
        cm: &CostModel<C>,
        a: &[T],
        b: &[T],
    ) -> C {
        let (mut i, mut j) = (0, 0);
        let mut cost = C::zero();

        for &CigarElem { op, cnt } in self {
            for _ in 0..cnt {
                match op {
                    Op::Match => assert!(i < a.len() && j < b.len()),
                    Op::Substitution => {
                        assert!(i < a.len() && j < b.len());
                        assert_ne!(a[i], b[j]);
                    }
                    Op::Deletion => assert!(i < a.len()),
                    Op::Insertion => assert!(j < b.len()),
                }
                let (di, dj) = op.delta();
                i += di;
                j += dj;
                cost = cost + cm.op_cost(op);
            }
        }
        assert_eq!((i, j), (a.len(), b.len()));
        cost
    }
}

impl fmt::Display for Cigar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for el in &self.ops {
            write!(f, "{}", el.cnt)?;
            f.write_char(el.op.to_char())?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Cigar {
    type Item = &'a CigarElem;

    type IntoIter = slice::Iter<'a, CigarElem>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{matrix::DistanceMatrix, trace::backtrace};

    #[test]
    fn hello_world() {
        let cm = CostModel::new(2, 2, 1);
        let d = DistanceMatrix::new(b"hello", b"world", &cm).unwrap();
        let ops = backtrace(&d, &cm).unwrap();
        let cigar = Cigar::from_ops(&ops);
        assert_eq!(cigar.to_string(), "3X1=1X");
        assert_eq!(cigar.len(), 5);
        assert_eq!(cigar.to_edit_ops(), ops);
        assert_eq!(cigar.verify(&cm, b"hello", b"world"), 4);
        assert_eq!(Cigar::parse("3X1=1X"), Some(cigar));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(Cigar::parse("3Q"), None);
        assert_eq!(Cigar::parse("12"), None);
        assert_eq!(Cigar::parse("X"), None);
        assert_eq!(Cigar::parse("0X"), None);
        assert_eq!(Cigar::parse("2=0D"), None);
        assert_eq!(Cigar::parse(""), Some(Cigar::default()));
    }

    #[test]
    fn parse_merges_runs() {
        let cigar = Cigar::parse("2=3=1X").unwrap();
        assert_eq!(cigar.to_string(), "5=1X");
        let huge = Cigar::parse("999999999999I").unwrap();
        assert_eq!(huge.len(), 999_999_999_999);
        assert_eq!(huge.ops.len(), 1);
    }

    #[test]
    #[should_panic]
    fn verify_rejects_overlong_cigar() {
        Cigar::parse("2=")
            .unwrap()
            .verify(&CostModel::new(1, 1, 1), b"a", b"a");
    }

    #[test]
    #[should_panic]
    fn verify_rejects_equal_substitution() {
        Cigar::parse("1X")
            .unwrap()
            .verify(&CostModel::new(1, 1, 1), b"a", b"a");
    }

    #[test]
    fn verify_allows_free_substitution_match() {
        let cm = CostModel::new(1, 1, 0);
        assert_eq!(Cigar::parse("2=").unwrap().verify(&cm, b"ab", b"ba"), 0);
    }
}

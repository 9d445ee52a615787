use crate::*;
use Op::*;

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

fn ops(v: &[(Op, usize, usize)]) -> Vec<EditOp> {
    v.iter().map(|&(op, i, j)| EditOp::new(op, i, j)).collect()
}

#[test]
fn hello_world() {
    let (a, b) = (chars("hello"), chars("world"));
    let l = Levenshtein::new(&a, &b, CostModel::new(2, 2, 1)).unwrap();
    assert_eq!(l.distance(), 4);
    assert_eq!(
        l.edit_ops(),
        ops(&[
            (Substitution, 0, 0),
            (Substitution, 1, 1),
            (Substitution, 2, 2),
            (Match, 3, 3),
            (Substitution, 4, 4),
        ])
    );
    assert_eq!(
        l.render_matrix(),
        " -  -  w  o  r  l  d
 -  0  2  4  6  8 10
 h  2  1  3  5  7  9
 e  4  3  2  4  6  8
 l  6  5  4  3  4  6
 l  8  7  6  5  3  5
 o 10  9  7  7  5  4
"
    );
    assert_eq!(
        l.render_edit_ops(),
        "\
Type           i  j
--------------------
Substitution   0  0
Substitution   1  1
Substitution   2  2
Match          3  3
Substitution   4  4
"
    );
}

#[test]
fn empty_source() {
    let (a, b) = (chars(""), chars("abc"));
    let l = Levenshtein::unit(&a, &b).unwrap();
    assert_eq!(l.distance(), 3);
    assert_eq!(
        l.edit_ops(),
        ops(&[(Insertion, 0, 0), (Insertion, 0, 1), (Insertion, 0, 2)])
    );
    assert_eq!(l.matrix().rows(), 1);
    assert_eq!(l.render_matrix(), " -  -  a  b  c\n -  0  1  2  3\n");
}

#[test]
fn empty_target() {
    let (a, b) = (chars("abc"), chars(""));
    let l = Levenshtein::new(&a, &b, CostModel::new(1, 4, 1)).unwrap();
    assert_eq!(l.distance(), 12);
    assert_eq!(
        l.edit_ops(),
        ops(&[(Deletion, 0, 0), (Deletion, 1, 0), (Deletion, 2, 0)])
    );
    assert_eq!(l.replay(), Vec::<char>::new());
}

#[test]
fn both_empty() {
    let e: [u8; 0] = [];
    let l = Levenshtein::unit(&e, &e).unwrap();
    assert_eq!(l.distance(), 0);
    assert!(l.edit_ops().is_empty());
    assert!(l.cigar().is_empty());
    assert_eq!(l.render_matrix(), " -  -\n -  0\n");
}

#[test]
fn identical() {
    let a = chars("abc");
    for cm in [
        CostModel::new(1, 1, 1),
        CostModel::new(2, 2, 1),
        CostModel::new(0, 0, 0),
        CostModel::new(7, 3, 0),
    ] {
        let l = Levenshtein::new(&a, &a, cm).unwrap();
        assert_eq!(l.distance(), 0);
        assert_eq!(
            l.edit_ops(),
            ops(&[(Match, 0, 0), (Match, 1, 1), (Match, 2, 2)])
        );
    }
}

#[test]
fn kitten_sitting() {
    let (a, b) = (chars("kitten"), chars("sitting"));
    let l = Levenshtein::unit(&a, &b).unwrap();
    assert_eq!(l.distance(), 3);
    assert_eq!(l.cigar().to_string(), "1I1X3=1X1=");
    assert_eq!(l.replay(), b);
}

#[test]
fn zero_substitution_is_reported_as_match() {
    let (a, b) = (chars("abc"), chars("xbz"));
    let l = Levenshtein::new(&a, &b, CostModel::new(3, 5, 0)).unwrap();
    assert_eq!(l.distance(), 0);
    assert_eq!(l.cigar().to_string(), "3=");
    assert_eq!(l.replay(), b);
}

#[test]
fn invalid_cost() {
    let a = chars("a");
    assert_eq!(
        Levenshtein::new(&a, &a, CostModel::new(-1, 1, 1)).unwrap_err(),
        Error::InvalidCost {
            op: Insertion,
            cost: "-1".into()
        }
    );
    assert_eq!(
        Error::InvalidCost {
            op: Substitution,
            cost: "-0.5".into()
        }
        .to_string(),
        "Substitution cost must be non-negative, got -0.5"
    );
}

#[test]
fn words() {
    let a = "the quick brown fox".split_whitespace().collect::<Vec<_>>();
    let b = "the slow brown dog jumps".split_whitespace().collect::<Vec<_>>();
    let l = Levenshtein::unit(&a, &b).unwrap();
    assert_eq!(l.distance(), 3);
    assert_eq!(l.replay(), b);
    // `the` is inserted first, after which the diagonal from (0, 1) to (1, 2)
    // keeps the cost at 1 and is reported as a Match of `the` and `slow`.
    assert_eq!(l.cigar().to_string(), "1I1=1X1=1X");
    assert_eq!(l.edit_ops()[1], EditOp::new(Match, 0, 1));
    assert_eq!(l.cigar().verify(l.cost_model(), &a, &b), 3);
}

#[test]
fn float_costs() {
    let (a, b) = (chars("ab"), chars("ba"));
    let l = Levenshtein::new(&a, &b, CostModel::new(0.25, 0.5, 1.0)).unwrap();
    // Deleting and re-inserting one symbol is cheaper than two substitutions.
    assert_eq!(l.distance(), 0.75);
    assert_eq!(trace::script_cost(l.edit_ops(), l.cost_model()), 0.75);
    assert_eq!(l.replay(), b);
}

#[test]
fn render_views_match_display() {
    let (a, b) = (chars("ab"), chars("b"));
    let l = Levenshtein::new(&a, &b, CostModel::new(1, 1, 1)).unwrap();
    assert_eq!(l.render_matrix(), format!("{}", l.matrix_view()));
    assert_eq!(l.render_edit_ops(), format!("{}", l.edit_ops_view()));
    assert_eq!(
        l.render_edit_ops(),
        "Type           i  j\n--------------------\nDeletion       0  0\nMatch          1  0\n"
    );
}

#[test]
fn unit_costs() {
    let (a, b) = (chars("kitten"), chars("sitting"));
    let l = Levenshtein::unit(&a, &b).unwrap();
    assert_eq!(*l.cost_model(), CostModel::new(1, 1, 1));
    assert_eq!(
        l.edit_ops(),
        Levenshtein::new(&a, &b, CostModel::new(1, 1, 1))
            .unwrap()
            .edit_ops()
    );
}

#[test]
fn large_costs_do_not_wrap() {
    let big = 1 << 30;
    let l = Levenshtein::new(b"a", b"b", CostModel::new(big, big, 1)).unwrap();
    assert_eq!(l.distance(), 1);
    assert_eq!(l.edit_ops(), ops(&[(Substitution, 0, 0)]));

    let half = i32::MAX / 2;
    assert_eq!(
        Levenshtein::new(b"abc", b"xyz", CostModel::new(half, half, half)).unwrap_err(),
        Error::CostOverflow { i: 3, j: 0 }
    );
    assert_eq!(
        distance_only(b"abc", b"xyz", &CostModel::new(half, 1, half)).unwrap_err(),
        Error::CostOverflow { i: 0, j: 3 }
    );
}

//! Property-based tests for building and rendering formulas.

use crate::{Formula, Side, Term};
use proptest::prelude::*;

// Short alphanumeric bodies, never containing a sign or '='
fn content() -> impl Strategy<Value = String> { "[a-z0-9]{1,4}" }

fn term() -> impl Strategy<Value = Term> {
    (prop_oneof![Just(1), Just(-1)], content())
        .prop_map(|(symbol, content)| Term::new(symbol, content))
}

fn terms(min: usize) -> impl Strategy<Value = Vec<Term>> {
    proptest::collection::vec(term(), min..6)
}

fn expected_side(terms: &[Term]) -> String {
    let mut buffer = String::new();

    for (i, term) in terms.iter().enumerate() {
        if term.symbol() == -1 {
            buffer.push('-');
        } else if i > 0 {
            buffer.push('+');
        }
        buffer.push_str(term.content());
    }

    buffer
}

fn positions(terms: &[Term]) -> Vec<usize> {
    terms.iter().map(Term::position).collect()
}

proptest! {
    #[test]
    fn rendering_matches_the_grammar(left in terms(1), right in terms(1)) {
        let should_be =
            format!("{}={}", expected_side(&left), expected_side(&right));
        let formula = Formula::new(left.clone(), right);

        let got = formula.render().unwrap();

        prop_assert_eq!(&got, &should_be);
        prop_assert_eq!(got.starts_with('-'), left[0].symbol() == -1);
        prop_assert!(!got.contains(' '));
        prop_assert_eq!(formula.render().unwrap(), got);
    }

    #[test]
    fn positions_after_add_are_contiguous(
        left in terms(0),
        extra in terms(0)
    ) {
        let mut formula = Formula::new(left.clone(), Vec::new());

        formula.add_terms(extra.clone(), Side::Left).unwrap();

        let side = formula.side(Side::Left);
        prop_assert_eq!(side.len(), left.len() + extra.len());
        prop_assert_eq!(positions(side), (0..side.len()).collect::<Vec<_>>());
        prop_assert!(formula.side(Side::Right).is_empty());
    }

    #[test]
    fn negative_indexes_match_their_positive_equivalents(
        left in terms(1),
        picks in proptest::collection::vec(any::<prop::sample::Index>(), 0..4)
    ) {
        let len = left.len();
        let positive: Vec<isize> =
            picks.iter().map(|p| p.index(len) as isize).collect();
        let negative: Vec<isize> =
            positive.iter().map(|&i| i - len as isize).collect();

        let mut a = Formula::new(left.clone(), Vec::new());
        let mut b = Formula::new(left, Vec::new());

        let dropped_a = a.drop_terms(positive, "left").unwrap();
        let dropped_b = b.drop_terms(negative, "left").unwrap();

        prop_assert_eq!(dropped_a, dropped_b);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn invalid_sides_leave_the_formula_untouched(
        left in terms(0),
        right in terms(0),
        extra in terms(1),
        side in "[a-z]{1,6}".prop_filter("must not be a real side", |s| {
            s != "left" && s != "right"
        })
    ) {
        let mut formula = Formula::new(left, right);
        let original = formula.clone();

        prop_assert!(formula.add_terms(extra, side.as_str()).is_err());
        prop_assert!(formula.drop_terms(vec![0, -1], side.as_str()).is_err());
        prop_assert_eq!(formula, original);
    }

    #[test]
    fn colliding_keyed_batches_are_atomic(
        keys in proptest::collection::hash_set(0usize..20, 1..6),
        fresh in 20usize..40
    ) {
        let existing: Vec<usize> = keys.iter().copied().collect();
        let mut formula = Formula::empty();
        formula
            .add_terms(existing.iter().map(|&k| Term::keyed(k, "+a")), "right")
            .unwrap();
        let original = formula.clone();

        let batch = vec![Term::keyed(fresh, "+b"), Term::keyed(existing[0], "-c")];

        prop_assert!(formula.add_terms(batch, "right").is_err());
        prop_assert_eq!(formula, original);
    }
}

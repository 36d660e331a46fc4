// skein-core - Property-based tests for equality and ordering
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Property-based tests for equality, ordering and arithmetic.
//!
//! Maps are ordered maps keyed by `SkeinVal`, so `Ord` must agree with
//! structural equality: `cmp` returns `Equal` exactly when `egal` holds.

mod common;

use std::cmp::Ordering;

use common::{SkeinVal, eval_all, eval_str, new_interp};
use proptest::prelude::*;

/// Scalar values with no identity semantics.
fn scalar() -> impl Strategy<Value = SkeinVal> {
    prop_oneof![
        Just(SkeinVal::Nil),
        any::<bool>().prop_map(SkeinVal::bool),
        (-50i64..50).prop_map(SkeinVal::int),
        (-50i64..50).prop_map(|n| SkeinVal::float(n as f64 / 2.0)),
        "[a-z]{0,4}".prop_map(|s| SkeinVal::string(&s)),
        "[a-z]{1,4}"
            .prop_filter("reserved literal", |s| !matches!(s.as_str(), "nil" | "true" | "false"))
            .prop_map(|s| SkeinVal::symbol(&s)),
    ]
}

/// Scalars and nested lists of them.
fn value() -> impl Strategy<Value = SkeinVal> {
    scalar().prop_recursive(3, 24, 4, |inner| {
        prop::collection::vec(inner, 0..4).prop_map(SkeinVal::list)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Equality is reflexive, including for NaN
    #[test]
    fn egal_is_reflexive(v in value()) {
        prop_assert!(v.egal(&v.clone()));
        prop_assert_eq!(v.cmp(&v), Ordering::Equal);
    }

    /// Equality is symmetric
    #[test]
    fn egal_is_symmetric(a in value(), b in value()) {
        prop_assert_eq!(a.egal(&b), b.egal(&a));
    }

    /// Ordering agrees with equality
    #[test]
    fn ord_agrees_with_egal(a in value(), b in value()) {
        prop_assert_eq!(a.cmp(&b) == Ordering::Equal, a.egal(&b));
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
    }

    /// Ints and floats with the same value are equal
    #[test]
    fn int_float_cross_equality(n in -1_000_000i64..1_000_000) {
        let i = SkeinVal::int(n);
        let f = SkeinVal::float(n as f64);
        prop_assert_eq!(&i, &f);
        prop_assert_eq!(i.cmp(&f), Ordering::Equal);
    }

    /// Above 2^53 an int equals a float only when the float holds it exactly
    #[test]
    fn large_int_float_equality_is_exact(n in (1i64 << 53)..i64::MAX, delta in -4i64..4) {
        let m = n.saturating_add(delta);
        let f = n as f64;
        let exact = f < 9_223_372_036_854_775_808.0 && f as i64 == m;
        prop_assert_eq!(SkeinVal::int(m).egal(&SkeinVal::float(f)), exact);
        prop_assert_eq!(SkeinVal::int(m).cmp(&SkeinVal::float(f)) == Ordering::Equal, exact);

        // Two ints equal to the same float are equal to each other
        if SkeinVal::int(n).egal(&SkeinVal::float(f)) && SkeinVal::int(m).egal(&SkeinVal::float(f)) {
            prop_assert_eq!(n, m);
        }
    }

    /// Int/float ordering agrees with exact comparison through i128
    #[test]
    fn int_float_order_is_exact(n in any::<i64>(), k in -(1i64 << 40)..(1i64 << 40)) {
        let f = (n as f64) + (k as f64);
        if f.is_finite() && f.abs() < 9.0e18 {
            let expected = (n as i128).cmp(&(f as i128)).then_with(|| {
                if f.fract() > 0.0 {
                    Ordering::Less
                } else if f.fract() < 0.0 {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            });
            prop_assert_eq!(SkeinVal::int(n).cmp(&SkeinVal::float(f)), expected);
            prop_assert_eq!(SkeinVal::float(f).cmp(&SkeinVal::int(n)), expected.reverse());
        }
    }

    /// Map construction does not depend on insertion order
    #[test]
    fn map_insertion_order_irrelevant(pairs in prop::collection::vec((0i64..20, 0i64..100), 0..8)) {
        let mut seen = std::collections::BTreeSet::new();
        let pairs: Vec<(SkeinVal, SkeinVal)> = pairs
            .into_iter()
            .filter(|(k, _)| seen.insert(*k))
            .map(|(k, v)| (SkeinVal::int(k), SkeinVal::int(v)))
            .collect();
        let mut reversed = pairs.clone();
        reversed.reverse();
        prop_assert_eq!(SkeinVal::map(pairs), SkeinVal::map(reversed));
    }

    /// Printing then reading a value from inside the language gives an equal value
    #[test]
    fn pr_str_read_string_round_trip(v in value()) {
        let interp = new_interp();
        interp.env().set(skein_core::Symbol::new("v"), v);
        let result = eval_all("(= v (read-string (pr-str v)))", &interp).unwrap();
        prop_assert_eq!(result, SkeinVal::bool(true));
    }

    /// Integer addition agrees with checked i64 addition
    #[test]
    fn addition_matches_i64(a in any::<i64>(), b in any::<i64>()) {
        let result = eval_str(&format!("(+ {} {})", a, b));
        match a.checked_add(b) {
            Some(sum) => prop_assert_eq!(result.unwrap(), SkeinVal::int(sum)),
            None => prop_assert!(result.unwrap_err().contains("Integer overflow")),
        }
    }

    /// Integer division truncates toward zero
    #[test]
    fn division_truncates(a in -10_000i64..10_000, b in 1i64..100) {
        let result = eval_str(&format!("(/ {} {})", a, b)).unwrap();
        prop_assert_eq!(result, SkeinVal::int(a / b));
    }

    /// count agrees with the number of list elements
    #[test]
    fn count_matches_length(items in prop::collection::vec(-100i64..100, 0..20)) {
        let src = format!(
            "(count (list {}))",
            items.iter().map(|n| n.to_string()).collect::<Vec<_>>().join(" ")
        );
        prop_assert_eq!(eval_str(&src).unwrap(), SkeinVal::int(items.len() as i64));
    }
}

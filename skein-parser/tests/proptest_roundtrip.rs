// skein-parser - Property-based tests for print/read round trips
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Property-based tests for the reader and printer.
//!
//! For literal values, reading the readable printed form must yield a value
//! equal to the original.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use skein_parser::{KeywordTable, SkeinVal, pr_str, read_str, tokenize};

fn round_trip(val: &SkeinVal, table: &KeywordTable) -> SkeinVal {
    let printed = pr_str(val, true);
    read_str(&printed, table)
        .unwrap_or_else(|e| panic!("failed to re-read {:?}: {}", printed, e))
        .unwrap_or_else(|| panic!("no form in {:?}", printed))
}

/// Symbol names the reader will not mistake for numbers or literals.
fn symbol_name() -> impl Strategy<Value = String> {
    "[a-z*!?<>=][a-z0-9*!?<>=-]{0,10}"
        .prop_filter("reserved literal", |s| !matches!(s.as_str(), "nil" | "true" | "false"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn int_round_trip(n in any::<i64>()) {
        let table = KeywordTable::new();
        let val = SkeinVal::int(n);
        prop_assert_eq!(round_trip(&val, &table), val);
    }

    #[test]
    fn float_round_trip(n in any::<f64>()) {
        let table = KeywordTable::new();
        let val = SkeinVal::float(n);
        let back = round_trip(&val, &table);
        prop_assert!(matches!(back, SkeinVal::Float(_)));
        prop_assert_eq!(back, val);
    }

    #[test]
    fn string_round_trip(s in "[ -~\n\t]{0,40}") {
        let table = KeywordTable::new();
        let val = SkeinVal::string(&s);
        prop_assert_eq!(round_trip(&val, &table), val);
    }

    #[test]
    fn symbol_round_trip(name in symbol_name()) {
        let table = KeywordTable::new();
        let val = SkeinVal::symbol(&name);
        prop_assert_eq!(round_trip(&val, &table), val);
    }

    #[test]
    fn keyword_round_trip(name in symbol_name()) {
        let table = KeywordTable::new();
        let val = SkeinVal::keyword(table.intern(&name));
        prop_assert_eq!(round_trip(&val, &table), val);
    }

    #[test]
    fn list_of_ints_round_trip(items in prop::collection::vec(any::<i64>(), 0..10)) {
        let table = KeywordTable::new();
        let val = SkeinVal::list(items.into_iter().map(SkeinVal::int).collect());
        prop_assert_eq!(round_trip(&val, &table), val);
    }

    /// Tokenizing never drops or invents non-whitespace characters outside
    /// of comments.
    #[test]
    fn tokens_cover_input(words in prop::collection::vec("[a-z0-9]{1,5}", 0..8)) {
        let source = words.join(", ");
        prop_assert_eq!(tokenize(&source), words);
    }
}

#[test]
fn literal_round_trips() {
    let table = KeywordTable::new();
    for val in [SkeinVal::Nil, SkeinVal::Bool(true), SkeinVal::Bool(false)] {
        assert_eq!(round_trip(&val, &table), val);
    }
}

#[test]
fn non_finite_float_round_trips() {
    let table = KeywordTable::new();
    for n in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
        let val = SkeinVal::float(n);
        assert_eq!(round_trip(&val, &table), val);
    }

    let huge = read_str("1e999", &table).unwrap().unwrap();
    assert_eq!(pr_str(&huge, true), "##Inf");
    assert_eq!(round_trip(&huge, &table), huge);
}

// skein-core - Numeric integration tests
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Integration tests for arithmetic, comparison and numeric printing.

mod common;
use common::*;

#[test]
fn test_arithmetic() {
    assert_eval!("(+ 1 2)", SkeinVal::int(3));
    assert_eval!("(+ 5 (* 2 3))", SkeinVal::int(11));
    assert_eval!("(- (+ 5 (* 2 3)) 3)", SkeinVal::int(8));
    assert_eval!("(/ (- (+ 5 (* 2 3)) 3) 4)", SkeinVal::int(2));
    assert_eval!("(/ (- (+ 515 (* 87 311)) 302) 27)", SkeinVal::int(1010));
    assert_eval!("(* -3 6)", SkeinVal::int(-18));
}

#[test]
fn test_variadic_identities() {
    assert_eval!("(+)", SkeinVal::int(0));
    assert_eval!("(*)", SkeinVal::int(1));
    assert_eval!("(- 5)", SkeinVal::int(-5));
}

#[test]
fn test_float_arithmetic() {
    assert_prints!("(+ 1.5 1)", "2.5");
    assert_prints!("(* 2 0.5)", "1.0");
    assert_prints!("(/ 1 2.0)", "0.5");
    assert_prints!("(/ 1.0 0)", "##Inf");
    assert_prints!("(- (/ 1.0 0))", "##-Inf");
}

#[test]
fn test_integer_division_truncates() {
    assert_eval!("(/ 7 2)", SkeinVal::int(3));
    assert_eval!("(/ -7 2)", SkeinVal::int(-3));
}

#[test]
fn test_division_by_zero() {
    assert_eval_err_contains!("(/ 1 0)", "Division by zero");
}

#[test]
fn test_overflow() {
    assert_eval_err_contains!("(+ 9223372036854775807 1)", "Integer overflow in '+'");
    assert_eval_err_contains!("(* 4611686018427387904 2)", "overflow");
    assert_eval_err_contains!("(- -9223372036854775808 1)", "overflow");
}

#[test]
fn test_large_literal_reads_as_float() {
    assert_eval!("(number? 99999999999999999999)", SkeinVal::bool(true));
    assert_prints!("(type 99999999999999999999)", "\"float\"");
}

#[test]
fn test_comparison() {
    assert_eval!("(< 1 2 3)", SkeinVal::bool(true));
    assert_eval!("(< 1 3 2)", SkeinVal::bool(false));
    assert_eval!("(<= 1 1 2)", SkeinVal::bool(true));
    assert_eval!("(> 3 2 1)", SkeinVal::bool(true));
    assert_eval!("(>= 2 2 3)", SkeinVal::bool(false));
    assert_eval!("(< 1 1.5)", SkeinVal::bool(true));
}

#[test]
fn test_numeric_equality() {
    assert_eval!("(= 1 1)", SkeinVal::bool(true));
    assert_eval!("(= 1 1.0)", SkeinVal::bool(true));
    assert_eval!("(= 1 2)", SkeinVal::bool(false));
    assert_eval!("(= 1 \"1\")", SkeinVal::bool(false));
}

#[test]
fn test_int_float_equality_beyond_f64_precision() {
    assert_prints!(
        "(list (= 9007199254740993 9007199254740992.0)
               (= 9007199254740992 9007199254740992.0)
               (= 9007199254740993 9007199254740992))",
        "(false true false)"
    );
    assert_eval!("(> 9007199254740993 9007199254740992.0)", SkeinVal::bool(true));
    assert_eval!("(< 9007199254740992.0 9007199254740993)", SkeinVal::bool(true));
    assert_prints!("(get {9007199254740992 :exact} 9007199254740992.0)", ":exact");
    assert_prints!("(get {9007199254740993 :off} 9007199254740992.0)", "nil");
}

#[test]
fn test_arithmetic_type_errors() {
    assert_eval_err_contains!("(+ 1 \"a\")", "+: expected number, got string");
    assert_eval_err_contains!("(< 1 nil)", "<: expected number, got nil");
}

#[test]
fn test_number_predicates() {
    assert_eval!("(number? 1)", SkeinVal::bool(true));
    assert_eval!("(number? 1.5)", SkeinVal::bool(true));
    assert_eval!("(number? \"1\")", SkeinVal::bool(false));
    assert_prints!("(type 1)", "\"int\"");
    assert_prints!("(type 1.5)", "\"float\"");
}

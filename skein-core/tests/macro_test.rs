// skein-core - Macro integration tests
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Integration tests for defmacro!, macroexpand and macro?.

mod common;
use common::*;

const UNLESS: &str = "(defmacro! unless (fn* (pred a b) `(if ~pred ~b ~a)))";

#[test]
fn test_defmacro_unless() {
    assert_eval!(&format!("{} (unless false 7 8)", UNLESS), SkeinVal::int(7));
    assert_eval!(&format!("{} (unless true 7 8)", UNLESS), SkeinVal::int(8));
}

#[test]
fn test_macro_arguments_are_unevaluated() {
    // The untaken branch is never evaluated
    assert_eval!(
        &format!("{} (unless true (undefined-thing) 8)", UNLESS),
        SkeinVal::int(8)
    );
}

#[test]
fn test_macroexpand() {
    assert_prints!(
        &format!("{} (macroexpand (unless false 42 nil))", UNLESS),
        "(if false nil 42)"
    );
}

#[test]
fn test_two_argument_unless() {
    let src = "(defmacro! unless (fn* (test body) (list 'if test nil body)))";
    assert_eval!(&format!("{} (unless false 42)", src), SkeinVal::int(42));
    assert_eval!(&format!("{} (unless true 42)", src), SkeinVal::Nil);
    assert_prints!(
        &format!("{} (macroexpand (unless false 42))", src),
        "(if false nil 42)"
    );
}

#[test]
fn test_macroexpand_non_macro_is_identity() {
    assert_prints!("(macroexpand (+ 1 2))", "(+ 1 2)");
    assert_prints!("(macroexpand 5)", "5");
}

#[test]
fn test_macroexpand_repeats_until_fixed_point() {
    let src = "(defmacro! one (fn* () 1))
               (defmacro! two (fn* () '(one)))
               (macroexpand (two))";
    assert_prints!(src, "1");
}

#[test]
fn test_macro_expanding_to_macro_call_evaluates() {
    let src = format!(
        "{} (defmacro! when-not (fn* (p x) `(unless ~p ~x nil))) (when-not false 5)",
        UNLESS
    );
    assert_eval!(src.as_str(), SkeinVal::int(5));
}

#[test]
fn test_macro_predicates() {
    let src = format!("{} (list (macro? unless) (fn? unless) (fn? +))", UNLESS);
    assert_prints!(src.as_str(), "(true false true)");
    assert_prints!(&format!("{} unless", UNLESS), "#<macro>");
}

#[test]
fn test_defmacro_does_not_mark_original() {
    let src = "(def! f (fn* (x) x)) (defmacro! m f) (list (fn? f) (macro? m))";
    assert_prints!(src, "(true true)");
}

#[test]
fn test_variadic_macro() {
    let src = "(defmacro! my-do (fn* (& forms) `(do ~@forms)))
               (my-do (def! a 1) (def! b 2) (+ a b))";
    assert_eval!(src, SkeinVal::int(3));
}

#[test]
fn test_macro_in_local_scope() {
    // A let* binding shadowing a macro name makes it an ordinary call
    let src = format!("{} (let* (unless list) (unless 1 2 3))", UNLESS);
    assert_prints!(src.as_str(), "(1 2 3)");
}

#[test]
fn test_defmacro_requires_function() {
    assert_eval_err_contains!("(defmacro! m 5)", "expected fn");
}

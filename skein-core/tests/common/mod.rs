// skein-core - Common test utilities
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Shared test helpers and utilities for Skein integration tests.
//!
//! # Usage
//!
//! In your test file, add:
//! ```ignore
//! mod common;
//! use common::*;
//! ```
//!
//! # Available Helpers
//!
//! - [`new_interp`] - Create an interpreter with builtins and bootstrap
//! - [`eval_str`] - Evaluate every form of a string in a fresh interpreter
//! - [`eval_all`] - Evaluate every form of a string in an existing interpreter
//! - [`eval_to_string`] - Evaluate in a fresh interpreter and print readably
//!
//! # Macros
//!
//! - [`assert_eval!`] - Assert that code evaluates to an expected value
//! - [`assert_prints!`] - Assert the readable printed form of the result
//! - [`assert_eval_err!`] - Assert that code produces an error
//! - [`assert_eval_err_contains!`] - Assert an error message substring

#![allow(dead_code)]

// Re-export common types for convenience
pub use skein_core::{Env, Error, Interpreter};
#[allow(unused_imports)]
pub use skein_parser::{KeywordTable, SkeinVal, Symbol, pr_str};

/// Create a fresh interpreter.
///
/// # Panics
///
/// Panics if the bootstrap fails to load (should never happen).
#[must_use]
pub fn new_interp() -> Interpreter {
    Interpreter::new().expect("interpreter should start")
}

/// Evaluate every form in `s` in a fresh interpreter.
///
/// # Returns
///
/// Returns the value of the last form, or an error message string.
#[must_use]
pub fn eval_str(s: &str) -> Result<SkeinVal, String> {
    eval_all(s, &new_interp())
}

/// Evaluate every form in `s` in the given interpreter.
///
/// This is useful when definitions must persist across several calls.
///
/// # Returns
///
/// Returns the value of the last form, or an error message string.
#[must_use]
pub fn eval_all(s: &str, interp: &Interpreter) -> Result<SkeinVal, String> {
    interp.eval_all(s).map_err(|e| e.to_string())
}

/// Evaluate `s` in a fresh interpreter and print the result readably.
///
/// Comparing printed forms avoids building expected keywords by hand, since
/// keywords are only equal within one interpreter's table.
#[must_use]
pub fn eval_to_string(s: &str) -> Result<String, String> {
    eval_str(s).map(|v| pr_str(&v, true))
}

/// Assert that evaluating `input` produces the expected value.
///
/// # Example
///
/// ```ignore
/// assert_eval!("(+ 1 2)", SkeinVal::int(3));
/// ```
#[macro_export]
macro_rules! assert_eval {
    ($input:expr, $expected:expr) => {
        let result = $crate::common::eval_str($input);
        assert!(
            result.is_ok(),
            "Failed to evaluate '{}': {:?}",
            $input,
            result.err()
        );
        assert_eq!(
            result.unwrap(),
            $expected,
            "Evaluation of '{}' did not match expected",
            $input
        );
    };
}

/// Assert that evaluating `input` prints as `expected` in readable mode.
///
/// # Example
///
/// ```ignore
/// assert_prints!("(list 1 :a)", "(1 :a)");
/// ```
#[macro_export]
macro_rules! assert_prints {
    ($input:expr, $expected:expr) => {
        let result = $crate::common::eval_to_string($input);
        assert!(
            result.is_ok(),
            "Failed to evaluate '{}': {:?}",
            $input,
            result.err()
        );
        assert_eq!(
            result.unwrap(),
            $expected,
            "Printed result of '{}' did not match expected",
            $input
        );
    };
}

/// Assert that evaluating `input` produces an error.
///
/// # Example
///
/// ```ignore
/// assert_eval_err!("(+ 1 :not-a-number)");
/// ```
#[macro_export]
macro_rules! assert_eval_err {
    ($input:expr) => {
        let result = $crate::common::eval_str($input);
        assert!(
            result.is_err(),
            "Expected error for '{}' but got {:?}",
            $input,
            result.ok()
        );
    };
}

/// Assert that evaluating `input` produces an error containing `pattern`.
///
/// # Example
///
/// ```ignore
/// assert_eval_err_contains!("(/ 1 0)", "division by zero");
/// ```
#[macro_export]
macro_rules! assert_eval_err_contains {
    ($input:expr, $pattern:expr) => {
        let result = $crate::common::eval_str($input);
        assert!(
            result.is_err(),
            "Expected error for '{}' but got {:?}",
            $input,
            result.ok()
        );
        let err_msg = result.unwrap_err();
        assert!(
            err_msg.to_lowercase().contains(&$pattern.to_lowercase()),
            "Error message '{}' does not contain '{}'",
            err_msg,
            $pattern
        );
    };
}

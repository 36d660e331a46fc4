// skein-core - Comparison built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Comparison operations: =, <, <=, >, >=

use std::cmp::Ordering;

use skein_parser::SkeinVal;

use super::compare_numbers;
use crate::error::{Error, Result};

/// (= x & more) - structural equality of every adjacent pair
pub(crate) fn builtin_eq(args: &[SkeinVal]) -> Result<SkeinVal> {
    if args.is_empty() {
        return Err(Error::arity_at_least("=", 1, 0));
    }
    Ok(SkeinVal::bool(args.windows(2).all(|pair| pair[0] == pair[1])))
}

/// Check that every adjacent pair of numbers satisfies `accept`.
///
/// All arguments are type checked even after the chain has failed. A NaN
/// operand makes the chain false.
fn numeric_chain(
    name: &'static str,
    args: &[SkeinVal],
    accept: fn(Ordering) -> bool,
) -> Result<SkeinVal> {
    if args.is_empty() {
        return Err(Error::arity_at_least(name, 1, 0));
    }
    if let [only] = args
        && !matches!(only, SkeinVal::Int(_) | SkeinVal::Float(_))
    {
        return Err(Error::type_error_in(name, "number", only.type_name()));
    }
    let mut holds = true;
    for pair in args.windows(2) {
        let ordering = compare_numbers(name, &pair[0], &pair[1])?;
        holds &= ordering.is_some_and(accept);
    }
    Ok(SkeinVal::bool(holds))
}

/// (< x & more) - strictly increasing
pub(crate) fn builtin_lt(args: &[SkeinVal]) -> Result<SkeinVal> {
    numeric_chain("<", args, Ordering::is_lt)
}

/// (<= x & more) - non-decreasing
pub(crate) fn builtin_le(args: &[SkeinVal]) -> Result<SkeinVal> {
    numeric_chain("<=", args, Ordering::is_le)
}

/// (> x & more) - strictly decreasing
pub(crate) fn builtin_gt(args: &[SkeinVal]) -> Result<SkeinVal> {
    numeric_chain(">", args, Ordering::is_gt)
}

/// (>= x & more) - non-increasing
pub(crate) fn builtin_ge(args: &[SkeinVal]) -> Result<SkeinVal> {
    numeric_chain(">=", args, Ordering::is_ge)
}

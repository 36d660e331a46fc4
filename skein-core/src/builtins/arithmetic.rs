// skein-core - Arithmetic built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Arithmetic operations: +, -, *, /
//!
//! Integer arithmetic is checked; overflow is an error rather than a wrap.
//! Any float operand makes the result a float.

use skein_parser::SkeinVal;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy)]
enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl ArithOp {
    fn name(self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    fn from_val(op: ArithOp, val: &SkeinVal) -> Result<Self> {
        match val {
            SkeinVal::Int(n) => Ok(Number::Int(*n)),
            SkeinVal::Float(f) => Ok(Number::Float(*f)),
            other => Err(Error::type_error_in(op.name(), "number", other.type_name())),
        }
    }

    fn as_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Float(f) => f,
        }
    }

    fn into_val(self) -> SkeinVal {
        match self {
            Number::Int(n) => SkeinVal::Int(n),
            Number::Float(f) => SkeinVal::Float(f),
        }
    }
}

fn combine(op: ArithOp, a: Number, b: Number) -> Result<Number> {
    if let (Number::Int(x), Number::Int(y)) = (a, b) {
        let result = match op {
            ArithOp::Add => x.checked_add(y),
            ArithOp::Sub => x.checked_sub(y),
            ArithOp::Mul => x.checked_mul(y),
            ArithOp::Div => {
                if y == 0 {
                    return Err(Error::DivisionByZero);
                }
                // Truncates toward zero; only i64::MIN / -1 overflows
                x.checked_div(y)
            }
        };
        return result.map(Number::Int).ok_or(Error::IntegerOverflow {
            operation: op.name(),
        });
    }

    let (x, y) = (a.as_f64(), b.as_f64());
    Ok(Number::Float(match op {
        ArithOp::Add => x + y,
        ArithOp::Sub => x - y,
        ArithOp::Mul => x * y,
        ArithOp::Div => x / y,
    }))
}

/// Left fold of `op` over one or more numbers.
fn fold(op: ArithOp, first: &SkeinVal, rest: &[SkeinVal]) -> Result<SkeinVal> {
    let mut acc = Number::from_val(op, first)?;
    for arg in rest {
        acc = combine(op, acc, Number::from_val(op, arg)?)?;
    }
    Ok(acc.into_val())
}

/// (+ & nums) - sum, 0 with no arguments
pub(crate) fn builtin_add(args: &[SkeinVal]) -> Result<SkeinVal> {
    match args.split_first() {
        Some((first, rest)) => fold(ArithOp::Add, first, rest),
        None => Ok(SkeinVal::Int(0)),
    }
}

/// (- x & nums) - subtract, or negate a single argument
pub(crate) fn builtin_sub(args: &[SkeinVal]) -> Result<SkeinVal> {
    match args {
        [] => Err(Error::arity_at_least("-", 1, 0)),
        [x] => {
            let x = Number::from_val(ArithOp::Sub, x)?;
            Ok(combine(ArithOp::Sub, Number::Int(0), x)?.into_val())
        }
        [first, rest @ ..] => fold(ArithOp::Sub, first, rest),
    }
}

/// (* & nums) - product, 1 with no arguments
pub(crate) fn builtin_mul(args: &[SkeinVal]) -> Result<SkeinVal> {
    match args.split_first() {
        Some((first, rest)) => fold(ArithOp::Mul, first, rest),
        None => Ok(SkeinVal::Int(1)),
    }
}

/// (/ x & nums) - divide, or reciprocal of a single argument
pub(crate) fn builtin_div(args: &[SkeinVal]) -> Result<SkeinVal> {
    match args {
        [] => Err(Error::arity_at_least("/", 1, 0)),
        [x] => {
            let x = Number::from_val(ArithOp::Div, x)?;
            Ok(combine(ArithOp::Div, Number::Int(1), x)?.into_val())
        }
        [first, rest @ ..] => fold(ArithOp::Div, first, rest),
    }
}

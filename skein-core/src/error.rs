// skein-core - Error types for the Skein evaluator
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Error types for Skein evaluation.

use std::fmt;

use skein_parser::{ParseError, SkeinVal, Symbol};
use thiserror::Error;

/// Result type for Skein evaluation.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during reading or evaluation.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Reader failure
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Undefined symbol reference
    #[error("'{0}' not found")]
    UndefinedSymbol(Symbol),
    /// Type error - wrong type for an operation
    #[error("{}: expected {expected}, got {got}", .context.as_deref().unwrap_or("Type error"))]
    TypeError {
        expected: &'static str,
        got: &'static str,
        context: Option<String>,
    },
    /// Wrong number of arguments to a function
    #[error("Wrong number of arguments to '{}': expected {expected}, got {got}", .name.as_deref().unwrap_or("fn"))]
    Arity {
        name: Option<String>,
        expected: AritySpec,
        got: usize,
    },
    /// Attempted to call something that isn't callable
    #[error("Cannot call value: {0}")]
    NotCallable(String),
    /// Invalid special form syntax
    #[error("Invalid '{form}' syntax: {message}")]
    InvalidSyntax { form: &'static str, message: String },
    /// Division by zero
    #[error("Division by zero")]
    DivisionByZero,
    /// Index out of bounds
    #[error("Index {index} out of bounds for length {length}")]
    IndexOutOfBounds { index: i64, length: usize },
    /// Checked integer arithmetic overflowed
    #[error("Integer overflow in '{operation}'")]
    IntegerOverflow { operation: &'static str },
    /// File access failure
    #[error("IO error: {0}")]
    Io(String),
    /// Evaluation nested deeper than the configured limit
    #[error("Maximum evaluation depth ({0}) exceeded")]
    DepthExceeded(usize),
    /// User-thrown exception (via throw), carrying any value
    #[error("{0}")]
    Thrown(SkeinVal),
    /// Internal error - invariant violation
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Expected argument count for an arity error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AritySpec {
    Exact(usize),
    AtLeast(usize),
    Range(usize, usize),
}

impl fmt::Display for AritySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AritySpec::Exact(n) => write!(f, "{}", n),
            AritySpec::AtLeast(n) => write!(f, "at least {}", n),
            AritySpec::Range(min, max) => write!(f, "{} to {}", min, max),
        }
    }
}

impl Error {
    /// Create an arity error for exact arity with function name.
    pub fn arity_named(name: impl Into<String>, expected: usize, got: usize) -> Self {
        Error::Arity {
            name: Some(name.into()),
            expected: AritySpec::Exact(expected),
            got,
        }
    }

    /// Create an arity error for minimum arity with function name.
    pub fn arity_at_least(name: impl Into<String>, expected: usize, got: usize) -> Self {
        Error::Arity {
            name: Some(name.into()),
            expected: AritySpec::AtLeast(expected),
            got,
        }
    }

    /// Create an arity error for a bounded range with function name.
    pub fn arity_range(name: impl Into<String>, min: usize, max: usize, got: usize) -> Self {
        Error::Arity {
            name: Some(name.into()),
            expected: AritySpec::Range(min, max),
            got,
        }
    }

    /// Create a type error.
    pub fn type_error(expected: &'static str, got: &'static str) -> Self {
        Error::TypeError {
            expected,
            got,
            context: None,
        }
    }

    /// Create a type error with context.
    pub fn type_error_in(
        context: impl Into<String>,
        expected: &'static str,
        got: &'static str,
    ) -> Self {
        Error::TypeError {
            expected,
            got,
            context: Some(context.into()),
        }
    }

    /// Create an invalid syntax error.
    pub fn syntax(form: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidSyntax {
            form,
            message: message.into(),
        }
    }

    /// The value a `catch*` clause binds for this error.
    ///
    /// Thrown values are passed through untouched; every other error becomes
    /// its message string.
    pub fn into_value(self) -> SkeinVal {
        match self {
            Error::Thrown(val) => val,
            other => SkeinVal::string(&other.to_string()),
        }
    }
}

/// Check the argument count of a native function.
pub fn check_arity(name: &str, args: &[SkeinVal], expected: usize) -> Result<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(Error::arity_named(name, expected, args.len()))
    }
}

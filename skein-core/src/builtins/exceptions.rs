// skein-core - Exception built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Exceptions: throw

use skein_parser::SkeinVal;

use crate::error::{Error, Result, check_arity};

/// (throw value) - raise value as an exception for try*/catch*
pub(crate) fn builtin_throw(args: &[SkeinVal]) -> Result<SkeinVal> {
    check_arity("throw", args, 1)?;
    Err(Error::Thrown(args[0].clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throw_carries_value() {
        let err = builtin_throw(&[SkeinVal::int(42)]).unwrap_err();
        assert_eq!(err.into_value(), SkeinVal::int(42));
    }

    #[test]
    fn test_throw_arity() {
        assert!(matches!(builtin_throw(&[]), Err(Error::Arity { .. })));
    }
}

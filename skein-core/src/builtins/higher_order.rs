// skein-core - Higher-order built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Higher-order functions: apply, map

use skein_parser::SkeinVal;

use super::seq_items;
use crate::error::{Error, Result, check_arity};
use crate::eval::apply;

/// (apply f & args seq) - call f with args followed by the elements of seq
pub(crate) fn builtin_apply(args: &[SkeinVal]) -> Result<SkeinVal> {
    if args.len() < 2 {
        return Err(Error::arity_at_least("apply", 2, args.len()));
    }
    let func = &args[0];
    let (last, middle) = args[1..]
        .split_last()
        .ok_or_else(|| Error::Internal("apply: missing final argument".into()))?;

    let mut all_args = middle.to_vec();
    all_args.extend(seq_items("apply", last)?);
    apply(func, &all_args)
}

/// (map f seq) - list of (f x) for each element, in order
pub(crate) fn builtin_map(args: &[SkeinVal]) -> Result<SkeinVal> {
    check_arity("map", args, 2)?;
    let func = &args[0];
    let results = seq_items("map", &args[1])?
        .iter()
        .map(|item| apply(func, std::slice::from_ref(item)))
        .collect::<Result<Vec<_>>>()?;
    Ok(SkeinVal::list(results))
}

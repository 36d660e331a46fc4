// skein-core - Sequence built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Sequence operations: list, count, cons, concat, nth, first, rest, vec
//!
//! Nil behaves as the empty list everywhere a sequence is expected.

use im::Vector;
use skein_parser::SkeinVal;

use super::seq_items;
use crate::error::{Error, Result, check_arity};

/// (list & items) - also bound as `vector`
pub(crate) fn builtin_list(args: &[SkeinVal]) -> Result<SkeinVal> {
    Ok(SkeinVal::list(args.to_vec()))
}

/// (count coll) - number of elements; characters for strings
pub(crate) fn builtin_count(args: &[SkeinVal]) -> Result<SkeinVal> {
    check_arity("count", args, 1)?;
    let n = match &args[0] {
        SkeinVal::Nil => 0,
        SkeinVal::List(items, _) => items.len(),
        SkeinVal::Map(map, _) => map.len(),
        SkeinVal::String(s) => s.chars().count(),
        other => return Err(Error::type_error_in("count", "collection", other.type_name())),
    };
    Ok(SkeinVal::Int(n as i64))
}

/// (cons x seq) - new list with x in front
pub(crate) fn builtin_cons(args: &[SkeinVal]) -> Result<SkeinVal> {
    check_arity("cons", args, 2)?;
    let mut items = seq_items("cons", &args[1])?;
    items.push_front(args[0].clone());
    Ok(SkeinVal::list_from(items))
}

/// (concat & seqs) - all elements of the given lists, in order
pub(crate) fn builtin_concat(args: &[SkeinVal]) -> Result<SkeinVal> {
    let mut result = Vector::new();
    for arg in args {
        result.append(seq_items("concat", arg)?);
    }
    Ok(SkeinVal::list_from(result))
}

/// (nth seq index) - element at a zero-based index
pub(crate) fn builtin_nth(args: &[SkeinVal]) -> Result<SkeinVal> {
    check_arity("nth", args, 2)?;
    let items = seq_items("nth", &args[0])?;
    let idx = match &args[1] {
        SkeinVal::Int(n) => *n,
        other => return Err(Error::type_error_in("nth", "int", other.type_name())),
    };
    usize::try_from(idx)
        .ok()
        .and_then(|i| items.get(i).cloned())
        .ok_or(Error::IndexOutOfBounds {
            index: idx,
            length: items.len(),
        })
}

/// (first seq) - first element, or nil
pub(crate) fn builtin_first(args: &[SkeinVal]) -> Result<SkeinVal> {
    check_arity("first", args, 1)?;
    Ok(seq_items("first", &args[0])?
        .front()
        .cloned()
        .unwrap_or(SkeinVal::Nil))
}

/// (rest seq) - all but the first element; never nil
pub(crate) fn builtin_rest(args: &[SkeinVal]) -> Result<SkeinVal> {
    check_arity("rest", args, 1)?;
    let items = seq_items("rest", &args[0])?;
    if items.is_empty() {
        return Ok(SkeinVal::empty_list());
    }
    Ok(SkeinVal::list_from(items.skip(1)))
}

/// (vec seq) - the elements as a list, with metadata dropped
pub(crate) fn builtin_vec(args: &[SkeinVal]) -> Result<SkeinVal> {
    check_arity("vec", args, 1)?;
    Ok(SkeinVal::list_from(seq_items("vec", &args[0])?))
}

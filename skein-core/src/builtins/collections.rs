// skein-core - Map built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Map operations: hash-map, assoc, dissoc, get, contains?, keys, vals
//!
//! Maps are persistent; every operation returns a new map and leaves its
//! argument untouched. Nil is accepted wherever a map is read.

use im::OrdMap;
use skein_parser::SkeinVal;

use crate::error::{Error, Result, check_arity};

/// The entries of a map argument, treating nil as the empty map.
fn map_entries(name: &'static str, val: &SkeinVal) -> Result<OrdMap<SkeinVal, SkeinVal>> {
    match val {
        SkeinVal::Map(map, _) => Ok(map.clone()),
        SkeinVal::Nil => Ok(OrdMap::new()),
        other => Err(Error::type_error_in(name, "map", other.type_name())),
    }
}

fn insert_pairs(
    name: &'static str,
    mut map: OrdMap<SkeinVal, SkeinVal>,
    kvs: &[SkeinVal],
) -> Result<SkeinVal> {
    if !kvs.len().is_multiple_of(2) {
        return Err(Error::syntax(name, "requires an even number of key/value arguments"));
    }
    for pair in kvs.chunks(2) {
        map.insert(pair[0].clone(), pair[1].clone());
    }
    Ok(SkeinVal::Map(map, None))
}

/// (hash-map & kvs)
pub(crate) fn builtin_hash_map(args: &[SkeinVal]) -> Result<SkeinVal> {
    insert_pairs("hash-map", OrdMap::new(), args)
}

/// (assoc map & kvs) - later keys replace earlier ones
pub(crate) fn builtin_assoc(args: &[SkeinVal]) -> Result<SkeinVal> {
    let Some((map, kvs)) = args.split_first() else {
        return Err(Error::arity_at_least("assoc", 1, 0));
    };
    insert_pairs("assoc", map_entries("assoc", map)?, kvs)
}

/// (dissoc map & keys) - missing keys are ignored
pub(crate) fn builtin_dissoc(args: &[SkeinVal]) -> Result<SkeinVal> {
    let Some((map, keys)) = args.split_first() else {
        return Err(Error::arity_at_least("dissoc", 1, 0));
    };
    let mut map = map_entries("dissoc", map)?;
    for key in keys {
        map.remove(key);
    }
    Ok(SkeinVal::Map(map, None))
}

/// (get map key default?) - value at key, else default or nil
pub(crate) fn builtin_get(args: &[SkeinVal]) -> Result<SkeinVal> {
    if args.len() < 2 || args.len() > 3 {
        return Err(Error::arity_range("get", 2, 3, args.len()));
    }
    let default = args.get(2).cloned().unwrap_or(SkeinVal::Nil);
    Ok(map_entries("get", &args[0])?
        .get(&args[1])
        .cloned()
        .unwrap_or(default))
}

/// (contains? map key)
pub(crate) fn builtin_contains_p(args: &[SkeinVal]) -> Result<SkeinVal> {
    check_arity("contains?", args, 2)?;
    Ok(SkeinVal::bool(
        map_entries("contains?", &args[0])?.contains_key(&args[1]),
    ))
}

/// (keys map) - keys in map order
pub(crate) fn builtin_keys(args: &[SkeinVal]) -> Result<SkeinVal> {
    check_arity("keys", args, 1)?;
    let map = map_entries("keys", &args[0])?;
    Ok(SkeinVal::list(map.keys().cloned().collect()))
}

/// (vals map) - values in key order
pub(crate) fn builtin_vals(args: &[SkeinVal]) -> Result<SkeinVal> {
    check_arity("vals", args, 1)?;
    let map = map_entries("vals", &args[0])?;
    Ok(SkeinVal::list(map.values().cloned().collect()))
}

// skein-core - Predicate built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Type predicates and `type`.

use skein_parser::SkeinVal;

use crate::error::{Error, Result, check_arity};

/// The single argument of a one-argument builtin.
fn single<'a>(name: &str, args: &'a [SkeinVal]) -> Result<&'a SkeinVal> {
    check_arity(name, args, 1)?;
    Ok(&args[0])
}

macro_rules! predicate {
    ($fn_name:ident, $name:literal, $pat:pat) => {
        #[doc = concat!("(", $name, " x)")]
        pub(crate) fn $fn_name(args: &[SkeinVal]) -> Result<SkeinVal> {
            Ok(SkeinVal::bool(matches!(single($name, args)?, $pat)))
        }
    };
}

predicate!(builtin_nil_p, "nil?", SkeinVal::Nil);
predicate!(builtin_true_p, "true?", SkeinVal::Bool(true));
predicate!(builtin_false_p, "false?", SkeinVal::Bool(false));
predicate!(builtin_string_p, "string?", SkeinVal::String(_));
predicate!(builtin_number_p, "number?", SkeinVal::Int(_) | SkeinVal::Float(_));
predicate!(builtin_symbol_p, "symbol?", SkeinVal::Symbol(..));
predicate!(builtin_keyword_p, "keyword?", SkeinVal::Keyword(_));
predicate!(builtin_list_p, "list?", SkeinVal::List(..));
predicate!(builtin_sequential_p, "sequential?", SkeinVal::List(..));
predicate!(builtin_map_p, "map?", SkeinVal::Map(..));
predicate!(builtin_atom_p, "atom?", SkeinVal::Atom(_));

/// (fn? x) - true for functions that are not macros
pub(crate) fn builtin_fn_p(args: &[SkeinVal]) -> Result<SkeinVal> {
    Ok(SkeinVal::bool(
        matches!(single("fn?", args)?, SkeinVal::Fn(f) if !f.is_macro),
    ))
}

/// (macro? x)
pub(crate) fn builtin_macro_p(args: &[SkeinVal]) -> Result<SkeinVal> {
    Ok(SkeinVal::bool(
        matches!(single("macro?", args)?, SkeinVal::Fn(f) if f.is_macro),
    ))
}

/// (empty? coll) - true for nil and for empty lists, maps and strings
pub(crate) fn builtin_empty_p(args: &[SkeinVal]) -> Result<SkeinVal> {
    let empty = match single("empty?", args)? {
        SkeinVal::Nil => true,
        SkeinVal::List(items, _) => items.is_empty(),
        SkeinVal::Map(map, _) => map.is_empty(),
        SkeinVal::String(s) => s.is_empty(),
        other => return Err(Error::type_error_in("empty?", "collection", other.type_name())),
    };
    Ok(SkeinVal::bool(empty))
}

/// (type x) - the type name of x as a string
pub(crate) fn builtin_type(args: &[SkeinVal]) -> Result<SkeinVal> {
    Ok(SkeinVal::string(single("type", args)?.type_name()))
}

// skein-core - Built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Built-in functions for Skein.
//!
//! Every primitive is an ordinary native function bound in the root
//! environment, so it can be shadowed, passed around and applied like any
//! other value.

// Atoms compare by identity, so their interior mutability never affects map keys
#![allow(clippy::mutable_key_type)]

mod arithmetic;
mod atoms;
mod collections;
mod comparison;
mod exceptions;
mod higher_order;
mod io;
mod metadata;
mod predicates;
mod sequences;
mod strings;

use std::cmp::Ordering;

use im::Vector;
use skein_parser::{KeywordTable, SkeinFn, SkeinVal, Symbol};

use crate::env::Env;
use crate::error::{Error, Result};
use crate::eval::make_native_fn;

use arithmetic::{builtin_add, builtin_div, builtin_mul, builtin_sub};
use atoms::{builtin_atom, builtin_deref, builtin_reset, builtin_swap};
use collections::{
    builtin_assoc, builtin_contains_p, builtin_dissoc, builtin_get, builtin_hash_map,
    builtin_keys, builtin_vals,
};
use comparison::{builtin_eq, builtin_ge, builtin_gt, builtin_le, builtin_lt};
use exceptions::builtin_throw;
use higher_order::{builtin_apply, builtin_map};
use io::{builtin_println, builtin_pr_str, builtin_prn, builtin_slurp, builtin_str, read_string};
use metadata::{builtin_meta, builtin_with_meta};
use predicates::{
    builtin_atom_p, builtin_empty_p, builtin_false_p, builtin_fn_p, builtin_keyword_p,
    builtin_list_p, builtin_macro_p, builtin_map_p, builtin_nil_p, builtin_number_p,
    builtin_sequential_p, builtin_string_p, builtin_symbol_p, builtin_true_p, builtin_type,
};
use sequences::{
    builtin_concat, builtin_cons, builtin_count, builtin_first, builtin_list, builtin_nth,
    builtin_rest, builtin_vec,
};
use strings::{builtin_symbol, make_keyword};

/// Register all built-in functions in the given environment.
///
/// `keywords` is the table `keyword` and `read-string` intern into; it must be
/// the same table the interpreter reads source with, or keywords produced at
/// runtime will not equal keywords written in source.
pub fn register_builtins(env: &Env, keywords: &KeywordTable) {
    // Arithmetic
    env.define_native("+", builtin_add);
    env.define_native("-", builtin_sub);
    env.define_native("*", builtin_mul);
    env.define_native("/", builtin_div);

    // Comparison
    env.define_native("=", builtin_eq);
    env.define_native("<", builtin_lt);
    env.define_native("<=", builtin_le);
    env.define_native(">", builtin_gt);
    env.define_native(">=", builtin_ge);

    // Predicates
    env.define_native("nil?", builtin_nil_p);
    env.define_native("true?", builtin_true_p);
    env.define_native("false?", builtin_false_p);
    env.define_native("string?", builtin_string_p);
    env.define_native("number?", builtin_number_p);
    env.define_native("symbol?", builtin_symbol_p);
    env.define_native("keyword?", builtin_keyword_p);
    env.define_native("fn?", builtin_fn_p);
    env.define_native("macro?", builtin_macro_p);
    env.define_native("list?", builtin_list_p);
    env.define_native("sequential?", builtin_sequential_p);
    env.define_native("map?", builtin_map_p);
    env.define_native("atom?", builtin_atom_p);
    env.define_native("empty?", builtin_empty_p);
    env.define_native("type", builtin_type);

    // Sequences
    env.define_native("list", builtin_list);
    env.define_native("vector", builtin_list);
    env.define_native("count", builtin_count);
    env.define_native("cons", builtin_cons);
    env.define_native("concat", builtin_concat);
    env.define_native("nth", builtin_nth);
    env.define_native("first", builtin_first);
    env.define_native("rest", builtin_rest);
    env.define_native("vec", builtin_vec);

    // Maps
    env.define_native("hash-map", builtin_hash_map);
    env.define_native("assoc", builtin_assoc);
    env.define_native("dissoc", builtin_dissoc);
    env.define_native("get", builtin_get);
    env.define_native("contains?", builtin_contains_p);
    env.define_native("keys", builtin_keys);
    env.define_native("vals", builtin_vals);

    // Symbols and keywords
    env.define_native("symbol", builtin_symbol);
    let table = keywords.clone();
    env.define_native("keyword", move |args| make_keyword(&table, args));

    // I/O and strings
    env.define_native("pr-str", builtin_pr_str);
    env.define_native("str", builtin_str);
    env.define_native("prn", builtin_prn);
    env.define_native("println", builtin_println);
    let table = keywords.clone();
    env.define_native("read-string", move |args| read_string(&table, args));
    env.define_native("slurp", builtin_slurp);

    // Atoms
    env.define_native("atom", builtin_atom);
    env.define_native("deref", builtin_deref);
    env.define_native("reset!", builtin_reset);
    env.define_native("swap!", builtin_swap);

    // Higher-order
    env.define_native("apply", builtin_apply);
    env.define_native("map", builtin_map);

    // Metadata
    env.define_native("meta", builtin_meta);
    env.define_native("with-meta", builtin_with_meta);

    // Exceptions
    env.define_native("throw", builtin_throw);
}

/// Extension trait for registering native functions.
pub trait EnvExt {
    fn define_native(
        &self,
        name: &'static str,
        func: impl Fn(&[SkeinVal]) -> Result<SkeinVal> + 'static,
    );
}

impl EnvExt for Env {
    fn define_native(
        &self,
        name: &'static str,
        func: impl Fn(&[SkeinVal]) -> Result<SkeinVal> + 'static,
    ) {
        let native = make_native_fn(name, func);
        self.set(Symbol::new(name), SkeinVal::Fn(SkeinFn::native(native)));
    }
}

// ============================================================================
// Shared helpers
// ============================================================================

/// Compare two numbers. Mixed int/float pairs compare exactly, without
/// rounding the int through `f64`.
///
/// Returns `None` when either side is NaN.
pub(crate) fn compare_numbers(
    name: &'static str,
    a: &SkeinVal,
    b: &SkeinVal,
) -> Result<Option<Ordering>> {
    match (a, b) {
        (SkeinVal::Int(x), SkeinVal::Int(y)) => Ok(Some(x.cmp(y))),
        (SkeinVal::Int(_), SkeinVal::Float(f)) | (SkeinVal::Float(f), SkeinVal::Int(_)) => {
            Ok((!f.is_nan()).then(|| a.cmp(b)))
        }
        (SkeinVal::Float(x), SkeinVal::Float(y)) => Ok(x.partial_cmp(y)),
        (SkeinVal::Int(_) | SkeinVal::Float(_), other) | (other, _) => {
            Err(Error::type_error_in(name, "number", other.type_name()))
        }
    }
}

/// The elements of a list, treating nil as the empty list.
pub(crate) fn seq_items(name: &'static str, val: &SkeinVal) -> Result<Vector<SkeinVal>> {
    match val {
        SkeinVal::List(items, _) => Ok(items.clone()),
        SkeinVal::Nil => Ok(Vector::new()),
        other => Err(Error::type_error_in(name, "list", other.type_name())),
    }
}

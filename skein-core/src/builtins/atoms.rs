// skein-core - Atom built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Atom operations: atom, deref, reset!, swap!

use skein_parser::{SkeinAtom, SkeinVal};

use crate::error::{Error, Result, check_arity};
use crate::eval::apply;

fn expect_atom<'a>(name: &'static str, val: &'a SkeinVal) -> Result<&'a SkeinAtom> {
    match val {
        SkeinVal::Atom(atom) => Ok(atom),
        other => Err(Error::type_error_in(name, "atom", other.type_name())),
    }
}

/// (atom x) - new mutable reference holding x
pub(crate) fn builtin_atom(args: &[SkeinVal]) -> Result<SkeinVal> {
    check_arity("atom", args, 1)?;
    Ok(SkeinVal::atom(args[0].clone()))
}

/// (deref atom) - current value; also written @atom
pub(crate) fn builtin_deref(args: &[SkeinVal]) -> Result<SkeinVal> {
    check_arity("deref", args, 1)?;
    Ok(expect_atom("deref", &args[0])?.deref())
}

/// (reset! atom newval) - replace the value, returns newval
pub(crate) fn builtin_reset(args: &[SkeinVal]) -> Result<SkeinVal> {
    check_arity("reset!", args, 2)?;
    Ok(expect_atom("reset!", &args[0])?.reset(args[1].clone()))
}

/// (swap! atom f & args) - set the value to (f current args...), returns it
///
/// The atom is untouched if `f` fails.
pub(crate) fn builtin_swap(args: &[SkeinVal]) -> Result<SkeinVal> {
    if args.len() < 2 {
        return Err(Error::arity_at_least("swap!", 2, args.len()));
    }
    let atom = expect_atom("swap!", &args[0])?;
    let mut call_args = Vec::with_capacity(args.len() - 1);
    call_args.push(atom.deref());
    call_args.extend_from_slice(&args[2..]);
    // The borrow is released before f runs, so f may read the atom itself
    let new_val = apply(&args[1], &call_args)?;
    Ok(atom.reset(new_val))
}

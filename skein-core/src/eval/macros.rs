// skein-core - Macro expansion
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Macro expansion.
//!
//! A form is a macro call when it is a list whose head symbol is bound to a
//! function flagged as a macro. Expansion applies that function to the
//! unevaluated tail and repeats until the result is no longer a macro call.

use skein_parser::{SkeinFn, SkeinVal};
use tracing::trace;

use super::{Step, apply};
use crate::env::Env;
use crate::error::{Error, Result};

/// The macro function a form would invoke, if any.
fn macro_fn(ast: &SkeinVal, env: &Env) -> Option<SkeinFn> {
    let SkeinVal::List(items, _) = ast else {
        return None;
    };
    let SkeinVal::Symbol(head, _) = items.front()? else {
        return None;
    };
    match env.lookup(head)? {
        SkeinVal::Fn(f) if f.is_macro => Some(f),
        _ => None,
    }
}

/// True if `ast` is a call to a macro bound in `env`.
pub fn is_macro_call(ast: &SkeinVal, env: &Env) -> bool {
    macro_fn(ast, env).is_some()
}

/// Expand `ast` until it is no longer a macro call.
pub fn macroexpand(mut ast: SkeinVal, env: &Env) -> Result<SkeinVal> {
    while let Some(f) = macro_fn(&ast, env) {
        let args: Vec<SkeinVal> = match &ast {
            SkeinVal::List(items, _) => items.iter().skip(1).cloned().collect(),
            _ => Vec::new(),
        };
        trace!(form = %ast, "expanding macro");
        ast = apply(&SkeinVal::Fn(f), &args)?;
    }
    Ok(ast)
}

/// (macroexpand form) - expand without evaluating
pub(crate) fn eval_macroexpand(args: &[SkeinVal], env: &Env) -> Result<Step> {
    match args {
        [form] => Ok(Step::Done(macroexpand(form.clone(), env)?)),
        _ => Err(Error::syntax("macroexpand", "requires exactly 1 argument")),
    }
}

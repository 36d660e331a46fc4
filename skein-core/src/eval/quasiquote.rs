// skein-core - Quasiquote expansion
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Quasiquote expansion.
//!
//! `quasiquote` rewrites a template into ordinary code built from `cons`,
//! `concat` and `quote`. A list is folded from the right, starting from the
//! empty list:
//!
//! ```text
//! `(1 ~x ~@ys)  =>  (cons 1 (cons x (concat ys ())))
//! ```

use skein_parser::SkeinVal;

use super::Step;
use crate::env::Env;
use crate::error::{Error, Result};

/// Expand a quasiquoted template into code that builds it.
pub fn quasiquote(ast: &SkeinVal) -> SkeinVal {
    match ast {
        SkeinVal::List(items, _) if ast.is_form("unquote") => {
            items.get(1).cloned().unwrap_or(SkeinVal::Nil)
        }
        SkeinVal::List(items, _) => items.iter().rev().fold(SkeinVal::empty_list(), |acc, elt| {
            match elt.as_list() {
                Some(inner) if elt.is_form("splice-unquote") => SkeinVal::list(vec![
                    SkeinVal::symbol("concat"),
                    inner.get(1).cloned().unwrap_or(SkeinVal::Nil),
                    acc,
                ]),
                _ => SkeinVal::list(vec![SkeinVal::symbol("cons"), quasiquote(elt), acc]),
            }
        }),
        SkeinVal::Symbol(..) => SkeinVal::list(vec![SkeinVal::symbol("quote"), ast.clone()]),
        _ => ast.clone(),
    }
}

fn single_arg<'a>(form: &'static str, args: &'a [SkeinVal]) -> Result<&'a SkeinVal> {
    match args {
        [arg] => Ok(arg),
        _ => Err(Error::syntax(form, "requires exactly 1 argument")),
    }
}

/// (quasiquote template) - expand, then evaluate the expansion in tail position
pub(crate) fn eval_quasiquote(args: &[SkeinVal], env: &Env) -> Result<Step> {
    let template = single_arg("quasiquote", args)?;
    Ok(Step::TailCall(quasiquote(template), env.clone()))
}

/// (quasiquoteexpand template) - return the expansion unevaluated
pub(crate) fn eval_quasiquoteexpand(args: &[SkeinVal]) -> Result<Step> {
    let template = single_arg("quasiquoteexpand", args)?;
    Ok(Step::Done(quasiquote(template)))
}

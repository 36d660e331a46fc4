// skein-core - Exception handling
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Exception handling special form: try*/catch*.

use skein_parser::SkeinVal;
use tracing::debug;

use super::{Step, eval};
use crate::env::Env;
use crate::error::{Error, Result};

/// (try* expr (catch* name handler))
///
/// Evaluates `expr`. If it fails, binds the caught value to `name` in a
/// child scope and evaluates `handler` in tail position. A thrown value is
/// bound as-is; any other error is bound as its message string. Without a
/// `catch*` clause the error propagates unchanged.
pub(crate) fn eval_try(args: &[SkeinVal], env: &Env) -> Result<Step> {
    let (protected, clause) = match args {
        [protected] => (protected, None),
        [protected, clause] => (protected, Some(clause)),
        _ => {
            return Err(Error::syntax(
                "try*",
                "requires a form and an optional catch* clause",
            ));
        }
    };

    // Only a (catch* ...) form catches; anything else lets errors through
    let Some(clause) = clause.filter(|c| c.is_form("catch*")) else {
        return Ok(Step::TailCall(protected.clone(), env.clone()));
    };
    let (binding, handler) = parse_catch(clause)?;

    match eval(protected, env) {
        Ok(val) => Ok(Step::Done(val)),
        Err(err) => {
            debug!(error = %err, binding = %binding, "caught");
            let catch_env = env.child();
            catch_env.set(binding, err.into_value());
            Ok(Step::TailCall(handler, catch_env))
        }
    }
}

/// Split `(catch* name handler)` into its binding and handler.
fn parse_catch(clause: &SkeinVal) -> Result<(skein_parser::Symbol, SkeinVal)> {
    let Some(items) = clause.as_list() else {
        return Err(Error::syntax("try*", "expected a (catch* name handler) clause"));
    };
    if items.len() < 2 || items.len() > 3 {
        return Err(Error::syntax("try*", "catch* requires a name and one handler form"));
    }
    let binding = match &items[1] {
        SkeinVal::Symbol(sym, _) => sym.clone(),
        other => {
            return Err(Error::syntax(
                "try*",
                format!("catch* binding must be a symbol, got {}", other.type_name()),
            ));
        }
    };
    let handler = items.get(2).cloned().unwrap_or(SkeinVal::Nil);
    Ok((binding, handler))
}

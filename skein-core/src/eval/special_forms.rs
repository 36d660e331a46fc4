// skein-core - Special forms
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Special forms: def!, let*, do, if, fn*, quote, defmacro!
//!
//! Each handler receives the unevaluated arguments of its form. Forms whose
//! last step is in tail position return [`Step::TailCall`] so the evaluator
//! loop continues there instead of recursing.

use std::rc::Rc;

use skein_parser::{SkeinFn, SkeinVal, Symbol};
use tracing::debug;

use super::apply::erase_env;
use super::{Step, eval, exceptions, macros, quasiquote};
use crate::env::Env;
use crate::error::{Error, Result};

/// Dispatch a special form by name, or return `None` if `name` is not one.
pub(crate) fn dispatch(name: &str, args: &[SkeinVal], env: &Env) -> Option<Result<Step>> {
    Some(match name {
        "def!" => eval_def(args, env),
        "let*" => eval_let(args, env),
        "do" => eval_do(args, env),
        "if" => eval_if(args, env),
        "fn*" => eval_fn(args, env),
        "quote" => eval_quote(args),
        "quasiquote" => quasiquote::eval_quasiquote(args, env),
        "quasiquoteexpand" => quasiquote::eval_quasiquoteexpand(args),
        "macroexpand" => macros::eval_macroexpand(args, env),
        "defmacro!" => eval_defmacro(args, env),
        "try*" => exceptions::eval_try(args, env),
        _ => return None,
    })
}

fn expect_symbol(form: &'static str, val: &SkeinVal) -> Result<Symbol> {
    match val {
        SkeinVal::Symbol(sym, _) => Ok(sym.clone()),
        other => Err(Error::syntax(
            form,
            format!("expected a symbol, got {}", other.type_name()),
        )),
    }
}

/// (def! name value)
fn eval_def(args: &[SkeinVal], env: &Env) -> Result<Step> {
    if args.len() != 2 {
        return Err(Error::syntax("def!", "requires a name and a value"));
    }
    let name = expect_symbol("def!", &args[0])?;
    // A failing value leaves the name unbound
    let value = eval(&args[1], env)?;
    debug!(name = %name, "def!");
    Ok(Step::Done(env.set(name, value)))
}

/// (defmacro! name fn)
fn eval_defmacro(args: &[SkeinVal], env: &Env) -> Result<Step> {
    if args.len() != 2 {
        return Err(Error::syntax("defmacro!", "requires a name and a function"));
    }
    let name = expect_symbol("defmacro!", &args[0])?;
    let value = match eval(&args[1], env)? {
        SkeinVal::Fn(f) => SkeinVal::Fn(f.as_macro()),
        other => return Err(Error::type_error_in("defmacro!", "fn", other.type_name())),
    };
    debug!(name = %name, "defmacro!");
    Ok(Step::Done(env.set(name, value)))
}

/// (let* (name value ...) body)
fn eval_let(args: &[SkeinVal], env: &Env) -> Result<Step> {
    if args.is_empty() || args.len() > 2 {
        return Err(Error::syntax("let*", "requires a binding list and one body form"));
    }
    let bindings = args[0].as_list().ok_or_else(|| {
        Error::syntax(
            "let*",
            format!("bindings must be a list, got {}", args[0].type_name()),
        )
    })?;
    if bindings.len() % 2 != 0 {
        return Err(Error::syntax(
            "let*",
            "bindings require an even number of forms",
        ));
    }

    let let_env = env.child();
    let mut iter = bindings.iter();
    while let (Some(name), Some(value)) = (iter.next(), iter.next()) {
        let name = expect_symbol("let*", name)?;
        // Each binding sees the ones before it
        let value = eval(value, &let_env)?;
        let_env.set(name, value);
    }

    let body = args.get(1).cloned().unwrap_or(SkeinVal::Nil);
    Ok(Step::TailCall(body, let_env))
}

/// (do form...)
fn eval_do(args: &[SkeinVal], env: &Env) -> Result<Step> {
    let Some((last, init)) = args.split_last() else {
        return Ok(Step::Done(SkeinVal::Nil));
    };
    for form in init {
        eval(form, env)?;
    }
    Ok(Step::TailCall(last.clone(), env.clone()))
}

/// (if test then else?)
fn eval_if(args: &[SkeinVal], env: &Env) -> Result<Step> {
    if args.len() < 2 || args.len() > 3 {
        return Err(Error::syntax("if", "requires a test, a then branch and an optional else branch"));
    }
    let branch = if eval(&args[0], env)?.is_truthy() {
        Some(&args[1])
    } else {
        args.get(2)
    };
    Ok(match branch {
        Some(form) => Step::TailCall(form.clone(), env.clone()),
        None => Step::Done(SkeinVal::Nil),
    })
}

/// (fn* (param...) body)
fn eval_fn(args: &[SkeinVal], env: &Env) -> Result<Step> {
    if args.is_empty() || args.len() > 2 {
        return Err(Error::syntax("fn*", "requires a parameter list and one body form"));
    }
    let param_forms = args[0].as_list().ok_or_else(|| {
        Error::syntax(
            "fn*",
            format!("parameters must be a list, got {}", args[0].type_name()),
        )
    })?;
    let params = param_forms
        .iter()
        .map(|p| match p {
            SkeinVal::Symbol(sym, _) => Ok(sym.clone()),
            other => Err(Error::type_error_in("fn* parameter", "symbol", other.type_name())),
        })
        .collect::<Result<Vec<Symbol>>>()?;

    if let Some(pos) = params.iter().position(Symbol::is_variadic_marker)
        && params.len() != pos + 2
    {
        return Err(Error::syntax("fn*", "'&' must be followed by exactly one parameter"));
    }

    let body = args.get(1).cloned().unwrap_or(SkeinVal::Nil);
    let params: Rc<[Symbol]> = params.into();
    Ok(Step::Done(SkeinVal::Fn(SkeinFn::closure(
        params,
        body,
        erase_env(env),
    ))))
}

/// (quote form)
fn eval_quote(args: &[SkeinVal]) -> Result<Step> {
    match args {
        [form] => Ok(Step::Done(form.clone())),
        _ => Err(Error::syntax("quote", "requires exactly 1 argument")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skein_parser::{KeywordTable, Parser};

    use crate::builtins::register_builtins;

    fn run(src: &str) -> Result<SkeinVal> {
        let table = KeywordTable::new();
        let env = Env::new();
        register_builtins(&env, &table);
        let mut result = SkeinVal::Nil;
        for form in Parser::new(src, &table).parse_all()? {
            result = eval(&form, &env)?;
        }
        Ok(result)
    }

    #[test]
    fn test_def_returns_value() {
        assert_eq!(run("(def! x 10)").unwrap(), SkeinVal::int(10));
    }

    #[test]
    fn test_failed_def_leaves_name_unbound() {
        let table = KeywordTable::new();
        let env = Env::new();
        register_builtins(&env, &table);
        let form = skein_parser::read_str("(def! y (nope))", &table)
            .unwrap()
            .unwrap();
        assert!(eval(&form, &env).is_err());
        assert!(env.lookup(&Symbol::new("y")).is_none());
    }

    #[test]
    fn test_let_sequential_bindings() {
        assert_eq!(run("(let* (a 1 b (+ a 1)) b)").unwrap(), SkeinVal::int(2));
    }

    #[test]
    fn test_let_odd_bindings() {
        assert!(matches!(
            run("(let* (a) a)"),
            Err(Error::InvalidSyntax { form: "let*", .. })
        ));
    }

    #[test]
    fn test_do() {
        assert_eq!(run("(do)").unwrap(), SkeinVal::Nil);
        assert_eq!(run("(do 1 2 3)").unwrap(), SkeinVal::int(3));
    }

    #[test]
    fn test_if_branches() {
        assert_eq!(run("(if nil 1 2)").unwrap(), SkeinVal::int(2));
        assert_eq!(run("(if 0 1 2)").unwrap(), SkeinVal::int(1));
        assert_eq!(run("(if false 1)").unwrap(), SkeinVal::Nil);
    }

    #[test]
    fn test_fn_rejects_non_symbol_params() {
        assert!(matches!(
            run("(fn* (1) 1)"),
            Err(Error::TypeError { .. })
        ));
        assert!(run("(fn* (a &) a)").is_err());
    }

    #[test]
    fn test_fn_without_body_returns_nil() {
        assert_eq!(run("((fn* ()))").unwrap(), SkeinVal::Nil);
    }

    #[test]
    fn test_quote() {
        assert_eq!(run("(quote (a b))").unwrap().to_string(), "(a b)");
    }

    #[test]
    fn test_defmacro_requires_fn() {
        assert!(matches!(
            run("(defmacro! m 1)"),
            Err(Error::TypeError { .. })
        ));
    }
}

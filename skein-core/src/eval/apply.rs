// skein-core - Function application
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Function application for Skein.
//!
//! The evaluator applies interpreted functions in tail position itself;
//! [`apply`] is the non-tail path used by primitives such as `swap!`,
//! `apply` and `map`, and by macro expansion.

use std::any::Any;
use std::rc::Rc;

use skein_parser::{Closure, FnKind, SkeinNativeFn, SkeinVal};

use super::eval;
use crate::env::Env;
use crate::error::{Error, Result};

/// Type alias for native function signature.
pub type NativeFnImpl = dyn Fn(&[SkeinVal]) -> Result<SkeinVal>;

/// Apply a function to already-evaluated arguments.
///
/// Besides functions, maps and keywords are callable: `({:a 1} :a)` and
/// `(:a {:a 1})` both look up `:a`, with an optional default as a second
/// argument.
pub fn apply(func: &SkeinVal, args: &[SkeinVal]) -> Result<SkeinVal> {
    match func {
        SkeinVal::Fn(f) => match f.kind() {
            FnKind::Closure(closure) => apply_closure(closure, args),
            FnKind::Native(native) => apply_native(native, args),
        },
        SkeinVal::Map(map, _) => {
            if args.is_empty() || args.len() > 2 {
                return Err(Error::arity_range("map", 1, 2, args.len()));
            }
            Ok(map
                .get(&args[0])
                .cloned()
                .unwrap_or_else(|| args.get(1).cloned().unwrap_or(SkeinVal::Nil)))
        }
        SkeinVal::Keyword(kw) => {
            if args.is_empty() || args.len() > 2 {
                return Err(Error::arity_range(kw.to_string(), 1, 2, args.len()));
            }
            let default = args.get(1).cloned().unwrap_or(SkeinVal::Nil);
            match &args[0] {
                SkeinVal::Map(map, _) => Ok(map
                    .get(&SkeinVal::Keyword(kw.clone()))
                    .cloned()
                    .unwrap_or(default)),
                _ => Ok(default),
            }
        }
        other => Err(Error::NotCallable(other.to_string())),
    }
}

/// Build the call environment for a closure.
///
/// Binding is positional: missing arguments bind to nil, extra arguments
/// are dropped, and a `&` parameter takes whatever is left.
pub(crate) fn bind_closure(closure: &Closure, args: &[SkeinVal]) -> Result<Env> {
    let captured = closure
        .env
        .downcast_ref::<Env>()
        .ok_or_else(|| Error::Internal("Function environment has invalid type".into()))?;
    Env::with_bindings(captured, &closure.params, args)
}

/// Apply an interpreted function, evaluating its body to completion.
pub(crate) fn apply_closure(closure: &Closure, args: &[SkeinVal]) -> Result<SkeinVal> {
    let fn_env = bind_closure(closure, args)?;
    eval(&closure.body, &fn_env)
}

/// Apply a native function.
pub(crate) fn apply_native(func: &SkeinNativeFn, args: &[SkeinVal]) -> Result<SkeinVal> {
    // Downcast the function
    let f = func
        .func()
        .downcast_ref::<Rc<NativeFnImpl>>()
        .ok_or_else(|| Error::Internal("Native function has invalid type".into()))?;
    f(args)
}

/// Create a native function value.
pub fn make_native_fn(
    name: &'static str,
    func: impl Fn(&[SkeinVal]) -> Result<SkeinVal> + 'static,
) -> SkeinNativeFn {
    let func_rc: Rc<NativeFnImpl> = Rc::new(func);
    let func_any: Rc<dyn Any> = Rc::new(func_rc);
    SkeinNativeFn::new(name, func_any)
}

/// Wrap an environment for storage in a closure.
pub(crate) fn erase_env(env: &Env) -> Rc<dyn Any> {
    Rc::new(env.clone())
}

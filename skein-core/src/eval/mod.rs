// skein-core - Trampolined evaluator
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Evaluator for Skein forms.
//!
//! [`eval`] runs a single loop over an `(ast, env)` pair. Special forms in
//! tail position and calls to interpreted functions replace the pair and go
//! round the loop again instead of recursing, so self-recursive loops run in
//! constant native stack. Only argument evaluation and other non-tail
//! positions recurse, and those are bounded by the depth guard below.

// SkeinVal contains atoms, which order by identity rather than contents.
#![allow(clippy::mutable_key_type)]

// Submodules
pub mod apply;
mod exceptions;
pub mod macros;
pub mod quasiquote;
mod special_forms;

// Re-exports from submodules
pub use apply::{NativeFnImpl, apply, make_native_fn};
pub use macros::{is_macro_call, macroexpand};
pub use quasiquote::quasiquote;

use std::cell::Cell;

use skein_parser::{FnKind, SkeinVal};
use tracing::trace;

use crate::env::Env;
use crate::error::{Error, Result};
use crate::stack::ensure_sufficient_stack;

use apply::{apply_native, bind_closure};

// ============================================================================
// Stack Overflow Protection
// ============================================================================

/// Default maximum recursion depth for eval. Can be configured via
/// `set_max_eval_depth`.
pub const DEFAULT_MAX_EVAL_DEPTH: usize = 10_000;

thread_local! {
    static EVAL_DEPTH: Cell<usize> = const { Cell::new(0) };
    static MAX_EVAL_DEPTH: Cell<usize> = const { Cell::new(DEFAULT_MAX_EVAL_DEPTH) };
}

/// Set the maximum eval recursion depth. Returns the previous value.
pub fn set_max_eval_depth(depth: usize) -> usize {
    MAX_EVAL_DEPTH.with(|d| d.replace(depth))
}

/// Get the current maximum eval recursion depth.
#[must_use]
pub fn get_max_eval_depth() -> usize {
    MAX_EVAL_DEPTH.with(|d| d.get())
}

/// Get the current eval recursion depth.
#[must_use]
pub fn get_eval_depth() -> usize {
    EVAL_DEPTH.with(|d| d.get())
}

/// RAII guard counting nested `eval` calls on this thread.
struct EvalDepthGuard;

impl EvalDepthGuard {
    fn new() -> Result<Self> {
        let (current, max) = EVAL_DEPTH.with(|d| {
            let current = d.get() + 1;
            d.set(current);
            (current, MAX_EVAL_DEPTH.with(|m| m.get()))
        });
        if current > max {
            EVAL_DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
            Err(Error::DepthExceeded(max))
        } else {
            Ok(EvalDepthGuard)
        }
    }
}

impl Drop for EvalDepthGuard {
    fn drop(&mut self) {
        EVAL_DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
    }
}

// ============================================================================
// Evaluation
// ============================================================================

/// Result of evaluating a special form.
pub(crate) enum Step {
    /// The form produced its value.
    Done(SkeinVal),
    /// Continue the loop with this form in this environment.
    TailCall(SkeinVal, Env),
}

/// Evaluate a Skein form in the given environment.
///
/// # Examples
///
/// ```
/// use skein_core::Interpreter;
///
/// let interp = Interpreter::new().unwrap();
/// let form = interp.read("(* 6 7)").unwrap().unwrap();
/// let result = skein_core::eval(&form, interp.env()).unwrap();
/// assert_eq!(result, skein_core::SkeinVal::int(42));
/// ```
///
/// # Errors
///
/// Returns an error if a symbol cannot be resolved, a function is called
/// with the wrong number of arguments, a primitive rejects its arguments,
/// user code throws, or nesting exceeds the depth limit (configurable via
/// [`set_max_eval_depth`]).
#[must_use = "eval returns a value that should be used"]
pub fn eval(ast: &SkeinVal, env: &Env) -> Result<SkeinVal> {
    let _guard = EvalDepthGuard::new()?;
    ensure_sufficient_stack(|| eval_loop(ast.clone(), env.clone()))
}

fn eval_loop(mut ast: SkeinVal, mut env: Env) -> Result<SkeinVal> {
    loop {
        let forms: Vec<SkeinVal> = match &ast {
            SkeinVal::Symbol(sym, _) => return env.get(sym),
            SkeinVal::List(items, _) if !items.is_empty() => items.iter().cloned().collect(),
            // Everything else, maps and the empty list included, evaluates
            // to itself
            _ => return Ok(ast.clone()),
        };

        if is_macro_call(&ast, &env) {
            ast = macroexpand(ast, &env)?;
            continue;
        }

        let (head, args) = (&forms[0], &forms[1..]);

        if let SkeinVal::Symbol(sym, _) = head
            && let Some(step) = special_forms::dispatch(sym.name(), args, &env)
        {
            match step? {
                Step::Done(val) => return Ok(val),
                Step::TailCall(next_ast, next_env) => {
                    ast = next_ast;
                    env = next_env;
                    continue;
                }
            }
        }

        let func = eval(head, &env)?;
        let arg_vals = args
            .iter()
            .map(|arg| eval(arg, &env))
            .collect::<Result<Vec<_>>>()?;

        match &func {
            SkeinVal::Fn(f) => match f.kind() {
                FnKind::Closure(closure) => {
                    trace!(args = arg_vals.len(), "tail call into closure");
                    env = bind_closure(closure, &arg_vals)?;
                    ast = closure.body.clone();
                }
                FnKind::Native(native) => return apply_native(native, &arg_vals),
            },
            _ => return apply(&func, &arg_vals),
        }
    }
}

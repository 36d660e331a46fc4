// skein-core - Runtime and evaluator for the Skein language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # skein-core
//!
//! Runtime and evaluator for the Skein language.
//! Provides a trampolined AST-walking interpreter for `SkeinVal` forms,
//! with macros, quasiquote and `try*`/`catch*`.

pub mod builtins;
pub mod config;
pub mod env;
pub mod error;
pub mod eval;
pub mod interpreter;
pub mod stack;

pub use builtins::register_builtins;
pub use config::Config;
pub use env::{Env, WeakEnv};
pub use error::{AritySpec, Error, Result};
pub use eval::{
    DEFAULT_MAX_EVAL_DEPTH, apply, eval, get_eval_depth, get_max_eval_depth, macroexpand,
    make_native_fn, quasiquote, set_max_eval_depth,
};
pub use interpreter::Interpreter;

// Re-export parser types for convenience
pub use skein_parser::{Keyword, KeywordTable, SkeinVal, Symbol};

// skein-core - Top-level runtime context
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! The interpreter: root environment, keyword table and configuration.

use std::path::Path;

use skein_parser::{KeywordTable, Parser, SkeinVal, pr_str, read_str};
use tracing::debug;

use crate::builtins::{EnvExt, register_builtins};
use crate::config::Config;
use crate::env::Env;
use crate::error::{Error, Result, check_arity};
use crate::eval::{eval, set_max_eval_depth};

/// Source evaluated into the root environment at startup.
const CORE_BOOTSTRAP: &str = include_str!("../std/core.skn");

/// A Skein runtime.
///
/// Owns the root environment and the keyword table every form is read with.
/// Errors abort only the form being evaluated; bindings made by earlier
/// forms stay in place.
///
/// # Examples
///
/// ```
/// use skein_core::Interpreter;
///
/// let interp = Interpreter::new().unwrap();
/// interp.eval_str("(def! sq (fn* (x) (* x x)))").unwrap();
/// assert_eq!(interp.rep("(sq 7)").unwrap(), "49");
/// ```
pub struct Interpreter {
    env: Env,
    keywords: KeywordTable,
    config: Config,
}

impl Interpreter {
    /// Create an interpreter with the default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create an interpreter with the given configuration.
    ///
    /// The depth limit is thread-local, so it applies to every interpreter
    /// on the calling thread.
    pub fn with_config(config: Config) -> Result<Self> {
        set_max_eval_depth(config.max_eval_depth);

        let env = Env::new();
        let keywords = KeywordTable::new();
        register_builtins(&env, &keywords);

        // `eval` holds the root weakly and adds no cycle of its own. Closures
        // defined at top level, `load-file` included, still capture it strongly.
        let root = env.downgrade();
        env.define_native("eval", move |args| {
            check_arity("eval", args, 1)?;
            let env = root
                .upgrade()
                .ok_or_else(|| Error::Internal("root environment dropped".into()))?;
            eval(&args[0], &env)
        });

        let interp = Interpreter {
            env,
            keywords,
            config,
        };
        if interp.config.bootstrap {
            interp.eval_all(CORE_BOOTSTRAP)?;
        }
        Ok(interp)
    }

    /// The root environment.
    pub fn env(&self) -> &Env {
        &self.env
    }

    /// The keyword table source is read with.
    pub fn keywords(&self) -> &KeywordTable {
        &self.keywords
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read the first form of `source`, or `None` if there is none.
    pub fn read(&self, source: &str) -> Result<Option<SkeinVal>> {
        Ok(read_str(source, &self.keywords)?)
    }

    /// Evaluate a form in the root environment.
    pub fn eval(&self, form: &SkeinVal) -> Result<SkeinVal> {
        eval(form, &self.env)
    }

    /// Read and evaluate the first form of `source`. Blank input gives nil.
    pub fn eval_str(&self, source: &str) -> Result<SkeinVal> {
        match self.read(source)? {
            Some(form) => self.eval(&form),
            None => Ok(SkeinVal::Nil),
        }
    }

    /// Evaluate every top-level form of `source` in order, returning the
    /// last result.
    ///
    /// Forms are read one at a time, so forms before a reader error have
    /// already run when it is reported.
    pub fn eval_all(&self, source: &str) -> Result<SkeinVal> {
        let mut parser = Parser::new(source, &self.keywords);
        let mut result = SkeinVal::Nil;
        while let Some(form) = parser.parse()? {
            result = self.eval(&form)?;
        }
        Ok(result)
    }

    /// Read, evaluate and print `source` readably.
    pub fn rep(&self, source: &str) -> Result<String> {
        Ok(pr_str(&self.eval_str(source)?, true))
    }

    /// Evaluate every form in the file at `path`, returning the last result.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<SkeinVal> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading file");
        let source = std::fs::read_to_string(path)
            .map_err(|e| Error::Io(format!("{}: {}", path.display(), e)))?;
        self.eval_all(&source)
    }
}

// skein-core - Environment for lexical scoping
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Environment for variable bindings with lexical scoping.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

use skein_parser::{SkeinVal, Symbol};

use crate::error::{Error, Result};

/// A lexical environment for variable bindings.
///
/// Environments form a chain through outer references, enabling
/// lexical scoping. Each environment has its own bindings map
/// and optionally an outer environment for enclosing scope lookup.
/// Cloning an `Env` clones the handle, not the scope.
///
/// # Examples
///
/// ```
/// use skein_core::Env;
/// use skein_parser::{SkeinVal, Symbol};
///
/// // Create a root environment
/// let env = Env::new();
///
/// // Define a binding
/// env.set(Symbol::new("x"), SkeinVal::int(42));
///
/// // Look up the binding
/// assert_eq!(env.get(&Symbol::new("x")).unwrap(), SkeinVal::int(42));
///
/// // Create a child environment that inherits outer bindings
/// let child = env.child();
/// assert_eq!(child.get(&Symbol::new("x")).unwrap(), SkeinVal::int(42));
///
/// // Child can shadow outer bindings
/// child.set(Symbol::new("x"), SkeinVal::int(100));
/// assert_eq!(child.get(&Symbol::new("x")).unwrap(), SkeinVal::int(100));
/// assert_eq!(env.get(&Symbol::new("x")).unwrap(), SkeinVal::int(42));
/// ```
#[derive(Clone)]
pub struct Env {
    inner: Rc<RefCell<EnvInner>>,
}

struct EnvInner {
    bindings: HashMap<Symbol, SkeinVal>,
    outer: Option<Env>,
}

impl Env {
    /// Create a new root environment with no outer scope.
    pub fn new() -> Self {
        Env {
            inner: Rc::new(RefCell::new(EnvInner {
                bindings: HashMap::new(),
                outer: None,
            })),
        }
    }

    /// Create an empty child environment with this environment as outer.
    #[must_use]
    pub fn child(&self) -> Self {
        Env {
            inner: Rc::new(RefCell::new(EnvInner {
                bindings: HashMap::new(),
                outer: Some(self.clone()),
            })),
        }
    }

    /// Create a child of `outer` binding `params` to `args` positionally.
    ///
    /// On reaching `&`, the following parameter is bound to the remaining
    /// arguments as a list and binding stops. Missing arguments bind to nil
    /// and extra arguments are ignored.
    pub fn with_bindings(outer: &Env, params: &[Symbol], args: &[SkeinVal]) -> Result<Env> {
        let env = outer.child();
        {
            let mut inner = env.inner.borrow_mut();
            for (i, param) in params.iter().enumerate() {
                if param.is_variadic_marker() {
                    let rest = params
                        .get(i + 1)
                        .ok_or_else(|| Error::syntax("fn*", "'&' must be followed by a parameter"))?;
                    let rest_args = args.get(i..).unwrap_or_default();
                    inner
                        .bindings
                        .insert(rest.clone(), SkeinVal::list(rest_args.to_vec()));
                    break;
                }
                let val = args.get(i).cloned().unwrap_or(SkeinVal::Nil);
                inner.bindings.insert(param.clone(), val);
            }
        }
        Ok(env)
    }

    /// Bind `sym` in this environment (never an outer one), returning the value.
    pub fn set(&self, sym: Symbol, val: SkeinVal) -> SkeinVal {
        self.inner.borrow_mut().bindings.insert(sym, val.clone());
        val
    }

    /// Find the nearest environment in the chain that binds `sym`.
    /// Uses iterative traversal to avoid stack overflow on deep environments.
    pub fn find(&self, sym: &Symbol) -> Option<Env> {
        let mut current = self.clone();
        loop {
            let outer = {
                let inner = current.inner.borrow();
                if inner.bindings.contains_key(sym) {
                    break Some(current.clone());
                }
                inner.outer.clone()
            };
            current = outer?;
        }
    }

    /// Look up a symbol in this environment or its outer chain.
    pub fn get(&self, sym: &Symbol) -> Result<SkeinVal> {
        self.find(sym)
            .and_then(|env| env.inner.borrow().bindings.get(sym).cloned())
            .ok_or_else(|| Error::UndefinedSymbol(sym.clone()))
    }

    /// Look up a symbol, returning None when unbound.
    pub fn lookup(&self, sym: &Symbol) -> Option<SkeinVal> {
        self.get(sym).ok()
    }

    /// True if `sym` is bound directly in this environment.
    #[must_use]
    pub fn has_local(&self, sym: &Symbol) -> bool {
        self.inner.borrow().bindings.contains_key(sym)
    }

    /// True if both handles refer to the same scope.
    #[must_use]
    pub fn ptr_eq(&self, other: &Env) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// A weak handle to this environment.
    ///
    /// Natives stored in the root scope hold the root weakly so the scope
    /// does not keep itself alive.
    pub fn downgrade(&self) -> WeakEnv {
        WeakEnv {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        write!(
            f,
            "#<Env {} bindings{}>",
            inner.bindings.len(),
            if inner.outer.is_some() { "" } else { ", root" }
        )
    }
}

/// A non-owning handle to an [`Env`].
#[derive(Clone)]
pub struct WeakEnv {
    inner: Weak<RefCell<EnvInner>>,
}

impl WeakEnv {
    /// Recover the environment if it is still alive.
    pub fn upgrade(&self) -> Option<Env> {
        self.inner.upgrade().map(|inner| Env { inner })
    }
}

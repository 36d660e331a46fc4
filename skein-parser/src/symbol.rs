// skein-parser - Symbol type
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Symbols are identifiers compared by name.
//!
//! Unlike keywords, symbols are not interned: two symbols are equal iff they
//! carry the same name, regardless of where they were constructed. Metadata
//! attached to a symbol lives on the enclosing `SkeinVal::Symbol` variant,
//! never on the `Symbol` itself, so it cannot affect equality.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// A symbol, identified by its name.
#[derive(Clone)]
pub struct Symbol {
    name: Rc<str>,
}

impl Symbol {
    /// Create a new symbol.
    pub fn new(name: &str) -> Self {
        Symbol {
            name: Rc::from(name),
        }
    }

    /// Get the name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True if this is the variadic marker `&` used in parameter lists.
    #[inline]
    #[must_use]
    pub fn is_variadic_marker(&self) -> bool {
        &*self.name == "&"
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Symbol::new(name)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.name)
    }
}

impl PartialEq for Symbol {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.name, &other.name) || self.name == other.name
    }
}

impl Eq for Symbol {}

impl PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Symbol {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.name.cmp(&other.name)
    }
}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

// ============================================================================
// Tests
// ============================================================================

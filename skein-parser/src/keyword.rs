// skein-parser - Keyword type with interning
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Keywords are self-evaluating identifiers written with a leading colon.
//!
//! # Interning
//!
//! Keywords are interned through a [`KeywordTable`]. Requesting a name that
//! the table already holds returns the existing instance, so two keywords
//! read or built through the same table compare by pointer:
//!
//! - **O(1) equality**: comparing keywords is a pointer comparison
//! - **O(1) hashing**: the hash is computed from the pointer address
//!
//! The table is owned by the runtime context rather than being a process
//! global. Keywords from two different tables are never equal, even when
//! their names match.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// An interned keyword.
///
/// Always printed with a leading `:`.
#[derive(Clone)]
pub struct Keyword {
    inner: Rc<str>,
}

impl Keyword {
    /// Get the name, without the leading colon.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner
    }

    /// True if both keywords are the same interned instance.
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &Keyword) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    fn addr(&self) -> usize {
        Rc::as_ptr(&self.inner) as *const u8 as usize
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.inner)
    }
}

impl fmt::Debug for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Keyword({})", self)
    }
}

impl PartialEq for Keyword {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        // Due to interning, pointer comparison is sufficient
        self.ptr_eq(other)
    }
}

impl Eq for Keyword {}

impl PartialOrd for Keyword {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Keyword {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Same-named keywords from different tables are distinct; the
        // address breaks the tie so the order stays consistent with `eq`.
        self.inner
            .cmp(&other.inner)
            .then_with(|| self.addr().cmp(&other.addr()))
    }
}

impl Hash for Keyword {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

// ============================================================================
// KeywordTable
// ============================================================================

/// A keyword interner.
///
/// Cloning a table yields another handle to the same storage.
#[derive(Clone, Default)]
pub struct KeywordTable {
    keywords: Rc<RefCell<HashMap<Rc<str>, Keyword>>>,
}

impl KeywordTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the keyword for `name`, creating it on first use.
    ///
    /// A leading colon, if present, is stripped.
    pub fn intern(&self, name: &str) -> Keyword {
        let name = name.strip_prefix(':').unwrap_or(name);
        if let Some(existing) = self.keywords.borrow().get(name) {
            return existing.clone();
        }
        let inner: Rc<str> = Rc::from(name);
        let kw = Keyword {
            inner: Rc::clone(&inner),
        };
        self.keywords.borrow_mut().insert(inner, kw.clone());
        kw
    }

    /// Number of distinct keywords interned so far.
    pub fn len(&self) -> usize {
        self.keywords.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.borrow().is_empty()
    }
}

impl fmt::Debug for KeywordTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#<KeywordTable {} entries>", self.len())
    }
}

// ============================================================================
// Tests
// ============================================================================

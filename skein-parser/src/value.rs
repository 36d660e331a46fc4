// skein-parser - Value types for Skein
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Core value type for Skein.
//!
//! `SkeinVal` is the central enum representing all Skein values. Code and
//! data share this representation: the reader produces it and the evaluator
//! consumes it.

// SkeinVal holds atoms, which have interior mutability. Atoms order by
// address, never by contents, so mutating one cannot reorder a map.
#![allow(clippy::mutable_key_type)]

use std::any::Any;
use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use im::{OrdMap, Vector};

use crate::keyword::Keyword;
use crate::printer::pr_str;
use crate::symbol::Symbol;

/// Metadata attached to a symbol, list, map or function.
///
/// Metadata never affects equality or ordering.
pub type Meta = Rc<SkeinVal>;

/// The core value type for Skein.
///
/// Values are immutable apart from atoms, and use reference counting for
/// cheap sharing. Vectors are read as lists, so there is a single sequence
/// variant.
#[derive(Clone)]
pub enum SkeinVal {
    /// The nil value, representing nothing/absence
    Nil,
    /// Boolean true or false
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point number
    Float(f64),
    /// Immutable string
    String(Rc<str>),
    /// Symbol, with optional metadata
    Symbol(Symbol, Option<Meta>),
    /// Keyword, interned by a `KeywordTable`
    Keyword(Keyword),
    /// Persistent list, with optional metadata
    List(Vector<SkeinVal>, Option<Meta>),
    /// Persistent ordered map, with optional metadata
    Map(OrdMap<SkeinVal, SkeinVal>, Option<Meta>),
    /// Mutable reference cell
    Atom(SkeinAtom),
    /// Native function or interpreted closure (possibly flagged as a macro)
    Fn(SkeinFn),
}

// ============================================================================
// Function Types
// ============================================================================

/// The callable behind a `SkeinFn`.
pub enum FnKind {
    /// Interpreted function created by `fn*`
    Closure(Closure),
    /// Function implemented in Rust
    Native(SkeinNativeFn),
}

/// An interpreted function.
///
/// The captured environment is type-erased to avoid a dependency cycle; the
/// concrete type is defined in skein-core.
pub struct Closure {
    /// Parameter names, possibly containing the variadic marker `&`
    pub params: Rc<[Symbol]>,
    /// Body form (`nil` when the function has no body)
    pub body: SkeinVal,
    /// Captured environment (shared, never copied)
    pub env: Rc<dyn Any>,
}

/// A native (Rust) function.
#[derive(Clone)]
pub struct SkeinNativeFn {
    /// Function name for display
    pub name: &'static str,
    /// The actual function (type-erased)
    func: Rc<dyn Any>,
}

impl SkeinNativeFn {
    /// Create a new native function with a type-erased function.
    pub fn new(name: &'static str, func: Rc<dyn Any>) -> Self {
        SkeinNativeFn { name, func }
    }

    /// Get the function name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Get the inner function reference.
    pub fn func(&self) -> &Rc<dyn Any> {
        &self.func
    }
}

/// A function value.
///
/// The macro flag and metadata live beside the shared callable, so flagging
/// a function as a macro or attaching metadata yields a new value with the
/// same identity.
#[derive(Clone)]
pub struct SkeinFn {
    kind: Rc<FnKind>,
    pub is_macro: bool,
    pub meta: Option<Meta>,
}

impl SkeinFn {
    /// Wrap an interpreted closure.
    pub fn closure(params: Rc<[Symbol]>, body: SkeinVal, env: Rc<dyn Any>) -> Self {
        SkeinFn {
            kind: Rc::new(FnKind::Closure(Closure { params, body, env })),
            is_macro: false,
            meta: None,
        }
    }

    /// Wrap a native function.
    pub fn native(native: SkeinNativeFn) -> Self {
        SkeinFn {
            kind: Rc::new(FnKind::Native(native)),
            is_macro: false,
            meta: None,
        }
    }

    pub fn kind(&self) -> &FnKind {
        &self.kind
    }

    /// A copy of this function with the macro flag set.
    #[must_use]
    pub fn as_macro(&self) -> SkeinFn {
        SkeinFn {
            kind: Rc::clone(&self.kind),
            is_macro: true,
            meta: self.meta.clone(),
        }
    }

    /// True if both values wrap the same callable.
    pub fn ptr_eq(&self, other: &SkeinFn) -> bool {
        Rc::ptr_eq(&self.kind, &other.kind)
    }

    fn addr(&self) -> usize {
        Rc::as_ptr(&self.kind) as usize
    }
}

impl fmt::Debug for SkeinFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&*self.kind, self.is_macro) {
            (_, true) => write!(f, "#<macro>"),
            (FnKind::Native(nf), false) => write!(f, "#<function {}>", nf.name),
            (FnKind::Closure(_), false) => write!(f, "#<fn>"),
        }
    }
}

// ============================================================================
// Atom Type
// ============================================================================

/// A mutable reference cell.
///
/// Atoms compare by identity: two atoms holding equal values are distinct.
#[derive(Clone)]
pub struct SkeinAtom {
    value: Rc<RefCell<SkeinVal>>,
}

impl SkeinAtom {
    /// Create a new atom with an initial value.
    pub fn new(value: SkeinVal) -> Self {
        SkeinAtom {
            value: Rc::new(RefCell::new(value)),
        }
    }

    /// Get the current value.
    pub fn deref(&self) -> SkeinVal {
        self.value.borrow().clone()
    }

    /// Replace the value, returning the new value.
    pub fn reset(&self, new_val: SkeinVal) -> SkeinVal {
        *self.value.borrow_mut() = new_val.clone();
        new_val
    }

    pub fn ptr_eq(&self, other: &SkeinAtom) -> bool {
        Rc::ptr_eq(&self.value, &other.value)
    }

    fn addr(&self) -> usize {
        Rc::as_ptr(&self.value) as usize
    }
}

impl fmt::Debug for SkeinAtom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(atom {})", pr_str(&self.value.borrow(), true))
    }
}

// ============================================================================
// Constructors and accessors
// ============================================================================

impl SkeinVal {
    pub fn nil() -> Self {
        SkeinVal::Nil
    }

    pub fn bool(b: bool) -> Self {
        SkeinVal::Bool(b)
    }

    pub fn int(n: i64) -> Self {
        SkeinVal::Int(n)
    }

    pub fn float(n: f64) -> Self {
        SkeinVal::Float(n)
    }

    pub fn string(s: &str) -> Self {
        SkeinVal::String(Rc::from(s))
    }

    pub fn symbol(name: &str) -> Self {
        SkeinVal::Symbol(Symbol::new(name), None)
    }

    pub fn keyword(kw: Keyword) -> Self {
        SkeinVal::Keyword(kw)
    }

    /// Create a list from elements
    pub fn list(elements: Vec<SkeinVal>) -> Self {
        SkeinVal::List(elements.into_iter().collect(), None)
    }

    /// Create a list from an existing persistent vector
    pub fn list_from(elements: Vector<SkeinVal>) -> Self {
        SkeinVal::List(elements, None)
    }

    pub fn empty_list() -> Self {
        SkeinVal::List(Vector::new(), None)
    }

    /// Create a map from key/value pairs. Later duplicates win.
    pub fn map(pairs: Vec<(SkeinVal, SkeinVal)>) -> Self {
        SkeinVal::Map(pairs.into_iter().collect(), None)
    }

    pub fn atom(value: SkeinVal) -> Self {
        SkeinVal::Atom(SkeinAtom::new(value))
    }

    /// Check if this value is nil
    pub fn is_nil(&self) -> bool {
        matches!(self, SkeinVal::Nil)
    }

    /// Check if this value is truthy (not nil and not false)
    pub fn is_truthy(&self) -> bool {
        !matches!(self, SkeinVal::Nil | SkeinVal::Bool(false))
    }

    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            SkeinVal::Nil => "nil",
            SkeinVal::Bool(_) => "bool",
            SkeinVal::Int(_) => "int",
            SkeinVal::Float(_) => "float",
            SkeinVal::String(_) => "string",
            SkeinVal::Symbol(_, _) => "symbol",
            SkeinVal::Keyword(_) => "keyword",
            SkeinVal::List(_, _) => "list",
            SkeinVal::Map(_, _) => "map",
            SkeinVal::Atom(_) => "atom",
            SkeinVal::Fn(f) if f.is_macro => "macro",
            SkeinVal::Fn(_) => "fn",
        }
    }

    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            SkeinVal::Symbol(s, _) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&Vector<SkeinVal>> {
        match self {
            SkeinVal::List(items, _) => Some(items),
            _ => None,
        }
    }

    /// True if this is a non-empty list whose first element is the symbol `name`.
    pub fn is_form(&self, name: &str) -> bool {
        matches!(
            self,
            SkeinVal::List(items, _)
                if matches!(items.front(), Some(SkeinVal::Symbol(s, _)) if s.name() == name)
        )
    }

    /// Get the metadata, or nil if there is none.
    pub fn meta(&self) -> SkeinVal {
        let meta = match self {
            SkeinVal::Symbol(_, m) | SkeinVal::List(_, m) | SkeinVal::Map(_, m) => m.as_ref(),
            SkeinVal::Fn(f) => f.meta.as_ref(),
            _ => None,
        };
        meta.map_or(SkeinVal::Nil, |m| (**m).clone())
    }

    /// Return a copy carrying `meta`, or `None` if this kind of value cannot
    /// hold metadata.
    pub fn with_meta(&self, meta: SkeinVal) -> Option<SkeinVal> {
        let meta = Some(Rc::new(meta));
        Some(match self {
            SkeinVal::Symbol(s, _) => SkeinVal::Symbol(s.clone(), meta),
            SkeinVal::List(items, _) => SkeinVal::List(items.clone(), meta),
            SkeinVal::Map(map, _) => SkeinVal::Map(map.clone(), meta),
            SkeinVal::Fn(f) => SkeinVal::Fn(SkeinFn {
                kind: Rc::clone(&f.kind),
                is_macro: f.is_macro,
                meta,
            }),
            _ => return None,
        })
    }

    /// Structural equality.
    ///
    /// Scalars, strings, symbols, lists and maps compare by value; keywords,
    /// atoms and functions compare by identity. `Int` and `Float` compare
    /// numerically, and NaN is equal to itself so that the relation stays
    /// reflexive.
    pub fn egal(&self, other: &SkeinVal) -> bool {
        match (self, other) {
            (SkeinVal::Nil, SkeinVal::Nil) => true,
            (SkeinVal::Bool(a), SkeinVal::Bool(b)) => a == b,
            (SkeinVal::Int(a), SkeinVal::Int(b)) => a == b,
            (SkeinVal::Float(a), SkeinVal::Float(b)) => float_eq(*a, *b),
            (SkeinVal::Int(a), SkeinVal::Float(b)) | (SkeinVal::Float(b), SkeinVal::Int(a)) => {
                int_float_cmp(*a, *b) == Ordering::Equal
            }
            (SkeinVal::String(a), SkeinVal::String(b)) => a == b,
            (SkeinVal::Symbol(a, _), SkeinVal::Symbol(b, _)) => a == b,
            (SkeinVal::Keyword(a), SkeinVal::Keyword(b)) => a.ptr_eq(b),
            (SkeinVal::List(a, _), SkeinVal::List(b, _)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.egal(y))
            }
            (SkeinVal::Map(a, _), SkeinVal::Map(b, _)) => {
                a.len() == b.len()
                    && a.iter()
                        .all(|(k, v)| b.get(k).is_some_and(|other| v.egal(other)))
            }
            (SkeinVal::Atom(a), SkeinVal::Atom(b)) => a.ptr_eq(b),
            (SkeinVal::Fn(a), SkeinVal::Fn(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

fn float_eq(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

/// Total order on floats that treats NaN as equal to itself and greater
/// than every other number.
fn float_cmp(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Exact comparison of an integer against a float, without rounding the
/// integer through `f64`. NaN sorts above every integer.
fn int_float_cmp(i: i64, f: f64) -> Ordering {
    // 2^63, the first float above i64::MAX
    const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;
    if f.is_nan() || f >= TWO_POW_63 {
        return Ordering::Less;
    }
    if f < -TWO_POW_63 {
        return Ordering::Greater;
    }
    let whole = f.trunc();
    // In range, so the conversion is exact
    i.cmp(&(whole as i64)).then_with(|| {
        if f > whole {
            Ordering::Less
        } else if f < whole {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    })
}

// ============================================================================
// Display implementation
// ============================================================================

impl fmt::Display for SkeinVal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&pr_str(self, true))
    }
}

impl fmt::Debug for SkeinVal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

// ============================================================================
// Equality and ordering (for use as map keys)
// ============================================================================

impl PartialEq for SkeinVal {
    fn eq(&self, other: &Self) -> bool {
        self.egal(other)
    }
}

impl Eq for SkeinVal {}

impl PartialOrd for SkeinVal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SkeinVal {
    fn cmp(&self, other: &Self) -> Ordering {
        // Type ordering for heterogeneous comparison
        // Note: Metadata is ignored in ordering (consistent with equality)
        fn type_order(v: &SkeinVal) -> u8 {
            match v {
                SkeinVal::Nil => 0,
                SkeinVal::Bool(_) => 1,
                SkeinVal::Int(_) | SkeinVal::Float(_) => 2,
                SkeinVal::String(_) => 3,
                SkeinVal::Symbol(_, _) => 4,
                SkeinVal::Keyword(_) => 5,
                SkeinVal::List(_, _) => 6,
                SkeinVal::Map(_, _) => 7,
                SkeinVal::Atom(_) => 8,
                SkeinVal::Fn(_) => 9,
            }
        }

        let ta = type_order(self);
        let tb = type_order(other);

        if ta != tb {
            return ta.cmp(&tb);
        }

        match (self, other) {
            (SkeinVal::Bool(a), SkeinVal::Bool(b)) => a.cmp(b),
            (SkeinVal::Int(a), SkeinVal::Int(b)) => a.cmp(b),
            (SkeinVal::Float(a), SkeinVal::Float(b)) => float_cmp(*a, *b),
            (SkeinVal::Int(a), SkeinVal::Float(b)) => int_float_cmp(*a, *b),
            (SkeinVal::Float(a), SkeinVal::Int(b)) => int_float_cmp(*b, *a).reverse(),
            (SkeinVal::String(a), SkeinVal::String(b)) => a.cmp(b),
            (SkeinVal::Symbol(a, _), SkeinVal::Symbol(b, _)) => a.cmp(b),
            (SkeinVal::Keyword(a), SkeinVal::Keyword(b)) => a.cmp(b),
            (SkeinVal::List(a, _), SkeinVal::List(b, _)) => a.iter().cmp(b.iter()),
            (SkeinVal::Map(a, _), SkeinVal::Map(b, _)) => a
                .len()
                .cmp(&b.len())
                .then_with(|| a.iter().cmp(b.iter())),
            (SkeinVal::Atom(a), SkeinVal::Atom(b)) => a.addr().cmp(&b.addr()),
            (SkeinVal::Fn(a), SkeinVal::Fn(b)) => a.addr().cmp(&b.addr()),
            _ => Ordering::Equal,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

// skein-parser - Printer for Skein
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Converts values back to text.
//!
//! In readable mode strings are quoted and escaped so the output can be fed
//! back to the reader; otherwise their raw contents are written. Metadata is
//! never printed.

use std::fmt::Write;

use crate::value::{FnKind, SkeinVal};

/// Print `val`, quoting and escaping strings when `readably` is set.
pub fn pr_str(val: &SkeinVal, readably: bool) -> String {
    let mut out = String::new();
    write_val(&mut out, val, readably);
    out
}

fn write_val(out: &mut String, val: &SkeinVal, readably: bool) {
    match val {
        SkeinVal::Nil => out.push_str("nil"),
        SkeinVal::Bool(b) => {
            let _ = write!(out, "{}", b);
        }
        SkeinVal::Int(n) => {
            let _ = write!(out, "{}", n);
        }
        SkeinVal::Float(n) => write_float(out, *n),
        SkeinVal::String(s) if readably => {
            out.push('"');
            escape_into(out, s);
            out.push('"');
        }
        SkeinVal::String(s) => out.push_str(s),
        SkeinVal::Symbol(sym, _) => out.push_str(sym.name()),
        SkeinVal::Keyword(kw) => {
            let _ = write!(out, "{}", kw);
        }
        SkeinVal::List(items, _) => {
            out.push('(');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                write_val(out, item, readably);
            }
            out.push(')');
        }
        SkeinVal::Map(map, _) => {
            out.push('{');
            for (i, (k, v)) in map.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_val(out, k, readably);
                out.push(' ');
                write_val(out, v, readably);
            }
            out.push('}');
        }
        SkeinVal::Atom(a) => {
            out.push_str("(atom ");
            write_val(out, &a.deref(), readably);
            out.push(')');
        }
        SkeinVal::Fn(f) if f.is_macro => out.push_str("#<macro>"),
        SkeinVal::Fn(f) => match f.kind() {
            FnKind::Native(nf) => {
                let _ = write!(out, "#<function {}>", nf.name());
            }
            FnKind::Closure(_) => out.push_str("#<fn>"),
        },
    }
}

fn write_float(out: &mut String, n: f64) {
    if n.is_nan() {
        out.push_str("##NaN");
    } else if n.is_infinite() {
        out.push_str(if n > 0.0 { "##Inf" } else { "##-Inf" });
    } else if n.fract() == 0.0 {
        let _ = write!(out, "{}.0", n);
    } else {
        let _ = write!(out, "{}", n);
    }
}

fn escape_into(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            _ => out.push(c),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

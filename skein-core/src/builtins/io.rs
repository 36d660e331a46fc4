// skein-core - I/O built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! I/O and printing: pr-str, str, prn, println, read-string, slurp

use skein_parser::{KeywordTable, SkeinVal, pr_str, read_str};
use tracing::debug;

use crate::error::{Error, Result, check_arity};

fn join(args: &[SkeinVal], readably: bool, sep: &str) -> String {
    args.iter()
        .map(|arg| pr_str(arg, readably))
        .collect::<Vec<_>>()
        .join(sep)
}

// ============================================================================
// Printing
// ============================================================================

/// (pr-str & args) - readable representations joined by spaces
pub(crate) fn builtin_pr_str(args: &[SkeinVal]) -> Result<SkeinVal> {
    Ok(SkeinVal::string(&join(args, true, " ")))
}

/// (str & args) - display representations concatenated
pub(crate) fn builtin_str(args: &[SkeinVal]) -> Result<SkeinVal> {
    Ok(SkeinVal::string(&join(args, false, "")))
}

/// (prn & args) - print readably with a newline, returns nil
pub(crate) fn builtin_prn(args: &[SkeinVal]) -> Result<SkeinVal> {
    println!("{}", join(args, true, " "));
    Ok(SkeinVal::Nil)
}

/// (println & args) - print for display with a newline, returns nil
pub(crate) fn builtin_println(args: &[SkeinVal]) -> Result<SkeinVal> {
    println!("{}", join(args, false, " "));
    Ok(SkeinVal::Nil)
}

// ============================================================================
// Reading
// ============================================================================

/// (read-string s) - read the first form of s; nil for blank input
pub(crate) fn read_string(table: &KeywordTable, args: &[SkeinVal]) -> Result<SkeinVal> {
    check_arity("read-string", args, 1)?;
    match &args[0] {
        SkeinVal::String(s) => Ok(read_str(s, table)?.unwrap_or(SkeinVal::Nil)),
        other => Err(Error::type_error_in("read-string", "string", other.type_name())),
    }
}

/// (slurp path) - whole file contents as a string
pub(crate) fn builtin_slurp(args: &[SkeinVal]) -> Result<SkeinVal> {
    check_arity("slurp", args, 1)?;
    let path = match &args[0] {
        SkeinVal::String(s) => s,
        other => return Err(Error::type_error_in("slurp", "string", other.type_name())),
    };
    debug!(path = %path, "slurp");
    let contents = std::fs::read_to_string(&**path)
        .map_err(|e| Error::Io(format!("{}: {}", path, e)))?;
    Ok(SkeinVal::string(&contents))
}

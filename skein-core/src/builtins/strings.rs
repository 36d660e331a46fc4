// skein-core - Symbol and keyword constructors
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Name constructors: symbol, keyword

use skein_parser::{KeywordTable, SkeinVal};

use crate::error::{Error, Result, check_arity};

/// (symbol name) - symbol named by a string
pub(crate) fn builtin_symbol(args: &[SkeinVal]) -> Result<SkeinVal> {
    check_arity("symbol", args, 1)?;
    match &args[0] {
        SkeinVal::String(s) => Ok(SkeinVal::symbol(s)),
        SkeinVal::Symbol(..) => Ok(args[0].clone()),
        other => Err(Error::type_error_in("symbol", "string", other.type_name())),
    }
}

/// (keyword name) - keyword interned in `table`; a keyword is returned as is
pub(crate) fn make_keyword(table: &KeywordTable, args: &[SkeinVal]) -> Result<SkeinVal> {
    check_arity("keyword", args, 1)?;
    match &args[0] {
        SkeinVal::String(s) => Ok(SkeinVal::keyword(table.intern(s))),
        SkeinVal::Keyword(_) => Ok(args[0].clone()),
        other => Err(Error::type_error_in("keyword", "string", other.type_name())),
    }
}

// skein-core - Metadata built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Metadata operations: meta, with-meta

use skein_parser::SkeinVal;

use crate::error::{Error, Result, check_arity};

/// (meta obj) - metadata of obj, or nil
pub(crate) fn builtin_meta(args: &[SkeinVal]) -> Result<SkeinVal> {
    check_arity("meta", args, 1)?;
    Ok(args[0].meta())
}

/// (with-meta obj m) - copy of obj carrying m; obj itself is unchanged
pub(crate) fn builtin_with_meta(args: &[SkeinVal]) -> Result<SkeinVal> {
    check_arity("with-meta", args, 2)?;
    args[0].with_meta(args[1].clone()).ok_or_else(|| {
        Error::type_error_in(
            "with-meta",
            "list, map, symbol or fn",
            args[0].type_name(),
        )
    })
}

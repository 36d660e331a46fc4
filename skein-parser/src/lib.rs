// skein-parser - Reader, printer and data model for the Skein language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # skein-parser
//!
//! Reader, printer and data model for the Skein programming language.
//! Produces `SkeinVal` forms from source code strings and prints them back.

pub mod keyword;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod symbol;
pub mod value;

pub use im::{OrdMap, Vector};
pub use keyword::{Keyword, KeywordTable};
pub use lexer::tokenize;
pub use parser::{ParseError, ParseErrorKind, Parser, read_str};
pub use printer::pr_str;
pub use symbol::Symbol;
pub use value::{Closure, FnKind, Meta, SkeinAtom, SkeinFn, SkeinNativeFn, SkeinVal};

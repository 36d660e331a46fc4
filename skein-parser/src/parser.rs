// skein-parser - Parser for Skein
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Recursive descent reader for Skein source code.
//!
//! Converts tokens into `SkeinVal` forms. Reader macros expand to ordinary
//! lists headed by a symbol, so `'x` reads as `(quote x)` and `^m x` reads
//! as `(with-meta x m)`.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::keyword::KeywordTable;
use crate::lexer::{Token, position, scan};
use crate::value::SkeinVal;

/// What went wrong while reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A string token with no closing quote
    UnterminatedString,
    /// Input ended inside a collection or after a reader macro
    UnexpectedEof,
    /// A closing delimiter with no matching opener
    UnbalancedClose,
    /// A map literal with an odd number of forms
    OddMapForms,
}

/// Parser error with position information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parse error at {}:{}: {}",
            self.line, self.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}

fn int_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^-?[0-9]+$").expect("integer pattern is valid"))
}

fn float_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[-+]?[0-9]+(\.[0-9]*)?([eE][-+]?[0-9]+)?$").expect("float pattern is valid")
    })
}

fn string_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"^"(?:\\.|[^\\"])*"$"#).expect("string pattern is valid"))
}

/// The parser converts tokens into `SkeinVal` forms.
pub struct Parser<'a> {
    source: &'a str,
    tokens: Vec<Token<'a>>,
    position: usize,
    keywords: &'a KeywordTable,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given source code.
    ///
    /// Keywords are interned in `keywords`.
    pub fn new(source: &'a str, keywords: &'a KeywordTable) -> Self {
        Parser {
            source,
            tokens: scan(source),
            position: 0,
            keywords,
        }
    }

    /// Parse a single form from the source.
    /// Returns None if at end of input.
    pub fn parse(&mut self) -> Result<Option<SkeinVal>, ParseError> {
        if self.peek().is_none() {
            return Ok(None);
        }
        let val = self.parse_form()?;
        Ok(Some(val))
    }

    /// Parse all forms from the source.
    pub fn parse_all(&mut self) -> Result<Vec<SkeinVal>, ParseError> {
        let mut forms = Vec::new();
        while let Some(form) = self.parse()? {
            forms.push(form);
        }
        Ok(forms)
    }

    // ========================================================================
    // Internal parsing methods
    // ========================================================================

    fn peek(&self) -> Option<Token<'a>> {
        self.tokens.get(self.position).copied()
    }

    fn advance(&mut self) -> Option<Token<'a>> {
        let token = self.peek();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    fn error_at(&self, offset: usize, kind: ParseErrorKind, message: String) -> ParseError {
        let (line, column) = position(self.source, offset);
        ParseError {
            kind,
            message,
            line,
            column,
        }
    }

    fn eof_error(&self, expected: &str) -> ParseError {
        self.error_at(
            self.source.len(),
            ParseErrorKind::UnexpectedEof,
            format!("expected {}, found EOF", expected),
        )
    }

    fn parse_form(&mut self) -> Result<SkeinVal, ParseError> {
        let Some(token) = self.advance() else {
            return Err(self.eof_error("form"));
        };
        match token.text {
            "'" => self.parse_wrapped("quote"),
            "`" => self.parse_wrapped("quasiquote"),
            "~" => self.parse_wrapped("unquote"),
            "~@" => self.parse_wrapped("splice-unquote"),
            "@" => self.parse_wrapped("deref"),
            "^" => {
                let meta = self.parse_form()?;
                let target = self.parse_form()?;
                Ok(SkeinVal::list(vec![
                    SkeinVal::symbol("with-meta"),
                    target,
                    meta,
                ]))
            }
            "(" => Ok(SkeinVal::list(self.parse_seq(")")?)),
            "[" => Ok(SkeinVal::list(self.parse_seq("]")?)),
            "{" => self.parse_map(token),
            ")" | "]" | "}" => Err(self.error_at(
                token.offset,
                ParseErrorKind::UnbalancedClose,
                format!("unexpected '{}'", token.text),
            )),
            _ => self.parse_atom(token),
        }
    }

    fn parse_wrapped(&mut self, head: &str) -> Result<SkeinVal, ParseError> {
        let form = self.parse_form()?;
        Ok(SkeinVal::list(vec![SkeinVal::symbol(head), form]))
    }

    fn parse_seq(&mut self, close: &str) -> Result<Vec<SkeinVal>, ParseError> {
        let mut items = Vec::new();
        loop {
            match self.peek() {
                None => return Err(self.eof_error(&format!("'{}'", close))),
                Some(t) if t.text == close => {
                    self.advance();
                    return Ok(items);
                }
                Some(_) => items.push(self.parse_form()?),
            }
        }
    }

    fn parse_map(&mut self, open: Token<'a>) -> Result<SkeinVal, ParseError> {
        let items = self.parse_seq("}")?;
        if items.len() % 2 != 0 {
            return Err(self.error_at(
                open.offset,
                ParseErrorKind::OddMapForms,
                "map literal requires an even number of forms".to_string(),
            ));
        }
        let mut iter = items.into_iter();
        let mut pairs = Vec::new();
        while let (Some(k), Some(v)) = (iter.next(), iter.next()) {
            pairs.push((k, v));
        }
        Ok(SkeinVal::map(pairs))
    }

    fn parse_atom(&mut self, token: Token<'a>) -> Result<SkeinVal, ParseError> {
        let text = token.text;
        if int_regex().is_match(text) {
            // Literals too large for i64 fall back to a float
            return Ok(match text.parse::<i64>() {
                Ok(n) => SkeinVal::int(n),
                Err(_) => SkeinVal::float(text.parse::<f64>().unwrap_or(f64::INFINITY)),
            });
        }
        if float_regex().is_match(text) {
            return Ok(SkeinVal::float(text.parse::<f64>().unwrap_or(f64::NAN)));
        }
        if string_regex().is_match(text) {
            return Ok(SkeinVal::string(&unescape(&text[1..text.len() - 1])));
        }
        if text.starts_with('"') {
            return Err(self.error_at(
                token.offset,
                ParseErrorKind::UnterminatedString,
                "expected '\"', found EOF".to_string(),
            ));
        }
        Ok(match text {
            "nil" => SkeinVal::Nil,
            "true" => SkeinVal::Bool(true),
            "false" => SkeinVal::Bool(false),
            "##Inf" => SkeinVal::float(f64::INFINITY),
            "##-Inf" => SkeinVal::float(f64::NEG_INFINITY),
            "##NaN" => SkeinVal::float(f64::NAN),
            _ => match text.strip_prefix(':') {
                Some(name) => SkeinVal::keyword(self.keywords.intern(name)),
                None => SkeinVal::symbol(text),
            },
        })
    }
}

/// Resolve backslash escapes in string contents.
fn unescape(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some(other) => result.push(other),
            None => {}
        }
    }
    result
}

/// Read the first form of `source`, ignoring anything after it.
///
/// Returns `Ok(None)` when the source holds no tokens.
pub fn read_str(source: &str, keywords: &KeywordTable) -> Result<Option<SkeinVal>, ParseError> {
    Parser::new(source, keywords).parse()
}

// ============================================================================
// Tests
// ============================================================================

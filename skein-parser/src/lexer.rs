// skein-parser - Lexer for Skein
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Lexer (tokeniser) for Skein source code.
//!
//! A single regular-expression scan splits the source into tokens. Each
//! match skips leading whitespace and commas, then captures one of, in
//! priority order:
//!
//! - the two-character reader macro `~@`
//! - a single special character: `[ ] { } ( ) ' ` ~ ^ @`
//! - a double-quoted string with backslash escapes (an unterminated string
//!   still forms a token, which the reader rejects)
//! - a `;` line comment (discarded)
//! - a maximal run of non-delimiter characters
//!
//! Tokens keep their byte offset so the reader can report positions.

use std::sync::OnceLock;

use regex::Regex;

const TOKEN_PATTERN: &str =
    r#"[\s,]*(~@|[\[\]{}()'`~^@]|"(?:\\.|[^\\"])*"?|;.*|[^\s\[\]{}('"`,;)]*)"#;

fn token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(TOKEN_PATTERN).expect("token pattern is valid"))
}

/// A token and its byte offset in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub offset: usize,
}

/// Scan `source` into tokens, dropping comments.
///
/// Scanning stops at the first empty capture, which only happens once the
/// remaining input is whitespace.
pub fn scan(source: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    for caps in token_regex().captures_iter(source) {
        let Some(m) = caps.get(1) else { break };
        if m.as_str().is_empty() {
            break;
        }
        if m.as_str().starts_with(';') {
            continue;
        }
        tokens.push(Token {
            text: m.as_str(),
            offset: m.start(),
        });
    }
    tokens
}

/// Tokenize `source` into owned token strings.
pub fn tokenize(source: &str) -> Vec<String> {
    scan(source).into_iter().map(|t| t.text.to_string()).collect()
}

/// Convert a byte offset into a 1-based (line, column) pair.
pub fn position(source: &str, offset: usize) -> (usize, usize) {
    let prefix = &source[..offset.min(source.len())];
    let line = prefix.matches('\n').count() + 1;
    let column = match prefix.rfind('\n') {
        Some(nl) => prefix[nl + 1..].chars().count() + 1,
        None => prefix.chars().count() + 1,
    };
    (line, column)
}

// ============================================================================
// Tests
// ============================================================================

/*
 * ==========================================================================
 * TWIG - Grow Your Grammar!
 * ==========================================================================
 *
 * File:      token.rs
 * Purpose:   Defines the lexical token alphabet produced by the TWIG
 *            scanner and consumed by the recursive-descent parser.
 *
 * Author:    Sam Wilcox
 * Email:     sam@twig-lang.com
 * Website:   https://www.twig-lang.com
 * GitHub:    https://github.com/samwilcox/twig
 *
 * License:
 * This file is part of the TWIG parser playground project.
 *
 * TWIG is dual-licensed under the terms of:
 *   - The MIT License
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use crate::span::Span;
use serde::Serialize;
use std::fmt;

/// Represents the **category of a lexical token** in the TWIG mini
/// language.
///
/// Every non-whitespace lexeme maps to exactly one kind, decided by a
/// fixed priority order inside the scanner:
///
/// ```text
/// comment → string → number → keyword → identifier → operator → separator → unknown
/// ```
///
/// # Compiler Pipeline Role
/// ```text
/// Source Code → Lexer → TokenKind → Parser → Derivation Tree
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    /// A reserved word of the language.
    ///
    /// Covers the primitive type names (`int`, `float`, `boolean`,
    /// `String`), control keywords (`if`, `else`, `while`), the boolean
    /// literals (`true`, `false`), the fused print keyword
    /// (`System.out.println`), and a handful of reserved-but-unused
    /// words. See `keywords.rs` for the full table.
    Keyword,

    /// A user-defined name: a letter or underscore followed by any run
    /// of letters, digits, or underscores.
    Identifier,

    /// An integer literal such as `42`.
    Number,

    /// A double-quoted string literal, quotes included in the lexeme.
    String,

    /// A maximal run of operator characters (`+ - * / = < > ! & |`),
    /// e.g. `=`, `==`, `<=`.
    Operator,

    /// A single structural character: `(`, `)`, `{`, `}`, `;`, `.`, `,`.
    Separator,

    /// A `//` line comment, text included in the lexeme.
    ///
    /// Comments survive into the token stream; the grammar has no
    /// production for them, so one reaching the parser is a syntax error.
    Comment,

    /// Source text no other classification accepted.
    ///
    /// Lexing is total: anything unrecognized becomes an `Unknown` token
    /// instead of an error, deferring failure to the parser.
    Unknown,
}

/// A **single lexical token**: a classified unit of source text.
///
/// Tokens are immutable values; the scanner produces them once and the
/// parser only ever reads them through its cursor.
///
/// # Example Tokens
/// ```text
/// int  →  { kind: Keyword,    lexeme: "int", span: 1:0 }
/// x    →  { kind: Identifier, lexeme: "x",   span: 1:4 }
/// 5    →  { kind: Number,     lexeme: "5",   span: 1:8 }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Token {
    /// The classified category of the token.
    pub kind: TokenKind,

    /// The exact source text that produced this token, preserved
    /// verbatim for error messages and tree leaves.
    pub lexeme: String,

    /// Where the lexeme starts in the source.
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }
}

impl fmt::Display for Token {
    /// Formats a token for **user-facing output**.
    ///
    /// Prints only the lexeme — error messages care about *what the user
    /// wrote*, not the token's internal structure. `Debug` remains
    /// available for developer introspection.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}

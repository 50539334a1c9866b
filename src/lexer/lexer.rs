/*
 * ==========================================================================
 * TWIG - Grow Your Grammar!
 * ==========================================================================
 *
 * Author:   Sam Wilcox
 * Email:    sam@twig-lang.com
 * Website:  https://www.twig-lang.com
 * Github:   https://github.com/samwilcox/twig
 *
 * License:
 * This file is part of the TWIG parser playground project.
 *
 * TWIG is dual-licensed under the terms of:
 *   - The MIT license
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

use crate::lexer::keywords::is_keyword;
use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;
use once_cell::sync::Lazy;
use regex::Regex;

/// The single composite token pattern, compiled once.
///
/// Alternatives in matching order: line comments, string literals, the
/// fused print keyword, integer literals, identifier/keyword runs,
/// maximal operator runs, single-character separators. Alternation in
/// the `regex` crate is leftmost-first, so the fused print keyword must
/// stay ahead of the identifier alternative or `System` would match on
/// its own.
static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(//[^\n]*)|("[^"\n]*")|System\.out\.println|\b\d+\b|[A-Za-z_][A-Za-z_0-9]*|[+\-*/=<>!&|]+|[(){};.,]"#,
    )
    .expect("token pattern is valid")
});

/// Performs complete lexical analysis over a source string.
///
/// This is a **total function**: it never fails. Source text the
/// composite pattern does not recognize is not discarded — every maximal
/// non-whitespace run between pattern matches becomes a single `Unknown`
/// token, so each input character ends up in exactly one token or is
/// skipped as whitespace. Malformed input (an unterminated string, a
/// stray `@`) therefore surfaces later as a parse error, never as a
/// lexing failure.
///
/// # Parameters
/// - `source`: the full program text, read entirely before scanning
///
/// # Returns
/// The ordered token sequence, each token carrying its classified kind,
/// verbatim lexeme, and line/column position.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).scan_tokens()
}

/// Internal scanning state: a cursor over the source paired with the
/// running line/column position of that cursor.
struct Lexer<'src> {
    source: &'src str,
    /// Byte offset up to which positions have been accounted for.
    cursor: usize,
    line: usize,
    column: usize,
    tokens: Vec<Token>,
}

impl<'src> Lexer<'src> {
    fn new(source: &'src str) -> Self {
        Self {
            source,
            cursor: 0,
            line: 1,
            column: 0,
            tokens: Vec::new(),
        }
    }

    /// Runs the composite pattern left to right over the whole input.
    ///
    /// For every match: first sweep the unmatched gap before it (emitting
    /// `Unknown` tokens for non-whitespace runs), then classify and emit
    /// the matched lexeme itself.
    fn scan_tokens(mut self) -> Vec<Token> {
        let source = self.source;

        for found in TOKEN_PATTERN.find_iter(source) {
            self.sweep_gap(found.start());

            let lexeme = found.as_str();
            let span = Span::new(self.line, self.column);
            let kind = classify(lexeme);
            self.tokens.push(Token::new(kind, lexeme, span));
            self.track(found.start(), found.end());
        }

        // Trailing unmatched text after the final match.
        self.sweep_gap(source.len());
        self.tokens
    }

    /// Accounts for source text between the cursor and `end` that the
    /// pattern skipped. Whitespace is dropped; each maximal run of
    /// non-whitespace characters becomes one `Unknown` token.
    fn sweep_gap(&mut self, end: usize) {
        let source = self.source;
        let gap = &source[self.cursor..end];
        let mut run = String::new();
        let mut run_span = Span::new(self.line, self.column);

        for ch in gap.chars() {
            if ch.is_whitespace() {
                if !run.is_empty() {
                    self.tokens
                        .push(Token::new(TokenKind::Unknown, run.clone(), run_span));
                    run.clear();
                }
            } else {
                if run.is_empty() {
                    run_span = Span::new(self.line, self.column);
                }
                run.push(ch);
            }
            self.step(ch);
        }

        if !run.is_empty() {
            self.tokens
                .push(Token::new(TokenKind::Unknown, run, run_span));
        }
        self.cursor = end;
    }

    /// Moves the position counters across an emitted lexeme.
    fn track(&mut self, start: usize, end: usize) {
        let source = self.source;
        for ch in source[start..end].chars() {
            self.step(ch);
        }
        self.cursor = end;
    }

    fn step(&mut self, ch: char) {
        if ch == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
    }
}

/// Classifies one matched lexeme, in the fixed priority order:
/// comment → string → pure-digit → keyword-set membership → identifier
/// → operator run → separator → `Unknown`.
fn classify(lexeme: &str) -> TokenKind {
    if lexeme.starts_with("//") {
        TokenKind::Comment
    } else if lexeme.starts_with('"') {
        TokenKind::String
    } else if lexeme.chars().all(|c| c.is_ascii_digit()) {
        TokenKind::Number
    } else if is_keyword(lexeme) {
        TokenKind::Keyword
    } else if is_identifier(lexeme) {
        TokenKind::Identifier
    } else if is_operator_run(lexeme) {
        TokenKind::Operator
    } else if is_separator(lexeme) {
        TokenKind::Separator
    } else {
        TokenKind::Unknown
    }
}

fn is_identifier(lexeme: &str) -> bool {
    let mut chars = lexeme.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn is_operator_run(lexeme: &str) -> bool {
    !lexeme.is_empty()
        && lexeme
            .chars()
            .all(|c| matches!(c, '+' | '-' | '*' | '/' | '=' | '<' | '>' | '!' | '&' | '|'))
}

fn is_separator(lexeme: &str) -> bool {
    let mut chars = lexeme.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some('(' | ')' | '{' | '}' | ';' | '.' | ','), None)
    )
}

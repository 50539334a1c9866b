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

use crate::lexer::token::Token;
use serde::Serialize;
use std::fmt;

/// The closed taxonomy of parse failures.
///
/// All variants are locally detected, non-recoverable, and propagate by
/// unwinding the entire parse — there is no resynchronization and no
/// multi-error reporting. Lexing never produces any of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParseErrorKind {
    /// The cursor was exhausted while a token was still required.
    UnexpectedEndOfInput,

    /// A specific expected token was not found, or no statement
    /// alternative matched the lookahead token.
    SyntaxError,

    /// A declaration's leading token is not in the primitive-type set.
    InvalidType,

    /// No atomic expression alternative matched.
    InvalidFactor,

    /// A condition's middle token is not a recognized comparison
    /// operator.
    InvalidRelationalOperator,

    /// Unconsumed tokens remained after the program was fully matched.
    TrailingInput,
}

/// A parse failure: the sole outcome of an unsuccessful `parse()` call.
#[derive(Debug, Clone, Serialize)]
pub struct ParseError {
    /// Which rule of the taxonomy was violated.
    pub kind: ParseErrorKind,

    /// Human-readable description, naming the expected or offending
    /// token where one exists.
    pub message: String,

    /// The offending token. `None` only for end-of-input failures.
    pub token: Option<Token>,

    /// Optional follow-up hint for the diagnostic printer.
    pub help: Option<String>,
}

impl ParseError {
    /// Generic constructor
    pub fn new(kind: ParseErrorKind, message: impl Into<String>, token: Option<Token>) -> Self {
        Self {
            kind,
            message: message.into(),
            token,
            help: None,
        }
    }

    /// The cursor ran out while a token was required.
    pub fn unexpected_end(message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::UnexpectedEndOfInput, message, None)
    }

    /// An expected token/kind/literal was not found.
    pub fn syntax_error(message: impl Into<String>, token: Token) -> Self {
        Self::new(ParseErrorKind::SyntaxError, message, Some(token))
    }

    /// A declaration started with something other than a primitive type.
    pub fn invalid_type(message: impl Into<String>, token: Token) -> Self {
        Self::new(ParseErrorKind::InvalidType, message, Some(token))
    }

    /// No atomic factor alternative matched.
    pub fn invalid_factor(message: impl Into<String>, token: Token) -> Self {
        Self::new(ParseErrorKind::InvalidFactor, message, Some(token))
    }

    /// The middle of a condition was not a comparison operator.
    pub fn invalid_relational_operator(message: impl Into<String>, token: Token) -> Self {
        Self::new(ParseErrorKind::InvalidRelationalOperator, message, Some(token))
    }

    /// Tokens were left over after the program production returned.
    pub fn trailing_input(message: impl Into<String>, token: Token) -> Self {
        Self::new(ParseErrorKind::TrailingInput, message, Some(token))
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Stable error code (E_EOF, E_SYNTAX, …)
    pub fn code(&self) -> &'static str {
        match self.kind {
            ParseErrorKind::UnexpectedEndOfInput => "E_EOF",
            ParseErrorKind::SyntaxError => "E_SYNTAX",
            ParseErrorKind::InvalidType => "E_TYPE",
            ParseErrorKind::InvalidFactor => "E_FACTOR",
            ParseErrorKind::InvalidRelationalOperator => "E_RELOP",
            ParseErrorKind::TrailingInput => "E_TRAILING",
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.token {
            Some(token) => write!(f, "{} (at '{}')", self.message, token),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ParseError {}

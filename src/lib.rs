/*
 * ==========================================================================
 * TWIG - Grow Your Grammar!
 * ==========================================================================
 *
 * TWIG is a parser playground for a small imperative, Java-flavored
 * language: declarations, assignment, print, if/while, arithmetic and
 * relational expressions. Source text goes in; a typed token sequence,
 * a fully-labeled derivation tree, and an ordered stream of progress
 * events come out.
 *
 * Pipeline:
 *
 *   Source → tokenize() → Tokens → parse() → Derivation Tree + Events
 *
 * Lexing is total (unrecognized text becomes Unknown tokens); parsing
 * is predictive with one token of lookahead and fails fast at the
 * first grammar violation.
 *
 * --------------------------------------------------------------------------
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

/// Caret-style rendering of parse errors for the terminal.
pub mod diagnostics;

/// The parse-failure taxonomy and its stable error codes.
pub mod error;

/// Parse events and the sink trait external renderers implement.
pub mod events;

/// Lexical analysis: token model, keyword tables, and the scanner.
pub mod lexer;

/// The recursive-descent parser, split across statement, expression,
/// and helper modules.
pub mod parser;

/// Line/column source positions.
pub mod span;

/// The derivation tree the parser builds.
pub mod tree;

pub use error::{ParseError, ParseErrorKind};
pub use events::{EventSink, NullSink, ParseEvent, RecordingSink};
pub use lexer::{tokenize, Token, TokenKind};
pub use parser::{parse, parse_with_sink, ParseOutcome};
pub use span::Span;
pub use tree::{DerivationNode, DerivationTree};

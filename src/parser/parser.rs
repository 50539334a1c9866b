/*
 * ==========================================================================
 * TWIG - Grow Your Grammar!
 * ==========================================================================
 *
 * Core Recursive-Descent Parser Entry Point
 *
 * This file defines the primary `Parser` structure and the public
 * `parse()` / `parse_with_sink()` driver functions used to transform a
 * token stream into a fully-labeled derivation tree.
 *
 * The parsing implementation itself is split across multiple modules:
 * - `statements.rs`   → Statement-level grammar (`if`, `while`, print, …)
 * - `expressions.rs`  → Expression grammar & operator precedence
 * - `helpers.rs`      → Token matching, consumption, and node plumbing
 *
 * This file serves as the **root coordinator** of the parsing process.
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

use crate::error::ParseError;
use crate::events::{EventSink, ParseEvent, RecordingSink};
use crate::lexer::token::Token;
use crate::tree::{DerivationNode, DerivationTree};
use serde::Serialize;

/// Everything a successful parse produces: the derivation tree plus the
/// ordered event log that described its construction.
#[derive(Debug, Clone, Serialize)]
pub struct ParseOutcome {
    pub tree: DerivationTree,
    pub events: Vec<ParseEvent>,
}

/// The recursive-descent parser.
///
/// State is exactly one cursor into the token stream plus the node
/// currently under construction in each active rule; nothing else
/// mutates. The cursor only ever increases — the grammar needs one
/// token of lookahead and never backtracks past a consumed token.
///
/// Grammar logic lives in extension modules (`statements`,
/// `expressions`, `helpers`) via additional `impl Parser` blocks.
pub struct Parser<'a> {
    /// Complete token stream to be parsed.
    pub(crate) tokens: Vec<Token>,

    /// Current cursor position within the token stream.
    pub(crate) position: usize,

    /// Observer for progress/error events. Treated as a plain callback;
    /// renderers handle their own threading.
    pub(crate) sink: &'a mut dyn EventSink,

    /// Labels of the rules currently matching, innermost last. Used
    /// only to report each created node's parent to the sink.
    pub(crate) open_labels: Vec<String>,
}

/// Public entry point for the parsing phase.
///
/// Records every event through an internal `RecordingSink` and hands the
/// full log back alongside the tree.
///
/// # Pipeline
/// ```text
/// Source → tokenize → Tokens → parse → Derivation Tree + Events
/// ```
///
/// # Errors
/// The first grammar violation unwinds the whole call: the error is the
/// sole outcome and no tree is returned.
pub fn parse(tokens: Vec<Token>) -> Result<ParseOutcome, ParseError> {
    let mut sink = RecordingSink::new();
    let tree = parse_with_sink(tokens, &mut sink)?;
    Ok(ParseOutcome {
        tree,
        events: sink.into_events(),
    })
}

/// Parses with a caller-supplied event sink, for renderers that want to
/// observe the parse as it happens (and to keep whatever events were
/// delivered before a failure).
pub fn parse_with_sink(
    tokens: Vec<Token>,
    sink: &mut dyn EventSink,
) -> Result<DerivationTree, ParseError> {
    let mut parser = Parser {
        tokens,
        position: 0,
        sink,
        open_labels: Vec::new(),
    };
    parser.parse()
}

impl<'a> Parser<'a> {
    /// Parses the entire token stream into a derivation tree.
    ///
    /// Runs the top-level `Program` production, then requires the
    /// cursor to sit at end-of-stream. `Program` itself loops until the
    /// stream is exhausted, so leftover tokens here mean a statement
    /// returned without consuming what it matched — the check is
    /// defensive, but a violation is still a hard error.
    pub fn parse(&mut self) -> Result<DerivationTree, ParseError> {
        self.note("starting parse");

        let root = self.program()?;

        if !self.is_at_end() {
            let offending = self.tokens[self.position].clone();
            let err = ParseError::trailing_input(
                format!("unexpected tokens after the end of the program: '{}'", offending),
                offending,
            );
            return Err(self.fail(err));
        }

        self.note("parse finished");
        Ok(DerivationTree { root })
    }

    /// Program := { Statement }
    ///
    /// An empty token stream is a valid program: the node simply has no
    /// children.
    fn program(&mut self) -> Result<DerivationNode, ParseError> {
        self.note("program detected");
        let mut node = self.open_node("Program");

        while !self.is_at_end() {
            let stmt = self.statement()?;
            self.attach(&mut node, stmt);
        }

        Ok(self.close_node(node))
    }
}

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

use crate::error::ParseError;
use crate::lexer::token::{Token, TokenKind};
use crate::parser::parser::Parser;
use crate::tree::DerivationNode;

impl<'a> Parser<'a> {
    /// Returns true if the cursor has consumed the whole stream.
    pub(crate) fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// Returns the current token without consuming it.
    ///
    /// Fails with `UnexpectedEndOfInput` if the cursor is past the end.
    pub(crate) fn peek(&mut self) -> Result<Token, ParseError> {
        if self.is_at_end() {
            let err = ParseError::unexpected_end("unexpected end of input");
            return Err(self.fail(err));
        }
        Ok(self.tokens[self.position].clone())
    }

    /// Returns the current token and moves the cursor forward one
    /// position, reporting the consumption to the sink.
    ///
    /// Fails with `UnexpectedEndOfInput` if the cursor is past the end.
    pub(crate) fn advance(&mut self) -> Result<Token, ParseError> {
        if self.is_at_end() {
            let err = ParseError::unexpected_end("unexpected end of input");
            return Err(self.fail(err));
        }
        let token = self.tokens[self.position].clone();
        self.position += 1;
        self.sink.on_token_consumed(&token);
        Ok(token)
    }

    /// Returns the previously consumed token.
    pub(crate) fn previous(&self) -> &Token {
        &self.tokens[self.position - 1]
    }

    /// Checks the current token against a kind and, optionally, an
    /// exact lexeme, without consuming anything. False at end-of-input.
    pub(crate) fn check(&self, kind: TokenKind, lexeme: Option<&str>) -> bool {
        if self.is_at_end() {
            return false;
        }
        let token = &self.tokens[self.position];
        if token.kind != kind {
            return false;
        }
        match lexeme {
            Some(text) => token.lexeme == text,
            None => true,
        }
    }

    /// Non-failing probe: consumes and returns true only if the current
    /// token matches, otherwise leaves the cursor unchanged.
    pub(crate) fn match_token(
        &mut self,
        kind: TokenKind,
        lexeme: Option<&str>,
    ) -> Result<bool, ParseError> {
        if self.check(kind, lexeme) {
            self.advance()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Requires a match, consuming on success.
    ///
    /// At end-of-input this raises `UnexpectedEndOfInput` naming the
    /// missing token; on a kind/lexeme mismatch it raises `SyntaxError`.
    pub(crate) fn expect(
        &mut self,
        kind: TokenKind,
        lexeme: Option<&str>,
    ) -> Result<Token, ParseError> {
        let wanted = describe(kind, lexeme);
        self.note(format!("checking token: {}", wanted));

        if self.is_at_end() {
            let err =
                ParseError::unexpected_end(format!("unexpected end of input, expected {}", wanted));
            return Err(self.fail(err));
        }

        if self.check(kind, lexeme) {
            return self.advance();
        }

        let found = self.tokens[self.position].clone();
        let err = ParseError::syntax_error(
            format!("expected {}, found '{}'", wanted, found),
            found,
        );
        Err(self.fail(err))
    }

    /// Starts a derivation node for a rule that just began matching and
    /// reports it to the sink, parented under the innermost open rule.
    pub(crate) fn open_node(&mut self, label: &str) -> DerivationNode {
        let parent = self.open_labels.last().map(String::as_str);
        self.sink.on_node_created(label, parent);
        self.open_labels.push(label.to_string());
        DerivationNode::new(label)
    }

    /// Finalizes a rule's node. After this no further children are
    /// attached to it.
    pub(crate) fn close_node(&mut self, node: DerivationNode) -> DerivationNode {
        self.open_labels.pop();
        node
    }

    /// Attaches a finished sub-rule node and reports the edge.
    pub(crate) fn attach(&mut self, parent: &mut DerivationNode, child: DerivationNode) {
        self.sink.on_node_attached(&parent.label, &child.label);
        parent.attach(child);
    }

    /// Attaches a consumed token as a terminal leaf and reports the
    /// edge. The leaf's label is the verbatim lexeme.
    pub(crate) fn attach_leaf(&mut self, parent: &mut DerivationNode, token: &Token) {
        self.sink.on_node_attached(&parent.label, &token.lexeme);
        parent.attach(DerivationNode::new(token.lexeme.clone()));
    }

    /// Sends progress commentary to the sink.
    pub(crate) fn note(&mut self, text: impl AsRef<str>) {
        self.sink.on_message(text.as_ref());
    }

    /// Reports an error to the sink just before the parse unwinds, so a
    /// renderer sees the failure even though no tree is returned.
    pub(crate) fn fail(&mut self, error: ParseError) -> ParseError {
        self.sink.on_error(&error.message, error.token.as_ref());
        error
    }
}

/// Human wording for an expected token, used in messages: the literal
/// text when one is required, otherwise the kind name.
fn describe(kind: TokenKind, lexeme: Option<&str>) -> String {
    match lexeme {
        Some(text) => format!("'{}'", text),
        None => match kind {
            TokenKind::Keyword => "a keyword".to_string(),
            TokenKind::Identifier => "an identifier".to_string(),
            TokenKind::Number => "a number".to_string(),
            TokenKind::String => "a string".to_string(),
            TokenKind::Operator => "an operator".to_string(),
            TokenKind::Separator => "a separator".to_string(),
            TokenKind::Comment => "a comment".to_string(),
            TokenKind::Unknown => "an unknown token".to_string(),
        },
    }
}

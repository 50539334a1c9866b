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
 * --------------------------------------------------------------------------
 *  MODULE OVERVIEW
 * --------------------------------------------------------------------------
 * The entire expression grammar: two precedence levels (additive over
 * multiplicative) above atomic factors, with parentheses resetting
 * precedence, plus the single-comparison condition used by `if` and
 * `while`.
 *
 * EBNF repetition attaches flat under the production node, so
 * `1 + 2 * 3` derives as:
 *
 *   Expression[ Term[Factor[1]], +, Term[Factor[2], *, Factor[3]] ]
 *
 * — the `*` binds inside a nested Term before the `+` sees it.
 *
 * ==========================================================================
 */

use crate::error::ParseError;
use crate::lexer::keywords::is_boolean_literal;
use crate::lexer::token::TokenKind;
use crate::parser::parser::Parser;
use crate::tree::DerivationNode;

impl<'a> Parser<'a> {
    /// Expression := Term { ('+'|'-') Term }
    pub(crate) fn expression(&mut self) -> Result<DerivationNode, ParseError> {
        self.note("expression detected");
        let mut node = self.open_node("Expression");

        let first = self.term()?;
        self.attach(&mut node, first);

        loop {
            if self.match_token(TokenKind::Operator, Some("+"))?
                || self.match_token(TokenKind::Operator, Some("-"))?
            {
                let op = self.previous().clone();
                self.note(format!("additive operator detected: {}", op.lexeme));
                self.attach_leaf(&mut node, &op);
                let right = self.term()?;
                self.attach(&mut node, right);
            } else {
                break;
            }
        }

        Ok(self.close_node(node))
    }

    /// Term := Factor { ('*'|'/') Factor }
    pub(crate) fn term(&mut self) -> Result<DerivationNode, ParseError> {
        let mut node = self.open_node("Term");

        let first = self.factor()?;
        self.attach(&mut node, first);

        loop {
            if self.match_token(TokenKind::Operator, Some("*"))?
                || self.match_token(TokenKind::Operator, Some("/"))?
            {
                let op = self.previous().clone();
                self.note(format!("multiplicative operator detected: {}", op.lexeme));
                self.attach_leaf(&mut node, &op);
                let right = self.factor()?;
                self.attach(&mut node, right);
            } else {
                break;
            }
        }

        Ok(self.close_node(node))
    }

    /// Factor := NUMBER | STRING | IDENTIFIER | 'true' | 'false'
    ///         | '(' Expression ')'
    ///
    /// One match arm per atomic alternative, with an explicit default
    /// arm for "no alternative matched".
    pub(crate) fn factor(&mut self) -> Result<DerivationNode, ParseError> {
        let token = self.peek()?;
        let mut node = self.open_node("Factor");

        match (token.kind, token.lexeme.as_str()) {
            (TokenKind::Number, _) => {
                let number = self.advance()?;
                self.note(format!("number detected: {}", number.lexeme));
                self.attach_leaf(&mut node, &number);
            }

            (TokenKind::String, _) => {
                let string = self.advance()?;
                self.note(format!("string detected: {}", string.lexeme));
                self.attach_leaf(&mut node, &string);
            }

            (TokenKind::Identifier, _) => {
                let ident = self.advance()?;
                self.note(format!("identifier detected: {}", ident.lexeme));
                self.attach_leaf(&mut node, &ident);
            }

            // The boolean literals are tokenized as keywords.
            (TokenKind::Keyword, word) if is_boolean_literal(word) => {
                let boolean = self.advance()?;
                self.note(format!("boolean detected: {}", boolean.lexeme));
                self.attach_leaf(&mut node, &boolean);
            }

            (TokenKind::Separator, "(") => {
                let open = self.advance()?;
                self.note("opening parenthesis '('");
                self.attach_leaf(&mut node, &open);

                let inner = self.expression()?;
                self.attach(&mut node, inner);

                let close = self.expect(TokenKind::Separator, Some(")"))?;
                self.note("closing parenthesis ')'");
                self.attach_leaf(&mut node, &close);
            }

            _ => {
                let err = ParseError::invalid_factor(
                    format!("invalid factor: {}", token),
                    token,
                )
                .with_help(
                    "a factor is a number, string, identifier, boolean, or parenthesized expression",
                );
                return Err(self.fail(err));
            }
        }

        Ok(self.close_node(node))
    }

    /// Condition := Expression RelOp Expression
    ///
    /// Exactly one comparison — boolean combinators (`&&`, `||`) are
    /// outside the grammar.
    pub(crate) fn condition(&mut self) -> Result<DerivationNode, ParseError> {
        self.note("condition detected");
        let mut node = self.open_node("Condition");

        let left = self.expression()?;
        self.attach(&mut node, left);

        let op = self.relational_operator()?;
        self.attach(&mut node, op);

        let right = self.expression()?;
        self.attach(&mut node, right);

        Ok(self.close_node(node))
    }

    /// RelOp := '==' | '!=' | '<' | '>' | '<=' | '>='
    ///
    /// Validated by peeking before consuming, so the cursor does not
    /// move past an invalid operator.
    fn relational_operator(&mut self) -> Result<DerivationNode, ParseError> {
        let token = self.peek()?;

        let recognized = token.kind == TokenKind::Operator
            && matches!(
                token.lexeme.as_str(),
                "==" | "!=" | "<" | ">" | "<=" | ">="
            );

        if !recognized {
            let err = ParseError::invalid_relational_operator(
                format!("expected a relational operator, found: {}", token),
                token,
            )
            .with_help("conditions compare with one of: ==, !=, <, >, <=, >=");
            return Err(self.fail(err));
        }

        let mut node = self.open_node("RelOp");
        let op = self.advance()?;
        self.note(format!("relational operator detected: {}", op.lexeme));
        self.attach_leaf(&mut node, &op);

        Ok(self.close_node(node))
    }
}

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
use crate::lexer::keywords::{is_type_keyword, PRINT_KEYWORD};
use crate::lexer::token::TokenKind;
use crate::parser::parser::Parser;
use crate::tree::DerivationNode;

impl<'a> Parser<'a> {
    /// Statement := Declaration ';' | Assignment ';' | PrintStmt ';'
    ///            | IfStmt | WhileStmt
    ///
    /// Dispatch is decided purely by the first unconsumed token — one
    /// arm per alternative, no backtracking. No other statement forms
    /// exist.
    pub(crate) fn statement(&mut self) -> Result<DerivationNode, ParseError> {
        let first = self.peek()?;
        let mut node = self.open_node("Statement");

        match (first.kind, first.lexeme.as_str()) {
            (TokenKind::Keyword, word) if is_type_keyword(word) => {
                let decl = self.declaration()?;
                self.attach(&mut node, decl);
                let semi = self.expect(TokenKind::Separator, Some(";"))?;
                self.attach_leaf(&mut node, &semi);
            }

            (TokenKind::Identifier, _) => {
                let assign = self.assignment()?;
                self.attach(&mut node, assign);
                let semi = self.expect(TokenKind::Separator, Some(";"))?;
                self.attach_leaf(&mut node, &semi);
            }

            (TokenKind::Keyword, word) if word == PRINT_KEYWORD => {
                let print = self.print_statement()?;
                self.attach(&mut node, print);
                let semi = self.expect(TokenKind::Separator, Some(";"))?;
                self.attach_leaf(&mut node, &semi);
            }

            (TokenKind::Keyword, "if") => {
                let if_stmt = self.if_statement()?;
                self.attach(&mut node, if_stmt);
            }

            (TokenKind::Keyword, "while") => {
                let while_stmt = self.while_statement()?;
                self.attach(&mut node, while_stmt);
            }

            _ => {
                self.note(format!("invalid command starting with: {}", first.lexeme));
                let err = ParseError::syntax_error(
                    format!(
                        "expected a declaration, assignment, print, 'if' or 'while', found '{}'",
                        first
                    ),
                    first,
                );
                return Err(self.fail(err));
            }
        }

        Ok(self.close_node(node))
    }

    /// Declaration := Type IDENTIFIER [ '=' Expression ]
    fn declaration(&mut self) -> Result<DerivationNode, ParseError> {
        self.note("declaration detected");
        let mut node = self.open_node("Declaration");

        let ty = self.type_name()?;
        self.attach(&mut node, ty);

        let name = self.expect(TokenKind::Identifier, None)?;
        self.note(format!("identifier detected: {}", name.lexeme));
        self.attach_leaf(&mut node, &name);

        // Initializer is optional.
        if self.match_token(TokenKind::Operator, Some("="))? {
            let eq = self.previous().clone();
            self.note("found '=', expression detected");
            self.attach_leaf(&mut node, &eq);
            let value = self.expression()?;
            self.attach(&mut node, value);
        }

        Ok(self.close_node(node))
    }

    /// Type := 'int' | 'float' | 'boolean' | 'String'
    fn type_name(&mut self) -> Result<DerivationNode, ParseError> {
        let mut node = self.open_node("Type");
        let token = self.advance()?;
        self.note(format!("type detected: {}", token.lexeme));

        if !(token.kind == TokenKind::Keyword && is_type_keyword(&token.lexeme)) {
            let err = ParseError::invalid_type(
                format!("expected a primitive type, found: {}", token),
                token,
            )
            .with_help("declarations start with one of: int, float, boolean, String");
            return Err(self.fail(err));
        }

        self.attach_leaf(&mut node, &token);
        Ok(self.close_node(node))
    }

    /// Assignment := IDENTIFIER '=' Expression
    fn assignment(&mut self) -> Result<DerivationNode, ParseError> {
        self.note("assignment detected");
        let mut node = self.open_node("Assignment");

        let name = self.advance()?;
        self.note(format!("identifier detected: {}", name.lexeme));
        self.attach_leaf(&mut node, &name);

        let eq = self.expect(TokenKind::Operator, Some("="))?;
        self.note("operator '=' detected");
        self.attach_leaf(&mut node, &eq);

        let value = self.expression()?;
        self.attach(&mut node, value);

        Ok(self.close_node(node))
    }

    /// PrintStmt := 'System.out.println' '(' Expression ')'
    fn print_statement(&mut self) -> Result<DerivationNode, ParseError> {
        self.note("print command detected");
        let mut node = self.open_node("PrintStmt");

        let keyword = self.advance()?;
        self.note(format!("keyword detected: {}", keyword.lexeme));
        self.attach_leaf(&mut node, &keyword);

        let open = self.expect(TokenKind::Separator, Some("("))?;
        self.note("opened parenthesis '('");
        self.attach_leaf(&mut node, &open);

        let value = self.expression()?;
        self.attach(&mut node, value);

        let close = self.expect(TokenKind::Separator, Some(")"))?;
        self.note("closed parenthesis ')'");
        self.attach_leaf(&mut node, &close);

        Ok(self.close_node(node))
    }

    /// IfStmt := 'if' '(' Condition ')' '{' { Statement } '}'
    ///           [ 'else' '{' { Statement } '}' ]
    fn if_statement(&mut self) -> Result<DerivationNode, ParseError> {
        self.note("'if' command detected");
        let mut node = self.open_node("IfStmt");

        let keyword = self.advance()?; // the 'if' itself
        self.attach_leaf(&mut node, &keyword);

        let open = self.expect(TokenKind::Separator, Some("("))?;
        self.attach_leaf(&mut node, &open);

        let condition = self.condition()?;
        self.attach(&mut node, condition);

        let close = self.expect(TokenKind::Separator, Some(")"))?;
        self.attach_leaf(&mut node, &close);

        self.block_into(&mut node)?;

        // else branch is optional
        if self.match_token(TokenKind::Keyword, Some("else"))? {
            let else_kw = self.previous().clone();
            self.note("'else' branch detected");
            self.attach_leaf(&mut node, &else_kw);
            self.block_into(&mut node)?;
        }

        Ok(self.close_node(node))
    }

    /// WhileStmt := 'while' '(' Condition ')' '{' { Statement } '}'
    fn while_statement(&mut self) -> Result<DerivationNode, ParseError> {
        self.note("'while' command detected");
        let mut node = self.open_node("WhileStmt");

        let keyword = self.advance()?; // the 'while' itself
        self.attach_leaf(&mut node, &keyword);

        let open = self.expect(TokenKind::Separator, Some("("))?;
        self.attach_leaf(&mut node, &open);

        let condition = self.condition()?;
        self.attach(&mut node, condition);

        let close = self.expect(TokenKind::Separator, Some(")"))?;
        self.attach_leaf(&mut node, &close);

        self.block_into(&mut node)?;

        Ok(self.close_node(node))
    }

    /// Matches `'{' { Statement } '}'`, attaching the braces and every
    /// statement directly to `node` — the grammar keeps block contents
    /// flat under the enclosing construct.
    ///
    /// Running out of input before the closing brace surfaces as
    /// `UnexpectedEndOfInput` from the statement dispatch.
    fn block_into(&mut self, node: &mut DerivationNode) -> Result<(), ParseError> {
        let open = self.expect(TokenKind::Separator, Some("{"))?;
        self.attach_leaf(node, &open);

        loop {
            if self.match_token(TokenKind::Separator, Some("}"))? {
                let close = self.previous().clone();
                self.attach_leaf(node, &close);
                return Ok(());
            }
            let stmt = self.statement()?;
            self.attach(node, stmt);
        }
    }
}

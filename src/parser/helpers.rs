/*
 * ==========================================================================
 * PANDA - Script Grammar Front-End
 * ==========================================================================
 * 
 * File:     parser/helpers.rs
 * Purpose:  Token matching, lookahead and consumption utilities shared
 *           by every grammar rule.
 * 
 * Author:   Sam Wilcox
 * 
 * License:
 * This file is part of the PANDA project.
 * 
 * PANDA is dual-licensed under the terms of:
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

use crate::error::{Diagnostic, Expected, Found};
use crate::lexer::token::{Token, TokenKind};
use crate::parser::parser::{Parser, RuleResult};
use crate::span::Span;

impl<'t> Parser<'t> {
    /// Returns the next unconsumed token without advancing.
    pub fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.current)
    }

    /// Checks whether the next token has `kind`, without consuming it.
    ///
    /// Always `false` at end of input.
    pub fn check(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|t| t.kind == kind)
    }

    /// Consumes the next token if it has `kind`.
    ///
    /// This is the loop predicate for every `( op rhs )*` repetition: on a
    /// mismatch the token stream is left untouched and `false` is returned.
    pub fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes a required token or reports what was found instead.
    ///
    /// # Errors
    /// ```text
    /// expected `Assignment`, found `Integer` (`1`) at offset 2
    /// ```
    pub fn consume(&mut self, kind: TokenKind) -> Result<&'t Token, Diagnostic> {
        match self.peek() {
            Some(token) if token.kind == kind => {
                self.current += 1;
                Ok(token)
            }
            _ => Err(self.unexpected(Expected::Kind(kind))),
        }
    }

    /// Advances one token forward.
    pub fn advance(&mut self) -> Option<&'t Token> {
        let token = self.tokens.get(self.current)?;
        self.current += 1;
        Some(token)
    }

    /// Returns the previously consumed token.
    pub fn previous(&self) -> Option<&'t Token> {
        self.current.checked_sub(1).and_then(|i| self.tokens.get(i))
    }

    /// Returns true once every token has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    /// Fails unless the whole stream has been consumed.
    pub fn expect_end(&self) -> RuleResult {
        if self.is_at_end() {
            Ok(())
        } else {
            Err(self.unexpected(Expected::EndOfInput))
        }
    }

    /// Builds the diagnostic for the token under the cursor.
    pub fn unexpected(&self, expected: Expected) -> Diagnostic {
        match self.peek() {
            Some(token) => Diagnostic::mismatch(expected, Found::Token(token.clone()), token.span),
            None => Diagnostic::mismatch(expected, Found::EndOfInput, self.end_of_input()),
        }
    }

    /// Zero-width span just past the last token, or at `0` for an empty
    /// stream.
    fn end_of_input(&self) -> Span {
        match self.tokens.last() {
            Some(last) => Span::point(
                last.span.end,
                last.span.line,
                last.span.column + last.lexeme.chars().count(),
            ),
            None => Span::point(0, 1, 1),
        }
    }
}

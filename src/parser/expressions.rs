/*
 * ==========================================================================
 * PANDA - Script Grammar Front-End
 * ==========================================================================
 *
 * File:     parser/expressions.rs
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
 * --------------------------------------------------------------------------
 *  MODULE OVERVIEW
 * --------------------------------------------------------------------------
 * This module contains the **entire PANDA expression grammar**.
 *
 * Parsing order follows the precedence ladder, loosest first:
 *
 *   expression → subtExpression → addExpression → multExpression → atomic
 *
 * so `-` binds loosest and `*` tightest. Every level is a zero-or-more
 * loop that re-enters the next level after each operator, which makes
 * each operator left-associative.
 *
 * ==========================================================================
 */

use crate::error::{Diagnostic, Expected};
use crate::lexer::token::TokenKind;
use crate::parser::grammar::{self, Rule};
use crate::parser::parser::{Parser, RuleResult};

impl<'t> Parser<'t> {
    /// expression → subtExpression
    pub fn expression(&mut self) -> RuleResult {
        self.subt_expression()
    }

    /// subtExpression → addExpression ( "-" addExpression )*
    fn subt_expression(&mut self) -> RuleResult {
        self.add_expression()?;

        while self.match_kind(TokenKind::Subtraction) {
            self.add_expression()?;
        }

        Ok(())
    }

    /// addExpression → multExpression ( "+" multExpression )*
    fn add_expression(&mut self) -> RuleResult {
        self.mult_expression()?;

        while self.match_kind(TokenKind::Addition) {
            self.mult_expression()?;
        }

        Ok(())
    }

    /// multExpression → atomicExpression ( "*" atomicExpression )*
    fn mult_expression(&mut self) -> RuleResult {
        self.atomic_expression()?;

        while self.match_kind(TokenKind::Multiplication) {
            self.atomic_expression()?;
        }

        Ok(())
    }

    /// atomicExpression → "(" expression ")" | Integer | Identifier
    ///
    /// Alternatives are picked with one token of lookahead, tried in the
    /// order listed.
    fn atomic_expression(&mut self) -> RuleResult {
        match self.peek().map(|t| t.kind) {
            Some(TokenKind::LParen) => self.grouping(),
            Some(TokenKind::Integer) | Some(TokenKind::Identifier) => {
                self.advance();
                Ok(())
            }
            _ => Err(self.unexpected(Expected::OneOf(grammar::first_set(
                Rule::AtomicExpression,
            )))),
        }
    }

    /// "(" expression ")"
    fn grouping(&mut self) -> RuleResult {
        if self.depth >= self.options.max_depth {
            if let Some(token) = self.peek() {
                return Err(Diagnostic::nesting_too_deep(self.options.max_depth, token.clone()));
            }
        }

        self.consume(TokenKind::LParen)?;
        self.depth += 1;

        self.expression()?;
        self.consume(TokenKind::RParen)?;

        self.depth -= 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Expected;
    use crate::lexer::{lex, TokenKind};
    use crate::parser::parser::{Parser, ParserOptions};

    /// Runs `expression` alone and reports how many tokens it consumed.
    fn consumed(source: &str) -> usize {
        let tokens = lex(source).tokens;
        let mut parser = Parser::new(&tokens, ParserOptions::default());
        parser.expression().unwrap();
        parser.position()
    }

    #[test]
    fn test_loops_stop_at_foreign_token() {
        assert_eq!(consumed("1 + 2 * 3"), 5);
        assert_eq!(consumed("a - b - c"), 5);
        assert_eq!(consumed("a + b - c + d"), 7);
        assert_eq!(consumed("a * b )"), 3);
        assert_eq!(consumed("a == b"), 1);
    }

    #[test]
    fn test_parentheses_override_precedence() {
        assert_eq!(consumed("( 1 + 2 ) * 3"), 7);
        assert_eq!(consumed("((a - b) * (c + 1))"), 13);
    }

    #[test]
    fn test_operator_without_rhs() {
        for source in ["1 -", "1 +", "1 *"] {
            let tokens = lex(source).tokens;
            let mut parser = Parser::new(&tokens, ParserOptions::default());
            let diag = parser.expression().unwrap_err();

            assert_eq!(
                diag.expected,
                Expected::OneOf(vec![TokenKind::LParen, TokenKind::Integer, TokenKind::Identifier])
            );
        }
    }

    #[test]
    fn test_unclosed_group() {
        let tokens = lex("(1 + 2").tokens;
        let mut parser = Parser::new(&tokens, ParserOptions::default());
        let diag = parser.expression().unwrap_err();

        assert_eq!(diag.expected, Expected::Kind(TokenKind::RParen));
    }
}

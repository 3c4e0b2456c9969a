/*
 * ==========================================================================
 * PANDA - Script Grammar Front-End
 * ==========================================================================
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

use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;
use serde::Serialize;
use std::fmt;

/// Fixed text placed in front of every reported syntax failure.
pub const SYNTAX_ERROR_PREAMBLE: &str = "Sad sad panda, parsing errors detected!\n";

/// What the scanner or recognizer actually ran into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Found {
    /// A classified token that was not acceptable here.
    Token(Token),

    /// A character no catalog entry recognizes.
    Char(char),

    /// The token stream ran out.
    EndOfInput,
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Token(token) => write!(f, "`{}` (`{}`)", token.kind, token.lexeme),
            Found::Char(ch) => write!(f, "`{}`", ch),
            Found::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// What would have been accepted at the failing position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Expected {
    /// Exactly one token kind.
    Kind(TokenKind),

    /// Any of several kinds, in the order the alternatives are tried.
    OneOf(Vec<TokenKind>),

    /// Nothing further; the statement is complete.
    EndOfInput,

    /// Any recognizable token (lexical errors).
    AnyToken,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Kind(kind) => write!(f, "`{}`", kind),
            Expected::OneOf(kinds) => {
                let names: Vec<&str> = kinds.iter().map(|k| k.name()).collect();
                write!(f, "one of {{{}}}", names.join(", "))
            }
            Expected::EndOfInput => f.write_str("end of input"),
            Expected::AnyToken => f.write_str("a token"),
        }
    }
}

/// A single reported problem, lexical or syntactic.
///
/// Lexical diagnostics are collected as data next to the token list.
/// Syntactic diagnostics stop recognition and are surfaced through
/// [`SyntaxError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Stable error code (E_LEX, E_SYNTAX, …)
    pub code: &'static str,

    /// Human-readable error message
    pub message: String,

    /// Primary source location
    pub span: Span,

    /// The offending input
    pub found: Found,

    /// What the grammar or vocabulary would have accepted
    pub expected: Expected,

    /// Optional note / help text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl Diagnostic {
    /// Generic constructor
    pub fn new(
        code: &'static str,
        message: impl Into<String>,
        span: Span,
        found: Found,
        expected: Expected,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            span,
            found,
            expected,
            help: None,
        }
    }

    /// A character that starts no token.
    pub fn unrecognized_character(ch: char, span: Span) -> Self {
        Self::new(
            "E_LEX",
            format!("unexpected character: `{}` at offset {}", ch, span.start),
            span,
            Found::Char(ch),
            Expected::AnyToken,
        )
    }

    /// The recognizer needed `expected` but the stream held `found`.
    ///
    /// # Message Format
    /// ```text
    /// expected `Assignment`, found `Integer` (`1`) at offset 2
    /// expected one of {LParen, Integer, Identifier}, found end of input at offset 4
    /// ```
    pub fn mismatch(expected: Expected, found: Found, span: Span) -> Self {
        let code = if expected == Expected::EndOfInput {
            "E_TRAILING"
        } else {
            "E_SYNTAX"
        };

        Self::new(
            code,
            format!("expected {}, found {} at offset {}", expected, found, span.start),
            span,
            found,
            expected,
        )
    }

    /// Parenthesized nesting went past the configured limit.
    pub fn nesting_too_deep(limit: usize, token: Token) -> Self {
        let span = token.span;

        Self::new(
            "E_DEPTH",
            format!(
                "expression nesting exceeds the maximum depth of {} at offset {}",
                limit, span.start
            ),
            span,
            Found::Token(token),
            Expected::OneOf(vec![TokenKind::Integer, TokenKind::Identifier]),
        )
    }

    /// Attach a help message to the diagnostic (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// The failure returned by a rejected parse.
///
/// Carries only the **first** diagnostic; recognition never continues past
/// an error. The displayed text is the fixed preamble followed by that
/// diagnostic's message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    diagnostic: Diagnostic,
}

impl SyntaxError {
    pub fn new(diagnostic: Diagnostic) -> Self {
        Self { diagnostic }
    }

    pub fn diagnostic(&self) -> &Diagnostic {
        &self.diagnostic
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        self.diagnostic
    }
}

impl From<Diagnostic> for SyntaxError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self::new(diagnostic)
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", SYNTAX_ERROR_PREAMBLE, self.diagnostic.message)
    }
}

impl std::error::Error for SyntaxError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_message_names_both_sides() {
        let token = Token::new(TokenKind::Integer, "1", Span::new(2, 3, 1, 3));
        let diag = Diagnostic::mismatch(
            Expected::Kind(TokenKind::Assignment),
            Found::Token(token),
            Span::new(2, 3, 1, 3),
        );

        assert_eq!(diag.code, "E_SYNTAX");
        assert_eq!(diag.message, "expected `Assignment`, found `Integer` (`1`) at offset 2");
    }

    #[test]
    fn test_one_of_lists_kinds_in_order() {
        let expected = Expected::OneOf(vec![
            TokenKind::LParen,
            TokenKind::Integer,
            TokenKind::Identifier,
        ]);
        assert_eq!(expected.to_string(), "one of {LParen, Integer, Identifier}");
    }

    #[test]
    fn test_syntax_error_display_has_preamble() {
        let diag = Diagnostic::mismatch(
            Expected::Kind(TokenKind::RParen),
            Found::EndOfInput,
            Span::point(7, 1, 8),
        );
        let err = SyntaxError::from(diag);

        assert_eq!(
            err.to_string(),
            "Sad sad panda, parsing errors detected!\nexpected `RParen`, found end of input at offset 7"
        );
    }

    #[test]
    fn test_trailing_input_code() {
        let token = Token::new(TokenKind::Integer, "2", Span::new(6, 7, 1, 7));
        let diag = Diagnostic::mismatch(Expected::EndOfInput, Found::Token(token), Span::new(6, 7, 1, 7));

        assert_eq!(diag.code, "E_TRAILING");
        assert!(diag.message.starts_with("expected end of input, found `Integer` (`2`)"));
    }

    #[test]
    fn test_with_help() {
        let diag = Diagnostic::unrecognized_character('$', Span::new(0, 1, 1, 1))
            .with_help("remove the character");

        assert_eq!(diag.help.as_deref(), Some("remove the character"));
        assert_eq!(diag.message, "unexpected character: `$` at offset 0");
    }
}

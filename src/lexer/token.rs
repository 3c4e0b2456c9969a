/*
 * ==========================================================================
 * PANDA - Script Grammar Front-End
 * ==========================================================================
 * 
 * File:     lexer/token.rs
 * Purpose:  Defines the token categories and the positioned token value
 *           produced by the PANDA lexer.
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

use crate::span::Span;
use serde::Serialize;
use std::fmt;

/// Represents the **category of a lexical token** in the PANDA language.
///
/// The set of kinds is fixed. Their recognition patterns and their
/// disambiguation order live in [`crate::lexer::vocabulary`]; this enum only
/// names them.
///
/// # Compiler Pipeline Role
/// ```text
/// Source Text → Lexer → TokenKind → Recognizer → accepted / SyntaxError
/// ```
///
/// `Boolean`, `Equivalence`, `LogicalOR` and `LogicalAND` are lexed but no
/// grammar rule consumes them yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// A user-defined name such as `x` or `Truething`.
    Identifier,

    /// A run of decimal digits: `0`, `42`, `007`.
    Integer,

    /// One of the literal spellings `True` / `False`.
    Boolean,

    /// The two-character operator `==`.
    Equivalence,

    /// The one-character operator `=`.
    Assignment,

    /// `+`
    Addition,

    /// `-`
    Subtraction,

    /// `*`
    Multiplication,

    /// `||`
    LogicalOR,

    /// `&&`
    LogicalAND,

    /// `(`
    LParen,

    /// `)`
    RParen,
}

impl TokenKind {
    /// Every emitted token kind, in declaration order.
    pub const ALL: [TokenKind; 12] = [
        TokenKind::Identifier,
        TokenKind::Integer,
        TokenKind::Boolean,
        TokenKind::Equivalence,
        TokenKind::Assignment,
        TokenKind::Addition,
        TokenKind::Subtraction,
        TokenKind::Multiplication,
        TokenKind::LogicalOR,
        TokenKind::LogicalAND,
        TokenKind::LParen,
        TokenKind::RParen,
    ];

    /// The stable wire name of the kind.
    ///
    /// This is the name used in diagnostics and in the JSON form of a token,
    /// so it must never change between releases.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Identifier => "Identifier",
            TokenKind::Integer => "Integer",
            TokenKind::Boolean => "Boolean",
            TokenKind::Equivalence => "Equivalence",
            TokenKind::Assignment => "Assignment",
            TokenKind::Addition => "Addition",
            TokenKind::Subtraction => "Subtraction",
            TokenKind::Multiplication => "Multiplication",
            TokenKind::LogicalOR => "LogicalOR",
            TokenKind::LogicalAND => "LogicalAND",
            TokenKind::LParen => "LParen",
            TokenKind::RParen => "RParen",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Represents a **single lexical token** produced by the PANDA lexer.
///
/// A `Token` is an immutable, classified slice of the source:
/// - A token category (`TokenKind`)
/// - The original source text (`lexeme`)
/// - Where it came from (`span`)
///
/// # Example Tokens
/// ```text
/// x   →  { kind: Identifier, lexeme: "x",  startOffset: 0, endOffset: 1 }
/// =   →  { kind: Assignment, lexeme: "=",  startOffset: 2, endOffset: 3 }
/// 42  →  { kind: Integer,    lexeme: "42", startOffset: 4, endOffset: 6 }
/// ```
///
/// Tokens are created during one lexing pass and only ever read afterwards;
/// the recognizer borrows them and never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// The classified category of the token.
    pub kind: TokenKind,

    /// The exact source text that produced this token.
    pub lexeme: String,

    /// Position of the lexeme in the source text.
    #[serde(flatten)]
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }
}

impl fmt::Display for Token {
    /// Formats a token for **user-facing output**.
    ///
    /// Only the lexeme is printed. Error messages show users *what they
    /// wrote*, while `{:?}` remains available for the full structure.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}

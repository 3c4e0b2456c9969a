/*
 * ==========================================================================
 * PANDA - Script Grammar Front-End
 * ==========================================================================
 * 
 * File:     lib.rs
 * Purpose:  Crate root: wires the lexer and recognizer together and
 *           exposes the text-level entry points.
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

pub mod diagnostics;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod span;

pub use error::{Diagnostic, Expected, Found, SyntaxError, SYNTAX_ERROR_PREAMBLE};
pub use lexer::{LexResult, Token, TokenKind};
pub use parser::ParserOptions;
pub use span::Span;

/// Lexes `source` into tokens plus any lexical diagnostics.
pub fn lex(source: &str) -> LexResult {
    lexer::lex(source)
}

/// Checks that `source` is one well-formed assignment statement.
///
/// Lexical errors are **not** fatal here: unrecognized characters are
/// skipped by the lexer and the remaining tokens are recognized as usual.
/// Callers that care should run [`lex`] themselves and inspect `errors`.
///
/// # Example
/// ```rust
/// assert!(panda::parse("x = (1 + 2) * 3").is_ok());
///
/// let err = panda::parse("x 1").unwrap_err();
/// assert!(err.to_string().starts_with("Sad sad panda, parsing errors detected!\n"));
/// ```
pub fn parse(source: &str) -> Result<(), SyntaxError> {
    let result = lexer::lex(source);
    parser::parse(&result.tokens)
}

/// [`parse`] with explicit recognizer options.
pub fn parse_with(source: &str, options: ParserOptions) -> Result<(), SyntaxError> {
    let result = lexer::lex(source);
    parser::parse_with(&result.tokens, options)
}

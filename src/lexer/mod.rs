/*
 * ==========================================================================
 * PANDA - Script Grammar Front-End
 * ==========================================================================
 * 
 * File:     lexer/mod.rs
 * Purpose:  Root module for the PANDA lexer.
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

/// Token kinds and the positioned token value.
pub mod token;

/// The ordered catalog of recognition patterns.
pub mod vocabulary;

/// The scanning state machine.
pub mod lexer;

pub use lexer::{LexResult, Lexer};
pub use token::{Token, TokenKind};

/// Public entry point for the PANDA lexing phase.
///
/// A pure function of `source`: lexing the same text twice yields identical
/// results.
///
/// # Example
/// ```rust
/// let result = panda::lexer::lex("x = 1 + 2");
/// assert_eq!(result.tokens.len(), 5);
/// assert!(result.errors.is_empty());
/// ```
pub fn lex(source: &str) -> LexResult {
    Lexer::new(source).scan_tokens()
}

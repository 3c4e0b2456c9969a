/*
 * ==========================================================================
 * PANDA - Script Grammar Front-End
 * ==========================================================================
 * 
 * File:     lexer/lexer.rs
 * Purpose:  Scans PANDA source text into classified tokens using the
 *           ordered vocabulary catalog.
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

use crate::error::Diagnostic;
use crate::lexer::token::Token;
use crate::lexer::vocabulary;
use crate::span::Span;
use serde::Serialize;

/// Everything a single lexing pass produces.
///
/// Both lists are always returned. A non-empty `errors` list does not mean
/// `tokens` is incomplete: unrecognized characters are skipped and scanning
/// carries on, so the caller decides whether lexical errors are fatal.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LexResult {
    /// Tokens in the order they appear in the source.
    pub tokens: Vec<Token>,

    /// One diagnostic per unrecognized character.
    pub errors: Vec<Diagnostic>,
}

impl LexResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

pub struct Lexer<'src> {
    source: &'src str,
    current: usize,
    line: usize,
    column: usize,
    result: LexResult,
}

impl<'src> Lexer<'src> {
    /// Creates a new PANDA lexer over `source`.
    ///
    /// # Returns
    /// A lexer with:
    /// - Cursor at byte offset `0`
    /// - Line and column set to `1`
    /// - Empty token and error buffers
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            current: 0,
            line: 1,
            column: 1,
            result: LexResult::default(),
        }
    }

    /// Performs complete lexical analysis over the entire source input.
    ///
    /// Consumes the lexer, so a lexer instance can only ever run once.
    pub fn scan_tokens(mut self) -> LexResult {
        while !self.is_at_end() {
            self.scan_token();
        }

        self.result
    }

    /// Scans one catalog match, or one unrecognized character.
    ///
    /// # Behavior
    /// - Whitespace is consumed without emitting anything
    /// - A recognized category emits a `Token` covering exactly its match
    /// - Anything else records a diagnostic and skips one character
    fn scan_token(&mut self) {
        let source = self.source;
        let rest = &source[self.current..];

        match vocabulary::classify(rest) {
            Some((entry, len)) => {
                let span = self.advance(len);

                if let Some(kind) = entry.kind {
                    let lexeme = &source[span.start..span.end];
                    self.result.tokens.push(Token::new(kind, lexeme, span));
                }
            }

            None => {
                // `rest` is non-empty here, so there is always a next char.
                let ch = rest.chars().next().unwrap_or('\0');
                let span = self.advance(ch.len_utf8());
                self.result
                    .errors
                    .push(Diagnostic::unrecognized_character(ch, span));
            }
        }
    }

    /// Moves the cursor forward by `len` bytes.
    ///
    /// # Returns
    /// The span covering the consumed text, positioned at its first
    /// character.
    ///
    /// # Line Tracking
    /// Every `\n` consumed bumps the line and resets the column.
    fn advance(&mut self, len: usize) -> Span {
        let start = self.current;
        let span_line = self.line;
        let span_column = self.column;

        for ch in self.source[start..start + len].chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }

        self.current = start + len;

        Span::new(start, self.current, span_line, span_column)
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }
}

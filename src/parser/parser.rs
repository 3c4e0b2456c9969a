/*
 * ==========================================================================
 * PANDA - Script Grammar Front-End
 * ==========================================================================
 * 
 * Core Recursive-Descent Recognizer Entry Point
 * 
 * This file defines the `Parser` structure and the public `parse()` driver
 * used to check a token stream against the PANDA assignment grammar.
 * 
 * The rules themselves are split across multiple modules:
 * - `statements.rs`   → `assignmentStatement`
 * - `expressions.rs`  → expression ladder & operator precedence
 * - `helpers.rs`      → token matching, consumption, and lookahead
 * - `grammar.rs`      → the grammar as data, plus its validation pass
 * 
 * The recognizer builds no tree. A parse either succeeds silently or stops
 * at the first mismatch.
 * 
 * --------------------------------------------------------------------------
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

use crate::error::{Diagnostic, SyntaxError};
use crate::lexer::token::Token;

/// Result of running one grammar rule.
pub type RuleResult = Result<(), Diagnostic>;

/// Tunables for a single parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Deepest allowed `( … )` nesting. Keeps hostile input from exhausting
    /// the stack through recursion.
    pub max_depth: usize,

    /// Accept tokens left over after a complete statement.
    pub allow_trailing: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: 256,
            allow_trailing: false,
        }
    }
}

/// The PANDA recursive-descent recognizer.
///
/// This structure maintains:
/// - A borrowed view of the token stream produced by the lexer
/// - The current cursor position into that stream
/// - The current parenthesis depth
///
/// A `Parser` lives for exactly one parse. The cursor is never shared, so
/// concurrent parses each get their own.
pub struct Parser<'t> {
    /// Complete list of tokens to be recognized.
    pub(crate) tokens: &'t [Token],

    /// Current cursor position within the token stream.
    pub(crate) current: usize,

    /// Number of currently open `LParen` groups.
    pub(crate) depth: usize,

    pub(crate) options: ParserOptions,
}

/// Public entry point for the PANDA recognition phase.
///
/// Uses [`ParserOptions::default`].
///
/// # PANDA Pipeline
/// ```text
/// Source → Lexer → Tokens → Parser → () | SyntaxError
/// ```
///
/// # Example
/// ```rust
/// let result = panda::lexer::lex("x = (1 + 2) * 3");
/// assert!(panda::parser::parse(&result.tokens).is_ok());
/// ```
pub fn parse(tokens: &[Token]) -> Result<(), SyntaxError> {
    parse_with(tokens, ParserOptions::default())
}

/// Same as [`parse`] with explicit options.
pub fn parse_with(tokens: &[Token], options: ParserOptions) -> Result<(), SyntaxError> {
    let mut parser = Parser::new(tokens, options);
    parser.parse().map_err(SyntaxError::from)
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [Token], options: ParserOptions) -> Self {
        Self {
            tokens,
            current: 0,
            depth: 0,
            options,
        }
    }

    /// Recognizes one `assignmentStatement` from the start of the stream.
    ///
    /// # Behavior
    /// - Resets the cursor first, so calling it again re-reads the same
    ///   tokens from the beginning.
    /// - Stops at the first mismatch and returns that diagnostic.
    /// - Unless `allow_trailing` is set, every token must be consumed.
    pub fn parse(&mut self) -> RuleResult {
        self.current = 0;
        self.depth = 0;

        self.assignment_statement()?;

        if !self.options.allow_trailing {
            self.expect_end()?;
        }

        Ok(())
    }

    /// Number of tokens consumed so far.
    pub fn position(&self) -> usize {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Expected, Found};
    use crate::lexer::{lex, TokenKind};

    fn check(source: &str) -> Result<(), SyntaxError> {
        parse(&lex(source).tokens)
    }

    fn diagnostic(source: &str) -> Diagnostic {
        check(source).unwrap_err().into_diagnostic()
    }

    #[test]
    fn test_accepts_precedence_forms() {
        assert!(check("x = 1 + 2 * 3").is_ok());
        assert!(check("x = ( 1 + 2 ) * 3").is_ok());
        assert!(check("x = a - b - c").is_ok());
        assert!(check("x = a + b - c + d").is_ok());
        assert!(check("total = ((a))").is_ok());
        assert!(check("y = 7").is_ok());
    }

    #[test]
    fn test_missing_assignment() {
        let diag = diagnostic("x 1");

        assert_eq!(diag.code, "E_SYNTAX");
        assert_eq!(diag.expected, Expected::Kind(TokenKind::Assignment));
        assert!(matches!(&diag.found, Found::Token(t) if t.kind == TokenKind::Integer && t.lexeme == "1"));
        assert_eq!(diag.message, "expected `Assignment`, found `Integer` (`1`) at offset 2");
    }

    #[test]
    fn test_missing_operand() {
        let diag = diagnostic("x = 1 + * 2");

        assert_eq!(
            diag.message,
            "expected one of {LParen, Integer, Identifier}, found `Multiplication` (`*`) at offset 8"
        );
    }

    #[test]
    fn test_end_of_input_offset() {
        let diag = diagnostic("x = (1 + 2");

        assert_eq!(diag.expected, Expected::Kind(TokenKind::RParen));
        assert_eq!(diag.found, Found::EndOfInput);
        assert_eq!(diag.span.start, 10);
        assert!(diag.message.ends_with("found end of input at offset 10"));
    }

    #[test]
    fn test_empty_stream() {
        let diag = diagnostic("");

        assert_eq!(diag.expected, Expected::Kind(TokenKind::Identifier));
        assert_eq!(diag.found, Found::EndOfInput);
        assert_eq!(diag.span.start, 0);
    }

    #[test]
    fn test_trailing_tokens_rejected_by_default() {
        let diag = diagnostic("x = 1 2");

        assert_eq!(diag.code, "E_TRAILING");
        assert_eq!(diag.expected, Expected::EndOfInput);
    }

    #[test]
    fn test_trailing_tokens_allowed_when_configured() {
        let tokens = lex("x = 1 )").tokens;
        let options = ParserOptions {
            allow_trailing: true,
            ..ParserOptions::default()
        };

        assert!(parse_with(&tokens, options).is_ok());
    }

    #[test]
    fn test_unused_kinds_are_rejected() {
        let diag = diagnostic("x = True");
        assert!(matches!(&diag.found, Found::Token(t) if t.kind == TokenKind::Boolean));

        let diag = diagnostic("x == 1");
        assert!(matches!(&diag.found, Found::Token(t) if t.kind == TokenKind::Equivalence));
    }

    #[test]
    fn test_depth_limit() {
        let options = ParserOptions {
            max_depth: 3,
            ..ParserOptions::default()
        };

        let ok = lex("x = (((1)))").tokens;
        assert!(parse_with(&ok, options).is_ok());

        let deep = lex("x = ((((1))))").tokens;
        let diag = parse_with(&deep, options).unwrap_err().into_diagnostic();
        assert_eq!(diag.code, "E_DEPTH");
        assert_eq!(diag.span.start, 7);
    }

    #[test]
    fn test_parser_reset_between_runs() {
        let tokens = lex("x = a * (b - 1)").tokens;
        let mut parser = Parser::new(&tokens, ParserOptions::default());

        assert!(parser.parse().is_ok());
        assert_eq!(parser.position(), tokens.len());
        assert!(parser.parse().is_ok());
        assert_eq!(parser.position(), tokens.len());
    }
}

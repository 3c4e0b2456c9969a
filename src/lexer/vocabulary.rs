/*
 * ==========================================================================
 * PANDA - Script Grammar Front-End
 * ==========================================================================
 * 
 * File:     lexer/vocabulary.rs
 * Purpose:  The ordered token catalog: one recognition pattern per
 *           category, tried first to last at every scan position.
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

use crate::lexer::token::TokenKind;
use regex::Regex;
use std::sync::LazyLock;

/// A single catalog entry.
///
/// `kind` is `None` for categories that are recognized and thrown away
/// (whitespace). Everything else produces a token of that kind.
#[derive(Debug)]
pub struct Entry {
    /// Display name of the category.
    pub name: &'static str,

    /// The emitted token kind, or `None` for skipped input.
    pub kind: Option<TokenKind>,

    /// Unanchored pattern source, kept for introspection.
    pub source: &'static str,

    /// When set, a match only counts if the next character cannot continue
    /// an identifier. Keeps `Truething` from lexing as `True` + `thing`.
    pub word_boundary: bool,

    pattern: Regex,
}

impl Entry {
    fn new(
        name: &'static str,
        kind: Option<TokenKind>,
        source: &'static str,
        word_boundary: bool,
    ) -> Self {
        let pattern = Regex::new(&format!("^(?:{})", source))
            .unwrap_or_else(|e| panic!("invalid vocabulary pattern for {}: {}", name, e));

        Self {
            name,
            kind,
            source,
            word_boundary,
            pattern,
        }
    }

    /// Tries this entry at the start of `rest`.
    ///
    /// # Returns
    /// The byte length of the longest prefix this pattern accepts, or `None`
    /// if the pattern does not apply here.
    pub fn match_at(&self, rest: &str) -> Option<usize> {
        let m = self.pattern.find(rest)?;
        let len = m.end();

        if len == 0 {
            return None;
        }

        if self.word_boundary && rest[len..].chars().next().is_some_and(is_identifier_char) {
            return None;
        }

        Some(len)
    }
}

/// Characters that may continue an identifier.
pub fn is_identifier_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

static CATALOG: LazyLock<Vec<Entry>> = LazyLock::new(|| {
    vec![
        Entry::new("Whitespace", None, r"\s+", false),
        // Literal spellings must be tried before Identifier, which would
        // otherwise swallow them.
        Entry::new("Boolean", Some(TokenKind::Boolean), "True|False", true),
        Entry::new("Identifier", Some(TokenKind::Identifier), "[A-Za-z_][A-Za-z0-9_]*", false),
        Entry::new("Integer", Some(TokenKind::Integer), "[0-9]+", false),
        // `==` before `=`.
        Entry::new("Equivalence", Some(TokenKind::Equivalence), "==", false),
        Entry::new("Assignment", Some(TokenKind::Assignment), "=", false),
        Entry::new("Addition", Some(TokenKind::Addition), r"\+", false),
        Entry::new("Subtraction", Some(TokenKind::Subtraction), "-", false),
        Entry::new("Multiplication", Some(TokenKind::Multiplication), r"\*", false),
        Entry::new("LogicalOR", Some(TokenKind::LogicalOR), r"\|\|", false),
        Entry::new("LogicalAND", Some(TokenKind::LogicalAND), "&&", false),
        Entry::new("LParen", Some(TokenKind::LParen), r"\(", false),
        Entry::new("RParen", Some(TokenKind::RParen), r"\)", false),
    ]
});

/// Returns the process-wide token catalog in priority order.
///
/// The catalog is built once and is read-only afterwards, so any number of
/// lexers may share it.
///
/// # Disambiguation
/// At each position the **first** entry that matches wins, using the
/// longest match that entry produces by itself:
/// ```text
/// "=="         → Equivalence          (not Assignment, Assignment)
/// "True"       → Boolean
/// "Truething"  → Identifier           (Boolean fails its boundary check)
/// ```
pub fn catalog() -> &'static [Entry] {
    &CATALOG
}

/// Looks up the catalog entry that emits `kind`.
pub fn entry_for(kind: TokenKind) -> Option<&'static Entry> {
    catalog().iter().find(|e| e.kind == Some(kind))
}

/// Selects the winning entry at the start of `rest`.
///
/// # Returns
/// The entry and the byte length it consumes, or `None` when no category
/// recognizes the next character.
pub fn classify(rest: &str) -> Option<(&'static Entry, usize)> {
    catalog()
        .iter()
        .find_map(|entry| entry.match_at(rest).map(|len| (entry, len)))
}

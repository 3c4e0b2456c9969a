/*
 * ==========================================================================
 * PANDA - Script Grammar Front-End
 * ==========================================================================
 * 
 * File:     span.rs
 * Purpose:  Source positions attached to tokens and diagnostics.
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

use serde::Serialize;

/// A location inside the source text.
///
/// Offsets are **byte** offsets so a span can slice the original `&str`
/// directly. `end` is exclusive. `line` and `column` are 1-based and count
/// characters, which is what a human reading an error report expects.
///
/// # Serialized Form
/// ```text
/// { "startOffset": 4, "endOffset": 6, "line": 1, "column": 5 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Span {
    /// Byte offset of the first character.
    #[serde(rename = "startOffset")]
    pub start: usize,

    /// Byte offset one past the last character.
    #[serde(rename = "endOffset")]
    pub end: usize,

    /// 1-based line of `start`.
    pub line: usize,

    /// 1-based column of `start`, in characters.
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self { start, end, line, column }
    }

    /// A zero-width span at `offset`.
    pub fn point(offset: usize, line: usize, column: usize) -> Self {
        Self::new(offset, offset, line, column)
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

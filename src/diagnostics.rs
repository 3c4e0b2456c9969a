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

use crate::error::Diagnostic;
use std::fmt::Write;

/// Responsible for rendering human-friendly, compiler-style diagnostics
/// for PANDA errors.
///
/// This printer:
/// - Formats errors with name/line/column information
/// - Displays the offending source line
/// - Underlines the offending text with carets (`^`)
/// - Optionally shows a helpful follow-up hint
///
/// The output is inspired by `rustc` diagnostics, simplified to remain
/// readable without color.
pub struct DiagnosticPrinter {
    /// Full source text the diagnostics point into.
    source: String,

    /// Display name for the source (e.g. `<input>`).
    name: String,
}

impl DiagnosticPrinter {
    /// Creates a new diagnostic printer for one source text.
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Renders one diagnostic.
    ///
    /// # Output Example
    /// ```text
    /// error[E_SYNTAX]: expected `Assignment`, found `Integer` (`1`) at offset 2
    ///   --> <input>:1:3
    ///    |
    ///  1 | x 1
    ///    |   ^
    /// ```
    pub fn render(&self, diagnostic: &Diagnostic) -> String {
        let span = diagnostic.span;
        let src_line = self
            .source
            .lines()
            .nth(span.line.saturating_sub(1))
            .unwrap_or("");

        // Zero-width spans (end of input) still get a single caret.
        let width = self
            .source
            .get(span.start..span.end)
            .unwrap_or("")
            .chars()
            .take_while(|&c| c != '\n')
            .count()
            .max(1);

        let mut out = String::new();

        // `write!` into a `String` cannot fail.
        let _ = writeln!(
            out,
            "error[{}]: {}\n  --> {}:{}:{}",
            diagnostic.code, diagnostic.message, self.name, span.line, span.column
        );
        let _ = writeln!(out, "   |");
        let _ = writeln!(out, "{:>3} | {}", span.line, src_line);
        let _ = writeln!(
            out,
            "   | {}{}",
            " ".repeat(span.column.saturating_sub(1)),
            "^".repeat(width)
        );

        if let Some(help) = &diagnostic.help {
            let _ = writeln!(out, "\nhelp: {}", help);
        }

        out
    }

    /// Prints a formatted diagnostic to stderr.
    pub fn print(&self, diagnostic: &Diagnostic) {
        eprint!("{}", self.render(diagnostic));
    }

    /// Prints every diagnostic in order.
    pub fn print_all(&self, diagnostics: &[Diagnostic]) {
        for diagnostic in diagnostics {
            self.print(diagnostic);
        }
    }
}

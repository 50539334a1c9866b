/*
 * ==========================================================================
 * TWIG - Grow Your Grammar!
 * ==========================================================================
 *
 * Author:   Sam Wilcox
 * Email:    sam@twig-lang.com
 * Website:  https://www.twig-lang.com
 * Github:   https://github.com/samwilcox/twig
 *
 * License:
 * This file is part of the TWIG parser playground project.
 *
 * TWIG is dual-licensed under the terms of:
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

use crate::error::ParseError;
use crate::span::Span;

/// Renders human-friendly, compiler-style diagnostics for parse errors.
///
/// This printer:
/// - Formats errors with file/line/column information
/// - Displays the offending source line
/// - Highlights the error position using a caret (`^`)
/// - Optionally shows a helpful follow-up hint
///
/// The output is intentionally inspired by `rustc` diagnostics, but
/// simplified and designed to remain readable without color.
pub struct DiagnosticPrinter {
    /// Full source code of the file being parsed, stored whole so
    /// individual lines can be extracted for display.
    source: String,

    /// Name of the source file, used only for display.
    file_name: String,
}

impl DiagnosticPrinter {
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Prints a formatted error diagnostic to stderr.
    ///
    /// # Output Example
    /// ```text
    /// error[E_FACTOR]: invalid factor: ;
    ///   --> example.mj:1:4
    ///    |
    ///  1 | x = ;
    ///    |     ^
    /// ```
    ///
    /// An end-of-input error has no offending token; the caret then
    /// points just past the end of the last source line.
    pub fn print(&self, error: &ParseError) {
        let Span { line, column } = self.anchor(error);

        let lines: Vec<&str> = self.source.lines().collect();

        // Lines are 1-indexed in diagnostics, vectors are 0-indexed.
        let src_line = lines.get(line.saturating_sub(1)).unwrap_or(&"");

        eprintln!(
            "error[{}]: {}\n  --> {}:{}:{}",
            error.code(),
            error.message,
            self.file_name,
            line,
            column + 1
        );

        eprintln!("   |");
        eprintln!("{:>3} | {}", line, src_line);

        let mut underline = String::new();
        for _ in 0..column {
            underline.push(' ');
        }
        underline.push('^');

        eprintln!("   | {}", underline);

        if let Some(help) = &error.help {
            eprintln!("\nhelp: {}", help);
        }
    }

    /// Where the caret should point: the offending token if the error
    /// carries one, otherwise the position just past the last line.
    fn anchor(&self, error: &ParseError) -> Span {
        if let Some(token) = &error.token {
            return token.span;
        }
        let line = self.source.lines().count().max(1);
        let column = self.source.lines().last().map_or(0, |l| l.chars().count());
        Span::new(line, column)
    }
}

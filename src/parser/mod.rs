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

/// Core parser orchestration:
/// - Owns the `Parser` struct
/// - Exposes the `parse(tokens)` and `parse_with_sink(tokens, sink)`
///   entry points
/// - Runs the `Program` production and the trailing-input check
pub mod parser;

/// Statement-level parsing:
/// - first-token statement dispatch
/// - declarations, assignments, print
/// - if / while with brace-delimited bodies
pub mod statements;

/// Expression-level parsing:
/// - expression → term → factor precedence levels
/// - parenthesized subexpressions
/// - single relational comparison conditions
pub mod expressions;

/// Shared parser helpers:
/// - cursor primitives (peek / advance / match / expect)
/// - derivation-node bookkeeping
/// - event and error emission
pub mod helpers;

pub use parser::{parse, parse_with_sink, ParseOutcome, Parser};

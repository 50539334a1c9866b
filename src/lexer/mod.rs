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

/// Core scanning logic:
/// - the composite token pattern
/// - gap sweeping for `Unknown` tokens
/// - line/column tracking
pub mod lexer;

/// Reserved-word tables:
/// - keyword membership
/// - primitive type names
/// - boolean literals
pub mod keywords;

/// Token data model:
/// - `TokenKind` alphabet
/// - immutable `Token` records
pub mod token;

pub use lexer::tokenize;
pub use token::{Token, TokenKind};

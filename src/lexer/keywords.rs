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

/// Determines whether a given lexeme is a **reserved keyword**.
///
/// Used exclusively by the scanner during classification to distinguish
/// user-defined identifiers from language-defined words. The set is a
/// fixed closed list; several entries (`for`, `return`, `public`,
/// `class`, `static`, `void`, `new`) are reserved but carried by no
/// grammar production.
///
/// `System.out.println` is a member even though it could never match the
/// identifier pattern: the scanner lexes the whole phrase as one token so
/// the parser can dispatch print statements on a single keyword.
pub fn is_keyword(word: &str) -> bool {
    matches!(
        word,
        "int"
            | "float"
            | "boolean"
            | "String"
            | "if"
            | "else"
            | "while"
            | "true"
            | "false"
            | "for"
            | "return"
            | "public"
            | "class"
            | "static"
            | "void"
            | "new"
            | "System.out.println"
    )
}

/// Determines whether a keyword names a **primitive type** accepted at
/// the head of a declaration.
pub fn is_type_keyword(word: &str) -> bool {
    matches!(word, "int" | "float" | "boolean" | "String")
}

/// Determines whether a keyword is a **boolean literal**, usable as an
/// atomic factor inside expressions.
pub fn is_boolean_literal(word: &str) -> bool {
    matches!(word, "true" | "false")
}

/// The fused print keyword. The scanner emits the whole phrase as a
/// single `Keyword` token; the parser dispatches on this exact lexeme.
pub const PRINT_KEYWORD: &str = "System.out.println";

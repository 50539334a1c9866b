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

use serde::Serialize;
use std::fmt;

/// One node of the derivation (concrete parse) tree.
///
/// A node is either a **production node** labeled with the grammar rule
/// that created it (`Program`, `Declaration`, `Expression`, …) or a
/// **terminal leaf** labeled with the verbatim lexeme of a consumed
/// token. Children are owned and ordered; the structure is strictly a
/// tree — no sharing, no cycles.
///
/// # Lifecycle
/// A node is created when its grammar rule begins matching, children are
/// attached as sub-rules and terminals are recognized, and the node is
/// final once the rule returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivationNode {
    /// Production name, or the terminal's lexeme.
    pub label: String,

    /// Ordered, owned child nodes. Empty for terminal leaves.
    pub children: Vec<DerivationNode>,
}

impl DerivationNode {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// True for terminal leaves.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Takes ownership of `child` as this node's next (rightmost) child.
    pub fn attach(&mut self, child: DerivationNode) {
        self.children.push(child);
    }

    /// The labels of all terminal leaves, left to right.
    ///
    /// For a tree produced by a successful parse this is exactly the
    /// consumed token sequence: no tokens invented, none dropped.
    pub fn leaves(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a str>) {
        if self.is_leaf() {
            out.push(self.label.as_str());
            return;
        }
        for child in &self.children {
            child.collect_leaves(out);
        }
    }

    fn render(&self, f: &mut fmt::Formatter<'_>, prefix: &str, is_last: bool, is_root: bool) -> fmt::Result {
        if is_root {
            writeln!(f, "{}", self.label)?;
        } else {
            let branch = if is_last { "└─ " } else { "├─ " };
            writeln!(f, "{}{}{}", prefix, branch, self.label)?;
        }

        let child_prefix = if is_root {
            String::new()
        } else if is_last {
            format!("{}   ", prefix)
        } else {
            format!("{}│  ", prefix)
        };

        let count = self.children.len();
        for (i, child) in self.children.iter().enumerate() {
            child.render(f, &child_prefix, i + 1 == count, false)?;
        }
        Ok(())
    }
}

impl fmt::Display for DerivationNode {
    /// Renders the subtree as an ASCII box-drawing outline, one label
    /// per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, "", true, true)
    }
}

/// The completed derivation tree of a whole program.
///
/// Exists only after a successful `parse()` call and is immutable once
/// returned. A failed parse yields no tree (though partially built nodes
/// may already have been reported through the event sink).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivationTree {
    /// The `Program` node anchoring the whole parse.
    pub root: DerivationNode,
}

impl DerivationTree {
    /// The labels of all terminal leaves, left to right.
    pub fn leaves(&self) -> Vec<&str> {
        self.root.leaves()
    }
}

impl fmt::Display for DerivationTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root, f)
    }
}

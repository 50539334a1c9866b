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

use crate::lexer::token::Token;
use serde::Serialize;

/// One observable step of a parse, in the exact order the parser
/// discovered it.
///
/// Events are purely informational: they never affect control flow, and
/// a consumer may ignore them entirely. They exist so external renderers
/// (a log pane, a tree widget, a step-by-step replay) can follow the
/// parse as it happens. Any pacing or throttling belongs to the
/// consumer draining the stream, never to the parser itself.
#[derive(Debug, Clone, Serialize)]
pub enum ParseEvent {
    /// The cursor moved past `token`.
    TokenConsumed { token: Token },

    /// A grammar rule began matching and created the node `label`;
    /// `parent` is the label of the enclosing rule, if any.
    NodeCreated {
        label: String,
        parent: Option<String>,
    },

    /// A finished child (sub-rule or terminal leaf) was attached to its
    /// parent node.
    NodeAttached { parent: String, child: String },

    /// Free-form progress commentary ("declaration detected", …).
    Message { text: String },

    /// The parse failed; this is always the final event of a failing
    /// run. `token` is the offending token when one exists.
    Error {
        message: String,
        token: Option<Token>,
    },
}

/// Push-style observer the parser reports progress to.
///
/// The parser treats the sink as a plain, possibly-blocking callback and
/// assumes nothing about which thread invokes it; a multi-threaded
/// renderer is responsible for its own marshaling. All methods default
/// to no-ops so a sink only implements what it cares about.
pub trait EventSink {
    fn on_token_consumed(&mut self, _token: &Token) {}

    fn on_node_created(&mut self, _label: &str, _parent: Option<&str>) {}

    fn on_node_attached(&mut self, _parent: &str, _child: &str) {}

    fn on_message(&mut self, _text: &str) {}

    fn on_error(&mut self, _message: &str, _token: Option<&Token>) {}
}

/// A sink that discards every event, for headless parsing.
#[derive(Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {}

/// A sink that records every event as a `ParseEvent` value, preserving
/// order. This is what the convenience `parse()` entry point uses to
/// hand the full event log back to the caller.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Vec<ParseEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// All events recorded so far, in delivery order.
    pub fn events(&self) -> &[ParseEvent] {
        &self.events
    }

    /// Consumes the sink, yielding the recorded log.
    pub fn into_events(self) -> Vec<ParseEvent> {
        self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for RecordingSink {
    fn on_token_consumed(&mut self, token: &Token) {
        self.events.push(ParseEvent::TokenConsumed {
            token: token.clone(),
        });
    }

    fn on_node_created(&mut self, label: &str, parent: Option<&str>) {
        self.events.push(ParseEvent::NodeCreated {
            label: label.to_string(),
            parent: parent.map(str::to_string),
        });
    }

    fn on_node_attached(&mut self, parent: &str, child: &str) {
        self.events.push(ParseEvent::NodeAttached {
            parent: parent.to_string(),
            child: child.to_string(),
        });
    }

    fn on_message(&mut self, text: &str) {
        self.events.push(ParseEvent::Message {
            text: text.to_string(),
        });
    }

    fn on_error(&mut self, message: &str, token: Option<&Token>) {
        self.events.push(ParseEvent::Error {
            message: message.to_string(),
            token: token.cloned(),
        });
    }
}

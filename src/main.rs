/*
 * ==========================================================================
 * TWIG - Grow Your Grammar!
 * ==========================================================================
 *
 * Command-line driver: reads a source file, scans and parses it, and
 * renders the result — the derivation tree by default, the raw token
 * stream or the live event replay on request, JSON for tooling.
 *
 * The console renderer below is exactly that: a renderer. It observes
 * the parse through the event sink; the parser core knows nothing
 * about it.
 *
 * --------------------------------------------------------------------------
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

use std::env;
use std::fs;
use std::process;

use twig::diagnostics::DiagnosticPrinter;
use twig::events::EventSink;
use twig::lexer::{tokenize, Token};
use twig::parser::{parse, parse_with_sink};

/// A sink that narrates the parse to stdout, line by line, in the
/// order the parser discovers each step. Pacing a step-by-step replay
/// is this side's concern — the parser never sleeps.
struct ConsoleSink;

impl EventSink for ConsoleSink {
    fn on_token_consumed(&mut self, token: &Token) {
        println!("  consumed {:?} '{}'", token.kind, token.lexeme);
    }

    fn on_node_created(&mut self, label: &str, parent: Option<&str>) {
        match parent {
            Some(parent) => println!("+ node {} (under {})", label, parent),
            None => println!("+ node {}", label),
        }
    }

    fn on_node_attached(&mut self, parent: &str, child: &str) {
        println!("  attached '{}' -> '{}'", parent, child);
    }

    fn on_message(&mut self, text: &str) {
        println!("- {}", text);
    }

    fn on_error(&mut self, message: &str, _token: Option<&Token>) {
        println!("! {}", message);
    }
}

struct Options {
    file: String,
    show_tokens: bool,
    replay_events: bool,
    json: bool,
}

fn usage() -> ! {
    eprintln!("usage: twig [--tokens] [--events] [--json] <file>");
    process::exit(64);
}

fn parse_args() -> Options {
    let mut file = None;
    let mut show_tokens = false;
    let mut replay_events = false;
    let mut json = false;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--tokens" => show_tokens = true,
            "--events" => replay_events = true,
            "--json" => json = true,
            _ if arg.starts_with('-') => usage(),
            _ => {
                if file.replace(arg).is_some() {
                    usage();
                }
            }
        }
    }

    match file {
        Some(file) => Options {
            file,
            show_tokens,
            replay_events,
            json,
        },
        None => usage(),
    }
}

fn main() {
    let options = parse_args();

    let source = match fs::read_to_string(&options.file) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("twig: cannot read {}: {}", options.file, err);
            process::exit(66);
        }
    };

    let tokens = tokenize(&source);

    if options.show_tokens {
        if options.json {
            match serde_json::to_string_pretty(&tokens) {
                Ok(text) => println!("{}", text),
                Err(err) => {
                    eprintln!("twig: cannot serialize tokens: {}", err);
                    process::exit(70);
                }
            }
        } else {
            for token in &tokens {
                println!(
                    "{:<12} {:<24} {}:{}",
                    format!("{:?}", token.kind),
                    token.lexeme,
                    token.span.line,
                    token.span.column
                );
            }
        }
        return;
    }

    if options.replay_events {
        // Narrate the parse live, then print the finished tree.
        let mut sink = ConsoleSink;
        match parse_with_sink(tokens, &mut sink) {
            Ok(tree) => {
                println!();
                print!("{}", tree);
            }
            Err(err) => {
                DiagnosticPrinter::new(options.file.as_str(), source.as_str()).print(&err);
                process::exit(65);
            }
        }
        return;
    }

    match parse(tokens) {
        Ok(outcome) => {
            if options.json {
                match serde_json::to_string_pretty(&outcome) {
                    Ok(text) => println!("{}", text),
                    Err(err) => {
                        eprintln!("twig: cannot serialize parse outcome: {}", err);
                        process::exit(70);
                    }
                }
            } else {
                print!("{}", outcome.tree);
            }
        }
        Err(err) => {
            DiagnosticPrinter::new(options.file.as_str(), source.as_str()).print(&err);
            process::exit(65);
        }
    }
}

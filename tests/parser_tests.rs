//! Grammar scenarios: accepted programs and their derivation trees,
//! rejected programs and their error kinds, and the event protocol.

use twig::events::{ParseEvent, RecordingSink};
use twig::lexer::tokenize;
use twig::parser::{parse, parse_with_sink};
use twig::tree::{DerivationNode, DerivationTree};
use twig::ParseErrorKind;

fn tree_for(source: &str) -> DerivationTree {
    parse(tokenize(source)).expect("source parses").tree
}

fn labels(node: &DerivationNode) -> Vec<&str> {
    node.children.iter().map(|c| c.label.as_str()).collect()
}

#[test]
fn scenario_a_declaration_tree() {
    let tree = tree_for("int x = 5;");

    let program = &tree.root;
    assert_eq!(program.label, "Program");
    assert_eq!(program.children.len(), 1);

    let statement = &program.children[0];
    assert_eq!(statement.label, "Statement");
    assert_eq!(labels(statement), ["Declaration", ";"]);

    let declaration = &statement.children[0];
    assert_eq!(labels(declaration), ["Type", "x", "=", "Expression"]);
    assert_eq!(labels(&declaration.children[0]), ["int"]);

    // Expression → Term → Factor → 5, productions not elided.
    let expression = &declaration.children[3];
    let term = &expression.children[0];
    assert_eq!(term.label, "Term");
    let factor = &term.children[0];
    assert_eq!(factor.label, "Factor");
    assert_eq!(labels(factor), ["5"]);

    assert_eq!(tree.leaves(), ["int", "x", "=", "5", ";"]);
}

#[test]
fn scenario_b_multiplication_binds_tighter() {
    let tree = tree_for("x = 1 + 2 * 3;");

    let statement = &tree.root.children[0];
    let assignment = &statement.children[0];
    assert_eq!(assignment.label, "Assignment");
    assert_eq!(labels(assignment), ["x", "=", "Expression"]);

    let expression = &assignment.children[2];
    assert_eq!(labels(expression), ["Term", "+", "Term"]);

    let left = &expression.children[0];
    assert_eq!(labels(left), ["Factor"]);
    assert_eq!(labels(&left.children[0]), ["1"]);

    // The '*' binds 2 and 3 inside the nested Term before '+' sees it.
    let right = &expression.children[2];
    assert_eq!(labels(right), ["Factor", "*", "Factor"]);
    assert_eq!(labels(&right.children[0]), ["2"]);
    assert_eq!(labels(&right.children[2]), ["3"]);
}

#[test]
fn scenario_c_if_statement_tree() {
    let tree = tree_for("if (x > 0) { y = 1; }");

    let if_stmt = &tree.root.children[0].children[0];
    assert_eq!(if_stmt.label, "IfStmt");
    assert_eq!(
        labels(if_stmt),
        ["if", "(", "Condition", ")", "{", "Statement", "}"]
    );

    let condition = &if_stmt.children[2];
    assert_eq!(labels(condition), ["Expression", "RelOp", "Expression"]);
    assert_eq!(labels(&condition.children[1]), [">"]);

    let body_statement = &if_stmt.children[5];
    assert_eq!(labels(body_statement), ["Assignment", ";"]);
}

#[test]
fn scenario_d_number_in_identifier_position() {
    let err = parse(tokenize("int 5;")).unwrap_err();

    assert_eq!(err.kind, ParseErrorKind::SyntaxError);
    assert_eq!(err.token.as_ref().map(|t| t.lexeme.as_str()), Some("5"));
}

#[test]
fn scenario_e_missing_factor() {
    let err = parse(tokenize("x = ;")).unwrap_err();

    assert_eq!(err.kind, ParseErrorKind::InvalidFactor);
    assert_eq!(err.token.as_ref().map(|t| t.lexeme.as_str()), Some(";"));
}

#[test]
fn scenario_f_missing_semicolon_at_end_of_input() {
    let err = parse(tokenize("int x = 1; int x")).unwrap_err();

    assert_eq!(err.kind, ParseErrorKind::UnexpectedEndOfInput);
    assert!(err.message.contains("';'"), "message was: {}", err.message);
    assert!(err.token.is_none());
}

#[test]
fn empty_source_is_a_valid_program() {
    let outcome = parse(tokenize("")).expect("empty program parses");

    assert_eq!(outcome.tree.root.label, "Program");
    assert!(outcome.tree.root.children.is_empty());
    assert!(outcome.tree.leaves().is_empty());
}

#[test]
fn parsing_is_idempotent() {
    let tokens = tokenize("while (i < 10) { i = i + 1; }");

    let first = parse(tokens.clone()).unwrap().tree;
    let second = parse(tokens).unwrap().tree;
    assert_eq!(first, second);
}

#[test]
fn leaves_equal_consumed_tokens_in_order() {
    let outcome = parse(tokenize("if (x > 0) { y = 1; } z = y * 2;")).unwrap();

    let consumed: Vec<String> = outcome
        .events
        .iter()
        .filter_map(|event| match event {
            ParseEvent::TokenConsumed { token } => Some(token.lexeme.clone()),
            _ => None,
        })
        .collect();
    let leaves: Vec<String> = outcome
        .tree
        .leaves()
        .iter()
        .map(|s| s.to_string())
        .collect();

    assert_eq!(consumed, leaves);
}

#[test]
fn declaration_without_initializer() {
    let tree = tree_for("boolean flag;");

    let declaration = &tree.root.children[0].children[0];
    assert_eq!(labels(declaration), ["Type", "flag"]);
    assert_eq!(labels(&declaration.children[0]), ["boolean"]);
}

#[test]
fn print_statement_tree() {
    let tree = tree_for("System.out.println(x + 1);");

    let statement = &tree.root.children[0];
    assert_eq!(labels(statement), ["PrintStmt", ";"]);

    let print = &statement.children[0];
    assert_eq!(
        labels(print),
        ["System.out.println", "(", "Expression", ")"]
    );
}

#[test]
fn if_with_else_branch() {
    let tree = tree_for("if (x == 1) { } else { y = 2; }");

    let if_stmt = &tree.root.children[0].children[0];
    assert_eq!(
        labels(if_stmt),
        ["if", "(", "Condition", ")", "{", "}", "else", "{", "Statement", "}"]
    );
}

#[test]
fn while_statement_tree() {
    let tree = tree_for("while (n > 0) { n = n - 1; }");

    let while_stmt = &tree.root.children[0].children[0];
    assert_eq!(while_stmt.label, "WhileStmt");
    assert_eq!(
        labels(while_stmt),
        ["while", "(", "Condition", ")", "{", "Statement", "}"]
    );
}

#[test]
fn parentheses_reset_precedence() {
    let tree = tree_for("x = (1 + 2) * 3;");

    let expression = &tree.root.children[0].children[0].children[2];
    assert_eq!(labels(expression), ["Term"]);

    let term = &expression.children[0];
    assert_eq!(labels(term), ["Factor", "*", "Factor"]);

    let grouped = &term.children[0];
    assert_eq!(labels(grouped), ["(", "Expression", ")"]);
}

#[test]
fn booleans_and_strings_are_factors() {
    let tree = tree_for("boolean b = true; String s = \"hi\";");

    let first_decl = &tree.root.children[0].children[0];
    let first_factor = &first_decl.children[3].children[0].children[0];
    assert_eq!(labels(first_factor), ["true"]);

    let second_decl = &tree.root.children[1].children[0];
    let second_factor = &second_decl.children[3].children[0].children[0];
    assert_eq!(labels(second_factor), ["\"hi\""]);
}

#[test]
fn condition_rejects_non_relational_operator() {
    let err = parse(tokenize("if (x = 1) { y = 2; }")).unwrap_err();

    assert_eq!(err.kind, ParseErrorKind::InvalidRelationalOperator);
    assert_eq!(err.token.as_ref().map(|t| t.lexeme.as_str()), Some("="));
}

#[test]
fn statement_dispatch_rejects_unexpected_first_token() {
    let err = parse(tokenize("; int x;")).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::SyntaxError);

    // A comment has no grammar production either.
    let err = parse(tokenize("// just a note")).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::SyntaxError);
}

#[test]
fn unknown_tokens_fail_in_the_parser_not_the_lexer() {
    let tokens = tokenize("int x = 5 @;");
    let err = parse(tokens).unwrap_err();

    assert_eq!(err.kind, ParseErrorKind::SyntaxError);
    assert_eq!(err.token.as_ref().map(|t| t.lexeme.as_str()), Some("@"));
}

#[test]
fn root_node_event_has_no_parent() {
    let outcome = parse(tokenize("int x = 5;")).unwrap();

    let first_created = outcome
        .events
        .iter()
        .find_map(|event| match event {
            ParseEvent::NodeCreated { label, parent } => Some((label.clone(), parent.clone())),
            _ => None,
        })
        .expect("at least one node event");

    assert_eq!(first_created, ("Program".to_string(), None));
    assert!(!outcome
        .events
        .iter()
        .any(|event| matches!(event, ParseEvent::Error { .. })));
}

#[test]
fn node_events_carry_the_enclosing_rule() {
    let outcome = parse(tokenize("int x = 5;")).unwrap();

    let declaration_parent = outcome.events.iter().find_map(|event| match event {
        ParseEvent::NodeCreated { label, parent } if label == "Declaration" => {
            Some(parent.clone())
        }
        _ => None,
    });

    assert_eq!(declaration_parent, Some(Some("Statement".to_string())));
}

#[test]
fn failing_parse_ends_with_exactly_one_error_event() {
    let mut sink = RecordingSink::new();
    let err = parse_with_sink(tokenize("x = ;"), &mut sink).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::InvalidFactor);

    let events = sink.into_events();
    assert!(matches!(events.last(), Some(ParseEvent::Error { .. })));
    assert_eq!(
        events
            .iter()
            .filter(|event| matches!(event, ParseEvent::Error { .. }))
            .count(),
        1
    );
}

#[test]
fn partial_tree_events_precede_a_failure() {
    let mut sink = RecordingSink::new();
    parse_with_sink(tokenize("int x = ;"), &mut sink).unwrap_err();

    // The Declaration had already been announced before the factor
    // failed — useful for partial visualization.
    let events = sink.into_events();
    assert!(events.iter().any(|event| matches!(
        event,
        ParseEvent::NodeCreated { label, .. } if label == "Declaration"
    )));
}

//! Scanner behavior: classification priority, totality, and positions.

use twig::lexer::{tokenize, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).into_iter().map(|t| t.kind).collect()
}

fn lexemes(source: &str) -> Vec<String> {
    tokenize(source).into_iter().map(|t| t.lexeme).collect()
}

#[test]
fn scenario_a_token_sequence() {
    let tokens = tokenize("int x = 5;");

    let got: Vec<(TokenKind, &str)> = tokens
        .iter()
        .map(|t| (t.kind, t.lexeme.as_str()))
        .collect();

    assert_eq!(
        got,
        vec![
            (TokenKind::Keyword, "int"),
            (TokenKind::Identifier, "x"),
            (TokenKind::Operator, "="),
            (TokenKind::Number, "5"),
            (TokenKind::Separator, ";"),
        ]
    );
}

#[test]
fn empty_source_yields_no_tokens() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("   \n\t  ").is_empty());
}

#[test]
fn print_keyword_lexes_as_one_token() {
    let tokens = tokenize("System.out.println(x);");

    assert_eq!(tokens[0].kind, TokenKind::Keyword);
    assert_eq!(tokens[0].lexeme, "System.out.println");
    assert_eq!(
        lexemes("System.out.println(x);"),
        vec!["System.out.println", "(", "x", ")", ";"]
    );
}

#[test]
fn a_similar_dotted_chain_stays_separate_tokens() {
    // Only the exact print phrase is fused.
    assert_eq!(
        lexemes("System.out.print"),
        vec!["System", ".", "out", ".", "print"]
    );
}

#[test]
fn line_comments_are_tokens() {
    let tokens = tokenize("// a note\nint x;");

    assert_eq!(tokens[0].kind, TokenKind::Comment);
    assert_eq!(tokens[0].lexeme, "// a note");
    assert_eq!(tokens[1].lexeme, "int");
}

#[test]
fn string_literals_keep_their_quotes() {
    let tokens = tokenize("String s = \"hello world\";");

    assert_eq!(
        kinds("String s = \"hello world\";"),
        vec![
            TokenKind::Keyword,
            TokenKind::Identifier,
            TokenKind::Operator,
            TokenKind::String,
            TokenKind::Separator,
        ]
    );
    assert_eq!(tokens[3].lexeme, "\"hello world\"");
}

#[test]
fn operator_runs_are_maximal() {
    assert_eq!(lexemes("x <= 10"), vec!["x", "<=", "10"]);
    assert_eq!(lexemes("a==b"), vec!["a", "==", "b"]);
    assert_eq!(kinds("a==b")[1], TokenKind::Operator);
}

#[test]
fn keywords_are_case_sensitive() {
    assert_eq!(kinds("if If"), vec![TokenKind::Keyword, TokenKind::Identifier]);
    // A keyword embedded in a longer word is just an identifier.
    assert_eq!(kinds("integer"), vec![TokenKind::Identifier]);
}

#[test]
fn reserved_but_unused_words_are_keywords() {
    assert_eq!(
        kinds("for return public class static void new"),
        vec![TokenKind::Keyword; 7]
    );
}

#[test]
fn unrecognized_text_becomes_unknown_tokens() {
    let tokens = tokenize("int @ x;");

    assert_eq!(
        tokens
            .iter()
            .map(|t| (t.kind, t.lexeme.as_str()))
            .collect::<Vec<_>>(),
        vec![
            (TokenKind::Keyword, "int"),
            (TokenKind::Unknown, "@"),
            (TokenKind::Identifier, "x"),
            (TokenKind::Separator, ";"),
        ]
    );
}

#[test]
fn unterminated_string_degrades_to_unknown() {
    // The lone quote can satisfy no alternative; the rest re-lexes.
    let tokens = tokenize("x = \"abc");

    assert_eq!(
        tokens
            .iter()
            .map(|t| (t.kind, t.lexeme.as_str()))
            .collect::<Vec<_>>(),
        vec![
            (TokenKind::Identifier, "x"),
            (TokenKind::Operator, "="),
            (TokenKind::Unknown, "\""),
            (TokenKind::Identifier, "abc"),
        ]
    );
}

#[test]
fn digits_glued_to_letters_split_into_unknown_and_identifier() {
    // No word boundary after the digits, so the number alternative
    // cannot match; the digit run is swept up as Unknown.
    assert_eq!(
        tokenize("123abc")
            .iter()
            .map(|t| (t.kind, t.lexeme.as_str()))
            .collect::<Vec<_>>(),
        vec![(TokenKind::Unknown, "123"), (TokenKind::Identifier, "abc")]
    );
}

#[test]
fn every_character_lands_in_exactly_one_token_or_whitespace() {
    let source = "int x = 5;\nwhile (x > 0) { x = x - 1; } // done";
    let joined: String = tokenize(source).iter().map(|t| t.lexeme.as_str()).collect();

    let strip = |s: &str| s.chars().filter(|c| !c.is_whitespace()).collect::<String>();
    assert_eq!(strip(&joined), strip(source));
}

#[test]
fn spans_track_lines_and_columns() {
    let tokens = tokenize("int x;\ny = 1;");

    let x = &tokens[1];
    assert_eq!((x.span.line, x.span.column), (1, 4));

    let y = &tokens[3];
    assert_eq!(y.lexeme, "y");
    assert_eq!((y.span.line, y.span.column), (2, 0));
}

#[test]
fn boolean_literals_are_keywords() {
    assert_eq!(
        kinds("true false"),
        vec![TokenKind::Keyword, TokenKind::Keyword]
    );
}

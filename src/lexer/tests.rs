//! Unit tests for the lexer module.
//!
//! - Keywords and identifiers
//! - Numeric literals (integers and floats)
//! - Operators and punctuation
//! - Comments and whitespace
//! - Positions
//! - Invalid characters

use super::{
    lexer::tokenize,
    tokens::{export_tokens, TokenKind},
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).iter().map(|token| token.kind).collect()
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize(
        "int float bool if else while for do print true false and or not function return",
    );

    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[1].kind, TokenKind::FloatType);
    assert_eq!(tokens[2].kind, TokenKind::Bool);
    assert_eq!(tokens[3].kind, TokenKind::If);
    assert_eq!(tokens[4].kind, TokenKind::Else);
    assert_eq!(tokens[5].kind, TokenKind::While);
    assert_eq!(tokens[6].kind, TokenKind::For);
    assert_eq!(tokens[7].kind, TokenKind::Do);
    assert_eq!(tokens[8].kind, TokenKind::Print);
    assert_eq!(tokens[9].kind, TokenKind::True);
    assert_eq!(tokens[10].kind, TokenKind::False);
    assert_eq!(tokens[11].kind, TokenKind::And);
    assert_eq!(tokens[12].kind, TokenKind::Or);
    assert_eq!(tokens[13].kind, TokenKind::Not);
    assert_eq!(tokens[14].kind, TokenKind::Function);
    assert_eq!(tokens[15].kind, TokenKind::Return);
    assert_eq!(tokens[16].kind, TokenKind::EOF);
    assert_eq!(tokens.len(), 17);
}

#[test]
fn test_keywords_are_case_sensitive() {
    let tokens = tokenize("Int WHILE True");

    assert!(tokens[..3].iter().all(|token| token.kind == TokenKind::Identifier));
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar baz_123 _underscore CamelCase integer");

    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[2].value, "baz_123");
    assert_eq!(tokens[3].value, "_underscore");
    assert_eq!(tokens[4].value, "CamelCase");
    assert_eq!(tokens[5].value, "integer");
    assert!(tokens[..6].iter().all(|token| token.kind == TokenKind::Identifier));
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 3.14 0 100.5");

    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Float);
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].kind, TokenKind::Integer);
    assert_eq!(tokens[3].kind, TokenKind::Float);
    assert_eq!(tokens[3].value, "100.5");
}

#[test]
fn test_trailing_dot_is_not_part_of_number() {
    let tokens = tokenize("5.");

    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[0].value, "5");
    assert_eq!(tokens[1].kind, TokenKind::Invalid);
    assert_eq!(tokens[1].value, ".");
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_number_followed_by_identifier() {
    assert_eq!(
        kinds("12abc"),
        vec![TokenKind::Integer, TokenKind::Identifier, TokenKind::EOF]
    );
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("+ - * / = == != < > <= >= ( ) { } ; ,"),
        vec![
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Multiply,
            TokenKind::Divide,
            TokenKind::Assign,
            TokenKind::Equal,
            TokenKind::NotEqual,
            TokenKind::LessThan,
            TokenKind::GreaterThan,
            TokenKind::LessEqual,
            TokenKind::GreaterEqual,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::Semicolon,
            TokenKind::Comma,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_two_character_operators_are_greedy() {
    let tokens = tokenize("!=");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::NotEqual);
    assert_eq!(tokens[0].value, "!=");

    assert_eq!(kinds("a<=b"), vec![
        TokenKind::Identifier,
        TokenKind::LessEqual,
        TokenKind::Identifier,
        TokenKind::EOF,
    ]);
    assert_eq!(kinds("==="), vec![TokenKind::Equal, TokenKind::Assign, TokenKind::EOF]);
}

#[test]
fn test_lone_bang_is_invalid() {
    let tokens = tokenize("! x");

    assert_eq!(tokens[0].kind, TokenKind::Invalid);
    assert_eq!(tokens[0].value, "!");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
}

#[test]
fn test_invalid_characters_do_not_stop_scanning() {
    let tokens = tokenize("int @x = 1 # 2;");

    assert_eq!(tokens[1].kind, TokenKind::Invalid);
    assert_eq!(tokens[1].value, "@");
    assert_eq!(tokens[5].kind, TokenKind::Invalid);
    assert_eq!(tokens[5].value, "#");
    assert_eq!(tokens.last().map(|token| token.kind), Some(TokenKind::EOF));
}

#[test]
fn test_invalid_multibyte_character() {
    let tokens = tokenize("x = é;");

    assert_eq!(tokens[2].kind, TokenKind::Invalid);
    assert_eq!(tokens[2].value, "é");
    assert_eq!(tokens[3].kind, TokenKind::Semicolon);
    assert_eq!(tokens[3].position.column, 6);
}

#[test]
fn test_only_ascii_whitespace_is_skipped() {
    let tokens = tokenize("int\t x\x0B=\x0C1;\r\nx\u{00A0}= 2;");

    assert_eq!(
        tokens.iter().map(|token| token.kind).collect::<Vec<_>>(),
        vec![
            TokenKind::Int,
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Integer,
            TokenKind::Semicolon,
            TokenKind::Identifier,
            TokenKind::Invalid,
            TokenKind::Assign,
            TokenKind::Integer,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
    assert_eq!(tokens[6].value, "\u{00A0}");
    assert_eq!(tokens[6].position.line, 2);
}

#[test]
fn test_comments_are_skipped() {
    let tokens = tokenize("// leading comment\nint x; // trailing\n// last");

    assert_eq!(
        tokens.iter().map(|token| token.kind).collect::<Vec<_>>(),
        vec![TokenKind::Int, TokenKind::Identifier, TokenKind::Semicolon, TokenKind::EOF]
    );
    assert_eq!(tokens[0].position.line, 2);
}

#[test]
fn test_single_slash_is_divide() {
    assert_eq!(
        kinds("a / b"),
        vec![TokenKind::Identifier, TokenKind::Divide, TokenKind::Identifier, TokenKind::EOF]
    );
}

#[test]
fn test_positions() {
    let tokens = tokenize("int x = 10;\n  print(x);");

    assert_eq!((tokens[0].position.line, tokens[0].position.column), (1, 1));
    assert_eq!((tokens[1].position.line, tokens[1].position.column), (1, 5));
    assert_eq!((tokens[3].position.line, tokens[3].position.column), (1, 9));
    assert_eq!((tokens[4].position.line, tokens[4].position.column), (1, 11));
    assert_eq!((tokens[5].position.line, tokens[5].position.column), (2, 3));
    assert_eq!((tokens[7].position.line, tokens[7].position.column), (2, 9));
}

#[test]
fn test_empty_source() {
    let tokens = tokenize("");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);

    let tokens = tokenize("   \n\t // nothing here");
    assert_eq!(tokens.len(), 1);
}

#[test]
fn test_positions_stay_within_source() {
    let source = "function int add(int a, int b) {\n    return a + b;\n}\nprint(add(1, 2));\n";
    let lines: Vec<&str> = source.split('\n').collect();

    for token in tokenize(source).iter().filter(|token| token.kind != TokenKind::EOF) {
        let line = lines[(token.position.line - 1) as usize];
        assert!(token.position.column >= 1);
        assert!((token.position.column as usize) <= line.chars().count());
    }
}

#[test]
fn test_relexing_lexemes_is_stable() {
    let source = "int x=1;float y = x+1.5; while(x<=10){x=x-1;} // done\nbool b = not (x != 2) and true;";
    let tokens = tokenize(source);
    let rebuilt = tokens
        .iter()
        .map(|token| token.value.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    assert_eq!(
        kinds(&rebuilt),
        tokens.iter().map(|token| token.kind).collect::<Vec<_>>()
    );
}

#[test]
fn test_export_excludes_eof() {
    let records = export_tokens(&tokenize("x = 1;"));

    assert_eq!(records.len(), 4);
    assert_eq!(records[0].kind, "IDENTIFIER");
    assert_eq!(records[1].kind, "ASSIGN");
    assert_eq!(records[2].kind, "INTEGER");
    assert_eq!(records[2].value, "1");
    assert_eq!(records[3].kind, "SEMICOLON");
    assert_eq!(records[3].column, 6);
}

//! Integration tests for the complete front end.
//!
//! These tests drive the public API from source text through tokenization,
//! parsing and type checking, and check the exported result document.

use minilang::{
    ast::{ast::Stmt, types::ValueType},
    lexer::{lexer::tokenize, tokens::TokenKind},
    parser::parser::parse,
    pipeline::pipeline::{compile, Phase},
    type_checker::type_checker::type_check,
};

const PROGRAM: &str = r#"
// Sum of the first n integers, two ways
function int sum(int n) {
    int total = 0;
    for (int i = 1; i <= n; i = i + 1) {
        total = total + i;
    }
    return total;
}

function int sum_rec(int n) {
    if (n <= 0) {
        return 0;
    }
    return n + sum_rec(n - 1);
}

int limit = 10;
float average = sum(limit) / 2.0;
bool same = sum(limit) == sum_rec(limit);
int countdown = 3;

do {
    countdown = countdown - 1;
} while (countdown > 0 and not same == false);

while (countdown < limit) {
    print(countdown * 2);
    countdown = countdown + 1;
}
"#;

#[test]
fn test_compile_complete_program() {
    let result = compile(PROGRAM);

    assert!(result.success, "unexpected errors: {:?}", result.errors);
    assert!(result.errors.is_empty());
    assert_eq!(result.phase, None);

    let symbols = result.symbol_table.expect("symbol table");
    assert_eq!(
        symbols.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["average", "countdown", "limit", "same", "sum", "sum_rec"]
    );
    assert_eq!(symbols["average"].symbol_type, ValueType::Float);
    assert_eq!(symbols["same"].symbol_type, ValueType::Bool);
    assert!(symbols.values().all(|symbol| symbol.initialized));
}

#[test]
fn test_phases_in_sequence() {
    let tokens = tokenize(PROGRAM);
    assert_eq!(tokens.last().map(|token| token.kind), Some(TokenKind::EOF));

    let program = parse(tokens).expect("program should parse");
    assert_eq!(program.statements.len(), 8);
    assert!(matches!(&program.statements[0], Stmt::FunctionDeclaration(f) if f.name == "sum"));
    assert!(matches!(&program.statements[6], Stmt::DoWhileStatement(_)));

    let type_checker = type_check(&program);
    assert!(type_checker.succeeded());
}

#[test]
fn test_syntax_errors_stop_before_analysis() {
    let source = "int a = 1;\nint b = a +;\nprint(undefined);\nwhile (a < 3 {\n}\n";
    let result = compile(source);

    assert!(!result.success);
    assert_eq!(result.phase, Some(Phase::Syntax));
    assert!(result.ast.is_none());
    assert!(result.symbol_table.is_none());
    assert_eq!(
        result.errors,
        vec![
            "Line 2: Unexpected token in expression: ;",
            "Line 4: Expected ')' after condition",
        ]
    );
    assert!(result.errors.iter().all(|error| error.starts_with("Line ")));
}

#[test]
fn test_semantic_errors_are_all_reported() {
    let source = "int x = true;\n\
                  float y;\n\
                  print(y);\n\
                  if (x) { }\n\
                  function int f(int a) { return a; }\n\
                  f(1, 2);\n\
                  return 0;";
    let result = compile(source);

    assert!(!result.success);
    assert_eq!(result.phase, Some(Phase::Semantic));
    assert!(result.ast.is_some());
    assert_eq!(
        result.errors,
        vec![
            "Type mismatch in declaration: expected int, got bool",
            "Variable used before initialization: y",
            "If condition must be boolean, got int",
            "Function 'f' expects 1 argument(s), got 2",
            "Return statement outside of function",
        ]
    );

    let symbols = result.symbol_table.expect("symbol table");
    assert!(symbols["x"].initialized);
    assert!(!symbols["y"].initialized);
}

#[test]
fn test_invalid_characters_are_syntax_errors() {
    let result = compile("int x = 5 $ 3;");

    assert_eq!(result.phase, Some(Phase::Syntax));
    assert!(result
        .tokens
        .iter()
        .any(|token| token.kind == "INVALID" && token.value == "$"));
}

#[test]
fn test_exported_tokens_exclude_end_marker() {
    let result = compile("x = 1; // trailing comment\n");

    let kinds: Vec<&str> = result.tokens.iter().map(|token| token.kind).collect();
    assert_eq!(kinds, vec!["IDENTIFIER", "ASSIGN", "INTEGER", "SEMICOLON"]);
}

#[test]
fn test_result_document_round_trips_through_json() {
    let result = compile("int x = 2;\nx = x * 3;\nprint(x);");
    let document: serde_json::Value =
        serde_json::from_str(&result.to_json(false).expect("serializable")).expect("valid JSON");

    assert_eq!(document["success"], true);
    assert!(document.get("phase").is_none());
    assert_eq!(document["ast"]["statements"][1]["type"], "Assignment");
    assert_eq!(document["ast"]["statements"][1]["value"]["operator"], "*");
    assert_eq!(document["symbol_table"]["x"]["type"], "int");
    assert_eq!(document["errors"], serde_json::json!([]));
}

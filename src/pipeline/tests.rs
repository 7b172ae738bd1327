use serde_json::json;

use super::pipeline::{compile, CompileResult, Phase};
use crate::{ast::types::ValueType, type_checker::symbols::SymbolRecord};

#[test]
fn test_successful_compile() {
    let result = compile("int x = 1;\nprint(x + 2);");

    assert!(result.success);
    assert_eq!(result.phase, None);
    assert!(result.errors.is_empty());
    assert_eq!(result.tokens.len(), 12);
    assert_eq!(result.ast.as_ref().unwrap()["type"], "Program");
    assert_eq!(
        result.symbol_table.as_ref().unwrap()["x"],
        SymbolRecord {
            symbol_type: ValueType::Int,
            initialized: true,
        }
    );
    assert_eq!(result.exit_code(), 0);
}

#[test]
fn test_syntax_failure_has_no_tree() {
    let result = compile("int x = ;\nprint(x);");

    assert!(!result.success);
    assert_eq!(result.phase, Some(Phase::Syntax));
    assert!(result.ast.is_none());
    assert!(result.symbol_table.is_none());
    assert!(!result.tokens.is_empty());
    assert_eq!(result.errors, vec!["Line 1: Unexpected token in expression: ;"]);
    assert_eq!(result.syntax_errors.len(), 1);
    assert_eq!(result.syntax_errors[0].get_position().column, 9);
    assert_eq!(result.exit_code(), 1);
}

#[test]
fn test_semantic_failure_keeps_tree_and_symbols() {
    let result = compile("int x;\nprint(x);");

    assert!(!result.success);
    assert_eq!(result.phase, Some(Phase::Semantic));
    assert!(result.ast.is_some());
    assert!(result.symbol_table.as_ref().unwrap().contains_key("x"));
    assert_eq!(result.errors, vec!["Variable used before initialization: x"]);
    assert!(result.syntax_errors.is_empty());
}

#[test]
fn test_file_error() {
    let result = CompileResult::file_error("Failed to read source file");

    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({
            "success": false,
            "phase": "file",
            "tokens": [],
            "errors": ["Failed to read source file"],
        })
    );
}

#[test]
fn test_json_document_shape() {
    let result = compile("bool b = true;");
    let document: serde_json::Value = serde_json::from_str(&result.to_json(true).unwrap()).unwrap();

    assert_eq!(
        document,
        json!({
            "success": true,
            "tokens": [
                { "type": "BOOL", "value": "bool", "line": 1, "column": 1 },
                { "type": "IDENTIFIER", "value": "b", "line": 1, "column": 6 },
                { "type": "ASSIGN", "value": "=", "line": 1, "column": 8 },
                { "type": "TRUE", "value": "true", "line": 1, "column": 10 },
                { "type": "SEMICOLON", "value": ";", "line": 1, "column": 14 },
            ],
            "ast": {
                "type": "Program",
                "statements": [{
                    "type": "VarDeclaration",
                    "varType": "bool",
                    "name": "b",
                    "value": { "type": "BooleanLiteral", "value": true },
                }],
            },
            "symbol_table": { "b": { "type": "bool", "initialized": true } },
            "errors": [],
        })
    );
}

#[test]
fn test_pretty_and_compact_output() {
    let result = compile("int x = 1;");

    let pretty = result.to_json(false).unwrap();
    let compact = result.to_json(true).unwrap();

    assert!(pretty.contains('\n'));
    assert!(!compact.contains('\n'));
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&pretty).unwrap(),
        serde_json::from_str::<serde_json::Value>(&compact).unwrap()
    );
}

#[test]
fn test_empty_source() {
    let result = compile("");

    assert!(result.success);
    assert!(result.tokens.is_empty());
    assert_eq!(result.ast.unwrap()["statements"], json!([]));
    assert!(result.symbol_table.unwrap().is_empty());
}

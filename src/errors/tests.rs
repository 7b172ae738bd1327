//! Unit tests for error handling.

use crate::ast::types::ValueType;
use crate::errors::errors::{Error, ErrorImpl, ErrorTip, SemanticError};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "@".to_string(),
        },
        Position::new(10, 3),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnexpectedToken {
            token: "@".to_string()
        }
    );
    assert_eq!(error.get_position().line, 10);
    assert_eq!(error.get_position().column, 3);
}

#[test]
fn test_error_display_is_line_prefixed() {
    let error = Error::new(
        ErrorImpl::MissingToken {
            message: "Expected ';' after assignment".to_string(),
        },
        Position::new(4, 7),
    );

    assert_eq!(error.to_string(), "Line 4: Expected ';' after assignment");
}

#[test]
fn test_unexpected_token_in_expression() {
    let error = Error::new(
        ErrorImpl::UnexpectedTokenInExpression {
            token: ";".to_string(),
        },
        Position::new(2, 9),
    );

    assert_eq!(error.to_string(), "Line 2: Unexpected token in expression: ;");
    assert_eq!(error.get_error_name(), "UnexpectedTokenInExpression");
}

#[test]
fn test_error_tips() {
    let missing = Error::new(
        ErrorImpl::MissingToken {
            message: "Expected '('".to_string(),
        },
        Position::start(),
    );
    let expected_type = Error::new(
        ErrorImpl::ExpectedType {
            what: "parameter type".to_string(),
        },
        Position::start(),
    );

    assert!(matches!(missing.get_tip(), ErrorTip::None));
    assert_eq!(
        expected_type.get_tip().to_string(),
        "valid types are `int`, `float` and `bool`"
    );
    assert_eq!(expected_type.to_string(), "Line 1: Expected parameter type");
}

#[test]
fn test_semantic_messages() {
    assert_eq!(
        SemanticError::UndefinedVariable {
            name: "foo".to_string()
        }
        .to_string(),
        "Undefined variable: foo"
    );
    assert_eq!(
        SemanticError::DeclarationTypeMismatch {
            expected: ValueType::Bool,
            received: ValueType::Int,
        }
        .to_string(),
        "Type mismatch in declaration: expected bool, got int"
    );
    assert_eq!(
        SemanticError::ArgumentTypeMismatch {
            name: "add".to_string(),
            position: 2,
            expected: ValueType::Int,
            received: ValueType::Bool,
        }
        .to_string(),
        "Argument 2 of 'add': expected int, got bool"
    );
    assert_eq!(
        SemanticError::InvalidCondition {
            construct: "While",
            received: ValueType::Float,
        }
        .to_string(),
        "While condition must be boolean, got float"
    );
    assert_eq!(
        SemanticError::ReturnOutsideFunction.to_string(),
        "Return statement outside of function"
    );
}

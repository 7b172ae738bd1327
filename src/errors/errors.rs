use std::fmt::Display;

use thiserror::Error;

use crate::{ast::types::ValueType, Position};

/// A syntax diagnostic.
///
/// Displays as `Line <n>: <message>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenInExpression { .. } => "UnexpectedTokenInExpression",
            ErrorImpl::MissingToken { .. } => "MissingToken",
            ErrorImpl::ExpectedType { .. } => "ExpectedType",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => ErrorTip::Suggestion(String::from(
                "statements start with a type, a keyword or an identifier",
            )),
            ErrorImpl::UnexpectedTokenInExpression { .. } => ErrorTip::Suggestion(String::from(
                "expected a literal, an identifier, a call or a parenthesized expression",
            )),
            ErrorImpl::MissingToken { .. } => ErrorTip::None,
            ErrorImpl::ExpectedType { .. } => {
                ErrorTip::Suggestion(String::from("valid types are `int`, `float` and `bool`"))
            }
            ErrorImpl::NumberParseError { .. } => ErrorTip::Suggestion(format!(
                "integer literals must lie within {}..={}",
                i64::MIN,
                i64::MAX
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Line {}: {}", self.position.line, self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("Unexpected token: {token}")]
    UnexpectedToken { token: String },
    #[error("Unexpected token in expression: {token}")]
    UnexpectedTokenInExpression { token: String },
    #[error("{message}")]
    MissingToken { message: String },
    #[error("Expected {what}")]
    ExpectedType { what: String },
    #[error("Invalid numeric literal: {token}")]
    NumberParseError { token: String },
}

/// A semantic diagnostic. Carries no position; its display is the plain message.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SemanticError {
    #[error("Undefined variable: {name}")]
    UndefinedVariable { name: String },
    #[error("Variable used before initialization: {name}")]
    UsedBeforeInitialization { name: String },
    #[error("Variable already declared: {name}")]
    VariableAlreadyDeclared { name: String },
    #[error("Function already declared: {name}")]
    FunctionAlreadyDeclared { name: String },
    #[error("Duplicate parameter '{parameter}' in function '{function}'")]
    DuplicateParameter { function: String, parameter: String },
    #[error("Function '{name}' cannot be used as a variable")]
    FunctionUsedAsVariable { name: String },
    #[error("Cannot assign to function: {name}")]
    AssignmentToFunction { name: String },
    #[error("Undefined function: {name}")]
    UndefinedFunction { name: String },
    #[error("'{name}' is not a function")]
    NotAFunction { name: String },
    #[error("Function '{name}' expects {expected} argument(s), got {received}")]
    ArgumentCountMismatch {
        name: String,
        expected: usize,
        received: usize,
    },
    #[error("Argument {position} of '{name}': expected {expected}, got {received}")]
    ArgumentTypeMismatch {
        name: String,
        position: usize,
        expected: ValueType,
        received: ValueType,
    },
    #[error("Type mismatch in declaration: expected {expected}, got {received}")]
    DeclarationTypeMismatch {
        expected: ValueType,
        received: ValueType,
    },
    #[error("Type mismatch in assignment: expected {expected}, got {received}")]
    AssignmentTypeMismatch {
        expected: ValueType,
        received: ValueType,
    },
    #[error("Invalid operand type for {operator}: {received}")]
    InvalidOperand {
        operator: String,
        received: ValueType,
    },
    #[error("Type mismatch in comparison: {left} and {right}")]
    ComparisonMismatch { left: ValueType, right: ValueType },
    #[error("{construct} condition must be boolean, got {received}")]
    InvalidCondition {
        construct: &'static str,
        received: ValueType,
    },
    #[error("Return statement outside of function")]
    ReturnOutsideFunction,
    #[error("Return type mismatch in function '{function}': expected {expected}, got {received}")]
    ReturnTypeMismatch {
        function: String,
        expected: ValueType,
        received: ValueType,
    },
}

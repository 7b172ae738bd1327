use serde::Serialize;

use super::ast::Expr;

/// Binary Expression
/// Arithmetic, comparison and logical operations. `operator` holds the
/// operator's source text (`+`, `<=`, `and`, ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinaryExpr {
    pub operator: String,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

/// Unary Expression
/// Prefix `not` and prefix `-`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnaryExpr {
    pub operator: String,
    pub operand: Box<Expr>,
}

/// Call Expression
/// Used both inside expressions and as a call statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallExpr {
    pub name: String,
    pub arguments: Vec<Expr>,
}

use serde::Serialize;

use super::{
    ast::{Block, Expr, Stmt},
    types::ValueType,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VarDeclStmt {
    pub var_type: ValueType,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignmentStmt {
    pub name: String,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrintStmt {
    pub expression: Expr,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IfStmt {
    pub condition: Expr,
    pub then_statements: Block,
    pub else_statements: Block,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Block,
}

/// `for (init; condition; update) { body }`. Every header part is optional;
/// `init` is a declaration or assignment, `update` an assignment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForStmt {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init: Option<Box<Stmt>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<Expr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update: Option<Box<Stmt>>,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoWhileStmt {
    pub body: Block,
    pub condition: Expr,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    #[serde(rename = "type")]
    pub param_type: ValueType,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FnDeclStmt {
    pub return_type: ValueType,
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub body: Block,
}

impl FnDeclStmt {
    pub fn parameter_types(&self) -> Vec<ValueType> {
        self.parameters.iter().map(|param| param.param_type).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReturnStmt {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Expr>,
}

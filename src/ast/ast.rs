use serde::Serialize;

use super::{
    expressions::{BinaryExpr, CallExpr, UnaryExpr},
    statements::{
        AssignmentStmt, DoWhileStmt, FnDeclStmt, ForStmt, IfStmt, PrintStmt, ReturnStmt,
        VarDeclStmt, WhileStmt,
    },
};

/// An ordered sequence of statements.
pub type Block = Vec<Stmt>;

/// Root of every parsed tree.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "type")]
pub struct Program {
    pub statements: Block,
}

impl Program {
    /// Structural export of the whole tree. Each node becomes an object
    /// carrying a `type` discriminator and its own fields.
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

/// Statement Types
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Stmt {
    VarDeclaration(VarDeclStmt),
    Assignment(AssignmentStmt),
    PrintStatement(PrintStmt),
    IfStatement(IfStmt),
    WhileStatement(WhileStmt),
    ForStatement(ForStmt),
    DoWhileStatement(DoWhileStmt),
    FunctionDeclaration(FnDeclStmt),
    FunctionCall(CallExpr),
    ReturnStatement(ReturnStmt),
}

impl Stmt {
    /// The node's discriminator as used in the export.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Stmt::VarDeclaration(_) => "VarDeclaration",
            Stmt::Assignment(_) => "Assignment",
            Stmt::PrintStatement(_) => "PrintStatement",
            Stmt::IfStatement(_) => "IfStatement",
            Stmt::WhileStatement(_) => "WhileStatement",
            Stmt::ForStatement(_) => "ForStatement",
            Stmt::DoWhileStatement(_) => "DoWhileStatement",
            Stmt::FunctionDeclaration(_) => "FunctionDeclaration",
            Stmt::FunctionCall(_) => "FunctionCall",
            Stmt::ReturnStatement(_) => "ReturnStatement",
        }
    }
}

/// Expression Types
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Expr {
    IntegerLiteral { value: i64 },
    FloatLiteral { value: f64 },
    BooleanLiteral { value: bool },
    Identifier { name: String },
    BinaryOp(BinaryExpr),
    UnaryOp(UnaryExpr),
    FunctionCall(CallExpr),
}

impl Expr {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::IntegerLiteral { .. } => "IntegerLiteral",
            Expr::FloatLiteral { .. } => "FloatLiteral",
            Expr::BooleanLiteral { .. } => "BooleanLiteral",
            Expr::Identifier { .. } => "Identifier",
            Expr::BinaryOp(_) => "BinaryOp",
            Expr::UnaryOp(_) => "UnaryOp",
            Expr::FunctionCall(_) => "FunctionCall",
        }
    }
}

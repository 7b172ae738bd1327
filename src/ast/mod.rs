/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Program root and the statement/expression sum types
/// - expressions: Payloads of compound expressions
/// - statements: Payloads of statements
/// - types: The value types a declaration can name
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;

//! Type checking and semantic analysis module.
//!
//! Walks a parsed [`Program`](crate::ast::ast::Program) once, in order:
//!
//! - Resolving variable and function references
//! - Inferring expression types and checking them against declarations
//! - Checking function signatures, arity and argument types
//! - Tracking initialization of variables
//!
//! Scoping is a stack of environments: the global one plus one per function
//! body being analyzed. Blocks do not open a scope.

pub mod symbols;
pub mod type_checker;

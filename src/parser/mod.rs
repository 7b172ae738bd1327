//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! Transforms a stream of tokens into a [`Program`](crate::ast::ast::Program).
//! Expressions use a Pratt parser driven by binding powers:
//!
//! `or` < `and` < `== !=` < `< > <= >=` < `+ -` < `* /` < prefix `not`/`-` < primary
//!
//! Statements are dispatched on their leading token. A failed statement is
//! recorded as a diagnostic and the parser resynchronizes after the next `;`.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

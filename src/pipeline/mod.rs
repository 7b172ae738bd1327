//! End-to-end driver.
//!
//! Runs the lexer, the parser and the type checker over one source unit and
//! collects everything into a single serializable [`CompileResult`](pipeline::CompileResult).

pub mod pipeline;

#[cfg(test)]
mod tests;

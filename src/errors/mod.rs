//! Error types for the front end.
//!
//! - Syntax diagnostics with the source position of the offending token
//! - Semantic diagnostics, reported as plain messages
//! - Stable error names and follow-up tips for rendering

pub mod errors;

#[cfg(test)]
mod tests;

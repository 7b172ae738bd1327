//! Lexical analysis module.
//!
//! Converts MiniLang source text into a stream of tokens for parsing:
//!
//! - Recognition of keywords, identifiers, integer and float literals
//! - Greedy two-character operators (`==`, `!=`, `<=`, `>=`)
//! - Line/column tracking for diagnostics
//! - Whitespace and `//` comment skipping
//! - `Invalid` tokens for unrecognised characters instead of aborting

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;

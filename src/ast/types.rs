//! Value types of the language.
//!
//! MiniLang has exactly three value types. They appear in the AST wherever a
//! declaration names a type, and the type checker uses them for inference.

use std::fmt::Display;

use serde::Serialize;

use crate::lexer::tokens::TokenKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Int,
    Float,
    Bool,
}

impl ValueType {
    /// Maps a type keyword token to its value type.
    pub fn from_token_kind(kind: TokenKind) -> Option<ValueType> {
        match kind {
            TokenKind::Int => Some(ValueType::Int),
            TokenKind::FloatType => Some(ValueType::Float),
            TokenKind::Bool => Some(ValueType::Bool),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Int => "int",
            ValueType::Float => "float",
            ValueType::Bool => "bool",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, ValueType::Int | ValueType::Float)
    }
}

impl Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

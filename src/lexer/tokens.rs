use lazy_static::lazy_static;
use serde::Serialize;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("int", TokenKind::Int);
        map.insert("float", TokenKind::FloatType);
        map.insert("bool", TokenKind::Bool);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("for", TokenKind::For);
        map.insert("do", TokenKind::Do);
        map.insert("print", TokenKind::Print);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("and", TokenKind::And);
        map.insert("or", TokenKind::Or);
        map.insert("not", TokenKind::Not);
        map.insert("function", TokenKind::Function);
        map.insert("return", TokenKind::Return);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Invalid,

    // Literals
    Integer,
    Float,
    Identifier,

    // Reserved
    Int,
    FloatType,
    Bool,
    If,
    Else,
    While,
    For,
    Do,
    Print,
    True,
    False,
    Function,
    Return,
    And,
    Or,
    Not,

    Plus,
    Minus,
    Multiply,
    Divide,

    Assign,       // =
    Equal,        // ==
    NotEqual,     // !=
    LessThan,
    GreaterThan,
    LessEqual,
    GreaterEqual,

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    Semicolon,
    Comma,
}

impl TokenKind {
    /// The exported name of the kind, e.g. `NOT_EQUAL`.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::EOF => "EOF",
            TokenKind::Invalid => "INVALID",
            TokenKind::Integer => "INTEGER",
            TokenKind::Float => "FLOAT",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Int => "INT",
            TokenKind::FloatType => "FLOAT_TYPE",
            TokenKind::Bool => "BOOL",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::While => "WHILE",
            TokenKind::For => "FOR",
            TokenKind::Do => "DO",
            TokenKind::Print => "PRINT",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Function => "FUNCTION",
            TokenKind::Return => "RETURN",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Not => "NOT",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Multiply => "MULTIPLY",
            TokenKind::Divide => "DIVIDE",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Equal => "EQUAL",
            TokenKind::NotEqual => "NOT_EQUAL",
            TokenKind::LessThan => "LESS_THAN",
            TokenKind::GreaterThan => "GREATER_THAN",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::OpenParen => "LPAREN",
            TokenKind::CloseParen => "RPAREN",
            TokenKind::OpenCurly => "LBRACE",
            TokenKind::CloseCurly => "RBRACE",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Comma => "COMMA",
        }
    }

    /// Whether the kind names one of the declarable value types.
    pub fn is_type_keyword(&self) -> bool {
        matches!(self, TokenKind::Int | TokenKind::FloatType | TokenKind::Bool)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) at {}", self.kind, self.value, self.position)
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn to_record(&self) -> TokenRecord {
        TokenRecord {
            kind: self.kind.name(),
            value: self.value.clone(),
            line: self.position.line,
            column: self.position.column,
        }
    }
}

/// Exported view of a token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenRecord {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub value: String,
    pub line: u32,
    pub column: u32,
}

/// Exported listing of a token stream, without the end marker.
pub fn export_tokens(tokens: &[Token]) -> Vec<TokenRecord> {
    tokens
        .iter()
        .filter(|token| token.kind != TokenKind::EOF)
        .map(Token::to_record)
        .collect()
}

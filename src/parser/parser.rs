//! Parser state and the top-level parse loop.
//!
//! The parser keeps a cursor into the token stream and the diagnostics
//! recorded so far. Handlers return `Result`; the loop in [`parse`] turns a
//! failed statement into a diagnostic and skips to the next statement
//! boundary (panic-mode recovery at statement granularity).

use log::debug;

use crate::{
    ast::{ast::Program, types::ValueType},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, MK_TOKEN,
};

use super::stmt::parse_stmt;

pub struct Parser {
    /// The list of tokens to parse, always terminated by `EOF`
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Diagnostics recorded by the recovery loop
    errors: Vec<Error>,
}

impl Parser {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let position = tokens
                .last()
                .map(|token| token.position)
                .unwrap_or_else(Position::start);
            tokens.push(MK_TOKEN!(TokenKind::EOF, String::new(), position));
        }

        Parser {
            tokens,
            pos: 0,
            errors: vec![],
        }
    }

    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Kind of the token `offset` places ahead, `EOF` past the end.
    pub fn peek_kind(&self, offset: usize) -> TokenKind {
        self.tokens
            .get(self.pos + offset)
            .map(|token| token.kind)
            .unwrap_or(TokenKind::EOF)
    }

    /// Advances to the next token and returns the previous one. The cursor
    /// never moves past `EOF`.
    pub fn advance(&mut self) -> &Token {
        let previous = self.pos;
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        &self.tokens[previous]
    }

    /// Consumes a token of `expected_kind` or fails with `message` at the
    /// current token's line.
    pub fn expect(&mut self, expected_kind: TokenKind, message: &str) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            return Err(self.error_here(ErrorImpl::MissingToken {
                message: String::from(message),
            }));
        }

        Ok(self.advance().clone())
    }

    /// Consumes a type keyword, failing with "Expected `what`" otherwise.
    pub fn expect_type(&mut self, what: &str) -> Result<ValueType, Error> {
        match ValueType::from_token_kind(self.current_token_kind()) {
            Some(value_type) => {
                self.advance();
                Ok(value_type)
            }
            None => Err(self.error_here(ErrorImpl::ExpectedType {
                what: String::from(what),
            })),
        }
    }

    pub fn error_here(&self, error_impl: ErrorImpl) -> Error {
        Error::new(error_impl, self.get_position())
    }

    /// Text of the current token as it should appear in a diagnostic.
    pub fn current_token_text(&self) -> String {
        let token = self.current_token();
        if token.kind == TokenKind::EOF {
            String::from("end of input")
        } else {
            token.value.clone()
        }
    }

    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Discards tokens up to and including the next `;`, or up to `EOF`.
    pub fn synchronize(&mut self) {
        while !self
            .current_token()
            .is_one_of_many(&[TokenKind::Semicolon, TokenKind::EOF])
        {
            self.advance();
        }

        if self.current_token_kind() == TokenKind::Semicolon {
            self.advance();
        }
    }

    pub fn record_error(&mut self, error: Error) {
        debug!("syntax error recorded: {}", error);
        self.errors.push(error);
    }

    pub fn get_errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn get_position(&self) -> Position {
        self.current_token().position
    }
}

/// Parses a token stream into a program.
///
/// Every syntax error is collected; the tree is only returned when there
/// were none.
pub fn parse(tokens: Vec<Token>) -> Result<Program, Vec<Error>> {
    let mut parser = Parser::new(tokens);
    let mut statements = vec![];

    while parser.has_tokens() {
        match parse_stmt(&mut parser) {
            Ok(stmt) => statements.push(stmt),
            Err(error) => {
                parser.record_error(error);
                parser.synchronize();
            }
        }
    }

    debug!(
        "parsed {} top-level statements with {} syntax errors",
        statements.len(),
        parser.get_errors().len()
    );

    if parser.errors.is_empty() {
        Ok(Program { statements })
    } else {
        Err(parser.errors)
    }
}

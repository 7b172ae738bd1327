use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::ast::{Expr, Stmt},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    LogicalOr,
    LogicalAnd,
    Equality,
    Relational,
    Additive,
    Multiplicative,
    Unary,
    Primary,
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser, Expr, BindingPower) -> Result<Expr, Error>;

pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;

/// Dispatch tables for statements, prefix (NUD) and infix (LED) positions.
pub struct Lookups {
    stmt_lookup: StmtLookup,
    nud_lookup: NUDLookup,
    led_lookup: LEDLookup,
    binding_power_lookup: BPLookup,
}

impl Lookups {
    fn new() -> Self {
        Lookups {
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        }
    }

    /// Registers an infix handler and its binding power.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a prefix handler. Prefix-only tokens get no binding power, so
    /// they end an expression when met in infix position.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    pub fn get_stmt(&self, kind: TokenKind) -> Option<StmtHandler> {
        self.stmt_lookup.get(&kind).copied()
    }

    pub fn get_nud(&self, kind: TokenKind) -> Option<NUDHandler> {
        self.nud_lookup.get(&kind).copied()
    }

    pub fn get_led(&self, kind: TokenKind) -> Option<LEDHandler> {
        self.led_lookup.get(&kind).copied()
    }

    pub fn get_bp(&self, kind: TokenKind) -> BindingPower {
        self.binding_power_lookup
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::Default)
    }
}

lazy_static! {
    pub static ref LOOKUPS: Lookups = create_token_lookups();
}

pub fn create_token_lookups() -> Lookups {
    let mut lookups = Lookups::new();

    // Logical
    lookups.led(TokenKind::Or, BindingPower::LogicalOr, parse_binary_expr);
    lookups.led(TokenKind::And, BindingPower::LogicalAnd, parse_binary_expr);

    // Equality and relational
    lookups.led(TokenKind::Equal, BindingPower::Equality, parse_binary_expr);
    lookups.led(TokenKind::NotEqual, BindingPower::Equality, parse_binary_expr);
    lookups.led(TokenKind::LessThan, BindingPower::Relational, parse_binary_expr);
    lookups.led(TokenKind::GreaterThan, BindingPower::Relational, parse_binary_expr);
    lookups.led(TokenKind::LessEqual, BindingPower::Relational, parse_binary_expr);
    lookups.led(TokenKind::GreaterEqual, BindingPower::Relational, parse_binary_expr);

    // Additive and multiplicative
    lookups.led(TokenKind::Plus, BindingPower::Additive, parse_binary_expr);
    lookups.led(TokenKind::Minus, BindingPower::Additive, parse_binary_expr);
    lookups.led(TokenKind::Multiply, BindingPower::Multiplicative, parse_binary_expr);
    lookups.led(TokenKind::Divide, BindingPower::Multiplicative, parse_binary_expr);

    // Literals, symbols and prefixes
    lookups.nud(TokenKind::Integer, parse_primary_expr);
    lookups.nud(TokenKind::Float, parse_primary_expr);
    lookups.nud(TokenKind::True, parse_primary_expr);
    lookups.nud(TokenKind::False, parse_primary_expr);
    lookups.nud(TokenKind::Identifier, parse_identifier_expr);
    lookups.nud(TokenKind::OpenParen, parse_grouping_expr);
    lookups.nud(TokenKind::Not, parse_prefix_expr);
    lookups.nud(TokenKind::Minus, parse_prefix_expr);

    // Statements
    lookups.stmt(TokenKind::Function, parse_fn_decl_stmt);
    lookups.stmt(TokenKind::Int, parse_var_decl_stmt);
    lookups.stmt(TokenKind::FloatType, parse_var_decl_stmt);
    lookups.stmt(TokenKind::Bool, parse_var_decl_stmt);
    lookups.stmt(TokenKind::Return, parse_return_stmt);
    lookups.stmt(TokenKind::Print, parse_print_stmt);
    lookups.stmt(TokenKind::If, parse_if_stmt);
    lookups.stmt(TokenKind::While, parse_while_stmt);
    lookups.stmt(TokenKind::For, parse_for_stmt);
    lookups.stmt(TokenKind::Do, parse_do_while_stmt);
    lookups.stmt(TokenKind::Identifier, parse_identifier_stmt);

    lookups
}

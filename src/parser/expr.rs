use crate::{
    ast::{
        ast::Expr,
        expressions::{BinaryExpr, CallExpr, UnaryExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{BindingPower, LOOKUPS},
    parser::Parser,
};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let Some(nud_fn) = LOOKUPS.get_nud(parser.current_token_kind()) else {
        return Err(parser.error_here(ErrorImpl::UnexpectedTokenInExpression {
            token: parser.current_token_text(),
        }));
    };

    let mut left = nud_fn(parser)?;

    // While the next operator binds tighter than the caller, keep extending lhs
    loop {
        let token_kind = parser.current_token_kind();
        let next_bp = LOOKUPS.get_bp(token_kind);
        if next_bp <= bp {
            break;
        }

        let Some(led_fn) = LOOKUPS.get_led(token_kind) else {
            break;
        };

        left = led_fn(parser, left, next_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    let expr = match token.kind {
        TokenKind::Integer => Expr::IntegerLiteral {
            value: token.value.parse().map_err(|_| {
                parser.error_here(ErrorImpl::NumberParseError {
                    token: token.value.clone(),
                })
            })?,
        },
        TokenKind::Float => Expr::FloatLiteral {
            value: token.value.parse().map_err(|_| {
                parser.error_here(ErrorImpl::NumberParseError {
                    token: token.value.clone(),
                })
            })?,
        },
        TokenKind::True => Expr::BooleanLiteral { value: true },
        TokenKind::False => Expr::BooleanLiteral { value: false },
        _ => {
            return Err(parser.error_here(ErrorImpl::UnexpectedTokenInExpression {
                token: parser.current_token_text(),
            }))
        }
    };

    parser.advance();
    Ok(expr)
}

/// A bare identifier, or a call when the name is directly followed by `(`.
pub fn parse_identifier_expr(parser: &mut Parser) -> Result<Expr, Error> {
    if parser.peek_kind(1) == TokenKind::OpenParen {
        return Ok(Expr::FunctionCall(parse_call_expr(parser)?));
    }

    let name = parser.expect(TokenKind::Identifier, "Expected identifier")?.value;
    Ok(Expr::Identifier { name })
}

/// `name ( [expr {, expr}] )`, shared by call expressions and call statements.
pub fn parse_call_expr(parser: &mut Parser) -> Result<CallExpr, Error> {
    let name = parser
        .expect(TokenKind::Identifier, "Expected function name")?
        .value;

    parser.expect(TokenKind::OpenParen, "Expected '(' after function name")?;

    let mut arguments = vec![];
    while !matches!(
        parser.current_token_kind(),
        TokenKind::CloseParen | TokenKind::EOF
    ) {
        arguments.push(parse_expr(parser, BindingPower::Default)?);

        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
        } else {
            break;
        }
    }

    parser.expect(TokenKind::CloseParen, "Expected ')' after arguments")?;

    Ok(CallExpr { name, arguments })
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator = parser.advance().value.clone();
    let right = parse_expr(parser, bp)?;

    Ok(Expr::BinaryOp(BinaryExpr {
        operator,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator = parser.advance().value.clone();
    // Parsing at `Unary` stops before any infix operator, so the prefix binds
    // tightest; a nested prefix is reached through the NUD table.
    let operand = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::UnaryOp(UnaryExpr {
        operator,
        operand: Box::new(operand),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen, "Expected ')' after expression")?;

    Ok(expr)
}

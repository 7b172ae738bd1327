use crate::{
    ast::{
        ast::{Block, Stmt},
        statements::{
            AssignmentStmt, DoWhileStmt, FnDeclStmt, ForStmt, IfStmt, Parameter, PrintStmt,
            ReturnStmt, VarDeclStmt, WhileStmt,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{
        expr::{parse_call_expr, parse_expr},
        lookups::{BindingPower, LOOKUPS},
    },
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    match LOOKUPS.get_stmt(parser.current_token_kind()) {
        Some(stmt_fn) => stmt_fn(parser),
        None => Err(parser.error_here(ErrorImpl::UnexpectedToken {
            token: parser.current_token_text(),
        })),
    }
}

/// `{ stmt* }`, stopping early at `EOF` so the closing brace is reported missing.
fn parse_block(parser: &mut Parser, open_message: &str, close_message: &str) -> Result<Block, Error> {
    parser.expect(TokenKind::OpenCurly, open_message)?;

    let mut statements = vec![];
    while !matches!(
        parser.current_token_kind(),
        TokenKind::CloseCurly | TokenKind::EOF
    ) {
        statements.push(parse_stmt(parser)?);
    }

    parser.expect(TokenKind::CloseCurly, close_message)?;

    Ok(statements)
}

/// `type name [= expr]` without the terminating `;`.
fn parse_var_decl(parser: &mut Parser) -> Result<VarDeclStmt, Error> {
    let var_type = parser.expect_type("variable type")?;
    let name = parser
        .expect(TokenKind::Identifier, "Expected identifier after type")?
        .value;

    let value = if parser.current_token_kind() == TokenKind::Assign {
        parser.advance();
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    Ok(VarDeclStmt {
        var_type,
        name,
        value,
    })
}

/// `name = expr` without the terminating `;`.
fn parse_assignment(parser: &mut Parser, assign_message: &str) -> Result<AssignmentStmt, Error> {
    let name = parser
        .expect(TokenKind::Identifier, "Expected identifier")?
        .value;
    parser.expect(TokenKind::Assign, assign_message)?;
    let value = parse_expr(parser, BindingPower::Default)?;

    Ok(AssignmentStmt { name, value })
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let decl = parse_var_decl(parser)?;
    parser.expect(TokenKind::Semicolon, "Expected ';' after variable declaration")?;

    Ok(Stmt::VarDeclaration(decl))
}

/// Either a call statement (`name(...)`) or an assignment (`name = ...`).
pub fn parse_identifier_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if parser.peek_kind(1) == TokenKind::OpenParen {
        let call = parse_call_expr(parser)?;
        parser.expect(TokenKind::Semicolon, "Expected ';' after function call")?;
        return Ok(Stmt::FunctionCall(call));
    }

    let assignment = parse_assignment(parser, "Expected '=' in assignment")?;
    parser.expect(TokenKind::Semicolon, "Expected ';' after assignment")?;

    Ok(Stmt::Assignment(assignment))
}

pub fn parse_print_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();
    parser.expect(TokenKind::OpenParen, "Expected '(' after 'print'")?;
    let expression = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen, "Expected ')' after expression")?;
    parser.expect(TokenKind::Semicolon, "Expected ';' after print statement")?;

    Ok(Stmt::PrintStatement(PrintStmt { expression }))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();
    parser.expect(TokenKind::OpenParen, "Expected '(' after 'if'")?;
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen, "Expected ')' after condition")?;

    let then_statements = parse_block(
        parser,
        "Expected '{' after if condition",
        "Expected '}' after if body",
    )?;

    let else_statements = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        parse_block(parser, "Expected '{' after 'else'", "Expected '}' after else body")?
    } else {
        vec![]
    };

    Ok(Stmt::IfStatement(IfStmt {
        condition,
        then_statements,
        else_statements,
    }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();
    parser.expect(TokenKind::OpenParen, "Expected '(' after 'while'")?;
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen, "Expected ')' after condition")?;

    let body = parse_block(
        parser,
        "Expected '{' after while condition",
        "Expected '}' after while body",
    )?;

    Ok(Stmt::WhileStatement(WhileStmt { condition, body }))
}

pub fn parse_for_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();
    parser.expect(TokenKind::OpenParen, "Expected '(' after 'for'")?;

    let init = match parser.current_token_kind() {
        kind if kind.is_type_keyword() => Some(Box::new(Stmt::VarDeclaration(parse_var_decl(parser)?))),
        TokenKind::Identifier => Some(Box::new(Stmt::Assignment(parse_assignment(
            parser,
            "Expected '=' in assignment",
        )?))),
        _ => None,
    };
    parser.expect(TokenKind::Semicolon, "Expected ';' after for loop init")?;

    let condition = if parser.current_token_kind() != TokenKind::Semicolon {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };
    parser.expect(TokenKind::Semicolon, "Expected ';' after for loop condition")?;

    let update = if parser.current_token_kind() == TokenKind::Identifier {
        Some(Box::new(Stmt::Assignment(parse_assignment(
            parser,
            "Expected '=' in for loop update",
        )?)))
    } else {
        None
    };
    parser.expect(TokenKind::CloseParen, "Expected ')' after for loop header")?;

    let body = parse_block(
        parser,
        "Expected '{' after for loop header",
        "Expected '}' after for loop body",
    )?;

    Ok(Stmt::ForStatement(ForStmt {
        init,
        condition,
        update,
        body,
    }))
}

pub fn parse_do_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let body = parse_block(parser, "Expected '{' after 'do'", "Expected '}' after do body")?;

    parser.expect(TokenKind::While, "Expected 'while' after do body")?;
    parser.expect(TokenKind::OpenParen, "Expected '(' after 'while'")?;
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen, "Expected ')' after condition")?;
    parser.expect(TokenKind::Semicolon, "Expected ';' after do-while statement")?;

    Ok(Stmt::DoWhileStatement(DoWhileStmt { body, condition }))
}

pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let return_type = parser.expect_type("return type after 'function'")?;
    let name = parser
        .expect(TokenKind::Identifier, "Expected function name")?
        .value;

    parser.expect(TokenKind::OpenParen, "Expected '(' after function name")?;

    let mut parameters = vec![];
    while !matches!(
        parser.current_token_kind(),
        TokenKind::CloseParen | TokenKind::EOF
    ) {
        let param_type = parser.expect_type("parameter type")?;
        let param_name = parser
            .expect(TokenKind::Identifier, "Expected parameter name")?
            .value;
        parameters.push(Parameter {
            param_type,
            name: param_name,
        });

        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
        } else {
            break;
        }
    }

    parser.expect(TokenKind::CloseParen, "Expected ')' after parameters")?;

    let body = parse_block(
        parser,
        "Expected '{' after function header",
        "Expected '}' after function body",
    )?;

    Ok(Stmt::FunctionDeclaration(FnDeclStmt {
        return_type,
        name,
        parameters,
        body,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let value = if parser.current_token_kind() != TokenKind::Semicolon {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    parser.expect(TokenKind::Semicolon, "Expected ';' after return statement")?;

    Ok(Stmt::ReturnStatement(ReturnStmt { value }))
}

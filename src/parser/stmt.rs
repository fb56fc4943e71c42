use log::trace;

use crate::{
    ast::{
        ast::Stmt,
        expressions::BlockExpr,
        statements::{ExpressionStmt, FnDeclStmt, IfStmt, LetStmt, ReturnStmt},
    },
    errors::errors::{Error, Expected},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::{lookups::stmt_lookup, parser::Parser};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if let Some(handler) = parser.current_token_kind().and_then(stmt_lookup) {
        return handler(parser);
    }

    let expression = parse_expr(parser, BindingPower::Lowest)?;

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Expression(ExpressionStmt { expression }))
}

fn expect_identifier(parser: &mut Parser) -> Result<String, Error> {
    Ok(parser
        .expect(TokenKind::Identifier)?
        .literal
        .unwrap_or_default())
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    trace!("parsing let statement at {:?}", parser.get_position());
    parser.expect(TokenKind::Let)?;

    let identifier = expect_identifier(parser)?;
    parser.expect(TokenKind::Assignment)?;
    let value = parse_expr(parser, BindingPower::Lowest)?;

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Let(LetStmt { identifier, value }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    trace!("parsing return statement at {:?}", parser.get_position());
    parser.expect(TokenKind::Return)?;

    if parser.eat(TokenKind::Semicolon) {
        return Ok(Stmt::Return(ReturnStmt { value: None }));
    }

    let value = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Return(ReturnStmt { value: Some(value) }))
}

pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    trace!("parsing function definition at {:?}", parser.get_position());
    parser.expect(TokenKind::Fn)?;

    let identifier = expect_identifier(parser)?;

    parser.expect(TokenKind::OpenParen)?;
    let parameters = parser.parse_list(expect_identifier)?;
    parser.expect(TokenKind::CloseParen)?;

    let body = parse_block(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    trace!("parsed function {identifier} with {} parameters", parameters.len());
    Ok(Stmt::FnDecl(FnDeclStmt {
        identifier,
        parameters,
        body,
    }))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    trace!("parsing if statement at {:?}", parser.get_position());
    parser.expect(TokenKind::If)?;

    let condition = parse_expr(parser, BindingPower::Lowest)?;
    let consequence = parse_block(parser)?;

    let mut alternatives = Vec::new();
    while parser.eat(TokenKind::Elseif) {
        let condition = parse_expr(parser, BindingPower::Lowest)?;
        alternatives.push((condition, parse_block(parser)?));
    }

    let fallback = if parser.eat(TokenKind::Else) {
        Some(parse_block(parser)?)
    } else {
        None
    };

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::If(IfStmt {
        condition,
        consequence,
        alternatives,
        fallback,
    }))
}

/// `elseif`/`else` without a preceding `if` cannot start a statement.
pub fn parse_orphan_branch_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    Err(parser.unexpected(Expected::Statement))
}

/// `{ statements }`, shared by block expressions, function bodies and if branches.
pub fn parse_block(parser: &mut Parser) -> Result<BlockExpr, Error> {
    parser.expect(TokenKind::OpenCurly)?;

    let mut statements = Vec::new();
    while parser.current_token_kind() != Some(TokenKind::CloseCurly) {
        if !parser.has_tokens() {
            return Err(parser.unexpected(Expected::Token(TokenKind::CloseCurly)));
        }
        statements.push(parse_stmt(parser)?);
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(BlockExpr::new(statements))
}

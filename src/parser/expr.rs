use crate::{
    ast::{
        ast::Expr,
        expressions::{BinaryOperator, CallExpr, Literal, UnaryOperator},
    },
    errors::errors::{Error, Expected},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{led_lookup, nud_lookup, BindingPower},
    parser::Parser,
    stmt::parse_block,
};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let nud = parser
        .current_token_kind()
        .and_then(nud_lookup)
        .ok_or_else(|| parser.unexpected(Expected::Expression))?;

    let mut left = nud(parser)?;

    // While the next token binds tighter than the context, keep extending lhs
    while let Some(token_kind) = parser.current_token_kind() {
        if token_kind == TokenKind::Semicolon {
            break;
        }

        let Some((led_bp, led)) = led_lookup(token_kind) else {
            break;
        };
        if led_bp <= bp {
            break;
        }

        left = led(parser, left, led_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let Some(token) = parser.advance() else {
        return Err(parser.unexpected(Expected::Expression));
    };
    let literal = token.literal_str();

    match token.kind {
        TokenKind::Identifier => Ok(Expr::Identifier(String::from(literal))),
        TokenKind::String => Ok(Expr::Literal(Literal::String(String::from(literal)))),
        TokenKind::Bool => Ok(Expr::Literal(Literal::Bool(literal == "true"))),
        TokenKind::Number => match literal.parse::<f64>() {
            Ok(value) => Ok(Expr::Literal(Literal::Number(value))),
            Err(_) => Err(Error::illegal_lexeme(literal, token.span.start)),
        },
        _ => Err(Error::unexpected_token(
            Expected::Expression,
            Some(token.clone()),
            token.span.start,
        )),
    }
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let Some(operator_token) = parser.advance() else {
        return Err(parser.unexpected(Expected::Expression));
    };
    let operator = UnaryOperator::try_from(operator_token.kind).map_err(|_| {
        Error::unexpected_token(
            Expected::Expression,
            Some(operator_token.clone()),
            operator_token.span.start,
        )
    })?;

    let operand = parse_expr(parser, BindingPower::Prefix)?;

    Ok(Expr::unary(operator, operand))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let expr = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_block_expr(parser: &mut Parser) -> Result<Expr, Error> {
    Ok(Expr::Block(parse_block(parser)?))
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let position = parser.get_position();
    let Some(operator_token) = parser.advance() else {
        return Err(parser.unexpected(Expected::Expression));
    };
    let operator = BinaryOperator::try_from(operator_token.kind).map_err(|_| {
        Error::unexpected_token(Expected::Expression, Some(operator_token.clone()), position)
    })?;

    let right = parse_expr(parser, bp)?;

    Ok(Expr::binary(left, operator, right))
}

pub fn parse_call_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    let Expr::Identifier(callee) = left else {
        return Err(parser.unexpected(Expected::Token(TokenKind::Identifier)));
    };

    parser.expect(TokenKind::OpenParen)?;
    let arguments = parser.parse_list(|parser| parse_expr(parser, BindingPower::Lowest))?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(Expr::Call(CallExpr { callee, arguments }))
}

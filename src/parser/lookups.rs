use crate::{
    ast::ast::{Expr, Stmt},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Precedence ladder, weakest first. `&&`/`||` deliberately bind tighter than
/// arithmetic and comparison in this language.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Lowest,
    Equals,
    Comparison,
    Sum,
    Product,
    Logical,
    Prefix,
    Call,
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser, Expr, BindingPower) -> Result<Expr, Error>;

/// Statement rule for a leading token, if it has one. Anything else is an
/// expression statement.
pub fn stmt_lookup(kind: TokenKind) -> Option<StmtHandler> {
    match kind {
        TokenKind::Let => Some(parse_let_stmt),
        TokenKind::Return => Some(parse_return_stmt),
        TokenKind::Fn => Some(parse_fn_decl_stmt),
        TokenKind::If => Some(parse_if_stmt),
        TokenKind::Elseif | TokenKind::Else => Some(parse_orphan_branch_stmt),

        TokenKind::Identifier
        | TokenKind::Number
        | TokenKind::String
        | TokenKind::Bool
        | TokenKind::OpenParen
        | TokenKind::CloseParen
        | TokenKind::OpenCurly
        | TokenKind::CloseCurly
        | TokenKind::Comma
        | TokenKind::Semicolon
        | TokenKind::Assignment
        | TokenKind::Equals
        | TokenKind::Not
        | TokenKind::NotEquals
        | TokenKind::Less
        | TokenKind::LessEquals
        | TokenKind::Greater
        | TokenKind::GreaterEquals
        | TokenKind::And
        | TokenKind::Or
        | TokenKind::Plus
        | TokenKind::Dash
        | TokenKind::Slash
        | TokenKind::Star
        | TokenKind::Percent => None,
    }
}

/// Null denotation: rules for tokens that can begin an expression.
pub fn nud_lookup(kind: TokenKind) -> Option<NUDHandler> {
    match kind {
        // Literals and symbols
        TokenKind::Identifier | TokenKind::Number | TokenKind::String | TokenKind::Bool => {
            Some(parse_primary_expr)
        }
        TokenKind::Not | TokenKind::Dash => Some(parse_prefix_expr),
        TokenKind::OpenParen => Some(parse_grouping_expr),
        TokenKind::OpenCurly => Some(parse_block_expr),

        TokenKind::CloseParen
        | TokenKind::CloseCurly
        | TokenKind::Comma
        | TokenKind::Semicolon
        | TokenKind::Assignment
        | TokenKind::Equals
        | TokenKind::NotEquals
        | TokenKind::Less
        | TokenKind::LessEquals
        | TokenKind::Greater
        | TokenKind::GreaterEquals
        | TokenKind::And
        | TokenKind::Or
        | TokenKind::Plus
        | TokenKind::Slash
        | TokenKind::Star
        | TokenKind::Percent
        | TokenKind::Fn
        | TokenKind::Let
        | TokenKind::If
        | TokenKind::Elseif
        | TokenKind::Else
        | TokenKind::Return => None,
    }
}

/// Left denotation: rules for tokens that continue an expression, with the
/// binding power they apply at.
pub fn led_lookup(kind: TokenKind) -> Option<(BindingPower, LEDHandler)> {
    match kind {
        TokenKind::Equals | TokenKind::NotEquals => Some((BindingPower::Equals, parse_binary_expr)),

        // Relational
        TokenKind::Less | TokenKind::LessEquals | TokenKind::Greater | TokenKind::GreaterEquals => {
            Some((BindingPower::Comparison, parse_binary_expr))
        }

        // Additive and multiplicative
        TokenKind::Plus | TokenKind::Dash => Some((BindingPower::Sum, parse_binary_expr)),
        TokenKind::Star | TokenKind::Slash | TokenKind::Percent => {
            Some((BindingPower::Product, parse_binary_expr))
        }

        // Logical
        TokenKind::And | TokenKind::Or => Some((BindingPower::Logical, parse_binary_expr)),

        TokenKind::OpenParen => Some((BindingPower::Call, parse_call_expr)),

        TokenKind::Identifier
        | TokenKind::Number
        | TokenKind::String
        | TokenKind::Bool
        | TokenKind::CloseParen
        | TokenKind::OpenCurly
        | TokenKind::CloseCurly
        | TokenKind::Comma
        | TokenKind::Semicolon
        | TokenKind::Assignment
        | TokenKind::Not
        | TokenKind::Fn
        | TokenKind::Let
        | TokenKind::If
        | TokenKind::Elseif
        | TokenKind::Else
        | TokenKind::Return => None,
    }
}

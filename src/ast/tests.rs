//! Unit tests for AST construction and printing.

use super::{
    ast::{Expr, Stmt},
    expressions::{BinaryOperator, BlockExpr, CallExpr, Literal, UnaryOperator},
    statements::{ExpressionStmt, FnDeclStmt, IfStmt, LetStmt, ReturnStmt},
};
use crate::lexer::tokens::TokenKind;

fn ident(name: &str) -> Expr {
    Expr::identifier(name)
}

#[test]
fn test_display_expression_tree() {
    let expr = Expr::binary(
        Expr::unary(UnaryOperator::Negate, ident("a")),
        BinaryOperator::Add,
        Expr::binary(ident("b"), BinaryOperator::Multiply, ident("c")),
    );

    assert_eq!(
        expr.to_string(),
        "Binary(Unary(Negate, a), Add, Binary(b, Multiply, c))"
    );
}

#[test]
fn test_display_literals() {
    assert_eq!(Literal::Number(1.5).to_string(), "1.5");
    assert_eq!(Literal::Number(3.0).to_string(), "3");
    assert_eq!(Literal::Bool(false).to_string(), "false");
    assert_eq!(Literal::String(String::from("hi \"you\"")).to_string(), "\"hi \\\"you\\\"\"");
}

#[test]
fn test_display_statements() {
    let function = Stmt::FnDecl(FnDeclStmt {
        identifier: String::from("add"),
        parameters: vec![String::from("x"), String::from("y")],
        body: BlockExpr::new(vec![Stmt::Return(ReturnStmt {
            value: Some(Expr::binary(ident("x"), BinaryOperator::Add, ident("y"))),
        })]),
    });
    assert_eq!(
        function.to_string(),
        "FunctionDef(add, [x, y], Block(Return(Binary(x, Add, y))))"
    );

    let call = Stmt::Expression(ExpressionStmt {
        expression: Expr::Call(CallExpr {
            callee: String::from("print"),
            arguments: vec![Expr::Literal(Literal::Number(1.0)), ident("z")],
        }),
    });
    assert_eq!(call.to_string(), "Expression(Call(print, [1, z]))");

    let bare_return = Stmt::Return(ReturnStmt { value: None });
    assert_eq!(bare_return.to_string(), "Return()");

    let binding = Stmt::Let(LetStmt {
        identifier: String::from("flag"),
        value: Expr::Literal(Literal::Bool(true)),
    });
    assert_eq!(binding.to_string(), "Let(flag, true)");
}

#[test]
fn test_display_if_chain() {
    let chain = Stmt::If(IfStmt {
        condition: ident("a"),
        consequence: BlockExpr::default(),
        alternatives: vec![(ident("b"), BlockExpr::default())],
        fallback: Some(BlockExpr::default()),
    });

    assert_eq!(
        chain.to_string(),
        "If(a, Block(), [ElseIf(b, Block())], Else(Block()))"
    );

    let single = Stmt::If(IfStmt {
        condition: ident("a"),
        consequence: BlockExpr::default(),
        alternatives: vec![],
        fallback: None,
    });
    assert_eq!(single.to_string(), "If(a, Block())");
}

#[test]
fn test_operator_from_token_kind() {
    assert_eq!(UnaryOperator::try_from(TokenKind::Not), Ok(UnaryOperator::Not));
    assert_eq!(UnaryOperator::try_from(TokenKind::Dash), Ok(UnaryOperator::Negate));
    assert_eq!(UnaryOperator::try_from(TokenKind::Plus), Err(TokenKind::Plus));

    assert_eq!(BinaryOperator::try_from(TokenKind::Percent), Ok(BinaryOperator::Modulo));
    assert_eq!(BinaryOperator::try_from(TokenKind::LessEquals), Ok(BinaryOperator::LessEqual));
    assert_eq!(BinaryOperator::try_from(TokenKind::Or), Ok(BinaryOperator::Or));
    assert_eq!(BinaryOperator::try_from(TokenKind::Assignment), Err(TokenKind::Assignment));
}

use std::fmt::{self, Display};

use super::{
    expressions::{BinaryExpr, BinaryOperator, BlockExpr, CallExpr, Literal, UnaryExpr, UnaryOperator},
    statements::{ExpressionStmt, FnDeclStmt, IfStmt, LetStmt, ReturnStmt},
};

/// Statement
///
/// One variant per statement form of the grammar. The parser's product is an
/// ordered list of these.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Let(LetStmt),
    Return(ReturnStmt),
    Expression(ExpressionStmt),
    FnDecl(FnDeclStmt),
    If(IfStmt),
}

/// Expression
///
/// Every child is owned by exactly one parent, so boxing is all the tree needs.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier(String),
    Literal(Literal),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    Block(BlockExpr),
    Call(CallExpr),
}

impl Expr {
    pub fn identifier(name: impl Into<String>) -> Self {
        Expr::Identifier(name.into())
    }

    pub fn unary(operator: UnaryOperator, operand: Expr) -> Self {
        Expr::Unary(UnaryExpr {
            operator,
            operand: Box::new(operand),
        })
    }

    pub fn binary(left: Expr, operator: BinaryOperator, right: Expr) -> Self {
        Expr::Binary(BinaryExpr {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Let(stmt) => write!(f, "Let({}, {})", stmt.identifier, stmt.value),
            Stmt::Return(ReturnStmt { value: Some(value) }) => write!(f, "Return({})", value),
            Stmt::Return(ReturnStmt { value: None }) => write!(f, "Return()"),
            Stmt::Expression(stmt) => write!(f, "Expression({})", stmt.expression),
            Stmt::FnDecl(stmt) => write!(
                f,
                "FunctionDef({}, [{}], {})",
                stmt.identifier,
                stmt.parameters.join(", "),
                stmt.body
            ),
            Stmt::If(stmt) => {
                write!(f, "If({}, {}", stmt.condition, stmt.consequence)?;
                if !stmt.alternatives.is_empty() {
                    write!(f, ", [")?;
                    for (i, (condition, block)) in stmt.alternatives.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "ElseIf({}, {})", condition, block)?;
                    }
                    write!(f, "]")?;
                }
                if let Some(fallback) = &stmt.fallback {
                    write!(f, ", Else({})", fallback)?;
                }
                write!(f, ")")
            }
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Identifier(name) => write!(f, "{}", name),
            Expr::Literal(literal) => write!(f, "{}", literal),
            Expr::Unary(expr) => write!(f, "Unary({}, {})", expr.operator, expr.operand),
            Expr::Binary(expr) => write!(
                f,
                "Binary({}, {}, {})",
                expr.left, expr.operator, expr.right
            ),
            Expr::Block(block) => write!(f, "{}", block),
            Expr::Call(call) => {
                write!(f, "Call({}, [", call.callee)?;
                write_separated(f, &call.arguments)?;
                write!(f, "])")
            }
        }
    }
}

pub(crate) fn write_separated<T: Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

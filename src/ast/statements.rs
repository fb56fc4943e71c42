use super::{ast::Expr, expressions::BlockExpr};

/// `let identifier = value;`
#[derive(Debug, Clone, PartialEq)]
pub struct LetStmt {
    pub identifier: String,
    pub value: Expr,
}

/// `return;` or `return value;`
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Option<Expr>,
}

/// A bare expression terminated by `;`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Expr,
}

/// `fn identifier(parameters) { body };`
///
/// Duplicate parameter names are accepted here; they are a resolution concern.
#[derive(Debug, Clone, PartialEq)]
pub struct FnDeclStmt {
    pub identifier: String,
    pub parameters: Vec<String>,
    pub body: BlockExpr,
}

/// `if c { } elseif c { } else { };`
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub consequence: BlockExpr,
    pub alternatives: Vec<(Expr, BlockExpr)>,
    pub fallback: Option<BlockExpr>,
}

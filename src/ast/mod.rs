/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The statement and expression sum types
/// - expressions: Payloads of the expression variants and the operator sets
/// - statements: Payloads of the statement variants
pub mod ast;
pub mod expressions;
pub mod statements;

#[cfg(test)]
mod tests;

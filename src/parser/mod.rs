//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a sequence of tokens
//! into a list of statements. It uses a Pratt parser for expressions
//! with a fixed precedence ladder and handles:
//!
//! - Statement parsing (let, return, function definitions, if chains)
//! - Expression parsing (unary and binary operators, calls, groups, blocks)
//! - Error reporting through `UnexpectedToken`
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

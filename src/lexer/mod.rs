//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a sequence of tokens for parsing. It handles:
//!
//! - Tokenization of source text using anchored regex patterns
//! - Recognition of keywords, booleans, identifiers, literals, and operators
//! - Token span tracking for error reporting
//! - Rejection of illegal characters and malformed literals

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;

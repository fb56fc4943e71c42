//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the Parser cursor and the `parse` entry point.
//! Expressions are parsed Pratt style with NUD/LED handlers resolved
//! through the tables in `lookups`; statements by recursive descent.

use log::debug;

use crate::{
    ast::ast::Stmt,
    errors::errors::{Error, Expected},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::stmt::parse_stmt;

/// The main parser structure that maintains parsing state.
///
/// The cursor only moves forward; the token under it is the next one to be
/// consumed. Running past the last token is reported as an absent token.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Index of the current (unconsumed) token
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, pos: 0 }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.current_token().map(|token| token.kind)
    }

    /// Consumes the current token and returns it.
    pub fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Consumes the current token if it is of the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.current_token_kind() == Some(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Expects a token of the specified kind and consumes it.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise an
    /// `UnexpectedToken` error naming the expected kind.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        match self.current_token() {
            Some(token) if token.is(expected_kind) => {
                let token = token.clone();
                self.pos += 1;
                Ok(token)
            }
            _ => Err(self.unexpected(Expected::Token(expected_kind))),
        }
    }

    /// Builds an `UnexpectedToken` error for whatever is under the cursor.
    pub fn unexpected(&self, expected: Expected) -> Error {
        Error::unexpected_token(expected, self.current_token().cloned(), self.get_position())
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len()
    }

    /// Start of the current token, or the end of the input once exhausted.
    pub fn get_position(&self) -> Position {
        match self.current_token() {
            Some(token) => token.span.start,
            None => self
                .tokens
                .last()
                .map(|token| token.span.end)
                .unwrap_or_default(),
        }
    }

    /// Parses a comma separated list up to (not including) a `)`.
    ///
    /// Every comma must be followed by another item.
    pub fn parse_list<T>(
        &mut self,
        item: impl Fn(&mut Parser) -> Result<T, Error>,
    ) -> Result<Vec<T>, Error> {
        let mut items = vec![];
        if self.current_token_kind() == Some(TokenKind::CloseParen) {
            return Ok(items);
        }

        loop {
            items.push(item(self)?);
            if !self.eat(TokenKind::Comma) {
                return Ok(items);
            }
        }
    }
}

/// Parses a token sequence into the list of top-level statements.
///
/// This is the main entry point for parsing. The first unexpected token
/// aborts the whole call; no partial tree is returned.
pub fn parse(tokens: Vec<Token>) -> Result<Vec<Stmt>, Error> {
    let mut parser = Parser::new(tokens);
    let mut body = vec![];

    while parser.has_tokens() {
        body.push(parse_stmt(&mut parser)?);
    }

    debug!("parsed {} top-level statements", body.len());
    Ok(body)
}

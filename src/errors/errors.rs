use std::fmt::Display;

use thiserror::Error;

use crate::{
    lexer::tokens::{Token, TokenKind},
    Position,
};

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn illegal_lexeme(lexeme: impl Into<String>, position: Position) -> Self {
        Error::new(
            ErrorImpl::IllegalLexeme {
                lexeme: lexeme.into(),
            },
            position,
        )
    }

    pub fn unexpected_token(expected: Expected, found: Option<Token>, position: Position) -> Self {
        Error::new(ErrorImpl::UnexpectedToken { expected, found }, position)
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::IllegalLexeme { .. } => "IllegalLexeme",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::IllegalLexeme { lexeme } => {
                if lexeme.starts_with('"') {
                    ErrorTip::Suggestion(String::from("unterminated string literal"))
                } else if lexeme == "&" {
                    ErrorTip::Suggestion(String::from("did you mean `&&`?"))
                } else if lexeme == "|" {
                    ErrorTip::Suggestion(String::from("did you mean `||`?"))
                } else if lexeme.matches('.').count() > 1 {
                    ErrorTip::Suggestion(format!(
                        "Invalid number: `{}`, numbers take at most one decimal point",
                        lexeme
                    ))
                } else {
                    ErrorTip::None
                }
            }
            ErrorImpl::UnexpectedToken {
                expected: Expected::Token(TokenKind::Semicolon),
                ..
            } => ErrorTip::Suggestion(format!(
                "{}, did you miss a semicolon?",
                self.internal_error
            )),
            ErrorImpl::UnexpectedToken { .. } => {
                ErrorTip::Suggestion(self.internal_error.to_string())
            }
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// What the parser was looking for when it gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Token(TokenKind),
    Statement,
    Expression,
}

impl Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expected::Token(kind) => write!(f, "{}", kind),
            Expected::Statement => write!(f, "Statement"),
            Expected::Expression => write!(f, "Expression"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("invalid lexeme '{lexeme}'")]
    IllegalLexeme { lexeme: String },
    #[error("expected {expected}, got {} instead", describe_found(.found))]
    UnexpectedToken {
        expected: Expected,
        found: Option<Token>,
    },
}

fn describe_found(found: &Option<Token>) -> String {
    match found {
        Some(token) => token.to_string(),
        None => String::from("end of input"),
    }
}

//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords, booleans and identifiers
//! - Numeric literals
//! - String literals
//! - Operators and punctuation
//! - Error cases

use crate::errors::errors::ErrorImpl;

use super::{lexer::tokenize, tokens::TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).unwrap().iter().map(|t| t.kind).collect()
}

fn illegal_lexeme(source: &str) -> String {
    match tokenize(source).unwrap_err().kind() {
        ErrorImpl::IllegalLexeme { lexeme } => lexeme.clone(),
        other => panic!("expected an illegal lexeme, got {:?}", other),
    }
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("fn let if elseif else return").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Fn);
    assert_eq!(tokens[1].kind, TokenKind::Let);
    assert_eq!(tokens[2].kind, TokenKind::If);
    assert_eq!(tokens[3].kind, TokenKind::Elseif);
    assert_eq!(tokens[4].kind, TokenKind::Else);
    assert_eq!(tokens[5].kind, TokenKind::Return);
    assert_eq!(tokens.len(), 6);
    assert!(tokens.iter().all(|t| t.literal.is_none()));
}

#[test]
fn test_tokenize_booleans() {
    let tokens = tokenize("true false").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Bool);
    assert_eq!(tokens[0].literal.as_deref(), Some("true"));
    assert_eq!(tokens[1].kind, TokenKind::Bool);
    assert_eq!(tokens[1].literal.as_deref(), Some("false"));
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar baz_123 CamelCase iffy elseiff").unwrap();

    let literals: Vec<&str> = tokens.iter().map(|t| t.literal_str()).collect();
    assert!(tokens.iter().all(|t| t.kind == TokenKind::Identifier));
    assert_eq!(literals, vec!["foo", "bar", "baz_123", "CamelCase", "iffy", "elseiff"]);
}

#[test]
fn test_tokenize_leading_underscore_is_illegal() {
    assert_eq!(illegal_lexeme("_underscore"), "_");
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 3.14 0 100.5 .5").unwrap();

    assert!(tokens.iter().all(|t| t.kind == TokenKind::Number));
    assert_eq!(tokens[0].literal.as_deref(), Some("42"));
    assert_eq!(tokens[1].literal.as_deref(), Some("3.14"));
    assert_eq!(tokens[2].literal.as_deref(), Some("0"));
    assert_eq!(tokens[3].literal.as_deref(), Some("100.5"));
    assert_eq!(tokens[4].literal.as_deref(), Some(".5"));
}

#[test]
fn test_tokenize_number_value_matches_float() {
    for source in ["7", "0.25", "123.456", ".75", "007"] {
        let tokens = tokenize(source).unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Number);

        let value: f64 = tokens[0].literal_str().parse().unwrap();
        assert_eq!(value, source.parse::<f64>().unwrap());
    }
}

#[test]
fn test_tokenize_malformed_numbers() {
    assert_eq!(illegal_lexeme("1.2.3"), "1.2.3");
    assert_eq!(illegal_lexeme("let x = 1..2;"), "1..2");
    assert_eq!(illegal_lexeme("."), ".");
    assert_eq!(illegal_lexeme("1."), "1.");
}

#[test]
fn test_tokenize_strings() {
    let tokens = tokenize(r#""hello" "multiple words" """#).unwrap();

    assert!(tokens.iter().all(|t| t.kind == TokenKind::String));
    assert_eq!(tokens[0].literal.as_deref(), Some("hello"));
    assert_eq!(tokens[1].literal.as_deref(), Some("multiple words"));
    assert_eq!(tokens[2].literal.as_deref(), Some(""));
}

#[test]
fn test_tokenize_unterminated_string() {
    assert_eq!(illegal_lexeme("\"abc"), "\"abc");
    assert_eq!(illegal_lexeme("let s = \"abc def"), "\"abc def");
    assert_eq!(illegal_lexeme("\""), "\"");
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("+ - * / % == != < > <= >= = ! && ||"),
        vec![
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::LessEquals,
            TokenKind::GreaterEquals,
            TokenKind::Assignment,
            TokenKind::Not,
            TokenKind::And,
            TokenKind::Or,
        ]
    );
}

#[test]
fn test_tokenize_operators_without_spaces() {
    assert_eq!(
        kinds("a<=b==!c"),
        vec![
            TokenKind::Identifier,
            TokenKind::LessEquals,
            TokenKind::Identifier,
            TokenKind::Equals,
            TokenKind::Not,
            TokenKind::Identifier,
        ]
    );
}

#[test]
fn test_tokenize_single_ampersand_and_pipe_are_illegal() {
    assert_eq!(illegal_lexeme("a & b"), "&");
    assert_eq!(illegal_lexeme("a | b"), "|");
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("( ) { } , ;"),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::Comma,
            TokenKind::Semicolon,
        ]
    );
}

#[test]
fn test_tokenize_simple_program() {
    let tokens = tokenize("let x = 42;").unwrap();

    assert_eq!(tokens.len(), 5); // let, x, =, 42, ;
    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].literal.as_deref(), Some("x"));
    assert_eq!(tokens[2].kind, TokenKind::Assignment);
    assert_eq!(tokens[3].kind, TokenKind::Number);
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
}

#[test]
fn test_tokenize_spans() {
    let tokens = tokenize("let  xy == 1;").unwrap();

    assert_eq!(tokens[1].span.start.0, 5);
    assert_eq!(tokens[1].span.end.0, 7);
    assert_eq!(tokens[2].span.start.0, 8);
    assert_eq!(tokens[2].span.end.0, 10);
}

#[test]
fn test_tokenize_unrecognized_character() {
    let error = tokenize("let x = @;").unwrap_err();

    assert_eq!(error.get_position().0, 8);
    assert!(matches!(error.kind(), ErrorImpl::IllegalLexeme { lexeme } if lexeme == "@"));
}

#[test]
fn test_tokenize_whitespace_handling() {
    assert_eq!(
        kinds("  let \t x\n  =\r\n 42  "),
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Number,
        ]
    );
    assert!(tokenize("   \n\t ").unwrap().is_empty());
    assert!(tokenize("").unwrap().is_empty());
}

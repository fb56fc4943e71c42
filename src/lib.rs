#![allow(clippy::module_inception)]

use std::fmt::Write;

use crate::{
    ast::ast::Stmt,
    errors::errors::{Error, ErrorTip},
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Byte offset into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Tokenizes and parses `source` in one go.
pub fn parse_source(source: &str) -> Result<Vec<Stmt>, Error> {
    let tokens = lexer::lexer::tokenize(source)?;
    parser::parser::parse(tokens)
}

/// Finds the line holding `position`.
///
/// Returns the 1-based line number, the line text and the offset of the
/// position within that line. A position at the very end of the input maps
/// onto the last line.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, &str, usize)> {
    let pos = position as usize;
    if pos > source.len() {
        return None;
    }

    let mut start = 0;
    let mut last = None;

    for (index, line) in source.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((index + 1, line, pos - start));
        }

        last = Some((index + 1, line));
        start = end;
    }

    // Only reachable for a position at the end of the input
    match last {
        Some((number, line)) if !line.ends_with('\n') => Some((number, line, line.len())),
        Some((number, _)) => Some((number + 1, "", 0)),
        None => Some((1, "", 0)),
    }
}

#[cfg(test)]
mod tests {
    use super::{get_line_at_position, parse_source, render_error};

    const SOURCE: &str = "Hello, world!\nfoo\n\n  Testing { }\n";

    #[test]
    fn test_get_line_at_position() {
        let (line_number, line, line_pos) = get_line_at_position(SOURCE, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = get_line_at_position(SOURCE, 29).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "  Testing { }\n");
        assert_eq!(line_pos, 10);
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        assert_eq!(get_line_at_position("let x", 5), Some((1, "let x", 5)));
        assert_eq!(get_line_at_position("a\n", 2), Some((2, "", 0)));
        assert_eq!(get_line_at_position("", 0), Some((1, "", 0)));
        assert_eq!(get_line_at_position("abc", 4), None);
    }

    #[test]
    fn test_render_unexpected_token() {
        let source = "let a = 1;\nlet x = ;\n";
        let error = parse_source(source).unwrap_err();

        let rendered = render_error(&error, source, "main.lang");
        assert_eq!(
            rendered,
            "Error: UnexpectedToken (expected Expression, got Semicolon instead)\n\
             -> main.lang\n  |\n2 | let x = ;\n  | --------^\n"
        );
    }

    #[test]
    fn test_render_illegal_lexeme() {
        let source = "  let s = \"open";
        let error = parse_source(source).unwrap_err();

        let rendered = render_error(&error, source, "main.lang");
        assert!(rendered.starts_with("Error: IllegalLexeme (unterminated string literal)\n"));
        assert!(rendered.contains("\n1 | let s = \"open\n"));
        assert!(rendered.ends_with("\n  | --------^\n"));
    }
}

/// Renders an error as a caret diagnostic pointing into `source`.
pub fn render_error(error: &Error, source: &str, file: &str) -> String {
    /*
        Error: name (tip)
        -> main.lang
           |
        20 | let a = #;
           | --------^
    */

    let mut out = String::new();

    // Writing into a String cannot fail
    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(out, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    let _ = writeln!(out, "-> {}", file);

    let Some((line, line_text, line_pos)) = get_line_at_position(source, error.get_position().0)
    else {
        let _ = writeln!(out, "{}", error);
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;
    let _ = writeln!(out, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    let _ = writeln!(out, "{} | {}", line_string, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    let _ = writeln!(out, "{:>padding$} {:->arrows$}", "|", "^");

    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start_matches([' ', '\t']);
    (trimmed, string.len() - trimmed.len())
}

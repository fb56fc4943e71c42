use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use frontend::{lexer::lexer::tokenize, parser::parser::parse, render_error};
use log::{debug, error, info, LevelFilter};

/// Tokenize and parse a source file, printing the syntax tree.
#[derive(Debug, Parser)]
#[command(name = "frontend")]
struct App {
    /// Source file to parse
    file: PathBuf,

    /// Print the token sequence instead of the syntax tree
    #[arg(long)]
    tokens: bool,

    /// Print one statement per line instead of the indented form
    #[arg(long)]
    compact: bool,

    #[arg(long = "log-level", env = "RUST_LOG")]
    log: Option<LevelFilter>,
}

fn main() -> ExitCode {
    let app = App::parse();
    env_logger::Builder::new()
        .filter_level(app.log.unwrap_or(LevelFilter::Warn))
        .init();
    debug!("starting with args {app:?}");

    let file_name = app
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| app.file.to_string_lossy().into_owned());

    let source = match read_to_string(&app.file) {
        Ok(source) => source,
        Err(err) => {
            error!("failed to read {}: {err}", app.file.display());
            eprintln!("Error: could not read {}: {}", app.file.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(&source) {
        Ok(tokens) => tokens,
        Err(err) => {
            eprint!("{}", render_error(&err, &source, &file_name));
            return ExitCode::FAILURE;
        }
    };

    info!("Tokenized in {:?}", start.elapsed());

    if app.tokens {
        for token in &tokens {
            println!("{}", token);
        }
        return ExitCode::SUCCESS;
    }

    let parse_start = Instant::now();
    let ast = match parse(tokens) {
        Ok(ast) => ast,
        Err(err) => {
            eprint!("{}", render_error(&err, &source, &file_name));
            return ExitCode::FAILURE;
        }
    };

    info!("Parsed in {:?}", parse_start.elapsed());

    for stmt in &ast {
        if app.compact {
            println!("{}", stmt);
        } else {
            println!("{}", pretty_print(stmt.to_string()));
        }
    }

    ExitCode::SUCCESS
}

fn pretty_print(string: String) -> String {
    let mut result = String::new();
    let mut indent = 0usize;
    let mut ignore_next_space = false;
    let mut in_string = false;
    let mut escaped = false;

    for c in string.chars() {
        if in_string {
            result.push(c);
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                result.push(c);
            }
            '(' | '[' => {
                indent += 1;
                result.push(c);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
            }
            ')' | ']' => {
                indent = indent.saturating_sub(1);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                result.push(c);
            }
            ',' => {
                result.push(c);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                ignore_next_space = true;
            }
            ' ' if ignore_next_space => {
                ignore_next_space = false;
            }
            _ => result.push(c),
        }
    }

    result
}

#![allow(clippy::module_inception)]

use std::{fmt::Display, path::Path};

use crate::{
    ast::ast::Stmt,
    errors::errors::{Error, ErrorTip},
    lexer::tokens::Token,
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A 1-based line/column pair into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    pub fn start() -> Self {
        Position { line: 1, column: 1 }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Turns source text into a token sequence ending with `EndOfProgram`.
pub fn lex(source: &str) -> Result<Vec<Token>, Error> {
    lexer::lexer::tokenize(source)
}

/// Turns a token sequence into the ordered list of top-level statements.
pub fn parse(tokens: Vec<Token>) -> Result<Vec<Stmt>, Error> {
    parser::parser::parse(tokens)
}

pub fn parse_source(source: &str) -> Result<Vec<Stmt>, Error> {
    parse(lex(source)?)
}

/// Prints a program as canonical source, one top-level statement per line.
pub fn display_program(program: &[Stmt]) -> String {
    program
        .iter()
        .map(|stmt| stmt.to_string())
        .collect::<Vec<String>>()
        .join("\n")
}

/// Returns the text of the 1-based `line`, without its line break.
pub fn get_line(source: &str, line: u32) -> Option<&str> {
    source
        .split('\n')
        .nth(line.saturating_sub(1) as usize)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_line() {
        let source = "Hello, world!\nsecond\r\n\nTesting { }\n";
        assert_eq!(super::get_line(source, 1), Some("Hello, world!"));
        assert_eq!(super::get_line(source, 2), Some("second"));
        assert_eq!(super::get_line(source, 3), Some(""));
        assert_eq!(super::get_line(source, 4), Some("Testing { }"));
        assert_eq!(super::get_line(source, 9), None);
    }

    #[test]
    fn test_render_error() {
        let source = "var a = 1\nvar b = @";
        let error = super::lex(source).unwrap_err();
        let rendered = super::render_error(&error, source, super::Path::new("main.jc"));

        assert_eq!(
            rendered,
            "Error: UnexpectedCharacter (unexpected token `@`)\n\
             -> main.jc:2:9\n\
             \x20 |\n\
             2 | var b = @\n\
             \x20 | --------^\n"
        );
    }
}

/// Formats an error the way the CLI prints it.
pub fn render_error(error: &Error, source: &str, file: &Path) -> String {
    /*
        Error: name (tip)
        -> main.jc:20:9
           |
        20 | var a = #
           | --------^
    */

    let position = error.get_position();
    let line_text = get_line(source, position.line).unwrap_or("");

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let mut output = String::new();
    if let ErrorTip::None = error.get_tip() {
        output.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        output.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    output.push_str(&format!(
        "-> {}:{}\n",
        file.as_os_str().to_string_lossy(),
        position
    ));
    output.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    output.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = (position.column as usize)
        .saturating_sub(removed_whitespace)
        .max(1);
    output.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    output
}

pub fn display_error(error: &Error, source: &str, file: &Path) {
    print!("{}", render_error(error, source, file));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}

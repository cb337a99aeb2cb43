use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

/// The pass an error was raised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Lexer,
    Parser,
}

impl Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Lexer => write!(f, "Lexer"),
            Phase::Parser => write!(f, "Parser"),
        }
    }
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn line(&self) -> u32 {
        self.position.line
    }

    pub fn column(&self) -> u32 {
        self.position.column
    }

    pub fn get_internal(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn phase(&self) -> Phase {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. }
            | ErrorImpl::UnterminatedString { .. }
            | ErrorImpl::UnterminatedComment
            | ErrorImpl::MalformedNumber { .. } => Phase::Lexer,
            ErrorImpl::Expected { .. }
            | ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::MisplacedElseCase => Phase::Parser,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            ErrorImpl::UnterminatedString { .. } => "UnterminatedString",
            ErrorImpl::UnterminatedComment => "UnterminatedComment",
            ErrorImpl::MalformedNumber { .. } => "MalformedNumber",
            ErrorImpl::Expected { .. } => "Expected",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::MisplacedElseCase => "MisplacedElseCase",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnterminatedComment => {
                ErrorTip::Suggestion(String::from("block comment is missing its closing `*/`"))
            }
            ErrorImpl::MalformedNumber { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it well-formed and within the integer limit?",
                token
            )),
            ErrorImpl::Expected { given, .. } if given == "end of program" => {
                ErrorTip::Suggestion(format!("{}, is something left unclosed?", self.message()))
            }
            ErrorImpl::MisplacedElseCase => ErrorTip::Suggestion(String::from(
                "the `else` case must be the last case of a match",
            )),
            _ => ErrorTip::Suggestion(self.message()),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [ERROR]: {} at {}",
            self.phase(),
            self.internal_error,
            self.position
        )
    }
}

impl std::error::Error for Error {}

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

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unexpected token `{token}`")]
    UnexpectedCharacter { token: String },
    #[error("expected ending quote `{quote}`")]
    UnterminatedString { quote: char },
    #[error("expected end of block comment `*/`")]
    UnterminatedComment,
    #[error("malformed number `{token}`")]
    MalformedNumber { token: String },
    #[error("expected {expected}, {given} given")]
    Expected { expected: String, given: String },
    #[error("unexpected token `{token}`")]
    UnexpectedToken { token: String },
    #[error("unexpected case after `else` case")]
    MisplacedElseCase,
}

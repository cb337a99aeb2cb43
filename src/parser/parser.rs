//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and parsing functions.
//! The parser uses a Pratt parser approach with NUD/LED handlers for
//! expression parsing and specialized functions for statement parsing.
//!
//! The handler tables live in [`super::lookups::LOOKUPS`]:
//! - Statement handlers, keyed by keyword
//! - NUD (null denotation) handlers for atoms and prefix operators
//! - LED (left denotation) handlers for infix and postfix operators
//! - Binding powers for operator precedence
//! - Type parsing handlers

use crate::{
    ast::{ast::Stmt, expressions::IdentifierExpr},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Keyword, Operator, Token, TokenKind, TokenValue},
    Position, MK_SPAN,
};

use super::stmt::parse_statements;

/// The parser state: the token stream and a read cursor into it.
///
/// The stream always ends with an `EndOfProgram` token, and the cursor never
/// moves past it.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
}

impl Parser {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EndOfProgram) {
            let end = tokens
                .last()
                .map(|token| token.span.end)
                .unwrap_or_else(Position::start);
            tokens.push(Token::end_of_program(MK_SPAN!(end, end)));
        }

        Parser { tokens, pos: 0 }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// The token consumed last, if any.
    pub fn previous_token(&self) -> Option<&Token> {
        self.pos.checked_sub(1).and_then(|index| self.tokens.get(index))
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EndOfProgram
    }

    pub fn get_position(&self) -> Position {
        self.current_token().position()
    }

    pub fn at_operator(&self, operator: Operator) -> bool {
        self.current_token().is_operator(operator)
    }

    pub fn at_keyword(&self, keyword: Keyword) -> bool {
        self.current_token().is_keyword(keyword)
    }

    pub fn at_terminator(&self) -> bool {
        self.current_token().is_terminator()
    }

    /// Consumes the current token if it is `operator`.
    pub fn eat_operator(&mut self, operator: Operator) -> bool {
        if self.at_operator(operator) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skips statement terminators: line breaks and `;`.
    pub fn skip_terminators(&mut self) {
        while self.at_terminator() {
            self.advance();
        }
    }

    /// Skips line breaks only, as allowed inside brackets.
    pub fn skip_line_breaks(&mut self) {
        while self.current_token_kind() == TokenKind::EndOfLine {
            self.advance();
        }
    }

    /// An `Expected` error naming what was wanted and what the current token is.
    pub fn expected(&self, expected: &str) -> Error {
        Error::new(
            ErrorImpl::Expected {
                expected: String::from(expected),
                given: self.current_token().to_string(),
            },
            self.get_position(),
        )
    }

    pub fn unexpected(&self) -> Error {
        let token = self.current_token();
        match token.kind {
            TokenKind::EndOfLine | TokenKind::EndOfProgram => self.expected("expression"),
            _ => Error::new(
                ErrorImpl::UnexpectedToken {
                    token: token.lexeme(),
                },
                token.position(),
            ),
        }
    }

    pub fn expect_operator(&mut self, operator: Operator) -> Result<Token, Error> {
        if self.at_operator(operator) {
            Ok(self.advance())
        } else {
            Err(self.expected(&format!("`{}`", operator)))
        }
    }

    pub fn expect_keyword(&mut self, keyword: Keyword) -> Result<Token, Error> {
        if self.at_keyword(keyword) {
            Ok(self.advance())
        } else {
            Err(self.expected(&format!("`{}`", keyword)))
        }
    }

    pub fn expect_identifier(&mut self) -> Result<IdentifierExpr, Error> {
        if self.current_token_kind() != TokenKind::Identifier {
            return Err(self.expected("identifier"));
        }

        let token = self.advance();
        match token.value {
            TokenValue::String(value) => Ok(IdentifierExpr {
                value,
                position: token.span.start,
            }),
            _ => Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: token.lexeme(),
                },
                token.span.start,
            )),
        }
    }
}

/// Parses a whole token stream into its top-level statements.
///
/// The first error aborts the parse.
pub fn parse(tokens: Vec<Token>) -> Result<Vec<Stmt>, Error> {
    let mut parser = Parser::new(tokens);
    let body = parse_statements(&mut parser, None)?;

    if parser.has_tokens() {
        return Err(parser.unexpected());
    }

    Ok(body)
}

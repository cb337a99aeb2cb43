use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_SPAN,
};

use super::{
    source::{Cursor, EOF_CHAR},
    tokens::{Keyword, Operator, Token, TokenKind},
};

lazy_static! {
    static ref DECIMAL_PATTERN: Regex = Regex::new(r"^-?[0-9]+$").unwrap();
    static ref FLOAT_PATTERN: Regex = Regex::new(r"^-?[0-9]+\.[0-9]+$").unwrap();
    static ref HEX_PATTERN: Regex = Regex::new(r"^-?0[xX][0-9a-fA-F]+$").unwrap();
    static ref BINARY_PATTERN: Regex = Regex::new(r"^-?0[bB][01]+$").unwrap();
}

pub struct Lexer {
    tokens: Vec<Token>,
    cursor: Cursor,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            tokens: vec![],
            cursor: Cursor::new(source),
        }
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Pushes a line break or `;`, dropping it when a terminator was just emitted.
    pub fn push_terminator(&mut self, token: Token) {
        if let Some(last) = self.tokens.last() {
            if last.is_terminator() {
                return;
            }
        }
        self.tokens.push(token);
    }

    pub fn at(&self) -> char {
        self.cursor.peek()
    }

    pub fn at_eof(&self) -> bool {
        self.cursor.at_end()
    }

    /// A `-` glued to a digit is part of the literal only where no operand ends right before it.
    fn can_fold_minus(&self) -> bool {
        match self.tokens.last() {
            None => true,
            Some(token) => match token.kind {
                TokenKind::EndOfLine | TokenKind::Keyword => true,
                TokenKind::Operator => !matches!(
                    token.as_operator(),
                    Some(
                        Operator::ParenR
                            | Operator::BracketR
                            | Operator::BraceR
                            | Operator::Inc
                            | Operator::Dec
                    )
                ),
                _ => false,
            },
        }
    }

    fn error(&self, error_impl: ErrorImpl, position: Position) -> Error {
        Error::new(error_impl, position)
    }
}

fn is_skippable(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{0B}' | '\u{0C}' | '\r')
}

fn is_identifier_first(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

fn is_identifier(c: char) -> bool {
    is_identifier_first(c) || c.is_ascii_digit()
}

fn is_quote(c: char) -> bool {
    matches!(c, '"' | '\'' | '`')
}

fn newline_handler(lexer: &mut Lexer) {
    let start = lexer.cursor.position();

    while lexer.at() == '\n' || is_skippable(lexer.at()) {
        lexer.cursor.advance();
    }

    let end = lexer.cursor.position();
    lexer.push_terminator(Token::end_of_line(MK_SPAN!(start, end)));
}

fn symbol_handler(lexer: &mut Lexer) {
    let start = lexer.cursor.position();

    let mut value = String::new();
    while is_identifier(lexer.at()) {
        value.push(lexer.at());
        lexer.cursor.advance();
    }

    let token = match value.as_str() {
        "true" => Token::boolean(true, MK_SPAN!(start, lexer.cursor.position())),
        "false" => Token::boolean(false, MK_SPAN!(start, lexer.cursor.position())),
        "as" if lexer.at() == '?' => {
            lexer.cursor.advance();
            Token::operator(Operator::AsNullable, MK_SPAN!(start, lexer.cursor.position()))
        }
        _ => {
            let span = MK_SPAN!(start, lexer.cursor.position());
            if let Ok(keyword) = Keyword::from_str(&value) {
                Token::keyword(keyword, span)
            } else if let Some(operator) = Operator::from_str(&value).ok().filter(|op| op.is_word()) {
                Token::operator(operator, span)
            } else {
                Token::identifier(value, span)
            }
        }
    };

    lexer.push(token);
}

fn number_handler(lexer: &mut Lexer, negative: bool) -> Result<(), Error> {
    let start = lexer.cursor.position();
    let mut lexeme = String::new();

    if negative {
        lexeme.push('-');
        lexer.cursor.advance();
    }

    let radix_prefixed =
        lexer.at() == '0' && matches!(lexer.cursor.peek_nth(1), 'x' | 'X' | 'b' | 'B');

    if radix_prefixed {
        lexeme.push(lexer.at());
        lexeme.push(lexer.cursor.advance());
        lexer.cursor.advance();
    } else {
        while lexer.at().is_ascii_digit() {
            lexeme.push(lexer.at());
            lexer.cursor.advance();
        }

        // Only decimal numbers can be floating
        if lexer.at() == '.' && lexer.cursor.peek_nth(1).is_ascii_digit() {
            lexeme.push('.');
            lexer.cursor.advance();
            while lexer.at().is_ascii_digit() {
                lexeme.push(lexer.at());
                lexer.cursor.advance();
            }
        }
    }

    // Anything glued to the literal belongs to it, so `0b102` fails as a whole
    while is_identifier(lexer.at()) {
        lexeme.push(lexer.at());
        lexer.cursor.advance();
    }

    let span = MK_SPAN!(start, lexer.cursor.position());
    let malformed = || {
        lexer.error(
            ErrorImpl::MalformedNumber {
                token: lexeme.clone(),
            },
            start,
        )
    };

    let token = if DECIMAL_PATTERN.is_match(&lexeme) {
        Token::integer(lexeme.parse::<i64>().map_err(|_| malformed())?, span)
    } else if FLOAT_PATTERN.is_match(&lexeme) {
        Token::float(lexeme.parse::<f64>().map_err(|_| malformed())?, span)
    } else if HEX_PATTERN.is_match(&lexeme) || BINARY_PATTERN.is_match(&lexeme) {
        let radix = if HEX_PATTERN.is_match(&lexeme) { 16 } else { 2 };
        let digits = format!(
            "{}{}",
            if negative { "-" } else { "" },
            &lexeme[if negative { 3 } else { 2 }..]
        );
        Token::integer(
            i64::from_str_radix(&digits, radix).map_err(|_| malformed())?,
            span,
        )
    } else {
        return Err(malformed());
    };

    lexer.push(token);
    Ok(())
}

fn string_handler(lexer: &mut Lexer) -> Result<(), Error> {
    let start = lexer.cursor.position();
    let quote = lexer.at();
    lexer.cursor.advance();

    let mut value = String::new();
    while lexer.at() != quote {
        if lexer.at_eof() || lexer.at() == '\n' {
            return Err(lexer.error(ErrorImpl::UnterminatedString { quote }, start));
        }
        value.push(lexer.at());
        lexer.cursor.advance();
    }
    lexer.cursor.advance();

    lexer.push(Token::string(value, MK_SPAN!(start, lexer.cursor.position())));
    Ok(())
}

fn comment_handler(lexer: &mut Lexer) -> Result<(), Error> {
    let start = lexer.cursor.position();

    if lexer.cursor.peek_nth(1) == '/' {
        // The line break stays, it still terminates the statement
        while !lexer.at_eof() && lexer.at() != '\n' {
            lexer.cursor.advance();
        }
        return Ok(());
    }

    lexer.cursor.advance_n(2);
    loop {
        if lexer.at_eof() {
            return Err(lexer.error(ErrorImpl::UnterminatedComment, start));
        }
        if lexer.at() == '*' && lexer.cursor.peek_nth(1) == '/' {
            lexer.cursor.advance_n(2);
            return Ok(());
        }
        lexer.cursor.advance();
    }
}

/// `!in` and `!is`, but only when the word after `!` is exactly that.
fn negated_word_operator(lexer: &Lexer) -> Option<(Operator, usize)> {
    if !is_identifier_first(lexer.cursor.peek_nth(1)) {
        return None;
    }

    let mut word = String::from("!");
    let mut length = 1;
    while is_identifier(lexer.cursor.peek_nth(length)) {
        word.push(lexer.cursor.peek_nth(length));
        length += 1;
    }

    Operator::from_str(&word)
        .ok()
        .filter(|operator| operator.is_word())
        .map(|operator| (operator, length))
}

fn operator_handler(lexer: &mut Lexer) -> Result<(), Error> {
    let start = lexer.cursor.position();

    if lexer.at() == '/' && matches!(lexer.cursor.peek_nth(1), '/' | '*') {
        return comment_handler(lexer);
    }

    let (operator, length) = if let Some(negated) = negated_word_operator(lexer) {
        negated
    } else {
        let mut spelling = String::from(lexer.at());
        let mut operator = Operator::from_str(&spelling).map_err(|_| {
            lexer.error(
                ErrorImpl::UnexpectedCharacter {
                    token: spelling.clone(),
                },
                start,
            )
        })?;

        // Maximal munch: grow while the longer spelling is still an operator
        loop {
            let next = lexer.cursor.peek_nth(spelling.chars().count());
            if next == EOF_CHAR {
                break;
            }
            spelling.push(next);
            match Operator::from_str(&spelling) {
                Ok(longer) if !longer.is_word() => operator = longer,
                _ => {
                    spelling.pop();
                    break;
                }
            }
        }

        (operator, spelling.chars().count())
    };

    lexer.cursor.advance_n(length);
    let token = Token::operator(operator, MK_SPAN!(start, lexer.cursor.position()));

    if operator == Operator::Semicolon {
        lexer.push_terminator(token);
    } else {
        lexer.push(token);
    }

    Ok(())
}

pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        let c = lex.at();

        if is_skippable(c) {
            lex.cursor.advance();
        } else if c == '\n' {
            newline_handler(&mut lex);
        } else if is_identifier_first(c) {
            symbol_handler(&mut lex);
        } else if c.is_ascii_digit() {
            number_handler(&mut lex, false)?;
        } else if is_quote(c) {
            string_handler(&mut lex)?;
        } else if c == '-' && lex.cursor.peek_nth(1).is_ascii_digit() && lex.can_fold_minus() {
            number_handler(&mut lex, true)?;
        } else {
            operator_handler(&mut lex)?;
        }
    }

    let end = lex.cursor.position();
    lex.push(Token::end_of_program(MK_SPAN!(end, end)));
    Ok(lex.tokens)
}

//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords, identifiers and booleans
//! - Numeric literals (integers, hex, binary, floats, folded minus)
//! - String literals
//! - Operators, maximal munch and word operators
//! - Comments and line breaks
//! - Error cases

use super::{
    lexer::tokenize,
    tokens::{Keyword, Operator, TokenKind, TokenValue},
};
use crate::{errors::errors::ErrorImpl, Position};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).unwrap().iter().map(|token| token.kind).collect()
}

fn operators(source: &str) -> Vec<Operator> {
    tokenize(source)
        .unwrap()
        .iter()
        .filter_map(|token| token.as_operator())
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("var val func type if elif else while for in match return").unwrap();

    assert_eq!(tokens[0].value, TokenValue::Keyword(Keyword::Var));
    assert_eq!(tokens[1].value, TokenValue::Keyword(Keyword::Val));
    assert_eq!(tokens[2].value, TokenValue::Keyword(Keyword::Func));
    assert_eq!(tokens[3].value, TokenValue::Keyword(Keyword::Type));
    assert_eq!(tokens[4].value, TokenValue::Keyword(Keyword::If));
    assert_eq!(tokens[5].value, TokenValue::Keyword(Keyword::Elif));
    assert_eq!(tokens[6].value, TokenValue::Keyword(Keyword::Else));
    assert_eq!(tokens[7].value, TokenValue::Keyword(Keyword::While));
    assert_eq!(tokens[8].value, TokenValue::Keyword(Keyword::For));
    assert_eq!(tokens[9].value, TokenValue::Keyword(Keyword::In));
    assert_eq!(tokens[10].value, TokenValue::Keyword(Keyword::Match));
    assert_eq!(tokens[11].value, TokenValue::Keyword(Keyword::Return));
    assert_eq!(tokens[12].kind, TokenKind::EndOfProgram);
    assert!(tokens[..12].iter().all(|token| token.kind == TokenKind::Keyword));
}

#[test]
fn test_tokenize_booleans() {
    let tokens = tokenize("true false").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Boolean);
    assert_eq!(tokens[0].value, TokenValue::Boolean(true));
    assert_eq!(tokens[1].kind, TokenKind::Boolean);
    assert_eq!(tokens[1].value, TokenValue::Boolean(false));
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo baz_123 _underscore $dollar CamelCase variable iffy").unwrap();

    let names = ["foo", "baz_123", "_underscore", "$dollar", "CamelCase", "variable", "iffy"];
    for (token, name) in tokens.iter().zip(names) {
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.value, TokenValue::String(name.to_string()));
    }
    assert_eq!(tokens[7].kind, TokenKind::EndOfProgram);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 2.5 0 0x1F 0b101 1234.123421").unwrap();

    assert_eq!(tokens[0].value, TokenValue::Integer(42));
    assert_eq!(tokens[1].kind, TokenKind::Float);
    assert_eq!(tokens[1].value, TokenValue::Float(2.5));
    assert_eq!(tokens[2].value, TokenValue::Integer(0));
    assert_eq!(tokens[3].value, TokenValue::Integer(31));
    assert_eq!(tokens[4].value, TokenValue::Integer(5));
    assert_eq!(tokens[5].kind, TokenKind::Float);
    assert_eq!(tokens[5].value, TokenValue::Float(1234.123421));
    assert_eq!(tokens[6].kind, TokenKind::EndOfProgram);
}

#[test]
fn test_tokenize_single_float() {
    let tokens = tokenize("1234.123421").unwrap();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Float);
    assert_eq!(tokens[0].value, TokenValue::Float(1234.123421));
}

#[test]
fn test_tokenize_negative_literal_folding() {
    let tokens = tokenize("x = -5").unwrap();
    assert_eq!(tokens[2].value, TokenValue::Integer(-5));
    assert_eq!(tokens.len(), 4);

    let tokens = tokenize("f(-1.5, -0x10)").unwrap();
    assert_eq!(tokens[2].value, TokenValue::Float(-1.5));
    assert_eq!(tokens[4].value, TokenValue::Integer(-16));

    let tokens = tokenize("-7").unwrap();
    assert_eq!(tokens[0].value, TokenValue::Integer(-7));
    assert_eq!(tokens[0].position(), Position::new(1, 1));
}

#[test]
fn test_tokenize_minus_after_operand_is_subtraction() {
    let tokens = tokenize("a -1").unwrap();
    assert_eq!(tokens[1].value, TokenValue::Operator(Operator::Sub));
    assert_eq!(tokens[2].value, TokenValue::Integer(1));

    let tokens = tokenize("(a)-1").unwrap();
    assert_eq!(tokens[3].value, TokenValue::Operator(Operator::Sub));

    let tokens = tokenize("2-1").unwrap();
    assert_eq!(tokens[1].value, TokenValue::Operator(Operator::Sub));
}

#[test]
fn test_tokenize_range_after_integer() {
    assert_eq!(
        kinds("1..5"),
        vec![TokenKind::Integer, TokenKind::Operator, TokenKind::Integer, TokenKind::EndOfProgram]
    );
    assert_eq!(operators("1..=5"), vec![Operator::RangeInclusive]);
}

#[test]
fn test_tokenize_malformed_numbers() {
    for source in ["0b", "0b102", "0x", "0xZZ", "12abc", "99999999999999999999"] {
        let error = tokenize(source).unwrap_err();
        assert_eq!(error.get_error_name(), "MalformedNumber", "source: {}", source);
        assert_eq!(*error.get_position(), Position::new(1, 1));
    }
}

#[test]
fn test_tokenize_strings() {
    let tokens = tokenize(r#""hello" 'world' `multiple words` "it's" 'back\slash'"#).unwrap();

    assert_eq!(tokens[0].value, TokenValue::String("hello".to_string()));
    assert_eq!(tokens[1].value, TokenValue::String("world".to_string()));
    assert_eq!(tokens[2].value, TokenValue::String("multiple words".to_string()));
    assert_eq!(tokens[3].value, TokenValue::String("it's".to_string()));
    assert_eq!(tokens[4].value, TokenValue::String("back\\slash".to_string()));
    assert!(tokens[..5].iter().all(|token| token.kind == TokenKind::String));
}

#[test]
fn test_tokenize_empty_string() {
    let tokens = tokenize(r#""""#).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, TokenValue::String(String::new()));
    assert_eq!(tokens[1].kind, TokenKind::EndOfProgram);
}

#[test]
fn test_tokenize_unterminated_string() {
    let error = tokenize("var a = 'oops").unwrap_err();

    assert_eq!(
        *error.get_internal(),
        ErrorImpl::UnterminatedString { quote: '\'' }
    );
    assert_eq!(error.message(), "expected ending quote `'`");
    assert_eq!(*error.get_position(), Position::new(1, 9));
}

#[test]
fn test_tokenize_string_broken_by_newline() {
    let error = tokenize("val a = 1\nval b = \"line\nend\"").unwrap_err();

    assert_eq!(error.get_error_name(), "UnterminatedString");
    assert_eq!(*error.get_position(), Position::new(2, 9));
}

#[test]
fn test_tokenize_arithmetic_operators() {
    assert_eq!(
        operators("+ - * / % **"),
        vec![Operator::Add, Operator::Sub, Operator::Mul, Operator::Div, Operator::Mod, Operator::Exp]
    );
}

#[test]
fn test_tokenize_assignment_operators() {
    assert_eq!(
        operators("= += -= *= /= %= **= <<= >>= &= |= ^="),
        vec![
            Operator::Assign,
            Operator::AddAssign,
            Operator::SubAssign,
            Operator::MulAssign,
            Operator::DivAssign,
            Operator::ModAssign,
            Operator::ExpAssign,
            Operator::ShlAssign,
            Operator::ShrAssign,
            Operator::BitAndAssign,
            Operator::BitOrAssign,
            Operator::BitXorAssign,
        ]
    );
}

#[test]
fn test_tokenize_comparison_and_logic() {
    assert_eq!(
        operators("== != < > <= >= <=> && || ! & | ^ ~ << >>"),
        vec![
            Operator::Equal,
            Operator::NotEqual,
            Operator::Less,
            Operator::Greater,
            Operator::LessEqual,
            Operator::GreaterEqual,
            Operator::Spaceship,
            Operator::And,
            Operator::Or,
            Operator::Not,
            Operator::BitAnd,
            Operator::BitOr,
            Operator::BitXor,
            Operator::BitNot,
            Operator::Shl,
            Operator::Shr,
        ]
    );
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        operators("( ) { } [ ] . , : => ... ?. ?: ?? ? |> ++ --"),
        vec![
            Operator::ParenL,
            Operator::ParenR,
            Operator::BraceL,
            Operator::BraceR,
            Operator::BracketL,
            Operator::BracketR,
            Operator::Dot,
            Operator::Comma,
            Operator::Colon,
            Operator::Arrow,
            Operator::Spread,
            Operator::SafeDot,
            Operator::Elvis,
            Operator::NullCoalesce,
            Operator::Question,
            Operator::Pipeline,
            Operator::Inc,
            Operator::Dec,
        ]
    );
}

#[test]
fn test_tokenize_maximal_munch() {
    let tokens = tokenize("<<=").unwrap();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].value, TokenValue::Operator(Operator::ShlAssign));

    assert_eq!(operators("a<=>b"), vec![Operator::Spaceship]);
    assert_eq!(operators("a**=b"), vec![Operator::ExpAssign]);
    assert_eq!(operators("a<<b"), vec![Operator::Shl]);
    assert_eq!(operators("a<b"), vec![Operator::Less]);
    assert_eq!(operators("a&&=b"), vec![Operator::And, Operator::Assign]);
}

#[test]
fn test_tokenize_word_operators() {
    let tokens = tokenize("a in b !in c is d !is e as f as? g").unwrap();

    assert_eq!(tokens[1].value, TokenValue::Keyword(Keyword::In));
    assert_eq!(tokens[3].value, TokenValue::Operator(Operator::NotIn));
    assert_eq!(tokens[5].value, TokenValue::Operator(Operator::Is));
    assert_eq!(tokens[7].value, TokenValue::Operator(Operator::NotIs));
    assert_eq!(tokens[9].value, TokenValue::Operator(Operator::As));
    assert_eq!(tokens[11].value, TokenValue::Operator(Operator::AsNullable));
    assert_eq!(tokens[12].value, TokenValue::String("g".to_string()));
}

#[test]
fn test_tokenize_not_before_identifier() {
    let tokens = tokenize("!inside").unwrap();

    assert_eq!(tokens[0].value, TokenValue::Operator(Operator::Not));
    assert_eq!(tokens[1].value, TokenValue::String("inside".to_string()));

    let tokens = tokenize("!valid").unwrap();
    assert_eq!(tokens[0].value, TokenValue::Operator(Operator::Not));
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
}

#[test]
fn test_tokenize_line_comments() {
    let tokens = tokenize("var x = 5 // this is a comment\nvar y = 10").unwrap();

    assert_eq!(tokens[3].value, TokenValue::Integer(5));
    assert_eq!(tokens[4].kind, TokenKind::EndOfLine);
    assert_eq!(tokens[5].value, TokenValue::Keyword(Keyword::Var));
    assert_eq!(tokens[8].value, TokenValue::Integer(10));
    assert_eq!(tokens[9].kind, TokenKind::EndOfProgram);
}

#[test]
fn test_tokenize_block_comments() {
    let tokens = tokenize("a /* one\ntwo */ + b").unwrap();

    assert_eq!(
        tokens.iter().map(|token| token.kind).collect::<Vec<_>>(),
        vec![TokenKind::Identifier, TokenKind::Operator, TokenKind::Identifier, TokenKind::EndOfProgram]
    );
    assert_eq!(tokens[1].position(), Position::new(2, 8));
}

#[test]
fn test_tokenize_unterminated_block_comment() {
    let error = tokenize("a /* never closed").unwrap_err();

    assert_eq!(*error.get_internal(), ErrorImpl::UnterminatedComment);
    assert_eq!(*error.get_position(), Position::new(1, 3));
}

#[test]
fn test_tokenize_newlines_collapse() {
    assert_eq!(
        kinds("a\n\n\n  \nb\n"),
        vec![
            TokenKind::Identifier,
            TokenKind::EndOfLine,
            TokenKind::Identifier,
            TokenKind::EndOfLine,
            TokenKind::EndOfProgram,
        ]
    );
}

#[test]
fn test_tokenize_semicolons_collapse() {
    let tokens = tokenize("a;;\n;b").unwrap();

    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[1].value, TokenValue::Operator(Operator::Semicolon));
    assert_eq!(tokens[2].value, TokenValue::String("b".to_string()));
}

#[test]
fn test_tokenize_whitespace_only() {
    assert_eq!(kinds(""), vec![TokenKind::EndOfProgram]);
    assert_eq!(kinds(" \t\r "), vec![TokenKind::EndOfProgram]);
    assert_eq!(kinds("\n"), vec![TokenKind::EndOfLine, TokenKind::EndOfProgram]);
    assert_eq!(
        kinds("  \n\t\n \n"),
        vec![TokenKind::EndOfLine, TokenKind::EndOfProgram]
    );
}

#[test]
fn test_tokenize_positions() {
    let tokens = tokenize("var a = 1\n  a += 22").unwrap();

    assert_eq!(tokens[0].position(), Position::new(1, 1));
    assert_eq!(tokens[1].position(), Position::new(1, 5));
    assert_eq!(tokens[2].position(), Position::new(1, 7));
    assert_eq!(tokens[3].position(), Position::new(1, 9));
    assert_eq!(tokens[4].position(), Position::new(1, 10));
    assert_eq!(tokens[5].position(), Position::new(2, 3));
    assert_eq!(tokens[6].position(), Position::new(2, 5));
    assert_eq!(tokens[6].span.end, Position::new(2, 7));
    assert_eq!(tokens[7].position(), Position::new(2, 8));
    assert_eq!(tokens[7].span.end, Position::new(2, 10));
    assert_eq!(tokens[8].position(), Position::new(2, 10));
}

#[test]
fn test_tokenize_unrecognized_character() {
    let error = tokenize("@").unwrap_err();

    assert_eq!(error.message(), "unexpected token `@`");
    assert_eq!(*error.get_position(), Position::new(1, 1));

    let error = tokenize("var x = 1\nx = #").unwrap_err();
    assert_eq!(error.message(), "unexpected token `#`");
    assert_eq!(*error.get_position(), Position::new(2, 5));
}

#[test]
fn test_operator_spelling_round_trip() {
    use std::str::FromStr;

    for source in ["+", "<=>", "..=", "?:", "|>", "!in", "as?", ";", "=>"] {
        let operator = Operator::from_str(source).unwrap();
        assert_eq!(operator.as_str(), source);
    }
    assert!(Operator::from_str("<>").is_err());
}

#[test]
fn test_every_operator_spelling_is_distinct() {
    use super::tokens::OPERATOR_LOOKUP;

    assert_eq!(OPERATOR_LOOKUP.len(), 61);
    for (spelling, operator) in OPERATOR_LOOKUP.iter() {
        assert_eq!(operator.as_str(), *spelling);
        assert_eq!(operator.to_string(), *spelling);
    }
}

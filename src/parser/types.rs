//! Type parsing implementation.
//!
//! This module handles parsing of type annotations. It supports:
//!
//! - Named types (`Int`)
//! - List types (`[Int]`)
//! - Tuple types (`(Int, String)`)
//!
//! Every type may be suffixed with `?` to make it nullable.

use crate::{
    ast::{
        ast::Type,
        types::{IdentifierType, ListType, TupleType},
    },
    errors::errors::Error,
    lexer::tokens::Operator,
};

use super::{
    lookups::{TokenKey, LOOKUPS},
    parser::Parser,
};

pub fn parse_type(parser: &mut Parser) -> Result<Type, Error> {
    match LOOKUPS
        .type_nud_lookup
        .get(&TokenKey::of(parser.current_token()))
    {
        Some(handler) => handler(parser),
        None => Err(parser.expected("type")),
    }
}

fn parse_nullable(parser: &mut Parser) -> bool {
    parser.eat_operator(Operator::Question)
}

pub fn parse_identifier_type(parser: &mut Parser) -> Result<Type, Error> {
    let identifier = parser.expect_identifier()?;

    Ok(Type::Identifier(IdentifierType {
        name: identifier.value,
        nullable: parse_nullable(parser),
        position: identifier.position,
    }))
}

pub fn parse_list_type(parser: &mut Parser) -> Result<Type, Error> {
    let position = parser.advance().position();
    let element = parse_type(parser)?;
    parser.expect_operator(Operator::BracketR)?;

    Ok(Type::List(ListType {
        element: Box::new(element),
        nullable: parse_nullable(parser),
        position,
    }))
}

pub fn parse_tuple_type(parser: &mut Parser) -> Result<Type, Error> {
    let position = parser.advance().position();

    let mut elements = vec![];
    while !parser.at_operator(Operator::ParenR) {
        elements.push(parse_type(parser)?);
        if !parser.eat_operator(Operator::Comma) {
            break;
        }
    }
    parser.expect_operator(Operator::ParenR)?;

    Ok(Type::Tuple(TupleType {
        elements,
        nullable: parse_nullable(parser),
        position,
    }))
}

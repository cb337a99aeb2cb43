use crate::{
    ast::{
        ast::{AstNode, Stmt},
        expressions::BlockExpr,
        statements::{
            ExpressionStmt, ForStmt, FuncArg, FuncDeclStmt, MatchCase, MatchStmt, ReturnStmt,
            TypeDeclStmt, VarDeclStmt, WhileStmt,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Keyword, Operator, TokenKind},
};

use super::{
    expr::parse_expr,
    lookups::{BindingPower, TokenKey, LOOKUPS},
    parser::Parser,
    types::parse_type,
};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if let Some(handler) = LOOKUPS.stmt_lookup.get(&TokenKey::of(parser.current_token())) {
        return handler(parser);
    }

    let expression = parse_expr(parser, BindingPower::Default)?;

    Ok(Stmt::Expression(ExpressionStmt {
        position: expression.position(),
        expression,
    }))
}

/// Parses statements until end of program, or until `closing` when given.
///
/// Statements are separated by terminators. A statement whose last token is a
/// closing `}` may be followed directly by the next one.
pub fn parse_statements(
    parser: &mut Parser,
    closing: Option<Operator>,
) -> Result<Vec<Stmt>, Error> {
    let mut body = vec![];

    loop {
        parser.skip_terminators();
        if at_end(parser, closing) {
            break;
        }
        if !parser.has_tokens() {
            if let Some(operator) = closing {
                return Err(parser.expected(&format!("`{}`", operator)));
            }
        }

        body.push(parse_stmt(parser)?);
        let closed_by_brace = parser
            .previous_token()
            .is_some_and(|token| token.is_operator(Operator::BraceR));

        // Running out of tokens is reported at the top of the loop
        if parser.at_terminator()
            || at_end(parser, closing)
            || !parser.has_tokens()
            || closed_by_brace
        {
            continue;
        }

        return Err(parser.expected("end of line"));
    }

    Ok(body)
}

fn at_end(parser: &Parser, closing: Option<Operator>) -> bool {
    match closing {
        Some(operator) => parser.at_operator(operator),
        None => !parser.has_tokens(),
    }
}

/// A braced block, or a single statement standing in for one.
///
/// One line break is allowed before the block starts.
pub fn parse_block(parser: &mut Parser) -> Result<BlockExpr, Error> {
    if parser.current_token_kind() == TokenKind::EndOfLine {
        parser.advance();
    }

    let position = parser.get_position();

    if parser.eat_operator(Operator::BraceL) {
        let body = parse_statements(parser, Some(Operator::BraceR))?;
        parser.expect_operator(Operator::BraceR)?;
        return Ok(BlockExpr { body, position });
    }

    Ok(BlockExpr {
        body: vec![parse_stmt(parser)?],
        position,
    })
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start_token = parser.advance();
    let is_constant = start_token.is_keyword(Keyword::Val);

    let identifier = parser.expect_identifier()?;

    let explicit_type = if parser.eat_operator(Operator::Colon) {
        Some(parse_type(parser)?)
    } else {
        None
    };

    let assigned_value = if parser.eat_operator(Operator::Assign) {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    Ok(Stmt::VarDecl(VarDeclStmt {
        identifier,
        is_constant,
        assigned_value,
        explicit_type,
        position: start_token.position(),
    }))
}

pub fn parse_type_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let position = parser.advance().position();

    let identifier = parser.expect_identifier()?;
    parser.expect_operator(Operator::Assign)?;
    let aliased_type = parse_type(parser)?;

    Ok(Stmt::TypeDecl(TypeDeclStmt {
        identifier,
        aliased_type,
        position,
    }))
}

fn parse_func_arg(parser: &mut Parser) -> Result<FuncArg, Error> {
    let identifier = parser.expect_identifier()?;

    let explicit_type = if parser.eat_operator(Operator::Colon) {
        Some(parse_type(parser)?)
    } else {
        None
    };

    let default_value = if parser.eat_operator(Operator::Assign) {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    Ok(FuncArg {
        position: identifier.position,
        identifier,
        explicit_type,
        default_value,
    })
}

pub fn parse_func_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let position = parser.advance().position();

    let identifier = parser.expect_identifier()?;

    parser.expect_operator(Operator::ParenL)?;
    let mut arguments = vec![];
    parser.skip_line_breaks();
    while !parser.at_operator(Operator::ParenR) {
        arguments.push(parse_func_arg(parser)?);
        parser.skip_line_breaks();
        if !parser.eat_operator(Operator::Comma) {
            break;
        }
        parser.skip_line_breaks();
    }
    parser.expect_operator(Operator::ParenR)?;

    let return_type = if parser.eat_operator(Operator::Colon) {
        Some(parse_type(parser)?)
    } else {
        None
    };

    let body = parse_block(parser)?;

    Ok(Stmt::FuncDecl(FuncDeclStmt {
        identifier,
        arguments,
        return_type,
        body,
        position,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let position = parser.advance().position();

    // A bare `return` may be followed by whatever can close the enclosing construct
    let value = if parser.at_terminator()
        || parser.at_operator(Operator::BraceR)
        || parser.at_operator(Operator::Comma)
        || parser.at_keyword(Keyword::Else)
        || !parser.has_tokens()
    {
        None
    } else {
        Some(parse_expr(parser, BindingPower::Default)?)
    };

    Ok(Stmt::Return(ReturnStmt { value, position }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let position = parser.advance().position();

    parser.expect_operator(Operator::ParenL)?;
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect_operator(Operator::ParenR)?;
    let body = parse_block(parser)?;

    Ok(Stmt::While(WhileStmt {
        condition,
        body,
        position,
    }))
}

pub fn parse_for_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let position = parser.advance().position();

    parser.expect_operator(Operator::ParenL)?;
    let binding = parser.expect_identifier()?;
    parser.expect_keyword(Keyword::In)?;
    let iterable = parse_expr(parser, BindingPower::Default)?;
    parser.expect_operator(Operator::ParenR)?;
    let body = parse_block(parser)?;

    Ok(Stmt::For(ForStmt {
        binding,
        iterable,
        body,
        position,
    }))
}

pub fn parse_match_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let position = parser.advance().position();

    parser.expect_operator(Operator::ParenL)?;
    let subject = parse_expr(parser, BindingPower::Default)?;
    parser.expect_operator(Operator::ParenR)?;

    parser.skip_line_breaks();
    parser.expect_operator(Operator::BraceL)?;

    let mut cases = vec![];
    let mut else_body = None;

    loop {
        while parser.at_terminator() || parser.at_operator(Operator::Comma) {
            parser.advance();
        }
        if parser.at_operator(Operator::BraceR) {
            break;
        }
        if else_body.is_some() {
            return Err(Error::new(
                ErrorImpl::MisplacedElseCase,
                parser.get_position(),
            ));
        }

        if parser.at_keyword(Keyword::Else) {
            parser.advance();
            parser.expect_operator(Operator::Arrow)?;
            else_body = Some(parse_block(parser)?);
            continue;
        }

        let case_position = parser.get_position();
        let mut patterns = vec![parse_expr(parser, BindingPower::Default)?];
        while parser.eat_operator(Operator::Comma) {
            patterns.push(parse_expr(parser, BindingPower::Default)?);
        }
        parser.expect_operator(Operator::Arrow)?;
        let body = parse_block(parser)?;

        cases.push(MatchCase {
            patterns,
            body,
            position: case_position,
        });
    }

    parser.expect_operator(Operator::BraceR)?;

    Ok(Stmt::Match(MatchStmt {
        subject,
        cases,
        else_body,
        position,
    }))
}

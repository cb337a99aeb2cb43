use crate::{
    ast::{
        ast::{AstNode, Expr},
        expressions::{
            BoolExpr, CallExpr, ConditionBranch, ConditionalExpr, FloatExpr,
            IdentifierExpr, IndexExpr, InfixExpr, IntegerExpr, ListExpr, PostfixExpr, PrefixExpr,
            StringExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Keyword, Operator, Token, TokenKind, TokenValue},
};

use super::{
    lookups::{expression_operator, Associativity, BindingPower, TokenKey, LOOKUPS},
    parser::Parser,
    stmt::parse_block,
};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let nud = match LOOKUPS.nud_lookup.get(&TokenKey::of(parser.current_token())) {
        Some(handler) => *handler,
        None => return Err(parser.unexpected()),
    };

    let mut left = nud(parser)?;

    // While the current token binds tighter than `bp`, keep extending the left side
    while LOOKUPS.get_bp(parser.current_token()) > bp {
        let key = TokenKey::of(parser.current_token());
        let led = match LOOKUPS.led_lookup.get(&key) {
            Some(handler) => *handler,
            None => return Err(parser.unexpected()),
        };

        left = led(parser, left, LOOKUPS.get_bp(parser.current_token()))?;
    }

    Ok(left)
}

fn operator_of(token: &Token) -> Result<Operator, Error> {
    expression_operator(token).ok_or_else(|| {
        Error::new(
            ErrorImpl::UnexpectedToken {
                token: token.lexeme(),
            },
            token.position(),
        )
    })
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.advance();
    let position = token.position();

    match token.value {
        TokenValue::Integer(value) => Ok(Expr::Integer(IntegerExpr { value, position })),
        TokenValue::Float(value) => Ok(Expr::Float(FloatExpr { value, position })),
        TokenValue::Boolean(value) => Ok(Expr::Bool(BoolExpr { value, position })),
        TokenValue::String(value) if token.kind == TokenKind::String => {
            Ok(Expr::String(StringExpr { value, position }))
        }
        TokenValue::String(value) => Ok(Expr::Identifier(IdentifierExpr { value, position })),
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: token.lexeme(),
            },
            position,
        )),
    }
}

pub fn parse_infix_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let associativity = LOOKUPS.get_associativity(parser.current_token());
    let operator = operator_of(&parser.advance())?;

    let right = match associativity {
        Associativity::Left => parse_expr(parser, bp)?,
        Associativity::Right => parse_expr(parser, bp.lower())?,
    };

    Ok(Expr::Infix(InfixExpr {
        position: left.position(),
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.advance();
    let operator = operator_of(&operator_token)?;
    let operand = parse_expr(parser, BindingPower::Prefix)?;

    Ok(Expr::Prefix(PrefixExpr {
        operator,
        operand: Box::new(operand),
        position: operator_token.position(),
    }))
}

pub fn parse_postfix_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    let operator = operator_of(&parser.advance())?;

    Ok(Expr::Postfix(PostfixExpr {
        position: left.position(),
        operand: Box::new(left),
        operator,
    }))
}

/// `a.b` and `a?.b`, kept as infix nodes with an identifier on the right.
pub fn parse_member_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    let operator = operator_of(&parser.advance())?;
    let member = parser.expect_identifier()?;

    Ok(Expr::Infix(InfixExpr {
        position: left.position(),
        left: Box::new(left),
        operator,
        right: Box::new(Expr::Identifier(member)),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect_operator(Operator::ParenR)?;

    Ok(expr)
}

/// Comma separated expressions up to `closing`. Line breaks and a trailing comma are allowed.
fn parse_expr_list(parser: &mut Parser, closing: Operator) -> Result<Vec<Expr>, Error> {
    let mut elements = vec![];

    parser.skip_line_breaks();
    while !parser.at_operator(closing) {
        elements.push(parse_expr(parser, BindingPower::Default)?);
        parser.skip_line_breaks();
        if !parser.eat_operator(Operator::Comma) {
            break;
        }
        parser.skip_line_breaks();
    }

    parser.expect_operator(closing)?;
    Ok(elements)
}

pub fn parse_list_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let position = parser.advance().position();
    let elements = parse_expr_list(parser, Operator::BracketR)?;

    Ok(Expr::List(ListExpr { elements, position }))
}

pub fn parse_call_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    parser.advance();
    let arguments = parse_expr_list(parser, Operator::ParenR)?;

    Ok(Expr::Call(CallExpr {
        position: left.position(),
        callee: Box::new(left),
        arguments,
    }))
}

pub fn parse_index_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    parser.advance();
    let index = parse_expr(parser, BindingPower::Default)?;
    parser.expect_operator(Operator::BracketR)?;

    Ok(Expr::Index(IndexExpr {
        position: left.position(),
        left: Box::new(left),
        index: Box::new(index),
    }))
}

pub fn parse_block_expr(parser: &mut Parser) -> Result<Expr, Error> {
    Ok(Expr::Block(parse_block(parser)?))
}

/// `(condition) block`, shared by `if` and `elif`.
fn parse_condition_branch(parser: &mut Parser) -> Result<ConditionBranch, Error> {
    let position = parser.advance().position();

    parser.expect_operator(Operator::ParenL)?;
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect_operator(Operator::ParenR)?;
    let body = parse_block(parser)?;

    Ok(ConditionBranch {
        condition,
        body,
        position,
    })
}

pub fn parse_conditional_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let position = parser.get_position();
    let mut branches = vec![parse_condition_branch(parser)?];

    // `elif` and `else` have to stay on the line the previous block ends on
    while parser.at_keyword(Keyword::Elif) {
        branches.push(parse_condition_branch(parser)?);
    }

    let else_body = if parser.at_keyword(Keyword::Else) {
        parser.advance();
        Some(parse_block(parser)?)
    } else {
        None
    };

    Ok(Expr::Conditional(ConditionalExpr {
        branches,
        else_body,
        position,
    }))
}

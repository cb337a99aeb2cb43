use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::ast::{Expr, Stmt, Type},
    errors::errors::Error,
    lexer::tokens::{Keyword, Operator, Token, TokenKind, TokenValue},
};

use super::{expr::*, parser::Parser, stmt::*, types::*};

/// Operator precedence, weakest first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub enum BindingPower {
    Default,
    Assignment,
    Pipeline,
    LogicalOr,
    LogicalAnd,
    NullCoalesce,
    BitOr,
    BitXor,
    BitAnd,
    Equality,
    Relational,
    Membership,
    Elvis,
    Shift,
    Range,
    Additive,
    Multiplicative,
    Exponent,
    Cast,
    Prefix,
    Member,
}

impl BindingPower {
    /// The next weaker level. Right associative operators parse their right side at it.
    pub fn lower(self) -> BindingPower {
        match self {
            BindingPower::Default | BindingPower::Assignment => BindingPower::Default,
            BindingPower::Pipeline => BindingPower::Assignment,
            BindingPower::LogicalOr => BindingPower::Pipeline,
            BindingPower::LogicalAnd => BindingPower::LogicalOr,
            BindingPower::NullCoalesce => BindingPower::LogicalAnd,
            BindingPower::BitOr => BindingPower::NullCoalesce,
            BindingPower::BitXor => BindingPower::BitOr,
            BindingPower::BitAnd => BindingPower::BitXor,
            BindingPower::Equality => BindingPower::BitAnd,
            BindingPower::Relational => BindingPower::Equality,
            BindingPower::Membership => BindingPower::Relational,
            BindingPower::Elvis => BindingPower::Membership,
            BindingPower::Shift => BindingPower::Elvis,
            BindingPower::Range => BindingPower::Shift,
            BindingPower::Additive => BindingPower::Range,
            BindingPower::Multiplicative => BindingPower::Additive,
            BindingPower::Exponent => BindingPower::Multiplicative,
            BindingPower::Cast => BindingPower::Exponent,
            BindingPower::Prefix => BindingPower::Cast,
            BindingPower::Member => BindingPower::Prefix,
        }
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Associativity {
    Left,
    Right,
}

const INFIX_OPERATORS: &[(Operator, BindingPower, Associativity)] = &[
    (Operator::Assign, BindingPower::Assignment, Associativity::Right),
    (Operator::AddAssign, BindingPower::Assignment, Associativity::Right),
    (Operator::SubAssign, BindingPower::Assignment, Associativity::Right),
    (Operator::MulAssign, BindingPower::Assignment, Associativity::Right),
    (Operator::DivAssign, BindingPower::Assignment, Associativity::Right),
    (Operator::ModAssign, BindingPower::Assignment, Associativity::Right),
    (Operator::ExpAssign, BindingPower::Assignment, Associativity::Right),
    (Operator::ShlAssign, BindingPower::Assignment, Associativity::Right),
    (Operator::ShrAssign, BindingPower::Assignment, Associativity::Right),
    (Operator::BitAndAssign, BindingPower::Assignment, Associativity::Right),
    (Operator::BitOrAssign, BindingPower::Assignment, Associativity::Right),
    (Operator::BitXorAssign, BindingPower::Assignment, Associativity::Right),
    (Operator::Pipeline, BindingPower::Pipeline, Associativity::Left),
    (Operator::Or, BindingPower::LogicalOr, Associativity::Left),
    (Operator::And, BindingPower::LogicalAnd, Associativity::Left),
    (Operator::NullCoalesce, BindingPower::NullCoalesce, Associativity::Left),
    (Operator::BitOr, BindingPower::BitOr, Associativity::Left),
    (Operator::BitXor, BindingPower::BitXor, Associativity::Left),
    (Operator::BitAnd, BindingPower::BitAnd, Associativity::Left),
    (Operator::Equal, BindingPower::Equality, Associativity::Left),
    (Operator::NotEqual, BindingPower::Equality, Associativity::Left),
    (Operator::Less, BindingPower::Relational, Associativity::Left),
    (Operator::Greater, BindingPower::Relational, Associativity::Left),
    (Operator::LessEqual, BindingPower::Relational, Associativity::Left),
    (Operator::GreaterEqual, BindingPower::Relational, Associativity::Left),
    (Operator::Spaceship, BindingPower::Relational, Associativity::Left),
    (Operator::In, BindingPower::Membership, Associativity::Left),
    (Operator::NotIn, BindingPower::Membership, Associativity::Left),
    (Operator::Is, BindingPower::Membership, Associativity::Left),
    (Operator::NotIs, BindingPower::Membership, Associativity::Left),
    (Operator::Elvis, BindingPower::Elvis, Associativity::Left),
    (Operator::Shl, BindingPower::Shift, Associativity::Left),
    (Operator::Shr, BindingPower::Shift, Associativity::Left),
    (Operator::Range, BindingPower::Range, Associativity::Left),
    (Operator::RangeInclusive, BindingPower::Range, Associativity::Left),
    (Operator::Add, BindingPower::Additive, Associativity::Left),
    (Operator::Sub, BindingPower::Additive, Associativity::Left),
    (Operator::Mul, BindingPower::Multiplicative, Associativity::Left),
    (Operator::Div, BindingPower::Multiplicative, Associativity::Left),
    (Operator::Mod, BindingPower::Multiplicative, Associativity::Left),
    (Operator::Exp, BindingPower::Exponent, Associativity::Right),
    (Operator::As, BindingPower::Cast, Associativity::Left),
    (Operator::AsNullable, BindingPower::Cast, Associativity::Left),
    (Operator::Dot, BindingPower::Member, Associativity::Left),
    (Operator::SafeDot, BindingPower::Member, Associativity::Left),
];

const PREFIX_OPERATORS: &[Operator] = &[
    Operator::Sub,
    Operator::Add,
    Operator::Not,
    Operator::BitNot,
    Operator::Inc,
    Operator::Dec,
    Operator::Spread,
];

const POSTFIX_OPERATORS: &[Operator] = &[Operator::Inc, Operator::Dec];

lazy_static! {
    pub static ref LOOKUPS: Lookups = create_token_lookups();
}

/// The operator a token stands for in expression position.
/// The `in` keyword doubles as the membership operator.
pub fn expression_operator(token: &Token) -> Option<Operator> {
    match token.value {
        TokenValue::Operator(operator) => Some(operator),
        TokenValue::Keyword(Keyword::In) => Some(Operator::In),
        _ => None,
    }
}

/// What a handler table is keyed on: the operator or keyword when the token
/// carries one, otherwise just its kind.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum TokenKey {
    Kind(TokenKind),
    Operator(Operator),
    Keyword(Keyword),
}

impl TokenKey {
    pub fn of(token: &Token) -> TokenKey {
        match token.value {
            TokenValue::Operator(operator) => TokenKey::Operator(operator),
            TokenValue::Keyword(keyword) => TokenKey::Keyword(keyword),
            _ => TokenKey::Kind(token.kind),
        }
    }
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser, Expr, BindingPower) -> Result<Expr, Error>;
pub type TypeNUDHandler = fn(&mut Parser) -> Result<Type, Error>;

pub type StmtLookup = HashMap<TokenKey, StmtHandler>;
pub type NUDLookup = HashMap<TokenKey, NUDHandler>;
pub type LEDLookup = HashMap<TokenKey, LEDHandler>;
pub type BPLookup = HashMap<TokenKey, (BindingPower, Associativity)>;
pub type TypeNUDLookup = HashMap<TokenKey, TypeNUDHandler>;

/// Handler tables, built once and shared by every parser.
#[derive(Default)]
pub struct Lookups {
    pub stmt_lookup: StmtLookup,
    pub nud_lookup: NUDLookup,
    pub led_lookup: LEDLookup,
    pub binding_power_lookup: BPLookup,
    pub type_nud_lookup: TypeNUDLookup,
}

impl Lookups {
    pub fn led(
        &mut self,
        key: TokenKey,
        bp: BindingPower,
        associativity: Associativity,
        handler: LEDHandler,
    ) {
        self.binding_power_lookup.insert(key, (bp, associativity));
        self.led_lookup.insert(key, handler);
    }

    pub fn nud(&mut self, key: TokenKey, handler: NUDHandler) {
        self.nud_lookup.insert(key, handler);
    }

    pub fn stmt(&mut self, key: TokenKey, handler: StmtHandler) {
        self.stmt_lookup.insert(key, handler);
    }

    pub fn type_nud(&mut self, key: TokenKey, handler: TypeNUDHandler) {
        self.type_nud_lookup.insert(key, handler);
    }

    pub fn get_bp(&self, token: &Token) -> BindingPower {
        self.binding_power_lookup
            .get(&TokenKey::of(token))
            .map(|(bp, _)| *bp)
            .unwrap_or(BindingPower::Default)
    }

    pub fn get_associativity(&self, token: &Token) -> Associativity {
        self.binding_power_lookup
            .get(&TokenKey::of(token))
            .map(|(_, associativity)| *associativity)
            .unwrap_or(Associativity::Left)
    }
}

pub fn create_token_lookups() -> Lookups {
    let mut lookups = Lookups::default();

    // Binary operators
    for (operator, bp, associativity) in INFIX_OPERATORS {
        let key = TokenKey::Operator(*operator);
        match operator {
            Operator::Dot | Operator::SafeDot => {
                lookups.led(key, *bp, *associativity, parse_member_expr)
            }
            _ => lookups.led(key, *bp, *associativity, parse_infix_expr),
        }
    }
    lookups.led(
        TokenKey::Keyword(Keyword::In),
        BindingPower::Membership,
        Associativity::Left,
        parse_infix_expr,
    );

    // Postfix chain
    lookups.led(
        TokenKey::Operator(Operator::ParenL),
        BindingPower::Member,
        Associativity::Left,
        parse_call_expr,
    );
    lookups.led(
        TokenKey::Operator(Operator::BracketL),
        BindingPower::Member,
        Associativity::Left,
        parse_index_expr,
    );
    for operator in POSTFIX_OPERATORS {
        lookups.led(
            TokenKey::Operator(*operator),
            BindingPower::Member,
            Associativity::Left,
            parse_postfix_expr,
        );
    }

    // Literals and symbols
    lookups.nud(TokenKey::Kind(TokenKind::Integer), parse_primary_expr);
    lookups.nud(TokenKey::Kind(TokenKind::Float), parse_primary_expr);
    lookups.nud(TokenKey::Kind(TokenKind::Boolean), parse_primary_expr);
    lookups.nud(TokenKey::Kind(TokenKind::String), parse_primary_expr);
    lookups.nud(TokenKey::Kind(TokenKind::Identifier), parse_primary_expr);
    for operator in PREFIX_OPERATORS {
        lookups.nud(TokenKey::Operator(*operator), parse_prefix_expr);
    }
    lookups.nud(TokenKey::Operator(Operator::ParenL), parse_grouping_expr);
    lookups.nud(TokenKey::Operator(Operator::BracketL), parse_list_expr);
    lookups.nud(TokenKey::Operator(Operator::BraceL), parse_block_expr);
    lookups.nud(TokenKey::Keyword(Keyword::If), parse_conditional_expr);

    // Statements
    lookups.stmt(TokenKey::Keyword(Keyword::Var), parse_var_decl_stmt);
    lookups.stmt(TokenKey::Keyword(Keyword::Val), parse_var_decl_stmt);
    lookups.stmt(TokenKey::Keyword(Keyword::Type), parse_type_decl_stmt);
    lookups.stmt(TokenKey::Keyword(Keyword::Func), parse_func_decl_stmt);
    lookups.stmt(TokenKey::Keyword(Keyword::Return), parse_return_stmt);
    lookups.stmt(TokenKey::Keyword(Keyword::While), parse_while_stmt);
    lookups.stmt(TokenKey::Keyword(Keyword::For), parse_for_stmt);
    lookups.stmt(TokenKey::Keyword(Keyword::Match), parse_match_stmt);

    // Types
    lookups.type_nud(TokenKey::Kind(TokenKind::Identifier), parse_identifier_type);
    lookups.type_nud(TokenKey::Operator(Operator::BracketL), parse_list_type);
    lookups.type_nud(TokenKey::Operator(Operator::ParenL), parse_tuple_type);

    lookups
}

use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display, str::FromStr};

use crate::{Position, Span, MK_TOKEN};

lazy_static! {
    pub static ref OPERATOR_LOOKUP: HashMap<&'static str, Operator> = {
        let mut map = HashMap::new();
        for operator in OPERATORS {
            map.insert(operator.as_str(), *operator);
        }
        map
    };
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, Keyword> = {
        let mut map = HashMap::new();
        map.insert("var", Keyword::Var);
        map.insert("val", Keyword::Val);
        map.insert("func", Keyword::Func);
        map.insert("type", Keyword::Type);
        map.insert("if", Keyword::If);
        map.insert("elif", Keyword::Elif);
        map.insert("else", Keyword::Else);
        map.insert("while", Keyword::While);
        map.insert("for", Keyword::For);
        map.insert("in", Keyword::In);
        map.insert("match", Keyword::Match);
        map.insert("return", Keyword::Return);
        map.insert("true", Keyword::True);
        map.insert("false", Keyword::False);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Integer,
    Float,
    Boolean,
    String,
    Identifier,
    Keyword,
    Operator,
    EndOfLine,
    EndOfProgram,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Integer => "integer",
            TokenKind::Float => "float",
            TokenKind::Boolean => "boolean",
            TokenKind::String => "string",
            TokenKind::Identifier => "identifier",
            TokenKind::Keyword => "keyword",
            TokenKind::Operator => "operator",
            TokenKind::EndOfLine => "end of line",
            TokenKind::EndOfProgram => "end of program",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Operator {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Exp,

    // Assignment
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    ModAssign,
    ExpAssign,
    ShlAssign,
    ShrAssign,
    BitAndAssign,
    BitOrAssign,
    BitXorAssign,

    Inc,
    Dec,

    // Logical
    And,
    Or,
    Not,

    // Bitwise
    BitAnd,
    BitOr,
    BitXor,
    BitNot,
    Shl,
    Shr,

    // Comparison
    Equal,
    NotEqual,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    Spaceship,

    Range,
    RangeInclusive,
    Spread,

    Dot,
    SafeDot,

    Elvis,
    NullCoalesce,
    Question,

    Pipeline,

    // Punctuation
    ParenL,
    ParenR,
    BracketL,
    BracketR,
    BraceL,
    BraceR,
    Comma,
    Colon,
    Semicolon,
    Arrow,

    // Word operators
    In,
    NotIn,
    Is,
    NotIs,
    As,
    AsNullable,
}

const OPERATORS: &[Operator] = &[
    Operator::Add,
    Operator::Sub,
    Operator::Mul,
    Operator::Div,
    Operator::Mod,
    Operator::Exp,
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
    Operator::Inc,
    Operator::Dec,
    Operator::And,
    Operator::Or,
    Operator::Not,
    Operator::BitAnd,
    Operator::BitOr,
    Operator::BitXor,
    Operator::BitNot,
    Operator::Shl,
    Operator::Shr,
    Operator::Equal,
    Operator::NotEqual,
    Operator::Less,
    Operator::Greater,
    Operator::LessEqual,
    Operator::GreaterEqual,
    Operator::Spaceship,
    Operator::Range,
    Operator::RangeInclusive,
    Operator::Spread,
    Operator::Dot,
    Operator::SafeDot,
    Operator::Elvis,
    Operator::NullCoalesce,
    Operator::Question,
    Operator::Pipeline,
    Operator::ParenL,
    Operator::ParenR,
    Operator::BracketL,
    Operator::BracketR,
    Operator::BraceL,
    Operator::BraceR,
    Operator::Comma,
    Operator::Colon,
    Operator::Semicolon,
    Operator::Arrow,
    Operator::In,
    Operator::NotIn,
    Operator::Is,
    Operator::NotIs,
    Operator::As,
    Operator::AsNullable,
];

impl Operator {
    /// The canonical spelling, used for lexing and for diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Mod => "%",
            Operator::Exp => "**",
            Operator::Assign => "=",
            Operator::AddAssign => "+=",
            Operator::SubAssign => "-=",
            Operator::MulAssign => "*=",
            Operator::DivAssign => "/=",
            Operator::ModAssign => "%=",
            Operator::ExpAssign => "**=",
            Operator::ShlAssign => "<<=",
            Operator::ShrAssign => ">>=",
            Operator::BitAndAssign => "&=",
            Operator::BitOrAssign => "|=",
            Operator::BitXorAssign => "^=",
            Operator::Inc => "++",
            Operator::Dec => "--",
            Operator::And => "&&",
            Operator::Or => "||",
            Operator::Not => "!",
            Operator::BitAnd => "&",
            Operator::BitOr => "|",
            Operator::BitXor => "^",
            Operator::BitNot => "~",
            Operator::Shl => "<<",
            Operator::Shr => ">>",
            Operator::Equal => "==",
            Operator::NotEqual => "!=",
            Operator::Less => "<",
            Operator::Greater => ">",
            Operator::LessEqual => "<=",
            Operator::GreaterEqual => ">=",
            Operator::Spaceship => "<=>",
            Operator::Range => "..",
            Operator::RangeInclusive => "..=",
            Operator::Spread => "...",
            Operator::Dot => ".",
            Operator::SafeDot => "?.",
            Operator::Elvis => "?:",
            Operator::NullCoalesce => "??",
            Operator::Question => "?",
            Operator::Pipeline => "|>",
            Operator::ParenL => "(",
            Operator::ParenR => ")",
            Operator::BracketL => "[",
            Operator::BracketR => "]",
            Operator::BraceL => "{",
            Operator::BraceR => "}",
            Operator::Comma => ",",
            Operator::Colon => ":",
            Operator::Semicolon => ";",
            Operator::Arrow => "=>",
            Operator::In => "in",
            Operator::NotIn => "!in",
            Operator::Is => "is",
            Operator::NotIs => "!is",
            Operator::As => "as",
            Operator::AsNullable => "as?",
        }
    }

    /// Operators spelled with letters, lexed out of identifier-shaped lexemes.
    pub fn is_word(&self) -> bool {
        matches!(
            self,
            Operator::In
                | Operator::NotIn
                | Operator::Is
                | Operator::NotIs
                | Operator::As
                | Operator::AsNullable
        )
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Operator {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OPERATOR_LOOKUP.get(s).copied().ok_or(())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Keyword {
    Var,
    Val,
    Func,
    Type,
    If,
    Elif,
    Else,
    While,
    For,
    In,
    Match,
    Return,
    True,
    False,
}

impl Keyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Var => "var",
            Keyword::Val => "val",
            Keyword::Func => "func",
            Keyword::Type => "type",
            Keyword::If => "if",
            Keyword::Elif => "elif",
            Keyword::Else => "else",
            Keyword::While => "while",
            Keyword::For => "for",
            Keyword::In => "in",
            Keyword::Match => "match",
            Keyword::Return => "return",
            Keyword::True => "true",
            Keyword::False => "false",
        }
    }
}

impl Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Keyword {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RESERVED_LOOKUP.get(s).copied().ok_or(())
    }
}

/// The payload of a token. Which member is active follows from the token's kind.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    None,
    Integer(i64),
    Float(f64),
    Boolean(bool),
    String(String),
    Operator(Operator),
    Keyword(Keyword),
}

impl Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::None => write!(f, ""),
            TokenValue::Integer(value) => write!(f, "{}", value),
            TokenValue::Float(value) => write!(f, "{:?}", value),
            TokenValue::Boolean(value) => write!(f, "{}", value),
            TokenValue::String(value) => write!(f, "{}", value),
            TokenValue::Operator(operator) => write!(f, "{}", operator),
            TokenValue::Keyword(keyword) => write!(f, "{}", keyword),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::EndOfLine | TokenKind::EndOfProgram => write!(f, "{}", self.kind),
            _ => write!(f, "{} `{}`", self.kind, self.value),
        }
    }
}

impl Token {
    pub fn integer(value: i64, span: Span) -> Self {
        MK_TOKEN!(TokenKind::Integer, TokenValue::Integer(value), span)
    }

    pub fn float(value: f64, span: Span) -> Self {
        MK_TOKEN!(TokenKind::Float, TokenValue::Float(value), span)
    }

    pub fn boolean(value: bool, span: Span) -> Self {
        MK_TOKEN!(TokenKind::Boolean, TokenValue::Boolean(value), span)
    }

    pub fn string(value: String, span: Span) -> Self {
        MK_TOKEN!(TokenKind::String, TokenValue::String(value), span)
    }

    pub fn identifier(value: String, span: Span) -> Self {
        MK_TOKEN!(TokenKind::Identifier, TokenValue::String(value), span)
    }

    pub fn keyword(keyword: Keyword, span: Span) -> Self {
        MK_TOKEN!(TokenKind::Keyword, TokenValue::Keyword(keyword), span)
    }

    pub fn operator(operator: Operator, span: Span) -> Self {
        MK_TOKEN!(TokenKind::Operator, TokenValue::Operator(operator), span)
    }

    pub fn end_of_line(span: Span) -> Self {
        MK_TOKEN!(TokenKind::EndOfLine, TokenValue::None, span)
    }

    pub fn end_of_program(span: Span) -> Self {
        MK_TOKEN!(TokenKind::EndOfProgram, TokenValue::None, span)
    }

    pub fn position(&self) -> Position {
        self.span.start
    }

    pub fn is_operator(&self, operator: Operator) -> bool {
        self.value == TokenValue::Operator(operator)
    }

    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.value == TokenValue::Keyword(keyword)
    }

    pub fn as_operator(&self) -> Option<Operator> {
        match self.value {
            TokenValue::Operator(operator) => Some(operator),
            _ => None,
        }
    }

    pub fn as_keyword(&self) -> Option<Keyword> {
        match self.value {
            TokenValue::Keyword(keyword) => Some(keyword),
            _ => None,
        }
    }

    /// Statement terminators: a line break or `;`.
    pub fn is_terminator(&self) -> bool {
        self.kind == TokenKind::EndOfLine || self.is_operator(Operator::Semicolon)
    }

    /// The lexeme text, or an empty string for line and program ends.
    pub fn lexeme(&self) -> String {
        self.value.to_string()
    }

    pub fn debug(&self) -> String {
        format!("{}:{} {}", self.span.start.line, self.span.start.column, self)
    }
}

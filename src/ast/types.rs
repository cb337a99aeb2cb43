use std::fmt::Display;

use crate::Position;

use super::{ast::Type, expressions::join};

fn nullable_suffix(nullable: bool) -> &'static str {
    if nullable {
        "?"
    } else {
        ""
    }
}

/// A named type such as `Int` or `String`.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierType {
    pub name: String,
    pub nullable: bool,
    pub position: Position,
}

impl Display for IdentifierType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.name, nullable_suffix(self.nullable))
    }
}

/// `[T]`
#[derive(Debug, Clone, PartialEq)]
pub struct ListType {
    pub element: Box<Type>,
    pub nullable: bool,
    pub position: Position,
}

impl Display for ListType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]{}", self.element, nullable_suffix(self.nullable))
    }
}

/// `(T, U, ...)`
#[derive(Debug, Clone, PartialEq)]
pub struct TupleType {
    pub elements: Vec<Type>,
    pub nullable: bool,
    pub position: Position,
}

impl Display for TupleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}){}",
            join(&self.elements),
            nullable_suffix(self.nullable)
        )
    }
}

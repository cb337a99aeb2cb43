use std::fmt::Display;

use crate::Position;

use super::{
    ast::{write_indented, Expr, Type},
    expressions::{join, BlockExpr, IdentifierExpr},
};

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Expr,
    pub position: Position,
}

impl Display for ExpressionStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expression)
    }
}

/// `var` or `val` declaration. `val` bindings are constant.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    pub identifier: IdentifierExpr,
    pub is_constant: bool,
    pub assigned_value: Option<Expr>,
    pub explicit_type: Option<Type>,
    pub position: Position,
}

impl Display for VarDeclStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keyword = if self.is_constant { "val" } else { "var" };
        write!(f, "{} {}", keyword, self.identifier)?;
        if let Some(explicit_type) = &self.explicit_type {
            write!(f, ": {}", explicit_type)?;
        }
        if let Some(value) = &self.assigned_value {
            write!(f, " = {}", value)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeDeclStmt {
    pub identifier: IdentifierExpr,
    pub aliased_type: Type,
    pub position: Position,
}

impl Display for TypeDeclStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "type {} = {}", self.identifier, self.aliased_type)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuncArg {
    pub identifier: IdentifierExpr,
    pub explicit_type: Option<Type>,
    pub default_value: Option<Expr>,
    pub position: Position,
}

impl Display for FuncArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.identifier)?;
        if let Some(explicit_type) = &self.explicit_type {
            write!(f, ": {}", explicit_type)?;
        }
        if let Some(default_value) = &self.default_value {
            write!(f, " = {}", default_value)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuncDeclStmt {
    pub identifier: IdentifierExpr,
    pub arguments: Vec<FuncArg>,
    pub return_type: Option<Type>,
    pub body: BlockExpr,
    pub position: Position,
}

impl Display for FuncDeclStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "func {}({})", self.identifier, join(&self.arguments))?;
        if let Some(return_type) = &self.return_type {
            write!(f, ": {}", return_type)?;
        }
        write!(f, " {}", self.body)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Option<Expr>,
    pub position: Position,
}

impl Display for ReturnStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "return {}", value),
            None => write!(f, "return"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: BlockExpr,
    pub position: Position,
}

impl Display for WhileStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "while ({}) {}", self.condition, self.body)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub binding: IdentifierExpr,
    pub iterable: Expr,
    pub body: BlockExpr,
    pub position: Position,
}

impl Display for ForStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "for ({} in {}) {}",
            self.binding, self.iterable, self.body
        )
    }
}

/// One `patterns => block` arm of a match.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchCase {
    pub patterns: Vec<Expr>,
    pub body: BlockExpr,
    pub position: Position,
}

impl Display for MatchCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} => {}", join(&self.patterns), self.body)
    }
}

/// Match Statement
///
/// The `else` arm is kept apart from the pattern cases and always comes last.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchStmt {
    pub subject: Expr,
    pub cases: Vec<MatchCase>,
    pub else_body: Option<BlockExpr>,
    pub position: Position,
}

impl Display for MatchStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.cases.is_empty() && self.else_body.is_none() {
            return write!(f, "match ({}) {{}}", self.subject);
        }
        writeln!(f, "match ({}) {{", self.subject)?;
        for case in &self.cases {
            write_indented(f, &case.to_string())?;
        }
        if let Some(else_body) = &self.else_body {
            write_indented(f, &format!("else => {}", else_body))?;
        }
        write!(f, "}}")
    }
}

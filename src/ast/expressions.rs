use std::fmt::Display;

use crate::{lexer::tokens::Operator, Position};

use super::ast::{write_indented, Expr, Stmt};

// LITERALS

/// Integer Expression
/// Decimal, hex and binary literals all end up here.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerExpr {
    pub value: i64,
    pub position: Position,
}

impl Display for IntegerExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Float Expression
#[derive(Debug, Clone, PartialEq)]
pub struct FloatExpr {
    pub value: f64,
    pub position: Position,
}

impl Display for FloatExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // `Display` for f64 never uses an exponent, but drops the fraction of whole numbers
        let text = self.value.to_string();
        if text.contains('.') {
            write!(f, "{}", text)
        } else {
            write!(f, "{}.0", text)
        }
    }
}

/// Boolean Expression
#[derive(Debug, Clone, PartialEq)]
pub struct BoolExpr {
    pub value: bool,
    pub position: Position,
}

impl Display for BoolExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// String Expression
/// Represents a string literal in the AST. The quote it was written with is not kept.
#[derive(Debug, Clone, PartialEq)]
pub struct StringExpr {
    pub value: String,
    pub position: Position,
}

impl StringExpr {
    /// First quote character that does not occur in the value.
    fn quote(&self) -> char {
        ['"', '\'', '`']
            .into_iter()
            .find(|quote| !self.value.contains(*quote))
            .unwrap_or('"')
    }
}

impl Display for StringExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let quote = self.quote();
        write!(f, "{}{}{}", quote, self.value, quote)
    }
}

/// Identifier Expression
/// Represents a name in the AST. This includes functions.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierExpr {
    pub value: String,
    pub position: Position,
}

impl Display for IdentifierExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// List Expression
#[derive(Debug, Clone, PartialEq)]
pub struct ListExpr {
    pub elements: Vec<Expr>,
    pub position: Position,
}

impl Display for ListExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", join(&self.elements))
    }
}

// OPERATORS

/// Infix Expression
/// Binary operators, assignments and member access (`.`, `?.`).
#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpr {
    pub left: Box<Expr>,
    pub operator: Operator,
    pub right: Box<Expr>,
    pub position: Position,
}

impl Display for InfixExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.operator {
            Operator::Dot | Operator::SafeDot => {
                write!(f, "({}{}{})", self.left, self.operator, self.right)
            }
            _ => write!(f, "({} {} {})", self.left, self.operator, self.right),
        }
    }
}

/// Prefix Expression
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub operator: Operator,
    pub operand: Box<Expr>,
    pub position: Position,
}

impl Display for PrefixExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The space keeps `- 1` from being read back as the literal `-1`
        write!(f, "({} {})", self.operator, self.operand)
    }
}

/// Postfix Expression
/// Only `++` and `--`.
#[derive(Debug, Clone, PartialEq)]
pub struct PostfixExpr {
    pub operand: Box<Expr>,
    pub operator: Operator,
    pub position: Position,
}

impl Display for PostfixExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}{})", self.operand, self.operator)
    }
}

// CALLS

/// Call Expression
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
    pub position: Position,
}

impl Display for CallExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.callee, join(&self.arguments))
    }
}

/// Index Expression
#[derive(Debug, Clone, PartialEq)]
pub struct IndexExpr {
    pub left: Box<Expr>,
    pub index: Box<Expr>,
    pub position: Position,
}

impl Display for IndexExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]", self.left, self.index)
    }
}

// CONTROL FLOW

/// One `if` or `elif` arm.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionBranch {
    pub condition: Expr,
    pub body: BlockExpr,
    pub position: Position,
}

/// Conditional Expression
///
/// `if (c) {} elif (c) {} else {}`. The first branch is the `if`, every following
/// one an `elif`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalExpr {
    pub branches: Vec<ConditionBranch>,
    pub else_body: Option<BlockExpr>,
    pub position: Position,
}

impl ConditionalExpr {
    pub fn elif_branches(&self) -> &[ConditionBranch] {
        self.branches.get(1..).unwrap_or_default()
    }
}

impl Display for ConditionalExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, branch) in self.branches.iter().enumerate() {
            let keyword = if i == 0 { "if" } else { " elif" };
            write!(f, "{} ({}) {}", keyword, branch.condition, branch.body)?;
        }
        if let Some(else_body) = &self.else_body {
            write!(f, " else {}", else_body)?;
        }
        Ok(())
    }
}

/// Block Expression
#[derive(Debug, Clone, PartialEq)]
pub struct BlockExpr {
    pub body: Vec<Stmt>,
    pub position: Position,
}

impl Display for BlockExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.body.is_empty() {
            return write!(f, "{{}}");
        }
        writeln!(f, "{{")?;
        for stmt in &self.body {
            write_indented(f, &stmt.to_string())?;
        }
        write!(f, "}}")
    }
}

pub(crate) fn join<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

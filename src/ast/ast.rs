use std::fmt::{Debug, Display};

use crate::Position;

use super::{
    expressions::{
        BlockExpr, BoolExpr, CallExpr, ConditionalExpr, FloatExpr, IdentifierExpr, IndexExpr,
        InfixExpr, IntegerExpr, ListExpr, PostfixExpr, PrefixExpr, StringExpr,
    },
    statements::{
        ExpressionStmt, ForStmt, FuncDeclStmt, MatchStmt, ReturnStmt, TypeDeclStmt, VarDeclStmt,
        WhileStmt,
    },
    types::{IdentifierType, ListType, TupleType},
};

/// AST Node Trait
///
/// Shared by every node kind: a source position and a printable form.
/// The printed form is canonical source text that parses back to the same tree.
pub trait AstNode: Debug + Display {
    /// Returns the position of the first token of the node.
    fn position(&self) -> Position;
    /// Renders the node as canonical source text.
    fn to_display_string(&self) -> String {
        self.to_string()
    }
}

/// Statement
///
/// Top-level and block-level constructs.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Expression(ExpressionStmt),
    VarDecl(VarDeclStmt),
    TypeDecl(TypeDeclStmt),
    FuncDecl(FuncDeclStmt),
    Return(ReturnStmt),
    While(WhileStmt),
    For(ForStmt),
    Match(MatchStmt),
}

impl AstNode for Stmt {
    fn position(&self) -> Position {
        match self {
            Stmt::Expression(stmt) => stmt.position,
            Stmt::VarDecl(stmt) => stmt.position,
            Stmt::TypeDecl(stmt) => stmt.position,
            Stmt::FuncDecl(stmt) => stmt.position,
            Stmt::Return(stmt) => stmt.position,
            Stmt::While(stmt) => stmt.position,
            Stmt::For(stmt) => stmt.position,
            Stmt::Match(stmt) => stmt.position,
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Expression(stmt) => write!(f, "{}", stmt),
            Stmt::VarDecl(stmt) => write!(f, "{}", stmt),
            Stmt::TypeDecl(stmt) => write!(f, "{}", stmt),
            Stmt::FuncDecl(stmt) => write!(f, "{}", stmt),
            Stmt::Return(stmt) => write!(f, "{}", stmt),
            Stmt::While(stmt) => write!(f, "{}", stmt),
            Stmt::For(stmt) => write!(f, "{}", stmt),
            Stmt::Match(stmt) => write!(f, "{}", stmt),
        }
    }
}

/// Expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Integer(IntegerExpr),
    Float(FloatExpr),
    Bool(BoolExpr),
    String(StringExpr),
    Identifier(IdentifierExpr),
    List(ListExpr),
    Infix(InfixExpr),
    Prefix(PrefixExpr),
    Postfix(PostfixExpr),
    Call(CallExpr),
    Index(IndexExpr),
    Conditional(ConditionalExpr),
    Block(BlockExpr),
}

impl AstNode for Expr {
    fn position(&self) -> Position {
        match self {
            Expr::Integer(expr) => expr.position,
            Expr::Float(expr) => expr.position,
            Expr::Bool(expr) => expr.position,
            Expr::String(expr) => expr.position,
            Expr::Identifier(expr) => expr.position,
            Expr::List(expr) => expr.position,
            Expr::Infix(expr) => expr.position,
            Expr::Prefix(expr) => expr.position,
            Expr::Postfix(expr) => expr.position,
            Expr::Call(expr) => expr.position,
            Expr::Index(expr) => expr.position,
            Expr::Conditional(expr) => expr.position,
            Expr::Block(expr) => expr.position,
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Integer(expr) => write!(f, "{}", expr),
            Expr::Float(expr) => write!(f, "{}", expr),
            Expr::Bool(expr) => write!(f, "{}", expr),
            Expr::String(expr) => write!(f, "{}", expr),
            Expr::Identifier(expr) => write!(f, "{}", expr),
            Expr::List(expr) => write!(f, "{}", expr),
            Expr::Infix(expr) => write!(f, "{}", expr),
            Expr::Prefix(expr) => write!(f, "{}", expr),
            Expr::Postfix(expr) => write!(f, "{}", expr),
            Expr::Call(expr) => write!(f, "{}", expr),
            Expr::Index(expr) => write!(f, "{}", expr),
            Expr::Conditional(expr) => write!(f, "{}", expr),
            Expr::Block(expr) => write!(f, "{}", expr),
        }
    }
}

/// Type annotation
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Identifier(IdentifierType),
    List(ListType),
    Tuple(TupleType),
}

impl Type {
    pub fn is_nullable(&self) -> bool {
        match self {
            Type::Identifier(type_) => type_.nullable,
            Type::List(type_) => type_.nullable,
            Type::Tuple(type_) => type_.nullable,
        }
    }
}

impl AstNode for Type {
    fn position(&self) -> Position {
        match self {
            Type::Identifier(type_) => type_.position,
            Type::List(type_) => type_.position,
            Type::Tuple(type_) => type_.position,
        }
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Identifier(type_) => write!(f, "{}", type_),
            Type::List(type_) => write!(f, "{}", type_),
            Type::Tuple(type_) => write!(f, "{}", type_),
        }
    }
}

/// Writes `text` with every line indented one level.
pub(crate) fn write_indented(f: &mut std::fmt::Formatter<'_>, text: &str) -> std::fmt::Result {
    for line in text.lines() {
        writeln!(f, "    {}", line)?;
    }
    Ok(())
}

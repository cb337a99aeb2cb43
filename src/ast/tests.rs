use crate::{
    lexer::tokens::Operator,
    Position,
};

use super::{
    ast::{AstNode, Expr, Stmt, Type},
    expressions::{
        BlockExpr, ConditionBranch, ConditionalExpr, FloatExpr, IdentifierExpr, InfixExpr,
        IntegerExpr, PrefixExpr, StringExpr,
    },
    statements::{ExpressionStmt, ReturnStmt, VarDeclStmt},
    types::{IdentifierType, ListType, TupleType},
};

fn at(column: u32) -> Position {
    Position::new(1, column)
}

fn identifier(value: &str) -> Expr {
    Expr::Identifier(IdentifierExpr {
        value: String::from(value),
        position: at(1),
    })
}

fn string(value: &str) -> String {
    StringExpr {
        value: String::from(value),
        position: at(1),
    }
    .to_string()
}

fn float(value: f64) -> String {
    FloatExpr {
        value,
        position: at(1),
    }
    .to_string()
}

#[test]
fn test_float_display_keeps_fraction() {
    assert_eq!(float(1.0), "1.0");
    assert_eq!(float(2.5), "2.5");
    assert_eq!(float(-0.75), "-0.75");
    assert_eq!(float(1e20), "100000000000000000000.0");
}

#[test]
fn test_string_display_picks_unused_quote() {
    assert_eq!(string("plain"), "\"plain\"");
    assert_eq!(string("say \"hi\""), "'say \"hi\"'");
    assert_eq!(string("it's \"x\""), "`it's \"x\"`");
}

#[test]
fn test_operator_display() {
    let infix = Expr::Infix(InfixExpr {
        left: Box::new(identifier("a")),
        operator: Operator::Add,
        right: Box::new(Expr::Integer(IntegerExpr {
            value: -1,
            position: at(5),
        })),
        position: at(1),
    });
    assert_eq!(infix.to_string(), "(a + -1)");

    let member = Expr::Infix(InfixExpr {
        left: Box::new(identifier("a")),
        operator: Operator::SafeDot,
        right: Box::new(identifier("b")),
        position: at(1),
    });
    assert_eq!(member.to_display_string(), "(a?.b)");

    let prefix = Expr::Prefix(PrefixExpr {
        operator: Operator::Sub,
        operand: Box::new(Expr::Integer(IntegerExpr {
            value: 1,
            position: at(2),
        })),
        position: at(1),
    });
    assert_eq!(prefix.to_string(), "(- 1)");
}

#[test]
fn test_type_display() {
    let int = Type::Identifier(IdentifierType {
        name: String::from("Int"),
        nullable: false,
        position: at(1),
    });
    let list = Type::List(ListType {
        element: Box::new(int.clone()),
        nullable: true,
        position: at(1),
    });
    let tuple = Type::Tuple(TupleType {
        elements: vec![int, list.clone()],
        nullable: false,
        position: at(1),
    });

    assert_eq!(list.to_string(), "[Int]?");
    assert!(list.is_nullable());
    assert_eq!(tuple.to_string(), "(Int, [Int]?)");
    assert!(!tuple.is_nullable());
}

#[test]
fn test_block_display_indents_nested_lines() {
    let inner = BlockExpr {
        body: vec![Stmt::Return(ReturnStmt {
            value: Some(identifier("x")),
            position: at(5),
        })],
        position: at(3),
    };
    let outer = BlockExpr {
        body: vec![Stmt::Expression(ExpressionStmt {
            expression: Expr::Block(inner),
            position: at(3),
        })],
        position: at(1),
    };

    assert_eq!(outer.to_string(), "{\n    {\n        return x\n    }\n}");
    assert_eq!(
        BlockExpr {
            body: vec![],
            position: at(1)
        }
        .to_string(),
        "{}"
    );
}

#[test]
fn test_declaration_with_conditional_display() {
    let conditional = Expr::Conditional(ConditionalExpr {
        branches: vec![ConditionBranch {
            condition: identifier("x"),
            body: BlockExpr {
                body: vec![],
                position: at(8),
            },
            position: at(1),
        }],
        else_body: None,
        position: at(1),
    });

    let declaration = Stmt::VarDecl(VarDeclStmt {
        identifier: IdentifierExpr {
            value: String::from("a"),
            position: at(5),
        },
        is_constant: false,
        assigned_value: Some(conditional.clone()),
        explicit_type: None,
        position: at(1),
    });
    assert_eq!(declaration.to_string(), "var a = if (x) {}");
    assert_eq!(declaration.position(), at(1));

    let plain = Stmt::Return(ReturnStmt {
        value: Some(identifier("x")),
        position: at(1),
    });
    assert_eq!(plain.to_string(), "return x");
    assert_eq!(conditional.position(), at(1));
}

//! Unit tests for the C++ lowering
//!
//! Trees are built by hand; each test pins the exact generated text.


use crate::Transpiler;
use kithare_ast::*;

pub(crate) fn span() -> Span {
    Span::new(0, 0)
}

pub(crate) fn expr(kind: ExpressionKind) -> Expression {
    Expression::new(kind, span())
}

/// Dotted identifier expression, e.g. `ident("std.print")`
pub(crate) fn ident(name: &str) -> Expression {
    expr(ExpressionKind::Identifier(Identifier::new(name.split('.'))))
}

pub(crate) fn int(value: i64) -> Expression {
    expr(ExpressionKind::Constant(ConstValue::Integer(value)))
}

pub(crate) fn binary(operator: Operator, left: Expression, right: Expression) -> Expression {
    expr(ExpressionKind::Binary(BinaryOperation {
        operator,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub(crate) fn call(callee: Expression, arguments: Vec<Option<Expression>>) -> Expression {
    expr(ExpressionKind::Call(Call {
        expression: Box::new(callee),
        arguments,
    }))
}

pub(crate) fn type_named(name: &str) -> TypeAnnotation {
    TypeAnnotation::new(Identifier::new(name.split('.')))
}

pub(crate) fn typed(name: &str, type_name: &str) -> Declaration {
    Declaration::new(name, span()).with_type(type_named(type_name))
}

pub(crate) fn body(kind: BodyKind) -> Body {
    Body::new(kind, span())
}

pub(crate) fn lower(expression: &Expression) -> String {
    Transpiler::new()
        .transpile_expression(expression)
        .expect("expression lowers")
}

pub(crate) fn lower_body(node: &Body) -> String {
    Transpiler::new().transpile_body(node).expect("body lowers")
}

//! Unit tests for the Kithare syntax tree
//!
//! Trees are built by hand here; the parser lives outside this crate.

pub mod test_repr_bodies;
pub mod test_repr_types;

use crate::ast::*;

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

pub(crate) fn type_named(name: &str) -> TypeAnnotation {
    TypeAnnotation::new(Identifier::new(name.split('.')))
}

pub(crate) fn body(kind: BodyKind) -> Body {
    Body::new(kind, span())
}

// Structural validation of parsed trees
// The parser is expected to hand over well-formed trees; this is the fail-fast check

use crate::ast::*;
use crate::error::{AstError, AstResult};

/// Check the structural invariants of a node and everything below it
pub trait Validate {
    fn validate(&self) -> AstResult<()>;
}

fn validate_all<'a, T: Validate + 'a>(
    nodes: impl IntoIterator<Item = &'a Option<T>>,
) -> AstResult<()> {
    nodes.into_iter().flatten().try_for_each(|node| node.validate())
}

impl<T: Validate> Validate for Box<T> {
    fn validate(&self) -> AstResult<()> {
        (**self).validate()
    }
}

impl Validate for Module {
    fn validate(&self) -> AstResult<()> {
        validate_all(&self.variables)?;
        validate_all(&self.enums)?;
        validate_all(&self.structs)?;
        validate_all(&self.functions)?;
        validate_all(&self.classes)
    }
}

impl Validate for UserType {
    fn validate(&self) -> AstResult<()> {
        if !self.is_class() && self.methods.iter().any(Option::is_some) {
            return Err(AstError::StructMethods {
                name: self.identifiers.join("."),
                span: self.span.into(),
            });
        }

        validate_all(&self.members)?;
        validate_all(&self.methods)
    }
}

impl Validate for EnumType {
    fn validate(&self) -> AstResult<()> {
        if self.members.len() != self.values.len() {
            return Err(AstError::EnumArity {
                name: self.identifiers.join("."),
                members: self.members.len(),
                values: self.values.len(),
                span: self.span.into(),
            });
        }
        Ok(())
    }
}

impl Validate for Body {
    fn validate(&self) -> AstResult<()> {
        match &self.kind {
            BodyKind::Expression(expression) => expression.validate(),
            BodyKind::If(if_body) => {
                for clause in &if_body.clauses {
                    clause.condition.validate()?;
                    validate_all(&clause.body)?;
                }
                validate_all(&if_body.else_body)
            }
            BodyKind::While(while_body) => {
                while_body.condition.validate()?;
                validate_all(&while_body.body)
            }
            BodyKind::DoWhile(do_while) => {
                validate_all(&do_while.body)?;
                do_while.condition.validate()
            }
            BodyKind::For(for_body) => {
                validate_all([
                    &for_body.initializer,
                    &for_body.condition,
                    &for_body.step,
                ])?;
                validate_all(&for_body.body)
            }
            BodyKind::ForEach(for_each) => {
                if for_each.targets.iter().all(Option::is_none) {
                    return Err(AstError::EmptyForEachTargets {
                        span: self.span.into(),
                    });
                }
                validate_all(&for_each.targets)?;
                for_each.iterator.validate()?;
                validate_all(&for_each.body)
            }
            BodyKind::Statement(Statement::Return(expression)) => {
                validate_all([expression])
            }
            BodyKind::Statement(_) => Ok(()),
        }
    }
}

impl Validate for Declaration {
    fn validate(&self) -> AstResult<()> {
        validate_all([&self.initializer])
    }
}

impl Validate for Function {
    fn validate(&self) -> AstResult<()> {
        validate_all(&self.arguments)?;
        validate_all(&self.body)
    }
}

impl Validate for Expression {
    fn validate(&self) -> AstResult<()> {
        match &self.kind {
            ExpressionKind::Identifier(_) | ExpressionKind::Constant(_) => Ok(()),
            ExpressionKind::Unary(unary) => unary.operand.validate(),
            ExpressionKind::Binary(binary) => {
                binary.left.validate()?;
                binary.right.validate()
            }
            ExpressionKind::Ternary(ternary) => {
                ternary.condition.validate()?;
                ternary.value.validate()?;
                ternary.otherwise.validate()
            }
            ExpressionKind::Comparison(comparison) => {
                // Every link of the chain needs both operands
                let values = comparison.values.iter().flatten().count();
                if values != comparison.operators.len() + 1 {
                    return Err(AstError::ComparisonArity {
                        operators: comparison.operators.len(),
                        values,
                        span: self.span.into(),
                    });
                }
                validate_all(&comparison.values)
            }
            ExpressionKind::Subscript(subscript) => {
                subscript.expression.validate()?;
                validate_all(&subscript.arguments)
            }
            ExpressionKind::Call(call) => {
                call.expression.validate()?;
                validate_all(&call.arguments)
            }
            ExpressionKind::Declaration(declaration) => declaration.validate(),
            ExpressionKind::Function(function) => function.validate(),
            ExpressionKind::Scope(scope) => scope.expression.validate(),
            ExpressionKind::Tuple(tuple) => validate_all(&tuple.elements),
            ExpressionKind::List(list) => validate_all(&list.elements),
            ExpressionKind::Dict(dict) => {
                if dict.keys.len() != dict.items.len() {
                    return Err(AstError::DictArity {
                        keys: dict.keys.len(),
                        items: dict.items.len(),
                        span: self.span.into(),
                    });
                }
                validate_all(&dict.keys)?;
                validate_all(&dict.items)
            }
        }
    }
}

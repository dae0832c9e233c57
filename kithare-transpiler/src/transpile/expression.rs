//! Operators, calls, scoping and constants

use super::Transpiler;
use crate::error::{TranspileError, TranspileResult};
use crate::join::join_present;
use kithare_ast::quote::{quote_buffer, quote_char, quote_string};
use kithare_ast::{
    AstError, Comparison, ConstValue, Expression, ExpressionKind, Operator, Span, Validate,
};

impl Transpiler {
    pub fn transpile_expression(&self, expression: &Expression) -> TranspileResult<String> {
        expression.validate()?;
        self.lower_expression(expression)
    }

    pub(crate) fn lower_expression(&self, expression: &Expression) -> TranspileResult<String> {
        let span = expression.span;
        match &expression.kind {
            ExpressionKind::Identifier(identifier) => Ok(self.lower_identifier(identifier)),
            ExpressionKind::Unary(unary) => Ok(format!(
                "({}{})",
                Self::operator(unary.operator, span)?,
                self.lower_expression(&unary.operand)?
            )),
            ExpressionKind::Binary(binary) => Ok(format!(
                "({} {} {})",
                self.lower_expression(&binary.left)?,
                Self::operator(binary.operator, span)?,
                self.lower_expression(&binary.right)?
            )),
            ExpressionKind::Ternary(ternary) => Ok(format!(
                "({} ? {} : {})",
                self.lower_expression(&ternary.condition)?,
                self.lower_expression(&ternary.value)?,
                self.lower_expression(&ternary.otherwise)?
            )),
            ExpressionKind::Comparison(comparison) => self.lower_comparison(comparison, span),
            ExpressionKind::Subscript(subscript) => Ok(format!(
                "{}[{}]",
                self.lower_expression(&subscript.expression)?,
                self.lower_expression_list(&subscript.arguments)?
            )),
            ExpressionKind::Call(call) => {
                let callee = self.lower_expression(&call.expression)?;
                // Named callees are user functions and carry the symbol prefix
                let callee = match call.expression.kind {
                    ExpressionKind::Identifier(_) => self.symbol(&callee),
                    _ => callee,
                };
                Ok(format!(
                    "{}({})",
                    callee,
                    self.lower_expression_list(&call.arguments)?
                ))
            }
            ExpressionKind::Declaration(declaration) => self.lower_declaration(declaration),
            ExpressionKind::Function(function) => self.lower_function_expression(function),
            ExpressionKind::Scope(scope) => {
                let mut out = format!("({})", self.lower_expression(&scope.expression)?);
                for identifier in &scope.identifiers {
                    out.push('.');
                    out.push_str(identifier);
                }
                Ok(out)
            }
            ExpressionKind::Constant(constant) => Self::lower_constant(constant, span),
            ExpressionKind::Tuple(_) | ExpressionKind::List(_) | ExpressionKind::Dict(_) => {
                Err(TranspileError::unsupported(
                    expression.kind.name(),
                    "the runtime has no collection literals",
                    span,
                ))
            }
        }
    }

    fn lower_expression_list(&self, expressions: &[Option<Expression>]) -> TranspileResult<String> {
        join_present(expressions, ", ", |expression| {
            self.lower_expression(expression)
        })
    }

    fn operator(operator: Operator, span: Span) -> TranspileResult<&'static str> {
        operator.target_symbol().ok_or_else(|| {
            TranspileError::unsupported(
                format!("operator {}", operator),
                "C++ has no matching operator",
                span,
            )
        })
    }

    /// `a < b` stays inline; longer chains bind each middle operand once and
    /// stop at the first false link
    fn lower_comparison(&self, comparison: &Comparison, span: Span) -> TranspileResult<String> {
        let values = comparison
            .values
            .iter()
            .flatten()
            .map(|value| self.lower_expression(value))
            .collect::<TranspileResult<Vec<_>>>()?;
        if values.len() != comparison.operators.len() + 1 {
            return Err(AstError::ComparisonArity {
                operators: comparison.operators.len(),
                values: values.len(),
                span: span.into(),
            }
            .into());
        }

        let operators = comparison
            .operators
            .iter()
            .map(|operator| Self::operator(*operator, span))
            .collect::<TranspileResult<Vec<_>>>()?;

        match operators.as_slice() {
            [] => Ok(format!("({})", values[0])),
            [operator] => Ok(format!("({} {} {})", values[0], operator, values[1])),
            _ => {
                let last = operators.len() - 1;
                let mut out = String::from("[&]() -> bool { ");
                let mut left = values[0].clone();
                for (index, operator) in operators[..last].iter().enumerate() {
                    let bound = self.symbol(&format!("cmp_{}", index + 1));
                    out.push_str(&format!("auto&& {} = {}; ", bound, values[index + 1]));
                    out.push_str(&format!(
                        "if (!({} {} {})) return false; ",
                        left, operator, bound
                    ));
                    left = bound;
                }
                out.push_str(&format!(
                    "return ({} {} {}); }}()",
                    left,
                    operators[last],
                    values[last + 1]
                ));
                Ok(out)
            }
        }
    }

    fn lower_constant(constant: &ConstValue, span: Span) -> TranspileResult<String> {
        match constant {
            ConstValue::Character(value) => Ok(format!("U{}", quote_char(*value))),
            ConstValue::UnsignedInteger(value) => Ok(format!("{}ULL", value)),
            // The magnitude of i64::MIN has no signed literal
            ConstValue::Integer(i64::MIN) => Ok(format!("({}LL - 1)", i64::MIN + 1)),
            ConstValue::Integer(value) => Ok(value.to_string()),
            ConstValue::Floating(value) => Self::lower_float(*value, span),
            ConstValue::Imaginary(value) => Ok(format!(
                "std::complex<double>(0, {})",
                Self::lower_float(*value, span)?
            )),
            ConstValue::Complex { real, imaginary } => Ok(format!(
                "std::complex<double>({}, {})",
                Self::lower_float(*real, span)?,
                Self::lower_float(*imaginary, span)?
            )),
            ConstValue::Buffer(bytes) => Ok(quote_buffer(bytes)),
            ConstValue::String(text) => Ok(format!("U{}", quote_string(text))),
        }
    }

    fn lower_float(value: f64, span: Span) -> TranspileResult<String> {
        if !value.is_finite() {
            return Err(TranspileError::unsupported(
                "non-finite floating constant",
                "C++ has no literal for NaN or infinity",
                span,
            ));
        }
        Ok(format!("{:?}", value))
    }
}

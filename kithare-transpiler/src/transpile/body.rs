//! Control flow and statements

use super::Transpiler;
use crate::error::{TranspileError, TranspileResult};
use crate::join::{concat_present, join_present};
use kithare_ast::{Body, BodyKind, Expression, ForEach, If, Span, Statement, Validate};

impl Transpiler {
    pub fn transpile_body(&self, body: &Body) -> TranspileResult<String> {
        body.validate()?;
        self.lower_body(body)
    }

    pub(crate) fn lower_block(&self, bodies: &[Option<Body>]) -> TranspileResult<String> {
        concat_present(bodies, |body| self.lower_body(body))
    }

    pub(crate) fn lower_body(&self, body: &Body) -> TranspileResult<String> {
        match &body.kind {
            BodyKind::Expression(expression) => {
                Ok(format!("{};\n", self.lower_expression(expression)?))
            }
            BodyKind::If(if_body) => self.lower_if(if_body),
            BodyKind::While(while_body) => Ok(format!(
                "while ({}) {{\n{}}}\n",
                self.lower_expression(&while_body.condition)?,
                self.lower_block(&while_body.body)?
            )),
            BodyKind::DoWhile(do_while) => Ok(format!(
                "do {{\n{}}} while ({});\n",
                self.lower_block(&do_while.body)?,
                self.lower_expression(&do_while.condition)?
            )),
            BodyKind::For(for_body) => Ok(format!(
                "for ({}; {}; {}) {{\n{}}}\n",
                self.lower_optional(&for_body.initializer)?,
                self.lower_optional(&for_body.condition)?,
                self.lower_optional(&for_body.step)?,
                self.lower_block(&for_body.body)?
            )),
            BodyKind::ForEach(for_each) => self.lower_for_each(for_each),
            BodyKind::Statement(statement) => self.lower_statement(statement, body.span),
        }
    }

    fn lower_optional(&self, expression: &Option<Box<Expression>>) -> TranspileResult<String> {
        match expression {
            Some(expression) => self.lower_expression(expression),
            None => Ok(String::new()),
        }
    }

    /// Every chain ends in an always-true `else if (1)` carrying the else body
    fn lower_if(&self, if_body: &If) -> TranspileResult<String> {
        let mut out = String::from("if (");
        for clause in &if_body.clauses {
            out.push_str(&self.lower_expression(&clause.condition)?);
            out.push_str(") {\n");
            out.push_str(&self.lower_block(&clause.body)?);
            out.push_str("} \nelse if (");
        }
        out.push_str("1) {\n");
        out.push_str(&self.lower_block(&if_body.else_body)?);
        out.push_str("}\n");
        Ok(out)
    }

    /// Targets are declared in an enclosing block and filled by the iterator protocol
    fn lower_for_each(&self, for_each: &ForEach) -> TranspileResult<String> {
        let mut out = String::from("{\n");
        for target in for_each.targets.iter().flatten() {
            out.push_str(&self.lower_declaration(target)?);
            out.push_str(";\n");
        }

        let targets = join_present(&for_each.targets, ", ", |target| Ok(target.name.clone()))?;
        out.push_str(&format!(
            "while ({}.{}({})) {{\n",
            self.lower_expression(&for_each.iterator)?,
            self.config.iterate_method,
            targets
        ));
        out.push_str(&self.lower_block(&for_each.body)?);
        out.push_str("}}\n");
        Ok(out)
    }

    fn lower_statement(&self, statement: &Statement, span: Span) -> TranspileResult<String> {
        match statement {
            Statement::Continue { loop_count } => {
                Self::check_loop_count("continue", *loop_count, span)?;
                Ok("continue;\n".to_string())
            }
            Statement::Break { loop_count } => {
                Self::check_loop_count("break", *loop_count, span)?;
                Ok("break;\n".to_string())
            }
            Statement::Return(Some(value)) => {
                Ok(format!("return {};\n", self.lower_expression(value)?))
            }
            Statement::Return(None) => Ok("return;\n".to_string()),
        }
    }

    fn check_loop_count(keyword: &str, loop_count: usize, span: Span) -> TranspileResult<()> {
        if loop_count > 1 {
            return Err(TranspileError::unsupported(
                format!("{} {}", keyword, loop_count),
                "C++ can only leave the innermost loop",
                span,
            ));
        }
        Ok(())
    }
}

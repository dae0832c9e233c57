//! Function definitions and closures

use super::Transpiler;
use crate::error::{TranspileError, TranspileResult};
use crate::join::join_present;
use kithare_ast::{Function, Validate};

impl Transpiler {
    /// Lower a function as a top-level or member definition
    pub fn transpile_function(&self, function: &Function) -> TranspileResult<String> {
        function.validate()?;
        self.lower_function_definition(function, 0)
    }

    /// `lambda_index` names an anonymous function after its slot in the enclosing list
    pub(crate) fn lower_function_definition(
        &self,
        function: &Function,
        lambda_index: usize,
    ) -> TranspileResult<String> {
        let symbol = match function.identifiers.last() {
            Some(name) => self.symbol(name),
            None => self.symbol(&format!("lambda_{}", lambda_index)),
        };
        self.lower_definition_as(function, &symbol)
    }

    /// Methods named after the iterator protocol keep the bare name foreach loops call
    pub(crate) fn lower_method(&self, method: &Function, index: usize) -> TranspileResult<String> {
        match method.identifiers.last() {
            Some(name) if *name == self.config.iterate_method => {
                self.lower_definition_as(method, name)
            }
            _ => self.lower_function_definition(method, index),
        }
    }

    fn lower_definition_as(&self, function: &Function, symbol: &str) -> TranspileResult<String> {
        let mut out = self.template_header(&function.generic_params);
        if function.is_static {
            out.push_str("static ");
        }

        out.push_str(&self.lower_return_type(function)?);
        out.push(' ');
        out.push_str(symbol);

        out.push('(');
        out.push_str(&self.lower_arguments(function)?);
        out.push_str(") {\n");
        out.push_str(&self.lower_block(&function.body)?);
        out.push_str("}\n");
        Ok(out)
    }

    /// Functions in expression position capture their surroundings by reference
    pub(crate) fn lower_function_expression(&self, function: &Function) -> TranspileResult<String> {
        if !function.generic_params.is_empty() {
            return Err(TranspileError::unsupported(
                "generic lambda",
                "C++ closures cannot declare template parameters",
                function.span,
            ));
        }

        let closure = format!(
            "[&]({}) -> {} {{\n{}}}",
            self.lower_arguments(function)?,
            self.lower_return_type(function)?,
            self.lower_block(&function.body)?
        );

        match function.identifiers.last() {
            Some(name) => {
                let storage = if function.is_static { "static " } else { "" };
                Ok(format!("{}auto {} = {}", storage, self.symbol(name), closure))
            }
            None => Ok(closure),
        }
    }

    fn lower_arguments(&self, function: &Function) -> TranspileResult<String> {
        join_present(&function.arguments, ", ", |argument| {
            self.lower_declaration(argument)
        })
    }

    fn lower_return_type(&self, function: &Function) -> TranspileResult<String> {
        match &function.return_type {
            None => Ok(self.config.void_type.clone()),
            Some(return_type) if !return_type.dimensions().is_empty() => {
                Err(TranspileError::unsupported(
                    "array return type",
                    "C++ functions cannot return arrays",
                    function.span,
                ))
            }
            Some(return_type) => Ok(self.lower_type(return_type)),
        }
    }
}

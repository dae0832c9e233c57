//! Compilation units and imports

use super::Transpiler;
use crate::error::TranspileResult;
use crate::runtime::header_path;
use kithare_ast::{Import, Module, Validate};

impl Transpiler {
    /// Lower a whole compilation unit, ending with the C++ entry point
    pub fn transpile_module(&self, module: &Module) -> TranspileResult<String> {
        module.validate()?;
        self.lower_module(module)
    }

    pub fn transpile_import(&self, import: &Import) -> String {
        self.lower_import(import)
    }

    pub(crate) fn lower_module(&self, module: &Module) -> TranspileResult<String> {
        let mut out = String::new();

        for import in module.imports.iter().flatten() {
            out.push_str(&self.lower_import(import));
        }
        for variable in module.variables.iter().flatten() {
            out.push_str(&self.lower_declaration(variable)?);
            out.push_str(";\n");
        }
        for enum_type in module.enums.iter().flatten() {
            out.push_str(&self.lower_enum(enum_type));
        }
        for struct_type in module.structs.iter().flatten() {
            out.push_str(&self.lower_user_type(struct_type)?);
        }
        // Anonymous functions are named after their slot
        for (index, function) in module.functions.iter().enumerate() {
            if let Some(function) = function {
                out.push_str(&self.lower_function_definition(function, index)?);
            }
        }
        for class in module.classes.iter().flatten() {
            out.push_str(&self.lower_user_type(class)?);
        }

        out.push_str(&self.entry_point());
        Ok(out)
    }

    fn entry_point(&self) -> String {
        format!(
            "int main(const int argc, char* argv[]) {{ return {}(); }}\n",
            self.symbol(&self.config.entry_symbol)
        )
    }

    pub(crate) fn lower_import(&self, import: &Import) -> String {
        let mut out = format!(
            "#include \"{}\"\n",
            header_path(import.path.as_slice(), &self.config.header_extension)
        );

        if !import.is_include {
            if let Some(head) = import.path.first() {
                out.push_str(&format!(
                    "auto {} = {}();\n",
                    self.symbol(&import.identifier),
                    self.symbol(&format!("{}{}", head, self.config.module_suffix))
                ));
            }
        }

        out
    }
}

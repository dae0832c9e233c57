//! User types, type annotations and declarations

use super::Transpiler;
use crate::error::{TranspileError, TranspileResult};
use kithare_ast::{
    Declaration, EnumType, Identifier, TypeAnnotation, UserType, Validate, Visibility,
};

fn access_label(visibility: Visibility) -> &'static str {
    match visibility {
        Visibility::Public => "public: ",
        Visibility::Private => "private: ",
    }
}

impl Transpiler {
    pub fn transpile_user_type(&self, user_type: &UserType) -> TranspileResult<String> {
        user_type.validate()?;
        self.lower_user_type(user_type)
    }

    pub fn transpile_enum(&self, enum_type: &EnumType) -> TranspileResult<String> {
        enum_type.validate()?;
        Ok(self.lower_enum(enum_type))
    }

    pub fn transpile_declaration(&self, declaration: &Declaration) -> TranspileResult<String> {
        declaration.validate()?;
        self.lower_declaration(declaration)
    }

    pub fn transpile_type(&self, annotation: &TypeAnnotation) -> String {
        self.lower_type(annotation)
    }

    pub fn transpile_identifier(&self, identifier: &Identifier) -> String {
        self.lower_identifier(identifier)
    }

    pub(crate) fn lower_user_type(&self, user_type: &UserType) -> TranspileResult<String> {
        let mut out = self.template_header(&user_type.generic_params);
        out.push_str(user_type.kind.keyword());
        out.push(' ');
        out.push_str(&self.type_symbol(&user_type.identifiers));

        let bases: Vec<String> = user_type
            .bases
            .iter()
            .flatten()
            .map(|base| format!("public {}", self.symbol(&self.lower_identifier(base))))
            .collect();
        if !bases.is_empty() {
            out.push_str(" : ");
            out.push_str(&bases.join(", "));
        }
        out.push_str(" {");

        for member in user_type.members.iter().flatten() {
            if member.var_type.is_none() {
                return Err(TranspileError::unsupported(
                    format!("untyped member {}", member.name),
                    "C++ data members cannot use a deduced type",
                    member.span,
                ));
            }
            out.push('\n');
            out.push_str(access_label(member.visibility));
            out.push_str(&self.lower_declaration(member)?);
            out.push(';');
        }
        for (index, method) in user_type.methods.iter().enumerate() {
            if let Some(method) = method {
                out.push('\n');
                out.push_str(access_label(method.visibility));
                out.push_str(&self.lower_method(method, index)?);
            }
        }

        out.push_str("};\n");
        Ok(out)
    }

    pub(crate) fn lower_enum(&self, enum_type: &EnumType) -> String {
        let mut out = format!("enum {} {{", self.type_symbol(&enum_type.identifiers));
        for (member, value) in enum_type.entries() {
            out.push_str(&format!("\n{} = {},", member, value));
        }
        out.push_str("};\n");
        out
    }

    /// `template <typename kh_T, ...>` line, empty without parameters
    pub(crate) fn template_header(&self, params: &[String]) -> String {
        if params.is_empty() {
            return String::new();
        }
        let params: Vec<String> = params
            .iter()
            .map(|param| format!("typename {}", self.symbol(param)))
            .collect();
        format!("template <{}>\n", params.join(", "))
    }

    /// Types are named after the last segment of their dotted name
    fn type_symbol(&self, identifiers: &[String]) -> String {
        self.symbol(identifiers.last().map(String::as_str).unwrap_or_default())
    }

    pub(crate) fn lower_declaration(&self, declaration: &Declaration) -> TranspileResult<String> {
        let mut out = String::new();
        if declaration.is_static {
            out.push_str("static ");
        }

        // `auto` needs an initializer to deduce from
        match (&declaration.var_type, &declaration.initializer) {
            (Some(var_type), _) => out.push_str(&self.lower_type(var_type)),
            (None, Some(_)) => out.push_str("auto"),
            (None, None) => {
                return Err(TranspileError::unsupported(
                    format!("untyped declaration of {}", declaration.name),
                    "C++ cannot deduce a type without an initializer; annotate the type",
                    declaration.span,
                ))
            }
        }
        out.push(' ');
        out.push_str(&declaration.name);

        if let Some(var_type) = &declaration.var_type {
            for dimension in var_type.dimensions() {
                out.push_str(&format!("[{}]", dimension));
            }
        }

        if let Some(initializer) = &declaration.initializer {
            out.push_str(" = ");
            out.push_str(&self.lower_expression(initializer)?);
        }

        Ok(out)
    }

    /// Prefixed type name with one `*` per reference level; dimensions stay with the declarator
    pub(crate) fn lower_type(&self, annotation: &TypeAnnotation) -> String {
        let identifier = &annotation.identifier;
        let mut out = if self.is_spelled_function_type(identifier) {
            self.lower_identifier(identifier)
        } else {
            self.symbol(&self.lower_identifier(identifier))
        };
        out.push_str(&"*".repeat(annotation.refs));
        out
    }

    /// Type used as a generic argument, where array dimensions are part of the type
    fn lower_generic_argument(&self, annotation: &TypeAnnotation) -> String {
        let mut out = self.lower_type(annotation);
        for dimension in annotation.dimensions() {
            out.push_str(&format!("[{}]", dimension));
        }
        out
    }

    pub(crate) fn lower_identifier(&self, identifier: &Identifier) -> String {
        if self.is_spelled_function_type(identifier) {
            return self.lower_function_type(identifier);
        }

        let mut out = identifier.identifiers.join(".");
        let generics = self.lower_generics(identifier);
        if !generics.is_empty() {
            out.push_str(&format!("<{}>", generics.join(", ")));
        }
        out
    }

    fn lower_generics(&self, identifier: &Identifier) -> Vec<String> {
        identifier
            .generics
            .iter()
            .flatten()
            .map(|generic| self.lower_generic_argument(generic))
            .collect()
    }

    fn is_spelled_function_type(&self, identifier: &Identifier) -> bool {
        identifier.is_function_type() && identifier.generics.iter().any(Option::is_some)
    }

    /// `func!(R(A, B))` is stored as generics `[R, A, B]`
    fn lower_function_type(&self, identifier: &Identifier) -> String {
        let generics = self.lower_generics(identifier);
        match generics.split_first() {
            Some((return_type, arguments)) => {
                format!("std::function<{}({})>", return_type, arguments.join(", "))
            }
            None => format!("std::function<{}()>", self.config.void_type),
        }
    }
}

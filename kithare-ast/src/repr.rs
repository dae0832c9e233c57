// Kithare AST debug representation
// Deterministic, tab-indented dump of any node; the test oracle for tree shape

use crate::ast::*;
use crate::quote::{quote_buffer, quote_string};
use std::fmt;
use std::sync::Arc;

/// Placeholder for constants the dump has no label for
///
/// `ConstValue` is closed, so the current tree model never produces it.
pub const UNKNOWN_CONSTANT: &str = "[unknown constant]";

/// Render a node as an indented, human readable block
///
/// `indent` is the nesting level of the node itself. Child blocks are placed
/// one tab deeper per label level that introduces them.
pub trait Repr {
    fn repr(&self, indent: usize) -> String;
}

impl<T: Repr + ?Sized> Repr for Box<T> {
    fn repr(&self, indent: usize) -> String {
        (**self).repr(indent)
    }
}

impl<T: Repr + ?Sized> Repr for Arc<T> {
    fn repr(&self, indent: usize) -> String {
        (**self).repr(indent)
    }
}

fn tabs(count: usize) -> String {
    "\t".repeat(count)
}

fn push_label(out: &mut String, label: &str, indent: usize, depth: usize) {
    out.push('\n');
    out.push_str(&tabs(indent + depth));
    out.push_str(label);
}

fn push_child<T: Repr + ?Sized>(out: &mut String, node: &T, indent: usize, depth: usize) {
    out.push('\n');
    out.push_str(&tabs(indent + depth));
    out.push_str(&node.repr(indent + depth));
}

/// Render every present entry on its own line, skipping absent slots
fn push_children<'a, T: Repr + 'a>(
    out: &mut String,
    nodes: impl IntoIterator<Item = &'a Option<T>>,
    indent: usize,
    depth: usize,
) {
    for node in nodes.into_iter().flatten() {
        push_child(out, node, indent, depth);
    }
}

fn push_body(out: &mut String, body: &[Option<Body>], indent: usize) {
    if !body.is_empty() {
        push_label(out, "body:", indent, 1);
        push_children(out, body, indent, 2);
    }
}

fn dotted(identifiers: &[String]) -> String {
    identifiers.join(".")
}

fn repr_float(value: f64) -> String {
    format!("{:?}", value)
}

impl Repr for Module {
    fn repr(&self, indent: usize) -> String {
        let mut out = String::from("ast:");
        push_children(&mut out, &self.imports, indent, 1);
        push_children(&mut out, &self.functions, indent, 1);
        push_children(&mut out, &self.structs, indent, 1);
        push_children(&mut out, &self.classes, indent, 1);
        push_children(&mut out, &self.enums, indent, 1);
        push_children(&mut out, &self.variables, indent, 1);
        out
    }
}

impl Repr for Import {
    fn repr(&self, indent: usize) -> String {
        let mut out = String::from(if self.is_include { "include:" } else { "import:" });
        let kind = if self.is_relative { "relative" } else { "absolute" };
        push_label(&mut out, &format!("type: {}", kind), indent, 1);
        push_label(&mut out, &format!("path: {}", dotted(&self.path)), indent, 1);

        if !self.is_include {
            push_label(&mut out, &format!("identifier: {}", self.identifier), indent, 1);
        }
        out
    }
}

impl Repr for UserType {
    fn repr(&self, indent: usize) -> String {
        let mut out = format!("{}:", self.kind.keyword());
        push_label(&mut out, &format!("name: {}", dotted(&self.identifiers)), indent, 1);

        if !self.bases.is_empty() {
            push_label(&mut out, "base(s):", indent, 1);
            push_children(&mut out, &self.bases, indent, 2);
        }

        if !self.generic_params.is_empty() {
            let generics = self.generic_params.join(", ");
            push_label(&mut out, &format!("generic argument(s): {}", generics), indent, 1);
        }

        push_label(&mut out, "member(s):", indent, 1);
        push_children(&mut out, &self.members, indent, 2);

        if !self.methods.is_empty() {
            push_label(&mut out, "method(s):", indent, 1);
            push_children(&mut out, &self.methods, indent, 2);
        }
        out
    }
}

impl Repr for EnumType {
    fn repr(&self, indent: usize) -> String {
        let mut out = String::from("enum:");
        push_label(&mut out, &format!("name: {}", dotted(&self.identifiers)), indent, 1);
        if let Some(base) = &self.base {
            push_label(&mut out, &format!("base: {}", base.repr(indent + 1)), indent, 1);
        }
        push_label(&mut out, "member(s):", indent, 1);
        for (member, value) in self.entries() {
            push_label(&mut out, &format!("{}: {}", member, value), indent, 2);
        }
        out
    }
}

impl Repr for Identifier {
    fn repr(&self, indent: usize) -> String {
        let mut out = dotted(&self.identifiers);
        if self.generics.is_empty() {
            return out;
        }

        let generics: Vec<String> = self
            .generics
            .iter()
            .flatten()
            .map(|generic| generic.repr(indent))
            .collect();

        out.push_str("!(");
        match generics.split_first() {
            Some((return_type, arguments)) if self.is_function_type() => {
                out.push_str(return_type);
                out.push('(');
                out.push_str(&arguments.join(", "));
                out.push_str("))");
            }
            _ => {
                out.push_str(&generics.join(", "));
                out.push(')');
            }
        }
        out
    }
}

impl Repr for TypeAnnotation {
    fn repr(&self, indent: usize) -> String {
        let mut out = "ref ".repeat(self.refs);
        out.push_str(&self.identifier.repr(indent));
        for dimension in self.dimensions() {
            out.push_str(&format!("[{}]", dimension));
        }
        out
    }
}

impl Repr for Body {
    fn repr(&self, indent: usize) -> String {
        match &self.kind {
            BodyKind::Expression(expression) => expression.repr(indent),
            BodyKind::If(if_body) => if_body.repr(indent),
            BodyKind::While(while_body) => while_body.repr(indent),
            BodyKind::DoWhile(do_while) => do_while.repr(indent),
            BodyKind::For(for_body) => for_body.repr(indent),
            BodyKind::ForEach(for_each) => for_each.repr(indent),
            BodyKind::Statement(statement) => statement.repr(indent),
        }
    }
}

impl Repr for If {
    fn repr(&self, indent: usize) -> String {
        let mut out = String::from("if:");

        for clause in &self.clauses {
            push_label(&mut out, "if clause:", indent, 1);
            push_label(&mut out, "condition:", indent, 2);
            push_child(&mut out, &clause.condition, indent, 3);

            if !clause.body.is_empty() {
                push_label(&mut out, "body:", indent, 2);
                push_children(&mut out, &clause.body, indent, 3);
            }
        }

        if !self.else_body.is_empty() {
            push_label(&mut out, "else body:", indent, 1);
            push_children(&mut out, &self.else_body, indent, 2);
        }
        out
    }
}

impl Repr for While {
    fn repr(&self, indent: usize) -> String {
        let mut out = String::from("while:");
        push_label(&mut out, "condition:", indent, 1);
        push_child(&mut out, &self.condition, indent, 2);
        push_body(&mut out, &self.body, indent);
        out
    }
}

impl Repr for DoWhile {
    fn repr(&self, indent: usize) -> String {
        let mut out = String::from("do while:");
        push_label(&mut out, "condition:", indent, 1);
        push_child(&mut out, &self.condition, indent, 2);
        push_body(&mut out, &self.body, indent);
        out
    }
}

impl Repr for For {
    fn repr(&self, indent: usize) -> String {
        let mut out = String::from("for:");
        let parts = [
            ("initializer:", &self.initializer),
            ("condition:", &self.condition),
            ("step:", &self.step),
        ];
        for (label, part) in parts {
            if let Some(part) = part {
                push_label(&mut out, label, indent, 1);
                push_child(&mut out, part, indent, 2);
            }
        }
        push_body(&mut out, &self.body, indent);
        out
    }
}

impl Repr for ForEach {
    fn repr(&self, indent: usize) -> String {
        let mut out = String::from("foreach:");
        push_label(&mut out, "target(s):", indent, 1);
        push_children(&mut out, &self.targets, indent, 2);
        push_label(&mut out, "iterator:", indent, 1);
        push_child(&mut out, &self.iterator, indent, 2);
        push_body(&mut out, &self.body, indent);
        out
    }
}

impl Repr for Statement {
    fn repr(&self, indent: usize) -> String {
        match self {
            Statement::Continue { loop_count } => format!("statement: continue {}", loop_count),
            Statement::Break { loop_count } => format!("statement: break {}", loop_count),
            Statement::Return(expression) => {
                let mut out = String::from("statement: return");
                if let Some(expression) = expression {
                    push_child(&mut out, expression, indent, 1);
                }
                out
            }
        }
    }
}

impl Repr for Expression {
    fn repr(&self, indent: usize) -> String {
        match &self.kind {
            ExpressionKind::Identifier(identifier) => identifier.repr(indent),
            ExpressionKind::Unary(unary) => {
                let mut out = String::from("unary expression:");
                push_label(&mut out, &format!("operator: {}", unary.operator), indent, 1);
                push_label(&mut out, "rvalue:", indent, 1);
                push_child(&mut out, &unary.operand, indent, 2);
                out
            }
            ExpressionKind::Binary(binary) => {
                let mut out = String::from("binary expression:");
                push_label(&mut out, &format!("operator: {}", binary.operator), indent, 1);
                push_label(&mut out, "lvalue:", indent, 1);
                push_child(&mut out, &binary.left, indent, 2);
                push_label(&mut out, "rvalue:", indent, 1);
                push_child(&mut out, &binary.right, indent, 2);
                out
            }
            ExpressionKind::Ternary(ternary) => {
                let mut out = String::from("ternary expression:");
                push_label(&mut out, "condition:", indent, 1);
                push_child(&mut out, &ternary.condition, indent, 2);
                push_label(&mut out, "value:", indent, 1);
                push_child(&mut out, &ternary.value, indent, 2);
                push_label(&mut out, "otherwise:", indent, 1);
                push_child(&mut out, &ternary.otherwise, indent, 2);
                out
            }
            ExpressionKind::Comparison(comparison) => {
                let operators: Vec<&str> = comparison
                    .operators
                    .iter()
                    .map(Operator::symbol)
                    .collect();

                let mut out = String::from("comparison expression:");
                push_label(
                    &mut out,
                    &format!("operation(s): {}", operators.join(",")),
                    indent,
                    1,
                );
                push_label(&mut out, "value(s):", indent, 1);
                push_children(&mut out, &comparison.values, indent, 2);
                out
            }
            ExpressionKind::Subscript(subscript) => {
                repr_callable("subscript:", &subscript.expression, &subscript.arguments, indent)
            }
            ExpressionKind::Call(call) => {
                repr_callable("call:", &call.expression, &call.arguments, indent)
            }
            ExpressionKind::Declaration(declaration) => declaration.repr(indent),
            ExpressionKind::Function(function) => function.repr(indent),
            ExpressionKind::Scope(scope) => {
                let mut out = format!("scoping ({}):", dotted(&scope.identifiers));
                push_label(&mut out, "expression:", indent, 1);
                push_child(&mut out, &scope.expression, indent, 2);
                out
            }
            ExpressionKind::Constant(constant) => constant.repr(indent),
            ExpressionKind::Tuple(tuple) => repr_elements("tuple:", &tuple.elements, indent),
            ExpressionKind::List(list) => repr_elements("list:", &list.elements, indent),
            ExpressionKind::Dict(dict) => {
                let mut out = String::from("dict:");
                if dict.keys.is_empty() {
                    out.push_str(" [no pairs]");
                    return out;
                }

                let pairs = dict.keys.len().max(dict.items.len());
                for index in 0..pairs {
                    push_label(&mut out, "pair:", indent, 1);
                    if let Some(Some(key)) = dict.keys.get(index) {
                        push_child(&mut out, key, indent, 2);
                    }
                    if let Some(Some(item)) = dict.items.get(index) {
                        push_child(&mut out, item, indent, 2);
                    }
                }
                out
            }
        }
    }
}

fn repr_callable(
    header: &str,
    expression: &Expression,
    arguments: &[Option<Expression>],
    indent: usize,
) -> String {
    let mut out = String::from(header);
    push_label(&mut out, "expression:", indent, 1);
    push_child(&mut out, expression, indent, 2);

    if !arguments.is_empty() {
        push_label(&mut out, "argument(s):", indent, 1);
        push_children(&mut out, arguments, indent, 2);
    }
    out
}

fn repr_elements(header: &str, elements: &[Option<Expression>], indent: usize) -> String {
    let mut out = String::from(header);
    if elements.is_empty() {
        out.push_str(" [no elements]");
    } else {
        push_children(&mut out, elements, indent, 1);
    }
    out
}

impl Repr for Declaration {
    fn repr(&self, indent: usize) -> String {
        let mut out = String::from("declare:");

        if let Some(var_type) = &self.var_type {
            let mut line = String::from("type: ");
            if self.is_static {
                line.push_str("static ");
            }
            if self.visibility == Visibility::Private {
                line.push_str("private ");
            }
            line.push_str(&var_type.repr(indent + 1));
            push_label(&mut out, &line, indent, 1);
        }

        push_label(&mut out, &format!("name: {}", self.name), indent, 1);

        if let Some(initializer) = &self.initializer {
            push_label(&mut out, "initializer expression:", indent, 1);
            push_child(&mut out, initializer, indent, 2);
        }
        out
    }
}

impl Repr for Function {
    fn repr(&self, indent: usize) -> String {
        let mut out = String::from("function:");
        push_label(&mut out, &format!("static: {}", self.is_static), indent, 1);
        push_label(&mut out, &format!("access: {}", self.visibility), indent, 1);

        if self.is_lambda() {
            push_label(&mut out, "name: (lambda)", indent, 1);
        } else {
            push_label(&mut out, &format!("name: {}", dotted(&self.identifiers)), indent, 1);

            if !self.generic_params.is_empty() {
                let generics = self.generic_params.join(", ");
                push_label(&mut out, &format!("generic argument(s): {}", generics), indent, 1);
            }
        }

        if let Some(return_type) = &self.return_type {
            let line = format!("return type: {}", return_type.repr(indent + 1));
            push_label(&mut out, &line, indent, 1);
        }

        push_label(&mut out, "argument(s):", indent, 1);
        if self.arguments.is_empty() {
            out.push_str(" [none]");
        }
        push_children(&mut out, &self.arguments, indent, 2);

        push_label(&mut out, "body:", indent, 1);
        push_children(&mut out, &self.body, indent, 2);
        out
    }
}

impl Repr for ConstValue {
    fn repr(&self, _indent: usize) -> String {
        match self {
            ConstValue::Character(c) => format!("character: {}", c),
            ConstValue::UnsignedInteger(value) => format!("unsigned integer: {}", value),
            ConstValue::Integer(value) => format!("integer: {}", value),
            ConstValue::Floating(value) => format!("floating: {}", repr_float(*value)),
            ConstValue::Imaginary(value) => format!("imaginary: {}i", repr_float(*value)),
            ConstValue::Complex { real, imaginary } => {
                let sign = if imaginary.is_sign_negative() { '-' } else { '+' };
                format!(
                    "complex: {}{}{}i",
                    repr_float(*real),
                    sign,
                    repr_float(imaginary.abs())
                )
            }
            ConstValue::Buffer(bytes) => format!("buffer: {}", quote_buffer(bytes)),
            ConstValue::String(string) => format!("string: {}", quote_string(string)),
        }
    }
}

macro_rules! display_via_repr {
    ($($node:ty),* $(,)?) => {
        $(
            impl fmt::Display for $node {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.repr(0))
                }
            }
        )*
    };
}

display_via_repr!(
    Module,
    Import,
    UserType,
    EnumType,
    Body,
    Expression,
    Declaration,
    Function,
    Identifier,
);

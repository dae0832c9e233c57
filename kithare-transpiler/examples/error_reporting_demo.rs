//! Error reporting demonstration
//!
//! Lowers a small program, then renders the diagnostics for a construct C++
//! cannot express and for a malformed tree.
//!
//! Run with: `cargo run --example error_reporting_demo`

use kithare_ast::{
    BinaryOperation, Body, BodyKind, Call, Comparison, ConstValue, Declaration, Expression,
    ExpressionKind, Function, Identifier, Import, Module, Operator, Span, Statement,
    TypeAnnotation,
};
use kithare_transpiler::{transpile, TranspileError};
use miette::{NamedSource, Report};

const SOURCE: &str = "def main() {\n    int x = 2 ** 8\n}\n";

fn main() {
    println!("Kithare transpiler - error reporting demo\n");

    demo_successful_lowering();
    demo_unsupported_construct();
    demo_malformed_tree();
}

fn span() -> Span {
    Span::new(0, 0)
}

fn expression(kind: ExpressionKind) -> Expression {
    Expression::new(kind, span())
}

fn constant(value: i64) -> Expression {
    expression(ExpressionKind::Constant(ConstValue::Integer(value)))
}

fn main_module(body: Vec<Body>) -> Module {
    let mut module = Module::new(span());
    module
        .imports
        .push(Some(Import::import(["std"], "std", false, span())));
    module
        .functions
        .push(Some(Function::new(["main"], span()).with_body(body)));
    module
}

fn report(error: TranspileError) {
    let report = Report::new(error).with_source_code(NamedSource::new("main.kh", SOURCE));
    println!("{:?}", report);
}

fn demo_successful_lowering() {
    println!("Demo 1: hello world");

    let greet = expression(ExpressionKind::Call(Call {
        expression: Box::new(expression(ExpressionKind::Identifier(Identifier::new([
            "std", "println",
        ])))),
        arguments: vec![Some(expression(ExpressionKind::Constant(
            ConstValue::String("Hello, world!".to_string()),
        )))],
    }));
    let module = main_module(vec![
        Body::from(greet),
        Body::new(
            BodyKind::Statement(Statement::Return(Some(Box::new(constant(0))))),
            span(),
        ),
    ]);

    match transpile(&module) {
        Ok(cpp) => println!("{}", cpp),
        Err(error) => report(error),
    }
}

fn demo_unsupported_construct() {
    println!("Demo 2: exponentiation has no C++ operator");

    let power = Expression::new(
        ExpressionKind::Binary(BinaryOperation {
            operator: Operator::Pow,
            left: Box::new(constant(2)),
            right: Box::new(constant(8)),
        }),
        Span::new(25, 31),
    );
    let declaration = Declaration::new("x", span())
        .with_type(TypeAnnotation::new(Identifier::new(["int"])))
        .with_initializer(power);
    let module = main_module(vec![Body::from(expression(ExpressionKind::Declaration(
        declaration,
    )))]);

    if let Err(error) = transpile(&module) {
        report(error);
    }
}

fn demo_malformed_tree() {
    println!("Demo 3: comparison missing an operand");

    let comparison = Expression::new(
        ExpressionKind::Comparison(Comparison {
            operators: vec![Operator::Less, Operator::Less],
            values: vec![Some(constant(1)), Some(constant(2))],
        }),
        Span::new(17, 31),
    );
    let module = main_module(vec![Body::from(comparison)]);

    if let Err(error) = transpile(&module) {
        report(error);
    }
}

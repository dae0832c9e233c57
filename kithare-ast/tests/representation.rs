// Representation of minimal trees through the public API
// Every node shape with its optional parts left out must render without failing

use kithare_ast::*;
use pretty_assertions::assert_eq;

fn span() -> Span {
    Span::new(0, 0)
}

fn ident(name: &str) -> Box<Expression> {
    Box::new(Expression::new(
        ExpressionKind::Identifier(Identifier::new([name])),
        span(),
    ))
}

fn minimal_expressions() -> Vec<(ExpressionKind, &'static str)> {
    vec![
        (ExpressionKind::Identifier(Identifier::new(Vec::<String>::new())), ""),
        (
            ExpressionKind::Unary(UnaryOperation {
                operator: Operator::Not,
                operand: ident("x"),
            }),
            "unary expression:\n\toperator: not\n\trvalue:\n\t\tx",
        ),
        (
            ExpressionKind::Comparison(Comparison {
                operators: vec![],
                values: vec![],
            }),
            "comparison expression:\n\toperation(s): \n\tvalue(s):",
        ),
        (
            ExpressionKind::Subscript(Subscript {
                expression: ident("xs"),
                arguments: vec![],
            }),
            "subscript:\n\texpression:\n\t\txs",
        ),
        (
            ExpressionKind::Declaration(Declaration::new("d", span())),
            "declare:\n\tname: d",
        ),
        (
            ExpressionKind::Function(Function::lambda(span())),
            "function:\n\tstatic: false\n\taccess: public\n\tname: (lambda)\n\targument(s): [none]\n\tbody:",
        ),
        (
            ExpressionKind::Scope(Scope {
                expression: ident("s"),
                identifiers: vec![],
            }),
            "scoping ():\n\texpression:\n\t\ts",
        ),
        (ExpressionKind::Tuple(Tuple::default()), "tuple: [no elements]"),
        (ExpressionKind::List(List::default()), "list: [no elements]"),
        (ExpressionKind::Dict(Dict::default()), "dict: [no pairs]"),
    ]
}

#[test]
fn test_minimal_expressions_render() {
    for (kind, expected) in minimal_expressions() {
        let expression = Expression::new(kind, span());
        assert_eq!(represent(&expression), expected);
    }
}

#[test]
fn test_minimal_top_level_nodes_render() {
    assert_eq!(represent(&Module::default()), "ast:");
    assert_eq!(
        represent(&UserType::new(UserTypeKind::Class, Vec::<String>::new(), span())),
        "class:\n\tname: \n\tmember(s):"
    );
    assert_eq!(
        represent(&EnumType::new(Vec::<String>::new(), span())),
        "enum:\n\tname: \n\tmember(s):"
    );
    assert_eq!(
        represent(&Import::include(Vec::<String>::new(), false, span())),
        "include:\n\ttype: absolute\n\tpath: "
    );
}

#[test]
fn test_deep_nesting_indents_by_level() {
    let innermost = Body::new(
        BodyKind::Statement(Statement::Return(Some(ident("done")))),
        span(),
    );
    let inner_loop = Body::new(
        BodyKind::While(While {
            condition: ident("inner"),
            body: vec![Some(innermost)],
        }),
        span(),
    );
    let outer_loop = Body::new(
        BodyKind::DoWhile(DoWhile {
            body: vec![Some(inner_loop)],
            condition: ident("outer"),
        }),
        span(),
    );

    let rendered = represent(&outer_loop);
    let done_line = rendered
        .lines()
        .find(|line| line.trim() == "done")
        .expect("return value is rendered");
    assert_eq!(done_line.chars().take_while(|c| *c == '\t').count(), 5);
    assert!(!rendered.ends_with('\n'));
}

#[test]
fn test_tree_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Module>();
    assert_send_sync::<Expression>();
}
